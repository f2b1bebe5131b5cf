//! Structured item tag data (NBT values).
//!
//! Both editions attach an optional compound tag to an item stack. The bridge
//! never interprets most of it; it only needs deep equality and enough
//! construction helpers to build display names and lore.

use std::collections::HashMap;

/// A compound tag: map of name -> tag.
pub type NbtCompound = HashMap<String, NbtTag>;

/// Represents any NBT value.
#[derive(Debug, Clone, PartialEq)]
pub enum NbtTag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(Vec<NbtTag>),
    Compound(NbtCompound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl NbtTag {
    pub fn as_string(&self) -> Option<&str> {
        match self {
            NbtTag::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&NbtCompound> {
        match self {
            NbtTag::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[NbtTag]> {
        match self {
            NbtTag::List(v) => Some(v),
            _ => None,
        }
    }
}

/// Fluent builder for compound tags.
#[derive(Debug, Default, Clone)]
pub struct CompoundBuilder {
    entries: NbtCompound,
}

impl CompoundBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(mut self, name: impl Into<String>, tag: NbtTag) -> Self {
        self.entries.insert(name.into(), tag);
        self
    }

    pub fn put_string(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.put(name, NbtTag::String(value.into()))
    }

    pub fn put_string_list<I, S>(self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = values
            .into_iter()
            .map(|s| NbtTag::String(s.into()))
            .collect();
        self.put(name, NbtTag::List(list))
    }

    pub fn put_compound(self, name: impl Into<String>, compound: NbtCompound) -> Self {
        self.put(name, NbtTag::Compound(compound))
    }

    pub fn build(self) -> NbtCompound {
        self.entries
    }
}
