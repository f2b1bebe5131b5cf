//! Whether two item stacks are the same item for merging and matching.
//!
//! Comparisons only happen within one representation. An empty or absent
//! stack never stacks with anything, another empty stack included; slot
//! diffing relies on that.

use mc_bridge_proto::item_stack::{BedrockItem, ItemCompare, JavaItem};

use crate::item::ItemStack;

/// A borrowed item stack in one of its three representations.
#[derive(Debug, Clone, Copy)]
pub enum StackRef<'a> {
    Internal(&'a ItemStack),
    Upstream(Option<&'a BedrockItem>),
    Downstream(Option<&'a JavaItem>),
}

impl<'a> From<&'a ItemStack> for StackRef<'a> {
    fn from(stack: &'a ItemStack) -> Self {
        StackRef::Internal(stack)
    }
}

impl<'a> From<&'a BedrockItem> for StackRef<'a> {
    fn from(stack: &'a BedrockItem) -> Self {
        StackRef::Upstream(Some(stack))
    }
}

impl<'a> From<&'a JavaItem> for StackRef<'a> {
    fn from(stack: &'a JavaItem) -> Self {
        StackRef::Downstream(Some(stack))
    }
}

/// Whether `a` and `b` would stack together.
///
/// Pairs from different representations are never stackable.
pub fn stackable<'a, 'b>(a: impl Into<StackRef<'a>>, b: impl Into<StackRef<'b>>) -> bool {
    match (a.into(), b.into()) {
        (StackRef::Internal(a), StackRef::Internal(b)) => internal(a, b),
        (StackRef::Upstream(Some(a)), StackRef::Upstream(Some(b))) => upstream(a, b),
        (StackRef::Downstream(Some(a)), StackRef::Downstream(Some(b))) => downstream(a, b),
        // Absent stacks and mixed representations.
        _ => false,
    }
}

fn internal(a: &ItemStack, b: &ItemStack) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.java_id == b.java_id && a.tag == b.tag
}

fn upstream(a: &BedrockItem, b: &BedrockItem) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.equals(b, ItemCompare::STACKING)
}

fn downstream(a: &JavaItem, b: &JavaItem) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.id == b.id && a.tag == b.tag
}
