//! Console commands that stand in for translated server and client packets.
//!
//! ```text
//! open <window id> <window type> [title...]
//! close <window id>
//! pick <item>
//! gamemode <mode>
//! held <hotbar slot>
//! slot <slot> <item> [count]             player inventory slot
//! slot <window id> <slot> <item> [count] container slot
//! move <x> <y> <z>
//! ```

use mc_bridge_inventory::{ItemRegistry, ItemStack, SessionEvent};
use mc_bridge_proto::types::{BlockPos, GameMode, WindowType};

/// Parse one console line into a session event.
pub fn parse_command(line: &str, registry: &ItemRegistry) -> Result<SessionEvent, String> {
    let mut parts = line.split_whitespace();
    let name = parts.next().ok_or("empty command")?;
    let args: Vec<&str> = parts.collect();

    match name {
        "open" => {
            let [id, kind, title @ ..] = args.as_slice() else {
                return Err("usage: open <window id> <window type> [title]".into());
            };
            let window_type: WindowType = kind.parse()?;
            Ok(SessionEvent::OpenWindow {
                window_id: parse_num(id, "window id")?,
                window_type,
                title: title.join(" "),
            })
        }
        "close" => match args.as_slice() {
            [id] => Ok(SessionEvent::CloseWindow(parse_num(id, "window id")?)),
            _ => Err("usage: close <window id>".into()),
        },
        "pick" => match args.as_slice() {
            [item] => Ok(SessionEvent::PickItem(qualify(item))),
            _ => Err("usage: pick <item>".into()),
        },
        "gamemode" => match args.as_slice() {
            [mode] => Ok(SessionEvent::SetGameMode(mode.parse::<GameMode>()?)),
            _ => Err("usage: gamemode <mode>".into()),
        },
        "held" => match args.as_slice() {
            [slot] => Ok(SessionEvent::SetHeldSlot(parse_num(slot, "hotbar slot")?)),
            _ => Err("usage: held <0-8>".into()),
        },
        "slot" => parse_slot(&args, registry),
        "move" => match args.as_slice() {
            [x, y, z] => Ok(SessionEvent::PlayerMoved(BlockPos::new(
                parse_num(x, "x")?,
                parse_num(y, "y")?,
                parse_num(z, "z")?,
            ))),
            _ => Err("usage: move <x> <y> <z>".into()),
        },
        other => Err(format!("unknown command: {other}")),
    }
}

fn parse_slot(args: &[&str], registry: &ItemRegistry) -> Result<SessionEvent, String> {
    // The item is the first argument that is not a number.
    let item_at = args
        .iter()
        .position(|a| a.parse::<i64>().is_err())
        .ok_or("usage: slot [window id] <slot> <item> [count]")?;
    let (window_id, slot) = match &args[..item_at] {
        [slot] => (0, parse_num(slot, "slot")?),
        [window, slot] => (parse_num(window, "window id")?, parse_num(slot, "slot")?),
        _ => return Err("usage: slot [window id] <slot> <item> [count]".into()),
    };
    let count = match &args[item_at + 1..] {
        [] => 1,
        [count] => parse_num(count, "count")?,
        _ => return Err("too many arguments".into()),
    };

    let identifier = qualify(args[item_at]);
    let entry = registry
        .get(&identifier)
        .ok_or_else(|| format!("unknown item: {identifier}"))?;
    Ok(SessionEvent::SetSlot {
        window_id,
        slot,
        item: ItemStack::new(entry.java_id, count),
    })
}

fn parse_num<T: std::str::FromStr>(value: &str, what: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("invalid {what}: {value}"))
}

fn qualify(identifier: &str) -> String {
    if identifier.contains(':') {
        identifier.to_string()
    } else {
        format!("minecraft:{identifier}")
    }
}
