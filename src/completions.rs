use serde_json::{ Map, Value as JsonValue };

use crate::command::{ ExpireTime, VISIBILITY_LABELS };

pub const COMMAND_LEADER: &str = "/";
pub const COMMAND_NAME: &str = "pastebin";

pub fn command_with_leader(command: &str) -> String {
    format!("{}{}", COMMAND_LEADER, command)
}

/// `{item: null, ...}`, the leaf shape the host's completer expects.
fn list_to_completion_map<'a>(items: impl Iterator<Item = &'a str>) -> JsonValue {
    JsonValue::Object(
        items.map(|item| (item.to_string(), JsonValue::Null)).collect::<Map<_, _>>()
    )
}

/// Completion tree: command, then visibility label, then expire code.
pub fn shell_completions() -> JsonValue {
    let by_visibility = VISIBILITY_LABELS.iter()
        .map(|(label, _)| (label.to_string(), list_to_completion_map(ExpireTime::codes())))
        .collect::<Map<_, _>>();
    let mut commands = Map::new();
    commands.insert(command_with_leader(COMMAND_NAME), JsonValue::Object(by_visibility));
    JsonValue::Object(commands)
}
