use crate::models::conversation::{ Conversation, MessageContent, Role };

const BANNER_WIDTH: usize = 36;

pub fn role_banner(role: Role) -> String {
    let rule = "#".repeat(BANNER_WIDTH);
    format!("{}\n{}\n{}", rule, role.as_str().to_uppercase(), rule)
}

pub fn render_content(content: &MessageContent) -> Result<String, serde_json::Error> {
    match content {
        MessageContent::Text(text) => Ok(text.clone()),
        // serde_json's pretty printer indents with two spaces
        MessageContent::Structured(record) => serde_json::to_string_pretty(record),
    }
}

/// Flattens a conversation into the plain-text paste body: a banner per
/// message followed by its content, every part separated by a blank line.
pub fn format_conversation(conversation: &Conversation) -> Result<String, serde_json::Error> {
    let mut parts = Vec::with_capacity(conversation.messages.len() * 2);
    for msg in &conversation.messages {
        parts.push(role_banner(msg.role));
        parts.push(render_content(&msg.content)?);
    }
    Ok(parts.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::conversation::Message;
    use serde_json::{ json, Map, Value as JsonValue };

    fn record(value: JsonValue) -> Map<String, JsonValue> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_role_banner() {
        let banner = role_banner(Role::User);
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "#".repeat(36));
        assert_eq!(lines[1], "USER");
        assert_eq!(lines[2], "#".repeat(36));
    }

    #[test]
    fn test_format_plain_conversation() {
        let conversation = Conversation::new(
            "greeting",
            vec![Message::new(Role::User, "Hello"), Message::new(Role::Assistant, "Hi there!")]
        );
        let rule = "#".repeat(36);
        let expected = format!(
            "{rule}\nUSER\n{rule}\n\nHello\n\n{rule}\nASSISTANT\n{rule}\n\nHi there!",
            rule = rule
        );
        assert_eq!(format_conversation(&conversation).unwrap(), expected);
    }

    #[test]
    fn test_banners_follow_message_order() {
        let roles = [Role::System, Role::User, Role::Assistant, Role::Tool, Role::User];
        let messages = roles
            .iter()
            .map(|role| Message::new(*role, "body"))
            .collect();
        let output = format_conversation(&Conversation::new("t", messages)).unwrap();

        let labels: Vec<&str> = output
            .lines()
            .filter(|line| ["SYSTEM", "USER", "ASSISTANT", "TOOL"].contains(line))
            .collect();
        assert_eq!(labels, vec!["SYSTEM", "USER", "ASSISTANT", "TOOL", "USER"]);
    }

    #[test]
    fn test_structured_content_is_pretty_printed() {
        let payload = record(json!({ "name": "lookup", "args": { "id": 7, "tags": ["a", "b"] } }));
        let conversation = Conversation::new(
            "tools",
            vec![Message::new(Role::Function, payload.clone())]
        );
        let output = format_conversation(&conversation).unwrap();
        let body = output.split("\n\n").nth(1).unwrap();

        assert!(body.starts_with("{\n  \"name\": \"lookup\",\n  \"args\": {\n    \"id\": 7,"));
        let reparsed: JsonValue = serde_json::from_str(body).unwrap();
        assert_eq!(reparsed, JsonValue::Object(payload));
    }

    #[test]
    fn test_empty_conversation() {
        let conversation = Conversation::new("empty", Vec::new());
        assert_eq!(format_conversation(&conversation).unwrap(), "");
    }
}
