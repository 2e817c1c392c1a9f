use serde::{ Serialize, Deserialize };
use serde_json::{ Map, Value as JsonValue };
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Function,
    Tool,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Function => "function",
            Role::Tool => "tool",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Message body as stored by the host: either plain text or a structured record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Structured(Map<String, JsonValue>),
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        MessageContent::Text(text.to_string())
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        MessageContent::Text(text)
    }
}

impl From<Map<String, JsonValue>> for MessageContent {
    fn from(record: Map<String, JsonValue>) -> Self {
        MessageContent::Structured(record)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    #[serde(rename = "message")]
    pub content: MessageContent,
}

impl Message {
    pub fn new(role: Role, content: impl Into<MessageContent>) -> Self {
        Self { role, content: content.into() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Conversation {
    pub title: String,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(title: impl Into<String>, messages: Vec<Message>) -> Self {
        Self { title: title.into(), messages }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConversationMeta {
    pub title: String,
}

/// Shape of a conversation as exported by the host application.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConversationData {
    pub conversation: ConversationMeta,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl From<ConversationData> for Conversation {
    fn from(data: ConversationData) -> Self {
        Conversation {
            title: data.conversation.title,
            messages: data.messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_host_export() {
        let raw = json!({
            "conversation": { "title": "Rust questions" },
            "messages": [
                { "role": "user", "message": "What is a lifetime?" },
                { "role": "assistant", "message": { "answer": "a scope", "confidence": 0.9 } }
            ]
        });
        let data: ConversationData = serde_json::from_value(raw).unwrap();
        let conversation = Conversation::from(data);

        assert_eq!(conversation.title, "Rust questions");
        assert_eq!(conversation.messages.len(), 2);
        assert_eq!(conversation.messages[0].role, Role::User);
        assert_eq!(conversation.messages[0].content, MessageContent::from("What is a lifetime?"));
        match &conversation.messages[1].content {
            MessageContent::Structured(record) => {
                assert_eq!(record.get("answer"), Some(&json!("a scope")));
            }
            other => panic!("expected structured content, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let raw = json!({ "role": "narrator", "message": "hi" });
        assert!(serde_json::from_value::<Message>(raw).is_err());
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }
}
