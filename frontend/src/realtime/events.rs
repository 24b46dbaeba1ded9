//! Wire format of the chat push channel.
//!
//! Every frame is a JSON envelope `{"event": ..., "data": ...}`. Frames with
//! an unrecognized event name are dropped so the server can grow new event
//! types without breaking older clients.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::types::ChatMessage;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    event: String,
    #[serde(default)]
    data: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnlineUser {
    pub id: i64,
    #[serde(default)]
    pub username: String,
}

/// Events pushed by the server into a joined room.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// Fresh snapshot of the room's conversation.
    MessageUpdate { messages: Vec<ChatMessage> },
    UserJoined(OnlineUser),
    UserLeft { id: i64 },
}

impl ServerEvent {
    /// Parses one frame; `None` means the frame was malformed or carried an
    /// event this client does not know.
    pub fn parse(raw: &str) -> Option<ServerEvent> {
        let envelope: Envelope = serde_json::from_str(raw).ok()?;
        match envelope.event.as_str() {
            "message_update" => {
                #[derive(Deserialize)]
                struct Data {
                    #[serde(default)]
                    messages: Vec<ChatMessage>,
                }
                let data: Data = serde_json::from_value(envelope.data).ok()?;
                Some(ServerEvent::MessageUpdate {
                    messages: data.messages,
                })
            }
            "user_joined" => {
                let user: OnlineUser = serde_json::from_value(envelope.data).ok()?;
                Some(ServerEvent::UserJoined(user))
            }
            "user_left" => {
                #[derive(Deserialize)]
                struct Data {
                    id: i64,
                }
                let data: Data = serde_json::from_value(envelope.data).ok()?;
                Some(ServerEvent::UserLeft { id: data.id })
            }
            _ => None,
        }
    }
}

/// Events the client sends upstream.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    JoinRoom { room_id: i64 },
}

impl ClientEvent {
    pub fn to_frame(&self) -> String {
        let envelope = match self {
            ClientEvent::JoinRoom { room_id } => Envelope {
                event: "join_room".into(),
                data: serde_json::json!({ "room_id": room_id }),
            },
        };
        // Envelope serialization cannot fail: plain string plus Value.
        serde_json::to_string(&envelope).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_message_update_frames() {
        let raw = r#"{
            "event": "message_update",
            "data": { "messages": [{
                "id": 1, "room_id": 7, "sender_id": 2,
                "content": "hi", "timestamp": "2025-01-02T09:00:00"
            }]}
        }"#;
        match ServerEvent::parse(raw) {
            Some(ServerEvent::MessageUpdate { messages }) => {
                assert_eq!(messages.len(), 1);
                assert_eq!(messages[0].content, "hi");
                assert_eq!(messages[0].role, "user");
            }
            other => panic!("unexpected parse result: {other:?}"),
        }
    }

    #[test]
    fn parses_presence_frames() {
        let joined = r#"{ "event": "user_joined", "data": { "id": 3, "username": "bob" } }"#;
        assert_eq!(
            ServerEvent::parse(joined),
            Some(ServerEvent::UserJoined(OnlineUser {
                id: 3,
                username: "bob".into()
            }))
        );

        let left = r#"{ "event": "user_left", "data": { "id": 3 } }"#;
        assert_eq!(ServerEvent::parse(left), Some(ServerEvent::UserLeft { id: 3 }));
    }

    #[test]
    fn ignores_unknown_and_malformed_frames() {
        assert_eq!(ServerEvent::parse(r#"{ "event": "typing", "data": {} }"#), None);
        assert_eq!(ServerEvent::parse("not json"), None);
        assert_eq!(ServerEvent::parse(r#"{ "data": {} }"#), None);
    }

    #[test]
    fn join_frame_carries_the_room_id() {
        let frame = ClientEvent::JoinRoom { room_id: 7 }.to_frame();
        let value: serde_json::Value = serde_json::from_str(&frame).unwrap();
        assert_eq!(value["event"], "join_room");
        assert_eq!(value["data"]["room_id"], 7);
    }
}
