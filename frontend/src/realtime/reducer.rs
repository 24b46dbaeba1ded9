//! Pure state transitions for a chat room screen.
//!
//! Push frames and REST responses both land here, so snapshots arriving out
//! of order or overlapping with an optimistic fetch collapse into one
//! consistent, id-deduplicated conversation instead of clobbering each other.

use crate::api::types::ChatMessage;

use super::events::{OnlineUser, ServerEvent};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomState {
    pub messages: Vec<ChatMessage>,
    pub online_users: Vec<OnlineUser>,
}

impl RoomState {
    pub fn apply(&mut self, event: ServerEvent) {
        match event {
            ServerEvent::MessageUpdate { messages } => {
                self.messages = merge_messages(std::mem::take(&mut self.messages), messages);
            }
            ServerEvent::UserJoined(user) => {
                if !self.online_users.iter().any(|u| u.id == user.id) {
                    self.online_users.push(user);
                }
            }
            ServerEvent::UserLeft { id } => {
                self.online_users.retain(|u| u.id != id);
            }
        }
    }

    /// Folds a REST conversation (initial load, `post_message` reply) into
    /// the same merge path the push channel uses.
    pub fn merge_conversation(&mut self, messages: Vec<ChatMessage>) {
        self.messages = merge_messages(std::mem::take(&mut self.messages), messages);
    }
}

/// Merges two message lists into one ordered by `(timestamp, id)`. A message
/// id appearing in both lists takes its newer copy, so edits and status
/// changes from a later snapshot win without duplicating the row.
pub fn merge_messages(existing: Vec<ChatMessage>, incoming: Vec<ChatMessage>) -> Vec<ChatMessage> {
    let mut merged = existing;
    for message in incoming {
        match merged.iter_mut().find(|m| m.id == message.id) {
            Some(slot) => *slot = message,
            None => merged.push(message),
        }
    }
    merged.sort_by(|a, b| (a.timestamp, a.id).cmp(&(b.timestamp, b.id)));
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn message(id: i64, minute: u32, content: &str) -> ChatMessage {
        ChatMessage {
            id,
            room_id: 7,
            sender_id: 1,
            content: content.into(),
            role: "user".into(),
            is_ai: false,
            message_type: "text".into(),
            status: "sent".into(),
            timestamp: NaiveDate::from_ymd_opt(2025, 1, 2)
                .unwrap()
                .and_hms_opt(9, minute, 0),
        }
    }

    #[test]
    fn merge_orders_by_timestamp_then_id() {
        let merged = merge_messages(
            vec![message(2, 5, "second"), message(1, 1, "first")],
            vec![message(3, 3, "middle")],
        );
        let ids: Vec<i64> = merged.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn merge_deduplicates_by_id_and_keeps_the_newer_copy() {
        let mut edited = message(2, 5, "second (edited)");
        edited.status = "edited".into();
        let merged = merge_messages(
            vec![message(1, 1, "first"), message(2, 5, "second")],
            vec![edited.clone()],
        );
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1], edited);
    }

    #[test]
    fn overlapping_snapshots_collapse_into_one_conversation() {
        let mut state = RoomState::default();
        state.merge_conversation(vec![message(1, 1, "a"), message(2, 2, "b")]);
        state.apply(ServerEvent::MessageUpdate {
            messages: vec![message(2, 2, "b"), message(3, 3, "c")],
        });
        let ids: Vec<i64> = state.messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn messages_without_timestamps_sort_first() {
        let mut untimed = message(9, 0, "pending");
        untimed.timestamp = None;
        let merged = merge_messages(vec![message(1, 1, "a")], vec![untimed]);
        assert_eq!(merged[0].id, 9);
    }

    #[test]
    fn presence_set_adds_once_and_removes_on_leave() {
        let mut state = RoomState::default();
        let bob = OnlineUser {
            id: 3,
            username: "bob".into(),
        };
        state.apply(ServerEvent::UserJoined(bob.clone()));
        state.apply(ServerEvent::UserJoined(bob));
        assert_eq!(state.online_users.len(), 1);

        state.apply(ServerEvent::UserLeft { id: 3 });
        assert!(state.online_users.is_empty());

        // leaving twice is a no-op
        state.apply(ServerEvent::UserLeft { id: 3 });
        assert!(state.online_users.is_empty());
    }
}
