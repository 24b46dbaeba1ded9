use leptos::*;

use crate::api::ChatMessage;
use crate::realtime::{RoomState, ServerEvent};

/// Reactive wrapper around [`RoomState`]. REST responses and push frames
/// both funnel through it, so every source of messages takes the same merge
/// path.
#[derive(Clone, Copy)]
pub struct RoomViewModel {
    state: RwSignal<RoomState>,
}

impl RoomViewModel {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(RoomState::default()),
        }
    }

    pub fn apply(&self, event: ServerEvent) {
        self.state.update(|state| state.apply(event));
    }

    pub fn merge_conversation(&self, messages: Vec<ChatMessage>) {
        self.state.update(|state| state.merge_conversation(messages));
    }

    pub fn messages(&self) -> Signal<Vec<ChatMessage>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.messages.clone()))
    }

    pub fn online_users(&self) -> Signal<Vec<crate::realtime::OnlineUser>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.online_users.clone()))
    }
}

impl Default for RoomViewModel {
    fn default() -> Self {
        Self::new()
    }
}
