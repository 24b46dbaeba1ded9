pub mod events;
pub mod reducer;
#[cfg(target_arch = "wasm32")]
pub mod socket;

pub use events::{ClientEvent, OnlineUser, ServerEvent};
pub use reducer::{merge_messages, RoomState};
