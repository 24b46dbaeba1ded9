mod auth;
mod chat;
pub mod client;
mod dashboard;
mod engagement;
mod learning;
pub mod types;

pub use client::*;
pub use types::*;
