pub mod panel;
pub mod repository;
pub mod study;
pub mod utils;

pub use panel::PackDetailPage;
