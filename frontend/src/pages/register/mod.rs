pub mod panel;

pub use panel::RegisterPage;
