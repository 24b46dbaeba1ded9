pub mod chat;
pub mod chat_room;
pub mod dashboard;
pub mod engagement;
pub mod home;
pub mod learning;
pub mod login;
pub mod pack_detail;
pub mod profile;
pub mod register;

pub use chat::ChatPage;
pub use chat_room::ChatRoomPage;
pub use dashboard::DashboardPage;
pub use engagement::EngagementPage;
pub use home::HomePage;
pub use learning::LearningPage;
pub use login::LoginPage;
pub use pack_detail::PackDetailPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
