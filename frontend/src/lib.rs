use leptos::*;
use leptos_router::*;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod realtime;
pub mod session;
pub mod state;
pub mod utils;

#[cfg(not(target_arch = "wasm32"))]
pub mod test_support;

use pages::{
    ChatPage, ChatRoomPage, DashboardPage, EngagementPage, HomePage, LearningPage, LoginPage,
    PackDetailPage, ProfilePage, RegisterPage,
};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <crate::state::auth::AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/register" view=RegisterPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/learning" view=ProtectedLearning/>
                    <Route path="/learning/packs/:id" view=ProtectedPackDetail/>
                    <Route path="/chat" view=ProtectedChat/>
                    <Route path="/chat/rooms/:id" view=ProtectedChatRoom/>
                    <Route path="/engagement" view=ProtectedEngagement/>
                    <Route path="/profile" view=ProtectedProfile/>
                </Routes>
            </Router>
        </crate::state::auth::AuthProvider>
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("starting ultralearning frontend");

    // Kick off runtime config load from ./config.json (non-blocking).
    leptos::spawn_local(async move {
        config::init().await;
        log::debug!("runtime config initialized");
    });

    mount_to_body(App);
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <crate::components::guard::RequireAuth><DashboardPage/></crate::components::guard::RequireAuth> }
}

#[component]
fn ProtectedLearning() -> impl IntoView {
    view! { <crate::components::guard::RequireAuth><LearningPage/></crate::components::guard::RequireAuth> }
}

#[component]
fn ProtectedPackDetail() -> impl IntoView {
    view! { <crate::components::guard::RequireAuth><PackDetailPage/></crate::components::guard::RequireAuth> }
}

#[component]
fn ProtectedChat() -> impl IntoView {
    view! { <crate::components::guard::RequireAuth><ChatPage/></crate::components::guard::RequireAuth> }
}

#[component]
fn ProtectedChatRoom() -> impl IntoView {
    view! { <crate::components::guard::RequireAuth><ChatRoomPage/></crate::components::guard::RequireAuth> }
}

#[component]
fn ProtectedEngagement() -> impl IntoView {
    view! { <crate::components::guard::RequireAuth><EngagementPage/></crate::components::guard::RequireAuth> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <crate::components::guard::RequireAuth><ProfilePage/></crate::components::guard::RequireAuth> }
}
