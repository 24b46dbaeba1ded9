use crate::state::auth::use_auth;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let target = move || {
        if auth.get().is_authenticated {
            "/dashboard"
        } else {
            "/login"
        }
    };
    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col items-center justify-center px-4">
            <h1 class="text-4xl font-bold text-gray-900 mb-4">"Ultralearning"</h1>
            <p class="text-gray-600 mb-8 text-center max-w-md">
                "Flashcards, AI study chat and progress tracking in one place."
            </p>
            <a
                href=target
                class="bg-indigo-600 text-white px-6 py-3 rounded-md text-sm font-medium hover:bg-indigo-700"
            >
                "Get started"
            </a>
        </div>
    }
}
