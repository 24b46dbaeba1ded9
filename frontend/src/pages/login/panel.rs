use crate::{
    api::LoginRequest,
    pages::login::utils,
    state::auth,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let login_action = auth::use_login_action();
    let pending = login_action.pending();

    {
        create_effect(move |_| {
            if let Some(result) = login_action.value().get() {
                match result {
                    Ok(_) => {
                        set_error.set(None);
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/dashboard");
                        }
                    }
                    Err(err) => set_error.set(Some(err.error)),
                }
            }
        });
    }

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let uname = username.get_untracked();
        let pword = password.get_untracked();

        if let Err(msg) = utils::validate_credentials(&uname, &pword) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);

        login_action.dispatch(LoginRequest {
            username: uname,
            password: pword,
        });
    };

    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow p-8">
                <h1 class="text-2xl font-bold text-gray-900 mb-6">"Sign in"</h1>
                {move || error.get().map(|msg| view! {
                    <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4 text-sm">
                        {msg}
                    </div>
                })}
                <form on:submit=handle_submit>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"Username"</label>
                    <input
                        type="text"
                        class="w-full border border-gray-300 rounded-md px-3 py-2 mb-4"
                        prop:value=username
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                    <label class="block text-sm font-medium text-gray-700 mb-1">"Password"</label>
                    <input
                        type="password"
                        class="w-full border border-gray-300 rounded-md px-3 py-2 mb-6"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="w-full bg-indigo-600 text-white py-2 rounded-md text-sm font-medium hover:bg-indigo-700 disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="text-sm text-gray-600 mt-4">
                    "No account yet? "
                    <a href="/register" class="text-indigo-600 hover:underline">"Register"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_page_renders_the_form() {
        let html = render_to_string(move || view! { <LoginPage /> });
        assert!(html.contains("Sign in"));
        assert!(html.contains("Username"));
        assert!(html.contains("Password"));
        assert!(html.contains("/register"));
    }
}
