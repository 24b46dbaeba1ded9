use crate::{
    api::RegisterRequest,
    pages::login::utils,
    state::auth,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (registered, set_registered) = create_signal(false);

    let register_action = auth::use_register_action();
    let pending = register_action.pending();

    {
        create_effect(move |_| {
            if let Some(result) = register_action.value().get() {
                match result {
                    Ok(_) => {
                        set_error.set(None);
                        set_registered.set(true);
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
        let mail = email.get_untracked();
        let pword = password.get_untracked();

        if let Err(msg) = utils::validate_registration(&uname, &mail, &pword) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);

        register_action.dispatch(RegisterRequest {
            username: uname,
            email: mail,
            password: pword,
            role: "user".into(),
        });
    };

    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow p-8">
                <h1 class="text-2xl font-bold text-gray-900 mb-6">"Create account"</h1>
                <Show
                    when=move || registered.get()
                    fallback=move || view! {
                        <div>
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
                                <label class="block text-sm font-medium text-gray-700 mb-1">"Email"</label>
                                <input
                                    type="email"
                                    class="w-full border border-gray-300 rounded-md px-3 py-2 mb-4"
                                    prop:value=email
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
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
                                    {move || if pending.get() { "Creating..." } else { "Create account" }}
                                </button>
                            </form>
                        </div>
                    }
                >
                    <div class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded text-sm">
                        "Account created. "
                        <a href="/login" class="text-indigo-600 hover:underline">"Sign in"</a>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn register_page_renders_the_form() {
        let html = render_to_string(move || view! { <RegisterPage /> });
        assert!(html.contains("Create account"));
        assert!(html.contains("Email"));
    }
}
