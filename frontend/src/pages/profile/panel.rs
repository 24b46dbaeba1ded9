use crate::{
    components::layout::Layout,
    pages::profile::repository,
    state::auth::{use_api_client, use_auth},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = use_api_client();
    let (auth, set_auth) = use_auth();

    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (profile_error, set_profile_error) = create_signal(None::<String>);
    let (profile_saved, set_profile_saved) = create_signal(false);

    let api_clone = api.clone();
    let update_action = create_action(move |input: &(String, String)| {
        let (username, email) = input.clone();
        let api = api_clone.clone();
        async move { repository::update_profile(&api, username, email).await }
    });
    let updating = update_action.pending();

    {
        create_effect(move |_| {
            if let Some(result) = update_action.value().get() {
                match result {
                    Ok(user) => {
                        set_profile_error.set(None);
                        set_profile_saved.set(true);
                        set_username.set(String::new());
                        set_email.set(String::new());
                        set_auth.update(|state| state.user = Some(user));
                    }
                    Err(err) => {
                        set_profile_saved.set(false);
                        set_profile_error.set(Some(err.error));
                    }
                }
            }
        });
    }

    let handle_update = move |ev: SubmitEvent| {
        ev.prevent_default();
        if updating.get_untracked() {
            return;
        }
        set_profile_saved.set(false);
        update_action.dispatch((username.get_untracked(), email.get_untracked()));
    };

    let (old_password, set_old_password) = create_signal(String::new());
    let (new_password, set_new_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (password_error, set_password_error) = create_signal(None::<String>);
    let (password_changed, set_password_changed) = create_signal(false);

    let api_clone = api.clone();
    let password_action = create_action(move |input: &(String, String, String)| {
        let (old_password, new_password, confirm) = input.clone();
        let api = api_clone.clone();
        async move { repository::change_password(&api, old_password, new_password, confirm).await }
    });
    let changing = password_action.pending();

    {
        create_effect(move |_| {
            if let Some(result) = password_action.value().get() {
                match result {
                    Ok(_) => {
                        set_password_error.set(None);
                        set_password_changed.set(true);
                        set_old_password.set(String::new());
                        set_new_password.set(String::new());
                        set_confirm.set(String::new());
                    }
                    Err(err) => {
                        set_password_changed.set(false);
                        set_password_error.set(Some(err.error));
                    }
                }
            }
        });
    }

    let handle_password = move |ev: SubmitEvent| {
        ev.prevent_default();
        if changing.get_untracked() {
            return;
        }
        set_password_changed.set(false);
        password_action.dispatch((
            old_password.get_untracked(),
            new_password.get_untracked(),
            confirm.get_untracked(),
        ));
    };

    view! {
        <Layout>
            <div class="px-4 sm:px-0 max-w-2xl">
                <h2 class="text-2xl font-bold text-gray-900 mb-6">"Your profile"</h2>

                <div class="bg-white rounded-lg shadow p-4 mb-6">
                    {move || {
                        let state = auth.get();
                        match state.user {
                            Some(user) => view! {
                                <div>
                                    <p class="font-medium text-gray-900">{user.username.clone()}</p>
                                    <p class="text-sm text-gray-600">{user.email.clone()}</p>
                                </div>
                            }.into_view(),
                            None => view! {
                                <p class="text-sm text-gray-400">"Not signed in."</p>
                            }.into_view(),
                        }
                    }}
                </div>

                <form class="bg-white rounded-lg shadow p-4 mb-6" on:submit=handle_update>
                    <h3 class="font-semibold text-gray-900 mb-3">"Update details"</h3>
                    {move || profile_error.get().map(|msg| view! {
                        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-3 text-sm">
                            {msg}
                        </div>
                    })}
                    <Show when=move || profile_saved.get()>
                        <div class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded mb-3 text-sm">
                            "Profile updated."
                        </div>
                    </Show>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"New username"</label>
                    <input
                        type="text"
                        class="w-full border border-gray-300 rounded-md px-3 py-2 mb-3"
                        prop:value=username
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                    <label class="block text-sm font-medium text-gray-700 mb-1">"New email"</label>
                    <input
                        type="email"
                        class="w-full border border-gray-300 rounded-md px-3 py-2 mb-4"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="bg-indigo-600 text-white px-4 py-2 rounded-md text-sm font-medium hover:bg-indigo-700 disabled:opacity-50"
                        disabled=move || updating.get()
                    >
                        "Save"
                    </button>
                </form>

                <form class="bg-white rounded-lg shadow p-4" on:submit=handle_password>
                    <h3 class="font-semibold text-gray-900 mb-3">"Change password"</h3>
                    {move || password_error.get().map(|msg| view! {
                        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-3 text-sm">
                            {msg}
                        </div>
                    })}
                    <Show when=move || password_changed.get()>
                        <div class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded mb-3 text-sm">
                            "Password changed."
                        </div>
                    </Show>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"Current password"</label>
                    <input
                        type="password"
                        class="w-full border border-gray-300 rounded-md px-3 py-2 mb-3"
                        prop:value=old_password
                        on:input=move |ev| set_old_password.set(event_target_value(&ev))
                    />
                    <label class="block text-sm font-medium text-gray-700 mb-1">"New password"</label>
                    <input
                        type="password"
                        class="w-full border border-gray-300 rounded-md px-3 py-2 mb-3"
                        prop:value=new_password
                        on:input=move |ev| set_new_password.set(event_target_value(&ev))
                    />
                    <label class="block text-sm font-medium text-gray-700 mb-1">"Confirm new password"</label>
                    <input
                        type="password"
                        class="w-full border border-gray-300 rounded-md px-3 py-2 mb-4"
                        prop:value=confirm
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="bg-indigo-600 text-white px-4 py-2 rounded-md text-sm font-medium hover:bg-indigo-700 disabled:opacity-50"
                        disabled=move || changing.get()
                    >
                        "Change password"
                    </button>
                </form>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, sample_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn profile_page_shows_the_current_user_and_forms() {
        let html = render_to_string(move || {
            provide_auth(Some(sample_user()));
            view! { <ProfilePage /> }
        });
        assert!(html.contains("alice"));
        assert!(html.contains("Update details"));
        assert!(html.contains("Change password"));
    }
}
