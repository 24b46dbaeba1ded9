use crate::{
    api::ApiError,
    components::layout::{Layout, LoadingSpinner},
    pages::chat::repository,
    state::auth::use_api_client,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn ChatPage() -> impl IntoView {
    let api = use_api_client();

    let api_clone = api.clone();
    let rooms_resource = create_resource(
        || (),
        move |_| {
            let api = api_clone.clone();
            async move { repository::fetch_rooms(&api).await }
        },
    );

    let (name, set_name) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<ApiError>);

    let api_clone = api.clone();
    let create_action = create_action(move |input: &(String, String)| {
        let (name, description) = input.clone();
        let api = api_clone.clone();
        async move { repository::create_room(&api, name, description).await }
    });
    let pending = create_action.pending();

    {
        create_effect(move |_| {
            if let Some(result) = create_action.value().get() {
                match result {
                    Ok(_) => {
                        set_error.set(None);
                        set_name.set(String::new());
                        set_description.set(String::new());
                        rooms_resource.refetch();
                    }
                    Err(err) => set_error.set(Some(err)),
                }
            }
        });
    }

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        create_action.dispatch((name.get_untracked(), description.get_untracked()));
    };

    view! {
        <Layout>
            <div class="px-4 sm:px-0">
                <h2 class="text-2xl font-bold text-gray-900 mb-6">"Study rooms"</h2>

                <form class="bg-white rounded-lg shadow p-4 mb-6 flex gap-3 items-end" on:submit=handle_submit>
                    <div class="flex-1">
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Room name"</label>
                        <input
                            type="text"
                            class="w-full border border-gray-300 rounded-md px-3 py-2"
                            prop:value=name
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="flex-1">
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Description"</label>
                        <input
                            type="text"
                            class="w-full border border-gray-300 rounded-md px-3 py-2"
                            prop:value=description
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        class="bg-indigo-600 text-white px-4 py-2 rounded-md text-sm font-medium hover:bg-indigo-700 disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        "New room"
                    </button>
                </form>
                {move || error.get().map(|err| view! {
                    <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4 text-sm">
                        {err.error}
                    </div>
                })}

                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    {move || rooms_resource.get().map(|result| match result {
                        Ok(rooms) if rooms.is_empty() => view! {
                            <p class="text-gray-600">"No rooms yet. Create one above to start a conversation."</p>
                        }.into_view(),
                        Ok(rooms) => view! {
                            <div class="space-y-3">
                                {rooms.into_iter().map(|room| {
                                    let href = format!("/chat/rooms/{}", room.id);
                                    view! {
                                        <a href=href class="bg-white rounded-lg shadow p-4 hover:shadow-md flex justify-between items-center">
                                            <div>
                                                <h3 class="font-semibold text-gray-900">{room.name}</h3>
                                                <p class="text-sm text-gray-600 mt-1">
                                                    {room.description.unwrap_or_default()}
                                                </p>
                                            </div>
                                            <span class="text-sm text-indigo-600">"Open"</span>
                                        </a>
                                    }
                                }).collect_view()}
                            </div>
                        }.into_view(),
                        Err(err) => view! {
                            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded text-sm">
                                {err.error}
                            </div>
                        }.into_view(),
                    })}
                </Suspense>
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
    fn chat_page_renders_the_room_form() {
        let html = render_to_string(move || {
            provide_auth(Some(sample_user()));
            view! { <ChatPage /> }
        });
        assert!(html.contains("Study rooms"));
        assert!(html.contains("New room"));
    }
}
