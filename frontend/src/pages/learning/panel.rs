use crate::{
    api::ApiError,
    components::error::InlineErrorMessage,
    components::layout::{Layout, LoadingSpinner},
    pages::learning::repository,
    state::auth::use_api_client,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LearningPage() -> impl IntoView {
    let api = use_api_client();

    let api_clone = api.clone();
    let packs_resource = create_resource(
        || (),
        move |_| {
            let api = api_clone.clone();
            async move { repository::fetch_packs(&api).await }
        },
    );

    let (title, set_title) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<ApiError>);

    let api_clone = api.clone();
    let create_action = create_action(move |input: &(String, String)| {
        let (title, description) = input.clone();
        let api = api_clone.clone();
        async move { repository::create_pack(&api, title, description).await }
    });
    let pending = create_action.pending();

    {
        create_effect(move |_| {
            if let Some(result) = create_action.value().get() {
                match result {
                    Ok(_) => {
                        set_error.set(None);
                        set_title.set(String::new());
                        set_description.set(String::new());
                        packs_resource.refetch();
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
        create_action.dispatch((title.get_untracked(), description.get_untracked()));
    };

    view! {
        <Layout>
            <div class="px-4 sm:px-0">
                <h2 class="text-2xl font-bold text-gray-900 mb-6">"Flashcard packs"</h2>

                <form class="bg-white rounded-lg shadow p-4 mb-6 flex gap-3 items-end" on:submit=handle_submit>
                    <div class="flex-1">
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Title"</label>
                        <input
                            type="text"
                            class="w-full border border-gray-300 rounded-md px-3 py-2"
                            prop:value=title
                            on:input=move |ev| set_title.set(event_target_value(&ev))
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
                        "New pack"
                    </button>
                </form>
                <InlineErrorMessage error={error.into()} />

                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    {move || packs_resource.get().map(|result| match result {
                        Ok(packs) if packs.is_empty() => view! {
                            <p class="text-gray-600">"No packs yet. Create your first one above."</p>
                        }.into_view(),
                        Ok(packs) => view! {
                            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                                {packs.into_iter().map(|pack| {
                                    let href = format!("/learning/packs/{}", pack.id);
                                    let count_label = pack
                                        .card_count
                                        .map(|n| format!("{n} cards"))
                                        .unwrap_or_default();
                                    view! {
                                        <a href=href class="bg-white rounded-lg shadow p-4 hover:shadow-md block">
                                            <h3 class="font-semibold text-gray-900">{pack.title}</h3>
                                            <p class="text-sm text-gray-600 mt-1">
                                                {pack.description.unwrap_or_default()}
                                            </p>
                                            <p class="text-xs text-gray-400 mt-2">{count_label}</p>
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
