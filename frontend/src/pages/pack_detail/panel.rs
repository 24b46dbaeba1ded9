use crate::{
    api::ApiError,
    components::error::InlineErrorMessage,
    components::layout::{Layout, LoadingSpinner},
    pages::pack_detail::{repository, study::StudyPanel, utils},
    state::auth::use_api_client,
};
use leptos::{ev::SubmitEvent, *};
use leptos_router::use_params_map;

fn pack_id_from_params(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.parse::<i64>().ok())
}

#[component]
pub fn PackDetailPage() -> impl IntoView {
    let params = use_params_map();
    let pack_id = create_memo(move |_| {
        pack_id_from_params(params.with(|p| p.get("id").cloned()).as_deref())
    });

    view! {
        <Layout>
            {move || match pack_id.get() {
                Some(id) => view! { <PackPanel pack_id=id /> }.into_view(),
                None => view! {
                    <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded text-sm">
                        "Unknown pack."
                    </div>
                }.into_view(),
            }}
        </Layout>
    }
}

#[component]
fn PackPanel(pack_id: i64) -> impl IntoView {
    let api = use_api_client();

    let api_clone = api.clone();
    let pack_resource = create_resource(
        move || pack_id,
        move |id| {
            let api = api_clone.clone();
            async move { repository::fetch_pack(&api, id).await }
        },
    );

    let (question, set_question) = create_signal(String::new());
    let (answer, set_answer) = create_signal(String::new());
    let (editing, set_editing) = create_signal(None::<i64>);
    let (studying, set_studying) = create_signal(false);
    let (error, set_error) = create_signal(None::<ApiError>);

    let api_clone = api.clone();
    let save_action = create_action(move |input: &(Option<i64>, String, String)| {
        let (card_id, question, answer) = input.clone();
        let api = api_clone.clone();
        async move {
            match card_id {
                Some(id) => repository::update_card(&api, id, question, answer).await,
                None => repository::create_card(&api, pack_id, question, answer).await,
            }
        }
    });

    let api_clone = api.clone();
    let delete_action = create_action(move |card_id: &i64| {
        let card_id = *card_id;
        let api = api_clone.clone();
        async move { repository::delete_card(&api, card_id).await }
    });

    {
        create_effect(move |_| {
            if let Some(result) = save_action.value().get() {
                match result {
                    Ok(_) => {
                        set_error.set(None);
                        set_question.set(String::new());
                        set_answer.set(String::new());
                        set_editing.set(None);
                        pack_resource.refetch();
                    }
                    Err(err) => set_error.set(Some(err)),
                }
            }
        });
        create_effect(move |_| {
            if let Some(result) = delete_action.value().get() {
                match result {
                    Ok(_) => pack_resource.refetch(),
                    Err(err) => set_error.set(Some(err)),
                }
            }
        });
    }

    let handle_save = move |ev: SubmitEvent| {
        ev.prevent_default();
        if save_action.pending().get_untracked() {
            return;
        }
        save_action.dispatch((
            editing.get_untracked(),
            question.get_untracked(),
            answer.get_untracked(),
        ));
    };

    view! {
        <div class="px-4 sm:px-0">
            <a href="/learning" class="text-sm text-indigo-600 hover:underline">"Back to packs"</a>

            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || pack_resource.get().map(|result| match result {
                    Ok(pack) if studying.get() => view! {
                        <StudyPanel
                            cards=pack.flashcards.clone()
                            subject=pack.title.clone()
                            on_exit=Callback::new(move |_| set_studying.set(false))
                        />
                    }.into_view(),
                    Ok(pack) => {
                        let cards = pack.flashcards.clone();
                        let has_cards = !cards.is_empty();
                        view! {
                            <div>
                                <h2 class="text-2xl font-bold text-gray-900 mt-2">{pack.title.clone()}</h2>
                                <p class="text-gray-600 mb-2">{pack.description.clone().unwrap_or_default()}</p>
                                <div class="flex items-center gap-4 mb-6">
                                    <p class="text-sm text-gray-400">
                                        {format!("{} cards", cards.len())}
                                    </p>
                                    <Show when=move || has_cards>
                                        <button
                                            class="bg-indigo-600 text-white px-4 py-2 rounded-md text-sm font-medium hover:bg-indigo-700"
                                            on:click=move |_| set_studying.set(true)
                                        >
                                            "Study"
                                        </button>
                                    </Show>
                                </div>
                                <div class="space-y-3 mb-8">
                                    {cards.into_iter().map(|card| {
                                        let edit_question = card.question.clone();
                                        let edit_answer = card.answer.clone();
                                        let card_id = card.id;
                                        view! {
                                            <div class="bg-white rounded-lg shadow p-4 flex justify-between items-start">
                                                <div>
                                                    <p class="font-medium text-gray-900">{card.question.clone()}</p>
                                                    <p class="text-sm text-gray-600 mt-1">{card.answer.clone()}</p>
                                                </div>
                                                <div class="flex gap-2 text-sm">
                                                    <button
                                                        class="text-indigo-600 hover:underline"
                                                        on:click=move |_| {
                                                            set_editing.set(Some(card_id));
                                                            set_question.set(edit_question.clone());
                                                            set_answer.set(edit_answer.clone());
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="text-red-600 hover:underline"
                                                        on:click=move |_| delete_action.dispatch(card_id)
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            </div>
                        }.into_view()
                    }
                    Err(err) => view! {
                        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded text-sm">
                            {err.error}
                        </div>
                    }.into_view(),
                })}
            </Suspense>

            <InlineErrorMessage error={error.into()} />

            <form class="bg-white rounded-lg shadow p-4 mb-8" on:submit=handle_save>
                <h3 class="font-semibold text-gray-900 mb-3">
                    {move || if editing.get().is_some() { "Edit card" } else { "Add a card" }}
                </h3>
                <label class="block text-sm font-medium text-gray-700 mb-1">"Question"</label>
                <input
                    type="text"
                    class="w-full border border-gray-300 rounded-md px-3 py-2 mb-3"
                    prop:value=question
                    on:input=move |ev| set_question.set(event_target_value(&ev))
                />
                <label class="block text-sm font-medium text-gray-700 mb-1">"Answer"</label>
                <input
                    type="text"
                    class="w-full border border-gray-300 rounded-md px-3 py-2 mb-4"
                    prop:value=answer
                    on:input=move |ev| set_answer.set(event_target_value(&ev))
                />
                <div class="flex gap-3">
                    <button
                        type="submit"
                        class="bg-indigo-600 text-white px-4 py-2 rounded-md text-sm font-medium hover:bg-indigo-700 disabled:opacity-50"
                        disabled=move || save_action.pending().get()
                    >
                        {move || if editing.get().is_some() { "Save" } else { "Add card" }}
                    </button>
                    <Show when=move || editing.get().is_some()>
                        <button
                            type="button"
                            class="text-sm text-gray-600 hover:underline"
                            on:click=move |_| {
                                set_editing.set(None);
                                set_question.set(String::new());
                                set_answer.set(String::new());
                            }
                        >
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>

            <GeneratePanel pack_id=pack_id on_generated=Callback::new(move |_| pack_resource.refetch()) />
        </div>
    }
}

#[component]
fn GeneratePanel(pack_id: i64, on_generated: Callback<()>) -> impl IntoView {
    let api = use_api_client();

    let (method, set_method) = create_signal("topic".to_string());
    let (text, set_text) = create_signal(String::new());
    let (num_cards, set_num_cards) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (summary, set_summary) = create_signal(None::<String>);

    let generate_action = create_action(move |input: &repository::GenerateInput| {
        let input = input.clone();
        let api = api.clone();
        async move { repository::generate_cards(&api, pack_id, input).await }
    });
    let pending = generate_action.pending();

    {
        create_effect(move |_| {
            if let Some(result) = generate_action.value().get() {
                match result {
                    Ok(response) => {
                        set_error.set(None);
                        set_summary.set(Some(format!(
                            "Generated {} cards",
                            response.created_flashcards_count
                        )));
                        set_text.set(String::new());
                        on_generated.call(());
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
        set_summary.set(None);
        let count = match utils::parse_num_cards(&num_cards.get_untracked()) {
            Ok(count) => count,
            Err(msg) => {
                set_error.set(Some(msg));
                return;
            }
        };
        let body = text.get_untracked();
        let input = match method.get_untracked().as_str() {
            "textarea" => repository::GenerateInput::Textarea { content: body },
            "document" => repository::GenerateInput::Document {
                text: body,
                num_cards: count,
            },
            _ => repository::GenerateInput::Topic {
                topic: body,
                num_cards: count,
            },
        };
        set_error.set(None);
        generate_action.dispatch(input);
    };

    view! {
        <form class="bg-white rounded-lg shadow p-4" on:submit=handle_submit>
            <h3 class="font-semibold text-gray-900 mb-3">"Generate cards with AI"</h3>
            {move || error.get().map(|msg| view! {
                <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-3 text-sm">
                    {msg}
                </div>
            })}
            {move || summary.get().map(|msg| view! {
                <div class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded mb-3 text-sm">
                    {msg}
                </div>
            })}
            <div class="flex gap-3 mb-3">
                <select
                    class="border border-gray-300 rounded-md px-3 py-2"
                    on:change=move |ev| set_method.set(event_target_value(&ev))
                >
                    <option value="topic">"From a topic"</option>
                    <option value="textarea">"From pasted notes"</option>
                    <option value="document">"From a document"</option>
                </select>
                <input
                    type="number"
                    placeholder="Cards (default 5)"
                    class="border border-gray-300 rounded-md px-3 py-2 w-40"
                    prop:value=num_cards
                    on:input=move |ev| set_num_cards.set(event_target_value(&ev))
                />
            </div>
            <textarea
                class="w-full border border-gray-300 rounded-md px-3 py-2 mb-3"
                rows="4"
                placeholder=move || match method.get().as_str() {
                    "textarea" => "Paste notes, one \"question | answer\" per line",
                    "document" => "Paste document text",
                    _ => "Topic, e.g. Photosynthesis",
                }
                prop:value=text
                on:input=move |ev| set_text.set(event_target_value(&ev))
            ></textarea>
            <button
                type="submit"
                class="bg-indigo-600 text-white px-4 py-2 rounded-md text-sm font-medium hover:bg-indigo-700 disabled:opacity-50"
                disabled=move || pending.get()
            >
                {move || if pending.get() { "Generating..." } else { "Generate" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::pack_id_from_params;

    #[test]
    fn pack_id_parses_from_route_params() {
        assert_eq!(pack_id_from_params(Some("3")), Some(3));
        assert_eq!(pack_id_from_params(Some("abc")), None);
        assert_eq!(pack_id_from_params(None), None);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, sample_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn pack_panel_renders_card_and_generate_forms() {
        let html = render_to_string(move || {
            provide_auth(Some(sample_user()));
            view! { <PackPanel pack_id=3 /> }
        });
        assert!(html.contains("Add a card"));
        assert!(html.contains("Generate cards with AI"));
    }
}
