use crate::{
    components::layout::{Layout, LoadingSpinner},
    pages::chat_room::{repository, view_model::RoomViewModel},
    state::auth::use_api_client,
    utils::time::format_message_time,
};
use leptos::{ev::SubmitEvent, *};
use leptos_router::use_params_map;

#[component]
pub fn ChatRoomPage() -> impl IntoView {
    let params = use_params_map();
    let room_id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()))
    });

    view! {
        <Layout>
            {move || match room_id.get() {
                Some(id) => view! { <RoomPanel room_id=id /> }.into_view(),
                None => view! {
                    <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded text-sm">
                        "Unknown room."
                    </div>
                }.into_view(),
            }}
        </Layout>
    }
}

#[component]
fn RoomPanel(room_id: i64) -> impl IntoView {
    let api = use_api_client();
    let vm = RoomViewModel::new();

    let api_clone = api.clone();
    let conversation_resource = create_resource(
        move || room_id,
        move |id| {
            let api = api_clone.clone();
            async move { repository::load_conversation(&api, id).await }
        },
    );

    let (error, set_error) = create_signal(None::<String>);

    {
        create_effect(move |_| {
            if let Some(result) = conversation_resource.get() {
                match result {
                    Ok(messages) => vm.merge_conversation(messages),
                    Err(err) => set_error.set(Some(err.error)),
                }
            }
        });
    }

    let (live, set_live) = create_signal(false);
    attach_push_channel(room_id, vm, set_live);

    let (draft, set_draft) = create_signal(String::new());

    let api_clone = api.clone();
    let send_action = create_action(move |content: &String| {
        let content = content.clone();
        let api = api_clone.clone();
        async move { repository::send_message(&api, room_id, content).await }
    });
    let sending = send_action.pending();

    {
        create_effect(move |_| {
            if let Some(result) = send_action.value().get() {
                match result {
                    Ok(reply) => {
                        set_error.set(None);
                        set_draft.set(String::new());
                        vm.merge_conversation(reply.conversation);
                    }
                    Err(err) => set_error.set(Some(err.error)),
                }
            }
        });
    }

    let handle_send = move |ev: SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        send_action.dispatch(draft.get_untracked());
    };

    let messages = vm.messages();
    let online_users = vm.online_users();

    view! {
        <div class="px-4 sm:px-0">
            <a href="/chat" class="text-sm text-indigo-600 hover:underline">"Back to rooms"</a>

            {move || error.get().map(|msg| view! {
                <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded my-4 text-sm">
                    {msg}
                </div>
            })}

            <div class="flex gap-4 mt-4">
                <div class="flex-1 bg-white rounded-lg shadow flex flex-col h-[32rem]">
                    <div class="flex-1 overflow-y-auto p-4 space-y-3">
                        <Suspense fallback=move || view! { <LoadingSpinner /> }>
                            {move || {
                                conversation_resource.get();
                                messages.get().into_iter().map(|message| {
                                    let bubble = if message.is_ai {
                                        "bg-indigo-50 text-gray-900 mr-12"
                                    } else {
                                        "bg-gray-100 text-gray-900 ml-12"
                                    };
                                    let label = if message.is_ai { "Assistant" } else { "You" };
                                    let clock = message
                                        .timestamp
                                        .as_ref()
                                        .map(format_message_time)
                                        .unwrap_or_default();
                                    view! {
                                        <div class=format!("rounded-lg px-3 py-2 {bubble}")>
                                            <div class="flex justify-between text-xs text-gray-500 mb-1">
                                                <span>{label}</span>
                                                <span>{clock}</span>
                                            </div>
                                            <p class="text-sm whitespace-pre-wrap">{message.content}</p>
                                        </div>
                                    }
                                }).collect_view()
                            }}
                        </Suspense>
                    </div>
                    <form class="border-t border-gray-200 p-3 flex gap-2" on:submit=handle_send>
                        <input
                            type="text"
                            class="flex-1 border border-gray-300 rounded-md px-3 py-2"
                            placeholder="Ask anything"
                            prop:value=draft
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                        />
                        <button
                            type="submit"
                            class="bg-indigo-600 text-white px-4 py-2 rounded-md text-sm font-medium hover:bg-indigo-700 disabled:opacity-50"
                            disabled=move || sending.get()
                        >
                            {move || if sending.get() { "Sending..." } else { "Send" }}
                        </button>
                    </form>
                </div>

                <aside class="w-48 bg-white rounded-lg shadow p-4">
                    <p class="text-xs mb-3">
                        {move || if live.get() {
                            view! { <span class="text-green-600">"Live"</span> }
                        } else {
                            view! { <span class="text-gray-400">"Updates paused"</span> }
                        }}
                    </p>
                    <h3 class="text-sm font-semibold text-gray-900 mb-2">"Online"</h3>
                    {move || {
                        let users = online_users.get();
                        if users.is_empty() {
                            view! { <p class="text-sm text-gray-400">"Nobody else yet"</p> }.into_view()
                        } else {
                            users.into_iter().map(|user| view! {
                                <p class="text-sm text-gray-700">{user.username}</p>
                            }).collect_view()
                        }
                    }}
                </aside>
            </div>
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn attach_push_channel(room_id: i64, vm: RoomViewModel, set_live: WriteSignal<bool>) {
    use crate::realtime::socket::RoomSocket;

    let socket = store_value(None::<RoomSocket>);
    spawn_local(async move {
        let ws_url = crate::config::await_ws_url().await;
        // the socket can outlive the screen for a tick, so set through try_set
        let on_status = move |up| {
            let _ = set_live.try_set(up);
        };
        match RoomSocket::connect(&ws_url, room_id, move |event| vm.apply(event), on_status) {
            // a returned handle means the screen is already gone; dropping
            // it closes the connection
            Ok(handle) => drop(socket.try_set_value(Some(handle))),
            Err(err) => log::warn!("live updates unavailable: {err}"),
        }
    });
    on_cleanup(move || socket.set_value(None));
}

#[cfg(not(target_arch = "wasm32"))]
fn attach_push_channel(_room_id: i64, _vm: RoomViewModel, _set_live: WriteSignal<bool>) {}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, sample_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn room_panel_renders_composer_and_presence() {
        let html = render_to_string(move || {
            provide_auth(Some(sample_user()));
            view! { <RoomPanel room_id=7 /> }
        });
        assert!(html.contains("Ask anything"));
        assert!(html.contains("Online"));
    }
}
