use crate::{
    components::layout::{Layout, LoadingSpinner},
    pages::dashboard::repository,
    state::auth::use_api_client,
    utils::time::{format_date, format_minutes},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api_client();

    let api_clone = api.clone();
    let stats_resource = create_resource(
        || (),
        move |_| {
            let api = api_clone.clone();
            async move { repository::fetch_stats(&api).await }
        },
    );

    let api_clone = api.clone();
    let overview_resource = create_resource(
        || (),
        move |_| {
            let api = api_clone.clone();
            async move { repository::fetch_overview(&api).await }
        },
    );

    let (subject, set_subject) = create_signal(String::new());
    let (minutes, set_minutes) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (logged, set_logged) = create_signal(false);

    let api_clone = api.clone();
    let log_action = create_action(move |input: &(String, String)| {
        let (subject, minutes) = input.clone();
        let api = api_clone.clone();
        async move { repository::log_session(&api, subject, minutes).await }
    });
    let logging = log_action.pending();

    {
        create_effect(move |_| {
            if let Some(result) = log_action.value().get() {
                match result {
                    Ok(_) => {
                        set_error.set(None);
                        set_subject.set(String::new());
                        set_minutes.set(String::new());
                        set_logged.set(true);
                        stats_resource.refetch();
                        overview_resource.refetch();
                    }
                    Err(err) => {
                        set_logged.set(false);
                        set_error.set(Some(err.error));
                    }
                }
            }
        });
    }

    let handle_log = move |ev: SubmitEvent| {
        ev.prevent_default();
        if logging.get_untracked() {
            return;
        }
        set_logged.set(false);
        log_action.dispatch((subject.get_untracked(), minutes.get_untracked()));
    };

    view! {
        <Layout>
            <div class="px-4 sm:px-0">
                <h2 class="text-2xl font-bold text-gray-900 mb-6">"Dashboard"</h2>

                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    {move || stats_resource.get().map(|result| match result {
                        Ok(stats) => view! {
                            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4 mb-6">
                                <StatCard label="Flashcards" value=stats.total_flashcards.to_string() />
                                <StatCard label="Study sessions" value=stats.study_sessions.to_string() />
                                <StatCard label="Current streak" value=format!("{} days", stats.current_streak) />
                                <StatCard label="Total study time" value=format_minutes(stats.total_study_time / 60) />
                            </div>
                            <div class="bg-white rounded-lg shadow p-4 mb-6">
                                <h3 class="font-semibold text-gray-900 mb-3">"Recent sessions"</h3>
                                {if stats.recent_sessions.is_empty() {
                                    view! { <p class="text-sm text-gray-400">"No sessions logged yet."</p> }.into_view()
                                } else {
                                    stats.recent_sessions.into_iter().map(|session| view! {
                                        <div class="flex justify-between text-sm py-1 border-b border-gray-100 last:border-0">
                                            <span class="text-gray-900">{session.subject}</span>
                                            <span class="text-gray-500">
                                                {format!("{} · {}", format_date(&session.date), format_minutes(session.duration))}
                                            </span>
                                        </div>
                                    }).collect_view()
                                }}
                            </div>
                        }.into_view(),
                        Err(err) => view! {
                            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-6 text-sm">
                                {err.error}
                            </div>
                        }.into_view(),
                    })}
                </Suspense>

                <form class="bg-white rounded-lg shadow p-4 mb-6 flex gap-3 items-end" on:submit=handle_log>
                    <div class="flex-1">
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Subject"</label>
                        <input
                            type="text"
                            class="w-full border border-gray-300 rounded-md px-3 py-2"
                            prop:value=subject
                            on:input=move |ev| set_subject.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="w-40">
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Minutes"</label>
                        <input
                            type="number"
                            class="w-full border border-gray-300 rounded-md px-3 py-2"
                            prop:value=minutes
                            on:input=move |ev| set_minutes.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        class="bg-indigo-600 text-white px-4 py-2 rounded-md text-sm font-medium hover:bg-indigo-700 disabled:opacity-50"
                        disabled=move || logging.get()
                    >
                        "Log session"
                    </button>
                </form>
                {move || error.get().map(|msg| view! {
                    <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4 text-sm">
                        {msg}
                    </div>
                })}
                <Show when=move || logged.get()>
                    <div class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded mb-4 text-sm">
                        "Session logged."
                    </div>
                </Show>

                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    {move || overview_resource.get().map(|result| match result {
                        Ok(overview) => view! {
                            <div class="bg-white rounded-lg shadow p-4">
                                <h3 class="font-semibold text-gray-900 mb-3">"Activity"</h3>
                                <p class="text-sm text-gray-600 mb-2">
                                    {format!(
                                        "{} today · {} day streak · {} messages sent",
                                        format_minutes(overview.time_spent_today),
                                        overview.streak_days,
                                        overview.total_messages
                                    )}
                                </p>
                                {if overview.recent_activity.is_empty() {
                                    view! { <p class="text-sm text-gray-400">"No recent activity."</p> }.into_view()
                                } else {
                                    overview.recent_activity.into_iter().map(|day| view! {
                                        <div class="flex justify-between text-sm py-1">
                                            <span class="text-gray-500">{day.date.format("%Y-%m-%d").to_string()}</span>
                                            <span class="text-gray-900">{format!("{} actions", day.activity_count)}</span>
                                        </div>
                                    }).collect_view()
                                }}
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

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-4">
            <p class="text-sm text-gray-500">{label}</p>
            <p class="text-2xl font-bold text-gray-900 mt-1">{value}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, sample_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_renders_the_session_form() {
        let html = render_to_string(move || {
            provide_auth(Some(sample_user()));
            view! { <DashboardPage /> }
        });
        assert!(html.contains("Dashboard"));
        assert!(html.contains("Log session"));
    }
}
