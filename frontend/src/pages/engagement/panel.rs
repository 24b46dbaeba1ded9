use crate::{
    components::layout::{Layout, LoadingSpinner},
    pages::engagement::repository,
    state::auth::use_api_client,
    utils::time::format_minutes,
};
use leptos::*;

#[component]
pub fn EngagementPage() -> impl IntoView {
    let api = use_api_client();

    let api_clone = api.clone();
    let overview_resource = create_resource(
        || (),
        move |_| {
            let api = api_clone.clone();
            async move { repository::fetch_overview(&api).await }
        },
    );

    view! {
        <Layout>
            <div class="px-4 sm:px-0">
                <h2 class="text-2xl font-bold text-gray-900 mb-6">"Progress"</h2>

                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    {move || overview_resource.get().map(|result| match result {
                        Ok(overview) => {
                            let max_points = overview
                                .weekly_activity
                                .iter()
                                .map(|day| day.points)
                                .max()
                                .unwrap_or(0)
                                .max(1);
                            view! {
                                <div class="grid gap-4 sm:grid-cols-3 mb-6">
                                    <div class="bg-white rounded-lg shadow p-4">
                                        <p class="text-sm text-gray-500">"Total points"</p>
                                        <p class="text-2xl font-bold text-gray-900 mt-1">{overview.total_points}</p>
                                    </div>
                                    <div class="bg-white rounded-lg shadow p-4">
                                        <p class="text-sm text-gray-500">"Streak"</p>
                                        <p class="text-2xl font-bold text-gray-900 mt-1">
                                            {format!("{} days", overview.streak_days)}
                                        </p>
                                    </div>
                                    <div class="bg-white rounded-lg shadow p-4">
                                        <p class="text-sm text-gray-500">"Time today"</p>
                                        <p class="text-2xl font-bold text-gray-900 mt-1">
                                            {format_minutes(overview.time_spent_today)}
                                        </p>
                                    </div>
                                </div>

                                <div class="bg-white rounded-lg shadow p-4 mb-6">
                                    <h3 class="font-semibold text-gray-900 mb-3">"This week"</h3>
                                    <div class="flex items-end gap-2 h-32">
                                        {overview.weekly_activity.into_iter().map(|day| {
                                            let height = (day.points * 100 / max_points).max(4);
                                            view! {
                                                <div class="flex-1 flex flex-col items-center gap-1">
                                                    <div
                                                        class="w-full bg-indigo-500 rounded-t"
                                                        style=format!("height: {height}%")
                                                    ></div>
                                                    <span class="text-xs text-gray-500">{day.day}</span>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </div>

                                <div class="grid gap-4 sm:grid-cols-2">
                                    <div class="bg-white rounded-lg shadow p-4">
                                        <h3 class="font-semibold text-gray-900 mb-3">"Points by category"</h3>
                                        {if overview.category_breakdown.is_empty() {
                                            view! { <p class="text-sm text-gray-400">"Nothing yet."</p> }.into_view()
                                        } else {
                                            overview.category_breakdown.into_iter().map(|entry| view! {
                                                <div class="flex justify-between text-sm py-1">
                                                    <span class="text-gray-700">{entry.category}</span>
                                                    <span class="text-gray-900 font-medium">{entry.points}</span>
                                                </div>
                                            }).collect_view()
                                        }}
                                    </div>
                                    <div class="bg-white rounded-lg shadow p-4">
                                        <h3 class="font-semibold text-gray-900 mb-3">"Achievements"</h3>
                                        {if overview.achievements.is_empty() {
                                            view! { <p class="text-sm text-gray-400">"None earned yet."</p> }.into_view()
                                        } else {
                                            overview.achievements.into_iter().map(|achievement| {
                                                let earned = achievement.earned_at.is_some();
                                                let tone = if earned { "text-gray-900" } else { "text-gray-400" };
                                                view! {
                                                    <div class="py-1">
                                                        <p class=format!("text-sm font-medium {tone}")>
                                                            {achievement.title}
                                                        </p>
                                                        <p class="text-xs text-gray-500">{achievement.description}</p>
                                                    </div>
                                                }
                                            }).collect_view()
                                        }}
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
    fn engagement_page_renders_summary_sections() {
        let html = render_to_string(move || {
            provide_auth(Some(sample_user()));
            view! { <EngagementPage /> }
        });
        assert!(html.contains("Progress"));
    }
}
