use crate::{api::Flashcard, pages::pack_detail::repository, state::auth::use_api_client};
use leptos::*;

/// Position within a study run: which card is showing and whether its answer
/// has been revealed yet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StudyProgress {
    pub index: usize,
    pub revealed: bool,
}

impl StudyProgress {
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Moves to the next card; returns false once the deck is exhausted.
    pub fn advance(&mut self, deck_len: usize) -> bool {
        if self.index + 1 >= deck_len {
            return false;
        }
        self.index += 1;
        self.revealed = false;
        true
    }
}

#[component]
pub fn StudyPanel(cards: Vec<Flashcard>, subject: String, on_exit: Callback<()>) -> impl IntoView {
    let api = use_api_client();
    let deck_len = cards.len();
    let deck = store_value(cards);

    let (progress, set_progress) = create_signal(StudyProgress::default());
    let (finished, set_finished) = create_signal(false);
    let elapsed = create_rw_signal(0i64);
    start_ticker(elapsed, finished.into());

    let log_action = create_action(move |seconds: &i64| {
        let seconds = *seconds;
        let subject = subject.clone();
        let api = api.clone();
        async move { repository::log_study(&api, subject, seconds).await }
    });
    let logging = log_action.pending();

    let current_card = move || {
        let index = progress.get().index;
        deck.with_value(|cards| cards.get(index).cloned())
    };

    let handle_next = move |_| {
        set_progress.update(|p| {
            if !p.advance(deck_len) {
                set_finished.set(true);
            }
        });
    };

    view! {
        <div class="max-w-xl mx-auto mt-4">
            <div class="flex justify-between items-center mb-3 text-sm text-gray-500">
                <span>
                    {move || format!("Card {} of {}", progress.get().index + 1, deck_len)}
                </span>
                <button class="text-indigo-600 hover:underline" on:click=move |_| on_exit.call(())>
                    "Exit"
                </button>
            </div>

            <Show
                when=move || !finished.get()
                fallback=move || view! {
                    <div class="bg-white rounded-lg shadow p-6 text-center">
                        <p class="text-lg font-semibold text-gray-900 mb-4">"Deck finished"</p>
                        {move || match log_action.value().get() {
                            Some(Ok(_)) => view! {
                                <div>
                                    <p class="text-sm text-green-700 mb-4">"Session logged."</p>
                                    <button
                                        class="text-indigo-600 hover:underline text-sm"
                                        on:click=move |_| on_exit.call(())
                                    >
                                        "Back to pack"
                                    </button>
                                </div>
                            }.into_view(),
                            Some(Err(err)) => view! {
                                <p class="text-sm text-red-700">{err.error}</p>
                            }.into_view(),
                            None => view! {
                                <button
                                    class="bg-indigo-600 text-white px-4 py-2 rounded-md text-sm font-medium hover:bg-indigo-700 disabled:opacity-50"
                                    disabled=move || logging.get()
                                    on:click=move |_| log_action.dispatch(elapsed.get_untracked())
                                >
                                    "Log study session"
                                </button>
                            }.into_view(),
                        }}
                    </div>
                }
            >
                {move || current_card().map(|card| view! {
                    <div class="bg-white rounded-lg shadow p-6">
                        <p class="text-lg font-medium text-gray-900 mb-4">{card.question}</p>
                        <Show
                            when=move || progress.get().revealed
                            fallback=move || view! {
                                <button
                                    class="bg-indigo-600 text-white px-4 py-2 rounded-md text-sm font-medium hover:bg-indigo-700"
                                    on:click=move |_| set_progress.update(StudyProgress::reveal)
                                >
                                    "Show answer"
                                </button>
                            }
                        >
                            <p class="text-gray-700 mb-4">{card.answer.clone()}</p>
                            <button
                                class="bg-indigo-600 text-white px-4 py-2 rounded-md text-sm font-medium hover:bg-indigo-700"
                                on:click=handle_next
                            >
                                "Next"
                            </button>
                        </Show>
                    </div>
                })}
            </Show>
        </div>
    }
}

/// Counts study seconds while the run is active; stops once the deck is done.
#[cfg(target_arch = "wasm32")]
fn start_ticker(elapsed: RwSignal<i64>, finished: Signal<bool>) {
    use gloo_timers::future::TimeoutFuture;

    spawn_local(async move {
        loop {
            TimeoutFuture::new(1_000).await;
            match finished.try_get_untracked() {
                Some(false) => elapsed.update(|seconds| *seconds += 1),
                _ => break,
            }
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn start_ticker(_elapsed: RwSignal<i64>, _finished: Signal<bool>) {}

#[cfg(test)]
mod tests {
    use super::StudyProgress;

    #[test]
    fn progress_reveals_then_advances() {
        let mut progress = StudyProgress::default();
        assert!(!progress.revealed);

        progress.reveal();
        assert!(progress.revealed);

        assert!(progress.advance(3));
        assert_eq!(progress.index, 1);
        assert!(!progress.revealed);
    }

    #[test]
    fn advancing_past_the_last_card_reports_exhaustion() {
        let mut progress = StudyProgress { index: 2, revealed: true };
        assert!(!progress.advance(3));
        assert_eq!(progress.index, 2);
    }

    #[test]
    fn a_single_card_deck_is_exhausted_immediately() {
        let mut progress = StudyProgress::default();
        assert!(!progress.advance(1));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, sample_user};
    use crate::test_support::ssr::render_to_string;

    fn card(id: i64) -> Flashcard {
        Flashcard {
            id,
            question: format!("Question {id}"),
            answer: format!("Answer {id}"),
            pack_id: Some(3),
            owner_id: Some(1),
            next_review: None,
            image_url: None,
            audio_url: None,
        }
    }

    #[test]
    fn study_panel_starts_on_the_first_card_with_the_answer_hidden() {
        let html = render_to_string(move || {
            provide_auth(Some(sample_user()));
            view! {
                <StudyPanel
                    cards=vec![card(1), card(2)]
                    subject="Biology".to_string()
                    on_exit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Card 1 of 2"));
        assert!(html.contains("Question 1"));
        assert!(html.contains("Show answer"));
        assert!(!html.contains("Answer 1"));
    }
}
