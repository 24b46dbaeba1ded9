use crate::api::{
    ApiClient, ApiError, CreateFlashcardRequest, Flashcard, FlashcardPack, GenerateRequest,
    GenerateResponse, SessionLogged, StudySessionRequest, UpdateFlashcardRequest,
};

use super::utils;

pub async fn fetch_pack(api: &ApiClient, pack_id: i64) -> Result<FlashcardPack, ApiError> {
    api.get_pack(pack_id).await
}

pub async fn create_card(
    api: &ApiClient,
    pack_id: i64,
    question: String,
    answer: String,
) -> Result<Flashcard, ApiError> {
    utils::validate_card(&question, &answer).map_err(ApiError::validation)?;
    api.create_flashcard(CreateFlashcardRequest {
        question: question.trim().to_string(),
        answer: answer.trim().to_string(),
        pack_id,
    })
    .await
}

pub async fn update_card(
    api: &ApiClient,
    card_id: i64,
    question: String,
    answer: String,
) -> Result<Flashcard, ApiError> {
    utils::validate_card(&question, &answer).map_err(ApiError::validation)?;
    api.update_flashcard(
        card_id,
        UpdateFlashcardRequest {
            question: question.trim().to_string(),
            answer: answer.trim().to_string(),
        },
    )
    .await
}

pub async fn delete_card(api: &ApiClient, card_id: i64) -> Result<(), ApiError> {
    api.delete_flashcard(card_id).await.map(|_| ())
}

/// Records a finished study run. The server expects seconds; a run shorter
/// than one second still counts as one.
pub async fn log_study(
    api: &ApiClient,
    subject: String,
    duration_seconds: i64,
) -> Result<SessionLogged, ApiError> {
    api.log_study_session(StudySessionRequest {
        duration: duration_seconds.max(1),
        subject,
        completed: true,
    })
    .await
}

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateInput {
    Topic { topic: String, num_cards: u32 },
    Textarea { content: String },
    Document { text: String, num_cards: u32 },
}

pub async fn generate_cards(
    api: &ApiClient,
    pack_id: i64,
    input: GenerateInput,
) -> Result<GenerateResponse, ApiError> {
    let request = match input {
        GenerateInput::Topic { topic, num_cards } => {
            let topic = topic.trim().to_string();
            if topic.is_empty() {
                return Err(ApiError::validation("Topic is required"));
            }
            GenerateRequest::topic(pack_id, topic, num_cards)
        }
        GenerateInput::Textarea { content } => {
            if content.trim().is_empty() {
                return Err(ApiError::validation("Paste some content to generate from"));
            }
            GenerateRequest::textarea(pack_id, content)
        }
        GenerateInput::Document { text, num_cards } => {
            if text.trim().is_empty() {
                return Err(ApiError::validation("Document text is required"));
            }
            GenerateRequest::document(pack_id, text, num_cards)
        }
    };
    api.generate_flashcards(request).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::session::MemorySession;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::sync::Arc;

    fn api(server: &MockServer) -> ApiClient {
        ApiClient::new_with_base_url(
            format!("{}/api", server.base_url()),
            Arc::new(MemorySession::with_tokens("tok", "ref")),
        )
    }

    #[tokio::test]
    async fn empty_topic_never_reaches_the_server() {
        let server = MockServer::start_async().await;
        let generate = server.mock(|when, then| {
            when.method(POST).path("/api/learning/generate");
            then.status(200).json_body(json!({
                "method": "topic", "created_flashcards_count": 0, "pack_id": 3, "flashcards": []
            }));
        });

        let err = generate_cards(
            &api(&server),
            3,
            GenerateInput::Topic {
                topic: "  ".into(),
                num_cards: 5,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(generate.hits_async().await, 0);
    }

    #[tokio::test]
    async fn card_fields_are_trimmed_before_sending() {
        let server = MockServer::start_async().await;
        let create = server.mock(|when, then| {
            when.method(POST)
                .path("/api/learning/flashcards")
                .json_body(json!({ "question": "Q", "answer": "A", "pack_id": 3 }));
            then.status(201).json_body(json!({
                "id": 11, "question": "Q", "answer": "A", "pack_id": 3
            }));
        });

        let card = create_card(&api(&server), 3, " Q ".into(), " A ".into())
            .await
            .unwrap();
        assert_eq!(card.id, 11);
        create.assert_async().await;
    }

    #[tokio::test]
    async fn study_runs_are_logged_in_seconds_with_a_floor_of_one() {
        let server = MockServer::start_async().await;
        let log = server.mock(|when, then| {
            when.method(POST)
                .path("/api/learning/sessions")
                .json_body(json!({ "duration": 1, "subject": "Biology", "completed": true }));
            then.status(201)
                .json_body(json!({ "message": "Session logged", "session_id": 21 }));
        });

        let logged = log_study(&api(&server), "Biology".into(), 0).await.unwrap();
        assert_eq!(logged.session_id, Some(21));
        log.assert_async().await;
    }
}
