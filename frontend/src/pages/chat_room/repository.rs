use crate::api::{ApiClient, ApiError, ChatMessage, PostMessageRequest, PostMessageResponse};
use crate::pages::chat::repository::ensure_joined;

/// Makes sure the caller is a participant, then loads the conversation.
pub async fn load_conversation(
    api: &ApiClient,
    room_id: i64,
) -> Result<Vec<ChatMessage>, ApiError> {
    ensure_joined(api, room_id).await?;
    api.get_messages(room_id).await
}

pub async fn send_message(
    api: &ApiClient,
    room_id: i64,
    content: String,
) -> Result<PostMessageResponse, ApiError> {
    let content = content.trim().to_string();
    if content.is_empty() {
        return Err(ApiError::validation("Message cannot be empty"));
    }
    api.post_message(
        room_id,
        PostMessageRequest {
            content,
            role: "user".to_string(),
        },
    )
    .await
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
    async fn loading_joins_the_room_before_fetching_messages() {
        let server = MockServer::start_async().await;
        let join = server.mock(|when, then| {
            when.method(POST).path("/api/chat/rooms/7/participants");
            then.status(200)
                .json_body(json!({ "msg": "Joined room successfully." }));
        });
        let messages = server.mock(|when, then| {
            when.method(GET).path("/api/chat/rooms/7/messages");
            then.status(200).json_body(json!([
                { "id": 1, "room_id": 7, "sender_id": 2, "content": "hello" }
            ]));
        });

        let conversation = load_conversation(&api(&server), 7).await.unwrap();
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation[0].content, "hello");
        join.assert_async().await;
        messages.assert_async().await;
    }

    #[tokio::test]
    async fn sending_returns_the_assistant_reply_and_conversation() {
        let server = MockServer::start_async().await;
        let post = server.mock(|when, then| {
            when.method(POST)
                .path("/api/chat/rooms/7/post_message")
                .json_body(json!({ "content": "hi", "role": "user" }));
            then.status(200).json_body(json!({
                "bot_reply": "Hello!",
                "conversation": [
                    { "id": 1, "room_id": 7, "sender_id": 2, "content": "hi" },
                    { "id": 2, "room_id": 7, "sender_id": 0, "content": "Hello!", "is_ai": true }
                ]
            }));
        });

        let reply = send_message(&api(&server), 7, "  hi  ".into()).await.unwrap();
        assert_eq!(reply.bot_reply, "Hello!");
        assert_eq!(reply.conversation.len(), 2);
        post.assert_async().await;
    }

    #[tokio::test]
    async fn blank_messages_never_reach_the_server() {
        let server = MockServer::start_async().await;
        let post = server.mock(|when, then| {
            when.method(POST).path("/api/chat/rooms/7/post_message");
            then.status(200)
                .json_body(json!({ "bot_reply": "", "conversation": [] }));
        });

        let err = send_message(&api(&server), 7, "   ".into()).await.unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(post.hits_async().await, 0);
    }
}
