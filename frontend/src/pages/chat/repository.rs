use crate::api::{ApiClient, ApiError, ChatRoom, CreateRoomRequest};

pub async fn fetch_rooms(api: &ApiClient) -> Result<Vec<ChatRoom>, ApiError> {
    api.get_rooms().await
}

pub async fn create_room(
    api: &ApiClient,
    name: String,
    description: String,
) -> Result<ChatRoom, ApiError> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(ApiError::validation("Room name is required"));
    }
    let description = description.trim();
    api.create_room(CreateRoomRequest {
        name,
        description: (!description.is_empty()).then(|| description.to_string()),
    })
    .await
}

/// Joining a room you already belong to is reported as a 409 conflict by
/// the server; for the client both outcomes mean "you are in". Every other
/// rejection (missing room, revoked access) stays an error.
pub async fn ensure_joined(api: &ApiClient, room_id: i64) -> Result<(), ApiError> {
    match api.join_room(room_id).await {
        Ok(_) => Ok(()),
        Err(err) if err.is_conflict() => Ok(()),
        Err(err) => Err(err),
    }
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
    async fn joining_twice_is_not_an_error() {
        let server = MockServer::start_async().await;
        let join = server.mock(|when, then| {
            when.method(POST).path("/api/chat/rooms/7/participants");
            then.status(409)
                .json_body(json!({ "msg": "Already a participant." }));
        });

        ensure_joined(&api(&server), 7).await.unwrap();
        join.assert_async().await;
    }

    #[tokio::test]
    async fn joining_a_missing_room_fails() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/chat/rooms/99/participants");
            then.status(404).json_body(json!({ "msg": "Room not found." }));
        });

        let err = ensure_joined(&api(&server), 99).await.unwrap_err();
        assert_eq!(err.error, "Room not found.");
        assert_eq!(err.status, Some(404));
    }

    #[tokio::test]
    async fn blank_room_name_is_rejected_locally() {
        let server = MockServer::start_async().await;
        let create = server.mock(|when, then| {
            when.method(POST).path("/api/chat/rooms");
            then.status(201).json_body(json!({ "id": 1, "name": "x" }));
        });

        let err = create_room(&api(&server), "   ".into(), String::new())
            .await
            .unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(create.hits_async().await, 0);
    }
}
