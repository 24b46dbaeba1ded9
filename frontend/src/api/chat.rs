use super::{
    client::{json_or_error, ApiClient},
    types::{
        ApiError, ApiMessage, ChatMessage, ChatRoom, CreateRoomRequest, PostMessageRequest,
        PostMessageResponse,
    },
};

impl ApiClient {
    pub async fn get_rooms(&self) -> Result<Vec<ChatRoom>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| http.get(format!("{base_url}/chat/rooms")))
            .await?;
        json_or_error(response).await
    }

    pub async fn create_room(&self, request: CreateRoomRequest) -> Result<ChatRoom, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| http.post(format!("{base_url}/chat/rooms")).json(&request))
            .await?;
        json_or_error(response).await
    }

    /// Adds the caller to a room's participant list. Joining a room twice
    /// answers 409; callers that only need membership treat that as success.
    pub async fn join_room(&self, room_id: i64) -> Result<ApiMessage, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| {
                http.post(format!("{base_url}/chat/rooms/{room_id}/participants"))
                    .json(&serde_json::json!({}))
            })
            .await?;
        json_or_error(response).await
    }

    pub async fn get_messages(&self, room_id: i64) -> Result<Vec<ChatMessage>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| {
                http.get(format!("{base_url}/chat/rooms/{room_id}/messages"))
            })
            .await?;
        json_or_error(response).await
    }

    /// Posts a message; the reply carries the assistant's answer and the
    /// room's updated conversation.
    pub async fn post_message(
        &self,
        room_id: i64,
        request: PostMessageRequest,
    ) -> Result<PostMessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| {
                http.post(format!("{base_url}/chat/rooms/{room_id}/post_message"))
                    .json(&request)
            })
            .await?;
        json_or_error(response).await
    }
}
