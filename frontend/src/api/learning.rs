use super::{
    client::{json_or_error, ApiClient},
    types::{
        ApiError, ApiMessage, CreateFlashcardRequest, CreatePackRequest, Flashcard, FlashcardPack,
        GenerateRequest, GenerateResponse, PackSummary, SessionLogged, StudySessionRequest,
        UpdateFlashcardRequest,
    },
};

impl ApiClient {
    pub async fn get_packs(&self) -> Result<Vec<PackSummary>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| http.get(format!("{base_url}/learning/packs")))
            .await?;
        json_or_error(response).await
    }

    pub async fn create_pack(&self, request: CreatePackRequest) -> Result<PackSummary, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| {
                http.post(format!("{base_url}/learning/packs")).json(&request)
            })
            .await?;
        json_or_error(response).await
    }

    /// Pack detail; includes the pack's flashcards.
    pub async fn get_pack(&self, pack_id: i64) -> Result<FlashcardPack, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| http.get(format!("{base_url}/learning/packs/{pack_id}")))
            .await?;
        json_or_error(response).await
    }

    pub async fn get_flashcards(&self, pack_id: Option<i64>) -> Result<Vec<Flashcard>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| {
                let mut request = http.get(format!("{base_url}/learning/flashcards"));
                if let Some(pack_id) = pack_id {
                    request = request.query(&[("pack_id", pack_id.to_string())]);
                }
                request
            })
            .await?;
        json_or_error(response).await
    }

    pub async fn create_flashcard(
        &self,
        request: CreateFlashcardRequest,
    ) -> Result<Flashcard, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| {
                http.post(format!("{base_url}/learning/flashcards"))
                    .json(&request)
            })
            .await?;
        json_or_error(response).await
    }

    pub async fn update_flashcard(
        &self,
        card_id: i64,
        request: UpdateFlashcardRequest,
    ) -> Result<Flashcard, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| {
                http.put(format!("{base_url}/learning/flashcards/{card_id}"))
                    .json(&request)
            })
            .await?;
        json_or_error(response).await
    }

    pub async fn delete_flashcard(&self, card_id: i64) -> Result<ApiMessage, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| {
                http.delete(format!("{base_url}/learning/flashcards/{card_id}"))
            })
            .await?;
        json_or_error(response).await
    }

    /// AI flashcard generation; cards land in the requested pack.
    pub async fn generate_flashcards(
        &self,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| {
                http.post(format!("{base_url}/learning/generate"))
                    .json(&request)
            })
            .await?;
        json_or_error(response).await
    }

    pub async fn log_study_session(
        &self,
        request: StudySessionRequest,
    ) -> Result<SessionLogged, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| {
                http.post(format!("{base_url}/learning/sessions"))
                    .json(&request)
            })
            .await?;
        json_or_error(response).await
    }
}
