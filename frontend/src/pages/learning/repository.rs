use crate::api::{ApiClient, ApiError, CreatePackRequest, PackSummary};

pub async fn fetch_packs(api: &ApiClient) -> Result<Vec<PackSummary>, ApiError> {
    let mut packs = api.get_packs().await?;
    packs.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
    Ok(packs)
}

pub async fn create_pack(
    api: &ApiClient,
    title: String,
    description: String,
) -> Result<PackSummary, ApiError> {
    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(ApiError::validation("Pack title is required"));
    }
    let description = description.trim().to_string();
    api.create_pack(CreatePackRequest {
        title,
        description: (!description.is_empty()).then_some(description),
    })
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
    async fn packs_are_sorted_by_title() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/learning/packs");
            then.status(200).json_body(json!([
                { "id": 2, "title": "zoology", "description": null, "owner_id": 1 },
                { "id": 1, "title": "Algebra", "description": null, "owner_id": 1 }
            ]));
        });

        let packs = fetch_packs(&api(&server)).await.unwrap();
        assert_eq!(packs[0].title, "Algebra");
        assert_eq!(packs[1].title, "zoology");
    }

    #[tokio::test]
    async fn blank_pack_title_is_rejected_locally() {
        let server = MockServer::start_async().await;
        let create = server.mock(|when, then| {
            when.method(POST).path("/api/learning/packs");
            then.status(201).json_body(json!({ "id": 1, "title": "x" }));
        });

        let err = create_pack(&api(&server), "   ".into(), String::new())
            .await
            .unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(create.hits_async().await, 0);
    }
}
