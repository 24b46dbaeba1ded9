use crate::api::{ApiClient, ApiError, EngagementOverview, Score};

pub async fn fetch_overview(api: &ApiClient) -> Result<EngagementOverview, ApiError> {
    api.get_engagement_overview().await
}

pub async fn fetch_score(api: &ApiClient) -> Result<Score, ApiError> {
    api.get_score().await
}

pub async fn add_points(api: &ApiClient, points: i64) -> Result<Score, ApiError> {
    if points <= 0 {
        return Err(ApiError::validation("Points must be positive"));
    }
    api.add_points(points).await
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
    async fn points_are_added_to_the_score() {
        let server = MockServer::start_async().await;
        let add = server.mock(|when, then| {
            when.method(POST)
                .path("/api/engagement/add-points")
                .json_body(json!({ "points": 10 }));
            then.status(200)
                .json_body(json!({ "id": 1, "user_id": 1, "points": 60 }));
        });

        let score = add_points(&api(&server), 10).await.unwrap();
        assert_eq!(score.points, 60);
        add.assert_async().await;
    }

    #[tokio::test]
    async fn non_positive_points_never_reach_the_server() {
        let server = MockServer::start_async().await;
        let add = server.mock(|when, then| {
            when.method(POST).path("/api/engagement/add-points");
            then.status(200)
                .json_body(json!({ "id": 1, "user_id": 1, "points": 0 }));
        });

        let err = add_points(&api(&server), 0).await.unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(add.hits_async().await, 0);
    }
}
