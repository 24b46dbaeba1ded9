use crate::api::{
    ApiClient, ApiError, DashboardOverview, DashboardSessionRequest, DashboardStats,
    SessionCreated,
};

use super::utils;

pub async fn fetch_stats(api: &ApiClient) -> Result<DashboardStats, ApiError> {
    api.get_dashboard_stats().await
}

pub async fn fetch_overview(api: &ApiClient) -> Result<DashboardOverview, ApiError> {
    api.get_dashboard_overview().await
}

pub async fn log_session(
    api: &ApiClient,
    subject: String,
    minutes_input: String,
) -> Result<SessionCreated, ApiError> {
    let (subject, duration_minutes) =
        utils::validate_session(&subject, &minutes_input).map_err(ApiError::validation)?;
    api.create_dashboard_session(DashboardSessionRequest {
        subject,
        duration_minutes,
        completed: true,
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
    async fn logging_a_session_sends_minutes() {
        let server = MockServer::start_async().await;
        let create = server.mock(|when, then| {
            when.method(POST).path("/api/dashboard/sessions").json_body(json!({
                "subject": "Math", "duration_minutes": 45, "completed": true
            }));
            then.status(201)
                .json_body(json!({ "message": "Session logged", "id": 12 }));
        });

        let created = log_session(&api(&server), " Math ".into(), " 45 ".into())
            .await
            .unwrap();
        assert_eq!(created.id, Some(12));
        create.assert_async().await;
    }

    #[tokio::test]
    async fn invalid_durations_never_reach_the_server() {
        let server = MockServer::start_async().await;
        let create = server.mock(|when, then| {
            when.method(POST).path("/api/dashboard/sessions");
            then.status(201).json_body(json!({ "message": "ok" }));
        });

        let err = log_session(&api(&server), "Math".into(), "0".into())
            .await
            .unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(create.hits_async().await, 0);
    }
}
