use crate::api::{ApiClient, ApiError, ApiMessage, ChangePasswordRequest, UpdateProfileRequest, User};

/// Sends only the fields the user actually changed.
pub async fn update_profile(
    api: &ApiClient,
    username: String,
    email: String,
) -> Result<User, ApiError> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() && email.is_empty() {
        return Err(ApiError::validation("Nothing to update"));
    }
    if !email.is_empty() && !email.contains('@') {
        return Err(ApiError::validation("Enter a valid email address"));
    }
    api.update_profile(UpdateProfileRequest {
        username: (!username.is_empty()).then(|| username.to_string()),
        email: (!email.is_empty()).then(|| email.to_string()),
    })
    .await
}

pub async fn change_password(
    api: &ApiClient,
    old_password: String,
    new_password: String,
    confirm: String,
) -> Result<ApiMessage, ApiError> {
    if old_password.is_empty() {
        return Err(ApiError::validation("Current password is required"));
    }
    if new_password.len() < 8 {
        return Err(ApiError::validation(
            "New password must be at least 8 characters",
        ));
    }
    if new_password != confirm {
        return Err(ApiError::validation("Passwords do not match"));
    }
    api.change_password(ChangePasswordRequest {
        old_password,
        new_password,
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
    async fn untouched_fields_are_left_out_of_the_update() {
        let server = MockServer::start_async().await;
        let update = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/auth/profile")
                .json_body(json!({ "username": "alice2" }));
            then.status(200).json_body(json!({
                "id": 1, "username": "alice2", "email": "alice@example.com"
            }));
        });

        let user = update_profile(&api(&server), "alice2".into(), String::new())
            .await
            .unwrap();
        assert_eq!(user.username, "alice2");
        update.assert_async().await;
    }

    #[tokio::test]
    async fn mismatched_passwords_never_reach_the_server() {
        let server = MockServer::start_async().await;
        let change = server.mock(|when, then| {
            when.method(POST).path("/api/auth/change-password");
            then.status(200).json_body(json!({ "msg": "ok" }));
        });

        let err = change_password(
            &api(&server),
            "old-secret".into(),
            "new-secret-1".into(),
            "new-secret-2".into(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(change.hits_async().await, 0);
    }
}
