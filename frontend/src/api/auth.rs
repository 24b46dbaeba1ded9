use super::{
    client::{json_or_error, ApiClient},
    types::{
        ApiError, ApiMessage, AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest,
        UpdateProfileRequest, User,
    },
};

impl ApiClient {
    /// Exchanges credentials for a token pair and persists it. A 401 here
    /// means bad credentials, so the request goes out without the refresh
    /// wrapper.
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http()
            .post(format!("{base_url}/auth/login"))
            .json(&request)
            .send()
            .await
            .map_err(ApiError::network)?;

        let auth: AuthResponse = json_or_error(response).await?;
        self.session()
            .store_tokens(&auth.access_token, &auth.refresh_token);
        if let Ok(user_json) = serde_json::to_string(&auth.user) {
            self.session().store_user(&user_json);
        }
        Ok(auth)
    }

    /// Creates an account. The server answers with the new profile only;
    /// callers log in separately.
    pub async fn register(&self, request: RegisterRequest) -> Result<User, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http()
            .post(format!("{base_url}/auth/register"))
            .json(&request)
            .send()
            .await
            .map_err(ApiError::network)?;

        json_or_error(response).await
    }

    /// Tells the server to end the session, then wipes the stored
    /// credentials. The local wipe happens even when the server call fails.
    pub async fn logout(&self) {
        let base_url = self.resolved_base_url().await;
        if let Err(err) = self
            .send_with_refresh(|http| http.post(format!("{base_url}/auth/logout")))
            .await
        {
            log::warn!("logout request failed: {err}");
        }
        self.session().clear();
    }

    pub async fn get_profile(&self) -> Result<User, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| http.get(format!("{base_url}/auth/profile")))
            .await?;
        json_or_error(response).await
    }

    pub async fn update_profile(&self, request: UpdateProfileRequest) -> Result<User, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| {
                http.put(format!("{base_url}/auth/profile")).json(&request)
            })
            .await?;

        let user: User = json_or_error(response).await?;
        if let Ok(user_json) = serde_json::to_string(&user) {
            self.session().store_user(&user_json);
        }
        Ok(user)
    }

    pub async fn change_password(
        &self,
        request: ChangePasswordRequest,
    ) -> Result<ApiMessage, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| {
                http.post(format!("{base_url}/auth/change-password"))
                    .json(&request)
            })
            .await?;
        json_or_error(response).await
    }
}
