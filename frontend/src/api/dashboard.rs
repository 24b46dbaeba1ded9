use super::{
    client::{json_or_error, ApiClient},
    types::{
        ApiError, DashboardOverview, DashboardSessionRequest, DashboardStats, SessionCreated,
    },
};

impl ApiClient {
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| http.get(format!("{base_url}/dashboard/stats")))
            .await?;
        json_or_error(response).await
    }

    pub async fn get_dashboard_overview(&self) -> Result<DashboardOverview, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| http.get(format!("{base_url}/dashboard/overview")))
            .await?;
        json_or_error(response).await
    }

    pub async fn create_dashboard_session(
        &self,
        request: DashboardSessionRequest,
    ) -> Result<SessionCreated, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| {
                http.post(format!("{base_url}/dashboard/sessions"))
                    .json(&request)
            })
            .await?;
        json_or_error(response).await
    }
}
