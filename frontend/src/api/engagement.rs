use super::{
    client::{json_or_error, ApiClient},
    types::{AddPointsRequest, ApiError, EngagementOverview, Score},
};

impl ApiClient {
    pub async fn get_engagement_overview(&self) -> Result<EngagementOverview, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| http.get(format!("{base_url}/engagement/overview")))
            .await?;
        json_or_error(response).await
    }

    pub async fn add_points(&self, points: i64) -> Result<Score, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| {
                http.post(format!("{base_url}/engagement/add-points"))
                    .json(&AddPointsRequest { points })
            })
            .await?;
        json_or_error(response).await
    }

    pub async fn get_score(&self) -> Result<Score, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|http| http.get(format!("{base_url}/engagement/score")))
            .await?;
        json_or_error(response).await
    }
}
