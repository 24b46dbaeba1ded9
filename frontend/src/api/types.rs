use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// --- Errors -----------------------------------------------------------------

/// Error surfaced by every API call.
///
/// `code` is one of a small stable set the screens can branch on:
/// `NETWORK_ERROR`, `UNAUTHORIZED`, `VALIDATION_ERROR`, `SERVER_ERROR`,
/// `DECODE_ERROR`, `UNKNOWN`. `error` is the human message (for 4xx the
/// server-supplied message verbatim); `status` is the HTTP status when a
/// response was received, so callers can tell a 409 conflict from any other
/// rejection; `details` carries any structured body the server attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub details: Option<Value>,
}

impl ApiError {
    fn with_code(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: code.to_string(),
            status: None,
            details: None,
        }
    }

    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::with_code("NETWORK_ERROR", format!("Request failed: {err}"))
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_code("UNAUTHORIZED", message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_code("VALIDATION_ERROR", message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::with_code("SERVER_ERROR", message)
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::with_code("DECODE_ERROR", format!("Failed to parse response: {err}"))
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::with_code("UNKNOWN", message)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }

    pub fn is_conflict(&self) -> bool {
        self.status == Some(409)
    }
}

/// Plain acknowledgment body; the backend answers some endpoints with
/// `{"message": ...}` and others with `{"msg": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(alias = "msg")]
    pub message: String,
}

// --- Auth -------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

// --- Chat -------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRoom {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub created_by: Option<i64>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_role() -> String {
    "user".to_string()
}

fn default_message_type() -> String {
    "text".to_string()
}

fn default_status() -> String {
    "sent".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub room_id: i64,
    pub sender_id: i64,
    pub content: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub is_ai: bool,
    #[serde(default = "default_message_type")]
    pub message_type: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMessageRequest {
    pub content: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMessageResponse {
    pub bot_reply: String,
    pub conversation: Vec<ChatMessage>,
}

// --- Learning ---------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner_id: Option<i64>,
    #[serde(default)]
    pub card_count: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardPack {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner_id: Option<i64>,
    #[serde(default)]
    pub flashcards: Vec<Flashcard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: i64,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub pack_id: Option<i64>,
    #[serde(default)]
    pub owner_id: Option<i64>,
    #[serde(default)]
    pub next_review: Option<NaiveDateTime>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePackRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFlashcardRequest {
    pub question: String,
    pub answer: String,
    pub pack_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFlashcardRequest {
    pub question: String,
    pub answer: String,
}

/// AI generation request. `method` selects which payload field the server
/// reads: `textarea` → `content`, `topic` → `topic` + `num_cards`,
/// `document` → `document_text` + `num_cards`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub method: String,
    pub pack_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_cards: Option<u32>,
}

impl GenerateRequest {
    pub fn textarea(pack_id: i64, content: impl Into<String>) -> Self {
        Self {
            method: "textarea".into(),
            pack_id,
            content: Some(content.into()),
            topic: None,
            document_text: None,
            num_cards: None,
        }
    }

    pub fn topic(pack_id: i64, topic: impl Into<String>, num_cards: u32) -> Self {
        Self {
            method: "topic".into(),
            pack_id,
            content: None,
            topic: Some(topic.into()),
            document_text: None,
            num_cards: Some(num_cards),
        }
    }

    pub fn document(pack_id: i64, document_text: impl Into<String>, num_cards: u32) -> Self {
        Self {
            method: "document".into(),
            pack_id,
            content: None,
            topic: None,
            document_text: Some(document_text.into()),
            num_cards: Some(num_cards),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub method: String,
    pub created_flashcards_count: i64,
    pub pack_id: i64,
    #[serde(default)]
    pub flashcards: Vec<Flashcard>,
}

/// Study session log (`POST /learning/sessions`); duration is in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySessionRequest {
    pub duration: i64,
    pub subject: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionLogged {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<i64>,
}

// --- Dashboard --------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentSession {
    pub id: i64,
    pub date: NaiveDateTime,
    /// Minutes, already converted server-side.
    pub duration: i64,
    pub subject: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_flashcards: i64,
    pub study_sessions: i64,
    pub current_streak: i64,
    /// Seconds.
    pub total_study_time: i64,
    #[serde(default)]
    pub recent_sessions: Vec<RecentSession>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityDay {
    pub date: NaiveDate,
    pub activity_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub total_courses: i64,
    pub completed_courses: i64,
    pub total_messages: i64,
    pub engagement_score: i64,
    #[serde(default)]
    pub recent_activity: Vec<ActivityDay>,
    /// Minutes.
    pub time_spent_today: i64,
    pub streak_days: i64,
}

/// Quick session log from the dashboard (`POST /dashboard/sessions`);
/// unlike the learning variant this one takes minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSessionRequest {
    pub subject: String,
    pub duration_minutes: i64,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCreated {
    pub message: String,
    #[serde(default)]
    pub id: Option<i64>,
}

// --- Engagement -------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyActivity {
    pub day: String,
    pub points: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPoints {
    pub category: String,
    pub points: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub earned_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementOverview {
    pub total_points: i64,
    pub streak_days: i64,
    /// Minutes.
    pub time_spent_today: i64,
    #[serde(default)]
    pub weekly_activity: Vec<WeeklyActivity>,
    #[serde(default)]
    pub category_breakdown: Vec<CategoryPoints>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    #[serde(default)]
    pub id: Option<i64>,
    pub user_id: i64,
    pub points: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPointsRequest {
    pub points: i64,
}
