//! API request and response types

use crate::models::MeasurementSnapshot;
use crate::morphology::MorphologyType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, max = 128, message = "Password must be between 8 and 128 characters"))]
    pub password: String,
}

/// Registration response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub id: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Session credential returned after a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionToken {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Classification result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "type")]
    pub morphology: MorphologyType,
    #[serde(default)]
    pub label: String,
    pub advice: String,
}

impl AnalysisResult {
    /// Result for a category, with its label and static advice
    pub fn for_type(morphology: MorphologyType) -> Self {
        Self {
            morphology,
            label: morphology.label().to_string(),
            advice: morphology.advice().to_string(),
        }
    }
}

/// Request to email an analysis result
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendResultRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub result: AnalysisResult,
}

/// Email delivery acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendResultResponse {
    pub sent: bool,
}

/// Account profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountProfile {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurements: Option<MeasurementSnapshot>,
}
