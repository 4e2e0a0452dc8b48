//! Data models for the MorphoConseil application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body measurements in centimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub bust: f64,
    pub waist: f64,
    pub hips: f64,
}

impl Measurements {
    pub fn new(bust: f64, waist: f64, hips: f64) -> Self {
        Self { bust, waist, hips }
    }

    /// Waist-to-hip ratio. Callers must check `hips > 0` first.
    #[inline]
    pub fn waist_to_hip_ratio(&self) -> f64 {
        self.waist / self.hips
    }

    /// Bust-to-hip ratio. Callers must check `hips > 0` first.
    #[inline]
    pub fn bust_to_hip_ratio(&self) -> f64 {
        self.bust / self.hips
    }
}

/// Last measurements an account submitted for analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSnapshot {
    #[serde(flatten)]
    pub measurements: Measurements,
    pub measured_at: DateTime<Utc>,
}

/// User account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub measurements: Option<MeasurementSnapshot>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
