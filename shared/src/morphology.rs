//! Silhouette classification
//!
//! Maps bust/waist/hips measurements to one of five silhouette categories
//! using the ratio-based decision table below. Rules are evaluated in order
//! and the first match wins (`r` is the waist-to-hip ratio):
//!
//! | # | condition                          | category |
//! |---|------------------------------------|----------|
//! | 1 | `bust > hips`                      | V        |
//! | 2 | `hips > bust && r > 0.8`           | A        |
//! | 3 | `abs(bust - hips) < 5 && r > 0.8`  | H        |
//! | 4 | `r < 0.8`                          | X        |
//! | 5 | otherwise                          | O        |
//!
//! All comparisons are strict: a ratio of exactly 0.8 matches neither
//! rule 2/3 nor rule 4.

use crate::advice;
use crate::errors::MorphologyError;
use crate::models::Measurements;
use crate::types::AnalysisResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Waist-to-hip ratio threshold shared by rules 2, 3 and 4
pub const WAIST_HIP_THRESHOLD: f64 = 0.8;

/// Maximum bust/hips difference (cm) for a rectangle silhouette
pub const BALANCED_MARGIN_CM: f64 = 5.0;

/// Silhouette category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MorphologyType {
    /// Shoulders/bust wider than hips
    #[serde(rename = "V")]
    InvertedTriangle,
    /// Hips wider than bust
    #[serde(rename = "A")]
    Triangle,
    /// Balanced bust and hips, little waist definition
    #[serde(rename = "H")]
    Rectangle,
    /// Marked waist
    #[serde(rename = "X")]
    Hourglass,
    /// Soft curves
    #[serde(rename = "O")]
    Round,
}

impl MorphologyType {
    pub const ALL: [MorphologyType; 5] = [
        MorphologyType::InvertedTriangle,
        MorphologyType::Triangle,
        MorphologyType::Rectangle,
        MorphologyType::Hourglass,
        MorphologyType::Round,
    ];

    /// Single-letter category code
    pub fn code(&self) -> &'static str {
        match self {
            MorphologyType::InvertedTriangle => "V",
            MorphologyType::Triangle => "A",
            MorphologyType::Rectangle => "H",
            MorphologyType::Hourglass => "X",
            MorphologyType::Round => "O",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            MorphologyType::InvertedTriangle => "Type V (Triangle inversé)",
            MorphologyType::Triangle => "Type A (Triangle)",
            MorphologyType::Rectangle => "Type H (Rectangle)",
            MorphologyType::Hourglass => "Type X (Sablier)",
            MorphologyType::Round => "Type O (Rond)",
        }
    }

    /// Static advice text for this category
    pub fn advice(&self) -> &'static str {
        advice::advice_for(*self)
    }
}

impl fmt::Display for MorphologyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MorphologyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "V" => Ok(MorphologyType::InvertedTriangle),
            "A" => Ok(MorphologyType::Triangle),
            "H" => Ok(MorphologyType::Rectangle),
            "X" => Ok(MorphologyType::Hourglass),
            "O" => Ok(MorphologyType::Round),
            _ => Err(format!("Unknown morphology type: {}", s)),
        }
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), MorphologyError> {
    // `!(value > 0.0)` also rejects NaN
    if !value.is_finite() || !(value > 0.0) {
        return Err(MorphologyError::InvalidMeasurement { field, value });
    }
    Ok(())
}

/// Check that every measurement is finite and strictly positive
pub fn validate_measurements(m: &Measurements) -> Result<(), MorphologyError> {
    require_positive("bust", m.bust)?;
    require_positive("waist", m.waist)?;
    require_positive("hips", m.hips)?;
    Ok(())
}

/// Classify measurements into a silhouette category
pub fn classify(m: &Measurements) -> Result<MorphologyType, MorphologyError> {
    validate_measurements(m)?;

    let ratio = m.waist_to_hip_ratio();

    let morphology = if m.bust > m.hips {
        MorphologyType::InvertedTriangle
    } else if m.hips > m.bust && ratio > WAIST_HIP_THRESHOLD {
        MorphologyType::Triangle
    } else if (m.bust - m.hips).abs() < BALANCED_MARGIN_CM && ratio > WAIST_HIP_THRESHOLD {
        MorphologyType::Rectangle
    } else if ratio < WAIST_HIP_THRESHOLD {
        MorphologyType::Hourglass
    } else {
        MorphologyType::Round
    };

    Ok(morphology)
}

/// Classify measurements and attach the category's advice
pub fn analyze(m: &Measurements) -> Result<AnalysisResult, MorphologyError> {
    let morphology = classify(m)?;
    Ok(AnalysisResult::for_type(morphology))
}
