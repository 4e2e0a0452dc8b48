//! MorphoConseil WASM Module
//!
//! Runs the same silhouette classification as the backend in the browser,
//! so the form can preview a result before submitting it.

use morpho_shared::{morphology, Measurements, MorphologyType};
use wasm_bindgen::prelude::*;

/// Classify measurements and return the result as JSON
/// (`{"type": ..., "label": ..., "advice": ...}`)
#[wasm_bindgen]
pub fn analyze(bust: f64, waist: f64, hips: f64) -> Result<String, JsValue> {
    analyze_json(bust, waist, hips).map_err(|e| JsValue::from_str(&e))
}

/// Category code (`V`, `A`, `H`, `X` or `O`) for the measurements
#[wasm_bindgen]
pub fn classify(bust: f64, waist: f64, hips: f64) -> Result<String, JsValue> {
    classify_code(bust, waist, hips).map_err(|e| JsValue::from_str(&e))
}

/// Human-readable label for a category code, empty for unknown codes
#[wasm_bindgen]
pub fn morphology_label(code: &str) -> String {
    code.parse::<MorphologyType>()
        .map(|t| t.label().to_string())
        .unwrap_or_default()
}

/// Waist-to-hip ratio, 0 when hips are not positive
#[wasm_bindgen]
pub fn waist_to_hip_ratio(waist: f64, hips: f64) -> f64 {
    if !(hips > 0.0) {
        return 0.0;
    }
    Measurements::new(0.0, waist, hips).waist_to_hip_ratio()
}

/// Bust-to-hip ratio for the result chart, 0 when hips are not positive
#[wasm_bindgen]
pub fn bust_to_hip_ratio(bust: f64, hips: f64) -> f64 {
    if !(hips > 0.0) {
        return 0.0;
    }
    Measurements::new(bust, 0.0, hips).bust_to_hip_ratio()
}

fn analyze_json(bust: f64, waist: f64, hips: f64) -> Result<String, String> {
    let result = morphology::analyze(&Measurements::new(bust, waist, hips)).map_err(|e| e.to_string())?;
    serde_json::to_string(&result).map_err(|e| e.to_string())
}

fn classify_code(bust: f64, waist: f64, hips: f64) -> Result<String, String> {
    morphology::classify(&Measurements::new(bust, waist, hips))
        .map(|t| t.code().to_string())
        .map_err(|e| e.to_string())
}
