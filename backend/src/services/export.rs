//! Spreadsheet export of an analysis
//!
//! Produces a small CSV sheet: title, category, the three measurements in
//! centimeters and the advice text. Rows have different widths, so the
//! writer is flexible.

use crate::error::ApiError;
use morpho_shared::{morphology, AnalysisResult, Measurements};

/// Attachment file name
pub const CSV_FILENAME: &str = "analyse-morphologique.csv";

/// Export service
pub struct ExportService;

impl ExportService {
    /// Classify measurements and render the analysis sheet
    pub fn export_csv(measurements: &Measurements) -> Result<String, ApiError> {
        let result = morphology::analyze(measurements)?;
        Self::render_csv(measurements, &result)
    }

    /// Render the analysis sheet for an existing result
    pub fn render_csv(m: &Measurements, result: &AnalysisResult) -> Result<String, ApiError> {
        let rows: Vec<Vec<String>> = vec![
            vec!["Analyse Morphologique".into()],
            vec![],
            vec![
                "Type Morphologique".into(),
                result.morphology.code().into(),
                result.label.clone(),
            ],
            vec![],
            vec!["Mesures".into()],
            vec!["Buste".into(), format!("{} cm", m.bust)],
            vec!["Taille".into(), format!("{} cm", m.waist)],
            vec!["Hanche".into(), format!("{} cm", m.hips)],
            vec![],
            vec!["Conseils".into()],
            vec![result.advice.clone()],
        ];

        Self::to_csv(&rows)
    }

    fn to_csv(rows: &[Vec<String>]) -> Result<String, ApiError> {
        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(vec![]);

        for row in rows {
            let written = if row.is_empty() {
                wtr.write_record([""])
            } else {
                wtr.write_record(row)
            };
            written
                .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV serialization error: {}", e)))?;
        }

        let bytes = wtr
            .into_inner()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV flush error: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV encoding error: {}", e)))
    }
}
