//! Analysis service
//!
//! Classification itself lives in `morpho_shared::morphology`; this service
//! adds the per-category metric and the account snapshot write.

use crate::error::ApiError;
use crate::repositories::AccountRepository;
use chrono::Utc;
use morpho_shared::{morphology, AnalysisResult, Measurements};
use tracing::{debug, warn};
use uuid::Uuid;

/// Analysis service
pub struct AnalysisService;

impl AnalysisService {
    /// Classify measurements for an authenticated account
    ///
    /// Invalid measurements are rejected before anything is stored. A failed
    /// or skipped snapshot write never fails the analysis.
    pub async fn analyze(
        accounts: &dyn AccountRepository,
        account_id: Uuid,
        measurements: Measurements,
        persist_snapshot: bool,
    ) -> Result<AnalysisResult, ApiError> {
        let result = morphology::analyze(&measurements)?;

        metrics::counter!("morpho_analyses_total", "type" => result.morphology.code())
            .increment(1);
        debug!(%account_id, morphology = %result.morphology, "Measurements classified");

        if persist_snapshot {
            match accounts
                .save_measurements(account_id, measurements, Utc::now())
                .await
            {
                Ok(true) => {}
                Ok(false) => debug!(%account_id, "No account for snapshot, skipped"),
                Err(e) => warn!(%account_id, error = %e, "Failed to store measurement snapshot"),
            }
        }

        Ok(result)
    }
}
