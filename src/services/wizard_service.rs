// ============================================================================
// WIZARD SERVICE - profile wizard endpoints
// ============================================================================

use serde_json::Value;

use crate::models::wizard::{SaveStepRequest, SaveStepResponse, TaglineResponse, WizardStateResponse};
use crate::services::http::{self, ApiError};

/// Fetch every section payload plus the list of completed steps.
pub async fn fetch_wizard_state(token: &str) -> Result<WizardStateResponse, ApiError> {
    log::info!("🧭 Fetching wizard state...");
    http::get_json("/v1/profile-wizard", token).await
}

/// Upsert one step. `data` carries a single key, the section's wire name,
/// so the reply to the last writer is what the profile ends up showing.
pub async fn save_step(
    token: &str,
    step: usize,
    data: Value,
    is_completed: bool,
) -> Result<SaveStepResponse, ApiError> {
    log::info!("💾 Saving wizard step {}", step);

    let request = SaveStepRequest {
        step,
        data,
        is_completed,
    };
    http::put_json("/v1/profile-wizard/step", token, &request).await
}

/// Ask the backend to regenerate the profile tagline from the saved
/// sections. Best effort: callers log a failure and move on.
pub async fn generate_tagline(token: &str) -> Result<TaglineResponse, ApiError> {
    log::info!("✨ Requesting tagline regeneration");
    http::post_empty("/v1/profile-wizard/tagline", token).await
}
