use axum::{extract::State, Json};
use tracing::debug;

use super::{error::AppError, AppState};
use crate::collectors::SystemReport;

/// GET /api/system-info
///
/// Probes the host and returns the full inventory. The report is rebuilt on
/// every request; there is no caching.
pub async fn show(State(state): State<AppState>) -> Result<Json<SystemReport>, AppError> {
    let report = state.inspector.inspect().await?;
    debug!(users = report.users.len(), "system report assembled");
    Ok(Json(report))
}
