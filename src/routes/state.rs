//! `/api/state` and `/api/catalog/summary` — read-only JSON for debugging
//! and the host page's startup check.

use crate::catalog;
use crate::session::state;

/// Handle GET /api/state — JSON snapshot of the whole session.
pub fn handle_state_get(_query: &str) -> String {
    state::export_session_json()
}

/// Handle GET /api/catalog/summary — names and counts from the active catalog.
pub fn handle_catalog_summary_get(_query: &str) -> String {
    catalog::summary_json().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "catalog unavailable");
        format!(r#"{{"error":"{}"}}"#, e.to_string().replace('"', "'"))
    })
}
