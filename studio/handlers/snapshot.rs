use log::{debug, warn};
use slope_lab::Snapshot;

use crate::handlers::ApiReply;
use crate::state::StudioState;
use crate::util::query::{parse_query, query_get};

// ---------------------------------------------------------------------------
// GET /api/snapshot?slope=S
// ---------------------------------------------------------------------------

/// Recomputes predictions, MSE and the loss curve for the slope carried in
/// the query string. This is the request a front-end sends on every slider
/// move.
///
/// - no `slope` parameter        → the configured initial slope
/// - unparsable or out of range  → 400 with an `error` message
pub fn handle_get(query: &str, state: &StudioState) -> ApiReply {
    let pairs = parse_query(query);

    let slope = match query_get(&pairs, "slope") {
        None => state.config.initial_slope,
        Some(raw) => match raw.trim().parse::<f64>() {
            Ok(s)  => s,
            Err(_) => {
                warn!("rejected unparsable slope {raw:?}");
                return ApiReply::bad_request(format!("slope must be a number, got {raw:?}"));
            }
        },
    };

    let slope = match state.config.slopes.validate(slope) {
        Ok(s)  => s,
        Err(e) => {
            warn!("rejected slope: {e}");
            return ApiReply::bad_request(e.to_string());
        }
    };

    match Snapshot::compute(&state.dataset, slope, &state.grid) {
        Ok(snapshot) => {
            debug!("served snapshot for slope {slope}");
            ApiReply::ok(&snapshot)
        }
        Err(e) => ApiReply::internal(e.to_string()),
    }
}
