use serde_json::json;
use slope_lab::{best_fit_slope, compute_loss_curve};

use crate::handlers::ApiReply;
use crate::state::StudioState;

/// `GET /api/curve` — the loss curve on its own, with the sampled minimum and
/// the exact least-squares slope for comparison.
pub fn handle_get(state: &StudioState) -> ApiReply {
    let x = state.dataset.x();
    let y = state.dataset.y();

    let curve = match compute_loss_curve(x, y, state.grid.slopes()) {
        Ok(c)  => c,
        Err(e) => return ApiReply::internal(e.to_string()),
    };
    // All-zero x has no closed-form slope; report null rather than failing.
    let exact = best_fit_slope(x, y).ok();

    ApiReply::ok(&json!({
        "curve": curve,
        "minimum": curve.minimum(),
        "best_fit_slope": exact,
    }))
}
