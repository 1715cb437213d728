use crate::handlers::ApiReply;
use crate::state::StudioState;

/// `GET /api/dataset` — the fixed scatter points, as `{ "x": [...], "y": [...] }`.
pub fn handle_get(state: &StudioState) -> ApiReply {
    ApiReply::ok(&state.dataset)
}
