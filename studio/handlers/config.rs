use crate::handlers::ApiReply;
use crate::state::StudioState;

/// `GET /api/config` — the configuration the studio was started with.
pub fn handle_get(state: &StudioState) -> ApiReply {
    ApiReply::ok(&state.config)
}
