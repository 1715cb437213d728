use std::sync::Arc;

use slope_lab::{Dataset, LabConfig, Result, SlopeGrid};

/// Everything the studio serves, built once at startup.
///
/// Nothing in here changes after construction: the current slope arrives
/// with every request, so handlers only ever read this state and no lock is
/// needed.
#[derive(Debug)]
pub struct StudioState {
    pub config:  LabConfig,
    pub dataset: Dataset,
    pub grid:    SlopeGrid,
}

impl StudioState {
    pub fn new(config: LabConfig) -> Result<Self> {
        config.validate()?;
        let dataset = config.dataset()?;
        let grid    = config.grid()?;
        Ok(StudioState { config, dataset, grid })
    }
}

/// Shared state type — an `Arc<StudioState>` passed to every handler.
pub type SharedState = Arc<StudioState>;
