/// slope-lab Studio
///
/// JSON API behind an interactive linear-regression demo. A front-end draws
/// the scatter plot and the loss curve; every time its slider moves it asks
/// `/api/snapshot?slope=S` for fresh numbers.
///
/// Run with:
///   cargo run --bin studio --release
/// Then query http://127.0.0.1:7979/api/snapshot?slope=1.5
///
/// Routes:
///   GET /api/config    — active configuration
///   GET /api/dataset   — scatter points
///   GET /api/snapshot  — predictions, MSE and loss curve for one slope
///   GET /api/curve     — loss curve, its minimum and the exact best slope

mod state;
mod routes;
mod handlers;
mod util;

use std::process;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use tiny_http::Server;

use slope_lab::LabConfig;
use state::StudioState;

#[derive(Debug, Parser)]
#[command(name = "studio", about = "HTTP JSON API for the slope lab", version)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:7979")]
    addr: String,

    /// JSON config file; classroom defaults are used when omitted
    #[arg(long, value_name = "PATH")]
    config: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => LabConfig::load_json(path),
        None       => Ok(LabConfig::default()),
    };
    let shared_state = match config.and_then(StudioState::new) {
        Ok(st) => Arc::new(st),
        Err(e) => {
            error!("cannot start studio: {e}");
            process::exit(1);
        }
    };

    let server = match Server::http(&args.addr) {
        Ok(s)  => s,
        Err(e) => {
            error!("failed to bind {}: {e}", args.addr);
            process::exit(1);
        }
    };

    info!(
        "studio listening on http://{} ({} samples, seed {}, {} grid points)",
        args.addr,
        shared_state.dataset.len(),
        shared_state.config.dataset.seed,
        shared_state.grid.len(),
    );

    // One thread per request, as each handler only reads the shared state.
    for request in server.incoming_requests() {
        let state_clone = shared_state.clone();
        std::thread::spawn(move || {
            routes::dispatch(request, state_clone);
        });
    }
}
