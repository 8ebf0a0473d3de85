#[macro_use]
extern crate tracing;

pub mod event;
pub mod http;
pub mod signal;
pub mod state;

use self::state::Zustand;
use eyre::Context;
use kagi_config::Configuration;
use webhook_signatures::verifier;

/// Decode the configured public key and construct the application state
pub fn initialise_state(config: &Configuration) -> eyre::Result<Zustand> {
    let verifier = verifier::build(&(&config.verification).into())
        .wrap_err("Failed to load the licensing service's public key")?;

    info!(mode = ?config.verification.mode, "loaded webhook verification key");

    Ok(Zustand { verifier })
}
