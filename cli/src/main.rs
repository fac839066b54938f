//! Keywright CLI - random passwords and passphrases.
//!
//! ```text
//! main() -> init_tracing() -> KeywrightConfig::load() -> commands::run()
//!                                                            |
//!                      password:   policy -> RejectionSampler ----+
//!                      passphrase: corpus -> PassphraseAssembler -+-> output::emit()
//!                      phonetic:   API    -> PassphraseAssembler -+
//! ```
//!
//! Credentials go to stdout (or a file / the clipboard); logs only ever go to
//! the log file.

mod args;
mod commands;
mod logging;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use keywright_config::KeywrightConfig;

use crate::args::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let config = KeywrightConfig::load()
        .context("failed to load configuration")?
        .unwrap_or_default();

    commands::run(cli, &config).await
}
