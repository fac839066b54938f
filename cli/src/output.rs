//! Presenting a credential store: stdout, credential files and the clipboard.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use keywright_types::{CredentialId, CredentialStore, GenerationError};
use keywright_utils::{AtomicWriteOptions, mask, numbered, write_lines};
use tracing::{info, warn};

use crate::args::OutputArgs;

/// Reject a `--pick` that cannot name a credential before generating anything.
pub fn check_pick(args: &OutputArgs, qty: usize) -> Result<(), GenerationError> {
    match args.pick {
        Some(pick) if pick == 0 || pick > qty => Err(GenerationError::InvalidConfiguration(
            format!("--pick {pick} must be between 1 and {qty}"),
        )),
        _ => Ok(()),
    }
}

pub fn emit(
    store: &CredentialStore,
    args: &OutputArgs,
    json: bool,
    file: &Path,
    out: &mut impl Write,
) -> Result<()> {
    // A file takes precedence over the clipboard.
    if args.file {
        write_lines(file, store.values(), AtomicWriteOptions::owner_only())
            .with_context(|| format!("failed to write {}", file.display()))?;
        info!(path = %file.display(), count = store.len(), "Wrote credential file");
        writeln!(out, "Saved {} to {}", store.len(), file.display())?;
        return Ok(());
    }

    if json {
        serde_json::to_writer_pretty(&mut *out, store)?;
        writeln!(out)?;
    } else if store.len() == 1 && !args.copy {
        if let Some(credential) = store.iter().next() {
            if args.obfuscate {
                writeln!(out, "{}", mask(credential.value()))?;
            } else {
                writeln!(out, "{}", credential.value())?;
            }
        }
    } else if store.len() > 1 {
        for credential in store {
            writeln!(
                out,
                "{}",
                numbered(credential.id().value(), credential.value(), args.obfuscate)
            )?;
        }
    }

    if args.copy {
        copy_pick(store, args.copy_target(), out)?;
    }
    Ok(())
}

fn copy_pick(store: &CredentialStore, pick: usize, out: &mut impl Write) -> Result<()> {
    let credential = CredentialId::new(pick)
        .and_then(|id| store.get(id))
        .ok_or_else(|| {
            GenerationError::InvalidConfiguration(format!("no credential numbered {pick}"))
        })?;

    match copy_to_clipboard(credential.value()) {
        Ok(()) => {
            info!(id = pick, "Copied credential to clipboard");
            eprintln!("Copied #{pick} to the clipboard");
        }
        Err(e) => {
            warn!("Clipboard unavailable: {e}");
            eprintln!("Clipboard unavailable; printing #{pick} instead");
            writeln!(out, "{}", credential.value())?;
        }
    }
    Ok(())
}

fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)
}
