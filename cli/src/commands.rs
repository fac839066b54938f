use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use keywright_config::KeywrightConfig;
use keywright_core::{PassphraseAssembler, WordListCurator, WordSource, generate_passwords};
use keywright_sources::{
    CorpusStore, PhoneticRequest, fetch_phonetic, http_client, load_blacklist, load_or_curate,
    refresh_corpus,
};
use keywright_types::{GenerationError, WordCorpus};
use tracing::info;

use crate::args::{Cli, Command};
use crate::output::{check_pick, emit};

pub async fn run(cli: Cli, config: &KeywrightConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Password {
            length,
            no_special,
            strategy,
            output,
        } => {
            let qty = config.check_qty(output.qty)?;
            check_pick(&output, qty)?;
            let policy = config.password_policy(length, no_special)?;
            let strategy = strategy.map_or(config.password.strategy, Into::into);
            let store = generate_passwords(&policy, qty, strategy)?;
            info!(qty, length = policy.length(), strategy = strategy.as_str(), "Generated passwords");
            emit(
                &store,
                &output,
                cli.json,
                &PathBuf::from(&config.output.passwords_file),
                &mut out,
            )
        }
        Command::Passphrase {
            words,
            refresh,
            output,
        } => {
            let qty = config.check_qty(output.qty)?;
            check_pick(&output, qty)?;
            let corpus = corpus(config, refresh).await?;
            let store = PassphraseAssembler::from_thread_rng(config.passphrase.bounds()?).assemble(
                WordSource::Corpus(&corpus),
                words.unwrap_or(config.passphrase.words),
                qty,
            )?;
            emit(
                &store,
                &output,
                cli.json,
                &PathBuf::from(&config.output.passphrases_file),
                &mut out,
            )
        }
        Command::Phonetic {
            words,
            length,
            no_special,
            output,
        } => {
            let qty = config.check_qty(output.qty)?;
            check_pick(&output, qty)?;
            let length = length.unwrap_or(config.phonetic.length);
            if length == 0 {
                return Err(GenerationError::InvalidConfiguration(
                    "phonetic password length must be positive".to_string(),
                )
                .into());
            }
            let request = PhoneticRequest {
                special: !no_special,
                exclude: config.password.exclude.clone(),
                ..PhoneticRequest::new(length, qty)
            };
            let entries = fetch_phonetic(http_client(), &config.phonetic.api_url, &request)
                .await
                .map_err(GenerationError::from)?;
            let strings: Vec<String> = entries.into_iter().map(|entry| entry.phonetic).collect();
            let store = PassphraseAssembler::from_thread_rng(config.phonetic.bounds()?).assemble(
                WordSource::Phonetic(&strings),
                words.unwrap_or(config.phonetic.words),
                qty,
            )?;
            emit(
                &store,
                &output,
                cli.json,
                &PathBuf::from(&config.output.passphrases_file),
                &mut out,
            )
        }
        Command::Curate => {
            let corpus = corpus(config, true).await?;
            writeln!(
                out,
                "Curated {} words into {}",
                corpus.len(),
                config.corpus_path().display()
            )?;
            Ok(())
        }
    }
}

async fn corpus(config: &KeywrightConfig, refresh: bool) -> Result<WordCorpus> {
    let curator = WordListCurator::new(config.passphrase.min_word_length)?;
    let blacklist = load_blacklist(&config.blacklist_path()).map_err(GenerationError::from)?;
    let store = CorpusStore::new(config.corpus_path());
    let url = config.passphrase.corpus_url.as_str();

    let corpus = if refresh {
        refresh_corpus(&store, &curator, http_client(), url, &blacklist).await
    } else {
        load_or_curate(&store, &curator, http_client(), url, &blacklist).await
    };
    corpus.with_context(|| format!("word list unavailable ({url})"))
}
