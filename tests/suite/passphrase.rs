//! Passphrase assembly from corpora and phonetic sources

use keywright_core::{PassphraseAssembler, WordSource};
use keywright_sources::{PhoneticRequest, fetch_phonetic};
use keywright_types::{GenerationError, PhraseBounds, WordCorpus};
use wiremock::MockServer;

use crate::common::{PHONETIC_PATH, mount_phonetic, seeded};

#[test]
fn three_word_phrase_is_drawn_from_the_corpus() {
    let corpus = WordCorpus::from_words(["alpha", "bravo", "charlie"]);
    let mut assembler = PassphraseAssembler::new(seeded(4), PhraseBounds::CORPUS);
    let store = assembler
        .assemble(WordSource::Corpus(&corpus), 3, 1)
        .unwrap();

    assert_eq!(store.len(), 1);
    let phrase = store.values().next().unwrap();
    let words: Vec<&str> = phrase.split(' ').collect();
    assert_eq!(words.len(), 3);
    assert!(words.iter().all(|w| ["alpha", "bravo", "charlie"].contains(w)));
}

#[test]
fn every_phrase_has_the_clamped_word_count() {
    let corpus = WordCorpus::from_words(["anchor", "bridge", "kettle", "lantern"]);
    let mut assembler = PassphraseAssembler::new(seeded(5), PhraseBounds::CORPUS);
    for (requested, expected) in [(2, 2), (6, 6), (9, 3), (1, 3)] {
        let store = assembler
            .assemble(WordSource::Corpus(&corpus), requested, 5)
            .unwrap();
        assert!(
            store.values().all(|v| v.split(' ').count() == expected),
            "requested {requested}"
        );
    }
}

#[test]
fn empty_corpus_is_reported() {
    let corpus = WordCorpus::default();
    let mut assembler = PassphraseAssembler::new(seeded(6), PhraseBounds::CORPUS);
    assert_eq!(
        assembler.assemble(WordSource::Corpus(&corpus), 3, 1),
        Err(GenerationError::EmptyCorpus)
    );
}

#[tokio::test]
async fn phonetic_entries_become_truncated_phrases() {
    let server = MockServer::start().await;
    mount_phonetic(
        &server,
        &[
            "golf ALPHA four seven hotel kilo papa",
            "xray lima NINE",
        ],
    )
    .await;

    let base = format!("{}{PHONETIC_PATH}", server.uri());
    let entries = fetch_phonetic(&reqwest::Client::new(), &base, &PhoneticRequest::new(16, 2))
        .await
        .unwrap();
    let strings: Vec<String> = entries.into_iter().map(|e| e.phonetic).collect();

    let mut assembler = PassphraseAssembler::new(seeded(7), PhraseBounds::PHONETIC);
    let store = assembler
        .assemble(WordSource::Phonetic(&strings), 4, 2)
        .unwrap();
    let values: Vec<&str> = store.values().collect();
    assert_eq!(values, ["golf ALPHA four seven", "xray lima NINE"]);
}
