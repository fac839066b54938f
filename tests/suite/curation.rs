//! Word-list curation and the persisted corpus lifecycle

use keywright_core::{WordListCurator, tokenize};
use keywright_sources::{CorpusStore, load_or_curate, refresh_corpus};
use keywright_types::{Blacklist, GenerationError};

use crate::common::{WORD_LIST_PATH, start_word_list_mock};

#[test]
fn plurals_and_duplicates_collapse() {
    let curator = WordListCurator::new(4).unwrap();
    let corpus = curator.curate(
        ["Apple", "apples", "apple", "cat", "Elephant", "elephants"],
        &Blacklist::from_words(["cat"]),
    );
    assert_eq!(corpus.words(), ["apple", "elephant"]);
}

#[test]
fn curated_output_is_a_fixed_point() {
    let raw = "Lanterns lantern KETTLES anchors bridges cities boxes wishes \
               churches geese people peoples womens darn Darns";
    let blacklist = Blacklist::from_lines("# words to avoid\ndarn\n");
    let curator = WordListCurator::new(5).unwrap();

    let first = curator.curate(tokenize(raw), &blacklist);
    let second = curator.curate(first.words(), &blacklist);
    assert_eq!(first, second);

    let words = first.words();
    assert!(words.windows(2).all(|w| w[0] < w[1]));
    assert!(words.iter().all(|w| w.len() >= 5 && !blacklist.contains(w)));
    assert!(first.contains("person") && first.contains("woman"));
}

#[tokio::test]
async fn curated_corpus_is_persisted_then_reused() {
    let server = start_word_list_mock("Lanterns lantern\nkettles\nDarn\n").await;
    let url = format!("{}{WORD_LIST_PATH}", server.uri());
    let dir = tempfile::tempdir().unwrap();
    let store = CorpusStore::new(dir.path().join("dictionary.txt"));
    let curator = WordListCurator::new(4).unwrap();
    let blacklist = Blacklist::from_words(["darn"]);
    let client = reqwest::Client::new();

    let fresh = load_or_curate(&store, &curator, &client, &url, &blacklist)
        .await
        .unwrap();
    assert_eq!(fresh.words(), ["kettle", "lantern"]);
    assert_eq!(
        std::fs::read_to_string(store.path()).unwrap(),
        "kettle\nlantern\n"
    );

    // Second load comes from disk even if the source goes away.
    drop(server);
    let reloaded = load_or_curate(&store, &curator, &client, &url, &blacklist)
        .await
        .unwrap();
    assert_eq!(reloaded, fresh);
}

#[tokio::test]
async fn refresh_overwrites_existing_corpus() {
    let server = start_word_list_mock("anchors bridges").await;
    let url = format!("{}{WORD_LIST_PATH}", server.uri());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dictionary.txt");
    std::fs::write(&path, "stale\n").unwrap();

    let corpus = refresh_corpus(
        &CorpusStore::new(&path),
        &WordListCurator::new(4).unwrap(),
        &reqwest::Client::new(),
        &url,
        &Blacklist::default(),
    )
    .await
    .unwrap();
    assert_eq!(corpus.words(), ["anchor", "bridge"]);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "anchor\nbridge\n");
}

#[tokio::test]
async fn unreachable_source_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_or_curate(
        &CorpusStore::new(dir.path().join("dictionary.txt")),
        &WordListCurator::new(4).unwrap(),
        &reqwest::Client::new(),
        "http://127.0.0.1:1/popular.txt",
        &Blacklist::default(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, GenerationError::SourceUnavailable(_)));
}
