//! The `keywright` binary, run in a sandboxed home directory

use std::fs;

use crate::common::{
    PHONETIC_PATH, Sandbox, WORD_LIST_PATH, mount_phonetic, start_word_list_mock, stdout_lines,
};

const SPECIALS: &str = "!@#$%^&*()?";

fn is_strong(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| SPECIALS.contains(c))
}

#[test]
fn single_password_prints_bare_value() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["password"]);
    assert!(output.status.success(), "{output:?}");

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].chars().count(), 25);
    assert!(is_strong(&lines[0]));
}

#[test]
fn several_passwords_print_numbered() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["password", "-q", "5", "-l", "12", "--strategy", "sample"]);
    assert!(output.status.success(), "{output:?}");

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 5);
    for (index, line) in lines.iter().enumerate() {
        let (id, value) = line.split_once(". ").unwrap();
        assert_eq!(id, (index + 1).to_string());
        assert_eq!(value.chars().count(), 12);
        assert!(is_strong(value), "{value}");
    }
}

#[test]
fn obfuscated_output_hides_values() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["password", "-q", "2", "-o", "-s"]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        stdout_lines(&output),
        [format!("1. {}", "*".repeat(25)), format!("2. {}", "*".repeat(25))]
    );
}

#[test]
fn file_output_writes_newline_terminated_lines() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["password", "-q", "3", "-f", "-c"]);
    assert!(output.status.success(), "{output:?}");

    let written = fs::read_to_string(sandbox.home().join("passwords.txt")).unwrap();
    assert!(written.ends_with('\n'));
    let values: Vec<&str> = written.lines().collect();
    assert_eq!(values.len(), 3);
    assert!(values.iter().all(|v| is_strong(v)));
}

#[test]
fn json_output_lists_credentials() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["password", "-q", "2", "--json"]);
    assert!(output.status.success(), "{output:?}");

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1]["id"], 2);
    assert_eq!(entries[1]["kind"], "password");
}

#[test]
fn out_of_range_length_fails() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["password", "-l", "8"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("between 12 and 31"), "{stderr}");
}

#[test]
fn quantity_above_configured_maximum_fails() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[output]\nmax_qty = 3\n");
    let output = sandbox.run(&["password", "-q", "4"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("between 1 and 3"), "{stderr}");
}

#[test]
fn malformed_config_is_reported() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[password\n");
    let output = sandbox.run(&["password"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config.toml"), "{stderr}");
}

#[tokio::test]
async fn passphrase_curates_on_first_run() {
    let server = start_word_list_mock("Lanterns kettles anchors bridges darn\n").await;
    let sandbox = Sandbox::new();
    sandbox.write_config(&format!(
        "[passphrase]\ncorpus_url = \"{}{WORD_LIST_PATH}\"\nmin_word_length = 4\n",
        server.uri()
    ));
    fs::write(sandbox.app_dir().join("english_expletive.txt"), "darn\n").unwrap();

    let output = tokio::task::spawn_blocking(move || {
        let output = sandbox.run(&["passphrase", "-q", "3", "-n", "4"]);
        (sandbox, output)
    });
    let (sandbox, output) = output.await.unwrap();
    assert!(output.status.success(), "{output:?}");

    let corpus = ["anchor", "bridge", "kettle", "lantern"];
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 3);
    for line in &lines {
        let (_, phrase) = line.split_once(". ").unwrap();
        let words: Vec<&str> = phrase.split(' ').collect();
        assert_eq!(words.len(), 4);
        assert!(words.iter().all(|w| corpus.contains(w)), "{phrase}");
    }
    assert_eq!(
        fs::read_to_string(sandbox.app_dir().join("dictionary.txt")).unwrap(),
        "anchor\nbridge\nkettle\nlantern\n"
    );
}

#[tokio::test]
async fn phonetic_passphrases_come_from_the_service() {
    let server = wiremock::MockServer::start().await;
    mount_phonetic(&server, &["golf ALPHA four seven hotel", "xray lima NINE zulu echo"]).await;
    let sandbox = Sandbox::new();
    sandbox.write_config(&format!(
        "[phonetic]\napi_url = \"{}{PHONETIC_PATH}\"\n",
        server.uri()
    ));

    let output = tokio::task::spawn_blocking(move || sandbox.run(&["phonetic", "-q", "2", "-n", "3"]))
        .await
        .unwrap();
    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        stdout_lines(&output),
        ["1. golf ALPHA four", "2. xray lima NINE"]
    );
}

#[test]
fn curate_reports_unreachable_source() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[passphrase]\ncorpus_url = \"http://127.0.0.1:1/popular.txt\"\n");
    let output = sandbox.run(&["curate"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("word list unavailable"), "{stderr}");
}
