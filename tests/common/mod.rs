//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const WORD_LIST_PATH: &str = "/popular.txt";
pub const PHONETIC_PATH: &str = "/api/";

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Start a mock server that serves `body` as the raw word list.
pub async fn start_word_list_mock(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WORD_LIST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;
    server
}

/// Mount a phonetic API response built from `phonetic` strings.
pub async fn mount_phonetic(server: &MockServer, phonetic: &[&str]) {
    let body: Vec<serde_json::Value> = phonetic
        .iter()
        .map(|p| serde_json::json!({"password": "unused", "phonetic": p}))
        .collect();
    Mock::given(method("GET"))
        .and(path(PHONETIC_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// An isolated home directory for running the binary.
pub struct Sandbox {
    home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    pub fn app_dir(&self) -> PathBuf {
        self.home().join(".keywright")
    }

    pub fn write_config(&self, toml: &str) {
        fs::create_dir_all(self.app_dir()).expect("create app dir");
        fs::write(self.app_dir().join("config.toml"), toml).expect("write config");
    }

    /// Run the binary with `args`, working directory and HOME inside the sandbox.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_keywright"))
            .args(args)
            .current_dir(self.home())
            .env("HOME", self.home())
            .env_remove("KEYWRIGHT_LOG")
            .output()
            .expect("spawn keywright")
    }
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
