use std::path::PathBuf;
use std::sync::Arc;

use crate::app::run_app;
use crate::args::Config;
use crate::run_with;
use crate::wiring::App;
use common::adapter::{FileJsonLog, NoopLog};
use common::ports::outbound::EnvResolver;

/// テスト用の EnvResolver（プロセスの環境変数に依存しない）
struct MockEnvResolver {
    provider: Option<String>,
    model: Option<String>,
    log_file: Option<PathBuf>,
}

impl MockEnvResolver {
    fn echo() -> Self {
        Self {
            provider: Some("echo".to_string()),
            model: None,
            log_file: None,
        }
    }
}

impl EnvResolver for MockEnvResolver {
    fn provider_override(&self) -> Option<String> {
        self.provider.clone()
    }

    fn model_override(&self) -> Option<String> {
        self.model.clone()
    }

    fn log_file(&self) -> Option<PathBuf> {
        self.log_file.clone()
    }
}

fn echo_app() -> App {
    App {
        env_resolver: Arc::new(MockEnvResolver::echo()),
        logger: Arc::new(NoopLog),
    }
}

fn prompt_config(words: &[&str]) -> Config {
    Config {
        prompt_args: words.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

#[test]
fn test_run_app_with_help() {
    let config = Config {
        help: true,
        ..Default::default()
    };
    let result = run_app(&config, &echo_app());
    assert_eq!(result.unwrap(), 0);
}

#[test]
fn test_run_app_without_prompt() {
    // プロンプトなし → usage エラー、終了コード 1
    let config = Config::default();
    let err = run_app(&config, &echo_app()).unwrap_err();
    assert!(err.is_usage());
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().contains("No prompt provided"));
}

#[test]
fn test_run_app_flags_only_is_no_prompt() {
    // フラグだけではプロンプトにならない（ネットワークにも進まない）
    let config = Config {
        verbose: true,
        ..Default::default()
    };
    let err = run_app(&config, &echo_app()).unwrap_err();
    assert!(err.is_usage());
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_run_app_with_prompt_echo() {
    // echo プロバイダならネットワークなしで成功する
    let config = prompt_config(&["Hello"]);
    assert_eq!(run_app(&config, &echo_app()).unwrap(), 0);
}

#[test]
fn test_run_app_verbose_with_echo() {
    let config = Config {
        verbose: true,
        ..prompt_config(&["Hello", "there"])
    };
    assert_eq!(run_app(&config, &echo_app()).unwrap(), 0);
}

#[test]
fn test_run_app_unknown_provider() {
    let app = App {
        env_resolver: Arc::new(MockEnvResolver {
            provider: Some("bogus".to_string()),
            model: None,
            log_file: None,
        }),
        logger: Arc::new(NoopLog),
    };
    let err = run_app(&prompt_config(&["hi"]), &app).unwrap_err();
    assert_eq!(err.exit_code(), 78);
    assert!(err.to_string().contains("Unknown provider"));
}

#[test]
fn test_run_app_gemini_missing_api_key() {
    // プロバイダ未指定時は gemini。認証情報が無ければリモート呼び出し前に失敗する
    std::env::remove_var("GEMINI_API_KEY");
    let app = App {
        env_resolver: Arc::new(MockEnvResolver {
            provider: None,
            model: None,
            log_file: None,
        }),
        logger: Arc::new(NoopLog),
    };
    let err = run_app(&prompt_config(&["hi"]), &app).unwrap_err();
    assert_ne!(err.exit_code(), 0);
    assert!(err.to_string().contains("GEMINI_API_KEY"));
}

#[test]
fn test_run_with_writes_lifecycle_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocai.jsonl");
    let app = App {
        env_resolver: Arc::new(MockEnvResolver::echo()),
        logger: Arc::new(FileJsonLog::new(&path)),
    };

    let result = run_with(prompt_config(&["Hello"]), &app);
    assert_eq!(result.unwrap(), 0);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("command started"));
    assert!(contents.contains("command finished"));
    for line in contents.lines() {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(v["layer"], "cli");
    }
}

#[test]
fn test_run_with_logs_error_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocai.jsonl");
    let app = App {
        env_resolver: Arc::new(MockEnvResolver::echo()),
        logger: Arc::new(FileJsonLog::new(&path)),
    };

    let result = run_with(Config::default(), &app);
    assert!(result.is_err());

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"level\":\"error\""));
    assert!(contents.contains("No prompt provided"));
}
