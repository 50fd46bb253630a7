mod app;
mod args;
mod wiring;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::process;

use common::error::Error;
use common::ports::outbound::{now_iso8601, LogLevel, LogRecord};

use app::{print_usage, run_app};
use args::{parse_args, Config};
use wiring::{wire, App};

fn main() {
    // .env があれば読み込む（無ければ何もしない）
    dotenvy::dotenv().ok();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("vocai: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

fn run() -> Result<i32, Error> {
    let config = parse_args();
    let app = wire();
    run_with(config, &app)
}

/// ライフサイクルログを挟んで usecase を実行する（テストからも使う入口）
fn run_with(config: Config, app: &App) -> Result<i32, Error> {
    let _ = app.logger.log(&LogRecord {
        ts: now_iso8601(),
        level: LogLevel::Info,
        message: "command started".to_string(),
        layer: Some("cli".to_string()),
        kind: Some("lifecycle".to_string()),
        fields: {
            let mut m = BTreeMap::new();
            m.insert("verbose".to_string(), serde_json::json!(config.verbose));
            m.insert(
                "prompt_words".to_string(),
                serde_json::json!(config.prompt_args.len()),
            );
            Some(m)
        },
    });

    let result = run_app(&config, app);

    let code = match &result {
        Ok(code) => *code,
        Err(e) => e.exit_code(),
    };
    let _ = app.logger.log(&LogRecord {
        ts: now_iso8601(),
        level: LogLevel::Info,
        message: "command finished".to_string(),
        layer: Some("cli".to_string()),
        kind: Some("lifecycle".to_string()),
        fields: {
            let mut m = BTreeMap::new();
            m.insert("exit_code".to_string(), serde_json::json!(code));
            Some(m)
        },
    });
    if let Err(ref e) = result {
        let _ = app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Error,
            message: e.to_string(),
            layer: Some("cli".to_string()),
            kind: Some("error".to_string()),
            fields: None,
        });
    }
    result
}
