//! 標準環境変数解決実装（std::env を委譲）

use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
///
/// 空文字列は未設定として扱う。
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn provider_override(&self) -> Option<String> {
        env::var("VOCAI_PROVIDER").ok().filter(|s| !s.is_empty())
    }

    fn model_override(&self) -> Option<String> {
        env::var("VOCAI_MODEL").ok().filter(|s| !s.is_empty())
    }

    fn log_file(&self) -> Option<PathBuf> {
        env::var("VOCAI_LOG_FILE")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }
}
