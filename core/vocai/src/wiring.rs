//! 配線: 標準アダプタで App を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StdEnvResolver};
use common::ports::outbound::{EnvResolver, Log};

/// アプリが使う Outbound ポート一式
pub struct App {
    pub env_resolver: Arc<dyn EnvResolver>,
    pub logger: Arc<dyn Log>,
}

/// 標準アダプタで App を組み立てる。
/// ログ出力先は VOCAI_LOG_FILE（未設定なら何も出力しない）。
pub fn wire() -> App {
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let logger: Arc<dyn Log> = match env_resolver.log_file() {
        Some(path) => Arc::new(FileJsonLog::new(path)),
        None => Arc::new(NoopLog),
    };
    App {
        env_resolver,
        logger,
    }
}
