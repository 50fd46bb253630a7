//! 環境変数解決 Outbound ポート
//!
//! プロバイダ・モデル・ログ出力先を環境変数から解決する。
//! アプリ側はこの trait 経由でのみ環境変数にアクセスする
//! （GEMINI_API_KEY だけはプロバイダ構築時に直接読む）。

use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// プロバイダ名を環境変数 VOCAI_PROVIDER から取得
    fn provider_override(&self) -> Option<String>;

    /// モデル名を環境変数 VOCAI_MODEL から取得
    fn model_override(&self) -> Option<String>;

    /// 構造化ログの出力先を環境変数 VOCAI_LOG_FILE から取得
    /// （未設定ならログは出力しない）
    fn log_file(&self) -> Option<PathBuf>;
}
