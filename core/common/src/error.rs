//! エラーハンドリング
//!
//! エラーメッセージとプロセス終了コードを対で扱う共通エラー型。
//! usage エラーのみ終了コード 1（プロンプト未指定時の CLI 契約）、
//! それ以外は sysexits に従う。

/// 共通エラー型
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// 引数不正（usage 表示の対象）
    #[error("{0}")]
    Usage(String),
    /// 環境変数・設定の不備
    #[error("{0}")]
    Env(String),
    /// HTTP・リモート API の失敗
    #[error("{0}")]
    Http(String),
    /// JSON の生成・解析失敗
    #[error("{0}")]
    Json(String),
    /// ファイル I/O の失敗
    #[error("{0}")]
    Io(String),
}

impl Error {
    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// 環境変数エラー
    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    /// HTTPエラー
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// JSONエラー
    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    /// I/Oエラー
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// usage エラーか（main で usage 表示の要否に使う）
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 1,
            Self::Env(_) => 78,
            Self::Http(_) | Self::Io(_) => 74,
            Self::Json(_) => 65,
        }
    }
}
