//! vocai 共通ライブラリ
//!
//! `vocai` コマンドから使う機能を提供します。

/// エラーハンドリング
pub mod error;

/// LLMドライバーとプロバイダ
pub mod llm;

/// Outbound ポート定義
pub mod ports;

/// 標準アダプタ実装
pub mod adapter;

/// 固定システム指示
pub mod system_prompt;
