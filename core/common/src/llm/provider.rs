//! LLMプロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// トークン使用量（レスポンスの usage メタデータ由来）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenUsage {
    /// プロンプト側のトークン数
    pub prompt_tokens: u64,
    /// レスポンス側のトークン数
    pub response_tokens: u64,
}

/// LLMプロバイダのトレイト
///
/// 各プロバイダ（Gemini、Echoなど）はこのトレイトを実装する必要があります。
pub trait LlmProvider {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `query` - ユーザープロンプト
    /// * `system_instruction` - システム指示（オプション）
    ///
    /// # Returns
    /// * `Ok(Value)` - リクエストJSON
    /// * `Err(Error)` - エラーメッセージと終了コード
    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスを取得
    ///
    /// # Arguments
    /// * `request_json` - リクエストJSON文字列
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンスJSON文字列
    /// * `Err(Error)` - エラーメッセージと終了コード
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出
    ///
    /// # Returns
    /// * `Ok(Option<String>)` - 抽出したテキスト（存在しない場合はNone）
    /// * `Err(Error)` - エラーメッセージと終了コード
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;

    /// レスポンスからトークン使用量を抽出（提供されない場合はNone）
    fn parse_usage(&self, response_json: &str) -> Result<Option<TokenUsage>, Error>;
}
