//! LLMドライバーの実装
//!
//! プロバイダに依存しない共通処理を提供します。

use crate::error::Error;
use crate::llm::provider::{LlmProvider, TokenUsage};

/// 1回の生成結果
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// レスポンスのテキスト
    pub text: String,
    /// トークン使用量（プロバイダが返す場合のみ）
    pub usage: Option<TokenUsage>,
}

/// LLMドライバー
pub struct LlmDriver<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> LlmDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// LLMにプロンプトを送信してレスポンスを取得
    ///
    /// # Arguments
    /// * `query` - ユーザープロンプト
    /// * `system_instruction` - システム指示（オプション）
    ///
    /// # Returns
    /// * `Ok(LlmResponse)` - 応答テキストとトークン使用量
    /// * `Err(Error)` - エラーメッセージと終了コード
    pub fn generate(
        &self,
        query: &str,
        system_instruction: Option<&str>,
    ) -> Result<LlmResponse, Error> {
        // リクエストペイロードを生成
        let payload = self
            .provider
            .make_request_payload(query, system_instruction)?;

        // JSON文字列に変換
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;

        // HTTPリクエストを実行（ブロッキング、1プロセス1回）
        let response_json = self.provider.make_http_request(&request_json)?;

        // レスポンスからテキストを抽出
        let text = self
            .provider
            .parse_response_text(&response_json)?
            .ok_or_else(|| Error::http("No text in response"))?;

        let usage = self.provider.parse_usage(&response_json)?;

        Ok(LlmResponse { text, usage })
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
