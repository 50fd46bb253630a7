//! Echoプロバイダの実装
//!
//! このプロバイダは実際にLLM APIを呼び出さず、プロンプトをそのまま返します。
//! デバッグやテスト用に使用します。

use crate::error::Error;
use crate::llm::provider::{LlmProvider, TokenUsage};
use serde_json::{json, Value};

/// Echoプロバイダ
pub struct EchoProvider;

impl EchoProvider {
    /// 新しいEchoプロバイダを作成
    pub fn new() -> Self {
        Self
    }
}

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error> {
        let mut payload = json!({
            "query": query,
        });

        if let Some(system) = system_instruction {
            payload["system_instruction"] = json!(system);
        }

        Ok(payload)
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        // ネットワークには出ず、リクエストをそのままレスポンスとして返す
        Ok(request_json.to_string())
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        let query = v["query"].as_str().unwrap_or("");
        Ok(Some(format!("[echo] {}", query)))
    }

    fn parse_usage(&self, _response_json: &str) -> Result<Option<TokenUsage>, Error> {
        // Echoプロバイダは usage メタデータを持たない
        Ok(None)
    }
}
