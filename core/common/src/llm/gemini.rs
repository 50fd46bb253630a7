//! Gemini プロバイダの実装

use crate::error::Error;
use crate::llm::provider::{LlmProvider, TokenUsage};
use serde_json::{json, Value};
use std::env;

/// デフォルトのモデル名
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-001";

/// Gemini プロバイダ
#[derive(Debug)]
pub struct GeminiProvider {
    model: String,
    api_key: String,
}

impl GeminiProvider {
    /// 新しいGeminiプロバイダを作成
    ///
    /// # Arguments
    /// * `model` - モデル名（デフォルト: [`DEFAULT_MODEL`]）
    ///
    /// # Returns
    /// * `Ok(Self)` - プロバイダ
    /// * `Err(Error)` - GEMINI_API_KEY 未設定（ネットワークに出る前に検出する）
    pub fn new(model: Option<String>) -> Result<Self, Error> {
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| Error::env("GEMINI_API_KEY environment variable is not set"))?;

        Ok(Self { model, api_key })
    }
}

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error> {
        let mut payload = json!({});

        // システム指示を追加
        if let Some(system) = system_instruction {
            payload["systemInstruction"] = json!({
                "parts": [{"text": system}]
            });
        }

        // ユーザープロンプトは 1 リクエスト 1 メッセージ（会話履歴は持たない）
        payload["contents"] = json!([{
            "role": "user",
            "parts": [{"text": query}]
        }]);

        Ok(payload)
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let client = reqwest::blocking::Client::new();
        let response = client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            // エラーレスポンスを解析してメッセージを抽出
            let error_msg = if let Ok(v) = serde_json::from_str::<Value>(&response_text) {
                v["error"]["message"]
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
            } else {
                format!("HTTP {}: {}", status, response_text)
            };
            return Err(Error::http(format!("Gemini API error: {}", error_msg)));
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        // エラーチェック
        if let Some(error) = v.get("error") {
            let error_msg = error["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("Gemini API error: {}", error_msg)));
        }

        // テキストを抽出
        let text = v["candidates"][0]["content"]["parts"]
            .as_array()
            .and_then(|parts| parts.iter().find_map(|part| part["text"].as_str()))
            .map(|s| s.to_string());

        Ok(text)
    }

    fn parse_usage(&self, response_json: &str) -> Result<Option<TokenUsage>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        let meta = &v["usageMetadata"];
        let usage = match (
            meta["promptTokenCount"].as_u64(),
            meta["candidatesTokenCount"].as_u64(),
        ) {
            (Some(prompt), Some(response)) => Some(TokenUsage {
                prompt_tokens: prompt,
                response_tokens: response,
            }),
            _ => None,
        };

        Ok(usage)
    }
}
