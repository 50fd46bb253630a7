//! 環境変数からのプロバイダ・モデル解決

use crate::error::Error;
use crate::llm::factory::ProviderType;
use crate::ports::outbound::EnvResolver;

/// 解決済みプロバイダ（ProviderType + モデル名）
#[derive(Debug, Clone)]
pub struct ResolvedProvider {
    pub provider_type: ProviderType,
    /// モデル名の上書き（None のときは各プロバイダのデフォルト）
    pub model: Option<String>,
}

/// 利用可能なビルトインプロバイダ名
fn builtin_provider_names() -> &'static [&'static str] {
    &["echo", "gemini"]
}

/// VOCAI_PROVIDER / VOCAI_MODEL から ResolvedProvider を解決する。
/// 未設定時は gemini。不明なプロバイダ名はエラーで利用可能一覧を返す。
pub fn resolve_provider(env: &dyn EnvResolver) -> Result<ResolvedProvider, Error> {
    let requested = env.provider_override();
    let effective = requested.as_deref().unwrap_or("gemini");

    let provider_type = ProviderType::from_str(effective).ok_or_else(|| {
        Error::env(format!(
            "Unknown provider: '{}' (VOCAI_PROVIDER). Available: {}",
            effective,
            builtin_provider_names().join(", ")
        ))
    })?;

    Ok(ResolvedProvider {
        provider_type,
        model: env.model_override(),
    })
}
