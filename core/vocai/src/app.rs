//! プロンプトを1回送信して応答を表示する usecase

use crate::args::Config;
use crate::wiring::App;
use common::error::Error;
use common::llm::{create_driver, resolve_provider};
use common::system_prompt::system_instruction;

/// プロンプトを構築し、モデルに送信して応答テキストを表示する。
/// プロンプトが空の場合はプロバイダ構築（とネットワーク）に進まない。
pub fn run_app(config: &Config, app: &App) -> Result<i32, Error> {
    if config.help {
        print_help();
        return Ok(0);
    }

    // プロンプトを構築（非フラグ引数をスペース結合）
    let prompt = config.prompt_args.join(" ");
    if prompt.trim().is_empty() {
        return Err(Error::invalid_argument(
            "No prompt provided. Please provide a message to send to the model.",
        ));
    }

    let resolved = resolve_provider(app.env_resolver.as_ref())?;
    let driver = create_driver(resolved.provider_type, resolved.model)?;

    if config.verbose {
        eprintln!("User prompt: {}", prompt);
    }

    let response = driver.generate(&prompt, Some(system_instruction()))?;

    println!("{}", response.text);

    if config.verbose {
        if let Some(usage) = response.usage {
            eprintln!("Prompt tokens: {}", usage.prompt_tokens);
            eprintln!("Response tokens: {}", usage.response_tokens);
        }
    }

    Ok(0)
}

pub fn print_usage() {
    eprintln!("Usage: vocai [options] <prompt...>");
}

fn print_help() {
    println!("Usage: vocai [options] <prompt...>");
    println!("Options:");
    println!("  -h, --help       Show this help message");
    println!("  -v, --verbose    Print the prompt and token usage to stderr");
    println!();
    println!("Description:");
    println!("  Send a prompt to the configured model and print its response.");
    println!("  The provider and model can be overridden with VOCAI_PROVIDER and");
    println!("  VOCAI_MODEL; Gemini requires GEMINI_API_KEY.");
    println!();
    println!("Examples:");
    println!("  vocai \"Recommend a vertical for this trainee profile\"");
    println!("  vocai --verbose Why was Welding recommended?");
}
