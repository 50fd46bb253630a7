//! コマンドライン引数の解析
//!
//! 認識するフラグは -h/--help と -v/--verbose のみ。それ以外の "--" で始まる
//! トークンは黙って読み飛ばし、残りをプロンプトの語として順に保持する。

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: プロンプトとトークン使用量を stderr に出力する
    pub verbose: bool,
    pub prompt_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            verbose: false,
            prompt_args: Vec::new(),
        }
    }
}

pub fn parse_args() -> Config {
    let args: Vec<String> = std::env::args().collect();
    parse_args_from(&args)
}

fn parse_args_from(args: &[String]) -> Config {
    let mut config = Config::default();

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.help = true,
            "-v" | "--verbose" => config.verbose = true,
            s if s.starts_with("--") => {
                // 未知のフラグはエラーにせず、プロンプトにも含めない
            }
            _ => config.prompt_args.push(arg.clone()),
        }
    }

    config
}
