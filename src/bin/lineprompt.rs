// パス: src/bin/lineprompt.rs
// 役割: 対話セッションを標準入出力で起動する CLI エントリポイント
// 意図: 設定ファイルと CLI 引数を組み合わせ、行エコーのデモシェルを提供する
// 関連ファイル: src/prompt/session.rs, src/settings.rs, src/config.rs
use std::io;
use std::process::ExitCode;

use clap::Parser;
use lineprompt::prompt::{is_interactive, Outcome, Session, SessionError};
use lineprompt::settings::Settings;
use lineprompt::{config, logging};

/// 入力行をそのまま返す対話シェル。`:quit` / `:exit` で終了する。
#[derive(Debug, Parser)]
#[command(name = "lineprompt", version, about)]
struct Cli {
    /// 設定ディレクトリ配下で使うアプリケーション名
    #[arg(long, default_value = "lineprompt")]
    app_name: String,
    /// 開始時に 1 度だけ表示する見出し（設定ファイルより優先）
    #[arg(long)]
    header: Option<String>,
    /// 各入力の前に表示するプロンプト（設定ファイルより優先）
    #[arg(long)]
    prompt: Option<String>,
    /// 端末でなくてもプロンプトを表示する
    #[arg(long)]
    force_prompt: bool,
    /// 1 行だけ処理して終了する
    #[arg(long)]
    once: bool,
    /// 設定ファイルのパスを表示して終了する
    #[arg(long)]
    print_config_path: bool,
    /// デバッグログを有効にする
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let location = Settings::location(&cli.app_name);
    if cli.print_config_path {
        return match location {
            Some(path) => {
                println!("{}", path.display());
                ExitCode::SUCCESS
            }
            None => {
                eprintln!(
                    "設定ディレクトリを決定できません (app: {})",
                    cli.app_name
                );
                ExitCode::FAILURE
            }
        };
    }

    let settings = match location.as_deref().map(Settings::load_from) {
        Some(Ok(settings)) => settings,
        Some(Err(err)) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
        None => {
            tracing::debug!(dir = ?config::dir(&cli.app_name), "no settings location");
            Settings::default()
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let interactive = cli.force_prompt || is_interactive(&stdin, &stdout);
    let options = settings
        .merge(cli.header, cli.prompt)
        .into_options(interactive);

    let mut session = Session::new(stdin.lock(), stdout.lock(), echo, options);
    let result = if cli.once {
        session.once()
    } else {
        session.run()
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_terminate() => ExitCode::SUCCESS,
        Err(SessionError::Handler(cause)) => {
            eprintln!("ハンドラがエラーを返しました: {}", cause);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("対話セッション中にエラーが発生しました: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn echo(line: &str) -> Outcome {
    match line {
        ":quit" | ":exit" => Outcome::terminate("bye"),
        _ => Outcome::continue_with(line),
    }
}
