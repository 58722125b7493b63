// パス: src/logging.rs
// 役割: tracing の購読者を標準エラー出力へ設定する
// 意図: セッションの出力とログが混ざらないようにし、環境変数で詳細度を変えられるようにする
// 関連ファイル: src/bin/lineprompt.rs, src/prompt/session.rs

use once_cell::sync::OnceCell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ログ詳細度を指定する環境変数。書式は `EnvFilter` と同じ。
pub const LOG_ENV: &str = "LINEPROMPT_LOG";

const DEFAULT_FILTER: &str = "warn";

static INIT: OnceCell<()> = OnceCell::new();

/// ログ出力を初期化する。2 回目以降の呼び出しは何もしない。
///
/// `verbose` が真なら環境変数が無いときの既定を `lineprompt=debug` にする。
pub fn init(verbose: bool) {
    INIT.get_or_init(|| {
        let fallback = if verbose {
            "lineprompt=debug"
        } else {
            DEFAULT_FILTER
        };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
        let result = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init();
        if let Err(err) = result {
            // 他の購読者が先に設定済みならそちらを使う。
            eprintln!("ログ初期化をスキップしました: {}", err);
        }
    });
}
