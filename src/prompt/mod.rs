// パス: src/prompt/mod.rs
// 役割: 対話セッション関連モジュールのファサードと再公開
// 意図: 呼び出し側には Session / Outcome / エラー型 / 端末判定だけを見せる
// 関連ファイル: src/prompt/session.rs, src/prompt/outcome.rs, src/bin/lineprompt.rs
//! 行単位の対話ループを構成するモジュール群をまとめたファサード。
//!
//! - `session`: 読み取り・ハンドラ呼び出し・出力のメインループ
//! - `outcome`: ハンドラの呼び出し規約
//! - `terminal`: 入出力ハンドルの端末判定
//! - `error`: セッションが返すエラー型

pub mod error;
mod line_reader;
pub mod outcome;
pub mod session;
pub mod terminal;

pub use error::{HandlerError, SessionError, SessionResult};
pub use outcome::{Handler, Outcome};
pub use session::{Session, SessionOptions};
pub use terminal::{is_interactive, TerminalStream};
