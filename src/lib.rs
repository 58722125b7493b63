// パス: src/lib.rs
// 役割: Crate root wiring modules and exports
// 意図: Expose the prompt session, config path resolver and settings loader
// 関連ファイル: src/prompt/mod.rs, src/config.rs, src/settings.rs
//! lineprompt (Rust) ルートモジュール
//!
//! 目的:
//! - 入力を 1 行ずつ読み、呼び出し側のハンドラへ渡し、結果を書き出す対話ループを提供する。
//! - アプリケーションごとの設定ファイルの置き場所を解決する補助関数を提供する。
//!
//! 方針:
//! - コメント/ドキュメントは日本語、識別子は英語。
//! - 同期・ブロッキング I/O のみ。スレッドや非同期ランタイムは使わない。
//! - パブリックAPIは最小限。

pub mod config;
pub mod logging;
pub mod prompt;
pub mod settings;

// 便利な再エクスポート（必要最小限）
pub use crate::prompt::{Outcome, Session, SessionError, SessionOptions};
