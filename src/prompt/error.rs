// パス: src/prompt/error.rs
// 役割: 対話セッションが返すエラー型とエイリアスを定義する
// 意図: I/O 失敗・ハンドラ失敗・正常終了シグナルを呼び出し側で区別できるようにする
// 関連ファイル: src/prompt/session.rs, src/prompt/outcome.rs, src/prompt/mod.rs

use std::error::Error as StdError;
use std::io;

use thiserror::Error;

/// ハンドラが失敗理由として返すエラーの型。
pub type HandlerError = Box<dyn StdError + Send + Sync + 'static>;

/// `Session::run` / `Session::once` が返しうるエラー種別。
#[derive(Debug, Error)]
pub enum SessionError {
    /// ヘッダ・結果の書き込み、または入力読み取りで発生した I/O エラー。
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// ハンドラが `Outcome::Fail` で返した原因。
    #[error("handler failed: {0}")]
    Handler(#[source] HandlerError),
    /// セッションを正常に終えるべきことを示す制御シグナル（真の失敗ではない）。
    #[error("session terminated")]
    Terminate,
}

impl SessionError {
    /// 正常終了シグナルかどうかを判定する。
    pub fn is_terminate(&self) -> bool {
        matches!(self, SessionError::Terminate)
    }

    /// ハンドラ由来のエラーを包む。
    pub fn handler(cause: impl Into<HandlerError>) -> Self {
        SessionError::Handler(cause.into())
    }
}

/// 対話セッションの結果を表す型。
pub type SessionResult<T> = Result<T, SessionError>;
