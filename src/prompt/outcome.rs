// パス: src/prompt/outcome.rs
// 役割: ハンドラの呼び出し規約（Outcome と Handler トレイト）を定義する
// 意図: 「特定のエラー値で終了を表す」方式をやめ、結果をタグ付きで明示する
// 関連ファイル: src/prompt/session.rs, src/prompt/error.rs

use super::error::HandlerError;

/// 1 行分の処理結果。どの分岐でも利用者へ表示するテキストを持つ。
#[derive(Debug)]
pub enum Outcome {
    /// テキストを出力して次の行へ進む。
    Continue(String),
    /// テキストを出力し、セッションを正常終了する。
    Terminate(String),
    /// テキストを出力し、原因をエラーとして呼び出し側へ返す。
    Fail(String, HandlerError),
}

impl Outcome {
    pub fn continue_with(text: impl Into<String>) -> Self {
        Outcome::Continue(text.into())
    }

    pub fn terminate(text: impl Into<String>) -> Self {
        Outcome::Terminate(text.into())
    }

    pub fn fail(text: impl Into<String>, cause: impl Into<HandlerError>) -> Self {
        Outcome::Fail(text.into(), cause.into())
    }

    /// 出力すべきテキストを参照する。
    pub fn text(&self) -> &str {
        match self {
            Outcome::Continue(s) | Outcome::Terminate(s) | Outcome::Fail(s, _) => s,
        }
    }
}

/// 1 行を受け取り 1 つの `Outcome` を返す呼び出し側の処理。
///
/// 状態を持たせたい場合はクロージャに閉じ込める。セッション側からは
/// 1 行ごとに 1 回呼ばれるだけの関数として扱われる。
pub trait Handler {
    fn handle(&mut self, line: &str) -> Outcome;
}

impl<F> Handler for F
where
    F: FnMut(&str) -> Outcome,
{
    fn handle(&mut self, line: &str) -> Outcome {
        self(line)
    }
}
