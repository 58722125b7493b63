// パス: src/prompt/session.rs
// 役割: 読み取り→ハンドラ呼び出し→出力を繰り返す対話セッション本体
// 意図: 連続実行 (run) と 1 回実行 (once) の失敗時挙動を 1 か所で定義する
// 関連ファイル: src/prompt/line_reader.rs, src/prompt/outcome.rs, src/prompt/error.rs
//! 対話セッションのメインループ。
//!
//! 入力から 1 行読み、前後の空白とタブを除いてハンドラへ渡し、返ってきた
//! テキストを出力へ書き出す。失敗時の扱いは次のとおり。
//!
//! | 状況 | 挙動 |
//! |---|---|
//! | ヘッダの書き込み失敗 | 即座にエラーを返す |
//! | プロンプトの書き込み失敗 | ログのみ、読み取りへ進む |
//! | 次の行が無い | `run` は成功、`once` は `SessionError::Terminate` |
//! | `Outcome::Terminate` | テキストを可能な範囲で出力し、成功として終了 |
//! | `Outcome::Fail` | テキストを可能な範囲で出力し、原因をエラーとして返す |
//! | `Outcome::Continue` | テキスト + 改行を出力、書き込み失敗は致命的 |
//! | 入力側の I/O エラー | `run` はループを抜けた後に返す、`once` は行が読めた場合のみ返す |

use std::io::{self, Read, Write};

use super::error::{SessionError, SessionResult};
use super::line_reader::{LineReader, ReadResult};
use super::outcome::{Handler, Outcome};
use super::terminal::{self, TerminalStream};

/// セッション構築時の設定。どちらも既定では無効。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// 最初の読み取り前に 1 度だけ出力する見出し。空文字列は未設定と同じ。
    pub header: Option<String>,
    /// 各読み取りの前に出力するプロンプト（改行なし）。空文字列は未設定と同じ。
    pub prompt: Option<String>,
}

impl SessionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    fn header(&self) -> Option<&str> {
        non_empty(self.header.as_deref())
    }

    fn prompt(&self) -> Option<&str> {
        non_empty(self.prompt.as_deref())
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// 1 回の起動につき 1 つ作られる対話セッション。
///
/// 入出力ハンドルは開いた状態で渡され、閉じるのは呼び出し側の責任。
/// 借用 (`&mut Stdout` など) を渡すか、`into_inner` で取り戻す。
///
/// # Examples
/// ```
/// use lineprompt::prompt::{Outcome, Session, SessionOptions};
///
/// let input = std::io::Cursor::new("hello\n");
/// let mut output = Vec::new();
/// let mut session = Session::new(
///     input,
///     &mut output,
///     |line: &str| Outcome::continue_with(line.to_uppercase()),
///     SessionOptions::new().with_header("Welcome"),
/// );
/// session.run().unwrap();
/// drop(session);
/// assert_eq!(output, b"Welcome\nHELLO\n");
/// ```
pub struct Session<R, W, H> {
    reader: LineReader<R>,
    output: W,
    handler: H,
    options: SessionOptions,
    header_sent: bool,
}

impl<R, W, H> Session<R, W, H>
where
    R: Read,
    W: Write,
    H: Handler,
{
    pub fn new(input: R, output: W, handler: H, options: SessionOptions) -> Self {
        Self {
            reader: LineReader::new(input),
            output,
            handler,
            options,
            header_sent: false,
        }
    }

    /// 入力が尽きるか、ハンドラが終了・失敗を返すまで対話を続ける。
    pub fn run(&mut self) -> SessionResult<()> {
        self.emit_header()?;
        loop {
            let line = match self.next_line() {
                ReadResult::Line(line) => line,
                ReadResult::Eof => break,
            };
            if let Step::Stop(result) = self.dispatch(&line)? {
                return result;
            }
        }
        self.reader_error()
    }

    /// 1 行だけ処理する。
    ///
    /// 次の行が得られなければ、入力側の I/O エラーの有無に関わらず
    /// `SessionError::Terminate` を返す。
    pub fn once(&mut self) -> SessionResult<()> {
        self.emit_header()?;
        let line = match self.next_line() {
            ReadResult::Line(line) => line,
            ReadResult::Eof => {
                tracing::debug!("no line available during single-shot read");
                return Err(SessionError::Terminate);
            }
        };
        if let Step::Stop(result) = self.dispatch(&line)? {
            return result;
        }
        self.reader_error()
    }

    /// 入出力ハンドルを呼び出し側へ返す。入力側の未読バッファは破棄される。
    pub fn into_inner(self) -> (R, W) {
        (self.reader.into_inner(), self.output)
    }

    fn emit_header(&mut self) -> io::Result<()> {
        if self.header_sent {
            return Ok(());
        }
        if let Some(header) = self.options.header() {
            writeln!(self.output, "{}", header)?;
            self.output.flush()?;
            tracing::debug!("header emitted");
        }
        self.header_sent = true;
        Ok(())
    }

    fn next_line(&mut self) -> ReadResult {
        if let Some(prompt) = self.options.prompt() {
            // プロンプトは表示できなくても読み取りを続ける。
            let written = self
                .output
                .write_all(prompt.as_bytes())
                .and_then(|_| self.output.flush());
            if let Err(err) = written {
                tracing::warn!(error = %err, "failed to write prompt");
            }
        }
        let read = self.reader.next_line();
        if let ReadResult::Line(line) = &read {
            tracing::debug!(line = %line, "line read");
        }
        read
    }

    fn dispatch(&mut self, line: &str) -> SessionResult<Step> {
        match self.handler.handle(line) {
            Outcome::Continue(text) => {
                writeln!(self.output, "{}", text)?;
                self.output.flush()?;
                Ok(Step::Next)
            }
            Outcome::Terminate(text) => {
                tracing::debug!("handler requested termination");
                self.write_best_effort(&text);
                Ok(Step::Stop(Ok(())))
            }
            Outcome::Fail(text, cause) => {
                tracing::debug!(error = %cause, "handler failed");
                self.write_best_effort(&text);
                Ok(Step::Stop(Err(SessionError::Handler(cause))))
            }
        }
    }

    fn write_best_effort(&mut self, text: &str) {
        let written = writeln!(self.output, "{}", text).and_then(|_| self.output.flush());
        if let Err(err) = written {
            tracing::warn!(error = %err, "failed to write final handler output");
        }
    }

    fn reader_error(&mut self) -> SessionResult<()> {
        match self.reader.take_error() {
            Some(err) => Err(SessionError::Io(err)),
            None => Ok(()),
        }
    }
}

impl<R, W, H> Session<R, W, H>
where
    R: TerminalStream,
    W: TerminalStream,
{
    /// 入力と出力がともに端末に接続されたファイルかどうかを毎回問い合わせる。
    ///
    /// セッションの挙動自体は変えない。プロンプトを付けるかどうかの判断材料。
    pub fn is_interactive(&self) -> bool {
        terminal::is_interactive(self.reader.get_ref(), &self.output)
    }
}

/// ハンドラ呼び出し後に次の行へ進むか、結果を確定して止まるか。
enum Step {
    Next,
    Stop(SessionResult<()>),
}

#[cfg(test)]
mod tests {
    use super::{Session, SessionOptions};
    use crate::prompt::{Outcome, SessionError};
    use std::io::{self, Cursor, Write};

    /// `fail_after` バイトを超えて書き込むと失敗するライター。
    struct FlakyWriter {
        written: Vec<u8>,
        fail_after: usize,
    }

    impl Write for FlakyWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() + buf.len() > self.fail_after {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn echo(line: &str) -> Outcome {
        Outcome::continue_with(line)
    }

    #[test]
    /// 空文字列の設定は未設定と同じく何も出力しないことを確認する。
    fn empty_header_and_prompt_are_ignored() {
        let mut out = Vec::new();
        let opts = SessionOptions::new().with_header("").with_prompt("");
        let mut session = Session::new(Cursor::new("a\n"), &mut out, echo, opts);
        session.run().unwrap();
        drop(session);
        assert_eq!(out, b"a\n");
    }

    #[test]
    /// `once` を繰り返してもヘッダは最初の 1 回だけ出力されることを検証する。
    fn header_is_emitted_once_across_repeated_once_calls() {
        let mut out = Vec::new();
        let opts = SessionOptions::new().with_header("hi");
        let mut session = Session::new(Cursor::new("1\n2\n"), &mut out, echo, opts);
        session.once().unwrap();
        session.once().unwrap();
        assert!(matches!(session.once(), Err(SessionError::Terminate)));
        assert!(matches!(session.once(), Err(SessionError::Terminate)));
        drop(session);
        assert_eq!(String::from_utf8(out).unwrap(), "hi\n1\n2\n");
    }

    #[test]
    /// プロンプトの書き込み失敗は無視され、結果の書き込み失敗は致命的になることを確かめる。
    fn prompt_failure_is_swallowed_but_result_failure_is_fatal() {
        let writer = FlakyWriter {
            written: Vec::new(),
            fail_after: 0,
        };
        let opts = SessionOptions::new().with_prompt("> ");
        let mut seen = Vec::new();
        let mut session = Session::new(
            Cursor::new("x\ny\n"),
            writer,
            |line: &str| {
                seen.push(line.to_string());
                Outcome::continue_with(line)
            },
            opts,
        );
        let err = session.run().unwrap_err();
        assert!(matches!(err, SessionError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        drop(session);
        assert_eq!(seen, vec!["x"]);
    }

    #[test]
    /// 終了・失敗時の出力は書き込めなくても結果に影響しないことを検証する。
    fn best_effort_writes_do_not_change_the_result() {
        let writer = FlakyWriter {
            written: Vec::new(),
            fail_after: 0,
        };
        let mut session = Session::new(
            Cursor::new("q\n"),
            writer,
            |_: &str| Outcome::terminate("bye"),
            SessionOptions::default(),
        );
        assert!(session.run().is_ok());

        let writer = FlakyWriter {
            written: Vec::new(),
            fail_after: 0,
        };
        let mut session = Session::new(
            Cursor::new("q\n"),
            writer,
            |_: &str| Outcome::fail("no", "bad"),
            SessionOptions::default(),
        );
        assert!(matches!(session.run(), Err(SessionError::Handler(_))));
    }

    #[test]
    /// ヘッダの書き込みに失敗したら入力を読まずに終わることを確認する。
    fn header_failure_aborts_before_reading() {
        let writer = FlakyWriter {
            written: Vec::new(),
            fail_after: 2,
        };
        let mut calls = 0;
        let mut session = Session::new(
            Cursor::new("x\n"),
            writer,
            |line: &str| {
                calls += 1;
                Outcome::continue_with(line)
            },
            SessionOptions::new().with_header("Welcome"),
        );
        assert!(matches!(session.once(), Err(SessionError::Io(_))));
        drop(session);
        assert_eq!(calls, 0);
    }

    #[test]
    /// `into_inner` で入出力ハンドルを取り戻せることを確かめる。
    fn into_inner_returns_handles() {
        let session = Session::new(
            Cursor::new("x\n"),
            Vec::new(),
            echo,
            SessionOptions::default(),
        );
        let (input, output) = session.into_inner();
        assert_eq!(input.into_inner(), "x\n");
        assert!(output.is_empty());
    }
}
