// パス: src/prompt/line_reader.rs
// 役割: 入力ストリームから 1 行ずつ取り出し、読み取りエラーを記録する
// 意図: 終端と I/O エラーを区別し、エラーはループ終了後に報告できるようにする
// 関連ファイル: src/prompt/session.rs
use std::io::{self, BufRead, BufReader, Read};

/// 1 行の最大バイト数（改行を除く）。超えた行は読み取りエラーとして扱う。
pub(crate) const MAX_LINE_LEN: usize = 64 * 1024;

/// 行入力が返す結果。読み取りエラーは `Eof` 扱いにした上で内部へ記録する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ReadResult {
    Line(String),
    Eof,
}

/// 入力ストリーム上のカーソル。1 回の `next_line` で 1 行だけ進む。
pub(crate) struct LineReader<R> {
    inner: BufReader<R>,
    buf: Vec<u8>,
    error: Option<io::Error>,
}

impl<R: Read> LineReader<R> {
    pub(crate) fn new(input: R) -> Self {
        Self {
            inner: BufReader::new(input),
            buf: Vec::new(),
            error: None,
        }
    }

    /// 次の 1 行を読み、改行と前後の空白・タブを除いて返す。
    ///
    /// エラーの直前まで読めた改行なしの末尾は 1 行として返し、エラーは記録する。
    /// 記録済みのエラーがある間は常に `Eof` を返す。
    /// `MAX_LINE_LEN` を超える行は返さず、`InvalidData` エラーとして記録する。
    pub(crate) fn next_line(&mut self) -> ReadResult {
        if self.error.is_some() {
            return ReadResult::Eof;
        }
        self.buf.clear();
        let limit = MAX_LINE_LEN as u64 + 1;
        match (&mut self.inner).take(limit).read_until(b'\n', &mut self.buf) {
            Ok(0) => ReadResult::Eof,
            Ok(n) if n > MAX_LINE_LEN && self.buf.last() != Some(&b'\n') => {
                tracing::debug!(limit = MAX_LINE_LEN, "input line too long");
                self.error = Some(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("line exceeds {} bytes", MAX_LINE_LEN),
                ));
                ReadResult::Eof
            }
            Ok(_) => self.current_line(),
            Err(err) => {
                tracing::debug!(error = %err, "input read failed");
                self.error = Some(err);
                if self.buf.is_empty() {
                    ReadResult::Eof
                } else {
                    self.current_line()
                }
            }
        }
    }

    fn current_line(&self) -> ReadResult {
        let line = String::from_utf8_lossy(strip_newline(&self.buf));
        ReadResult::Line(trim_blanks(&line).to_string())
    }

    /// 記録済みの読み取りエラーを取り出す。通常の終端では `None`。
    pub(crate) fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl<R> LineReader<R> {
    pub(crate) fn get_ref(&self) -> &R {
        self.inner.get_ref()
    }

    /// 未読のバッファ内容は破棄される。
    pub(crate) fn into_inner(self) -> R {
        self.inner.into_inner()
    }
}

/// 末尾の `\n` と、その直前の `\r` を取り除く。
fn strip_newline(raw: &[u8]) -> &[u8] {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    raw.strip_suffix(b"\r").unwrap_or(raw)
}

/// 行頭・行末のスペースとタブだけを取り除く（他の空白文字は残す）。
pub(crate) fn trim_blanks(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '\t')
}
