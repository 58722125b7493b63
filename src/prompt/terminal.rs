// パス: src/prompt/terminal.rs
// 役割: 入出力ハンドルが端末に接続されたファイルかどうかを判定する
// 意図: プロンプト表示の要否を呼び出し側が決められるよう、副作用のない問い合わせを提供する
// 関連ファイル: src/prompt/session.rs, src/bin/lineprompt.rs
//! 端末判定。
//!
//! OS のファイルとして扱えるハンドル（`File`・標準入出力とそのロック）だけが
//! 端末になりうる。メモリ上のバッファやソケットは中身に関係なく常に偽。
//! 判定は毎回 OS に問い合わせ、結果はキャッシュしない。

use std::fs::File;
use std::io::{
    BufReader, BufWriter, Cursor, Empty, IsTerminal, LineWriter, Sink, Stderr, StderrLock, Stdin,
    StdinLock, Stdout, StdoutLock, Write,
};
use std::net::TcpStream;
use std::process::{ChildStderr, ChildStdin, ChildStdout};

/// 端末判定の対象となるハンドル。
pub trait TerminalStream {
    /// OS のファイルであり、かつ端末（Windows の MSYS/Cygwin 疑似端末を含む）に
    /// 接続されているときだけ真を返す。
    fn is_terminal_stream(&self) -> bool;
}

macro_rules! file_backed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TerminalStream for $ty {
                fn is_terminal_stream(&self) -> bool {
                    self.is_terminal()
                }
            }
        )*
    };
}

macro_rules! never_terminal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TerminalStream for $ty {
                fn is_terminal_stream(&self) -> bool {
                    false
                }
            }
        )*
    };
}

file_backed!(File, Stdin, Stdout, Stderr);
file_backed!(StdinLock<'_>, StdoutLock<'_>, StderrLock<'_>);

never_terminal!([u8], str, Vec<u8>, String, Empty, Sink, TcpStream);
never_terminal!(ChildStdin, ChildStdout, ChildStderr);

#[cfg(unix)]
never_terminal!(std::os::unix::net::UnixStream);

impl<T> TerminalStream for Cursor<T> {
    fn is_terminal_stream(&self) -> bool {
        false
    }
}

impl<T: TerminalStream + ?Sized> TerminalStream for &T {
    fn is_terminal_stream(&self) -> bool {
        (**self).is_terminal_stream()
    }
}

impl<T: TerminalStream + ?Sized> TerminalStream for &mut T {
    fn is_terminal_stream(&self) -> bool {
        (**self).is_terminal_stream()
    }
}

impl<T: TerminalStream + ?Sized> TerminalStream for Box<T> {
    fn is_terminal_stream(&self) -> bool {
        (**self).is_terminal_stream()
    }
}

impl<R: TerminalStream> TerminalStream for BufReader<R> {
    fn is_terminal_stream(&self) -> bool {
        self.get_ref().is_terminal_stream()
    }
}

impl<W: TerminalStream + Write> TerminalStream for BufWriter<W> {
    fn is_terminal_stream(&self) -> bool {
        self.get_ref().is_terminal_stream()
    }
}

impl<W: TerminalStream + Write> TerminalStream for LineWriter<W> {
    fn is_terminal_stream(&self) -> bool {
        self.get_ref().is_terminal_stream()
    }
}

/// 入力と出力の両方が端末に接続されているかを判定する。
pub fn is_interactive<R, W>(input: &R, output: &W) -> bool
where
    R: TerminalStream + ?Sized,
    W: TerminalStream + ?Sized,
{
    input.is_terminal_stream() && output.is_terminal_stream()
}
