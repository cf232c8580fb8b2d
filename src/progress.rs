//! 進捗バーとログ出力の共存
//!
//! 進捗バーはすべて共通の `MultiProgress` に登録し、
//! ログ（stderr）はバーを一時的に消してから書き込む。

use indicatif::{MultiProgress, ProgressBar};
use std::io::{self, Write};
use std::sync::OnceLock;

fn multi() -> &'static MultiProgress {
    static MULTI: OnceLock<MultiProgress> = OnceLock::new();
    MULTI.get_or_init(MultiProgress::new)
}

/// 共通の描画先に登録した進捗バーを作る
pub fn bar(len: u64) -> ProgressBar {
    multi().add(ProgressBar::new(len))
}

/// tracing-subscriber 用の stderr ライター
#[derive(Debug, Clone, Copy, Default)]
pub struct LogWriter;

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        multi().suspend(|| io::stderr().write(buf))
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        multi().suspend(|| io::stderr().write_all(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_writer_with_active_bar() {
        let pb = bar(3);
        pb.inc(1);

        let mut writer = LogWriter;
        writer.write_all(b"log line while a bar is active\n").unwrap();
        writer.flush().unwrap();

        pb.inc(2);
        assert_eq!(pb.position(), 3);
        pb.finish_and_clear();
    }
}
