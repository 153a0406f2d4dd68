//! Line-delimited domain input.
//!
//! Turns an async byte stream into a lazy stream of [`Domain`]s. Blank lines
//! are skipped. A read error (or an over-long line) is yielded once and ends
//! the stream, because line boundaries after a fault can't be trusted.

use std::io;

use futures::stream::{self, Stream};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::config::MAX_LINE_BYTES;
use crate::domain::Domain;

/// Reads domains from `reader`, one per line.
///
/// Each line has its terminator (`\n` or `\r\n`) removed and is then
/// normalized by [`Domain::from_line`]. Invalid UTF-8 is replaced rather than
/// rejected.
///
/// # Errors
///
/// The stream yields `Err` for an I/O error or for a line of
/// [`MAX_LINE_BYTES`] bytes or more, and ends right after. At most
/// `MAX_LINE_BYTES + 1` bytes of a line are buffered before it is rejected.
pub fn read_domains<R>(reader: R) -> impl Stream<Item = io::Result<Domain>>
where
    R: AsyncBufRead + Unpin,
{
    stream::unfold(Some((reader, Vec::new())), |state| async move {
        let (mut reader, mut buf) = state?;
        loop {
            buf.clear();
            // Room for the longest accepted line plus "\r\n"
            let mut limited = (&mut reader).take(MAX_LINE_BYTES as u64 + 1);
            match limited.read_until(b'\n', &mut buf).await {
                Ok(0) => return None,
                Ok(_) => {
                    let line = strip_terminator(&buf);
                    if line.len() >= MAX_LINE_BYTES {
                        let err = io::Error::new(
                            io::ErrorKind::InvalidData,
                            format!("input line reaches the {MAX_LINE_BYTES} byte limit"),
                        );
                        return Some((Err(err), None));
                    }
                    if let Some(domain) = Domain::from_line(&String::from_utf8_lossy(line)) {
                        return Some((Ok(domain), Some((reader, buf))));
                    }
                    log::trace!("Skipping blank input line");
                }
                Err(e) => return Some((Err(e), None)),
            }
        }
    })
}

fn strip_terminator(buf: &[u8]) -> &[u8] {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    line.strip_suffix(b"\r").unwrap_or(line)
}
