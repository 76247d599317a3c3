use std::io::{self, BufRead};

/// Lines of a text stream ending in `\n`, `\r\n` or a lone `\r`.
/// Terminators are not included in the yielded lines.
pub(crate) struct TextLines<R> {
    rdr: R,
}

impl<R: BufRead> TextLines<R> {
    pub(crate) fn new(rdr: R) -> TextLines<R> {
        TextLines { rdr }
    }

    /// Read one line, `None` at EOF.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        let mut read = 0;

        loop {
            let available = self.rdr.fill_buf()?;
            if available.is_empty() {
                break;
            }
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(i) => {
                    let terminator = available[i];
                    bytes.extend_from_slice(&available[..i]);
                    self.rdr.consume(i + 1);
                    read += i + 1;
                    // a `\r\n` pair may straddle two buffer fills
                    if terminator == b'\r' && self.rdr.fill_buf()?.first() == Some(&b'\n') {
                        self.rdr.consume(1);
                    }
                    break;
                }
                None => {
                    let n = available.len();
                    bytes.extend_from_slice(available);
                    self.rdr.consume(n);
                    read += n;
                }
            }
        }

        if read == 0 {
            return Ok(None);
        }
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl<R: BufRead> Iterator for TextLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<io::Result<String>> {
        self.read_line().transpose()
    }
}
