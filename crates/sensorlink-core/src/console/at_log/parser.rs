use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::console::{SourceError, UplinkEvent, UplinkSource};

use super::layout;
use super::reader::{decode_hex, send_payload_text};

pub struct AtLogSource<R> {
    reader: R,
    line: Vec<u8>,
    lines_read: u64,
}

impl AtLogSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> AtLogSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line: Vec::with_capacity(layout::LINE_BUFFER_CAPACITY),
            lines_read: 0,
        }
    }
}

impl<R: BufRead> UplinkSource for AtLogSource<R> {
    fn next_uplink(&mut self) -> Result<Option<UplinkEvent>, SourceError> {
        loop {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
            self.lines_read += 1;

            // Serial noise must not end the log; bad bytes become U+FFFD.
            let line = String::from_utf8_lossy(&self.line);
            let Some(text) = send_payload_text(&line) else {
                continue;
            };
            return Ok(Some(UplinkEvent {
                line: self.lines_read,
                payload_hex: text.to_string(),
                payload: decode_hex(text),
            }));
        }
    }

    fn lines_read(&self) -> u64 {
        self.lines_read
    }
}
