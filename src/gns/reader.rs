use anyhow::{Context, Result};
use csv::{ByteRecord, ReaderBuilder};
use std::borrow::Cow;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

use crate::models::GnsRecord;

/// Open a GNS country file, gunzipping it when the name ends in `.gz`.
pub fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open GNS file: {}", path.display()))?;
    Ok(decode_input(path, file))
}

/// Wrap an already-open byte stream, decompressing it if `path` ends in `.gz`.
pub fn decode_input<R: Read + 'static>(path: &Path, raw: R) -> Box<dyn Read> {
    if path.extension().map_or(false, |e| e == "gz") {
        Box::new(GzDecoder::new(BufReader::new(raw)))
    } else {
        Box::new(BufReader::new(raw))
    }
}

/// Streams parsed records out of a tab-separated GNS country file.
///
/// Lines that fail to parse are logged and skipped; only I/O failures end the
/// iteration with an error. Fields that are not valid UTF-8 are decoded
/// lossily, with U+FFFD in place of the bad bytes.
pub struct GnsReader<R: Read> {
    inner: csv::Reader<R>,
    buf: ByteRecord,
    malformed: usize,
}

impl<R: Read> GnsReader<R> {
    pub fn new(reader: R) -> Self {
        let inner = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(b'\t')
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        Self {
            inner,
            buf: ByteRecord::new(),
            malformed: 0,
        }
    }

    /// Number of non-header lines skipped because they failed to parse.
    pub fn malformed(&self) -> usize {
        self.malformed
    }
}

fn is_header(fields: &[Cow<'_, str>]) -> bool {
    fields
        .first()
        .map(|first| {
            let first = first.trim().trim_start_matches('\u{feff}');
            first.eq_ignore_ascii_case("UFI") || first.eq_ignore_ascii_case("RC")
        })
        .unwrap_or(false)
}

impl<R: Read> Iterator for GnsReader<R> {
    type Item = Result<GnsRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.read_byte_record(&mut self.buf) {
                Ok(false) => return None,
                Ok(true) => {}
                Err(e) => {
                    return Some(Err(anyhow::Error::new(e).context("Failed to read GNS input")))
                }
            }

            let line = self.buf.position().map(|p| p.line()).unwrap_or(0);
            let fields: Vec<Cow<'_, str>> = self.buf.iter().map(String::from_utf8_lossy).collect();
            if line <= 1 && is_header(&fields) {
                debug!("Skipping header row");
                continue;
            }
            if fields.iter().any(|f| matches!(f, Cow::Owned(_))) {
                warn!("Line {} is not valid UTF-8; replacing the bad bytes", line);
            }

            match GnsRecord::from_fields(fields.iter().map(|f| f.as_ref())) {
                Ok(record) => return Some(Ok(record)),
                Err(e) => {
                    self.malformed += 1;
                    warn!("Skipping malformed line {}: {}", line, e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::column;
    use crate::models::record::tests::line;

    fn sample(name: &str, dsg: &str) -> String {
        line(&[
            (column::LAT, "10"),
            (column::LONG, "120"),
            (column::FC, "P"),
            (column::DSG, dsg),
            (column::NT, "N"),
            (column::FULL_NAME, name),
        ])
    }

    #[test]
    fn test_skips_header_and_blank_lines() {
        let input = format!(
            "UFI\tUNI\tLAT\tLONG\n{}\n\n{}\n",
            sample("Alpha", "PPL"),
            sample("Beta", "MT")
        );
        let mut reader = GnsReader::new(input.as_bytes());
        let names: Vec<String> = reader
            .by_ref()
            .map(|r| r.unwrap().full_name)
            .collect();

        assert_eq!(names, vec!["Alpha", "Beta"]);
        assert_eq!(reader.malformed(), 0);
    }

    #[test]
    fn test_malformed_lines_are_counted() {
        let input = format!("{}\nnot\ta\trecord\n{}\n", sample("Alpha", "PPL"), sample("Gamma", "PPL"));
        let mut reader = GnsReader::new(input.as_bytes());
        let count = reader.by_ref().filter(|r| r.is_ok()).count();

        assert_eq!(count, 2);
        assert_eq!(reader.malformed(), 1);
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let text = format!(
            "{}\n{}\n{}\n",
            sample("Alpha", "PPL"),
            sample("Caf#", "PPL"),
            sample("Gamma", "PPL")
        );
        // Latin-1 e-acute
        let input: Vec<u8> = text
            .bytes()
            .map(|b| if b == b'#' { 0xE9 } else { b })
            .collect();

        let mut reader = GnsReader::new(input.as_slice());
        let names: Vec<String> = reader
            .by_ref()
            .map(|r| r.unwrap().full_name)
            .collect();

        assert_eq!(names, vec!["Alpha", "Caf\u{fffd}", "Gamma"]);
        assert_eq!(reader.malformed(), 0);
    }

    #[test]
    fn test_quotes_are_literal() {
        let input = sample("\"Old\" Town", "PPL");
        let record = GnsReader::new(input.as_bytes()).next().unwrap().unwrap();
        assert_eq!(record.full_name, "\"Old\" Town");
    }
}
