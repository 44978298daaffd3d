//! Locating and decoding reference table files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use flate2::read::GzDecoder;
use tracing::{debug, error, warn};

/// Open `name` inside `dir`, trying the plain file, then `.zst`, then `.gz`.
///
/// Returns `None` (with a warning) when no variant exists or the first one
/// found cannot be opened.
pub(super) fn open_table(dir: &Path, name: &str) -> Option<Box<dyn Read>> {
    let Some(path) = find_variant(dir, name) else {
        warn!(dir = %dir.display(), table = name, "Reference table not found");
        return None;
    };

    match open_path(&path) {
        Ok(reader) => Some(reader),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to open reference table");
            None
        }
    }
}

fn find_variant(dir: &Path, name: &str) -> Option<PathBuf> {
    ["", ".zst", ".gz"]
        .iter()
        .map(|suffix| dir.join(format!("{name}{suffix}")))
        .find(|p| p.exists())
}

fn open_path(path: &Path) -> std::io::Result<Box<dyn Read>> {
    let file = File::open(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("zst") => {
            debug!(path = %path.display(), "Loading zstd compressed table");
            Ok(Box::new(zstd::stream::read::Decoder::new(file)?))
        }
        Some("gz") => {
            debug!(path = %path.display(), "Loading gzip compressed table");
            Ok(Box::new(BufReader::new(GzDecoder::new(file))))
        }
        _ => Ok(Box::new(BufReader::new(file))),
    }
}

/// Feed every data row of a CSV table to `callback`.
///
/// The header row is skipped. Rows with fewer than `min_fields` columns are
/// logged and skipped. A read error stops the table; rows already delivered
/// are kept.
pub(super) fn for_each_record<R, F>(table: &str, reader: R, min_fields: usize, mut callback: F)
where
    R: Read,
    F: FnMut(&StringRecord),
{
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut record = StringRecord::new();
    loop {
        match csv.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => return,
            Err(e) => {
                error!(table, error = %e, "Error parsing CSV file");
                return;
            }
        }

        if record.len() < min_fields {
            warn!(
                table,
                line = record.position().map(|p| p.line()),
                fields = record.len(),
                expected = min_fields,
                "Skipping short record"
            );
            continue;
        }
        callback(&record);
    }
}

/// Field `i` of `record`, or `""` if absent.
pub(super) fn field(record: &StringRecord, i: usize) -> &str {
    record.get(i).unwrap_or("")
}

/// Four consecutive fields starting at `start`, as used for DMS coordinates.
pub(super) fn dms_fields(record: &StringRecord, start: usize) -> [&str; 4] {
    [
        field(record, start),
        field(record, start + 1),
        field(record, start + 2),
        field(record, start + 3),
    ]
}

/// Turn `"AMERICAN AIRLINES"` into `"American Airlines"`.
pub(super) fn stop_shouting(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut start_of_word = true;
    for c in s.chars() {
        if c.is_alphanumeric() {
            if start_of_word {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            start_of_word = false;
        } else {
            out.push(c);
            start_of_word = c.is_whitespace() || c == '-' || c == '/';
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn collect(csv: &str, min_fields: usize) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        for_each_record("test", csv.as_bytes(), min_fields, |r| {
            rows.push(r.iter().map(str::to_string).collect());
        });
        rows
    }

    #[test]
    fn test_header_is_skipped() {
        let rows = collect("a,b\n1,2\n3,4\n", 2);
        assert_eq!(rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let rows = collect("a,b,c\n1,2,3\n4,5\n6,7,8\n", 3);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], "6");
    }

    #[test]
    fn test_read_error_keeps_earlier_rows() {
        let mut data = b"a,b\n1,2\n".to_vec();
        data.extend_from_slice(&[0xff, 0xfe, b',', b'x', b'\n']);
        data.extend_from_slice(b"3,4\n");

        let mut rows = Vec::new();
        for_each_record("test", data.as_slice(), 2, |r| {
            rows.push(r.get(0).unwrap_or("").to_string());
        });
        assert_eq!(rows, vec!["1"]);
    }

    #[test]
    fn test_stop_shouting() {
        assert_eq!(stop_shouting("AMERICAN AIRLINES"), "American Airlines");
        assert_eq!(stop_shouting("UNITED STATES"), "United States");
        assert_eq!(stop_shouting("AIR-INDIA"), "Air-India");
        assert_eq!(stop_shouting(""), "");
    }

    #[test]
    fn test_open_table_prefers_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("t.csv"), "plain").unwrap();
        std::fs::write(dir.path().join("t.csv.gz"), "ignored").unwrap();

        let mut s = String::new();
        open_table(dir.path(), "t.csv")
            .unwrap()
            .read_to_string(&mut s)
            .unwrap();
        assert_eq!(s, "plain");
    }

    #[test]
    fn test_open_table_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let file = File::create(dir.path().join("t.csv.gz")).unwrap();
        let mut enc = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        enc.write_all(b"zipped").unwrap();
        enc.finish().unwrap();

        let mut s = String::new();
        open_table(dir.path(), "t.csv")
            .unwrap()
            .read_to_string(&mut s)
            .unwrap();
        assert_eq!(s, "zipped");
    }

    #[test]
    fn test_open_table_zstd() {
        let dir = tempfile::tempdir().unwrap();
        let compressed = zstd::encode_all(&b"squeezed"[..], 3).unwrap();
        std::fs::write(dir.path().join("t.csv.zst"), compressed).unwrap();

        let mut s = String::new();
        open_table(dir.path(), "t.csv")
            .unwrap()
            .read_to_string(&mut s)
            .unwrap();
        assert_eq!(s, "squeezed");
    }

    #[test]
    fn test_open_table_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(open_table(dir.path(), "nope.csv").is_none());
    }
}
