//! CSV corpus loading
//!
//! The corpus ships as ISO-8859-1 CSV with the column layout
//! `sender,receiver,date,subject,body,label,urls` and a header row. Only the
//! columns the classifier touches are kept. Any load failure is fatal: no
//! partial result is meaningful without a complete, correctly shaped
//! dataset.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use super::types::EmailRecord;
use crate::error::{PhishError, Result};

const COL_SENDER: usize = 0;
const COL_SUBJECT: usize = 3;
const COL_BODY: usize = 4;
const COL_LABEL: usize = 5;
const COL_URLS: usize = 6;

/// Corpus file reader.
pub struct CorpusLoader;

impl CorpusLoader {
    /// Loads every record from the corpus at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<EmailRecord>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path.as_ref())?;

        let mut records = Vec::new();
        for (index, row) in reader.byte_records().enumerate() {
            let row = row?;
            // Header is row 1; the first data row is row 2.
            let row_number = index + 2;

            let field = |col: usize| -> Result<String> {
                row.get(col).map(decode_latin1).ok_or_else(|| {
                    PhishError::Dataset(format!("row {row_number}: missing column {col}"))
                })
            };

            let label = field(COL_LABEL)?;
            let is_phishing = match label.trim() {
                "1" => true,
                "0" => false,
                other => {
                    return Err(PhishError::Dataset(format!(
                        "row {row_number}: label must be 0 or 1, got {other:?}"
                    )))
                }
            };

            records.push(EmailRecord {
                sender: field(COL_SENDER)?,
                subject: field(COL_SUBJECT)?,
                body: field(COL_BODY)?,
                is_phishing,
                urls: field(COL_URLS)?,
            });
        }

        info!(records = records.len(), "corpus loaded");
        Ok(records)
    }
}

/// ISO-8859-1 maps every byte directly to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const HEADER: &str = "sender,receiver,date,subject,body,label,urls\n";

    #[test]
    fn test_load_keeps_the_classifier_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corpus.csv");
        std::fs::write(
            &path,
            format!(
                "{HEADER}\
                 alice@example.com,bob@example.com,2008-01-01,hello,\"line one, line two\",0,0\n\
                 mallory@example.com,bob@example.com,2008-01-02,urgent,act now,1,1\n"
            ),
        )
        .unwrap();

        let records = CorpusLoader::load(&path).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].sender, "alice@example.com");
        assert_eq!(records[0].subject, "hello");
        assert_eq!(records[0].body, "line one, line two");
        assert!(!records[0].is_phishing);

        assert_eq!(records[1].subject, "urgent");
        assert!(records[1].is_phishing);
        assert_eq!(records[1].urls, "1");
    }

    #[test]
    fn test_load_decodes_latin1_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corpus.csv");
        let mut bytes = Vec::new();
        bytes.extend_from_slice(HEADER.as_bytes());
        bytes.extend_from_slice(b"a@example.com,b@example.com,2008-01-01,caf\xe9,body,0,0\n");
        std::fs::write(&path, bytes).unwrap();

        let records = CorpusLoader::load(&path).unwrap();
        assert_eq!(records[0].subject, "café");
    }

    #[test]
    fn test_load_rejects_bad_labels() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corpus.csv");
        std::fs::write(
            &path,
            format!("{HEADER}a@example.com,b@example.com,2008-01-01,subject,body,2,0\n"),
        )
        .unwrap();

        let err = CorpusLoader::load(&path).unwrap_err();
        assert!(matches!(err, PhishError::Dataset(_)));
    }

    #[test]
    fn test_load_rejects_short_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corpus.csv");
        std::fs::write(&path, format!("{HEADER}a@example.com,b@example.com\n")).unwrap();

        let err = CorpusLoader::load(&path).unwrap_err();
        assert!(matches!(err, PhishError::Dataset(_)));
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        assert!(CorpusLoader::load("/nonexistent/corpus.csv").is_err());
    }
}
