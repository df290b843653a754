use async_trait::async_trait;
use csv::ReaderBuilder;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::SourceConfig;
use crate::errors::SourceError;
use crate::models::RawRow;

/// Where raw sheet rows come from. The dashboard only ever sees a complete
/// snapshot; partial fetches are surfaced as errors, not partial data.
#[async_trait]
pub trait RowSource: Send + Sync {
    async fn fetch_rows(&self) -> Result<Vec<RawRow>, SourceError>;

    /// Human-readable label for startup logging.
    fn describe(&self) -> String;
}

/// The shared sheet's CSV export, fetched over HTTP.
pub struct SheetCsvSource {
    client: reqwest::Client,
    url: String,
}

impl SheetCsvSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl RowSource for SheetCsvSource {
    async fn fetch_rows(&self) -> Result<Vec<RawRow>, SourceError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }
        let body = response.bytes().await?;
        let rows = decode_rows(&body)?;
        info!("fetched {} usable rows from sheet export", rows.len());
        Ok(rows)
    }

    fn describe(&self) -> String {
        format!("sheet export at {}", self.url)
    }
}

/// A local CSV copy of the sheet. Used in development and by the HTTP tests.
pub struct FileCsvSource {
    path: PathBuf,
}

impl FileCsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RowSource for FileCsvSource {
    async fn fetch_rows(&self) -> Result<Vec<RawRow>, SourceError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let rows = decode_rows(&bytes)?;
        info!(
            "read {} usable rows from {}",
            rows.len(),
            self.path.display()
        );
        Ok(rows)
    }

    fn describe(&self) -> String {
        format!("csv file at {}", self.path.display())
    }
}

impl SourceConfig {
    pub fn build(&self) -> Box<dyn RowSource> {
        match self {
            SourceConfig::SheetUrl(url) => Box::new(SheetCsvSource::new(url.clone())),
            SourceConfig::CsvPath(path) => Box::new(FileCsvSource::new(path.clone())),
        }
    }
}

/// Positional decode: seven cells per submission, in form order. The header
/// row is skipped, short rows are padded with empty cells, and rows without
/// a participant are dropped before they reach normalization.
fn decode_rows(bytes: &[u8]) -> Result<Vec<RawRow>, SourceError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(bytes);
    // A payload that is not CSV at all (an HTML error page, say) fails here.
    reader.headers()?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                warn!("skipping unreadable sheet row: {err}");
                continue;
            }
        };
        let cell = |index: usize| record.get(index).unwrap_or("").to_string();
        if cell(1).trim().is_empty() {
            continue;
        }
        rows.push(RawRow {
            timestamp_text: cell(0),
            participant_text: cell(1),
            attendance_text: cell(2),
            reading_count_text: cell(3),
            reading_range_text: cell(4),
            prayer_text: cell(5),
            fee_text: cell(6),
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "\
타임스탬프,이름,회의 참석,성경 회독,말씀 읽기,기도,경건비
2024. 03. 01, Kim ,참석했습니다,3회독,13~15장,5일째,\"1,000원\"
2024. 03. 02,Lee,불참,1회,7장,2일,0원
2024. 03. 03,,참석,1회,1장,1일,100원
2024. 03. 04,Park,참석
";

    #[test]
    fn decode_skips_header_and_empty_participants() {
        let rows = decode_rows(SHEET.as_bytes()).expect("sheet should decode");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].participant_text, " Kim ");
        assert_eq!(rows[0].fee_text, "1,000원");
        assert_eq!(rows[1].participant_text, "Lee");
    }

    #[test]
    fn short_rows_get_empty_trailing_cells() {
        let rows = decode_rows(SHEET.as_bytes()).expect("sheet should decode");
        let park = &rows[2];
        assert_eq!(park.participant_text, "Park");
        assert_eq!(park.attendance_text, "참석");
        assert_eq!(park.reading_count_text, "");
        assert_eq!(park.fee_text, "");
    }

    #[test]
    fn empty_sheet_is_not_an_error() {
        let rows = decode_rows(b"a,b,c,d,e,f,g\n").expect("header-only sheet");
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn file_source_reads_rows() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sheet.csv");
        std::fs::write(&path, SHEET).expect("write fixture");

        let source = FileCsvSource::new(&path);
        let rows = source.fetch_rows().await.expect("fetch should succeed");
        assert_eq!(rows.len(), 3);
    }

    #[tokio::test]
    async fn missing_file_is_a_source_error() {
        let source = FileCsvSource::new("/definitely/not/here.csv");
        let err = source.fetch_rows().await.expect_err("fetch should fail");
        assert!(matches!(err, SourceError::Io(_)));
    }
}
