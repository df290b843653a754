use chrono::NaiveDate;
use tracing::debug;

use crate::extract::{digits_only, first_integer, last_integer};
use crate::models::{DailyRecord, RawRow};

/// Substring the attendance cell carries when the participant was present.
const ATTENDANCE_MARKER: &str = "참석";

/// The sheet's canonical timestamp layout ("2024. 03. 01").
const SHEET_DATE_FORMAT: &str = "%Y. %m. %d";

// Deployments have exported looser timestamps too; these are tried in order
// against the leading part of the cell, so a trailing clock time or stray
// punctuation does not cost us the row.
const FALLBACK_DATE_FORMATS: &[&str] = &["%Y. %m. %d", "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Cleans a batch of raw sheet rows into daily records. Rows with an
/// unusable timestamp are dropped; a single bad row never fails the batch.
pub fn normalize_rows(rows: &[RawRow]) -> Vec<DailyRecord> {
    let mut records = Vec::with_capacity(rows.len());
    let mut dropped = 0usize;

    for row in rows {
        match normalize_row(row) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!("dropped {dropped} of {} rows during normalization", rows.len());
    }
    records
}

/// Cleans one submission, or `None` when the participant cell is blank or
/// the timestamp cannot be read as a calendar date.
pub fn normalize_row(row: &RawRow) -> Option<DailyRecord> {
    let participant = row.participant_text.trim();
    if participant.is_empty() {
        return None;
    }
    let date = parse_submission_date(&row.timestamp_text)?;

    Some(DailyRecord {
        date,
        participant: participant.to_string(),
        attended: row.attendance_text.contains(ATTENDANCE_MARKER),
        reading_count: first_integer(&row.reading_count_text).unwrap_or(0),
        chapter_end: last_integer(&row.reading_range_text).unwrap_or(0),
        prayer_count: first_integer(&row.prayer_text).unwrap_or(0),
        fee: digits_only(&row.fee_text).unwrap_or(0),
    })
}

/// Strict sheet format first, then the lenient fallbacks.
pub fn parse_submission_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, SHEET_DATE_FORMAT) {
        return Some(date);
    }
    for format in FALLBACK_DATE_FORMATS {
        if let Ok((date, _rest)) = NaiveDate::parse_and_remainder(text, format) {
            return Some(date);
        }
    }
    None
}
