use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Query value that selects the aggregate view instead of one participant.
pub const ALL_PARTICIPANTS: &str = "*";

/// One sheet submission, exactly as it came off the spreadsheet: seven
/// positional text cells, nothing interpreted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub timestamp_text: String,
    pub participant_text: String,
    pub attendance_text: String,
    pub reading_count_text: String,
    pub reading_range_text: String,
    pub prayer_text: String,
    pub fee_text: String,
}

/// A submission after cleaning. Numeric fields fall back to 0 when the cell
/// held no usable digits; only a missing participant or an unreadable
/// timestamp removes the row entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub participant: String,
    pub attended: bool,
    pub reading_count: u32,
    pub chapter_end: u32,
    pub prayer_count: u32,
    pub fee: u64,
}

/// All of one participant's submissions for one date, summed. A participant
/// may submit several entries per day; they add up rather than overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub attended: u32,
    pub reading_count: u32,
    pub chapter_end: u32,
    pub prayer_count: u32,
    pub fee: u64,
}

impl DailySummary {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            attended: 0,
            reading_count: 0,
            chapter_end: 0,
            prayer_count: 0,
            fee: 0,
        }
    }
}

/// Running fee total up to and including `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CumulativePoint {
    pub date: NaiveDate,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRank {
    pub participant: String,
    pub total_attended: u32,
}

#[derive(Debug, Serialize)]
pub struct ParticipantsResponse {
    pub participants: Vec<String>,
    pub row_count: usize,
}

/// What the report endpoint serves, tagged by selection mode so the page can
/// switch between the help state, one participant, and the aggregate view.
#[derive(Debug, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ReportResponse {
    Unselected {
        participants: Vec<String>,
    },
    Participant {
        participant: String,
        daily: Vec<DailySummary>,
        cumulative_fee: Vec<CumulativePoint>,
    },
    All {
        ranking: Vec<AttendanceRank>,
        cumulative_fee: BTreeMap<String, Vec<CumulativePoint>>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Unselected,
    All,
    Participant(String),
}

impl Selection {
    /// Maps the `participant` query value: absent or blank means nothing is
    /// selected yet, `*` means every participant.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Selection::Unselected,
            Some(name) if name == ALL_PARTICIPANTS => Selection::All,
            Some(name) => Selection::Participant(name.to_string()),
        }
    }
}
