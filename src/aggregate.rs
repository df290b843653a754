use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

use crate::models::{
    AttendanceRank, CumulativePoint, DailyRecord, DailySummary, ReportResponse, Selection,
};

/// Groups records by participant, then sums every metric per date. Each
/// participant's summaries come out in ascending date order.
pub fn daily_summaries(records: &[DailyRecord]) -> BTreeMap<String, Vec<DailySummary>> {
    let mut grouped: BTreeMap<String, BTreeMap<NaiveDate, DailySummary>> = BTreeMap::new();

    for record in records {
        let days = grouped.entry(record.participant.clone()).or_default();
        let entry = days
            .entry(record.date)
            .or_insert_with(|| DailySummary::empty(record.date));
        entry.attended += u32::from(record.attended);
        entry.reading_count += record.reading_count;
        entry.chapter_end += record.chapter_end;
        entry.prayer_count += record.prayer_count;
        entry.fee += record.fee;
    }

    grouped
        .into_iter()
        .map(|(participant, days)| (participant, days.into_values().collect()))
        .collect()
}

/// Running fee total across date-ascending summaries.
pub fn cumulative_fees(days: &[DailySummary]) -> Vec<CumulativePoint> {
    let mut total = 0u64;
    days.iter()
        .map(|day| {
            total += day.fee;
            CumulativePoint {
                date: day.date,
                total,
            }
        })
        .collect()
}

/// Total attendance per participant, most attendance first. The sort is
/// stable, so participants tied on attendance keep submission order.
pub fn attendance_ranking(records: &[DailyRecord]) -> Vec<AttendanceRank> {
    let mut ranking: Vec<AttendanceRank> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match index.get(record.participant.as_str()) {
            Some(&at) => ranking[at].total_attended += u32::from(record.attended),
            None => {
                index.insert(record.participant.as_str(), ranking.len());
                ranking.push(AttendanceRank {
                    participant: record.participant.clone(),
                    total_attended: u32::from(record.attended),
                });
            }
        }
    }

    ranking.sort_by(|a, b| b.total_attended.cmp(&a.total_attended));
    ranking
}

/// Sorted unique participant names.
pub fn participants(records: &[DailyRecord]) -> Vec<String> {
    let names: std::collections::BTreeSet<&str> =
        records.iter().map(|r| r.participant.as_str()).collect();
    names.into_iter().map(str::to_string).collect()
}

/// The one aggregation entry point: every selection mode goes through here,
/// so the help, single-participant, and aggregate views share a code path.
pub fn report(records: &[DailyRecord], selection: &Selection) -> ReportResponse {
    match selection {
        Selection::Unselected => ReportResponse::Unselected {
            participants: participants(records),
        },
        Selection::Participant(name) => {
            let daily = daily_summaries(records)
                .remove(name.as_str())
                .unwrap_or_default();
            let cumulative_fee = cumulative_fees(&daily);
            ReportResponse::Participant {
                participant: name.clone(),
                daily,
                cumulative_fee,
            }
        }
        Selection::All => {
            let cumulative_fee = daily_summaries(records)
                .into_iter()
                .map(|(participant, days)| {
                    let series = cumulative_fees(&days);
                    (participant, series)
                })
                .collect();
            ReportResponse::All {
                ranking: attendance_ranking(records),
                cumulative_fee,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(participant: &str, date: (i32, u32, u32), attended: bool, fee: u64) -> DailyRecord {
        DailyRecord {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            participant: participant.to_string(),
            attended,
            reading_count: 1,
            chapter_end: 10,
            prayer_count: 2,
            fee,
        }
    }

    #[test]
    fn same_day_records_are_additive() {
        let records = vec![
            record("Kim", (2024, 3, 1), true, 500),
            record("Kim", (2024, 3, 1), false, 700),
        ];
        let summaries = daily_summaries(&records);
        let days = &summaries["Kim"];
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].fee, 1200);
        assert_eq!(days[0].attended, 1);
        assert_eq!(days[0].reading_count, 2);
        assert_eq!(days[0].chapter_end, 20);
        assert_eq!(days[0].prayer_count, 4);
    }

    #[test]
    fn summaries_come_out_date_ascending() {
        let records = vec![
            record("Kim", (2024, 3, 5), true, 100),
            record("Kim", (2024, 3, 1), true, 200),
            record("Kim", (2024, 3, 3), true, 300),
        ];
        let summaries = daily_summaries(&records);
        let dates: Vec<_> = summaries["Kim"].iter().map(|d| d.date).collect();
        assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn cumulative_fee_is_a_non_decreasing_running_total() {
        let records = vec![
            record("Lee", (2024, 3, 1), true, 300),
            record("Lee", (2024, 3, 2), true, 0),
            record("Lee", (2024, 3, 4), true, 450),
        ];
        let summaries = daily_summaries(&records);
        let series = cumulative_fees(&summaries["Lee"]);
        let totals: Vec<_> = series.iter().map(|p| p.total).collect();
        assert_eq!(totals, vec![300, 300, 750]);
        assert!(totals.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn single_day_participant_has_a_single_point_series() {
        let records = vec![
            record("Lee", (2024, 3, 2), true, 0),
            record("Lee", (2024, 3, 2), false, 300),
        ];
        let summaries = daily_summaries(&records);
        let series = cumulative_fees(&summaries["Lee"]);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].total, 300);
    }

    #[test]
    fn ranking_sorts_by_attendance_and_keeps_ties_stable() {
        let records = vec![
            record("Kim", (2024, 3, 1), true, 0),
            record("Lee", (2024, 3, 1), true, 0),
            record("Park", (2024, 3, 1), true, 0),
            record("Park", (2024, 3, 2), true, 0),
        ];
        let ranking = attendance_ranking(&records);
        let names: Vec<_> = ranking.iter().map(|r| r.participant.as_str()).collect();
        // Park leads; Kim and Lee are tied and keep first-seen order.
        assert_eq!(names, vec!["Park", "Kim", "Lee"]);
        assert_eq!(ranking[0].total_attended, 2);
    }

    #[test]
    fn empty_input_gives_empty_outputs() {
        assert!(daily_summaries(&[]).is_empty());
        assert!(attendance_ranking(&[]).is_empty());
        assert!(participants(&[]).is_empty());
        match report(&[], &Selection::All) {
            ReportResponse::All {
                ranking,
                cumulative_fee,
            } => {
                assert!(ranking.is_empty());
                assert!(cumulative_fee.is_empty());
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn unknown_participant_gets_empty_series_not_a_crash() {
        let records = vec![record("Kim", (2024, 3, 1), true, 100)];
        match report(&records, &Selection::Participant("Choi".to_string())) {
            ReportResponse::Participant {
                participant,
                daily,
                cumulative_fee,
            } => {
                assert_eq!(participant, "Choi");
                assert!(daily.is_empty());
                assert!(cumulative_fee.is_empty());
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn unselected_mode_lists_participants_only() {
        let records = vec![
            record("Lee", (2024, 3, 1), true, 0),
            record("Kim", (2024, 3, 1), true, 0),
        ];
        match report(&records, &Selection::Unselected) {
            ReportResponse::Unselected { participants } => {
                assert_eq!(participants, vec!["Kim", "Lee"]);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }
}
