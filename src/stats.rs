// ABOUTME: Practice statistics computed from the stored session list.
// ABOUTME: Trailing-week activity, current streak, and per-day average.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, Utc};

use crate::session::Session;

/// Aggregated progress numbers shown on the stats view.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeStats {
    /// Average count per day with at least one session.
    pub daily_average: u64,
    /// Consecutive days with activity, ending today or yesterday.
    pub streak_days: u32,
    /// Counts for the trailing 7 days, oldest first (index 6 = today).
    pub week_activity: [u64; 7],
    /// Single-letter weekday labels matching `week_activity`.
    pub week_labels: [char; 7],
}

impl PracticeStats {
    /// Compute stats as of today (UTC).
    pub fn from_sessions(sessions: &[Session]) -> Self {
        Self::compute(sessions, Utc::now().date_naive())
    }

    /// Compute stats as of an explicit date (for testing).
    pub fn compute(sessions: &[Session], today: NaiveDate) -> Self {
        let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for s in sessions {
            *per_day.entry(s.timestamp.date_naive()).or_default() += s.count as u64;
        }

        let daily_average = if per_day.is_empty() {
            0
        } else {
            per_day.values().sum::<u64>() / per_day.len() as u64
        };

        // A streak counts back from today; a quiet day so far today still
        // keeps yesterday's streak alive.
        let mut streak_days = 0;
        let mut cursor = today;
        if !per_day.contains_key(&cursor) {
            cursor = cursor.pred_opt().unwrap_or(cursor);
        }
        while per_day.contains_key(&cursor) {
            streak_days += 1;
            match cursor.pred_opt() {
                Some(prev) => cursor = prev,
                None => break,
            }
        }

        let mut week_activity = [0u64; 7];
        let mut week_labels = [' '; 7];
        for (i, slot) in week_activity.iter_mut().enumerate() {
            let back = 6 - i as u64;
            let day = today.checked_sub_days(Days::new(back)).unwrap_or(today);
            *slot = per_day.get(&day).copied().unwrap_or(0);
            week_labels[i] = weekday_letter(day);
        }

        Self {
            daily_average,
            streak_days,
            week_activity,
            week_labels,
        }
    }
}

fn weekday_letter(day: NaiveDate) -> char {
    match day.weekday() {
        chrono::Weekday::Mon => 'M',
        chrono::Weekday::Tue => 'T',
        chrono::Weekday::Wed => 'W',
        chrono::Weekday::Thu => 'T',
        chrono::Weekday::Fri => 'F',
        chrono::Weekday::Sat => 'S',
        chrono::Weekday::Sun => 'S',
    }
}
