//! Session history of daily snapshots
//!
//! Append-only and bounded: once full, every append evicts the oldest entry.
//! The store is owned by whoever runs the session and passed explicitly.

use std::collections::{HashMap, VecDeque};

use chrono::{Duration, NaiveDate};

use crate::core::{DailySnapshot, Mood};

#[derive(Debug)]
pub(crate) struct HistoryStore {
    capacity: usize,
    entries: VecDeque<DailySnapshot>,
}

/// One row of the 7-day view
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DayRow {
    pub(crate) date: NaiveDate,
    pub(crate) achievement: Option<u8>,
    pub(crate) mood: Option<Mood>,
}

impl HistoryStore {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a snapshot, returning the evicted oldest entry when over capacity
    pub(crate) fn append(&mut self, snapshot: DailySnapshot) -> Option<DailySnapshot> {
        if self.capacity == 0 {
            return Some(snapshot);
        }
        self.entries.push_back(snapshot);
        if self.entries.len() > self.capacity {
            self.entries.pop_front()
        } else {
            None
        }
    }

    /// Up to `n` most recent snapshots, oldest first
    pub(crate) fn last_n(&self, n: usize) -> Vec<&DailySnapshot> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Latest snapshot per calendar day; later entries supersede earlier ones
    pub(crate) fn latest_by_date(&self) -> HashMap<NaiveDate, &DailySnapshot> {
        let mut by_date = HashMap::new();
        for snap in &self.entries {
            by_date.insert(snap.date, snap);
        }
        by_date
    }

    /// Six previous days from history plus today's live values
    pub(crate) fn week_rows(&self, today: NaiveDate, achievement: u8, mood: Mood) -> Vec<DayRow> {
        let by_date = self.latest_by_date();
        let mut rows: Vec<DayRow> = (1..=6)
            .rev()
            .map(|offset| {
                let date = today - Duration::days(offset);
                let snap = by_date.get(&date);
                DayRow {
                    date,
                    achievement: snap.map(|s| s.achievement),
                    mood: snap.map(|s| s.mood),
                }
            })
            .collect();
        rows.push(DayRow {
            date: today,
            achievement: Some(achievement),
            mood: Some(mood),
        });
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{City, CoachPersona, Habit, HabitSet};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn snapshot(date: NaiveDate, done: &[Habit], mood: u8) -> DailySnapshot {
        DailySnapshot::new(
            date,
            HabitSet::with_completed(done),
            Mood::try_from(mood).unwrap(),
            City::Seoul,
            CoachPersona::Warm,
        )
    }

    #[test]
    fn append_31st_drops_oldest() {
        let mut store = HistoryStore::with_capacity(30);
        for d in 1..=30 {
            assert!(store.append(snapshot(day(d), &[], 5)).is_none());
        }
        assert_eq!(store.len(), 30);

        let evicted = store.append(snapshot(day(31), &[], 5)).unwrap();
        assert_eq!(evicted.date, day(1));
        assert_eq!(store.len(), 30);
        assert_eq!(store.last_n(1)[0].date, day(31));
        assert_eq!(store.last_n(100)[0].date, day(2));
    }

    #[test]
    fn last_n_returns_most_recent_oldest_first() {
        let mut store = HistoryStore::with_capacity(30);
        for d in 1..=4 {
            store.append(snapshot(day(d), &[], 5));
        }
        let dates: Vec<_> = store.last_n(2).iter().map(|s| s.date).collect();
        assert_eq!(dates, vec![day(3), day(4)]);
        assert!(HistoryStore::with_capacity(30).last_n(3).is_empty());
    }

    #[test]
    fn later_snapshot_supersedes_same_date() {
        let mut store = HistoryStore::with_capacity(30);
        store.append(snapshot(day(5), &[], 2));
        store.append(snapshot(day(5), &[Habit::Sleep], 9));
        let by_date = store.latest_by_date();
        assert_eq!(by_date.len(), 1);
        assert_eq!(by_date[&day(5)].mood.value(), 9);
        assert_eq!(by_date[&day(5)].achievement, 20);
        // superseded, not merged: both entries are still in the log
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn week_rows_fill_from_history_and_today() {
        let mut store = HistoryStore::with_capacity(30);
        store.append(snapshot(day(8), &[Habit::Sleep, Habit::Study], 7));
        let today = day(10);
        let rows = store.week_rows(today, 100, Mood::try_from(3).unwrap());

        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].date, day(4));
        assert_eq!(rows[4].date, day(8));
        assert_eq!(rows[4].achievement, Some(40));
        assert_eq!(rows[5].achievement, None);
        assert_eq!(rows[6].date, today);
        assert_eq!(rows[6].achievement, Some(100));
        assert_eq!(rows[6].mood.map(Mood::value), Some(3));
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut store = HistoryStore::with_capacity(0);
        assert!(store.append(snapshot(day(1), &[], 5)).is_some());
        assert!(store.is_empty());
    }
}
