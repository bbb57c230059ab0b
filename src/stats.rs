use crate::dates::{date_key, parse_date_key, today};
use crate::models::{Entries, LifeWeeks, MonthStats, TrendPoint};
use chrono::{Datelike, Duration, NaiveDate};

/// Longest run of consecutive logged days ending at today, capped at one year.
/// A day not yet logged today does not break the run; the first missing
/// *prior* day does.
pub fn streak(entries: &Entries) -> u32 {
    streak_at(today(), entries)
}

pub fn streak_at(today: NaiveDate, entries: &Entries) -> u32 {
    let mut count = 0;
    for offset in 0..365 {
        let date = today - Duration::days(offset);
        if entries.contains_key(&date_key(date)) {
            count += 1;
        } else if offset == 0 {
            // today is still pending, keep walking from yesterday
            continue;
        } else {
            break;
        }
    }
    count
}

pub fn month_stats(entries: &Entries, year: i32, month: u32) -> MonthStats {
    let mut total = 0u32;
    let mut count = 0usize;
    for (key, record) in entries {
        let Some(date) = parse_date_key(key) else {
            continue;
        };
        if date.year() == year && date.month() == month {
            total += u32::from(record.mood.score());
            count += 1;
        }
    }

    let average = if count == 0 { 0.0 } else { f64::from(total) / count as f64 };
    MonthStats { count, average, grade: grade_for(count, average) }
}

fn grade_for(count: usize, average: f64) -> &'static str {
    if count == 0 {
        return "-";
    }
    if average >= 4.5 {
        "A+"
    } else if average >= 4.0 {
        "A"
    } else if average >= 3.0 {
        "B"
    } else if average >= 2.0 {
        "C"
    } else if average >= 1.0 {
        "D"
    } else {
        "F"
    }
}

/// Life progress in whole 7-day weeks against a fixed 80-year horizon.
pub fn life_weeks(birth_date: Option<NaiveDate>, max_years: u64) -> LifeWeeks {
    life_weeks_at(today(), birth_date, max_years)
}

pub fn life_weeks_at(today: NaiveDate, birth_date: Option<NaiveDate>, max_years: u64) -> LifeWeeks {
    let total = max_years * 52;
    let lived = birth_date.map_or(0, |birth| (today - birth).num_days().unsigned_abs() / 7);
    let percentage = (lived as f64 / total as f64 * 100.0).round() as u32;
    LifeWeeks { lived, total, percentage }
}

/// One point per day for the dashboard chart: the last 7 days, oldest first,
/// score 0 for unlogged days.
pub fn trend(entries: &Entries) -> Vec<TrendPoint> {
    trend_at(today(), entries)
}

pub fn trend_at(today: NaiveDate, entries: &Entries) -> Vec<TrendPoint> {
    let mut points = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let date = today - Duration::days(offset);
        let record = entries.get(&date_key(date));
        points.push(TrendPoint {
            date: date_key(date),
            day: date.day(),
            score: record.map_or(0, |r| r.mood.score()),
            logged: record.is_some(),
        });
    }
    points
}
