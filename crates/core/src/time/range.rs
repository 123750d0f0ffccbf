// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Textual time-range grammar resolved into UTC boundary pairs.
//!
//! A token is either a keyword from a closed set (`today`, `last quarter`,
//! `weekly`, ...) or a literal `from,to` pair. Keywords are resolved with
//! calendar arithmetic anchored on "now" in the requested zone; literal
//! sides that look like dates are normalized to UTC, anything else passes
//! through unchanged (opaque continuation-token-like sentinels).

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::config::default_zone;
use crate::error::{Error, Result};
use crate::time::convert::{is_date_time_format, to_iso_utc, to_utc};

/// Resolve a time-range token in the configured default zone.
///
/// See [`resolve_in`].
pub fn resolve(token: &str) -> Result<Option<Vec<String>>> {
    resolve_in(token, default_zone())
}

/// Resolve a time-range token into UTC ISO boundary strings.
///
/// Returns `None` only for an empty token. Keywords yield a two-element
/// `[start, end]` pair; a literal single value yields a one-element
/// pass-through.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] when a literal side looks date-shaped but
/// fails strict parsing.
pub fn resolve_in(token: &str, zone: Tz) -> Result<Option<Vec<String>>> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let now = Utc::now().with_timezone(&zone);

    if let Some(keyword) = RangeKeyword::parse(trimmed) {
        tracing::debug!(token = trimmed, zone = %zone, "resolving range keyword");
        return keyword.boundaries(now, zone).map(Some);
    }

    explicit(trimmed, zone).map(Some)
}

/// The closed set of supported range keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RangeKeyword {
    Yesterday,
    Today,
    Tomorrow,
    LastWeek,
    ThisWeek,
    NextWeek,
    /// Recurring reporting window: last Tuesday 09:00 to this Tuesday 08:00.
    Weekly,
    LastMonth,
    ThisMonth,
    NextMonth,
    LastQuarter,
    ThisQuarter,
    NextQuarter,
    /// A fixed calendar quarter (1-4) of the current year.
    FixedQuarter(i32),
    /// Effectively-unbounded sentinel: a ten-year span centered on now.
    All,
}

impl RangeKeyword {
    /// Case-insensitive keyword lookup.
    fn parse(token: &str) -> Option<RangeKeyword> {
        match token.to_lowercase().as_str() {
            "yesterday" => Some(RangeKeyword::Yesterday),
            "today" => Some(RangeKeyword::Today),
            "tomorrow" => Some(RangeKeyword::Tomorrow),
            "last week" => Some(RangeKeyword::LastWeek),
            "this week" => Some(RangeKeyword::ThisWeek),
            "next week" => Some(RangeKeyword::NextWeek),
            "weekly" => Some(RangeKeyword::Weekly),
            "last month" => Some(RangeKeyword::LastMonth),
            "this month" => Some(RangeKeyword::ThisMonth),
            "next month" => Some(RangeKeyword::NextMonth),
            "last quarter" => Some(RangeKeyword::LastQuarter),
            "this quarter" => Some(RangeKeyword::ThisQuarter),
            "next quarter" => Some(RangeKeyword::NextQuarter),
            "1 quarter" => Some(RangeKeyword::FixedQuarter(1)),
            "2 quarter" => Some(RangeKeyword::FixedQuarter(2)),
            "3 quarter" => Some(RangeKeyword::FixedQuarter(3)),
            "4 quarter" => Some(RangeKeyword::FixedQuarter(4)),
            "all" => Some(RangeKeyword::All),
            _ => None,
        }
    }

    /// Compute the `[start, end]` UTC boundaries for this keyword, anchored
    /// on `now` in `zone`.
    fn boundaries(self, now: DateTime<Tz>, zone: Tz) -> Result<Vec<String>> {
        let today = now.date_naive();
        match self {
            RangeKeyword::Yesterday => day_offset(today, -1, zone),
            RangeKeyword::Today => day_offset(today, 0, zone),
            RangeKeyword::Tomorrow => day_offset(today, 1, zone),
            RangeKeyword::LastWeek => week_offset(today, -1, zone),
            RangeKeyword::ThisWeek => week_offset(today, 0, zone),
            RangeKeyword::NextWeek => week_offset(today, 1, zone),
            RangeKeyword::Weekly => weekly_window(now, zone),
            RangeKeyword::LastMonth => month_offset(today, -1, zone),
            RangeKeyword::ThisMonth => month_offset(today, 0, zone),
            RangeKeyword::NextMonth => month_offset(today, 1, zone),
            RangeKeyword::LastQuarter => quarter_offset(today, -1, zone),
            RangeKeyword::ThisQuarter => quarter_offset(today, 0, zone),
            RangeKeyword::NextQuarter => quarter_offset(today, 1, zone),
            RangeKeyword::FixedQuarter(n) => fixed_quarter(today.year(), n, zone),
            RangeKeyword::All => ten_year_span(now),
        }
    }
}

/// Normalize the sides of a literal `from,to` pair.
fn explicit(token: &str, zone: Tz) -> Result<Vec<String>> {
    token
        .split(',')
        .map(|side| normalize_side(side.trim(), zone))
        .collect()
}

fn normalize_side(side: &str, zone: Tz) -> Result<String> {
    if is_date_time_format(side) {
        Ok(to_iso_utc(to_utc(side, zone)?))
    } else {
        Ok(side.to_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Calendar arithmetic
// ─────────────────────────────────────────────────────────────────────────────

fn day_offset(today: NaiveDate, days: i64, zone: Tz) -> Result<Vec<String>> {
    let date = shift_days(today, days)?;
    span(date, date, zone)
}

/// A Monday-to-Sunday week, `weeks` away from the current one.
fn week_offset(today: NaiveDate, weeks: i64, zone: Tz) -> Result<Vec<String>> {
    let monday = shift_days(today, -i64::from(today.weekday().num_days_from_monday()))?;
    let start = shift_days(monday, weeks * 7)?;
    let end = shift_days(start, 6)?;
    span(start, end, zone)
}

fn month_offset(today: NaiveDate, months: i32, zone: Tz) -> Result<Vec<String>> {
    let (year, month) = shift_month(today.year(), today.month(), months);
    month_span(year, month, month, zone)
}

/// Calendar quarters (Jan-Mar, Apr-Jun, Jul-Sep, Oct-Dec), wrapping across
/// year boundaries.
fn quarter_offset(today: NaiveDate, quarters: i32, zone: Tz) -> Result<Vec<String>> {
    let index = today.year() * 4 + today.month0() as i32 / 3 + quarters;
    let year = index.div_euclid(4);
    let quarter = index.rem_euclid(4) + 1;
    fixed_quarter(year, quarter, zone)
}

fn fixed_quarter(year: i32, quarter: i32, zone: Tz) -> Result<Vec<String>> {
    // Only reachable with 1-4; anything else is a programming error.
    if !(1..=4).contains(&quarter) {
        return Err(Error::UnsupportedRangeKeyword {
            keyword: format!("{quarter} quarter"),
        });
    }
    let first_month = (quarter as u32 - 1) * 3 + 1;
    month_span(year, first_month, first_month + 2, zone)
}

/// The recurring weekly reporting window: last Tuesday 09:00 to this
/// Tuesday 08:00 zone-local. Before this week's Tuesday 08:00 the window
/// shifts back one week.
fn weekly_window(now: DateTime<Tz>, zone: Tz) -> Result<Vec<String>> {
    let today = now.date_naive();
    let monday = shift_days(today, -i64::from(today.weekday().num_days_from_monday()))?;
    let mut tuesday = shift_days(monday, 1)?;

    let cutoff = local_instant(tuesday.and_time(at(8, 0)), zone)?;
    if now.with_timezone(&Utc) < cutoff {
        tuesday = shift_days(tuesday, -7)?;
    }

    let start = local_instant(shift_days(tuesday, -7)?.and_time(at(9, 0)), zone)?;
    let end = local_instant(tuesday.and_time(at(8, 0)), zone)?;
    Ok(vec![to_iso_utc(start), to_iso_utc(end)])
}

/// Ten-year span centered on now, used as an effectively-unbounded sentinel.
fn ten_year_span(now: DateTime<Tz>) -> Result<Vec<String>> {
    let utc = now.with_timezone(&Utc);
    let start = utc
        .checked_sub_months(Months::new(60))
        .ok_or_else(|| out_of_range("all"))?;
    let end = utc
        .checked_add_months(Months::new(60))
        .ok_or_else(|| out_of_range("all"))?;
    Ok(vec![to_iso_utc(start), to_iso_utc(end)])
}

/// Zone-local first-instant-of-`from` to last-instant-of-`to`, as UTC ISO.
fn span(from: NaiveDate, to: NaiveDate, zone: Tz) -> Result<Vec<String>> {
    let start = local_instant(from.and_time(NaiveTime::MIN), zone)?;
    let end = local_instant(to.and_time(end_of_day()), zone)?;
    Ok(vec![to_iso_utc(start), to_iso_utc(end)])
}

/// First day of `(year, first_month)` to last day of `(year, last_month)`.
fn month_span(year: i32, first_month: u32, last_month: u32, zone: Tz) -> Result<Vec<String>> {
    let first = ymd(year, first_month, 1)?;
    let last = last_day_of_month(year, last_month)?;
    span(first, last, zone)
}

fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    let first = ymd(year, month, 1)?;
    first
        .checked_add_months(Months::new(1))
        .and_then(|d| d.checked_sub_days(Days::new(1)))
        .ok_or_else(|| out_of_range(&format!("{year}-{month:02}")))
}

/// Month index arithmetic with year wrap in both directions.
fn shift_month(year: i32, month: u32, offset: i32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 + offset;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or_else(|| out_of_range(&date.to_string()))
}

fn local_instant(naive: NaiveDateTime, zone: Tz) -> Result<DateTime<Utc>> {
    zone.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| out_of_range(&naive.to_string()))
}

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| out_of_range(&format!("{year}-{month:02}-{day:02}")))
}

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN)
}

fn out_of_range(value: &str) -> Error {
    Error::InvalidDate {
        value: value.to_string(),
    }
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
