// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Datelike, SecondsFormat, TimeZone};
use std::fmt::Display;

/// English month names, indexed by zero-based month.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Month name for a timestamp, in the timestamp's own zone.
pub fn month_name<Tz: TimeZone>(date: &DateTime<Tz>) -> &'static str {
    // month0() is always 0..=11
    MONTHS[date.month0() as usize]
}

/// Format a timestamp as "{Month} {Day}", e.g. "March 5".
pub fn format_month_day<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    format!("{} {}", month_name(date), date.day())
}

/// Format a timestamp as RFC3339, using a `Z` suffix for UTC.
pub fn format_rfc3339<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}
