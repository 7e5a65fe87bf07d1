//! Strict parsers for the date and time fields of a dive entry.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime};
use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, map_res, opt},
    sequence::preceded,
    IResult, Parser,
};

use crate::error::DiveLogError;

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, DiveLogError> {
    let (_, (year, month, day)) = all_consuming(iso_date)
        .parse(input.trim())
        .map_err(|e| DiveLogError::parse("date", input, format!("expected YYYY-MM-DD ({e})")))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DiveLogError::parse("date", input, "no such calendar day"))
}

/// Parse an `HH:MM` or `HH:MM:SS` time of day.
pub fn parse_time(input: &str) -> Result<NaiveTime, DiveLogError> {
    let (_, (hour, minute, second)) = all_consuming(clock_time)
        .parse(input.trim())
        .map_err(|e| DiveLogError::parse("time", input, format!("expected HH:MM ({e})")))?;

    NaiveTime::from_hms_opt(hour, minute, second.unwrap_or(0))
        .ok_or_else(|| DiveLogError::parse("time", input, "no such time of day"))
}

/// Month bucket key (`YYYY-MM`) for a date.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

fn fixed_digits<'a, T: FromStr>(
    width: usize,
) -> impl Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>> {
    map_res(
        take_while_m_n(width, width, |c: char| c.is_ascii_digit()),
        str::parse::<T>,
    )
}

fn iso_date(input: &str) -> IResult<&str, (i32, u32, u32)> {
    let (input, (year, _, month, _, day)) = (
        fixed_digits::<i32>(4),
        char('-'),
        fixed_digits::<u32>(2),
        char('-'),
        fixed_digits::<u32>(2),
    )
        .parse(input)?;
    Ok((input, (year, month, day)))
}

fn clock_time(input: &str) -> IResult<&str, (u32, u32, Option<u32>)> {
    let (input, (hour, _, minute, second)) = (
        fixed_digits::<u32>(2),
        char(':'),
        fixed_digits::<u32>(2),
        opt(preceded(char(':'), fixed_digits::<u32>(2))),
    )
        .parse(input)?;
    Ok((input, (hour, minute, second)))
}
