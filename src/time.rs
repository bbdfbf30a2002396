//! ASN.1 time values.
//!
//! The two time types carry their value as a restricted character string:
//! `YYMMDDHHMM[SS]` for UTCTime and `YYYYMMDDHHMMSS[.frac]` for
//! GeneralizedTime, both followed by a time zone, either `Z` or an offset
//! of the form `+HHMM` or `-HHMM`.

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
};


/// Parses the content octets of a UTCTime value.
///
/// Two-digit years below 50 land in the twenty-first century, the rest in
/// the twentieth. The seconds are optional.
pub fn parse_utc_time(content: &[u8]) -> Option<DateTime<FixedOffset>> {
    let (year, content) = take_digits(content, 2)?;
    let year = if year < 50 { 2000 + year } else { 1900 + year };
    let (month, content) = take_digits(content, 2)?;
    let (day, content) = take_digits(content, 2)?;
    let (hour, content) = take_digits(content, 2)?;
    let (minute, content) = take_digits(content, 2)?;
    let (second, content) = match content.first() {
        Some(octet) if octet.is_ascii_digit() => take_digits(content, 2)?,
        _ => (0, content),
    };
    compose(year as i32, month, day, hour, minute, second, 0, content)
}

/// Parses the content octets of a GeneralizedTime value.
///
/// The seconds are required and may carry a fractional part.
pub fn parse_generalized_time(
    content: &[u8]
) -> Option<DateTime<FixedOffset>> {
    let (year, content) = take_digits(content, 4)?;
    let (month, content) = take_digits(content, 2)?;
    let (day, content) = take_digits(content, 2)?;
    let (hour, content) = take_digits(content, 2)?;
    let (minute, content) = take_digits(content, 2)?;
    let (second, content) = take_digits(content, 2)?;
    let (nanos, content) = match content.first() {
        Some(b'.') => take_fraction(&content[1..])?,
        _ => (0, content),
    };
    compose(year as i32, month, day, hour, minute, second, nanos, content)
}

/// Builds the timestamp from its parsed fields and the trailing zone.
#[allow(clippy::too_many_arguments)]
fn compose(
    year: i32, month: u32, day: u32,
    hour: u32, minute: u32, second: u32, nanos: u32,
    zone: &[u8],
) -> Option<DateTime<FixedOffset>> {
    let offset = take_zone(zone)?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)?;
    offset.from_local_datetime(&NaiveDateTime::new(date, time)).single()
}

/// Takes `count` decimal digits from the beginning of `data`.
fn take_digits(data: &[u8], count: usize) -> Option<(u32, &[u8])> {
    if data.len() < count {
        return None
    }
    let (head, tail) = data.split_at(count);
    let mut res = 0u32;
    for &octet in head {
        res = res * 10 + (octet as char).to_digit(10)?;
    }
    Some((res, tail))
}

/// Takes a fractional seconds part, converting it to nanoseconds.
///
/// Digits beyond nanosecond precision are accepted and dropped.
fn take_fraction(data: &[u8]) -> Option<(u32, &[u8])> {
    let end = data.iter().position(
        |octet| !octet.is_ascii_digit()
    ).unwrap_or(data.len());
    if end == 0 {
        return None
    }
    let (digits, tail) = data.split_at(end);
    let mut nanos = 0u32;
    let mut scale = 100_000_000;
    for &octet in digits.iter().take(9) {
        nanos += (octet as char).to_digit(10)? * scale;
        scale /= 10;
    }
    Some((nanos, tail))
}

/// Takes the time zone, which must end the content.
fn take_zone(data: &[u8]) -> Option<FixedOffset> {
    match data {
        [b'Z'] => FixedOffset::east_opt(0),
        [sign @ (b'+' | b'-'), rest @ ..] => {
            let (hours, rest) = take_digits(rest, 2)?;
            let (minutes, rest) = take_digits(rest, 2)?;
            if !rest.is_empty() || hours > 23 || minutes > 59 {
                return None
            }
            let seconds = (hours * 3600 + minutes * 60) as i32;
            if *sign == b'+' {
                FixedOffset::east_opt(seconds)
            }
            else {
                FixedOffset::west_opt(seconds)
            }
        }
        _ => None,
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn utc_time() {
        assert_eq!(
            parse_utc_time(b"230102030405Z").unwrap().to_string(),
            "2023-01-02 03:04:05 +00:00"
        );
        assert_eq!(
            parse_utc_time(b"9912312359Z").unwrap().to_string(),
            "1999-12-31 23:59:00 +00:00"
        );
        assert_eq!(
            parse_utc_time(b"230102030405+0130").unwrap().to_string(),
            "2023-01-02 03:04:05 +01:30"
        );
    }

    #[test]
    fn utc_time_rejects_garbage() {
        assert!(parse_utc_time(b"").is_none());
        assert!(parse_utc_time(b"230102030405").is_none());
        assert!(parse_utc_time(b"231402030405Z").is_none());
        assert!(parse_utc_time(b"230102030405Zx").is_none());
        assert!(parse_utc_time(b"23010203x405Z").is_none());
    }

    #[test]
    fn generalized_time() {
        assert_eq!(
            parse_generalized_time(b"20230102030405Z").unwrap().to_string(),
            "2023-01-02 03:04:05 +00:00"
        );
        assert_eq!(
            parse_generalized_time(
                b"20230102030405.5Z"
            ).unwrap().to_string(),
            "2023-01-02 03:04:05.500 +00:00"
        );
        assert_eq!(
            parse_generalized_time(
                b"20230102030405-0800"
            ).unwrap().to_string(),
            "2023-01-02 03:04:05 -08:00"
        );
    }

    #[test]
    fn generalized_time_rejects_garbage() {
        assert!(parse_generalized_time(b"202301020304Z").is_none());
        assert!(parse_generalized_time(b"20230102030405.Z").is_none());
        assert!(parse_generalized_time(b"20230102030405").is_none());
    }
}
