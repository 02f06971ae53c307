//! Birth data from free text and from form fields.

use chrono::format::{Parsed, StrftimeItems, parse};
use xuanji_divine::{BirthData, Gender};
use xuanji_time::PartialDateTime;

use crate::error::XuanjiError;

/// Accepted layouts, most specific first. Seconds are parsed and dropped.
const BIRTH_FORMATS: [&str; 9] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H",
    "%Y-%m-%d %H",
    "%Y-%m-%d",
    "%Y-%m",
    "%Y",
];

fn parse_with(text: &str, format: &str) -> Option<Parsed> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, text, StrftimeItems::new(format)).ok()?;
    Some(parsed)
}

/// Parse a possibly truncated timestamp into known fields.
///
/// Accepts `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `YYYY-MM-DD hh`,
/// `YYYY-MM-DD hh:mm` and `YYYY-MM-DD hh:mm:ss` (`T` may replace the
/// space). The year must be written unsigned.
pub fn parse_birth(text: &str) -> Result<PartialDateTime, XuanjiError> {
    let s = text.trim();
    let err = || XuanjiError::BirthParse(s.to_string());
    if !s.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(err());
    }
    let parsed = BIRTH_FORMATS
        .iter()
        .find_map(|format| parse_with(s, format))
        .ok_or_else(err)?;

    let hour = match (parsed.hour_div_12(), parsed.hour_mod_12()) {
        (Some(div), Some(rem)) => Some(div * 12 + rem),
        _ => None,
    };
    Ok(PartialDateTime {
        year: parsed.year(),
        month: parsed.month(),
        day: parsed.day(),
        hour,
        minute: parsed.minute(),
    })
}

fn form_field(value: &str, whole: &str) -> Result<Option<i64>, XuanjiError> {
    let v = value.trim();
    if v.is_empty() {
        Ok(None)
    } else {
        v.parse()
            .map(Some)
            .map_err(|_| XuanjiError::BirthParse(whole.to_string()))
    }
}

/// Build [`BirthData`] from raw form strings; empty strings are absent.
pub fn birth_from_form(
    year: &str,
    month: &str,
    day: &str,
    hour: &str,
    gender: &str,
) -> Result<BirthData, XuanjiError> {
    let whole = format!("{year}-{month}-{day} {hour} {gender}");
    let gender = match gender.trim() {
        "" => None,
        g => Some(Gender::from_name(g).ok_or_else(|| XuanjiError::BirthParse(whole.clone()))?),
    };
    Ok(BirthData {
        year: form_field(year, &whole)?,
        month: form_field(month, &whole)?,
        day: form_field(day, &whole)?,
        hour: form_field(hour, &whole)?,
        minute: None,
        gender,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_forms() {
        assert_eq!(
            parse_birth("1990").unwrap(),
            PartialDateTime {
                year: Some(1990),
                ..Default::default()
            }
        );
        assert_eq!(
            parse_birth("1990-05").unwrap(),
            PartialDateTime {
                year: Some(1990),
                month: Some(5),
                ..Default::default()
            }
        );
        assert_eq!(parse_birth("1990-05-17").unwrap(), PartialDateTime::date(1990, 5, 17));
        assert_eq!(
            parse_birth("1990-05-17 14").unwrap(),
            PartialDateTime {
                hour: Some(14),
                ..PartialDateTime::date(1990, 5, 17)
            }
        );
        assert_eq!(
            parse_birth(" 1990-05-17T14:30:05 ").unwrap(),
            PartialDateTime::full(1990, 5, 17, 14, 30)
        );
    }

    #[test]
    fn rejects_garbage() {
        for s in [
            "",
            "May 1990",
            "1990-05-17-01",
            "1990-05 14:00",
            "1990-05-17 1:2:3:4",
            "-5",
            "1990-5-17 7:",
            "1990-13-01",
        ] {
            assert!(parse_birth(s).is_err(), "{s}");
        }
    }

    #[test]
    fn form_strings() {
        let b = birth_from_form("1990", "5", " 17 ", "", "female").unwrap();
        assert_eq!(b.year, Some(1990));
        assert_eq!(b.day, Some(17));
        assert_eq!(b.hour, None);
        assert_eq!(b.gender, Some(Gender::Female));

        let b = birth_from_form("", "", "", "", "").unwrap();
        assert_eq!(b, BirthData::default());

        assert!(birth_from_form("19x0", "", "", "", "").is_err());
        assert!(birth_from_form("1990", "", "", "", "other").is_err());
    }
}
