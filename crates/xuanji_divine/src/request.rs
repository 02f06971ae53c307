//! Incoming divination request schema.
//!
//! Form fields arrive either as JSON numbers or as strings (`"1990"`);
//! empty strings mean "not supplied".

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use xuanji_time::PartialDateTime;

use crate::category::Category;
use crate::error::DivinationError;
use crate::hexagram::HexagramMode;

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Accept `1990`, `1990.0`, `"1990"`, `""` (absent) or `null` (absent).
fn loose_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    match Option::<LooseNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(LooseNumber::Int(n)) => Ok(Some(n)),
        Some(LooseNumber::Float(f)) if f.fract() == 0.0 && f.is_finite() => Ok(Some(f as i64)),
        Some(LooseNumber::Float(f)) => Err(D::Error::custom(format!("expected an integer, got {f}"))),
        Some(LooseNumber::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Ok(None)
            } else {
                s.parse::<i64>()
                    .map(Some)
                    .map_err(|_| D::Error::custom(format!("expected an integer, got '{s}'")))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }

    /// English (any case) or Chinese.
    pub fn from_name(name: &str) -> Option<Gender> {
        match name.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Some(Self::Male),
            "female" | "f" | "女" => Some(Self::Female),
            _ => None,
        }
    }
}

/// Empty string or `null` is absent; unknown text is an error.
fn loose_gender<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Gender>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => Gender::from_name(&s)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("unknown gender '{s}'"))),
    }
}

/// Birth details as typed into the form; every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthData {
    #[serde(default, deserialize_with = "loose_int")]
    pub year: Option<i64>,
    #[serde(default, deserialize_with = "loose_int")]
    pub month: Option<i64>,
    #[serde(default, deserialize_with = "loose_int")]
    pub day: Option<i64>,
    #[serde(default, deserialize_with = "loose_int")]
    pub hour: Option<i64>,
    #[serde(default, deserialize_with = "loose_int")]
    pub minute: Option<i64>,
    #[serde(default, deserialize_with = "loose_gender")]
    pub gender: Option<Gender>,
}

fn narrow<T: TryFrom<i64>>(field: &str, value: Option<i64>) -> Result<Option<T>, DivinationError> {
    value
        .map(|v| {
            T::try_from(v)
                .map_err(|_| DivinationError::InvalidInput(format!("{field} {v} out of range")))
        })
        .transpose()
}

impl BirthData {
    /// Date/time fields with integer narrowing. Negative month, day, hour
    /// or minute is `InvalidInput`; range checks beyond that belong to
    /// the calculators.
    pub fn to_partial(&self) -> Result<PartialDateTime, DivinationError> {
        Ok(PartialDateTime {
            year: narrow("year", self.year)?,
            month: narrow("month", self.month)?,
            day: narrow("day", self.day)?,
            hour: narrow("hour", self.hour)?,
            minute: narrow("minute", self.minute)?,
        })
    }
}

/// How the hexagram should be cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivineMethod {
    #[default]
    Time,
    Number,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivineData {
    #[serde(default)]
    pub method: DivineMethod,
    #[serde(default, deserialize_with = "loose_int")]
    pub number1: Option<i64>,
    #[serde(default, deserialize_with = "loose_int")]
    pub number2: Option<i64>,
}

/// A full divination request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivinationRequest {
    #[serde(default)]
    pub category: Category,
    pub question: String,
    #[serde(default)]
    pub birth_data: Option<BirthData>,
    #[serde(default)]
    pub divine_data: Option<DivineData>,
}

impl DivinationRequest {
    /// Reject requests without a question.
    pub fn validate(&self) -> Result<(), DivinationError> {
        if self.question.trim().is_empty() {
            return Err(DivinationError::MissingRequiredField("question"));
        }
        Ok(())
    }

    /// Birth fields, or all-absent when no birth data was sent.
    pub fn birth_fields(&self) -> Result<PartialDateTime, DivinationError> {
        self.birth_data
            .as_ref()
            .map_or(Ok(PartialDateTime::default()), BirthData::to_partial)
    }

    /// Hexagram mode: number mode needs both numbers, otherwise time mode
    /// over the birth fields.
    pub fn hexagram_mode(&self) -> Result<HexagramMode, DivinationError> {
        match &self.divine_data {
            Some(DivineData {
                method: DivineMethod::Number,
                number1,
                number2,
            }) => {
                let n1 = number1.ok_or(DivinationError::MissingRequiredField("number1"))?;
                let n2 = number2.ok_or(DivinationError::MissingRequiredField("number2"))?;
                Ok(HexagramMode::Number { n1, n2 })
            }
            _ => Ok(HexagramMode::Time(self.birth_fields()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_fields_from_form() {
        let req: DivinationRequest = serde_json::from_str(
            r#"{"category":"事业运势","question":"换工作?",
                "birthData":{"year":"1990","month":"5","day":"17","hour":"","gender":"female"}}"#,
        )
        .unwrap();
        assert_eq!(req.category, Category::Career);
        let birth = req.birth_data.as_ref().unwrap();
        assert_eq!(birth.year, Some(1990));
        assert_eq!(birth.hour, None);
        assert_eq!(birth.gender, Some(Gender::Female));
        let p = req.birth_fields().unwrap();
        assert_eq!(p, PartialDateTime::date(1990, 5, 17));
    }

    #[test]
    fn numeric_fields_and_number_mode() {
        let req: DivinationRequest = serde_json::from_str(
            r#"{"category":"综合占卜","question":"q",
                "divineData":{"method":"number","number1":7,"number2":"3"}}"#,
        )
        .unwrap();
        assert_eq!(req.hexagram_mode().unwrap(), HexagramMode::Number { n1: 7, n2: 3 });
    }

    #[test]
    fn number_mode_missing_seed() {
        let req = DivinationRequest {
            question: "q".into(),
            divine_data: Some(DivineData {
                method: DivineMethod::Number,
                number1: Some(4),
                number2: None,
            }),
            ..Default::default()
        };
        assert_eq!(
            req.hexagram_mode(),
            Err(DivinationError::MissingRequiredField("number2"))
        );
    }

    #[test]
    fn time_mode_without_birth_data() {
        let req = DivinationRequest {
            question: "q".into(),
            ..Default::default()
        };
        assert_eq!(
            req.hexagram_mode().unwrap(),
            HexagramMode::Time(PartialDateTime::default())
        );
    }

    #[test]
    fn garbage_number_rejected() {
        let r: Result<BirthData, _> = serde_json::from_str(r#"{"year":"nineteen"}"#);
        assert!(r.is_err());
        let r: Result<BirthData, _> = serde_json::from_str(r#"{"hour":7.5}"#);
        assert!(r.is_err());
    }

    #[test]
    fn gender_spellings() {
        let b: BirthData = serde_json::from_str(r#"{"gender":"男"}"#).unwrap();
        assert_eq!(b.gender, Some(Gender::Male));
        let b: BirthData = serde_json::from_str(r#"{"gender":""}"#).unwrap();
        assert_eq!(b.gender, None);
        assert!(serde_json::from_str::<BirthData>(r#"{"gender":"x"}"#).is_err());
    }

    #[test]
    fn negative_hour_is_invalid_input() {
        let b = BirthData {
            hour: Some(-1),
            ..Default::default()
        };
        assert!(matches!(b.to_partial(), Err(DivinationError::InvalidInput(_))));
    }

    #[test]
    fn empty_question_rejected() {
        let req = DivinationRequest {
            question: "  ".into(),
            ..Default::default()
        };
        assert_eq!(
            req.validate(),
            Err(DivinationError::MissingRequiredField("question"))
        );
    }
}
