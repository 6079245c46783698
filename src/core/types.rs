use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Lowest grade accepted by the register.
pub const GRADE_MIN: f64 = 2.0;
/// Highest grade accepted by the register.
pub const GRADE_MAX: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum MenuCommand {
    #[strum(serialize = "add", to_string = "add")]
    Add,
    #[strum(serialize = "list", to_string = "list")]
    List,
    #[strum(serialize = "filter", to_string = "filter")]
    Filter,
    #[strum(serialize = "exit", to_string = "exit")]
    Exit,
}

impl MenuCommand {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| Error::unknown(s.trim(), valid_csv::<MenuCommand>()))
    }

    pub fn help(&self) -> &'static str {
        match self {
            MenuCommand::Add => "add or update a student",
            MenuCommand::List => "show all students",
            MenuCommand::Filter => "show students with an average grade below a threshold",
            MenuCommand::Exit => "quit",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Sort {
    Unordered,
    NameAsc,
    AverageAsc,
}

impl Default for Sort {
    fn default() -> Self {
        Sort::NameAsc
    }
}

impl Sort {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::config(format!(
                "Invalid list order: '{}'. Allowed list orders: {}",
                s.trim(),
                valid_csv::<Sort>()
            ))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

impl BoolFormat {
    #[inline]
    fn to_bool(self) -> bool {
        matches!(self, BoolFormat::TextTrue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s) {
            Ok(fmt) => Ok(Bool(fmt.to_bool())),
            Err(_) => Err(Error::config(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}

/// A trimmed, non-empty full name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentName(pub String);

impl StudentName {
    pub fn try_from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(StudentName(name.to_string()))
    }
}

impl fmt::Display for StudentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered, validated grade list. Every value lies in [`GRADE_MIN`, `GRADE_MAX`].
#[derive(Debug, Clone, PartialEq)]
pub struct Grades(pub Vec<f64>);

impl Grades {
    /// Parses whitespace-separated grades. The first bad token aborts the whole line.
    pub fn try_from_str(s: &str) -> Result<Self> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(Error::EmptyGradeInput);
        }
        let grades = tokens
            .into_iter()
            .map(Self::parse_token)
            .collect::<Result<Vec<f64>>>()?;
        Ok(Grades(grades))
    }

    fn parse_token(token: &str) -> Result<f64> {
        let value = parse_number(token).ok_or_else(|| Error::InvalidNumber(token.to_string()))?;
        // NaN fails `contains`, so it is reported as out of range.
        if !(GRADE_MIN..=GRADE_MAX).contains(&value) {
            return Err(Error::OutOfRange(value));
        }
        Ok(value)
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl fmt::Display for Grades {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_grades(&self.0))
    }
}

/// Parses a decimal number. A finite literal that overflows to infinity (`1e400`)
/// is not a number; an explicit `inf` is.
fn parse_number(token: &str) -> Option<f64> {
    let value = f64::from_str(token).ok()?;
    if value.is_infinite() {
        let digits = token.trim_start_matches(['+', '-']);
        if !digits.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("inf")) {
            return None;
        }
    }
    Some(value)
}

/// Renders grades as `[5 4.5 3]`.
pub fn format_grades(grades: &[f64]) -> String {
    let inner = grades
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{inner}]")
}

/// Average threshold for the `filter` command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(pub f64);

impl Threshold {
    pub fn try_from_str(s: &str) -> Result<Self> {
        let raw = s.trim();
        parse_number(raw)
            .map(Threshold)
            .ok_or_else(|| Error::InvalidThreshold(raw.to_string()))
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
