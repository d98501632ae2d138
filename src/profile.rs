use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ProfilerError, Result};
use crate::utils;

/// Target profile. Every field except `first_name` is optional: an absent
/// field contributes no terms and never errors. The record is read-only for
/// the whole pipeline; collection (interactive, file, or programmatic)
/// happens before any generator runs.
///
/// Date fields are strict `YYYY-MM-DD` on the wire; an empty string and an
/// absent key both mean "no date".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub nickname: String,

    #[serde(default, deserialize_with = "de_date", skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de_date", skip_serializing_if = "Option::is_none")]
    pub anniversary: Option<NaiveDate>,

    #[serde(default)]
    pub job_title: String,

    /// Order preserved; duplicates permitted.
    #[serde(default)]
    pub favorite_numbers: Vec<String>,

    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub social_media_handles: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<Partner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet: Option<Pet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Education>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car: Option<Car>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Partner {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default, deserialize_with = "de_date", skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pet {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub state: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub mascot: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Car {
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(default)]
    pub plate: String,
}

impl Profile {
    /// Load a profile from a TOML file and check its preconditions.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let profile: Profile = toml::from_str(&content)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Check the schema precondition the generators rely on. Generators
    /// themselves never validate; the collection layer runs this first.
    pub fn validate(&self) -> Result<()> {
        if utils::squash(&self.first_name).is_empty() {
            return Err(ProfilerError::Profile(
                "first_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parse a strict `YYYY-MM-DD` date. The error is recoverable and belongs to
/// whoever produced the value: the interactive collector re-prompts, the
/// file loader aborts with the offending value.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| ProfilerError::InvalidDate(trimmed.to_string()))
}

fn de_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(value).map(Some).map_err(serde::de::Error::custom),
    }
}
