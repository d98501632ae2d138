use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{ProfilerError, Result};

/// Generation configuration, loaded once before any generator runs and
/// passed by reference from then on. No generator reads ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilerConfig {
    /// Year pool; not read by the profile pipeline.
    pub years: Vec<String>,

    /// Special-character pool; not read by the profile pipeline.
    pub chars: Vec<String>,

    /// Tuning threshold; not read by the profile pipeline.
    pub threshold: u32,

    pub nums: NumberRange,
    pub wordlength: WordLength,
    pub profiling: ProfilingLists,

    /// Letter to replacement text. An empty map disables leet substitution.
    /// Keys longer than one character never match anything.
    #[serde(default)]
    pub leet: BTreeMap<String, String>,
}

/// Numeric append range; not read by the profile pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberRange {
    pub from: u32,
    pub to: u32,
}

/// Output word length bounds, inclusive, in characters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordLength {
    pub wcfrom: usize,
    pub wcto: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilingLists {
    /// Appended verbatim to every variation
    pub suffixes: Vec<String>,

    /// Joiners used between number pairs
    pub separators: Vec<String>,

    /// Concatenated around interest tokens
    pub interest_modifiers: Vec<String>,
}

impl ProfilerConfig {
    /// Load configuration from a TOML file. A missing file or a missing
    /// required key aborts before any generation runs.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ProfilerError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;

        let config: ProfilerConfig = toml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.wordlength.wcfrom == 0 {
            return Err(ProfilerError::Config(
                "wordlength.wcfrom must be >= 1".to_string(),
            ));
        }
        if self.wordlength.wcfrom > self.wordlength.wcto {
            return Err(ProfilerError::Config(format!(
                "wordlength.wcfrom ({}) must not exceed wordlength.wcto ({})",
                self.wordlength.wcfrom, self.wordlength.wcto
            )));
        }
        if self.nums.from > self.nums.to {
            return Err(ProfilerError::Config(format!(
                "nums.from ({}) must not exceed nums.to ({})",
                self.nums.from, self.nums.to
            )));
        }

        Ok(())
    }

    /// Create default configuration
    pub fn default_toml() -> String {
        // the "#" list entries would close an r#-delimited literal early
        r##"years = ["2019", "2020", "2021", "2022", "2023", "2024", "2025", "2026"]
chars = ["!", "@", "#", "$", "%", "&", "*"]
threshold = 200

[nums]
from = 0
to = 100

[wordlength]
wcfrom = 5
wcto = 12

[profiling]
suffixes = ["123", "1234", "!", "@", "#", "1", "12", "2024", "2025"]
separators = ["_", "."]
interest_modifiers = ["lover", "fan", "4ever", "life"]

[leet]
a = "4"
e = "3"
g = "9"
i = "1"
o = "0"
s = "5"
t = "7"
z = "2"
"##
        .to_string()
    }

    /// Save default config to file
    pub fn save_default(path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, Self::default_toml())?;
        Ok(())
    }
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        let leet = [
            ('a', "4"),
            ('e', "3"),
            ('g', "9"),
            ('i', "1"),
            ('o', "0"),
            ('s', "5"),
            ('t', "7"),
            ('z', "2"),
        ]
        .into_iter()
        .map(|(letter, text)| (letter.to_string(), text.to_string()))
        .collect();

        ProfilerConfig {
            years: vec![
                "2019".to_string(),
                "2020".to_string(),
                "2021".to_string(),
                "2022".to_string(),
                "2023".to_string(),
                "2024".to_string(),
                "2025".to_string(),
                "2026".to_string(),
            ],
            chars: ["!", "@", "#", "$", "%", "&", "*"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            threshold: 200,
            nums: NumberRange { from: 0, to: 100 },
            wordlength: WordLength {
                wcfrom: 5,
                wcto: 12,
            },
            profiling: ProfilingLists {
                suffixes: ["123", "1234", "!", "@", "#", "1", "12", "2024", "2025"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                separators: vec!["_".to_string(), ".".to_string()],
                interest_modifiers: ["lover", "fan", "4ever", "life"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
            leet,
        }
    }
}
