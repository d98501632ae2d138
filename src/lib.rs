// lib.rs - Password Profile Wordlist Library
// Derives candidate password lists from structured personal profiles

pub mod collect;
pub mod combos;
pub mod config;
pub mod formats;
pub mod interests;
pub mod output;
pub mod pipeline;
pub mod profile;
pub mod terms;
pub mod variations;

// Re-exports for convenience
pub use combos::{CombinationGenerator, NumberCombinationGenerator};
pub use config::ProfilerConfig;
pub use formats::SpecialFormatGenerator;
pub use interests::InterestTermGenerator;
pub use output::WordlistWriter;
pub use pipeline::WordlistPipeline;
pub use profile::{Address, Car, Company, Education, Partner, Pet, Profile};
pub use terms::TermExtractor;
pub use variations::{ModifierApplier, VariationGenerator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Candidate terms at each generation stage: unique by value, iterated in a
/// deterministic order so the final tie-break is reproducible.
pub type TermSet = std::collections::BTreeSet<String>;

/// Error types
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum ProfilerError {
        #[error("Configuration error: {0}")]
        Config(String),

        #[error("Invalid date '{0}': expected YYYY-MM-DD or empty")]
        InvalidDate(String),

        #[error("Profile error: {0}")]
        Profile(String),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("TOML error: {0}")]
        Toml(#[from] toml::de::Error),
    }

    pub type Result<T> = std::result::Result<T, ProfilerError>;
}

/// Utilities module
pub mod utils {
    /// Remove every whitespace character, interior runs included.
    pub fn squash(value: &str) -> String {
        value.split_whitespace().collect()
    }

    /// Uppercase the first character, lowercase the rest.
    pub fn title_case(value: &str) -> String {
        let mut chars = value.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(|c| c.to_lowercase()))
                .collect(),
            None => String::new(),
        }
    }

    /// Character count. Length limits are measured in characters, not bytes.
    pub fn char_count(value: &str) -> usize {
        value.chars().count()
    }

    /// Left-pad with zeros to `width` characters; longer values pass through.
    pub fn zero_pad(value: &str, width: usize) -> String {
        let len = char_count(value);
        if len >= width {
            return value.to_string();
        }
        let mut padded = "0".repeat(width - len);
        padded.push_str(value);
        padded
    }

    /// First `n` characters of a value.
    pub fn prefix(value: &str, n: usize) -> String {
        value.chars().take(n).collect()
    }

    /// Last `n` characters of a value.
    pub fn suffix(value: &str, n: usize) -> String {
        let len = char_count(value);
        value.chars().skip(len.saturating_sub(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squash() {
        assert_eq!(utils::squash("  John  Smith "), "JohnSmith");
        assert_eq!(utils::squash("plain"), "plain");
        assert_eq!(utils::squash("   "), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(utils::title_case("jOHN"), "John");
        assert_eq!(utils::title_case("smith"), "Smith");
        assert_eq!(utils::title_case(""), "");
    }

    #[test]
    fn test_zero_pad() {
        assert_eq!(utils::zero_pad("7", 2), "07");
        assert_eq!(utils::zero_pad("7", 3), "007");
        assert_eq!(utils::zero_pad("1234", 3), "1234");
    }

    #[test]
    fn test_prefix_suffix() {
        assert_eq!(utils::prefix("Smith", 3), "Smi");
        assert_eq!(utils::prefix("Jo", 3), "Jo");
        assert_eq!(utils::suffix("5551234567", 4), "4567");
        assert_eq!(utils::suffix("99", 4), "99");
    }
}
