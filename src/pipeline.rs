use tracing::{debug, info};

use crate::combos::CombinationGenerator;
use crate::config::ProfilerConfig;
use crate::formats::SpecialFormatGenerator;
use crate::interests::InterestTermGenerator;
use crate::profile::Profile;
use crate::terms::TermExtractor;
use crate::utils::char_count;
use crate::variations::VariationGenerator;

/// Pipeline orchestrator - runs every generator stage over a profile,
/// unions the candidate sets and applies the final filters.
pub struct WordlistPipeline;

impl WordlistPipeline {
    /// Produce the final wordlist: deduplicated, whitespace-free, within
    /// the configured length bounds, sorted by ascending length with
    /// lexicographic order within equal lengths.
    pub fn run(profile: &Profile, config: &ProfilerConfig) -> Vec<String> {
        let wcfrom = config.wordlength.wcfrom;
        let wcto = config.wordlength.wcto;

        let base_terms = TermExtractor::extract(profile);
        debug!("Extracted {} base terms", base_terms.len());

        let variations = VariationGenerator::generate(&base_terms, config);
        debug!("Generated {} variations", variations.len());

        let special_formats = SpecialFormatGenerator::generate(profile);
        debug!("Generated {} special formats", special_formats.len());

        let combinations = CombinationGenerator::generate(
            &variations,
            &profile.interests,
            &profile.favorite_numbers,
        );
        debug!("Generated {} combinations", combinations.len());

        let interest_terms = InterestTermGenerator::generate(&profile.interests, config);
        debug!("Generated {} interest terms", interest_terms.len());

        let mut candidates = base_terms;
        candidates.extend(variations);
        candidates.extend(special_formats);
        candidates.extend(combinations);
        candidates.extend(interest_terms);

        let mut wordlist: Vec<String> = candidates
            .into_iter()
            .filter(|term| {
                let len = char_count(term);
                (wcfrom..=wcto).contains(&len) && !term.chars().any(char::is_whitespace)
            })
            .collect();

        // Candidates arrive in lexicographic order and the sort is stable,
        // so equal lengths stay lexicographic.
        wordlist.sort_by_key(|term| char_count(term));

        info!("Generated {} candidate passwords", wordlist.len());
        wordlist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rich_profile() -> Profile {
        let mut profile = Profile {
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            nickname: "Johnny".to_string(),
            birthdate: chrono::NaiveDate::from_ymd_opt(1990, 5, 17),
            ..Profile::default()
        };
        profile.favorite_numbers = vec!["7".to_string(), "13".to_string()];
        profile.interests = vec!["golf".to_string(), "ice hockey".to_string()];
        profile.pet = Some(crate::profile::Pet {
            name: "Rex".to_string(),
        });
        profile
    }

    #[test]
    fn test_length_and_whitespace_invariants() {
        let config = ProfilerConfig::default();
        let wordlist = WordlistPipeline::run(&rich_profile(), &config);

        assert!(!wordlist.is_empty());
        for term in &wordlist {
            let len = char_count(term);
            assert!(
                (config.wordlength.wcfrom..=config.wordlength.wcto).contains(&len),
                "out of bounds: {}",
                term
            );
            assert!(
                !term.chars().any(char::is_whitespace),
                "contains whitespace: {}",
                term
            );
        }
    }

    #[test]
    fn test_runs_are_deterministic() {
        let config = ProfilerConfig::default();
        let profile = rich_profile();

        let first = WordlistPipeline::run(&profile, &config);
        let second = WordlistPipeline::run(&profile, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_output_ordering() {
        let config = ProfilerConfig::default();
        let wordlist = WordlistPipeline::run(&rich_profile(), &config);

        for pair in wordlist.windows(2) {
            let (a, b) = (char_count(&pair[0]), char_count(&pair[1]));
            assert!(a < b || (a == b && pair[0] <= pair[1]));
        }
    }

    #[test]
    fn test_output_has_no_duplicates() {
        let config = ProfilerConfig::default();
        let wordlist = WordlistPipeline::run(&rich_profile(), &config);

        let unique: std::collections::BTreeSet<&String> = wordlist.iter().collect();
        assert_eq!(unique.len(), wordlist.len());
    }

    #[test]
    fn test_every_stage_contributes() {
        let config = ProfilerConfig::default();
        let wordlist = WordlistPipeline::run(&rich_profile(), &config);

        // extractor, date formats, combinations and interest terms all land
        assert!(wordlist.contains(&"JohnSmith".to_string()));
        assert!(wordlist.contains(&"May1990".to_string()));
        assert!(wordlist.contains(&"John1990".to_string()));
        assert!(wordlist.contains(&"golf123".to_string()));
        assert!(wordlist.contains(&"golf7".to_string()));
    }

    #[test]
    fn test_first_name_only_profile() {
        let mut config = ProfilerConfig::default();
        config.wordlength.wcfrom = 3;

        let profile = Profile {
            first_name: "Ann".to_string(),
            ..Profile::default()
        };
        let wordlist = WordlistPipeline::run(&profile, &config);

        assert!(!wordlist.is_empty());
        for expected in ["Ann", "ann", "ANN"] {
            assert!(wordlist.contains(&expected.to_string()), "missing {}", expected);
        }
    }
}
