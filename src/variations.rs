use std::collections::BTreeMap;

use crate::config::ProfilerConfig;
use crate::utils::{char_count, title_case};
use crate::TermSet;

/// Digit prefixes and suffixes are only attached to terms at most this long.
pub const DIGIT_AFFIX_MAX_LEN: usize = 5;

/// Length gate for the stricter modifier pass.
pub const MODIFIER_MIN_LEN: usize = 4;
pub const MODIFIER_MAX_LEN: usize = 30;

/// Variation generator - expands base terms with case, leet, suffix and
/// digit-affix transforms.
pub struct VariationGenerator;

impl VariationGenerator {
    pub fn generate(terms: &TermSet, config: &ProfilerConfig) -> TermSet {
        let mut variations = TermSet::new();

        for term in terms {
            if term.is_empty() {
                continue;
            }

            variations.insert(term.clone());
            variations.insert(term.to_lowercase());
            variations.insert(term.to_uppercase());
            variations.insert(title_case(term));

            if term.chars().any(char::is_alphabetic) {
                let leet = leet_transform(term, &config.leet);
                if leet != *term {
                    variations.insert(leet);
                }
            }

            // Suffixes and digit affixes attach to the term as collected,
            // not to each casing variant.
            for suffix in &config.profiling.suffixes {
                variations.insert(format!("{}{}", term, suffix));
            }

            if term.chars().any(|c| c.is_ascii_digit())
                && char_count(term) <= DIGIT_AFFIX_MAX_LEN
            {
                for digit in 0..10 {
                    variations.insert(format!("{}{}", term, digit));
                    variations.insert(format!("{}{}", digit, term));
                }
            }
        }

        variations
    }
}

/// Modifier applier - a stricter sibling of the variation generator. Input
/// is gated on length, leet output is re-checked against the same gate and
/// casings are kept only when they change the term. The original term is
/// not emitted.
pub struct ModifierApplier;

impl ModifierApplier {
    pub fn apply(terms: &TermSet, config: &ProfilerConfig) -> TermSet {
        let mut modified = TermSet::new();

        for term in terms {
            let len = char_count(term);
            if !(MODIFIER_MIN_LEN..=MODIFIER_MAX_LEN).contains(&len) {
                continue;
            }

            if !config.leet.is_empty() && term.chars().any(char::is_alphabetic) {
                let leet = leet_transform(term, &config.leet);
                let leet_len = char_count(&leet);
                if (MODIFIER_MIN_LEN..=MODIFIER_MAX_LEN).contains(&leet_len) {
                    modified.insert(leet);
                }
            }

            let lower = term.to_lowercase();
            if lower != *term {
                modified.insert(lower);
            }
            let upper = term.to_uppercase();
            if upper != *term {
                modified.insert(upper);
            }
            let titled = title_case(term);
            if titled != *term {
                modified.insert(titled);
            }
        }

        modified
    }
}

/// Single left-to-right pass over the term. Replacement output is never
/// re-scanned, so multi-character substitutions cannot cascade into later
/// rules.
fn leet_transform(term: &str, map: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(term.len());
    let mut buf = [0u8; 4];
    for c in term.chars() {
        let key: &str = c.encode_utf8(&mut buf);
        match map.get(key) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}
