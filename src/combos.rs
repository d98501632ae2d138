use crate::config::ProfilerConfig;
use crate::utils::{char_count, zero_pad};
use crate::TermSet;

/// Name-like terms kept for cross-products.
pub const MAX_NAME_TERMS: usize = 100;
/// Number-like terms kept for cross-products.
pub const MAX_NUMBER_TERMS: usize = 20;
/// Interests entering the combination stage.
pub const MAX_COMBO_INTERESTS: usize = 5;
/// Name-like terms crossed with each interest.
pub const MAX_INTEREST_NAMES: usize = 20;
/// Favorite numbers crossed with each interest.
pub const MAX_INTEREST_NUMBERS: usize = 5;

/// Fixed year range crossed with every retained name-like term. With the
/// name cap this loop is 100 x 75 pairs by construction, the dominant cost
/// of this stage.
pub const COMBO_YEAR_FROM: u32 = 1950;
pub const COMBO_YEAR_TO: u32 = 2024;

/// Favorite numbers kept by the number combination stage.
pub const MAX_FAVORITE_NUMBERS: usize = 5;
/// Ordered number pairs emitted before the pair loop stops.
pub const MAX_PAIR_GROUPS: usize = 10;
/// Digit-affixed sequence strings emitted before the sequence loop stops.
pub const MAX_SEQUENCE_ENTRIES: usize = 100;

/// Combination generator - cross-products name-like variations with
/// numeric tokens, years and a bounded set of interests.
pub struct CombinationGenerator;

impl CombinationGenerator {
    pub fn generate(
        variations: &TermSet,
        interests: &[String],
        favorite_numbers: &[String],
    ) -> TermSet {
        let mut combos = TermSet::new();

        // Ascending length, lexicographic within equal lengths, so the caps
        // always retain the same terms for the same input set.
        let mut sorted: Vec<&String> = variations.iter().collect();
        sorted.sort_by_key(|term| char_count(term));

        let name_terms: Vec<&String> = sorted
            .iter()
            .copied()
            .filter(|t| t.chars().any(char::is_alphabetic) && char_count(t) >= 3)
            .take(MAX_NAME_TERMS)
            .collect();
        let number_terms: Vec<&String> = sorted
            .iter()
            .copied()
            .filter(|t| !t.is_empty() && t.chars().all(|c| c.is_ascii_digit()) && char_count(t) <= 4)
            .take(MAX_NUMBER_TERMS)
            .collect();

        for name in &name_terms {
            for num in &number_terms {
                combos.insert(format!("{}{}", name, num));
                combos.insert(format!("{}{}", num, name));
                combos.insert(format!("{}_{}", name, num));
                combos.insert(format!("{}.{}", name, num));
            }

            for year in COMBO_YEAR_FROM..=COMBO_YEAR_TO {
                combos.insert(format!("{}{}", name, year));
                combos.insert(format!("{}{}", year, name));
            }
        }

        for interest in interests.iter().take(MAX_COMBO_INTERESTS) {
            if interest.is_empty() {
                continue;
            }

            combos.insert(interest.clone());
            combos.insert(format!("{}123", interest));
            combos.insert(format!("{}!", interest));

            for num in favorite_numbers.iter().take(MAX_INTEREST_NUMBERS) {
                combos.insert(format!("{}{}", interest, num));
                combos.insert(format!("{}{}", num, interest));
            }

            for name in name_terms.iter().take(MAX_INTEREST_NAMES) {
                combos.insert(format!("{}{}", interest, name));
                combos.insert(format!("{}{}", name, interest));
            }
        }

        combos
    }
}

/// Number combination generator - padded, reversed, paired and sequenced
/// variants of the favorite numbers. Available as a standalone stage; the
/// default pipeline does not invoke it.
pub struct NumberCombinationGenerator;

impl NumberCombinationGenerator {
    pub fn generate(numbers: &[String], config: &ProfilerConfig) -> TermSet {
        let mut combos = TermSet::new();

        let numbers: Vec<&String> = numbers.iter().take(MAX_FAVORITE_NUMBERS).collect();

        for num in &numbers {
            combos.insert((*num).clone());
            for width in 1..=3 {
                combos.insert(zero_pad(num, width));
            }
            combos.insert(num.chars().rev().collect());
        }

        let mut pair_groups = 0;
        for (i, a) in numbers.iter().enumerate() {
            for (j, b) in numbers.iter().enumerate() {
                if i == j || pair_groups >= MAX_PAIR_GROUPS {
                    continue;
                }
                combos.insert(format!("{}{}", a, b));
                for separator in &config.profiling.separators {
                    combos.insert(format!("{}{}{}", a, separator, b));
                }
                pair_groups += 1;
            }
        }

        let mut sequence_entries = 0;
        'sequences: for num in &numbers {
            for digit in 1..10 {
                if sequence_entries >= MAX_SEQUENCE_ENTRIES {
                    break 'sequences;
                }
                combos.insert(format!("{}{}", digit, num));
                combos.insert(format!("{}{}", num, digit));
                sequence_entries += 2;
            }
        }

        combos
    }
}
