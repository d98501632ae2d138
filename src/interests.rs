use crate::config::ProfilerConfig;
use crate::TermSet;

/// Interest term generator - interest-derived tokens built around the
/// configured modifier list. Unlike the combination stage this processes
/// every interest, lowercased.
pub struct InterestTermGenerator;

impl InterestTermGenerator {
    pub fn generate(interests: &[String], config: &ProfilerConfig) -> TermSet {
        let mut terms = TermSet::new();

        for interest in interests {
            let lower = interest.to_lowercase();
            if lower.is_empty() {
                continue;
            }

            terms.insert(format!("{}123", lower));
            terms.insert(format!("my{}", lower));
            terms.insert(format!("best{}", lower));

            for modifier in &config.profiling.interest_modifiers {
                terms.insert(format!("{}{}", lower, modifier));
                terms.insert(format!("{}{}", modifier, lower));
                terms.insert(format!("{}{}123", lower, modifier));
            }

            terms.insert(lower);
        }

        terms
    }
}
