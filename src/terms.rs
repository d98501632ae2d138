use crate::profile::Profile;
use crate::utils::{char_count, prefix, squash, suffix, title_case, zero_pad};
use crate::TermSet;

/// Base terms outside this character range are dropped.
pub const BASE_TERM_MIN_LEN: usize = 3;
pub const BASE_TERM_MAX_LEN: usize = 30;

/// Permutations draw from at most this many favorite numbers. Arrangement
/// counts grow factorially with the pool size, so this cap is a hard
/// resource ceiling, not a tunable.
pub const MAX_PERMUTED_NUMBERS: usize = 5;

/// Term extractor - derives base terms from profile fields and
/// structural combinations of them.
pub struct TermExtractor;

impl TermExtractor {
    /// Extract the base-term set for a profile. Total over any schema-valid
    /// profile: absent fields contribute nothing.
    pub fn extract(profile: &Profile) -> TermSet {
        let mut terms = TermSet::new();

        let first_name = squash(&profile.first_name);
        let middle_name = squash(&profile.middle_name);
        let last_name = squash(&profile.last_name);
        let nickname = squash(&profile.nickname);

        add_term(&mut terms, &first_name);
        add_term(&mut terms, &middle_name);
        add_term(&mut terms, &last_name);
        add_term(&mut terms, &nickname);

        add_name_combinations(&mut terms, &first_name, &middle_name, &last_name);

        if let Some(partner) = &profile.partner {
            add_term(&mut terms, &partner.first_name);
            add_term(&mut terms, &partner.nickname);

            add_name_combinations(&mut terms, &first_name, "", &partner.first_name);
            add_name_combinations(&mut terms, &partner.first_name, "", &last_name);
        }

        if let Some(pet) = &profile.pet {
            add_term(&mut terms, &pet.name);

            add_name_combinations(&mut terms, &first_name, "", &pet.name);
            add_name_combinations(&mut terms, &last_name, "", &pet.name);
        }

        if let Some(address) = &profile.address {
            add_term(&mut terms, &address.street);
            add_term(&mut terms, &address.city);
            add_term(&mut terms, &address.zip);
            add_term(&mut terms, &address.state);

            for part in street_tokens(&address.street) {
                add_term(&mut terms, &part);
            }
        }

        if let Some(education) = &profile.education {
            add_term(&mut terms, &education.school);
            add_term(&mut terms, &education.mascot);

            if let Some(year) = education.graduation_year {
                add_year_terms(&mut terms, &year.to_string(), &first_name, &last_name);
            }
        }

        if let Some(company) = &profile.company {
            add_term(&mut terms, &company.name);
            add_term(&mut terms, &company.department);
        }
        add_term(&mut terms, &profile.job_title);

        // Interests enter verbatim here; the interest generator lowercases
        // its own copies later.
        for interest in &profile.interests {
            add_term(&mut terms, interest);
        }

        if let Some(car) = &profile.car {
            add_term(&mut terms, &car.make);
            add_term(&mut terms, &car.model);
            add_term(&mut terms, &car.plate);

            if let Some(year) = car.year {
                add_year_terms(&mut terms, &year.to_string(), &first_name, &last_name);
            }
        }

        for phone in &profile.phones {
            let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() {
                continue;
            }

            add_term(&mut terms, &digits);
            let last4 = suffix(&digits, 4);
            add_term(&mut terms, &last4);

            if !first_name.is_empty() {
                terms.insert(format!("{}{}", first_name, last4));
            }
            if !last_name.is_empty() {
                terms.insert(format!("{}{}", last_name, last4));
            }
        }

        for email in &profile.emails {
            let username = email.split('@').next().unwrap_or("");
            add_split_tokens(&mut terms, username);
        }

        for handle in &profile.social_media_handles {
            let cleaned = handle.strip_prefix('@').unwrap_or(handle);
            add_split_tokens(&mut terms, cleaned);
        }

        add_favorite_number_terms(&mut terms, profile, &first_name, &last_name, &nickname);

        if let Some(anniversary) = profile.anniversary {
            use chrono::Datelike;
            add_year_terms(
                &mut terms,
                &anniversary.year().to_string(),
                &first_name,
                &last_name,
            );
        }

        terms.retain(|term| {
            let len = char_count(term);
            (BASE_TERM_MIN_LEN..=BASE_TERM_MAX_LEN).contains(&len)
        });

        terms
    }
}

/// Squash a raw value and add its four casing variants.
fn add_term(terms: &mut TermSet, raw: &str) {
    let cleaned = squash(raw);
    if cleaned.is_empty() {
        return;
    }
    terms.insert(cleaned.to_lowercase());
    terms.insert(cleaned.to_uppercase());
    terms.insert(title_case(&cleaned));
    terms.insert(cleaned);
}

/// Concatenation patterns for a (first, middle, last) name triple. Callers
/// reuse this with partner and pet names in the last slot.
fn add_name_combinations(terms: &mut TermSet, first: &str, middle: &str, last: &str) {
    let first = squash(first);
    let middle = squash(middle);
    let last = squash(last);

    if first.is_empty() || last.is_empty() {
        return;
    }

    terms.insert(format!("{}{}", first, last));
    terms.insert(format!("{}{}", last, first));
    terms.insert(format!("{}{}", first, last).to_lowercase());
    terms.insert(format!("{}{}", title_case(&first), title_case(&last)));
    terms.insert(format!("{}{}", first, prefix(&last, 3)));
    terms.insert(format!("{}{}", prefix(&first, 1), last));
    terms.insert(format!("{}{}", last, prefix(&first, 1)));

    if !middle.is_empty() {
        terms.insert(format!("{}{}{}", first, prefix(&middle, 1), last));
        terms.insert(format!("{}{}{}", prefix(&first, 1), prefix(&middle, 1), last));
        terms.insert(format!("{}{}{}", first, last, prefix(&middle, 1)));
    }
}

/// A year string plus its name-prefixed pairings.
fn add_year_terms(terms: &mut TermSet, year: &str, first_name: &str, last_name: &str) {
    add_term(terms, year);
    if !first_name.is_empty() {
        terms.insert(format!("{}{}", first_name, year));
    }
    if !last_name.is_empty() {
        terms.insert(format!("{}{}", last_name, year));
    }
}

/// The whole value plus its `.`/`-`/`_`-delimited fragments.
fn add_split_tokens(terms: &mut TermSet, value: &str) {
    add_term(terms, value);
    for part in value.split(['.', '-', '_']) {
        if !part.is_empty() {
            add_term(terms, part);
        }
    }
}

/// Non-numeric word tokens of a street line.
fn street_tokens(street: &str) -> Vec<String> {
    street
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|part| !part.is_empty() && !part.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}

fn add_favorite_number_terms(
    terms: &mut TermSet,
    profile: &Profile,
    first_name: &str,
    last_name: &str,
    nickname: &str,
) {
    let numbers: Vec<String> = profile
        .favorite_numbers
        .iter()
        .map(|n| squash(n))
        .filter(|n| !n.is_empty())
        .collect();

    for number in &numbers {
        add_term(terms, number);
        add_term(terms, &format!("0{}", number));
        add_term(terms, &zero_pad(number, 2));
        add_term(terms, &zero_pad(number, 3));

        add_number_name_combos(terms, number, first_name, last_name, nickname);
    }

    // Ordered arrangements of every length over a capped pool. This is the
    // dominant cost center of the whole extractor.
    let pool = &numbers[..numbers.len().min(MAX_PERMUTED_NUMBERS)];
    for perm in number_permutations(pool) {
        add_term(terms, &perm);
        add_term(terms, &zero_pad(&perm, char_count(&perm) + 1));

        add_number_name_combos(terms, &perm, first_name, last_name, nickname);
    }
}

/// The eight name/number concatenation patterns shared by single numbers
/// and permutation strings.
fn add_number_name_combos(
    terms: &mut TermSet,
    number: &str,
    first_name: &str,
    last_name: &str,
    nickname: &str,
) {
    if !first_name.is_empty() {
        terms.insert(format!("{}{}", first_name, number));
        terms.insert(format!("{}{}", number, first_name));
    }
    if !last_name.is_empty() {
        terms.insert(format!("{}{}", last_name, number));
        terms.insert(format!("{}{}", number, last_name));
    }
    if !first_name.is_empty() && !last_name.is_empty() {
        terms.insert(format!("{}{}{}", first_name, last_name, number));
        terms.insert(format!("{}{}{}", number, first_name, last_name));
    }
    if !nickname.is_empty() {
        terms.insert(format!("{}{}", nickname, number));
        terms.insert(format!("{}{}", number, nickname));
    }
}

/// Every ordered arrangement of 1..=n elements, concatenated. Positions are
/// distinct even when values repeat, so for n distinct inputs the result has
/// sum over r of n!/(n-r)! entries.
pub(crate) fn number_permutations(numbers: &[String]) -> Vec<String> {
    let mut output = Vec::new();
    let mut used = vec![false; numbers.len()];
    let mut current = String::new();
    permute_into(numbers, &mut used, &mut current, &mut output);
    output
}

fn permute_into(
    numbers: &[String],
    used: &mut [bool],
    current: &mut String,
    output: &mut Vec<String>,
) {
    for i in 0..numbers.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        let len_before = current.len();
        current.push_str(&numbers[i]);
        output.push(current.clone());
        permute_into(numbers, used, current, output);
        current.truncate(len_before);
        used[i] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Address, Car, Education, Partner, Pet};

    fn named_profile() -> Profile {
        Profile {
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            ..Profile::default()
        }
    }

    #[test]
    fn test_name_combination_examples() {
        let terms = TermExtractor::extract(&named_profile());

        for expected in ["JohnSmith", "SmithJohn", "johnsmith", "JohnSmi", "JSmith", "SmithJ"] {
            assert!(terms.contains(expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_middle_name_combinations() {
        let mut profile = named_profile();
        profile.middle_name = "Quincy".to_string();

        let terms = TermExtractor::extract(&profile);
        assert!(terms.contains("JohnQSmith"));
        assert!(terms.contains("JQSmith"));
        assert!(terms.contains("JohnSmithQ"));
    }

    #[test]
    fn test_casing_variants() {
        let profile = Profile {
            first_name: "dave".to_string(),
            ..Profile::default()
        };
        let terms = TermExtractor::extract(&profile);

        assert!(terms.contains("dave"));
        assert!(terms.contains("DAVE"));
        assert!(terms.contains("Dave"));
    }

    #[test]
    fn test_whitespace_is_squashed() {
        let profile = Profile {
            first_name: "Mary Jane".to_string(),
            ..Profile::default()
        };
        let terms = TermExtractor::extract(&profile);

        assert!(terms.contains("MaryJane"));
        assert!(terms.iter().all(|t| !t.chars().any(char::is_whitespace)));
    }

    #[test]
    fn test_length_filter() {
        let mut profile = Profile {
            first_name: "Al".to_string(),
            ..Profile::default()
        };
        profile.company = Some(crate::profile::Company {
            name: "a".repeat(31),
            department: String::new(),
        });

        let terms = TermExtractor::extract(&profile);
        assert!(!terms.contains("Al"));
        assert!(terms.iter().all(|t| {
            let len = char_count(t);
            (BASE_TERM_MIN_LEN..=BASE_TERM_MAX_LEN).contains(&len)
        }));
    }

    #[test]
    fn test_partner_and_pet_combinations() {
        let mut profile = named_profile();
        profile.partner = Some(Partner {
            first_name: "Jane".to_string(),
            ..Partner::default()
        });
        profile.pet = Some(Pet {
            name: "Rex".to_string(),
        });

        let terms = TermExtractor::extract(&profile);
        assert!(terms.contains("JohnJane"));
        assert!(terms.contains("JaneSmith"));
        assert!(terms.contains("JohnRex"));
        assert!(terms.contains("SmithRex"));
        assert!(terms.contains("RexJohn"));
    }

    #[test]
    fn test_phone_terms() {
        let mut profile = named_profile();
        profile.phones = vec!["(555) 123-4567".to_string()];

        let terms = TermExtractor::extract(&profile);
        assert!(terms.contains("5551234567"));
        assert!(terms.contains("4567"));
        assert!(terms.contains("John4567"));
        assert!(terms.contains("Smith4567"));
    }

    #[test]
    fn test_email_and_handle_tokens() {
        let mut profile = named_profile();
        profile.emails = vec!["john.doe_77@example.com".to_string()];
        profile.social_media_handles = vec!["@jsmith".to_string()];

        let terms = TermExtractor::extract(&profile);
        assert!(terms.contains("john.doe_77"));
        assert!(terms.contains("doe"));
        assert!(terms.contains("jsmith"));
        // the sub-token "77" falls under the minimum length
        assert!(!terms.contains("77"));
    }

    #[test]
    fn test_street_tokens() {
        let mut profile = named_profile();
        profile.address = Some(Address {
            street: "123 Oak Avenue".to_string(),
            ..Address::default()
        });

        let terms = TermExtractor::extract(&profile);
        assert!(terms.contains("123OakAvenue"));
        assert!(terms.contains("Oak"));
        assert!(terms.contains("Avenue"));
        assert!(!terms.contains("123"));
    }

    #[test]
    fn test_year_terms() {
        let mut profile = named_profile();
        profile.education = Some(Education {
            school: String::new(),
            mascot: String::new(),
            graduation_year: Some(2008),
        });
        profile.car = Some(Car {
            year: Some(2015),
            ..Car::default()
        });
        profile.anniversary = chrono::NaiveDate::from_ymd_opt(2010, 6, 12);

        let terms = TermExtractor::extract(&profile);
        assert!(terms.contains("2008"));
        assert!(terms.contains("John2008"));
        assert!(terms.contains("Smith2015"));
        assert!(terms.contains("John2010"));
    }

    #[test]
    fn test_favorite_number_terms() {
        let mut profile = named_profile();
        profile.nickname = "Johnny".to_string();
        profile.favorite_numbers = vec!["7".to_string()];

        let terms = TermExtractor::extract(&profile);
        assert!(terms.contains("007"));
        assert!(terms.contains("John7"));
        assert!(terms.contains("7John"));
        assert!(terms.contains("Smith7"));
        assert!(terms.contains("JohnSmith7"));
        assert!(terms.contains("7JohnSmith"));
        assert!(terms.contains("Johnny7"));
    }

    #[test]
    fn test_permutation_count_bound() {
        let numbers: Vec<String> = ["1", "2", "3"].iter().map(|s| s.to_string()).collect();
        let perms = number_permutations(&numbers);

        // 3 + 6 + 6 arrangements for three distinct numbers
        assert_eq!(perms.len(), 15);
        let distinct: std::collections::BTreeSet<&String> = perms.iter().collect();
        assert_eq!(distinct.len(), 15);
        assert!(perms.contains(&"123".to_string()));
        assert!(perms.contains(&"321".to_string()));
    }

    #[test]
    fn test_permutation_pool_is_capped() {
        let mut profile = named_profile();
        profile.favorite_numbers = (1..=6).map(|n| n.to_string()).collect();

        let terms = TermExtractor::extract(&profile);
        assert!(terms.contains("12345"));
        assert!(!terms.contains("123456"));
        // the sixth number still gets its linear per-number terms
        assert!(terms.contains("John6"));
    }

    #[test]
    fn test_minimal_profile_contributes_without_error() {
        let profile = Profile {
            first_name: "Ann".to_string(),
            ..Profile::default()
        };
        let terms = TermExtractor::extract(&profile);

        assert!(terms.contains("Ann"));
        assert!(terms.contains("ann"));
        assert!(terms.contains("ANN"));
    }
}
