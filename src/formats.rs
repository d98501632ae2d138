use chrono::{Datelike, NaiveDate};

use crate::profile::Profile;
use crate::TermSet;

/// Render patterns applied to every date field.
const DATE_PATTERNS: [&str; 11] = [
    "%m%d%Y", "%d%m%Y", "%Y%m%d", "%m%d%y", "%d%m%y", "%y%m%d", "%m%d", "%d%m", "%b%Y", "%B%Y",
    "%b%y",
];

/// Special-format generator - re-encodes profile dates and years into
/// common numeric and calendar patterns.
pub struct SpecialFormatGenerator;

impl SpecialFormatGenerator {
    pub fn generate(profile: &Profile) -> TermSet {
        let mut formats = TermSet::new();

        let dates = [
            profile.birthdate,
            profile.partner.as_ref().and_then(|p| p.birthdate),
            profile.anniversary,
        ];
        for date in dates.into_iter().flatten() {
            add_date_formats(&mut formats, date);
        }

        if let Some(education) = &profile.education {
            if let Some(year) = education.graduation_year {
                formats.insert(year.to_string());
            }
        }
        if let Some(car) = &profile.car {
            if let Some(year) = car.year {
                formats.insert(year.to_string());
            }
        }

        formats
    }
}

fn add_date_formats(formats: &mut TermSet, date: NaiveDate) {
    for pattern in DATE_PATTERNS {
        formats.insert(date.format(pattern).to_string());
    }
    formats.insert(date.year().to_string());
}
