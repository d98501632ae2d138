use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::profile::{parse_date, Address, Car, Company, Education, Partner, Pet, Profile};
use crate::utils::squash;

/// Interactive profile collection. Every field except the first name may be
/// left empty.
pub fn collect_profile() -> Result<Profile> {
    let theme = ColorfulTheme::default();
    let mut profile = Profile::default();

    println!("\n===== Personal Information =====");
    profile.first_name = ask_required(&theme, "First Name")?;
    profile.middle_name = ask(&theme, "Middle name/initial (optional)")?;
    profile.last_name = ask(&theme, "Last Name (optional)")?;
    profile.nickname = ask(&theme, "Nickname (optional)")?;
    profile.birthdate = ask_date(&theme, "Birthdate (YYYY-MM-DD, optional)")?;
    profile.favorite_numbers = ask_list(
        &theme,
        "Favorite numbers (comma separated, e.g. 7,13,42, optional)",
    )?;

    println!("\n===== Relationship Information =====");
    if confirm(&theme, "Do you have a partner?")? {
        profile.partner = Some(Partner {
            first_name: ask(&theme, "Partner's First Name (optional)")?,
            nickname: ask(&theme, "Partner's Nickname (optional)")?,
            birthdate: ask_date(&theme, "Partner's Birthdate (YYYY-MM-DD, optional)")?,
        });
    }

    println!("\n===== Pet Information =====");
    if confirm(&theme, "Do you have a pet?")? {
        profile.pet = Some(Pet {
            name: ask(&theme, "Pet's Name (optional)")?,
        });
    }

    println!("\n===== Contact Information =====");
    profile.phones = ask_list(&theme, "Phone Numbers (comma separated, optional)")?;
    profile.emails = ask_list(&theme, "Email Addresses (comma separated, optional)")?;
    profile.social_media_handles = ask_list(
        &theme,
        "Social Media Handles (comma separated, with @, optional)",
    )?;

    println!("\n===== Address Information =====");
    let address = Address {
        street: ask(&theme, "Street Address (optional)")?,
        city: ask(&theme, "City (optional)")?,
        zip: ask(&theme, "ZIP Code (optional)")?,
        state: ask(&theme, "State (optional)")?,
    };
    if [&address.street, &address.city, &address.zip, &address.state]
        .iter()
        .any(|field| !field.is_empty())
    {
        profile.address = Some(address);
    }

    println!("\n===== Education Information =====");
    let education = Education {
        school: ask(&theme, "School/University (optional)")?,
        mascot: ask(&theme, "School Mascot (optional)")?,
        graduation_year: ask_year(&theme, "Graduation Year (optional)")?,
    };
    if !education.school.is_empty()
        || !education.mascot.is_empty()
        || education.graduation_year.is_some()
    {
        profile.education = Some(education);
    }

    println!("\n===== Career Information =====");
    let company = Company {
        name: ask(&theme, "Company Name (optional)")?,
        department: ask(&theme, "Department (optional)")?,
    };
    if !company.name.is_empty() || !company.department.is_empty() {
        profile.company = Some(company);
    }
    profile.job_title = ask(&theme, "Job Title (optional)")?;

    println!("\n===== Interests & Hobbies =====");
    profile.interests = ask_list(&theme, "Interests (comma separated, optional)")?;

    println!("\n===== Vehicle Information =====");
    if confirm(&theme, "Do you own a vehicle?")? {
        profile.car = Some(Car {
            make: ask(&theme, "Car Make (optional)")?,
            model: ask(&theme, "Car Model (optional)")?,
            year: ask_year(&theme, "Manufacture Year (optional)")?,
            plate: squash(&ask(&theme, "License Plate (optional)")?),
        });
    }

    println!("\n===== Important Dates =====");
    profile.anniversary = ask_date(&theme, "Anniversary Date (YYYY-MM-DD, optional)")?;

    Ok(profile)
}

fn ask(theme: &ColorfulTheme, prompt: &str) -> Result<String> {
    let value = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn ask_required(theme: &ColorfulTheme, prompt: &str) -> Result<String> {
    loop {
        let value = ask(theme, prompt)?;
        if !value.is_empty() {
            return Ok(value);
        }
        println!("This field is required.");
    }
}

/// Re-prompts until the input is empty or a valid YYYY-MM-DD date.
fn ask_date(theme: &ColorfulTheme, prompt: &str) -> Result<Option<NaiveDate>> {
    loop {
        let value = ask(theme, prompt)?;
        if value.is_empty() {
            return Ok(None);
        }
        match parse_date(&value) {
            Ok(date) => return Ok(Some(date)),
            Err(e) => println!("{}", e),
        }
    }
}

fn ask_year(theme: &ColorfulTheme, prompt: &str) -> Result<Option<u32>> {
    loop {
        let value = ask(theme, prompt)?;
        if value.is_empty() {
            return Ok(None);
        }
        match value.parse::<u32>() {
            Ok(year) => return Ok(Some(year)),
            Err(_) => println!("Invalid format. Please enter a whole number."),
        }
    }
}

fn ask_list(theme: &ColorfulTheme, prompt: &str) -> Result<Vec<String>> {
    Ok(split_csv(&ask(theme, prompt)?))
}

fn confirm(theme: &ColorfulTheme, prompt: &str) -> Result<bool> {
    Ok(Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

/// Comma-separated input, trimmed, empty items dropped.
fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
