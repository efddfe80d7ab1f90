//! Input validation for thinking requests
//!
//! All limits are inclusive. Strings are trimmed before length checks and the
//! trimmed value is what callers get back.

use crate::error::{CreativityError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub const MAX_THOUGHT_CHARS: usize = 5000;
pub const MAX_CONSTRAINT_CHARS: usize = 500;
pub const MIN_DOMAIN_CHARS: usize = 2;
pub const MAX_DOMAIN_CHARS: usize = 100;
pub const MAX_THOUGHT_NUMBER: u32 = 1000;
pub const MAX_SEED: u64 = 999_999;

fn harmful_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)<script[^>]*>|javascript:|data:text/html|vbscript:").expect("valid regex")
    })
}

fn domain_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[\p{L}\p{N} &/+.,'()-]+$").expect("valid regex"))
}

/// Trimmed thought text, 1 to 5000 characters, free of script injection patterns.
pub fn thought(value: &str, field: &'static str) -> Result<String> {
    let trimmed = value.trim();
    let chars = trimmed.chars().count();
    if chars == 0 {
        return Err(CreativityError::validation(field, "must be at least 1 character long"));
    }
    if chars > MAX_THOUGHT_CHARS {
        return Err(CreativityError::validation(
            field,
            format!("must be at most {MAX_THOUGHT_CHARS} characters long"),
        ));
    }
    if harmful_pattern().is_match(trimmed) {
        return Err(CreativityError::validation(field, "contains potentially harmful content"));
    }
    Ok(trimmed.to_string())
}

pub fn constraint(value: &str) -> Result<String> {
    let trimmed = value.trim();
    let chars = trimmed.chars().count();
    if chars == 0 {
        return Err(CreativityError::validation("constraint", "must be at least 1 character long"));
    }
    if chars > MAX_CONSTRAINT_CHARS {
        return Err(CreativityError::validation(
            "constraint",
            format!("must be at most {MAX_CONSTRAINT_CHARS} characters long"),
        ));
    }
    Ok(trimmed.to_string())
}

/// Free-text domain: letters, digits, spaces and `& / + - . , ' ( )`.
pub fn domain(value: &str) -> Result<String> {
    let trimmed = value.trim();
    let chars = trimmed.chars().count();
    if !(MIN_DOMAIN_CHARS..=MAX_DOMAIN_CHARS).contains(&chars) {
        return Err(CreativityError::validation(
            "domain",
            format!("must be between {MIN_DOMAIN_CHARS} and {MAX_DOMAIN_CHARS} characters long"),
        ));
    }
    if !domain_pattern().is_match(trimmed) {
        return Err(CreativityError::validation(
            "domain",
            "may only contain letters, digits, spaces and & / + - . , ' ( )",
        ));
    }
    Ok(trimmed.to_string())
}

pub fn thought_number(value: u32, field: &'static str) -> Result<u32> {
    if !(1..=MAX_THOUGHT_NUMBER).contains(&value) {
        return Err(CreativityError::validation(
            field,
            format!("must be between 1 and {MAX_THOUGHT_NUMBER}"),
        ));
    }
    Ok(value)
}

pub fn seed(value: u64) -> Result<u64> {
    if !(1..=MAX_SEED).contains(&value) {
        return Err(CreativityError::validation("seed", format!("must be between 1 and {MAX_SEED}")));
    }
    Ok(value)
}
