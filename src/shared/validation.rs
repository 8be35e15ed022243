use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

lazy_static! {
    /// Regex for validating summary category keys
    /// Must be lowercase alphanumeric with hyphens or underscores
    /// - Valid: "zakat", "winter-aid", "school_fees"
    /// - Invalid: "-aid", "aid-", "Aid", "aid fund"
    pub static ref CATEGORY_KEY_REGEX: Regex =
        Regex::new(r"^[a-z0-9]+(?:[-_][a-z0-9]+)*$").unwrap();

    /// Regex for ISO-4217 currency codes, lowercase
    pub static ref CURRENCY_REGEX: Regex = Regex::new(r"^[a-z]{3}$").unwrap();
}

/// Enumerated classifier values accepted by the education reports
pub const EDUCATION_LEVELS: &[&str] = &["elementary", "intermediate", "secondary", "higher"];

/// Enumerated classifier values accepted by the training reports
pub const SKILL_LEVELS: &[&str] = &["beginner", "intermediate", "advanced"];
pub const GENDERS: &[&str] = &["male", "female", "mixed"];

fn one_of(value: &str, allowed: &[&str], code: &'static str) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new(code))
    }
}

pub fn validate_education_level(value: &str) -> Result<(), ValidationError> {
    one_of(value, EDUCATION_LEVELS, "invalid_education_level")
}

pub fn validate_skill_level(value: &str) -> Result<(), ValidationError> {
    one_of(value, SKILL_LEVELS, "invalid_skill_level")
}

pub fn validate_gender(value: &str) -> Result<(), ValidationError> {
    one_of(value, GENDERS, "invalid_gender")
}

/// Money amounts must be strictly positive
pub fn validate_positive_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value > &Decimal::ZERO {
        Ok(())
    } else {
        Err(ValidationError::new("amount_not_positive"))
    }
}

pub fn validate_category_key(value: &str) -> Result<(), ValidationError> {
    if CATEGORY_KEY_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_category_key"))
    }
}

pub fn validate_currency_code(value: &str) -> Result<(), ValidationError> {
    if CURRENCY_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_currency_code"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_key_regex_valid() {
        assert!(CATEGORY_KEY_REGEX.is_match("zakat"));
        assert!(CATEGORY_KEY_REGEX.is_match("winter-aid"));
        assert!(CATEGORY_KEY_REGEX.is_match("school_fees"));
        assert!(CATEGORY_KEY_REGEX.is_match("aid2024"));
    }

    #[test]
    fn test_category_key_regex_invalid() {
        assert!(!CATEGORY_KEY_REGEX.is_match("-aid")); // starts with separator
        assert!(!CATEGORY_KEY_REGEX.is_match("aid-")); // ends with separator
        assert!(!CATEGORY_KEY_REGEX.is_match("Aid")); // uppercase
        assert!(!CATEGORY_KEY_REGEX.is_match("aid fund")); // space
        assert!(!CATEGORY_KEY_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_currency_regex() {
        assert!(CURRENCY_REGEX.is_match("usd"));
        assert!(CURRENCY_REGEX.is_match("eur"));
        assert!(!CURRENCY_REGEX.is_match("USD"));
        assert!(!CURRENCY_REGEX.is_match("us"));
        assert!(!CURRENCY_REGEX.is_match("usdt"));
    }

    #[test]
    fn test_classifier_validators() {
        assert!(validate_education_level("secondary").is_ok());
        assert!(validate_education_level("kindergarten").is_err());
        assert!(validate_skill_level("beginner").is_ok());
        assert!(validate_skill_level("expert").is_err());
        assert!(validate_gender("mixed").is_ok());
        assert!(validate_gender("other").is_err());
    }

    #[test]
    fn test_positive_amount() {
        assert!(validate_positive_amount(&Decimal::new(100, 2)).is_ok());
        assert!(validate_positive_amount(&Decimal::ZERO).is_err());
        assert!(validate_positive_amount(&Decimal::new(-5, 0)).is_err());
    }
}
