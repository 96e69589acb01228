// Field Validators - Reusable validation components
use std::fmt::Display;

use once_cell::sync::Lazy;

/// Trait for field validators
pub trait FieldValidator<T: ?Sized> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// Range validator for numeric types
#[derive(Debug, Clone)]
pub struct RangeValidator<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T> Default for RangeValidator<T> {
    fn default() -> Self {
        Self { min: None, max: None }
    }
}

impl<T> RangeValidator<T>
where
    T: PartialOrd + Display + Clone,
{
    /// Create a new range validator with min and max values
    pub fn new(min: T, max: T) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    /// Set minimum value
    pub fn min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    /// Set maximum value
    pub fn max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }
}

impl<T> FieldValidator<T> for RangeValidator<T>
where
    T: PartialOrd + Display + Clone,
{
    fn validate(&self, value: &T) -> Result<(), String> {
        if let Some(ref min) = self.min {
            if value < min {
                return Err(format!("Value must be at least {}", min));
            }
        }

        if let Some(ref max) = self.max {
            if value > max {
                return Err(format!("Value must not exceed {}", max));
            }
        }

        Ok(())
    }
}

/// String validator with length constraints
#[derive(Debug, Clone)]
pub struct StringValidator {
    min_length: Option<usize>,
    max_length: Option<usize>,
    not_empty: bool,
    trim: bool,
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl StringValidator {
    /// Create a new string validator
    pub fn new() -> Self {
        Self { min_length: None, max_length: None, not_empty: false, trim: true }
    }

    /// Require non-empty string
    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    /// Set minimum length
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Set maximum length
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set whether to trim before validation
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl FieldValidator<str> for StringValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let val = if self.trim { value.trim() } else { value };
        let len = val.chars().count();

        if self.not_empty && val.is_empty() {
            return Err("Value cannot be empty".to_string());
        }

        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!("Length must be at least {} characters", min));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!("Length must not exceed {} characters", max));
            }
        }

        Ok(())
    }
}

impl FieldValidator<&str> for StringValidator {
    fn validate(&self, value: &&str) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value)
    }
}

impl FieldValidator<String> for StringValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}

static EMAIL_REGEX: Lazy<Option<regex::Regex>> =
    Lazy::new(|| regex::Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok());

/// Email validator
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl EmailValidator {
    /// Create a new email validator
    pub fn new() -> Self {
        Self
    }
}

impl FieldValidator<str> for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        match EMAIL_REGEX.as_ref() {
            Some(re) if re.is_match(value.trim()) => Ok(()),
            _ => Err("Invalid email format".to_string()),
        }
    }
}

impl FieldValidator<&str> for EmailValidator {
    fn validate(&self, value: &&str) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value)
    }
}

impl FieldValidator<String> for EmailValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validator_bounds() {
        let v = RangeValidator::new(1, 10);
        assert!(v.validate(&1).is_ok());
        assert!(v.validate(&10).is_ok());
        assert_eq!(v.validate(&0).unwrap_err(), "Value must be at least 1");
        assert_eq!(v.validate(&11).unwrap_err(), "Value must not exceed 10");
    }

    #[test]
    fn test_string_validator_trims_by_default() {
        let v = StringValidator::new().not_empty();
        assert!(FieldValidator::<str>::validate(&v, "   ").is_err());
        assert!(FieldValidator::<str>::validate(&v, " a ").is_ok());
    }

    #[test]
    fn test_string_validator_counts_chars_not_bytes() {
        let v = StringValidator::new().max_length(3);
        assert!(FieldValidator::<str>::validate(&v, "héé").is_ok());
        assert!(FieldValidator::<str>::validate(&v, "hééé").is_err());
    }

    #[test]
    fn test_email_validator() {
        let v = EmailValidator::new();
        assert!(FieldValidator::<str>::validate(&v, "user@example.com").is_ok());
        assert!(FieldValidator::<str>::validate(&v, "user@example").is_err());
        assert!(FieldValidator::<str>::validate(&v, "").is_err());
    }
}
