// Validation Module - form validation shared by every page flow
use std::fmt;

mod validators;

pub use validators::{EmailValidator, FieldValidator, RangeValidator, StringValidator};

/// Type alias for validation results
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation error with detailed field-level errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create a new, empty validation error
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Create with a single field error
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.add_field_error(field, message);
        err
    }

    /// Add a field-level error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get error count
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Get errors for a specific field
    pub fn field_errors(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Names of every field that failed, in the order they were checked
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }

    /// Merge another validation error into this one
    pub fn merge(&mut self, other: ValidationError) {
        self.errors.extend(other.errors);
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => write!(f, "Validation error with no specific field errors"),
            [only] => write!(f, "{}", only.message),
            errors => {
                write!(f, "Validation failed with {} errors: ", errors.len())?;
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}: {}", error.field, error.message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Individual field error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// Collects field errors for one form submission.
///
/// Every check records its failure and keeps going unless `stop_on_first`
/// was requested, so a form can report all missing fields at once.
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationError,
    stop_on_first: bool,
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop recording after the first failure
    pub fn stop_on_first_error(mut self) -> Self {
        self.stop_on_first = true;
        self
    }

    fn should_short_circuit(&self) -> bool {
        self.stop_on_first && !self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        if self.should_short_circuit() {
            return;
        }
        self.errors.add_field_error(field, message);
    }

    /// Validate a field with a specific validator
    pub fn validate_field<T, V>(&mut self, field: &str, value: &T, validator: &V) -> &mut Self
    where
        V: FieldValidator<T> + ?Sized,
    {
        if self.should_short_circuit() {
            return self;
        }

        if let Err(msg) = validator.validate(value) {
            self.add_error(field, msg);
        }
        self
    }

    /// Validate string is not blank
    pub fn require_text(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.add_error(field, format!("{field} is required"));
        }
        self
    }

    /// Validate an optional value is present
    pub fn require_some<T>(&mut self, field: &str, value: Option<&T>) -> &mut Self {
        if value.is_none() {
            self.add_error(field, format!("{field} is required"));
        }
        self
    }

    /// Validate an email address
    pub fn require_email(&mut self, field: &str, value: &str) -> &mut Self {
        self.validate_field(field, &value, &EmailValidator::new())
    }

    /// Validate a trimmed string does not exceed `max` characters
    pub fn max_chars(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        if value.trim().chars().count() > max {
            self.add_error(field, format!("{field} must not exceed {max} characters"));
        }
        self
    }

    /// Validate minimum value
    pub fn min<T>(&mut self, field: &str, value: T, min: T) -> &mut Self
    where
        T: PartialOrd + fmt::Display,
    {
        if value < min {
            self.add_error(field, format!("{field} must be at least {min}"));
        }
        self
    }

    /// Validate value is strictly greater than `floor`
    pub fn greater_than<T>(&mut self, field: &str, value: T, floor: T) -> &mut Self
    where
        T: PartialOrd + fmt::Display,
    {
        if value <= floor {
            self.add_error(field, format!("{field} must be greater than {floor}"));
        }
        self
    }

    /// Validate two values are equal (password confirmation and the like)
    pub fn matches<T: PartialEq + ?Sized>(
        &mut self,
        field: &str,
        value: &T,
        other: &T,
        message: &str,
    ) -> &mut Self {
        if value != other {
            self.add_error(field, message);
        }
        self
    }

    /// Check if validation has errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get errors without consuming validator
    pub fn errors(&self) -> &ValidationError {
        &self.errors
    }

    /// Finalize and return result
    pub fn finalize(self) -> ValidationResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
