//! Macro for implementing Display and FromStr for status enums
//!
//! Status values travel as strings (`"Pending"`, `"admin"`), so every status
//! enum gets the same case-insensitive parsing and a canonical display form.
//!
//! # Example
//!
//! ```rust
//! use marketfeed_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum DeliveryStatus {
//!     Pending,
//!     Delivered,
//! }
//!
//! impl_domain_status_conversions!(DeliveryStatus {
//!     Pending => "Pending",
//!     Delivered => "Delivered",
//! });
//!
//! assert_eq!("pending".parse::<DeliveryStatus>(), Ok(DeliveryStatus::Pending));
//! assert_eq!(DeliveryStatus::Delivered.to_string(), "Delivered");
//! ```

/// Implements Display and FromStr traits for status enums
///
/// This macro generates:
/// - Display trait: writes the canonical string for each variant
/// - FromStr trait: parses case-insensitively against the canonical strings
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStatus {
        Pending,
        Shipped,
    }

    impl_domain_status_conversions!(TestStatus {
        Pending => "Pending",
        Shipped => "Shipped",
    });

    #[test]
    fn test_display_uses_canonical_form() {
        assert_eq!(TestStatus::Pending.to_string(), "Pending");
        assert_eq!(TestStatus::Shipped.to_string(), "Shipped");
    }

    #[test]
    fn test_fromstr_ignores_case() {
        assert_eq!(TestStatus::from_str("pending").unwrap(), TestStatus::Pending);
        assert_eq!(TestStatus::from_str("SHIPPED").unwrap(), TestStatus::Shipped);
        assert_eq!(TestStatus::from_str("ShIpPeD").unwrap(), TestStatus::Shipped);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestStatus::from_str("lost");
        assert!(result.unwrap_err().contains("Invalid TestStatus: lost"));
        assert!(TestStatus::from_str("").is_err());
    }
}
