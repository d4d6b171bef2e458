//! Macro for implementing Display and FromStr for wire-string enums
//!
//! Job types and statuses travel as fixed strings ("Non Dev", "Done") between
//! the dashboard and the backend. This macro keeps the canonical spelling for
//! `Display` and parses case-insensitively, ignoring surrounding whitespace.
//!
//! # Example
//!
//! ```rust
//! use workload_domain::impl_wire_string_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Priority {
//!     Low,
//!     High,
//! }
//!
//! impl_wire_string_conversions!(Priority {
//!     Low => "Low",
//!     High => "High",
//! });
//!
//! assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
//! assert_eq!(Priority::Low.to_string(), "Low");
//! ```

/// Implements `Display`, `FromStr` and an `as_str` accessor for wire-string enums
///
/// Parsing failures return [`crate::WorkloadError::InvalidInput`] naming the
/// enum and the rejected value.
#[macro_export]
macro_rules! impl_wire_string_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical wire string for this variant
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::WorkloadError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let candidate = s.trim();
                $(
                    if candidate.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err($crate::WorkloadError::InvalidInput(format!(
                    "Invalid {}: {}",
                    stringify!($enum_name),
                    s
                )))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::WorkloadError;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestKind {
        Alpha,
        TwoWords,
    }

    impl_wire_string_conversions!(TestKind {
        Alpha => "Alpha",
        TwoWords => "Two Words",
    });

    #[test]
    fn test_display_uses_canonical_spelling() {
        assert_eq!(TestKind::Alpha.to_string(), "Alpha");
        assert_eq!(TestKind::TwoWords.to_string(), "Two Words");
        assert_eq!(TestKind::TwoWords.as_str(), "Two Words");
    }

    #[test]
    fn test_fromstr_ignores_case_and_padding() {
        assert_eq!(TestKind::from_str("alpha").unwrap(), TestKind::Alpha);
        assert_eq!(TestKind::from_str("  TWO WORDS ").unwrap(), TestKind::TwoWords);
    }

    #[test]
    fn test_fromstr_invalid() {
        let err = TestKind::from_str("TwoWords").unwrap_err();
        assert_eq!(err, WorkloadError::InvalidInput("Invalid TestKind: TwoWords".to_string()));
    }

    #[test]
    fn test_fromstr_empty() {
        assert!(TestKind::from_str("").is_err());
    }
}
