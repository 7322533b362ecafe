//! Contact details that can be marked private
//!
//! Phone, email and address are entered as `value` or `value/p`. The
//! trailing `/p` marker makes the detail private; it only counts when it is
//! the very end of the input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder held by fields the wizard has not reached yet
pub const PLACEHOLDER: &str = "empty";

/// Marker that flags a detail as private when it ends the input
pub const PRIVATE_MARKER: &str = "/p";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetailParseError {
    #[error("a value is required before the '/p' marker")]
    MissingValue,
}

/// A single contact detail and its privacy flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    pub value: String,
    #[serde(default)]
    pub private: bool,
}

impl Detail {
    /// Creates a public detail
    pub fn public(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            private: false,
        }
    }

    /// Creates a private detail
    pub fn private(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            private: true,
        }
    }

    /// Returns true if this detail still holds the placeholder
    pub fn is_placeholder(&self) -> bool {
        self.value == PLACEHOLDER && !self.private
    }
}

impl Default for Detail {
    fn default() -> Self {
        Self::public(PLACEHOLDER)
    }
}

/// Splits raw input into a value and a privacy flag.
///
/// `"91234567/p"` is private `"91234567"`; `"a/path"` is public `"a/path"`.
/// Fails when nothing but whitespace is left for the value.
pub fn parse_detail(input: &str) -> Result<Detail, DetailParseError> {
    let detail = match input.strip_suffix(PRIVATE_MARKER) {
        Some(value) => Detail::private(value),
        None => Detail::public(input),
    };

    if detail.value.trim().is_empty() {
        return Err(DetailParseError::MissingValue);
    }

    Ok(detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn plain_value_is_public() {
        assert_eq!(parse_detail("alice@x.com"), Ok(Detail::public("alice@x.com")));
    }

    #[test]
    fn trailing_marker_is_private() {
        assert_eq!(parse_detail("91234567/p"), Ok(Detail::private("91234567")));
        assert_eq!(parse_detail("123 Main St/p"), Ok(Detail::private("123 Main St")));
    }

    #[test]
    fn marker_in_the_middle_is_not_private() {
        assert_eq!(parse_detail("a/pb"), Ok(Detail::public("a/pb")));
        assert_eq!(parse_detail("Unit 3/p Main"), Ok(Detail::public("Unit 3/p Main")));
    }

    #[test]
    fn only_the_last_marker_is_stripped() {
        assert_eq!(parse_detail("x/p/p"), Ok(Detail::private("x/p")));
    }

    #[test]
    fn slashes_are_kept_in_values() {
        assert_eq!(parse_detail("12/34 Road"), Ok(Detail::public("12/34 Road")));
    }

    #[test]
    fn empty_value_is_rejected() {
        assert_eq!(parse_detail(""), Err(DetailParseError::MissingValue));
        assert_eq!(parse_detail("/p"), Err(DetailParseError::MissingValue));
        assert_eq!(parse_detail("   /p"), Err(DetailParseError::MissingValue));
        assert_eq!(parse_detail("  "), Err(DetailParseError::MissingValue));
    }

    #[test]
    fn default_is_placeholder() {
        let detail = Detail::default();
        assert_eq!(detail.value, "empty");
        assert!(!detail.private);
        assert!(detail.is_placeholder());
    }

    proptest! {
        #[test]
        fn suffixed_values_are_private(value in "[a-zA-Z0-9@. ]*[a-zA-Z0-9@.]") {
            let parsed = parse_detail(&format!("{}/p", value)).unwrap();
            prop_assert_eq!(parsed.value, value);
            prop_assert!(parsed.private);
        }

        #[test]
        fn unsuffixed_values_are_public(value in "[a-zA-Z0-9@./ ]*[a-oq-zA-Z0-9@.]") {
            let parsed = parse_detail(&value).unwrap();
            prop_assert_eq!(parsed.value, value);
            prop_assert!(!parsed.private);
        }
    }
}
