// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time errors.
//!
//! Event handlers never fail; invalid input degrades to "no visible change".
//! Only configuration and direction parsing can be rejected.

use alloc::string::String;

/// Rejected [`CarouselConfig`](crate::config::CarouselConfig).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The commit threshold is negative, NaN, or infinite.
    #[error("commit threshold must be finite and non-negative, got {value}")]
    InvalidCommitThreshold {
        /// The rejected threshold in pixels.
        value: f64,
    },
}

/// Failure to parse a [`Direction`](crate::direction::Direction) from text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout direction `{input}`, expected `ltr` or `rtl`")]
pub struct ParseDirectionError {
    pub(crate) input: String,
}

impl ParseDirectionError {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_rejected_value() {
        let err = ConfigError::InvalidCommitThreshold { value: -1.0 };
        assert_eq!(
            err.to_string(),
            "commit threshold must be finite and non-negative, got -1"
        );

        let err = ParseDirectionError {
            input: "auto".to_string(),
        };
        assert_eq!(err.input(), "auto");
        assert_eq!(
            err.to_string(),
            "unknown layout direction `auto`, expected `ltr` or `rtl`"
        );
    }
}
