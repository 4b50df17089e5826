// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthexpError {
    /// The pattern is not a valid expression in the selected dialect.
    /// Carries the diagnostic of the front end.
    #[error("Failed to compile expression: {0}")]
    Compile(#[from] regex_syntax::Error),

    /**
     * The expression can not be satisfied with the current random draws
     * and capture values, e.g. `a^b`, or `(x)^y` with the capture fixed.
     *
     * this is an ordinary outcome, a fresh call may succeed since
     * repetition counts and alternatives are drawn again.
     * */
    #[error("The expression can not be satisfied.")]
    Unsatisfiable,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_str_eq;

    use super::SynthexpError;

    #[test]
    fn test_error_message() {
        assert_str_eq!(
            SynthexpError::Unsatisfiable.to_string(),
            "The expression can not be satisfied."
        );

        let front_end_error = regex_syntax::Parser::new().parse("a(").unwrap_err();
        let diagnostic = front_end_error.to_string();
        let error = SynthexpError::from(front_end_error);
        assert_str_eq!(
            error.to_string(),
            format!("Failed to compile expression: {}", diagnostic)
        );
    }
}
