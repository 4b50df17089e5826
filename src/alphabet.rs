// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

/// Characters that regex considers part of a word (`\w`, ASCII only).
pub const WORD_CHARS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Characters outside of words. The line break is not listed here,
/// it is appended by [`Alphabet`].
pub const NON_WORD_CHARS: &str = " ,.-;:_!\"§$%&\\/()=?`´#'+*}][{";

pub const LINE_BREAK: char = '\n';

/// The characters used to resolve `.`.
///
/// The last character is always [`LINE_BREAK`], so "all but the last"
/// is the set for `.` without the `s` flag.
#[derive(Debug, PartialEq, Clone)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from word and non-word characters.
    ///
    /// Line breaks in the arguments are dropped and a single one is
    /// appended at the end.
    pub fn new(word_chars: &str, non_word_chars: &str) -> Self {
        let mut chars: Vec<char> = word_chars
            .chars()
            .chain(non_word_chars.chars())
            .filter(|c| *c != LINE_BREAK)
            .collect();
        chars.push(LINE_BREAK);
        Self { chars }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn without_line_break(&self) -> &[char] {
        &self.chars[..self.chars.len() - 1]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(WORD_CHARS, NON_WORD_CHARS)
    }
}
