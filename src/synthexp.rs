// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use rand::Rng;
use tracing::debug;

use crate::{
    alphabet::Alphabet,
    ast::SyntaxNode,
    compiler::{compile, Dialect},
    error::SynthexpError,
    synthesizer::{RepeatPolicy, Synthesizer, DEFAULT_REPEAT_LIMIT},
};

/// Everything that is fixed when a [`Synthexp`] is built.
#[derive(Debug, PartialEq, Clone)]
pub struct Options {
    pub dialect: Dialect,

    /// The chars for `.`.
    pub alphabet: Alphabet,

    /// The cap on the count of `*`, `+` and unbounded `{n,}`
    /// repetitions. Values below 2 are taken as 2.
    pub repeat_limit: u32,

    pub repeat_policy: RepeatPolicy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            alphabet: Alphabet::default(),
            repeat_limit: DEFAULT_REPEAT_LIMIT,
            repeat_policy: RepeatPolicy::default(),
        }
    }
}

/// A compiled expression that synthesizes strings matched by it.
///
/// Compile once and synthesize as many times as needed, a `Synthexp`
/// holds no per-call state and can be shared between threads.
///
/// ```
/// use synthexp::Synthexp;
///
/// let se = Synthexp::new(r"^#[0-9a-f]{6}$").unwrap();
/// let color = se.synth_string(&[]).unwrap();
/// assert!(color.starts_with('#'));
/// ```
///
/// # Capture values
///
/// The synthesis methods take a list of fixed values for the capture groups,
/// the value at position `i` is emitted in place of the group `i + 1`.
/// `None`, or a position beyond the end of the list, lets the group be
/// generated. The fixed values are NOT checked against the groups, a value
/// the group can not match produces a string the expression rejects.
#[derive(Debug, Clone)]
pub struct Synthexp {
    pattern: String,
    syntax: SyntaxNode,
    options: Options,
    capture_names: Vec<(usize, Option<String>)>,
}

impl Synthexp {
    pub fn new(pattern: &str) -> Result<Self, SynthexpError> {
        Self::with_options(pattern, Options::default())
    }

    pub fn with_options(pattern: &str, options: Options) -> Result<Self, SynthexpError> {
        let syntax = compile(pattern, &options.dialect)?;

        let mut capture_names = vec![];
        syntax.for_each_capture(&mut |capture| {
            capture_names.push((capture.index, capture.name.clone()));
        });

        debug!(pattern, captures = capture_names.len(), "synthexp created");

        Ok(Self {
            pattern: pattern.to_owned(),
            syntax,
            options,
            capture_names,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The length a capture value list needs to cover every group.
    pub fn captures_len(&self) -> usize {
        self.capture_names
            .iter()
            .map(|(index, _)| *index)
            .max()
            .unwrap_or(0)
    }

    /// The 1-based index of a named group, e.g. `(?P<year>\d{4})`.
    pub fn capture_index(&self, name: &str) -> Option<usize> {
        self.capture_names
            .iter()
            .find(|(_, n)| n.as_deref() == Some(name))
            .map(|(index, _)| *index)
    }

    /// Synthesize the chars of a string matched by the expression.
    ///
    /// See the type level documentation for the capture values.
    pub fn synth(&self, captures: &[Option<&[char]>]) -> Result<Vec<char>, SynthexpError> {
        self.synth_with_rng(&mut rand::thread_rng(), captures)
    }

    /// As [`Synthexp::synth`], drawing from the given random source.
    pub fn synth_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        captures: &[Option<&[char]>],
    ) -> Result<Vec<char>, SynthexpError> {
        let mut synthesizer = Synthesizer::new(&self.options, captures, rng);
        match synthesizer.synthesize(&self.syntax) {
            Some(chars) => Ok(chars),
            None => {
                debug!(pattern = %self.pattern, "expression not satisfied");
                Err(SynthexpError::Unsatisfiable)
            }
        }
    }

    pub fn synth_string(&self, captures: &[Option<&str>]) -> Result<String, SynthexpError> {
        self.synth_string_with_rng(&mut rand::thread_rng(), captures)
    }

    pub fn synth_string_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        captures: &[Option<&str>],
    ) -> Result<String, SynthexpError> {
        let values: Vec<Option<Vec<char>>> = captures
            .iter()
            .map(|value| value.map(|s| s.chars().collect()))
            .collect();
        let chars = self.synth_with_values(rng, &values)?;
        Ok(chars.into_iter().collect())
    }

    /// The capture values are decoded as UTF-8 (invalid sequences are
    /// replaced by `U+FFFD`), and the result is UTF-8 encoded.
    pub fn synth_bytes(&self, captures: &[Option<&[u8]>]) -> Result<Vec<u8>, SynthexpError> {
        self.synth_bytes_with_rng(&mut rand::thread_rng(), captures)
    }

    pub fn synth_bytes_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        captures: &[Option<&[u8]>],
    ) -> Result<Vec<u8>, SynthexpError> {
        let values: Vec<Option<Vec<char>>> = captures
            .iter()
            .map(|value| value.map(|b| String::from_utf8_lossy(b).chars().collect()))
            .collect();
        let chars = self.synth_with_values(rng, &values)?;
        Ok(chars.into_iter().collect::<String>().into_bytes())
    }

    fn synth_with_values<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        values: &[Option<Vec<char>>],
    ) -> Result<Vec<char>, SynthexpError> {
        let captures: Vec<Option<&[char]>> = values.iter().map(|v| v.as_deref()).collect();
        self.synth_with_rng(rng, &captures)
    }
}

/// Build a [`Synthexp`] with custom flags, alphabet and repetition settings.
///
/// ```
/// use synthexp::{Alphabet, SynthexpBuilder};
///
/// let se = SynthexpBuilder::new("a.c")
///     .case_insensitive(true)
///     .alphabet(Alphabet::new("xyz", ""))
///     .build()
///     .unwrap();
/// let s = se.synth_string(&[]).unwrap();
/// assert_eq!(s.chars().count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SynthexpBuilder {
    pattern: String,
    options: Options,
}

impl SynthexpBuilder {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_owned(),
            options: Options::default(),
        }
    }

    pub fn build(&self) -> Result<Synthexp, SynthexpError> {
        Synthexp::with_options(&self.pattern, self.options.clone())
    }

    pub fn dialect(&mut self, dialect: Dialect) -> &mut Self {
        self.options.dialect = dialect;
        self
    }

    pub fn case_insensitive(&mut self, yes: bool) -> &mut Self {
        self.options.dialect.case_insensitive = yes;
        self
    }

    pub fn multi_line(&mut self, yes: bool) -> &mut Self {
        self.options.dialect.multi_line = yes;
        self
    }

    pub fn dot_matches_new_line(&mut self, yes: bool) -> &mut Self {
        self.options.dialect.dot_matches_new_line = yes;
        self
    }

    pub fn crlf(&mut self, yes: bool) -> &mut Self {
        self.options.dialect.crlf = yes;
        self
    }

    pub fn swap_greed(&mut self, yes: bool) -> &mut Self {
        self.options.dialect.swap_greed = yes;
        self
    }

    pub fn ignore_whitespace(&mut self, yes: bool) -> &mut Self {
        self.options.dialect.ignore_whitespace = yes;
        self
    }

    pub fn unicode(&mut self, yes: bool) -> &mut Self {
        self.options.dialect.unicode = yes;
        self
    }

    pub fn octal(&mut self, yes: bool) -> &mut Self {
        self.options.dialect.octal = yes;
        self
    }

    pub fn nest_limit(&mut self, limit: u32) -> &mut Self {
        self.options.dialect.nest_limit = limit;
        self
    }

    pub fn alphabet(&mut self, alphabet: Alphabet) -> &mut Self {
        self.options.alphabet = alphabet;
        self
    }

    pub fn repeat_limit(&mut self, limit: u32) -> &mut Self {
        self.options.repeat_limit = limit;
        self
    }

    pub fn repeat_policy(&mut self, policy: RepeatPolicy) -> &mut Self {
        self.options.repeat_policy = policy;
        self
    }
}
