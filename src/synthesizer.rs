// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use rand::{seq::SliceRandom, Rng};
use tracing::trace;

use crate::{
    ast::{Capture, CharRange, Repeat, SyntaxNode},
    charclass::{nth_char, ranges_len},
    synthexp::Options,
};

/// The default cap on the count of star, plus and unbounded repetitions.
pub const DEFAULT_REPEAT_LIMIT: u32 = 32;

/// How the count of a bounded repetition `{min,max}` is drawn.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub enum RepeatPolicy {
    /**
     * The count is drawn from `[min, max)`, i.e. `x{2,5}` produces
     * 2, 3 or 4 repetitions but never 5.
     * when `min == max` the count is exactly `min`.
     * */
    #[default]
    HalfOpen,

    /// The count is drawn from `[min, max]`.
    Inclusive,
}

/// One synthesis walk over a syntax tree.
///
/// All state of a walk lives here: the capture values, the random
/// source and (on the call stack) the previously emitted char.
/// A `None` previous char means nothing has been emitted yet.
pub struct Synthesizer<'a, R: Rng + ?Sized> {
    options: &'a Options,
    captures: &'a [Option<&'a [char]>],
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> Synthesizer<'a, R> {
    pub fn new(options: &'a Options, captures: &'a [Option<&'a [char]>], rng: &'a mut R) -> Self {
        Self {
            options,
            captures,
            rng,
        }
    }

    /// Returns `None` if the tree can not be satisfied by this walk.
    pub fn synthesize(&mut self, node: &SyntaxNode) -> Option<Vec<char>> {
        self.synth(None, node)
    }

    fn synth(&mut self, prev: Option<char>, node: &SyntaxNode) -> Option<Vec<char>> {
        match node {
            SyntaxNode::NoMatch => None,
            SyntaxNode::EmptyMatch => Some(vec![]),
            SyntaxNode::Literal(chars) => Some(chars.clone()),
            SyntaxNode::CharClass(ranges) => self.synth_char_class(ranges),
            SyntaxNode::AnyCharNotLineBreak => {
                let options = self.options;
                self.synth_any_of(options.alphabet.without_line_break())
            }
            SyntaxNode::AnyChar => {
                let options = self.options;
                self.synth_any_of(options.alphabet.chars())
            }
            SyntaxNode::BeginLineOrText => self.synth_begin(prev),
            SyntaxNode::EndLineOrText | SyntaxNode::WordBoundary { .. } => Some(vec![]),
            SyntaxNode::Capture(capture) => self.synth_capture(prev, capture),
            SyntaxNode::Star(node) => {
                let limit = self.repeat_limit();
                let count = self.rng.gen_range(0..limit);
                self.synth_times(prev, node, count)
            }
            SyntaxNode::Plus(node) => {
                let limit = self.repeat_limit();
                let count = self.rng.gen_range(1..limit);
                self.synth_times(prev, node, count)
            }
            SyntaxNode::Quest(node) => {
                if self.rng.gen_range(0..2) == 1 {
                    self.synth(prev, node)
                } else {
                    Some(vec![])
                }
            }
            SyntaxNode::Repeat(repeat) => self.synth_repeat(prev, repeat),
            SyntaxNode::Concat(nodes) => self.synth_concat(prev, nodes),
            SyntaxNode::Alternate(nodes) => self.synth_alternate(prev, nodes),
        }
    }

    // `Plus` needs at least two to draw from `[1, limit)`.
    fn repeat_limit(&self) -> u32 {
        self.options.repeat_limit.max(2)
    }

    fn synth_char_class(&mut self, ranges: &[CharRange]) -> Option<Vec<char>> {
        let total = ranges_len(ranges);
        if total == 0 {
            return None;
        }

        let index = self.rng.gen_range(0..total);
        nth_char(ranges, index).map(|c| vec![c])
    }

    fn synth_any_of(&mut self, chars: &[char]) -> Option<Vec<char>> {
        match chars.choose(&mut *self.rng) {
            Some(c) => Some(vec![*c]),
            None => {
                trace!("no char available for the wildcard");
                None
            }
        }
    }

    fn synth_begin(&mut self, prev: Option<char>) -> Option<Vec<char>> {
        match prev {
            None => Some(vec![]),
            Some(c) => {
                // there was a char before this assertion
                trace!(prev = ?c, "begin assertion after emitted chars");
                None
            }
        }
    }

    fn synth_capture(&mut self, prev: Option<char>, capture: &Capture) -> Option<Vec<char>> {
        let captures = self.captures;
        let fixed = capture
            .index
            .checked_sub(1)
            .and_then(|idx| captures.get(idx))
            .copied()
            .flatten();

        match fixed {
            // not checked against the sub-expression
            Some(value) => Some(value.to_vec()),
            None => self.synth(prev, &capture.node),
        }
    }

    fn synth_repeat(&mut self, prev: Option<char>, repeat: &Repeat) -> Option<Vec<char>> {
        let min = repeat.min;
        let max = repeat.max.unwrap_or(self.repeat_limit()).max(min);

        let count = match self.options.repeat_policy {
            RepeatPolicy::HalfOpen if max > min => self.rng.gen_range(min..max),
            RepeatPolicy::HalfOpen => min,
            RepeatPolicy::Inclusive => self.rng.gen_range(min..=max),
        };

        self.synth_times(prev, &repeat.node, count)
    }

    fn synth_times(
        &mut self,
        prev: Option<char>,
        node: &SyntaxNode,
        count: u32,
    ) -> Option<Vec<char>> {
        let mut output = vec![];
        let mut last = prev;

        for _ in 0..count {
            let chars = self.synth(last, node)?;
            if let Some(c) = chars.last() {
                last = Some(*c);
            }
            output.extend(chars);
        }

        Some(output)
    }

    fn synth_concat(&mut self, prev: Option<char>, nodes: &[SyntaxNode]) -> Option<Vec<char>> {
        let mut output = vec![];
        let mut last = prev;

        for node in nodes {
            let chars = self.synth(last, node)?;
            if let Some(c) = chars.last() {
                last = Some(*c);
            }
            output.extend(chars);
        }

        Some(output)
    }

    /**
     * try the alternatives one by one, starting from a random one and
     * wrapping around, until one of them succeeds.
     *
     * every alternative has the same chance to be tried first, but when
     * some fail, the one right after them gets picked more often.
     * */
    fn synth_alternate(&mut self, prev: Option<char>, nodes: &[SyntaxNode]) -> Option<Vec<char>> {
        if nodes.is_empty() {
            return None;
        }

        let start = self.rng.gen_range(0..nodes.len());
        for offset in 0..nodes.len() {
            let node = &nodes[(start + offset) % nodes.len()];
            if let Some(chars) = self.synth(prev, node) {
                return Some(chars);
            }
        }

        trace!(alternatives = nodes.len(), "no alternative can be satisfied");
        None
    }
}
