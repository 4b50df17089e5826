// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

/// The simplified syntax tree that the synthesizer walks.
///
/// The tree is produced once by the compiler and is never mutated
/// afterwards, so one tree can serve any number of synthesis calls.
#[derive(Debug, PartialEq, Clone)]
pub enum SyntaxNode {
    /// Can never be satisfied, e.g. an empty character class `[^\s\S]`.
    NoMatch,

    /// Matches zero characters.
    EmptyMatch,

    Literal(Vec<char>),
    CharClass(Vec<CharRange>),

    /// `.` without the `s` flag.
    AnyCharNotLineBreak,

    /// `.` with the `s` flag.
    AnyChar,

    /**
     * `^` and `\A`.
     *
     * it is only satisfied when nothing has been emitted yet,
     * i.e. the "beginning of line" is treated as the "beginning of text"
     * even in multi-line mode.
     * */
    BeginLineOrText,

    /// `$` and `\z`, always satisfied.
    EndLineOrText,

    /**
     * `\b`, `\B` and the other word boundary assertions.
     *
     * the next character is unknown while generating, so these
     * assertions are always satisfied.
     * */
    WordBoundary {
        negated: bool,
    },

    Capture(Capture),

    Star(Box<SyntaxNode>),
    Plus(Box<SyntaxNode>),
    Quest(Box<SyntaxNode>),
    Repeat(Repeat),

    Concat(Vec<SyntaxNode>),
    Alternate(Vec<SyntaxNode>),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CharRange {
    pub start: char,
    pub end_included: char,
}

impl CharRange {
    pub fn new(start: char, end_included: char) -> Self {
        Self {
            start,
            end_included,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Capture {
    pub index: usize, // 1-based
    pub name: Option<String>,
    pub node: Box<SyntaxNode>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Repeat {
    pub node: Box<SyntaxNode>,
    pub min: u32,
    pub max: Option<u32>, // `None` for unbounded, e.g. `{3,}`
}

impl SyntaxNode {
    /// Visit every capture group in the tree, depth-first, left to right.
    pub fn for_each_capture<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a Capture),
    {
        match self {
            SyntaxNode::Capture(capture) => {
                f(capture);
                capture.node.for_each_capture(f);
            }
            SyntaxNode::Star(node) | SyntaxNode::Plus(node) | SyntaxNode::Quest(node) => {
                node.for_each_capture(f)
            }
            SyntaxNode::Repeat(repeat) => repeat.node.for_each_capture(f),
            SyntaxNode::Concat(nodes) | SyntaxNode::Alternate(nodes) => {
                for node in nodes {
                    node.for_each_capture(f);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Capture, SyntaxNode};

    fn capture(index: usize, name: Option<&str>, node: SyntaxNode) -> SyntaxNode {
        SyntaxNode::Capture(Capture {
            index,
            name: name.map(|s| s.to_owned()),
            node: Box::new(node),
        })
    }

    #[test]
    fn test_for_each_capture() {
        let tree = SyntaxNode::Concat(vec![
            capture(
                1,
                Some("outer"),
                SyntaxNode::Star(Box::new(capture(2, None, SyntaxNode::AnyChar))),
            ),
            SyntaxNode::Alternate(vec![
                SyntaxNode::Literal(vec!['a']),
                capture(3, Some("tail"), SyntaxNode::EmptyMatch),
            ]),
        ]);

        let mut seen = vec![];
        tree.for_each_capture(&mut |c| seen.push((c.index, c.name.clone())));

        assert_eq!(
            seen,
            vec![
                (1, Some("outer".to_owned())),
                (2, None),
                (3, Some("tail".to_owned()))
            ]
        );
    }
}
