// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::ast::{Capture, CharRange, Repeat, SyntaxNode};

impl Display for CharRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start == self.end_included {
            write!(f, "{:?}", self.start)
        } else {
            write!(f, "{:?}..{:?}", self.start, self.end_included)
        }
    }
}

impl Display for Capture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "capture({}, {:?}, {})", self.index, name, self.node),
            None => write!(f, "capture({}, {})", self.index, self.node),
        }
    }
}

impl Display for Repeat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max {
            Some(max) => write!(f, "repeat({}, {}, {})", self.node, self.min, max),
            None => write!(f, "repeat({}, {}, ..)", self.node, self.min),
        }
    }
}

fn join<T: Display>(items: &[T]) -> String {
    let s: Vec<String> = items.iter().map(|e| e.to_string()).collect();
    s.join(", ")
}

impl Display for SyntaxNode {
    // for debug and logging
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyntaxNode::NoMatch => f.write_str("no_match"),
            SyntaxNode::EmptyMatch => f.write_str("empty"),
            SyntaxNode::Literal(chars) => {
                let s: String = chars.iter().collect();
                write!(f, "{:?}", s)
            }
            SyntaxNode::CharClass(ranges) => write!(f, "[{}]", join(ranges)),
            SyntaxNode::AnyCharNotLineBreak => f.write_str("char_any_not_nl"),
            SyntaxNode::AnyChar => f.write_str("char_any"),
            SyntaxNode::BeginLineOrText => f.write_str("begin"),
            SyntaxNode::EndLineOrText => f.write_str("end"),
            SyntaxNode::WordBoundary { negated } => {
                if *negated {
                    f.write_str("is_not_bound")
                } else {
                    f.write_str("is_bound")
                }
            }
            SyntaxNode::Capture(capture) => write!(f, "{}", capture),
            SyntaxNode::Star(node) => write!(f, "star({})", node),
            SyntaxNode::Plus(node) => write!(f, "plus({})", node),
            SyntaxNode::Quest(node) => write!(f, "quest({})", node),
            SyntaxNode::Repeat(repeat) => write!(f, "{}", repeat),
            SyntaxNode::Concat(nodes) => write!(f, "concat({})", join(nodes)),
            SyntaxNode::Alternate(nodes) => write!(f, "alternate({})", join(nodes)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_str_eq;

    use crate::ast::{Capture, CharRange, Repeat, SyntaxNode};

    #[test]
    fn test_print_leaves() {
        assert_str_eq!(SyntaxNode::NoMatch.to_string(), "no_match");
        assert_str_eq!(SyntaxNode::EmptyMatch.to_string(), "empty");
        assert_str_eq!(
            SyntaxNode::Literal("a\"b".chars().collect()).to_string(),
            r#""a\"b""#
        );
        assert_str_eq!(
            SyntaxNode::CharClass(vec![CharRange::new('a', 'z'), CharRange::new('_', '_')])
                .to_string(),
            "['a'..'z', '_']"
        );
        assert_str_eq!(
            SyntaxNode::WordBoundary { negated: true }.to_string(),
            "is_not_bound"
        );
    }

    #[test]
    fn test_print_composites() {
        let tree = SyntaxNode::Concat(vec![
            SyntaxNode::BeginLineOrText,
            SyntaxNode::Capture(Capture {
                index: 1,
                name: Some("year".to_owned()),
                node: Box::new(SyntaxNode::Repeat(Repeat {
                    node: Box::new(SyntaxNode::CharClass(vec![CharRange::new('0', '9')])),
                    min: 4,
                    max: Some(4),
                })),
            }),
            SyntaxNode::Alternate(vec![
                SyntaxNode::Star(Box::new(SyntaxNode::AnyChar)),
                SyntaxNode::Quest(Box::new(SyntaxNode::Literal(vec!['x']))),
            ]),
            SyntaxNode::Repeat(Repeat {
                node: Box::new(SyntaxNode::AnyCharNotLineBreak),
                min: 2,
                max: None,
            }),
            SyntaxNode::EndLineOrText,
        ]);

        assert_str_eq!(
            tree.to_string(),
            "concat(begin, capture(1, \"year\", repeat(['0'..'9'], 4, 4)), \
alternate(star(char_any), quest(\"x\")), repeat(char_any_not_nl, 2, ..), end)"
        );
    }
}
