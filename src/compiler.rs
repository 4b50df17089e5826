// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_syntax::{
    hir::{self, Dot, Hir, HirKind, Look},
    ParserBuilder,
};
use tracing::debug;

use crate::{
    ast::{Capture, CharRange, Repeat, SyntaxNode},
    error::SynthexpError,
};

/// The syntax flags of the expression, they have the same meaning as
/// the inline flags of Perl-compatible regular expressions, e.g. `(?i)`.
#[derive(Debug, PartialEq, Clone)]
pub struct Dialect {
    pub case_insensitive: bool, // i
    pub multi_line: bool, // m
    pub dot_matches_new_line: bool, // s
    pub crlf: bool, // R
    pub swap_greed: bool, // U
    pub ignore_whitespace: bool, // x
    pub unicode: bool, // u
    pub octal: bool,
    pub nest_limit: u32,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            crlf: false,
            swap_greed: false,
            ignore_whitespace: false,
            unicode: true,
            octal: false,
            nest_limit: 250,
        }
    }
}

impl Dialect {
    fn parser(&self) -> regex_syntax::Parser {
        ParserBuilder::new()
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .crlf(self.crlf)
            .swap_greed(self.swap_greed)
            .ignore_whitespace(self.ignore_whitespace)
            .unicode(self.unicode)
            .octal(self.octal)
            .nest_limit(self.nest_limit)
            .build()
    }
}

pub fn compile(pattern: &str, dialect: &Dialect) -> Result<SyntaxNode, SynthexpError> {
    let hir = dialect.parser().parse(pattern)?;
    let node = lower(&hir);

    debug!(pattern, syntax = %node, "expression compiled");
    Ok(node)
}

fn lower(hir: &Hir) -> SyntaxNode {
    match hir.kind() {
        HirKind::Empty => SyntaxNode::EmptyMatch,
        HirKind::Literal(hir::Literal(bytes)) => SyntaxNode::Literal(decode_literal(bytes)),
        HirKind::Class(class) => lower_class(hir, class),
        HirKind::Look(look) => lower_look(*look),
        HirKind::Repetition(repetition) => lower_repetition(repetition),
        HirKind::Capture(capture) => SyntaxNode::Capture(Capture {
            index: capture.index as usize,
            name: capture.name.as_ref().map(|name| name.to_string()),
            node: Box::new(lower(&capture.sub)),
        }),
        HirKind::Concat(subs) => SyntaxNode::Concat(subs.iter().map(lower).collect()),
        HirKind::Alternation(subs) => SyntaxNode::Alternate(subs.iter().map(lower).collect()),
    }
}

// the literals are always valid UTF-8 since the parser runs in UTF-8 mode,
// the bytes are taken as Latin-1 otherwise.
fn decode_literal(bytes: &[u8]) -> Vec<char> {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.chars().collect(),
        Err(_) => bytes.iter().map(|b| char::from(*b)).collect(),
    }
}

fn lower_class(hir: &Hir, class: &hir::Class) -> SyntaxNode {
    // the front end has no "any char" node, `.` is translated into a class.
    if is_dot(hir, &[Dot::AnyChar, Dot::AnyByte]) {
        return SyntaxNode::AnyChar;
    }

    if is_dot(
        hir,
        &[
            Dot::AnyCharExceptLF,
            Dot::AnyCharExceptCRLF,
            Dot::AnyByteExceptLF,
            Dot::AnyByteExceptCRLF,
        ],
    ) {
        return SyntaxNode::AnyCharNotLineBreak;
    }

    let ranges: Vec<CharRange> = match class {
        hir::Class::Unicode(unicode) => unicode
            .ranges()
            .iter()
            .map(|r| CharRange::new(r.start(), r.end()))
            .collect(),
        hir::Class::Bytes(bytes) => bytes
            .ranges()
            .iter()
            .map(|r| CharRange::new(char::from(r.start()), char::from(r.end())))
            .collect(),
    };

    if ranges.is_empty() {
        SyntaxNode::NoMatch
    } else {
        SyntaxNode::CharClass(ranges)
    }
}

fn is_dot(hir: &Hir, dots: &[Dot]) -> bool {
    dots.iter().any(|dot| Hir::dot(*dot).kind() == hir.kind())
}

fn lower_look(look: Look) -> SyntaxNode {
    match look {
        Look::Start | Look::StartLF | Look::StartCRLF => SyntaxNode::BeginLineOrText,
        Look::End | Look::EndLF | Look::EndCRLF => SyntaxNode::EndLineOrText,
        Look::WordAsciiNegate | Look::WordUnicodeNegate => {
            SyntaxNode::WordBoundary { negated: true }
        }
        _ => SyntaxNode::WordBoundary { negated: false },
    }
}

fn lower_repetition(repetition: &hir::Repetition) -> SyntaxNode {
    let node = Box::new(lower(&repetition.sub));

    match (repetition.min, repetition.max) {
        (0, None) => SyntaxNode::Star(node),
        (1, None) => SyntaxNode::Plus(node),
        (0, Some(1)) => SyntaxNode::Quest(node),
        (min, max) => SyntaxNode::Repeat(Repeat { node, min, max }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_str_eq;

    use crate::error::SynthexpError;

    use super::{compile, Dialect};

    fn compile_to_text(pattern: &str) -> String {
        compile(pattern, &Dialect::default()).unwrap().to_string()
    }

    fn compile_with_dialect_to_text(pattern: &str, dialect: Dialect) -> String {
        compile(pattern, &dialect).unwrap().to_string()
    }

    #[test]
    fn test_compile_literal() {
        assert_str_eq!(compile_to_text("abc"), r#""abc""#);
        assert_str_eq!(compile_to_text("文字"), r#""文字""#);
        assert_str_eq!(compile_to_text(r"a\.b"), r#""a.b""#);
        assert_str_eq!(compile_to_text(""), "empty");
    }

    #[test]
    fn test_compile_char_class() {
        assert_str_eq!(compile_to_text("[a-c_]"), "['_', 'a'..'c']");
        assert_str_eq!(compile_to_text("(?i)a"), "['A', 'a']");

        // ASCII only `\w`
        assert_str_eq!(
            compile_to_text(r"(?-u:\w)"),
            "['0'..'9', 'A'..'Z', '_', 'a'..'z']"
        );

        // negated
        assert_str_eq!(compile_to_text("[^a]"), r"['\0'..'`', 'b'..'\u{10ffff}']");

        // empty class
        assert_str_eq!(compile_to_text(r"[^\s\S]"), "no_match");
    }

    #[test]
    fn test_compile_dot() {
        assert_str_eq!(compile_to_text("."), "char_any_not_nl");
        assert_str_eq!(compile_to_text("(?s)."), "char_any");
        assert_str_eq!(compile_to_text("(?R)."), "char_any_not_nl");
        assert_str_eq!(
            compile_with_dialect_to_text(
                ".",
                Dialect {
                    dot_matches_new_line: true,
                    ..Dialect::default()
                }
            ),
            "char_any"
        );
    }

    #[test]
    fn test_compile_assertions() {
        assert_str_eq!(compile_to_text("^ab$"), r#"concat(begin, "ab", end)"#);
        assert_str_eq!(compile_to_text(r"\Aab\z"), r#"concat(begin, "ab", end)"#);
        assert_str_eq!(compile_to_text("(?m)^a$"), r#"concat(begin, "a", end)"#);
        assert_str_eq!(
            compile_to_text(r"\ba\B"),
            r#"concat(is_bound, "a", is_not_bound)"#
        );
    }

    #[test]
    fn test_compile_repetition() {
        assert_str_eq!(compile_to_text("a*"), r#"star("a")"#);
        assert_str_eq!(compile_to_text("a+"), r#"plus("a")"#);
        assert_str_eq!(compile_to_text("a?"), r#"quest("a")"#);
        assert_str_eq!(compile_to_text("a{2,5}"), r#"repeat("a", 2, 5)"#);
        assert_str_eq!(compile_to_text("a{3}"), r#"repeat("a", 3, 3)"#);
        assert_str_eq!(compile_to_text("a{3,}"), r#"repeat("a", 3, ..)"#);

        // lazy quantifiers are the same as greedy ones
        assert_str_eq!(compile_to_text("a+?"), r#"plus("a")"#);
        assert_str_eq!(compile_to_text("a{0}"), "empty");
    }

    #[test]
    fn test_compile_group() {
        assert_str_eq!(
            compile_to_text("(a)(?P<name>b)(?:c)"),
            r#"concat(capture(1, "a"), capture(2, "name", "b"), "c")"#
        );
        assert_str_eq!(
            compile_to_text("(x(y))+"),
            r#"plus(capture(1, concat("x", capture(2, "y"))))"#
        );
    }

    #[test]
    fn test_compile_alternation() {
        assert_str_eq!(compile_to_text("cat|dog"), r#"alternate("cat", "dog")"#);
        assert_str_eq!(
            compile_to_text("^(cat|dog)s?"),
            r#"concat(begin, capture(1, alternate("cat", "dog")), quest("s"))"#
        );
    }

    #[test]
    fn test_compile_error() {
        assert!(matches!(
            compile("a(", &Dialect::default()),
            Err(SynthexpError::Compile(_))
        ));
        assert!(matches!(
            compile("a{2,1}", &Dialect::default()),
            Err(SynthexpError::Compile(_))
        ));

        // `\w` with unicode disabled is fine, whereas `.` would match invalid UTF-8
        let ascii = Dialect {
            unicode: false,
            ..Dialect::default()
        };
        assert!(compile(r"\w", &ascii).is_ok());
        assert!(matches!(
            compile(".", &ascii),
            Err(SynthexpError::Compile(_))
        ));
    }

    #[test]
    fn test_compile_is_pure() {
        let first = compile("^(a|b)+[0-9]{2,4}$", &Dialect::default()).unwrap();
        let second = compile("^(a|b)+[0-9]{2,4}$", &Dialect::default()).unwrap();
        assert_eq!(first, second);
    }
}
