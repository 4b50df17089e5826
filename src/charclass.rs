// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::ast::CharRange;

/// Upper bound that replaces `char::MAX`, i.e. negated classes such as
/// `[^a]` produce printable ASCII rather than the whole of Unicode.
pub const CHAR_CEILING: char = '~'; // 126

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_END_INCLUDED: u32 = 0xDFFF;

/// Apply the ceiling to a range.
///
/// The upper bound `char::MAX` is lowered to [`CHAR_CEILING`],
/// and if the upper bound is then below the lower bound
/// the range shrinks to the single lower bound char.
pub fn clamp_range(range: &CharRange) -> CharRange {
    let end_included = if range.end_included == char::MAX {
        CHAR_CEILING
    } else {
        range.end_included
    };

    if end_included < range.start {
        CharRange::new(range.start, range.start)
    } else {
        CharRange::new(range.start, end_included)
    }
}

/// The number of chars within a range (the surrogate gap excluded).
/// The range is expected to be clamped already.
pub fn range_len(range: &CharRange) -> usize {
    let start = range.start as u32;
    let end = range.end_included as u32;
    if end < start {
        return 0;
    }

    let mut len = end - start + 1;
    if start < SURROGATE_START && end > SURROGATE_END_INCLUDED {
        len -= SURROGATE_END_INCLUDED - SURROGATE_START + 1;
    }
    len as usize
}

/// Expand ranges into the chars they cover, in order.
pub fn expand_ranges(ranges: &[CharRange]) -> Vec<char> {
    ranges
        .iter()
        .map(clamp_range)
        .flat_map(|range| range.start..=range.end_included)
        .collect()
}

/// The char at position `index` of [`expand_ranges`],
/// located without materializing the expansion.
pub fn nth_char(ranges: &[CharRange], index: usize) -> Option<char> {
    let mut remain = index;
    for range in ranges.iter().map(clamp_range) {
        let len = range_len(&range);
        if remain < len {
            return (range.start..=range.end_included).nth(remain);
        }
        remain -= len;
    }
    None
}

/// The total number of chars covered by the clamped ranges.
pub fn ranges_len(ranges: &[CharRange]) -> usize {
    ranges.iter().map(|r| range_len(&clamp_range(r))).sum()
}
