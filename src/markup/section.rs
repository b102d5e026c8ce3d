/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Section location inside a line buffer
//!
//! A section is the pair of line indices holding a begin marker and the
//! first end marker after it. The locator is bound-scoped: callers pass the
//! enclosing range explicitly, and nesting depth is never balanced. A file
//! with mismatched nesting yields the first lexically matching end marker.

use std::ops::Range;

/// Line indices of an opening tag and its closing tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Section {
    /// Index of the line holding the begin marker
    pub begin: usize,
    /// Index of the line holding the end marker, always greater than `begin`
    pub end: usize,
}

impl Section {
    /// Indices of the lines strictly between the two tags
    pub fn interior(&self) -> Range<usize> {
        self.begin + 1..self.end
    }

    /// Number of lines strictly between the two tags
    pub fn interior_len(&self) -> usize {
        self.end - self.begin - 1
    }

    /// Indices from the begin line up to, not including, the end line
    pub fn span(&self) -> Range<usize> {
        self.begin..self.end
    }
}

/// True when `line`, ignoring leading whitespace, starts with `marker`
fn opens_with(line: &str, marker: &str) -> bool {
    line.trim_start().starts_with(marker)
}

/// Find the first `begin_marker`/`end_marker` pair inside `range`
///
/// The begin marker is searched in `range`; the end marker is searched from
/// the line after the begin line up to `range.end` (exclusive). A begin
/// marker without a terminating end marker is reported as not found.
pub fn find_section<S: AsRef<str>>(
    lines: &[S],
    begin_marker: &str,
    end_marker: &str,
    range: Range<usize>,
) -> Option<Section> {
    let bound = range.end.min(lines.len());
    if range.start >= bound {
        return None;
    }

    let begin = (range.start..bound).find(|&i| opens_with(lines[i].as_ref(), begin_marker))?;
    let end = (begin + 1..bound).find(|&i| opens_with(lines[i].as_ref(), end_marker))?;

    Some(Section { begin, end })
}

/// Enumerate sibling sections left to right
///
/// Each step restarts the search on the line after the previous end marker
/// and the enumeration stops at the first not-found result.
pub fn sections<'a, S: AsRef<str>>(
    lines: &'a [S],
    begin_marker: &'a str,
    end_marker: &'a str,
    range: Range<usize>,
) -> Sections<'a, S> {
    Sections {
        lines,
        begin_marker,
        end_marker,
        next: range.start,
        bound: range.end,
    }
}

/// Iterator returned by [`sections`]
#[derive(Debug, Clone)]
pub struct Sections<'a, S> {
    lines: &'a [S],
    begin_marker: &'a str,
    end_marker: &'a str,
    next: usize,
    bound: usize,
}

impl<S: AsRef<str>> Iterator for Sections<'_, S> {
    type Item = Section;

    fn next(&mut self) -> Option<Section> {
        match find_section(
            self.lines,
            self.begin_marker,
            self.end_marker,
            self.next..self.bound,
        ) {
            Some(section) => {
                self.next = section.end + 1;
                Some(section)
            }
            None => {
                self.next = self.bound;
                None
            }
        }
    }
}

impl<S: AsRef<str>> std::iter::FusedIterator for Sections<'_, S> {}

/// Name of the tag opened on `line`, e.g. `Kpoint.3` for `<Kpoint.3 size="2">`
pub fn tag_name(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix('<')?;
    let end = rest
        .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
        .unwrap_or(rest.len());
    if end == 0 {
        None
    } else {
        Some(&rest[..end])
    }
}

/// Numeric suffix of a numbered tag such as `e.12` for the prefix `e.`
pub fn tag_index(line: &str, prefix: &str) -> Option<usize> {
    tag_name(line)?.strip_prefix(prefix)?.parse().ok()
}
