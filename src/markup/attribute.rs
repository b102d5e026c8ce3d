/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Attribute extraction from start tags

use serde::Serialize;
use std::str::FromStr;

/// Value of the attribute `name="value"` (or single-quoted) on `line`
///
/// The name must match a whole attribute name outside any quoted value, so
/// `nk` does not match `nk1="4"`. Which tag the attribute belongs to is not
/// checked; callers test for the owning tag first.
pub fn extract_attribute<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    if name.is_empty() {
        return None;
    }

    let bytes = line.as_bytes();
    let mut quote: Option<u8> = None;
    for (i, &byte) in bytes.iter().enumerate() {
        match quote {
            Some(open) => {
                if byte == open {
                    quote = None;
                }
            }
            None if byte == b'"' || byte == b'\'' => quote = Some(byte),
            None => {
                let standalone = i == 0 || bytes[i - 1].is_ascii_whitespace();
                if standalone && bytes[i..].starts_with(name.as_bytes()) {
                    if let Some(value) = quoted_value(&line[i + name.len()..]) {
                        return Some(value);
                    }
                }
            }
        }
    }

    None
}

/// Quoted value following `=` at the start of `rest`
fn quoted_value(rest: &str) -> Option<&str> {
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let body = &rest[1..];
    body.find(quote).map(|close| &body[..close])
}

/// Text between `<tag>` and the following `</` on the same line
///
/// Used for elements written as `<a1>1.0 0.0 0.0</a1>` instead of carrying
/// an attribute. Returns `None` for self-closing or empty elements.
pub fn element_text<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{}", tag);
    let start = line.find(&open)? + open.len();
    let after_open = &line[start..];
    let body_start = after_open.find('>')? + 1;
    let body = &after_open[body_start..];
    let body = match body.find("</") {
        Some(close) => &body[..close],
        None => body,
    };
    let body = body.trim();
    if body.is_empty() {
        None
    } else {
        Some(body)
    }
}

/// Outcome of reading one typed header value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Field<T> {
    /// The attribute was present and converted
    Parsed(T),
    /// The attribute (or its section) was not present
    Absent,
    /// The attribute was present but did not convert; holds the raw text
    Malformed(String),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> Field<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Parsed(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Field::Parsed(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Field::Malformed(_))
    }

    /// Raw text of a malformed value
    pub fn malformed_text(&self) -> Option<&str> {
        match self {
            Field::Malformed(raw) => Some(raw),
            _ => None,
        }
    }
}

impl<T: Copy> Field<T> {
    pub fn get(&self) -> Option<T> {
        self.value().copied()
    }
}

impl<T: FromStr> Field<T> {
    /// Convert raw attribute text, keeping the text when conversion fails
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => Field::Absent,
            Some(text) => match text.trim().parse() {
                Ok(value) => Field::Parsed(value),
                Err(_) => Field::Malformed(text.to_string()),
            },
        }
    }

    /// Extract attribute `name` from `line` and convert it
    pub fn from_attribute(line: &str, name: &str) -> Self {
        Self::parse(extract_attribute(line, name))
    }
}
