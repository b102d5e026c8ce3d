/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Three-component vector parsing

use super::errors::{MarkupError, Result};
use super::lines::split_fields;

/// Parse the first three whitespace-separated fields of `line` as floats
///
/// Extra fields are ignored.
pub fn parse_vector3(line: &str) -> Result<[f64; 3]> {
    let fields = split_fields(line);
    if fields.len() < 3 {
        return Err(MarkupError::TooFewFields {
            expected: 3,
            found: fields.len(),
        });
    }

    let mut vector = [0.0; 3];
    for (slot, field) in vector.iter_mut().zip(&fields) {
        *slot = field
            .parse()
            .map_err(|_| MarkupError::InvalidNumber(field.to_string()))?;
    }
    Ok(vector)
}
