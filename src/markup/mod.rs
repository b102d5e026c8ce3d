/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Tagged-markup scanning primitives
//!
//! The wavefunction exports are line-oriented pseudo-XML: every tag sits on
//! its own line and data lines sit between an opening and a closing tag.
//! Rather than building a full XML tree, the readers work on a flat
//! [`LineBuffer`] and address sections by line index:
//!
//! - [`find_section`] locates one begin/end marker pair inside a line range
//! - [`sections`] enumerates sibling sections left to right
//! - [`extract_attribute`] pulls `name="value"` out of a start tag
//! - [`parse_vector3`] reads three floats from a line
//!
//! Header values are wrapped in [`Field`] so that absent and malformed
//! attributes stay distinguishable from parsed ones.

pub mod attribute;
pub mod errors;
pub mod lines;
pub mod section;
pub mod vector;

pub use attribute::{element_text, extract_attribute, Field};
pub use errors::{MarkupError, Result};
pub use lines::{split_delimited, split_fields, LineBuffer};
pub use section::{find_section, sections, tag_index, tag_name, Section, Sections};
pub use vector::parse_vector3;
