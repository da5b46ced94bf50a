// Copyright 2025 the Hand Shadows Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a custom hand geometry asset is unusable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// An outline has no elements.
    EmptyOutline,
    /// The open and closed outlines of an articulated shape differ in element
    /// kind at `index` (or one of them ends there).
    MismatchedOutlines {
        /// Index of the first element that cannot be paired.
        index: usize,
    },
    /// The fingertip lies outside the bounding box of the outline.
    FingertipOutsideOutline,
    /// The frame has a non-positive or non-finite extent.
    InvalidFrame,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyOutline => f.write_str("hand outline has no elements"),
            Self::MismatchedOutlines { index } => write!(
                f,
                "open and closed outlines differ in structure at element {index}"
            ),
            Self::FingertipOutsideOutline => {
                f.write_str("fingertip lies outside the hand outline bounds")
            }
            Self::InvalidFrame => f.write_str("hand frame must have a positive finite size"),
        }
    }
}

impl core::error::Error for GeometryError {}
