// Copyright 2025 the Hand Shadows Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical hand outlines.
//!
//! A [`HandGeometry`] is the source of truth for every silhouette the hand
//! models can produce. The built-in asset ships three shapes; applications may
//! substitute their own outlines as long as they pass validation.

mod pinch;
mod pointer;
mod two_finger;

use kurbo::{BezPath, Point, Shape, Size};

use crate::geom::{check_same_structure, scaled_path};
use crate::{GeometryError, HandType};

/// Fingertip centres of a two-fingered pose, in frame coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FingerTips {
    /// The index fingertip, which tracks the primary touch.
    pub index: Point,
    /// The second fingertip (middle finger or thumb).
    pub other: Point,
}

impl FingerTips {
    /// Creates a pair of fingertip centres.
    #[must_use]
    pub const fn new(index: Point, other: Point) -> Self {
        Self { index, other }
    }

    /// Distance between the two fingertips.
    #[must_use]
    pub fn gap(&self) -> f64 {
        crate::distance(self.index, self.other)
    }
}

fn check_frame(frame: Size) -> Result<(), GeometryError> {
    let positive = |v: f64| v.is_finite() && v > 0.0;
    if positive(frame.width) && positive(frame.height) {
        Ok(())
    } else {
        Err(GeometryError::InvalidFrame)
    }
}

/// Outline of a hand pointing with a single extended index finger.
#[derive(Clone, Debug)]
pub struct PointerAsset {
    frame: Size,
    outline: BezPath,
    fingertip: Point,
    authored_for: HandType,
}

impl PointerAsset {
    /// Validates and wraps a custom pointing-hand outline.
    ///
    /// `frame` is the authoring canvas; mirroring for the other hand flips
    /// about its vertical centre line.
    pub fn new(
        frame: Size,
        outline: BezPath,
        fingertip: Point,
        authored_for: HandType,
    ) -> Result<Self, GeometryError> {
        check_frame(frame)?;
        if outline.elements().is_empty() {
            return Err(GeometryError::EmptyOutline);
        }
        if !outline.bounding_box().contains(fingertip) {
            return Err(GeometryError::FingertipOutsideOutline);
        }
        Ok(Self {
            frame,
            outline,
            fingertip,
            authored_for,
        })
    }

    /// The built-in right-hand pointing outline on a 400×908 frame.
    #[must_use]
    pub fn builtin() -> Self {
        let frame = Size::new(400.0, 908.0);
        Self {
            frame,
            outline: scaled_path(pointer::POINTER_FINGER, frame.width, frame.height),
            fingertip: Point::new(74.06, 41.55),
            authored_for: HandType::Right,
        }
    }

    /// The authoring canvas.
    #[must_use]
    pub fn frame(&self) -> Size {
        self.frame
    }

    /// The hand outline in frame coordinates.
    #[must_use]
    pub fn outline(&self) -> &BezPath {
        &self.outline
    }

    /// The fingertip centre in frame coordinates.
    #[must_use]
    pub fn fingertip(&self) -> Point {
        self.fingertip
    }

    /// The hand this outline was drawn for.
    #[must_use]
    pub fn authored_for(&self) -> HandType {
        self.authored_for
    }
}

/// A pair of outlines bracketing how far two fingers can spread.
///
/// Poses in between are produced by blending `open` and `closed` element by
/// element, so both outlines must share the same element structure.
#[derive(Clone, Debug)]
pub struct ArticulatedAsset {
    frame: Size,
    open: BezPath,
    closed: BezPath,
    open_tips: FingerTips,
    closed_tips: FingerTips,
    authored_for: HandType,
}

impl ArticulatedAsset {
    /// Validates and wraps a custom articulated outline pair.
    pub fn new(
        frame: Size,
        open: BezPath,
        closed: BezPath,
        open_tips: FingerTips,
        closed_tips: FingerTips,
        authored_for: HandType,
    ) -> Result<Self, GeometryError> {
        check_frame(frame)?;
        if open.elements().is_empty() || closed.elements().is_empty() {
            return Err(GeometryError::EmptyOutline);
        }
        check_same_structure(&open, &closed)?;
        Ok(Self {
            frame,
            open,
            closed,
            open_tips,
            closed_tips,
            authored_for,
        })
    }

    /// The built-in left-hand index/middle outlines on a 400×1200 frame.
    #[must_use]
    pub fn builtin_two_finger() -> Self {
        let frame = Size::new(400.0, 1200.0);
        Self {
            frame,
            open: scaled_path(two_finger::TWO_FINGER_OPEN, frame.width, frame.height),
            closed: scaled_path(two_finger::TWO_FINGER_CLOSED, frame.width, frame.height),
            open_tips: FingerTips::new(Point::new(348.43, 91.8), Point::new(110.97, 61.34)),
            closed_tips: FingerTips::new(Point::new(285.43, 77.32), Point::new(211.92, 53.28)),
            authored_for: HandType::Left,
        }
    }

    /// The built-in left-hand thumb/index outlines on an 800×1200 frame.
    #[must_use]
    pub fn builtin_pinch() -> Self {
        let frame = Size::new(800.0, 1200.0);
        Self {
            frame,
            open: scaled_path(pinch::PINCH_OPEN, frame.width, frame.height),
            closed: scaled_path(pinch::PINCH_CLOSED, frame.width, frame.height),
            open_tips: FingerTips::new(Point::new(385.34, 105.5), Point::new(603.66, 417.04)),
            closed_tips: FingerTips::new(Point::new(192.66, 159.33), Point::new(282.31, 201.03)),
            authored_for: HandType::Left,
        }
    }

    /// The authoring canvas.
    #[must_use]
    pub fn frame(&self) -> Size {
        self.frame
    }

    /// The fully spread outline.
    #[must_use]
    pub fn open(&self) -> &BezPath {
        &self.open
    }

    /// The fully closed outline.
    #[must_use]
    pub fn closed(&self) -> &BezPath {
        &self.closed
    }

    /// Fingertips of the fully spread outline.
    #[must_use]
    pub fn open_tips(&self) -> FingerTips {
        self.open_tips
    }

    /// Fingertips of the fully closed outline.
    #[must_use]
    pub fn closed_tips(&self) -> FingerTips {
        self.closed_tips
    }

    /// The hand these outlines were drawn for.
    #[must_use]
    pub fn authored_for(&self) -> HandType {
        self.authored_for
    }
}

/// Every outline the hand models draw from.
#[derive(Clone, Debug)]
pub struct HandGeometry {
    /// Single extended index finger, used for one-touch gestures.
    pub pointer: PointerAsset,
    /// Index and middle finger, used for two-touch pans and bezel swipes.
    pub two_finger: ArticulatedAsset,
    /// Thumb and index finger, used for pinches.
    pub pinch: ArticulatedAsset,
}

impl Default for HandGeometry {
    fn default() -> Self {
        Self {
            pointer: PointerAsset::builtin(),
            two_finger: ArticulatedAsset::builtin_two_finger(),
            pinch: ArticulatedAsset::builtin_pinch(),
        }
    }
}
