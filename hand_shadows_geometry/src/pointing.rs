// Copyright 2025 the Hand Shadows Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pointing hand: a palm outline with one extended index finger.

use kurbo::{Affine, BezPath, Circle, Point, Rect, Shape};

use crate::geom::mirror_x;
use crate::{HandType, PointerAsset};

/// Radius of the dot marking the fingertip contact.
pub const FINGERTIP_RADIUS: f64 = 3.5;

const FINGERTIP_TOLERANCE: f64 = 0.1;

/// Silhouette of one hand pointing at the surface.
///
/// Geometry is fixed at construction. The hand outline and the fingertip dot
/// live in the same local space; a left hand is the horizontal mirror of a
/// right hand across the asset frame's vertical centre line.
#[derive(Clone, Debug)]
pub struct HandShadow {
    hand: HandType,
    hand_path: BezPath,
    finger_tip_path: BezPath,
    fingertip: Point,
    bounding_box: Rect,
}

impl HandShadow {
    /// Builds the silhouette for `hand` from the built-in outline.
    #[must_use]
    pub fn new(hand: HandType) -> Self {
        Self::from_asset(hand, &PointerAsset::builtin())
    }

    /// Builds the silhouette for `hand` from a custom outline.
    ///
    /// The outline is mirrored once here if it was authored for the other hand.
    #[must_use]
    pub fn from_asset(hand: HandType, asset: &PointerAsset) -> Self {
        let placement = if asset.authored_for() == hand {
            Affine::IDENTITY
        } else {
            mirror_x(asset.frame().width)
        };
        let hand_path = placement * asset.outline().clone();
        let fingertip = placement * asset.fingertip();
        let finger_tip_path = placement
            * Circle::new(asset.fingertip(), FINGERTIP_RADIUS).to_path(FINGERTIP_TOLERANCE);

        let mut shadow = Self {
            hand,
            hand_path,
            finger_tip_path,
            fingertip,
            bounding_box: Rect::ZERO,
        };
        shadow.bounding_box = shadow.composed_path().bounding_box();
        shadow
    }

    /// The hand this silhouette depicts.
    #[must_use]
    pub fn hand(&self) -> HandType {
        self.hand
    }

    /// The palm and finger outline.
    #[must_use]
    pub fn hand_path(&self) -> &BezPath {
        &self.hand_path
    }

    /// The small dot under the index fingertip.
    #[must_use]
    pub fn finger_tip_path(&self) -> &BezPath {
        &self.finger_tip_path
    }

    /// Hand outline followed by the fingertip dot, as one path for rendering.
    #[must_use]
    pub fn composed_path(&self) -> BezPath {
        let mut path = self.hand_path.clone();
        path.extend(self.finger_tip_path.elements().iter().copied());
        path
    }

    /// Axis-aligned bounds of [`composed_path`](Self::composed_path) in local space.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        self.bounding_box
    }

    /// Where the index fingertip touches the surface, in local space.
    #[must_use]
    pub fn fingertip_anchor(&self) -> Point {
        self.fingertip
    }

    /// The composed path shifted so the fingertip sits at the origin.
    ///
    /// Placing this path with a transform `T` puts the fingertip exactly at
    /// `T * Point::ORIGIN`.
    #[must_use]
    pub fn anchored_path(&self) -> BezPath {
        Affine::translate(-self.fingertip.to_vec2()) * self.composed_path()
    }
}
