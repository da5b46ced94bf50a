// Copyright 2025 the Hand Shadows Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-fingered hands whose outline opens and closes with the touch spread.
//!
//! Both shapes blend a fully spread and a fully closed outline, then rotate
//! the result about the index fingertip so the line from the index finger to
//! the second finger is horizontal. Callers rotate it back to match the live
//! touches.

use kurbo::{Affine, BezPath, Point};

use crate::geom::{interpolate_paths, mirror_x};
use crate::{ArticulatedAsset, FingerTips, HandType};

/// Spread between index and middle fingertips, in touch units, at which the
/// two-finger hand starts to open.
pub const TWO_FINGER_REST_GAP: f64 = 80.0;

/// A posed two-fingered hand in its own local space.
#[derive(Clone, Debug)]
pub struct FingerPose {
    /// The hand outline.
    pub path: BezPath,
    /// Index fingertip centre.
    pub index_tip: Point,
    /// Second fingertip centre (middle finger or thumb).
    pub other_tip: Point,
    /// How far the pose is between closed (`0.0`) and open (`1.0`).
    pub openness: f64,
}

impl FingerPose {
    /// The outline shifted so the index fingertip sits at the origin.
    #[must_use]
    pub fn anchored_path(&self) -> BezPath {
        Affine::translate(-self.index_tip.to_vec2()) * self.path.clone()
    }
}

#[derive(Clone, Debug)]
struct Articulation {
    hand: HandType,
    open: BezPath,
    closed: BezPath,
    open_tips: FingerTips,
    closed_tips: FingerTips,
}

impl Articulation {
    fn from_asset(hand: HandType, asset: &ArticulatedAsset) -> Self {
        let flip = if asset.authored_for() == hand {
            Affine::IDENTITY
        } else {
            mirror_x(asset.frame().width)
        };
        let tips = |t: FingerTips| FingerTips::new(flip * t.index, flip * t.other);
        Self {
            hand,
            open: flip * asset.open().clone(),
            closed: flip * asset.closed().clone(),
            open_tips: tips(asset.open_tips()),
            closed_tips: tips(asset.closed_tips()),
        }
    }

    /// Maps a fingertip spread to an openness in `[0, 1]`, with `spread_at_closed`
    /// as the spread that yields the closed outline.
    fn openness(&self, spread: f64, spread_at_closed: f64) -> f64 {
        let range = self.open_tips.gap() - self.closed_tips.gap();
        if range <= 0.0 {
            return 1.0;
        }
        let t = (spread - spread_at_closed) / range;
        if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
    }

    fn pose_at(&self, openness: f64) -> FingerPose {
        let index = self.closed_tips.index.lerp(self.open_tips.index, openness);
        let other = self.closed_tips.other.lerp(self.open_tips.other, openness);
        let mut path = interpolate_paths(&self.open, &self.closed, openness);

        let mut direction = other - index;
        if self.hand.is_left() {
            direction = -direction;
        }
        let level = Affine::rotate_about(-direction.atan2(), index);
        path.apply_affine(level);

        FingerPose {
            path,
            index_tip: index,
            other_tip: level * other,
            openness,
        }
    }
}

/// Index and middle finger resting on the surface, used for two-touch pans
/// and bezel swipes.
#[derive(Clone, Debug)]
pub struct TwoFingerShadow {
    articulation: Articulation,
}

impl TwoFingerShadow {
    /// Builds the two-finger hand from the built-in outlines.
    #[must_use]
    pub fn new(hand: HandType) -> Self {
        Self::from_asset(hand, &ArticulatedAsset::builtin_two_finger())
    }

    /// Builds the two-finger hand from custom outlines.
    #[must_use]
    pub fn from_asset(hand: HandType, asset: &ArticulatedAsset) -> Self {
        Self {
            articulation: Articulation::from_asset(hand, asset),
        }
    }

    /// The hand this silhouette depicts.
    #[must_use]
    pub fn hand(&self) -> HandType {
        self.articulation.hand
    }

    /// Openness for fingertips `spread` apart.
    #[must_use]
    pub fn openness(&self, spread: f64) -> f64 {
        self.articulation.openness(spread, TWO_FINGER_REST_GAP)
    }

    /// Poses the hand for fingertips `spread` apart.
    #[must_use]
    pub fn pose(&self, spread: f64) -> FingerPose {
        self.articulation.pose_at(self.openness(spread))
    }
}

/// Thumb and index finger pinching, used for two-touch scaling.
#[derive(Clone, Debug)]
pub struct PinchShadow {
    articulation: Articulation,
}

impl PinchShadow {
    /// Builds the pinching hand from the built-in outlines.
    #[must_use]
    pub fn new(hand: HandType) -> Self {
        Self::from_asset(hand, &ArticulatedAsset::builtin_pinch())
    }

    /// Builds the pinching hand from custom outlines.
    #[must_use]
    pub fn from_asset(hand: HandType, asset: &ArticulatedAsset) -> Self {
        Self {
            articulation: Articulation::from_asset(hand, asset),
        }
    }

    /// The hand this silhouette depicts.
    #[must_use]
    pub fn hand(&self) -> HandType {
        self.articulation.hand
    }

    /// Openness for fingertips `spread` apart.
    #[must_use]
    pub fn openness(&self, spread: f64) -> f64 {
        let closed_gap = self.articulation.closed_tips.gap();
        self.articulation.openness(spread, closed_gap)
    }

    /// Poses the hand for fingertips `spread` apart.
    #[must_use]
    pub fn pose(&self, spread: f64) -> FingerPose {
        self.articulation.pose_at(self.openness(spread))
    }
}
