// Copyright 2025 the Hand Shadows Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live state of one in-progress gesture.

use core::fmt;

use hand_shadows_geometry::{HandType, distance};
use kurbo::Point;

use crate::touch::{TouchSet, centroid};
use crate::{Touch, TouchId};

/// The four gestures a hand shadow can mimic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Swipe in from a screen edge.
    Bezel,
    /// One-hand drag of a target.
    Pan,
    /// Two-touch scaling of a target.
    Pinch,
    /// Freehand stroke with one finger or pen.
    Draw,
}

impl GestureKind {
    /// Lowercase name for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bezel => "bezel",
            Self::Pan => "pan",
            Self::Pinch => "pinch",
            Self::Draw => "draw",
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pair of values, one per hand.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerHand<T> {
    /// Value for the left hand.
    pub left: T,
    /// Value for the right hand.
    pub right: T,
}

impl<T> PerHand<T> {
    /// Returns the value for `hand`.
    pub fn get(&self, hand: HandType) -> &T {
        match hand {
            HandType::Left => &self.left,
            HandType::Right => &self.right,
        }
    }

    /// Returns the value for `hand` mutably.
    pub fn get_mut(&mut self, hand: HandType) -> &mut T {
        match hand {
            HandType::Left => &mut self.left,
            HandType::Right => &mut self.right,
        }
    }

    /// Iterates both hands, left first.
    pub fn iter(&self) -> impl Iterator<Item = (HandType, &T)> {
        [(HandType::Left, &self.left), (HandType::Right, &self.right)].into_iter()
    }
}

/// Scale of a pinch relative to its starting spread.
///
/// The denominator is never smaller than `epsilon`, and neither is the result.
#[must_use]
pub fn pinch_scale(initial: f64, current: f64, epsilon: f64) -> f64 {
    (current / initial.max(epsilon)).max(epsilon)
}

/// Picks the touch the index finger tracks and, if present, the second finger.
///
/// For a hand resting on the surface the index finger is the innermost touch:
/// leftmost for a right hand, rightmost for a left hand. The second finger is
/// the next one along. For a pinch the index finger is the upper touch.
pub(crate) fn split_fingers(
    kind: GestureKind,
    hand: Option<HandType>,
    touches: &[Touch],
) -> (Point, Option<Point>) {
    let mut points = touches.iter().map(|t| t.point);
    let Some(first) = points.next() else {
        return (Point::ORIGIN, None);
    };
    // `true` when `a` is a better index candidate than `b`.
    let before = |a: Point, b: Point| match (kind, hand) {
        (GestureKind::Pinch, _) => a.y < b.y,
        (_, Some(HandType::Left)) => a.x > b.x,
        _ => a.x < b.x,
    };
    let mut index = first;
    let mut second: Option<Point> = None;
    for p in points {
        if before(p, index) {
            second = Some(index);
            index = p;
        } else if second.is_none_or(|s| before(p, s)) {
            second = Some(p);
        }
    }
    (index, second)
}

/// One gesture between its start and end calls.
#[derive(Clone, Debug)]
pub struct GestureSession {
    kind: GestureKind,
    hand: Option<HandType>,
    touches: TouchSet,
    anchor: Point,
    second: Option<Point>,
    initial_distance: Option<f64>,
    scale: f64,
    pub(crate) rotation_hint: Option<f64>,
    revision: u64,
}

impl GestureSession {
    pub(crate) fn start(
        kind: GestureKind,
        hand: Option<HandType>,
        touches: &[Touch],
        revision: u64,
    ) -> Self {
        let (anchor, second) = split_fingers(kind, hand, touches);
        let initial_distance = match kind {
            GestureKind::Pinch => second.map(|s| distance(anchor, s)),
            _ => None,
        };
        Self {
            kind,
            hand,
            touches: touches.iter().copied().collect(),
            anchor,
            second,
            initial_distance,
            scale: 1.0,
            rotation_hint: None,
            revision,
        }
    }

    pub(crate) fn update(&mut self, touches: &[Touch], revision: u64, epsilon: f64) {
        let (anchor, second) = split_fingers(self.kind, self.hand, touches);
        self.touches = touches.iter().copied().collect();
        self.anchor = anchor;
        self.second = second;
        self.revision = revision;
        if let (Some(initial), Some(second)) = (self.initial_distance, second) {
            self.scale = pinch_scale(initial, distance(anchor, second), epsilon);
        }
    }

    /// Records which touches the placed hand ended up using.
    pub(crate) fn set_fingers(&mut self, index: Point, second: Option<Point>) {
        self.anchor = index;
        self.second = second;
    }

    /// The gesture this session tracks.
    #[must_use]
    pub fn kind(&self) -> GestureKind {
        self.kind
    }

    /// The hand the gesture is drawn with, for bezels and pans.
    #[must_use]
    pub fn hand(&self) -> Option<HandType> {
        self.hand
    }

    /// Touches reported by the latest call.
    #[must_use]
    pub fn touches(&self) -> &[Touch] {
        &self.touches
    }

    /// Returns `true` if `id` belongs to this session.
    #[must_use]
    pub fn owns(&self, id: TouchId) -> bool {
        self.touches.iter().any(|t| t.id == id)
    }

    /// Location the index fingertip tracks.
    #[must_use]
    pub fn anchor_point(&self) -> Point {
        self.anchor
    }

    /// Location of the second finger, when the gesture has one on screen.
    #[must_use]
    pub fn second_point(&self) -> Option<Point> {
        self.second
    }

    /// Mean location of the current touches.
    #[must_use]
    pub fn centroid(&self) -> Point {
        centroid(&self.touches).unwrap_or(self.anchor)
    }

    /// Ratio of the current to the initial touch spread; `1.0` except for pinches.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale
    }

    /// Touch spread when the pinch started.
    #[must_use]
    pub fn initial_distance(&self) -> Option<f64> {
        self.initial_distance
    }

    /// Angle of the last accepted two-finger placement, if any.
    #[must_use]
    pub fn rotation_hint(&self) -> Option<f64> {
        self.rotation_hint
    }

    /// Ordering stamp of the latest start or continue call.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
