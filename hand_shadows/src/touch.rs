// Copyright 2025 the Hand Shadows Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch records carried by gesture lifecycle calls.

use kurbo::Point;
use smallvec::SmallVec;

use crate::InputProblem;

/// Platform identifier of one finger on the surface.
///
/// Identifiers are stable for the lifetime of a touch and unique among the
/// touches currently down.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TouchId(pub u64);

/// One touch: who it is and where it currently is, in view coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Touch {
    /// Identifier of the finger.
    pub id: TouchId,
    /// Current location.
    pub point: Point,
}

impl Touch {
    /// Creates a touch record.
    #[must_use]
    pub fn new(id: u64, point: impl Into<Point>) -> Self {
        Self {
            id: TouchId(id),
            point: point.into(),
        }
    }
}

/// The touches held by a live session; two inline covers every gesture shape.
pub(crate) type TouchSet = SmallVec<[Touch; 2]>;

/// Checks a touch sequence is non-empty, has unique ids and finite points.
pub(crate) fn check_touches(touches: &[Touch]) -> Result<(), InputProblem> {
    if touches.is_empty() {
        return Err(InputProblem::Empty);
    }
    for (i, touch) in touches.iter().enumerate() {
        if !touch.point.is_finite() {
            return Err(InputProblem::NonFinitePoint(touch.id));
        }
        if touches[..i].iter().any(|t| t.id == touch.id) {
            return Err(InputProblem::DuplicateTouch(touch.id));
        }
    }
    Ok(())
}

/// Returns `true` when both sequences name the same touches, in any order.
pub(crate) fn same_members(a: &[Touch], b: &[Touch]) -> bool {
    a.len() == b.len() && a.iter().all(|t| b.iter().any(|u| u.id == t.id))
}

/// Mean location of `touches`, or `None` if there are none.
#[must_use]
pub fn centroid(touches: &[Touch]) -> Option<Point> {
    if touches.is_empty() {
        return None;
    }
    let sum = touches
        .iter()
        .fold(kurbo::Vec2::ZERO, |acc, t| acc + t.point.to_vec2());
    Some((sum / touches.len() as f64).to_point())
}
