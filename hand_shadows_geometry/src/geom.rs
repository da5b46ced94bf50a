// Copyright 2025 the Hand Shadows Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small geometric helpers shared by the hand models.

use kurbo::{Affine, BezPath, PathEl, Point};

use crate::GeometryError;

/// Euclidean distance between two points.
///
/// Non-finite inputs propagate to the result following IEEE semantics.
#[must_use]
pub fn distance(p1: Point, p2: Point) -> f64 {
    p1.distance(p2)
}

/// Horizontal flip about the vertical line `x = width / 2`.
///
/// Maps `(x, y)` to `(width - x, y)`. Applying it twice is the identity.
#[must_use]
pub fn mirror_x(width: f64) -> Affine {
    Affine::new([-1.0, 0.0, 0.0, 1.0, width, 0.0])
}

/// Checks that two paths have the same element kinds in the same order.
///
/// Returns the index of the first mismatching element otherwise.
pub fn check_same_structure(a: &BezPath, b: &BezPath) -> Result<(), GeometryError> {
    let (a, b) = (a.elements(), b.elements());
    for (index, (x, y)) in a.iter().zip(b).enumerate() {
        if core::mem::discriminant(x) != core::mem::discriminant(y) {
            return Err(GeometryError::MismatchedOutlines { index });
        }
    }
    if a.len() != b.len() {
        return Err(GeometryError::MismatchedOutlines {
            index: a.len().min(b.len()),
        });
    }
    Ok(())
}

/// Blends two structurally identical paths point by point.
///
/// `t = 1.0` yields `open`, `t = 0.0` yields `closed`. Callers must have
/// validated the pair with [`check_same_structure`]; mismatching elements are
/// taken from `open` unchanged.
#[must_use]
pub fn interpolate_paths(open: &BezPath, closed: &BezPath, t: f64) -> BezPath {
    let mix = |o: Point, c: Point| c.lerp(o, t);
    let mut out = BezPath::new();
    for (o, c) in open.elements().iter().zip(closed.elements()) {
        let el = match (*o, *c) {
            (PathEl::MoveTo(o), PathEl::MoveTo(c)) => PathEl::MoveTo(mix(o, c)),
            (PathEl::LineTo(o), PathEl::LineTo(c)) => PathEl::LineTo(mix(o, c)),
            (PathEl::QuadTo(o1, o2), PathEl::QuadTo(c1, c2)) => {
                PathEl::QuadTo(mix(o1, c1), mix(o2, c2))
            }
            (PathEl::CurveTo(o1, o2, o3), PathEl::CurveTo(c1, c2, c3)) => {
                PathEl::CurveTo(mix(o1, c1), mix(o2, c2), mix(o3, c3))
            }
            (other, _) => other,
        };
        out.push(el);
    }
    out
}

/// Builds a path from unit-space elements scaled to a `width` × `height` frame.
pub(crate) fn scaled_path(unit: &[PathEl], width: f64, height: f64) -> BezPath {
    let scale = Affine::scale_non_uniform(width, height);
    let mut path = BezPath::from_vec(unit.to_vec());
    path.apply_affine(scale);
    path
}

/// Every point stored in `path`, in element order.
#[cfg(test)]
pub(crate) fn control_points(path: &BezPath) -> alloc::vec::Vec<Point> {
    let mut out = alloc::vec::Vec::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => out.push(p),
            PathEl::QuadTo(a, b) => out.extend([a, b]),
            PathEl::CurveTo(a, b, c) => out.extend([a, b, c]),
            PathEl::ClosePath => {}
        }
    }
    out
}
