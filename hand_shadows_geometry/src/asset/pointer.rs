// Copyright 2025 the Hand Shadows Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit-space outline of a hand pointing with its index finger.
//!
//! Authored for the right hand; coordinates are fractions of the frame.

use kurbo::{PathEl, Point};

pub(crate) const POINTER_FINGER: &[PathEl] = &[
    PathEl::MoveTo(Point::new(0.28066, 0.95491)),
    PathEl::LineTo(Point::new(0.77766, 0.95491)),
    PathEl::CurveTo(
        Point::new(0.77766, 0.95491),
        Point::new(0.7549, 0.8874),
        Point::new(0.74352, 0.86437),
    ),
    PathEl::CurveTo(
        Point::new(0.73214, 0.84129),
        Point::new(0.66385, 0.68329),
        Point::new(0.66005, 0.67666),
    ),
    PathEl::CurveTo(
        Point::new(0.65625, 0.67008),
        Point::new(0.61452, 0.58283),
        Point::new(0.62212, 0.57129),
    ),
    PathEl::CurveTo(
        Point::new(0.6297, 0.5598),
        Point::new(0.64867, 0.51865),
        Point::new(0.66764, 0.51041),
    ),
    PathEl::CurveTo(
        Point::new(0.68661, 0.50216),
        Point::new(0.71317, 0.47088),
        Point::new(0.71696, 0.45114),
    ),
    PathEl::CurveTo(
        Point::new(0.72075, 0.43136),
        Point::new(0.7245, 0.39306),
        Point::new(0.72708, 0.3842),
    ),
    PathEl::CurveTo(
        Point::new(0.72965, 0.37535),
        Point::new(0.73468, 0.36662),
        Point::new(0.73214, 0.35675),
    ),
    PathEl::CurveTo(
        Point::new(0.72961, 0.34688),
        Point::new(0.72202, 0.31947),
        Point::new(0.70938, 0.31174),
    ),
    PathEl::CurveTo(
        Point::new(0.69672, 0.30407),
        Point::new(0.67396, 0.27117),
        Point::new(0.59809, 0.29091),
    ),
    PathEl::CurveTo(
        Point::new(0.59809, 0.29091),
        Point::new(0.58038, 0.24919),
        Point::new(0.49691, 0.26459),
    ),
    PathEl::CurveTo(
        Point::new(0.49691, 0.26459),
        Point::new(0.51715, 0.23602),
        Point::new(0.45138, 0.22944),
    ),
    PathEl::CurveTo(
        Point::new(0.38562, 0.22286),
        Point::new(0.34768, 0.25576),
        Point::new(0.34768, 0.25576),
    ),
    PathEl::CurveTo(
        Point::new(0.34768, 0.25576),
        Point::new(0.31986, 0.2426),
        Point::new(0.31227, 0.23383),
    ),
    PathEl::CurveTo(
        Point::new(0.30468, 0.22505),
        Point::new(0.28951, 0.16469),
        Point::new(0.27687, 0.14052),
    ),
    PathEl::CurveTo(
        Point::new(0.26421, 0.1164),
        Point::new(0.25409, 0.05494),
        Point::new(0.24397, 0.04612),
    ),
    PathEl::CurveTo(
        Point::new(0.23386, 0.03735),
        Point::new(0.22122, 0.03077),
        Point::new(0.19592, 0.03186),
    ),
    PathEl::CurveTo(
        Point::new(0.17063, 0.03296),
        Point::new(0.15797, 0.04064),
        Point::new(0.15292, 0.05165),
    ),
    PathEl::CurveTo(
        Point::new(0.14786, 0.06261),
        Point::new(0.15798, 0.13613),
        Point::new(0.15798, 0.14162),
    ),
    PathEl::CurveTo(
        Point::new(0.15798, 0.1471),
        Point::new(0.16304, 0.17895),
        Point::new(0.1681, 0.18882),
    ),
    PathEl::CurveTo(
        Point::new(0.17316, 0.19869),
        Point::new(0.19338, 0.26672),
        Point::new(0.19086, 0.27335),
    ),
    PathEl::CurveTo(
        Point::new(0.18833, 0.27993),
        Point::new(0.19592, 0.32713),
        Point::new(0.1934, 0.337),
    ),
    PathEl::CurveTo(
        Point::new(0.19086, 0.34687),
        Point::new(0.19845, 0.39407),
        Point::new(0.20098, 0.40833),
    ),
    PathEl::CurveTo(
        Point::new(0.2035, 0.42258),
        Point::new(0.22374, 0.47527),
        Point::new(0.22627, 0.48514),
    ),
    PathEl::CurveTo(
        Point::new(0.22881, 0.49505),
        Point::new(0.24904, 0.53563),
        Point::new(0.24904, 0.54555),
    ),
    PathEl::CurveTo(
        Point::new(0.24904, 0.55541),
        Point::new(0.26168, 0.62235),
        Point::new(0.26928, 0.64648),
    ),
    PathEl::CurveTo(
        Point::new(0.27687, 0.67065),
        Point::new(0.29962, 0.79247),
        Point::new(0.29457, 0.80563),
    ),
    PathEl::CurveTo(
        Point::new(0.28951, 0.81884),
        Point::new(0.27939, 0.93627),
        Point::new(0.28066, 0.95491),
    ),
    PathEl::ClosePath,
];
