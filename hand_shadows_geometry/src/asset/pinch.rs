// Copyright 2025 the Hand Shadows Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit-space outlines of a thumb and index finger pinching, fully spread
//! ("open") and nearly touching ("closed").
//!
//! Authored for the left hand. Both outlines share one element structure.

use kurbo::{PathEl, Point};

pub(crate) const PINCH_OPEN: &[PathEl] = &[
    PathEl::MoveTo(Point::new(0.42901, 0.88607)),
    PathEl::LineTo(Point::new(0.13953, 0.88447)),
    PathEl::CurveTo(
        Point::new(0.13953, 0.88447),
        Point::new(0.18895, 0.71452),
        Point::new(0.2057, 0.68103),
    ),
    PathEl::CurveTo(
        Point::new(0.22244, 0.64753),
        Point::new(0.26312, 0.544),
        Point::new(0.2679, 0.52486),
    ),
    PathEl::CurveTo(
        Point::new(0.2679, 0.52486),
        Point::new(0.27986, 0.49615),
        Point::new(0.27029, 0.48498),
    ),
    PathEl::CurveTo(
        Point::new(0.27029, 0.48498),
        Point::new(0.25771, 0.46146),
        Point::new(0.25447, 0.45571),
    ),
    PathEl::CurveTo(
        Point::new(0.25124, 0.44995),
        Point::new(0.23397, 0.42549),
        Point::new(0.23397, 0.40535),
    ),
    PathEl::CurveTo(
        Point::new(0.23397, 0.40535),
        Point::new(0.24152, 0.3514),
        Point::new(0.23937, 0.34492),
    ),
    PathEl::CurveTo(
        Point::new(0.23721, 0.33845),
        Point::new(0.23721, 0.33485),
        Point::new(0.24045, 0.3291),
    ),
    PathEl::CurveTo(
        Point::new(0.24369, 0.32334),
        Point::new(0.24692, 0.31687),
        Point::new(0.24584, 0.30608),
    ),
    PathEl::CurveTo(
        Point::new(0.24476, 0.29528),
        Point::new(0.248, 0.27442),
        Point::new(0.27605, 0.27371),
    ),
    PathEl::CurveTo(
        Point::new(0.27605, 0.27371),
        Point::new(0.29224, 0.27226),
        Point::new(0.30087, 0.28018),
    ),
    PathEl::CurveTo(
        Point::new(0.30087, 0.28018),
        Point::new(0.31274, 0.26148),
        Point::new(0.33433, 0.26363),
    ),
    PathEl::CurveTo(
        Point::new(0.35591, 0.26579),
        Point::new(0.35655, 0.26635),
        Point::new(0.36141, 0.27015),
    ),
    PathEl::CurveTo(
        Point::new(0.36242, 0.26457),
        Point::new(0.36007, 0.24024),
        Point::new(0.39352, 0.23736),
    ),
    PathEl::CurveTo(
        Point::new(0.42697, 0.23449),
        Point::new(0.43, 0.24924),
        Point::new(0.4336, 0.25212),
    ),
    PathEl::CurveTo(
        Point::new(0.4372, 0.25501),
        Point::new(0.439, 0.2586),
        Point::new(0.44762, 0.26076),
    ),
    PathEl::CurveTo(
        Point::new(0.45626, 0.26291),
        Point::new(0.4595, 0.25212),
        Point::new(0.46166, 0.24708),
    ),
    PathEl::CurveTo(
        Point::new(0.46166, 0.24708),
        Point::new(0.46597, 0.2104),
        Point::new(0.46381, 0.19457),
    ),
    PathEl::CurveTo(
        Point::new(0.46166, 0.17875),
        Point::new(0.46597, 0.1176),
        Point::new(0.46705, 0.10825),
    ),
    PathEl::CurveTo(
        Point::new(0.46813, 0.0989),
        Point::new(0.46381, 0.08235),
        Point::new(0.4897, 0.08235),
    ),
    PathEl::CurveTo(
        Point::new(0.5156, 0.08235),
        Point::new(0.51787, 0.1073),
        Point::new(0.51884, 0.11544),
    ),
    PathEl::CurveTo(
        Point::new(0.5198, 0.12358),
        Point::new(0.52639, 0.17227),
        Point::new(0.52855, 0.17875),
    ),
    PathEl::CurveTo(
        Point::new(0.5307, 0.18522),
        Point::new(0.52746, 0.20752),
        Point::new(0.52746, 0.21112),
    ),
    PathEl::CurveTo(
        Point::new(0.52746, 0.21471),
        Point::new(0.5253, 0.26148),
        Point::new(0.52962, 0.26867),
    ),
    PathEl::CurveTo(
        Point::new(0.53395, 0.27586),
        Point::new(0.53179, 0.29385),
        Point::new(0.53286, 0.29888),
    ),
    PathEl::CurveTo(
        Point::new(0.53395, 0.30392),
        Point::new(0.53502, 0.34852),
        Point::new(0.55767, 0.35356),
    ),
    PathEl::CurveTo(
        Point::new(0.58034, 0.35859),
        Point::new(0.58789, 0.35283),
        Point::new(0.59868, 0.35068),
    ),
    PathEl::CurveTo(
        Point::new(0.60947, 0.34852),
        Point::new(0.66059, 0.33713),
        Point::new(0.69512, 0.33713),
    ),
    PathEl::CurveTo(
        Point::new(0.69512, 0.33713),
        Point::new(0.75339, 0.3285),
        Point::new(0.76957, 0.3508),
    ),
    PathEl::CurveTo(
        Point::new(0.76957, 0.3508),
        Point::new(0.77497, 0.35655),
        Point::new(0.7631, 0.36159),
    ),
    PathEl::CurveTo(
        Point::new(0.7631, 0.36159),
        Point::new(0.73, 0.36511),
        Point::new(0.71994, 0.36878),
    ),
    PathEl::CurveTo(
        Point::new(0.70722, 0.37236),
        Point::new(0.70052, 0.37336),
        Point::new(0.69512, 0.37552),
    ),
    PathEl::CurveTo(
        Point::new(0.68972, 0.37768),
        Point::new(0.66235, 0.38707),
        Point::new(0.65372, 0.38994),
    ),
    PathEl::CurveTo(
        Point::new(0.64508, 0.39282),
        Point::new(0.61487, 0.40103),
        Point::new(0.60947, 0.40463),
    ),
    PathEl::CurveTo(
        Point::new(0.60407, 0.40823),
        Point::new(0.59329, 0.41758),
        Point::new(0.56955, 0.42621),
    ),
    PathEl::CurveTo(
        Point::new(0.54581, 0.43484),
        Point::new(0.49618, 0.46793),
        Point::new(0.47892, 0.47585),
    ),
    PathEl::CurveTo(
        Point::new(0.47892, 0.47585),
        Point::new(0.46273, 0.49671),
        Point::new(0.46166, 0.50318),
    ),
    PathEl::CurveTo(
        Point::new(0.46058, 0.50966),
        Point::new(0.44331, 0.57512),
        Point::new(0.44223, 0.58448),
    ),
    PathEl::CurveTo(
        Point::new(0.44115, 0.59383),
        Point::new(0.42929, 0.68375),
        Point::new(0.42929, 0.69166),
    ),
    PathEl::CurveTo(
        Point::new(0.42929, 0.69958),
        Point::new(0.4282, 0.75784),
        Point::new(0.42929, 0.76648),
    ),
    PathEl::CurveTo(
        Point::new(0.43036, 0.77511),
        Point::new(0.42122, 0.87475),
        Point::new(0.42901, 0.88607),
    ),
    PathEl::ClosePath,
];

pub(crate) const PINCH_CLOSED: &[PathEl] = &[
    PathEl::MoveTo(Point::new(0.5515, 0.82672)),
    PathEl::LineTo(Point::new(0.29752, 0.81777)),
    PathEl::CurveTo(
        Point::new(0.29752, 0.77),
        Point::new(0.31955, 0.71981),
        Point::new(0.31712, 0.70922),
    ),
    PathEl::CurveTo(
        Point::new(0.31469, 0.69864),
        Point::new(0.32339, 0.62922),
        Point::new(0.32374, 0.62572),
    ),
    PathEl::CurveTo(
        Point::new(0.32409, 0.62227),
        Point::new(0.33741, 0.54139),
        Point::new(0.33614, 0.53668),
    ),
    PathEl::CurveTo(
        Point::new(0.33486, 0.53197),
        Point::new(0.32212, 0.50231),
        Point::new(0.32444, 0.4966),
    ),
    PathEl::CurveTo(
        Point::new(0.32676, 0.49085),
        Point::new(0.32827, 0.47581),
        Point::new(0.32827, 0.47581),
    ),
    PathEl::CurveTo(
        Point::new(0.32827, 0.47581),
        Point::new(0.31332, 0.45068),
        Point::new(0.30499, 0.44685),
    ),
    PathEl::CurveTo(
        Point::new(0.29665, 0.44297),
        Point::new(0.29087, 0.43511),
        Point::new(0.286, 0.4314),
    ),
    PathEl::CurveTo(
        Point::new(0.28449, 0.43025),
        Point::new(0.25795, 0.41686),
        Point::new(0.25344, 0.41375),
    ),
    PathEl::CurveTo(
        Point::new(0.25067, 0.41184),
        Point::new(0.23932, 0.4016),
        Point::new(0.23631, 0.39925),
    ),
    PathEl::CurveTo(
        Point::new(0.23399, 0.39744),
        Point::new(0.22277, 0.38953),
        Point::new(0.21718, 0.38537),
    ),
    PathEl::CurveTo(
        Point::new(0.21136, 0.38104),
        Point::new(0.19113, 0.36956),
        Point::new(0.18951, 0.36747),
    ),
    PathEl::CurveTo(
        Point::new(0.18742, 0.36476),
        Point::new(0.15684, 0.34559),
        Point::new(0.15518, 0.33893),
    ),
    PathEl::CurveTo(
        Point::new(0.1521, 0.32656),
        Point::new(0.17152, 0.31522),
        Point::new(0.17152, 0.31522),
    ),
    PathEl::CurveTo(
        Point::new(0.17152, 0.31522),
        Point::new(0.17159, 0.31052),
        Point::new(0.17174, 0.30361),
    ),
    PathEl::CurveTo(
        Point::new(0.17181, 0.30032),
        Point::new(0.1719, 0.29654),
        Point::new(0.17201, 0.29252),
    ),
    PathEl::CurveTo(
        Point::new(0.17249, 0.27443),
        Point::new(0.18335, 0.25171),
        Point::new(0.18465, 0.24902),
    ),
    PathEl::CurveTo(
        Point::new(0.18686, 0.24447),
        Point::new(0.19848, 0.21081),
        Point::new(0.19919, 0.20385),
    ),
    PathEl::CurveTo(
        Point::new(0.19988, 0.19689),
        Point::new(0.22776, 0.15302),
        Point::new(0.2281, 0.14952),
    ),
    PathEl::CurveTo(
        Point::new(0.22845, 0.14606),
        Point::new(0.23378, 0.12073),
        Point::new(0.25435, 0.1261),
    ),
    PathEl::CurveTo(
        Point::new(0.27492, 0.13147),
        Point::new(0.26529, 0.14408),
        Point::new(0.26353, 0.16668),
    ),
    PathEl::CurveTo(
        Point::new(0.26353, 0.16668),
        Point::new(0.26085, 0.17589),
        Point::new(0.2619, 0.18289),
    ),
    PathEl::CurveTo(
        Point::new(0.26294, 0.18993),
        Point::new(0.24827, 0.22393),
        Point::new(0.24931, 0.23093),
    ),
    PathEl::CurveTo(
        Point::new(0.25035, 0.23797),
        Point::new(0.24105, 0.26593),
        Point::new(0.24105, 0.26593),
    ),
    PathEl::CurveTo(
        Point::new(0.24105, 0.26593),
        Point::new(0.27129, 0.24285),
        Point::new(0.27998, 0.24322),
    ),
    PathEl::CurveTo(
        Point::new(0.28867, 0.2436),
        Point::new(0.31184, 0.25627),
        Point::new(0.3167, 0.25997),
    ),
    PathEl::CurveTo(
        Point::new(0.32157, 0.26368),
        Point::new(0.33292, 0.27235),
        Point::new(0.33292, 0.27235),
    ),
    PathEl::CurveTo(
        Point::new(0.33292, 0.27235),
        Point::new(0.32276, 0.22407),
        Point::new(0.32482, 0.21343),
    ),
    PathEl::CurveTo(
        Point::new(0.32688, 0.20276),
        Point::new(0.31775, 0.16152),
        Point::new(0.35957, 0.16222),
    ),
    PathEl::CurveTo(
        Point::new(0.35957, 0.16222),
        Point::new(0.37522, 0.16289),
        Point::new(0.37405, 0.17447),
    ),
    PathEl::CurveTo(
        Point::new(0.3729, 0.18606),
        Point::new(0.38453, 0.20222),
        Point::new(0.38546, 0.21039),
    ),
    PathEl::CurveTo(
        Point::new(0.38639, 0.2186),
        Point::new(0.39049, 0.23274),
        Point::new(0.39104, 0.23952),
    ),
    PathEl::CurveTo(
        Point::new(0.39158, 0.24629),
        Point::new(0.39209, 0.25742),
        Point::new(0.39575, 0.26735),
    ),
    PathEl::CurveTo(
        Point::new(0.39942, 0.27728),
        Point::new(0.40257, 0.30372),
        Point::new(0.40525, 0.31197),
    ),
    PathEl::CurveTo(
        Point::new(0.4079, 0.32022),
        Point::new(0.42387, 0.34039),
        Point::new(0.43129, 0.35356),
    ),
    PathEl::CurveTo(
        Point::new(0.4387, 0.36668),
        Point::new(0.44345, 0.38897),
        Point::new(0.44414, 0.39947),
    ),
    PathEl::CurveTo(
        Point::new(0.44484, 0.41002),
        Point::new(0.44946, 0.41602),
        Point::new(0.45352, 0.42785),
    ),
    PathEl::CurveTo(
        Point::new(0.45757, 0.43968),
        Point::new(0.44969, 0.46606),
        Point::new(0.45351, 0.48022),
    ),
    PathEl::CurveTo(
        Point::new(0.45734, 0.49435),
        Point::new(0.46647, 0.54247),
        Point::new(0.47379, 0.55677),
    ),
    PathEl::CurveTo(
        Point::new(0.48108, 0.57106),
        Point::new(0.50934, 0.67239),
        Point::new(0.51502, 0.68543),
    ),
    PathEl::CurveTo(
        Point::new(0.52069, 0.69852),
        Point::new(0.54895, 0.79985),
        Point::new(0.5515, 0.82672),
    ),
    PathEl::ClosePath,
];
