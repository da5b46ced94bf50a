// Copyright 2025 the Hand Shadows Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit-space outlines of a hand resting its index and middle fingers on the
//! surface, fully spread ("open") and together ("closed").
//!
//! Authored for the left hand. Both outlines share one element structure.

use kurbo::{PathEl, Point};

pub(crate) const TWO_FINGER_OPEN: &[PathEl] = &[
    PathEl::MoveTo(Point::new(0.61863, 0.81132)),
    PathEl::LineTo(Point::new(0.076, 0.81132)),
    PathEl::CurveTo(
        Point::new(0.076, 0.81132),
        Point::new(0.16788, 0.6799),
        Point::new(0.18222, 0.66361),
    ),
    PathEl::CurveTo(
        Point::new(0.19658, 0.64732),
        Point::new(0.23103, 0.59361),
        Point::new(0.23677, 0.58495),
    ),
    PathEl::CurveTo(
        Point::new(0.24252, 0.57632),
        Point::new(0.25688, 0.5389),
        Point::new(0.25113, 0.5322),
    ),
    PathEl::CurveTo(
        Point::new(0.24539, 0.52549),
        Point::new(0.23104, 0.4987),
        Point::new(0.20806, 0.48815),
    ),
    PathEl::CurveTo(
        Point::new(0.18509, 0.47757),
        Point::new(0.14203, 0.44882),
        Point::new(0.13342, 0.41715),
    ),
    PathEl::CurveTo(
        Point::new(0.1248, 0.38549),
        Point::new(0.11045, 0.37878),
        Point::new(0.10758, 0.37207),
    ),
    PathEl::CurveTo(
        Point::new(0.10471, 0.36536),
        Point::new(0.11333, 0.36057),
        Point::new(0.11333, 0.35386),
    ),
    PathEl::CurveTo(
        Point::new(0.11333, 0.34715),
        Point::new(0.0875, 0.30303),
        Point::new(0.10184, 0.2934),
    ),
    PathEl::CurveTo(
        Point::new(0.11618, 0.28382),
        Point::new(0.15064, 0.26707),
        Point::new(0.20806, 0.27953),
    ),
    PathEl::CurveTo(
        Point::new(0.20806, 0.27953),
        Point::new(0.17649, 0.2454),
        Point::new(0.25113, 0.2387),
    ),
    PathEl::CurveTo(
        Point::new(0.32579, 0.23199),
        Point::new(0.35449, 0.2627),
        Point::new(0.35449, 0.2627),
    ),
    PathEl::CurveTo(
        Point::new(0.35449, 0.2627),
        Point::new(0.32155, 0.21378),
        Point::new(0.30431, 0.1984),
    ),
    PathEl::CurveTo(
        Point::new(0.28709, 0.18307),
        Point::new(0.27136, 0.1447),
        Point::new(0.26849, 0.13224),
    ),
    PathEl::CurveTo(
        Point::new(0.26563, 0.11978),
        Point::new(0.19386, 0.04303),
        Point::new(0.27424, 0.03824),
    ),
    PathEl::CurveTo(
        Point::new(0.35464, 0.03345),
        Point::new(0.37474, 0.09578),
        Point::new(0.37474, 0.09578),
    ),
    PathEl::CurveTo(
        Point::new(0.37474, 0.09578),
        Point::new(0.43926, 0.16774),
        Point::new(0.43926, 0.17349),
    ),
    PathEl::CurveTo(
        Point::new(0.43926, 0.17924),
        Point::new(0.47506, 0.24732),
        Point::new(0.49517, 0.24828),
    ),
    PathEl::CurveTo(
        Point::new(0.51527, 0.24924),
        Point::new(0.59265, 0.25211),
        Point::new(0.62998, 0.21186),
    ),
    PathEl::CurveTo(
        Point::new(0.6673, 0.17157),
        Point::new(0.75314, 0.11303),
        Point::new(0.76463, 0.1044),
    ),
    PathEl::CurveTo(
        Point::new(0.77611, 0.09578),
        Point::new(0.79894, 0.06128),
        Point::new(0.86784, 0.06607),
    ),
    PathEl::CurveTo(
        Point::new(0.93674, 0.07086),
        Point::new(0.87372, 0.12074),
        Point::new(0.87085, 0.1284),
    ),
    PathEl::CurveTo(
        Point::new(0.86798, 0.13607),
        Point::new(0.81766, 0.18553),
        Point::new(0.81146, 0.19074),
    ),
    PathEl::CurveTo(
        Point::new(0.8054, 0.19583),
        Point::new(0.7563, 0.22911),
        Point::new(0.75343, 0.23678),
    ),
    PathEl::CurveTo(
        Point::new(0.75056, 0.24445),
        Point::new(0.68754, 0.30586),
        Point::new(0.70476, 0.32886),
    ),
    PathEl::CurveTo(
        Point::new(0.72198, 0.3519),
        Point::new(0.72198, 0.39215),
        Point::new(0.71338, 0.40465),
    ),
    PathEl::CurveTo(
        Point::new(0.70476, 0.41711),
        Point::new(0.69327, 0.45261),
        Point::new(0.69327, 0.45932),
    ),
    PathEl::CurveTo(
        Point::new(0.69327, 0.46603),
        Point::new(0.69327, 0.51111),
        Point::new(0.68754, 0.52261),
    ),
    PathEl::CurveTo(
        Point::new(0.68179, 0.53411),
        Point::new(0.64734, 0.6214),
        Point::new(0.63012, 0.64732),
    ),
    PathEl::CurveTo(
        Point::new(0.61289, 0.6732),
        Point::new(0.61863, 0.77582),
        Point::new(0.61863, 0.78449),
    ),
    PathEl::CurveTo(
        Point::new(0.61863, 0.79311),
        Point::new(0.61863, 0.81132),
        Point::new(0.61863, 0.81132),
    ),
    PathEl::ClosePath,
];

pub(crate) const TWO_FINGER_CLOSED: &[PathEl] = &[
    PathEl::MoveTo(Point::new(0.66734, 0.80639)),
    PathEl::LineTo(Point::new(0.12471, 0.80639)),
    PathEl::CurveTo(
        Point::new(0.12471, 0.80639),
        Point::new(0.21659, 0.67498),
        Point::new(0.23093, 0.65868),
    ),
    PathEl::CurveTo(
        Point::new(0.24529, 0.64239),
        Point::new(0.27973, 0.58868),
        Point::new(0.28548, 0.58002),
    ),
    PathEl::CurveTo(
        Point::new(0.29123, 0.57139),
        Point::new(0.30559, 0.52731),
        Point::new(0.29984, 0.5206),
    ),
    PathEl::CurveTo(
        Point::new(0.2941, 0.51389),
        Point::new(0.27975, 0.49377),
        Point::new(0.25677, 0.48323),
    ),
    PathEl::CurveTo(
        Point::new(0.2338, 0.47264),
        Point::new(0.19073, 0.44389),
        Point::new(0.18213, 0.41223),
    ),
    PathEl::CurveTo(
        Point::new(0.17351, 0.38056),
        Point::new(0.15916, 0.37385),
        Point::new(0.15629, 0.36714),
    ),
    PathEl::CurveTo(
        Point::new(0.15342, 0.36043),
        Point::new(0.16204, 0.35564),
        Point::new(0.16204, 0.34893),
    ),
    PathEl::CurveTo(
        Point::new(0.16204, 0.34223),
        Point::new(0.13621, 0.2981),
        Point::new(0.15055, 0.28848),
    ),
    PathEl::CurveTo(
        Point::new(0.16489, 0.27889),
        Point::new(0.19935, 0.26214),
        Point::new(0.25677, 0.2746),
    ),
    PathEl::CurveTo(
        Point::new(0.25677, 0.2746),
        Point::new(0.22519, 0.24048),
        Point::new(0.29984, 0.23377),
    ),
    PathEl::CurveTo(
        Point::new(0.3745, 0.22706),
        Point::new(0.40319, 0.25777),
        Point::new(0.40319, 0.25777),
    ),
    PathEl::CurveTo(
        Point::new(0.40319, 0.25777),
        Point::new(0.4346, 0.21097),
        Point::new(0.43513, 0.19348),
    ),
    PathEl::CurveTo(
        Point::new(0.43368, 0.17724),
        Point::new(0.45884, 0.14001),
        Point::new(0.45597, 0.12755),
    ),
    PathEl::CurveTo(
        Point::new(0.45311, 0.11509),
        Point::new(0.4468, 0.0358),
        Point::new(0.53184, 0.03464),
    ),
    PathEl::CurveTo(
        Point::new(0.60583, 0.03461),
        Point::new(0.5765, 0.09085),
        Point::new(0.5765, 0.09085),
    ),
    PathEl::CurveTo(
        Point::new(0.5765, 0.09085),
        Point::new(0.56803, 0.16215),
        Point::new(0.56803, 0.1679),
    ),
    PathEl::CurveTo(
        Point::new(0.56803, 0.17365),
        Point::new(0.53192, 0.24296),
        Point::new(0.55202, 0.24392),
    ),
    PathEl::CurveTo(
        Point::new(0.57213, 0.24488),
        Point::new(0.57794, 0.24728),
        Point::new(0.61527, 0.20703),
    ),
    PathEl::CurveTo(
        Point::new(0.63124, 0.16731),
        Point::new(0.64161, 0.10726),
        Point::new(0.64537, 0.09723),
    ),
    PathEl::CurveTo(
        Point::new(0.64913, 0.08721),
        Point::new(0.63836, 0.05435),
        Point::new(0.71147, 0.05276),
    ),
    PathEl::CurveTo(
        Point::new(0.77438, 0.05294),
        Point::new(0.75605, 0.10052),
        Point::new(0.75319, 0.10818),
    ),
    PathEl::CurveTo(
        Point::new(0.75032, 0.11585),
        Point::new(0.75295, 0.1708),
        Point::new(0.75008, 0.17559),
    ),
    PathEl::CurveTo(
        Point::new(0.74721, 0.18038),
        Point::new(0.74362, 0.22129),
        Point::new(0.74075, 0.22895),
    ),
    PathEl::CurveTo(
        Point::new(0.73788, 0.23662),
        Point::new(0.73625, 0.30093),
        Point::new(0.74349, 0.32393),
    ),
    PathEl::CurveTo(
        Point::new(0.76072, 0.34698),
        Point::new(0.76072, 0.38723),
        Point::new(0.76209, 0.39973),
    ),
    PathEl::CurveTo(
        Point::new(0.75347, 0.41218),
        Point::new(0.74198, 0.44768),
        Point::new(0.74198, 0.45439),
    ),
    PathEl::CurveTo(
        Point::new(0.74198, 0.4611),
        Point::new(0.74198, 0.50618),
        Point::new(0.73625, 0.51768),
    ),
    PathEl::CurveTo(
        Point::new(0.7305, 0.52918),
        Point::new(0.69605, 0.61648),
        Point::new(0.67883, 0.64239),
    ),
    PathEl::CurveTo(
        Point::new(0.6616, 0.66827),
        Point::new(0.66734, 0.77089),
        Point::new(0.66734, 0.77956),
    ),
    PathEl::CurveTo(
        Point::new(0.66734, 0.78818),
        Point::new(0.66734, 0.80639),
        Point::new(0.66734, 0.80639),
    ),
    PathEl::ClosePath,
];
