// Copyright 2025 the Hand Shadows Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hand_shadows_geometry::{HandGeometry, HandType};

/// Default lower bound for pinch distances and scale factors.
pub const DEFAULT_PINCH_SCALE_EPSILON: f64 = 1e-6;

/// Default distance a bezel's off-screen finger sits past the entry edge.
pub const DEFAULT_BEZEL_OVERSHOOT: f64 = 15.0;

/// `epsilon` if it is positive and finite, else [`DEFAULT_PINCH_SCALE_EPSILON`].
pub(crate) fn checked_pinch_scale_epsilon(epsilon: f64) -> f64 {
    if epsilon.is_finite() && epsilon > 0.0 {
        epsilon
    } else {
        DEFAULT_PINCH_SCALE_EPSILON
    }
}

/// `overshoot` if it is finite, else [`DEFAULT_BEZEL_OVERSHOOT`].
pub(crate) fn checked_bezel_overshoot(overshoot: f64) -> f64 {
    if overshoot.is_finite() {
        overshoot
    } else {
        DEFAULT_BEZEL_OVERSHOOT
    }
}

/// Tunables for a [`ShadowHandView`](crate::ShadowHandView).
///
/// Construct with [`ShadowConfig::default`] and adjust with the `with_*`
/// methods. Fields set directly are checked when the view is built: values
/// the builders would reject fall back to their defaults.
#[derive(Clone, Debug)]
pub struct ShadowConfig {
    /// Smallest distance used as a pinch denominator, and the smallest scale
    /// factor reported. Always positive and finite.
    pub pinch_scale_epsilon: f64,
    /// Which hand is drawn pinching.
    pub pinch_hand: HandType,
    /// How far outside the view the second finger of a one-touch bezel swipe
    /// is placed.
    pub bezel_overshoot: f64,
    /// Outlines the hand silhouettes are built from.
    pub geometry: HandGeometry,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            pinch_scale_epsilon: DEFAULT_PINCH_SCALE_EPSILON,
            pinch_hand: HandType::Right,
            bezel_overshoot: DEFAULT_BEZEL_OVERSHOOT,
            geometry: HandGeometry::default(),
        }
    }
}

impl ShadowConfig {
    /// Sets the pinch epsilon.
    ///
    /// Values that are not positive and finite fall back to
    /// [`DEFAULT_PINCH_SCALE_EPSILON`].
    #[must_use]
    pub fn with_pinch_scale_epsilon(mut self, epsilon: f64) -> Self {
        self.pinch_scale_epsilon = checked_pinch_scale_epsilon(epsilon);
        self
    }

    /// Sets which hand is drawn pinching.
    #[must_use]
    pub fn with_pinch_hand(mut self, hand: HandType) -> Self {
        self.pinch_hand = hand;
        self
    }

    /// Sets the off-screen distance of a one-touch bezel's second finger.
    ///
    /// Non-finite values fall back to [`DEFAULT_BEZEL_OVERSHOOT`].
    #[must_use]
    pub fn with_bezel_overshoot(mut self, overshoot: f64) -> Self {
        self.bezel_overshoot = checked_bezel_overshoot(overshoot);
        self
    }

    /// Replaces out-of-range fields with their defaults.
    pub(crate) fn checked(mut self) -> Self {
        self.pinch_scale_epsilon = checked_pinch_scale_epsilon(self.pinch_scale_epsilon);
        self.bezel_overshoot = checked_bezel_overshoot(self.bezel_overshoot);
        self
    }

    /// Replaces the hand outlines.
    #[must_use]
    pub fn with_geometry(mut self, geometry: HandGeometry) -> Self {
        self.geometry = geometry;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsilon_must_be_positive_and_finite() {
        let config = ShadowConfig::default().with_pinch_scale_epsilon(1e-3);
        assert_eq!(config.pinch_scale_epsilon, 1e-3);

        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = ShadowConfig::default().with_pinch_scale_epsilon(bad);
            assert_eq!(config.pinch_scale_epsilon, DEFAULT_PINCH_SCALE_EPSILON);
        }
    }

    #[test]
    fn builder_sets_fields() {
        let config = ShadowConfig::default()
            .with_pinch_hand(HandType::Left)
            .with_bezel_overshoot(40.0);
        assert_eq!(config.pinch_hand, HandType::Left);
        assert_eq!(config.bezel_overshoot, 40.0);

        let config = config.with_bezel_overshoot(f64::NAN);
        assert_eq!(config.bezel_overshoot, DEFAULT_BEZEL_OVERSHOOT);
    }

    #[test]
    fn fields_set_directly_are_checked() {
        let config = ShadowConfig {
            pinch_scale_epsilon: -2.0,
            bezel_overshoot: f64::INFINITY,
            ..ShadowConfig::default()
        }
        .checked();
        assert_eq!(config.pinch_scale_epsilon, DEFAULT_PINCH_SCALE_EPSILON);
        assert_eq!(config.bezel_overshoot, DEFAULT_BEZEL_OVERSHOOT);

        let config = ShadowConfig {
            pinch_scale_epsilon: 0.25,
            bezel_overshoot: -4.0,
            ..ShadowConfig::default()
        }
        .checked();
        assert_eq!(config.pinch_scale_epsilon, 0.25);
        assert_eq!(config.bezel_overshoot, -4.0);
    }
}
