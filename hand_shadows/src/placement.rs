// Copyright 2025 the Hand Shadows Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning a live session into a positioned hand outline.

use core::f64::consts::{FRAC_PI_2, PI};

use hand_shadows_geometry::{
    FingerPose, HandGeometry, HandShadow, HandType, PinchShadow, TwoFingerShadow, distance,
};
use kurbo::{Affine, BezPath, Point, Rect, Shape};

use crate::{GestureKind, GestureSession};

/// Which silhouette a hand is drawn with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Posture {
    /// One extended index finger.
    Pointing,
    /// Index and middle finger resting on the surface.
    TwoFinger,
    /// Thumb and index finger pinching.
    Pinch,
}

/// A hand outline and the transform that puts it on screen.
///
/// The stored path is anchored: the index fingertip sits at the origin, so
/// `transform * Point::ORIGIN` is exactly the touch being tracked.
#[derive(Clone, Debug)]
pub struct HandPlacement {
    hand: HandType,
    gesture: GestureKind,
    posture: Posture,
    path: BezPath,
    transform: Affine,
    fingertip: Point,
    openness: f64,
}

impl HandPlacement {
    /// The hand being drawn.
    #[must_use]
    pub fn hand(&self) -> HandType {
        self.hand
    }

    /// The gesture this placement follows.
    #[must_use]
    pub fn gesture(&self) -> GestureKind {
        self.gesture
    }

    /// The silhouette in use.
    #[must_use]
    pub fn posture(&self) -> Posture {
        self.posture
    }

    /// Outline with the index fingertip at the origin.
    #[must_use]
    pub fn anchored_path(&self) -> &BezPath {
        &self.path
    }

    /// Maps the anchored outline into view coordinates.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// View location of the index fingertip.
    #[must_use]
    pub fn fingertip(&self) -> Point {
        self.fingertip
    }

    /// How far the fingers are spread, `0.0` closed to `1.0` open. Always
    /// `1.0` when pointing.
    #[must_use]
    pub fn openness(&self) -> f64 {
        self.openness
    }

    /// The outline in view coordinates.
    #[must_use]
    pub fn transformed_path(&self) -> BezPath {
        self.transform * self.path.clone()
    }

    /// Bounding box of [`transformed_path`](Self::transformed_path).
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.transformed_path().bounding_box()
    }
}

/// The three silhouettes of one hand.
#[derive(Clone, Debug)]
pub struct HandModels {
    pointer: HandShadow,
    pointer_path: BezPath,
    two_finger: TwoFingerShadow,
    pinch: PinchShadow,
}

impl HandModels {
    /// Builds every silhouette of `hand` from `geometry`.
    #[must_use]
    pub fn new(hand: HandType, geometry: &HandGeometry) -> Self {
        let pointer = HandShadow::from_asset(hand, &geometry.pointer);
        let pointer_path = pointer.anchored_path();
        Self {
            pointer,
            pointer_path,
            two_finger: TwoFingerShadow::from_asset(hand, &geometry.two_finger),
            pinch: PinchShadow::from_asset(hand, &geometry.pinch),
        }
    }

    /// The hand these models depict.
    #[must_use]
    pub fn hand(&self) -> HandType {
        self.pointer.hand()
    }

    /// The pointing silhouette.
    #[must_use]
    pub fn pointer(&self) -> &HandShadow {
        &self.pointer
    }

    /// The two-finger silhouette.
    #[must_use]
    pub fn two_finger(&self) -> &TwoFingerShadow {
        &self.two_finger
    }

    /// The pinching silhouette.
    #[must_use]
    pub fn pinch(&self) -> &PinchShadow {
        &self.pinch
    }
}

/// Angle that turns a levelled pose of `hand` onto the two touches.
fn finger_angle(hand: HandType, index: Point, second: Point) -> f64 {
    let mut direction = second - index;
    if hand.is_left() {
        direction = -direction;
    }
    direction.atan2()
}

/// Assigns the two touches to index and second finger, keeping the hand from
/// flipping over between frames, and returns them with the placement angle.
///
/// `hint` holds the angle accepted on the previous frame and is updated.
pub(crate) fn orient(
    hand: HandType,
    index: Point,
    second: Point,
    hint: &mut Option<f64>,
) -> (Point, Point, f64) {
    let theta = finger_angle(hand, index, second);
    let swap = match *hint {
        None => hand.is_left() && theta < 0.0 && theta > -PI,
        Some(recent) => {
            let turn = (recent - theta).abs();
            turn > FRAC_PI_2 && turn < 3.0 * FRAC_PI_2
        }
    };
    let (index, second, theta) = if swap {
        (second, index, finger_angle(hand, second, index))
    } else {
        (index, second, theta)
    };
    *hint = Some(theta);
    (index, second, theta)
}

/// Where the off-screen finger of a one-touch bezel swipe sits.
pub(crate) fn bezel_phantom(hand: HandType, touch: Point, bounds: Rect, overshoot: f64) -> Point {
    match hand {
        HandType::Right => Point::new(bounds.x1 + overshoot, touch.y),
        HandType::Left => Point::new(bounds.x0 - overshoot, touch.y),
    }
}

fn posed(
    models: &HandModels,
    gesture: GestureKind,
    posture: Posture,
    pose: &FingerPose,
    index: Point,
    theta: f64,
) -> HandPlacement {
    HandPlacement {
        hand: models.hand(),
        gesture,
        posture,
        path: pose.anchored_path(),
        transform: Affine::translate(index.to_vec2()) * Affine::rotate(theta),
        fingertip: index,
        openness: pose.openness,
    }
}

/// Places `models` on the touches of `session`.
///
/// Two-finger placements record the finger assignment they settled on back
/// into the session.
pub(crate) fn place(
    session: &mut GestureSession,
    models: &HandModels,
    bounds: Rect,
    overshoot: f64,
) -> HandPlacement {
    let hand = models.hand();
    let gesture = session.kind();
    let index = session.anchor_point();
    let second = match (gesture, session.second_point()) {
        (GestureKind::Bezel, None) => Some(bezel_phantom(hand, index, bounds, overshoot)),
        (_, second) => second,
    };

    match (gesture, second) {
        (GestureKind::Pinch, Some(thumb)) => {
            let theta = finger_angle(hand, index, thumb);
            let pose = models.pinch.pose(distance(index, thumb));
            posed(models, gesture, Posture::Pinch, &pose, index, theta)
        }
        (_, Some(second)) => {
            let (index, second, theta) = orient(hand, index, second, &mut session.rotation_hint);
            if session.second_point().is_some() {
                session.set_fingers(index, Some(second));
            }
            let pose = models.two_finger.pose(distance(index, second));
            posed(models, gesture, Posture::TwoFinger, &pose, index, theta)
        }
        (_, None) => HandPlacement {
            hand,
            gesture,
            posture: Posture::Pointing,
            path: models.pointer_path.clone(),
            transform: Affine::translate(index.to_vec2()),
            fingertip: index,
            openness: 1.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Touch;

    const VIEW: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    fn models(hand: HandType) -> HandModels {
        HandModels::new(hand, &HandGeometry::default())
    }

    fn session(kind: GestureKind, hand: Option<HandType>, touches: &[Touch]) -> GestureSession {
        GestureSession::start(kind, hand, touches, 1)
    }

    #[test]
    fn pointing_is_translation_only() {
        let mut s = session(
            GestureKind::Pan,
            Some(HandType::Right),
            &[Touch::new(1, (80.0, 60.0))],
        );
        let placement = place(&mut s, &models(HandType::Right), VIEW, 15.0);
        assert_eq!(placement.posture(), Posture::Pointing);
        assert_eq!(placement.transform(), Affine::translate((80.0, 60.0)));
        assert_eq!(placement.transform() * Point::ORIGIN, Point::new(80.0, 60.0));
        assert!(placement.bounds().contains(Point::new(80.0, 60.0)));
    }

    #[test]
    fn two_touch_pan_tracks_index_exactly() {
        let touches = [Touch::new(1, (300.0, 200.0)), Touch::new(2, (180.0, 240.0))];
        let mut s = session(GestureKind::Pan, Some(HandType::Right), &touches);
        let placement = place(&mut s, &models(HandType::Right), VIEW, 15.0);
        assert_eq!(placement.posture(), Posture::TwoFinger);
        assert_eq!(placement.fingertip(), Point::new(180.0, 240.0));
        assert_eq!(
            placement.transform() * Point::ORIGIN,
            Point::new(180.0, 240.0)
        );
        assert!(s.rotation_hint().is_some());
    }

    #[test]
    fn single_touch_bezel_uses_off_screen_finger() {
        assert_eq!(
            bezel_phantom(HandType::Right, Point::new(700.0, 90.0), VIEW, 15.0),
            Point::new(815.0, 90.0)
        );
        assert_eq!(
            bezel_phantom(HandType::Left, Point::new(20.0, 90.0), VIEW, 15.0),
            Point::new(-15.0, 90.0)
        );

        let mut s = session(
            GestureKind::Bezel,
            Some(HandType::Right),
            &[Touch::new(1, (700.0, 90.0))],
        );
        let placement = place(&mut s, &models(HandType::Right), VIEW, 15.0);
        assert_eq!(placement.posture(), Posture::TwoFinger);
        assert_eq!(placement.fingertip(), Point::new(700.0, 90.0));
        // The off-screen finger is not reported as a touch.
        assert_eq!(s.second_point(), None);
    }

    #[test]
    fn pinch_uses_thumb_pose() {
        let touches = [Touch::new(1, (200.0, 100.0)), Touch::new(2, (260.0, 180.0))];
        let mut s = session(GestureKind::Pinch, None, &touches);
        let placement = place(&mut s, &models(HandType::Right), VIEW, 15.0);
        assert_eq!(placement.posture(), Posture::Pinch);
        assert_eq!(placement.fingertip(), Point::new(200.0, 100.0));
        assert!(placement.openness() >= 0.0 && placement.openness() <= 1.0);
    }

    #[test]
    fn orient_keeps_level_right_hand() {
        let mut hint = None;
        let (index, second, theta) = orient(
            HandType::Right,
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            &mut hint,
        );
        assert_eq!((index, second), (Point::new(0.0, 0.0), Point::new(100.0, 0.0)));
        assert_eq!(theta, 0.0);
        assert_eq!(hint, Some(0.0));
    }

    #[test]
    fn orient_swaps_fingers_instead_of_flipping() {
        let mut hint = Some(0.0);
        // Fingers crossed over: the raw angle is a half turn from the last one.
        let (index, second, theta) = orient(
            HandType::Right,
            Point::new(100.0, 0.0),
            Point::new(0.0, 1.0),
            &mut hint,
        );
        assert_eq!(index, Point::new(0.0, 1.0));
        assert_eq!(second, Point::new(100.0, 0.0));
        assert!(theta.abs() < FRAC_PI_2);
        assert_eq!(hint, Some(theta));
    }

    #[test]
    fn orient_swaps_upside_down_left_hand_on_first_frame() {
        let mut hint = None;
        // Negated finger vector points up the screen.
        let (index, second, theta) = orient(
            HandType::Left,
            Point::new(0.0, 0.0),
            Point::new(10.0, 100.0),
            &mut hint,
        );
        assert_eq!(index, Point::new(10.0, 100.0));
        assert_eq!(second, Point::new(0.0, 0.0));
        assert!(theta > 0.0);
    }

    #[test]
    fn models_share_handedness() {
        let m = models(HandType::Left);
        assert_eq!(m.hand(), HandType::Left);
        assert_eq!(m.two_finger().hand(), HandType::Left);
        assert_eq!(m.pinch().hand(), HandType::Left);
        assert_eq!(m.pointer().hand(), HandType::Left);
    }
}
