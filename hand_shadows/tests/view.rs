// Copyright 2025 the Hand Shadows Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `hand_shadows` crate.
//!
//! These drive `ShadowHandView` through whole gestures the way a touch
//! dispatcher would, checking session bookkeeping, usage errors, and where
//! the hands end up.

use hand_shadows::{
    DEFAULT_BEZEL_OVERSHOOT, DEFAULT_PINCH_SCALE_EPSILON, GestureKind, HandGeometry, HandType,
    InputProblem, PointerAsset, Posture, SessionSlot, ShadowConfig, ShadowError, ShadowHandView,
    Touch, TouchId,
};
use kurbo::{BezPath, Point, Rect, Shape, Size};

const SCREEN: Rect = Rect::new(0.0, 0.0, 1024.0, 768.0);

fn view() -> ShadowHandView<&'static str> {
    ShadowHandView::new(SCREEN)
}

fn assert_rect_near(got: Rect, want: Rect) {
    for (a, b) in [
        (got.x0, want.x0),
        (got.y0, want.y0),
        (got.x1, want.x1),
        (got.y1, want.y1),
    ] {
        assert!((a - b).abs() < 1e-9, "{got:?} vs {want:?}");
    }
}

#[test]
fn fingertip_anchor_lies_inside_composed_bounds() {
    let mut view = view();
    view.start_pan("a", &[Touch::new(1, (10.0, 10.0))], HandType::Left)
        .unwrap();
    view.start_pan("b", &[Touch::new(2, (90.0, 10.0))], HandType::Right)
        .unwrap();
    for hand in HandType::BOTH {
        let shadow = view.hand_shadow(hand).unwrap();
        let bounds = shadow.composed_path().bounding_box();
        assert!(bounds.contains(shadow.fingertip_anchor()));
    }
}

#[test]
fn ended_pan_cannot_continue() {
    let mut view = view();
    view.start_pan("t", &[Touch::new(1, (20.0, 20.0))], HandType::Left)
        .unwrap();
    view.end_pan(&"t", HandType::Left).unwrap();

    assert!(view.tracker().pan(HandType::Left).is_none());
    assert!(!view.is_active(HandType::Left));
    assert_eq!(
        view.continue_pan(&"t", &[Touch::new(1, (25.0, 20.0))], HandType::Left),
        Err(ShadowError::InvalidSessionState {
            kind: GestureKind::Pan
        })
    );
}

#[test]
fn second_bezel_start_is_duplicate() {
    let mut view = view();
    view.start_bezel(true, &[Touch::new(1, (1000.0, 300.0))])
        .unwrap();
    assert_eq!(
        view.start_bezel(true, &[Touch::new(2, (1000.0, 500.0))]),
        Err(ShadowError::DuplicateSession {
            kind: GestureKind::Bezel
        })
    );
    // The live bezel is untouched.
    let session = view.tracker().bezel(HandType::Right).unwrap();
    assert!(session.owns(TouchId(1)));
    assert_eq!(session.anchor_point(), Point::new(1000.0, 300.0));
}

#[test]
fn pinch_scale_follows_spread() {
    let mut view = view();
    view.start_pinch(
        "photo",
        &[Touch::new(1, (100.0, 100.0)), Touch::new(2, (200.0, 100.0))],
    )
    .unwrap();
    assert_eq!(view.pinch_scale(), Some(1.0));

    view.continue_pinch(
        &"photo",
        &[Touch::new(1, (100.0, 100.0)), Touch::new(2, (150.0, 100.0))],
    )
    .unwrap();
    assert_eq!(view.pinch_scale(), Some(0.5));
    assert_eq!(
        view.placement(HandType::Right).map(|p| p.posture()),
        Some(Posture::Pinch)
    );
}

#[test]
fn coincident_pinch_start_uses_epsilon_denominator() {
    let config = ShadowConfig::default().with_pinch_scale_epsilon(0.5);
    let mut view = ShadowHandView::with_config(SCREEN, config);
    view.start_pinch(
        7_u8,
        &[Touch::new(1, (300.0, 300.0)), Touch::new(2, (300.0, 300.0))],
    )
    .unwrap();
    view.continue_pinch(
        &7,
        &[Touch::new(1, (300.0, 300.0)), Touch::new(2, (303.0, 304.0))],
    )
    .unwrap();
    let scale = view.pinch_scale().unwrap();
    assert!(scale.is_finite());
    assert_eq!(scale, 10.0);
}

#[test]
fn single_touch_pan_places_fingertip_exactly() {
    let mut view = view();
    view.start_pan("targetA", &[Touch::new(1, (50.0, 50.0))], HandType::Right)
        .unwrap();
    view.continue_pan(&"targetA", &[Touch::new(1, (80.0, 60.0))], HandType::Right)
        .unwrap();

    let placement = view.placement(HandType::Right).unwrap();
    assert_eq!(placement.posture(), Posture::Pointing);
    assert_eq!(placement.transform() * Point::ORIGIN, Point::new(80.0, 60.0));
    assert_eq!(placement.fingertip(), Point::new(80.0, 60.0));

    // Translation only: the drawn outline is the anchored outline shifted.
    let shifted = placement.anchored_path().bounding_box() + kurbo::Vec2::new(80.0, 60.0);
    let drawn = view.current_bounds(HandType::Right).unwrap();
    for (a, b) in [
        (drawn.x0, shifted.x0),
        (drawn.y0, shifted.y0),
        (drawn.x1, shifted.x1),
        (drawn.y1, shifted.y1),
    ] {
        assert!((a - b).abs() < 1e-9);
    }
}

#[test]
fn independent_keys_coexist() {
    let mut view = view();
    view.start_pan("targetA", &[Touch::new(1, (100.0, 400.0))], HandType::Left)
        .unwrap();
    view.start_bezel(true, &[Touch::new(2, (1010.0, 300.0))])
        .unwrap();
    assert!(view.is_active(HandType::Left));
    assert!(view.is_active(HandType::Right));

    let right_before = view.current_transformed_path(HandType::Right);
    view.end_pan(&"targetA", HandType::Left).unwrap();

    assert!(!view.is_active(HandType::Left));
    assert!(view.tracker().bezel(HandType::Right).is_some());
    assert_eq!(view.current_transformed_path(HandType::Right), right_before);

    view.continue_bezel(true, &[Touch::new(2, (980.0, 310.0))])
        .unwrap();
    assert_eq!(
        view.placement(HandType::Right).map(|p| p.fingertip()),
        Some(Point::new(980.0, 310.0))
    );
}

#[test]
fn two_touch_pan_switches_to_two_finger_pose() {
    let mut view = view();
    view.start_pan("map", &[Touch::new(1, (500.0, 500.0))], HandType::Right)
        .unwrap();
    assert_eq!(
        view.placement(HandType::Right).map(|p| p.posture()),
        Some(Posture::Pointing)
    );

    let both = [Touch::new(1, (500.0, 500.0)), Touch::new(2, (420.0, 520.0))];
    view.continue_pan(&"map", &both, HandType::Right).unwrap();
    let placement = view.placement(HandType::Right).unwrap();
    assert_eq!(placement.posture(), Posture::TwoFinger);
    assert_eq!(placement.fingertip(), Point::new(420.0, 520.0));

    view.continue_pan(&"map", &[Touch::new(2, (430.0, 520.0))], HandType::Right)
        .unwrap();
    assert_eq!(
        view.placement(HandType::Right).map(|p| p.posture()),
        Some(Posture::Pointing)
    );
}

#[test]
fn empty_and_malformed_touch_sets_are_rejected() {
    let mut view = view();
    assert_eq!(
        view.start_pan("p", &[], HandType::Left),
        Err(ShadowError::InvalidGestureInput {
            kind: GestureKind::Pan,
            problem: InputProblem::Empty
        })
    );
    assert_eq!(
        view.start_pinch("p", &[Touch::new(1, (0.0, 0.0))]),
        Err(ShadowError::InvalidGestureInput {
            kind: GestureKind::Pinch,
            problem: InputProblem::WrongArity {
                expected: 2,
                found: 1
            }
        })
    );
    assert!(view.tracker().is_idle());
}

#[test]
fn touch_drives_only_one_gesture() {
    let mut view = view();
    view.start_bezel(false, &[Touch::new(5, (5.0, 300.0))])
        .unwrap();
    assert_eq!(
        view.start_pinch(
            "doc",
            &[Touch::new(5, (5.0, 300.0)), Touch::new(6, (50.0, 300.0))]
        ),
        Err(ShadowError::InvalidGestureInput {
            kind: GestureKind::Pinch,
            problem: InputProblem::TouchInUse(TouchId(5))
        })
    );
}

#[test]
fn end_tolerates_stale_touches() {
    let mut view = view();
    view.start_bezel(false, &[Touch::new(1, (10.0, 200.0))])
        .unwrap();
    view.end_bezel(false, &[Touch::new(99, (500.0, 500.0))])
        .unwrap();
    assert!(view.tracker().is_idle());
    assert!(view.current_bounds(HandType::Left).is_none());
}

#[test]
fn draw_tracks_point_without_a_hand() {
    let mut view = view();
    view.start_draw(Point::new(10.0, 10.0)).unwrap();
    view.continue_draw(Point::new(12.0, 14.0)).unwrap();
    assert_eq!(view.current_draw_point(), Some(Point::new(12.0, 14.0)));
    assert!(!view.is_active(HandType::Left));
    assert!(!view.is_active(HandType::Right));

    view.end_draw().unwrap();
    assert_eq!(view.current_draw_point(), None);
    assert_eq!(
        view.end_draw(),
        Err(ShadowError::InvalidSessionState {
            kind: GestureKind::Draw
        })
    );
}

#[test]
fn pinch_hand_is_configurable() {
    let config = ShadowConfig::default().with_pinch_hand(HandType::Left);
    let mut view = ShadowHandView::with_config(SCREEN, config);
    view.start_pinch(
        1_u32,
        &[Touch::new(1, (400.0, 200.0)), Touch::new(2, (300.0, 320.0))],
    )
    .unwrap();
    assert!(view.is_active(HandType::Left));
    assert!(!view.is_active(HandType::Right));
    assert_eq!(
        view.placement(HandType::Left).map(|p| p.fingertip()),
        Some(Point::new(400.0, 200.0))
    );
    view.end_pinch(&1).unwrap();
    assert!(!view.is_active(HandType::Left));
}

#[test]
fn raw_handedness_converts_into_view_errors() {
    fn pan_with_raw_hand(
        view: &mut ShadowHandView<u8>,
        raw: u8,
    ) -> Result<(), ShadowError> {
        let hand = HandType::try_from(raw)?;
        view.start_pan(0, &[Touch::new(1, (1.0, 1.0))], hand)
    }

    let mut view = ShadowHandView::new(SCREEN);
    assert!(matches!(
        pan_with_raw_hand(&mut view, 3),
        Err(ShadowError::InvalidHandedness(_))
    ));
    assert_eq!(pan_with_raw_hand(&mut view, 1), Ok(()));
    assert!(view.is_active(HandType::Right));
}

#[test]
fn out_of_range_config_fields_fall_back_to_defaults() {
    let config = ShadowConfig {
        pinch_scale_epsilon: 0.0,
        bezel_overshoot: f64::NAN,
        ..ShadowConfig::default()
    };
    let mut view = ShadowHandView::with_config(SCREEN, config);
    assert_eq!(view.config().pinch_scale_epsilon, DEFAULT_PINCH_SCALE_EPSILON);
    assert_eq!(view.config().bezel_overshoot, DEFAULT_BEZEL_OVERSHOOT);

    let together = [Touch::new(1, (300.0, 300.0)), Touch::new(2, (300.0, 300.0))];
    view.start_pinch(0_u8, &together).unwrap();
    view.continue_pinch(&0, &together).unwrap();
    assert_eq!(view.pinch_scale(), Some(DEFAULT_PINCH_SCALE_EPSILON));

    let apart = [Touch::new(1, (300.0, 300.0)), Touch::new(2, (310.0, 300.0))];
    view.continue_pinch(&0, &apart).unwrap();
    let scale = view.pinch_scale().unwrap();
    assert!(scale.is_finite() && scale > 0.0);
    assert_eq!(scale, 10.0 / DEFAULT_PINCH_SCALE_EPSILON);

    view.start_bezel(false, &[Touch::new(3, (20.0, 200.0))])
        .unwrap();
    let bounds = view.current_bounds(HandType::Left).unwrap();
    assert!(bounds.x0.is_finite() && bounds.y0.is_finite());
    assert!(bounds.x1.is_finite() && bounds.y1.is_finite());
}

#[test]
fn custom_pointer_outline_is_placed_and_mirrored() {
    // A 100 x 200 block in the top-left of a 200 x 300 canvas, drawn for the
    // right hand, with the fingertip near its top edge.
    let mut outline = BezPath::new();
    outline.move_to((0.0, 0.0));
    outline.line_to((100.0, 0.0));
    outline.line_to((100.0, 200.0));
    outline.line_to((0.0, 200.0));
    outline.close_path();
    let pointer = PointerAsset::new(
        Size::new(200.0, 300.0),
        outline,
        Point::new(30.0, 10.0),
        HandType::Right,
    )
    .unwrap();
    let geometry = HandGeometry {
        pointer,
        ..HandGeometry::default()
    };
    let mut view =
        ShadowHandView::with_config(SCREEN, ShadowConfig::default().with_geometry(geometry));

    view.start_pan("l", &[Touch::new(1, (500.0, 500.0))], HandType::Left)
        .unwrap();
    view.start_pan("r", &[Touch::new(2, (500.0, 500.0))], HandType::Right)
        .unwrap();

    // The left hand mirrors the block to x in [100, 200] and the tip to (170, 10).
    let left = view.hand_shadow(HandType::Left).unwrap();
    assert_eq!(left.fingertip_anchor(), Point::new(170.0, 10.0));
    assert_rect_near(
        view.current_bounds(HandType::Left).unwrap(),
        Rect::new(430.0, 490.0, 530.0, 690.0),
    );
    assert_rect_near(
        view.current_bounds(HandType::Right).unwrap(),
        Rect::new(470.0, 490.0, 570.0, 690.0),
    );
}

#[test]
fn driving_session_tracks_latest_gesture_per_hand() {
    let mut view = view();
    view.start_bezel(true, &[Touch::new(1, (1000.0, 300.0))])
        .unwrap();
    view.start_pan("doc", &[Touch::new(2, (100.0, 400.0))], HandType::Left)
        .unwrap();

    let live: Vec<SessionSlot> = view.live_sessions().collect();
    assert_eq!(
        live,
        [
            SessionSlot::Bezel(HandType::Right),
            SessionSlot::Pan(HandType::Left)
        ]
    );
    assert_eq!(
        view.driving_session(HandType::Right).map(|s| s.kind()),
        Some(GestureKind::Bezel)
    );
    assert_eq!(
        view.driving_session(HandType::Left).map(|s| s.kind()),
        Some(GestureKind::Pan)
    );

    let pinch = [Touch::new(3, (500.0, 300.0)), Touch::new(4, (560.0, 380.0))];
    view.start_pinch("photo", &pinch).unwrap();
    assert_eq!(
        view.driving_session(HandType::Right).map(|s| s.kind()),
        Some(GestureKind::Pinch)
    );
    assert_eq!(view.live_sessions().count(), 3);

    view.end_pinch(&"photo").unwrap();
    view.end_bezel(true, &[]).unwrap();
    assert!(view.driving_session(HandType::Right).is_none());
    assert_eq!(
        view.live_sessions().collect::<Vec<_>>(),
        [SessionSlot::Pan(HandType::Left)]
    );
}
