// Copyright 2025 the Hand Shadows Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture-driven hand shadow overlay.
//!
//! [`ShadowHandView`] receives the twelve lifecycle calls from a touch
//! dispatcher, keeps one session per independent key, and recomputes where
//! each hand is drawn after every accepted call. A renderer polls the
//! `current_*` queries once per frame; the view itself never draws.

use hand_shadows_geometry::{HandShadow, HandType};
use kurbo::{BezPath, Point, Rect};
use tracing::{debug, trace};

use crate::placement::{HandModels, HandPlacement, place};
use crate::session::PerHand;
use crate::tracker::{SessionSlot, SessionTracker, bezel_hand};
use crate::{GestureKind, GestureSession, ShadowConfig, ShadowError, Touch};

fn log_rejection(kind: GestureKind, err: &ShadowError) {
    debug!(gesture = %kind, error = %err, "gesture call rejected");
}

/// Hand shadows following live touch gestures.
///
/// `T` identifies the object a pan or pinch manipulates. It is compared for
/// equality only.
#[derive(Clone, Debug)]
pub struct ShadowHandView<T> {
    bounds: Rect,
    config: ShadowConfig,
    tracker: SessionTracker<T>,
    models: PerHand<Option<HandModels>>,
    placements: PerHand<Option<HandPlacement>>,
}

impl<T: PartialEq> ShadowHandView<T> {
    /// Creates an idle view covering `bounds`, with the default configuration.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self::with_config(bounds, ShadowConfig::default())
    }

    /// Creates an idle view covering `bounds`.
    ///
    /// A pinch epsilon that is not positive and finite, or a bezel overshoot
    /// that is not finite, is replaced with its default.
    #[must_use]
    pub fn with_config(bounds: Rect, config: ShadowConfig) -> Self {
        let config = config.checked();
        Self {
            bounds,
            tracker: SessionTracker::new(config.pinch_scale_epsilon),
            config,
            models: PerHand::default(),
            placements: PerHand::default(),
        }
    }

    /// The view's extent, in the coordinate space touches are reported in.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Resizes the view and re-places any live hands.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        for hand in HandType::BOTH {
            self.refresh(hand);
        }
    }

    /// The configuration the view was built with.
    #[must_use]
    pub fn config(&self) -> &ShadowConfig {
        &self.config
    }

    /// Read access to every live session.
    #[must_use]
    pub fn tracker(&self) -> &SessionTracker<T> {
        &self.tracker
    }

    /// Recomputes the placement of `hand` from its most recent live session.
    fn refresh(&mut self, hand: HandType) {
        let (bounds, overshoot) = (self.bounds, self.config.bezel_overshoot);
        let placement = match self.tracker.most_recent_slot(hand, self.config.pinch_hand) {
            Some(slot) => {
                let geometry = &self.config.geometry;
                let models = self
                    .models
                    .get_mut(hand)
                    .get_or_insert_with(|| HandModels::new(hand, geometry));
                self.tracker
                    .session_mut(slot)
                    .map(|session| place(session, models, bounds, overshoot))
            }
            None => None,
        };
        *self.placements.get_mut(hand) = placement;
    }

    // Bezel

    /// A swipe enters from the right (`true`) or left screen edge.
    ///
    /// One or two touches; a single touch gets a second finger just past the
    /// entry edge.
    pub fn start_bezel(&mut self, from_right: bool, touches: &[Touch]) -> Result<(), ShadowError> {
        let kind = GestureKind::Bezel;
        let hand = bezel_hand(from_right);
        self.tracker
            .start_bezel(from_right, touches)
            .inspect_err(|err| log_rejection(kind, err))?;
        debug!(gesture = %kind, %hand, touches = touches.len(), "gesture started");
        self.refresh(hand);
        Ok(())
    }

    /// The bezel swipe moved. The touches must be the ones it started with.
    pub fn continue_bezel(
        &mut self,
        from_right: bool,
        touches: &[Touch],
    ) -> Result<(), ShadowError> {
        let kind = GestureKind::Bezel;
        let hand = bezel_hand(from_right);
        let anchor = self
            .tracker
            .continue_bezel(from_right, touches)
            .inspect_err(|err| log_rejection(kind, err))?
            .anchor_point();
        trace!(gesture = %kind, %hand, x = anchor.x, y = anchor.y, "gesture moved");
        self.refresh(hand);
        Ok(())
    }

    /// The bezel swipe ended.
    ///
    /// `touches` may be stale; the tracked session decides what ends.
    pub fn end_bezel(&mut self, from_right: bool, touches: &[Touch]) -> Result<(), ShadowError> {
        let kind = GestureKind::Bezel;
        let hand = bezel_hand(from_right);
        self.tracker
            .end_bezel(from_right)
            .inspect_err(|err| log_rejection(kind, err))?;
        debug!(gesture = %kind, %hand, touches = touches.len(), "gesture ended");
        self.refresh(hand);
        Ok(())
    }

    // Pan

    /// `hand` starts dragging `target`.
    pub fn start_pan(
        &mut self,
        target: T,
        touches: &[Touch],
        hand: HandType,
    ) -> Result<(), ShadowError> {
        let kind = GestureKind::Pan;
        self.tracker
            .start_pan(target, touches, hand)
            .inspect_err(|err| log_rejection(kind, err))?;
        debug!(gesture = %kind, %hand, touches = touches.len(), "gesture started");
        self.refresh(hand);
        Ok(())
    }

    /// The pan moved. Touches may join or leave between calls.
    pub fn continue_pan(
        &mut self,
        target: &T,
        touches: &[Touch],
        hand: HandType,
    ) -> Result<(), ShadowError> {
        let kind = GestureKind::Pan;
        let anchor = self
            .tracker
            .continue_pan(target, touches, hand)
            .inspect_err(|err| log_rejection(kind, err))?
            .anchor_point();
        trace!(gesture = %kind, %hand, x = anchor.x, y = anchor.y, "gesture moved");
        self.refresh(hand);
        Ok(())
    }

    /// `hand` stopped dragging `target`.
    pub fn end_pan(&mut self, target: &T, hand: HandType) -> Result<(), ShadowError> {
        let kind = GestureKind::Pan;
        let session = self
            .tracker
            .end_pan(target, hand)
            .inspect_err(|err| log_rejection(kind, err))?;
        debug!(gesture = %kind, %hand, touches = session.touches().len(), "gesture ended");
        self.refresh(hand);
        Ok(())
    }

    // Pinch

    /// Two touches start scaling `target`.
    pub fn start_pinch(&mut self, target: T, touches: &[Touch]) -> Result<(), ShadowError> {
        let kind = GestureKind::Pinch;
        let hand = self.config.pinch_hand;
        self.tracker
            .start_pinch(target, touches)
            .inspect_err(|err| log_rejection(kind, err))?;
        debug!(gesture = %kind, %hand, touches = touches.len(), "gesture started");
        self.refresh(hand);
        Ok(())
    }

    /// The pinch moved.
    pub fn continue_pinch(&mut self, target: &T, touches: &[Touch]) -> Result<(), ShadowError> {
        let kind = GestureKind::Pinch;
        let hand = self.config.pinch_hand;
        let scale = self
            .tracker
            .continue_pinch(target, touches)
            .inspect_err(|err| log_rejection(kind, err))?
            .scale_factor();
        trace!(gesture = %kind, %hand, scale, "gesture moved");
        self.refresh(hand);
        Ok(())
    }

    /// The pinch of `target` ended.
    pub fn end_pinch(&mut self, target: &T) -> Result<(), ShadowError> {
        let kind = GestureKind::Pinch;
        let hand = self.config.pinch_hand;
        let session = self
            .tracker
            .end_pinch(target)
            .inspect_err(|err| log_rejection(kind, err))?;
        debug!(gesture = %kind, %hand, scale = session.scale_factor(), "gesture ended");
        self.refresh(hand);
        Ok(())
    }

    // Draw

    /// A stroke starts at `point`. No hand is drawn for strokes.
    pub fn start_draw(&mut self, point: Point) -> Result<(), ShadowError> {
        let kind = GestureKind::Draw;
        self.tracker
            .start_draw(point)
            .inspect_err(|err| log_rejection(kind, err))?;
        debug!(gesture = %kind, x = point.x, y = point.y, "gesture started");
        Ok(())
    }

    /// The stroke moved to `point`.
    pub fn continue_draw(&mut self, point: Point) -> Result<(), ShadowError> {
        let kind = GestureKind::Draw;
        self.tracker
            .continue_draw(point)
            .inspect_err(|err| log_rejection(kind, err))?;
        trace!(gesture = %kind, x = point.x, y = point.y, "gesture moved");
        Ok(())
    }

    /// The stroke ended.
    pub fn end_draw(&mut self) -> Result<(), ShadowError> {
        let kind = GestureKind::Draw;
        let last = self
            .tracker
            .end_draw()
            .inspect_err(|err| log_rejection(kind, err))?;
        debug!(gesture = %kind, x = last.x, y = last.y, "gesture ended");
        Ok(())
    }
}

impl<T> ShadowHandView<T> {
    /// Where `hand` is currently drawn, if any session animates it.
    #[must_use]
    pub fn placement(&self, hand: HandType) -> Option<&HandPlacement> {
        self.placements.get(hand).as_ref()
    }

    /// The outline of `hand` in view coordinates.
    #[must_use]
    pub fn current_transformed_path(&self, hand: HandType) -> Option<BezPath> {
        self.placement(hand).map(HandPlacement::transformed_path)
    }

    /// Bounding box of [`current_transformed_path`](Self::current_transformed_path).
    #[must_use]
    pub fn current_bounds(&self, hand: HandType) -> Option<Rect> {
        self.placement(hand).map(HandPlacement::bounds)
    }

    /// Current point of the live stroke.
    #[must_use]
    pub fn current_draw_point(&self) -> Option<Point> {
        self.tracker.draw_point()
    }

    /// Returns `true` while any session animates `hand`.
    #[must_use]
    pub fn is_active(&self, hand: HandType) -> bool {
        self.placements.get(hand).is_some()
    }

    /// Scale factor of the live pinch.
    #[must_use]
    pub fn pinch_scale(&self) -> Option<f64> {
        self.tracker.pinch().map(|(_, s)| s.scale_factor())
    }

    /// The session currently driving `hand`.
    #[must_use]
    pub fn driving_session(&self, hand: HandType) -> Option<&GestureSession> {
        self.tracker
            .most_recent_slot(hand, self.config.pinch_hand)
            .and_then(|slot| self.tracker.session(slot))
    }

    /// The pointing model of `hand`, once that hand has been used.
    #[must_use]
    pub fn hand_shadow(&self, hand: HandType) -> Option<&HandShadow> {
        self.models.get(hand).as_ref().map(HandModels::pointer)
    }

    /// The slot of every live touch-driven session.
    pub fn live_sessions(&self) -> impl Iterator<Item = SessionSlot> + '_ {
        self.tracker.live_slots()
    }
}
