// Copyright 2025 the Hand Shadows Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demultiplexes gesture lifecycle calls into independent sessions.
//!
//! ## Slots
//!
//! - Bezel: one per hand. `from_right` selects the right hand.
//! - Pan: one per hand, holding the panned target.
//! - Pinch: one, holding the pinched target.
//! - Draw: one, holding only the current point.
//!
//! A touch drives at most one live session. Calls are validated before any
//! state changes, so a rejected call is a no-op.

use hand_shadows_geometry::HandType;
use kurbo::Point;

use crate::config::checked_pinch_scale_epsilon;
use crate::session::PerHand;
use crate::touch::{check_touches, same_members};
use crate::{
    DEFAULT_PINCH_SCALE_EPSILON, GestureKind, GestureSession, InputProblem, ShadowError, Touch,
    TouchId,
};

/// Largest touch count a bezel swipe accepts.
const MAX_BEZEL_TOUCHES: usize = 2;
/// Exact touch count of a pinch.
const PINCH_TOUCHES: usize = 2;

/// Identifies one session slot in a [`SessionTracker`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SessionSlot {
    /// The bezel session drawn with this hand.
    Bezel(HandType),
    /// The pan session drawn with this hand.
    Pan(HandType),
    /// The pinch session.
    Pinch,
}

/// The hand a bezel swipe entering from the given edge is drawn with.
#[must_use]
pub fn bezel_hand(from_right: bool) -> HandType {
    if from_right {
        HandType::Right
    } else {
        HandType::Left
    }
}

/// Session state for every gesture kind, keyed by hand or target.
///
/// `T` is an opaque handle to the object being panned or pinched; it is only
/// compared for equality.
#[derive(Clone, Debug)]
pub struct SessionTracker<T> {
    bezel: PerHand<Option<GestureSession>>,
    pan: PerHand<Option<(T, GestureSession)>>,
    pinch: Option<(T, GestureSession)>,
    draw: Option<Point>,
    pinch_scale_epsilon: f64,
    revision: u64,
}

impl<T> Default for SessionTracker<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PINCH_SCALE_EPSILON)
    }
}

impl<T: PartialEq> SessionTracker<T> {
    fn next_revision(&mut self) -> u64 {
        self.revision += 1;
        self.revision
    }

    /// Rejects touches owned by any live session other than `except`.
    fn check_ownership(
        &self,
        kind: GestureKind,
        touches: &[Touch],
        except: Option<SessionSlot>,
    ) -> Result<(), ShadowError> {
        for touch in touches {
            if let Some(owner) = self.owner_of(touch.id)
                && Some(owner) != except
            {
                return Err(ShadowError::input(kind, InputProblem::TouchInUse(touch.id)));
            }
        }
        Ok(())
    }

    // Bezel

    /// Starts a bezel swipe entering from the right (`true`) or left edge.
    pub fn start_bezel(
        &mut self,
        from_right: bool,
        touches: &[Touch],
    ) -> Result<&GestureSession, ShadowError> {
        let kind = GestureKind::Bezel;
        let hand = bezel_hand(from_right);
        if self.bezel.get(hand).is_some() {
            return Err(ShadowError::DuplicateSession { kind });
        }
        check_touches(touches).map_err(|p| ShadowError::input(kind, p))?;
        if touches.len() > MAX_BEZEL_TOUCHES {
            return Err(ShadowError::input(
                kind,
                InputProblem::TooManyTouches {
                    max: MAX_BEZEL_TOUCHES,
                    found: touches.len(),
                },
            ));
        }
        self.check_ownership(kind, touches, None)?;
        let revision = self.next_revision();
        let slot = self.bezel.get_mut(hand);
        Ok(&*slot.insert(GestureSession::start(kind, Some(hand), touches, revision)))
    }

    /// Moves a live bezel swipe. The touch set must match the one it started with.
    pub fn continue_bezel(
        &mut self,
        from_right: bool,
        touches: &[Touch],
    ) -> Result<&GestureSession, ShadowError> {
        let kind = GestureKind::Bezel;
        let hand = bezel_hand(from_right);
        let Some(session) = self.bezel.get(hand) else {
            return Err(ShadowError::InvalidSessionState { kind });
        };
        check_touches(touches).map_err(|p| ShadowError::input(kind, p))?;
        if !same_members(session.touches(), touches) {
            return Err(ShadowError::input(kind, InputProblem::MembershipChanged));
        }
        let revision = self.next_revision();
        let epsilon = self.pinch_scale_epsilon;
        let session = self
            .bezel
            .get_mut(hand)
            .as_mut()
            .ok_or(ShadowError::InvalidSessionState { kind })?;
        session.update(touches, revision, epsilon);
        Ok(&*session)
    }

    /// Ends a live bezel swipe and returns its final state.
    ///
    /// The touches reported with the end call are not consulted; the tracked
    /// session decides what is torn down.
    pub fn end_bezel(&mut self, from_right: bool) -> Result<GestureSession, ShadowError> {
        self.bezel
            .get_mut(bezel_hand(from_right))
            .take()
            .ok_or(ShadowError::InvalidSessionState {
                kind: GestureKind::Bezel,
            })
    }

    // Pan

    /// Starts panning `target` with `hand`.
    pub fn start_pan(
        &mut self,
        target: T,
        touches: &[Touch],
        hand: HandType,
    ) -> Result<&GestureSession, ShadowError> {
        let kind = GestureKind::Pan;
        if self.pan.get(hand).is_some() {
            return Err(ShadowError::DuplicateSession { kind });
        }
        check_touches(touches).map_err(|p| ShadowError::input(kind, p))?;
        self.check_ownership(kind, touches, None)?;
        let revision = self.next_revision();
        let slot = self.pan.get_mut(hand);
        let (_, session) = slot.insert((
            target,
            GestureSession::start(kind, Some(hand), touches, revision),
        ));
        Ok(&*session)
    }

    /// Moves a live pan. Touches may join or leave between calls.
    pub fn continue_pan(
        &mut self,
        target: &T,
        touches: &[Touch],
        hand: HandType,
    ) -> Result<&GestureSession, ShadowError> {
        let kind = GestureKind::Pan;
        if !matches!(self.pan.get(hand), Some((held, _)) if held == target) {
            return Err(ShadowError::InvalidSessionState { kind });
        }
        check_touches(touches).map_err(|p| ShadowError::input(kind, p))?;
        self.check_ownership(kind, touches, Some(SessionSlot::Pan(hand)))?;
        let revision = self.next_revision();
        let epsilon = self.pinch_scale_epsilon;
        let (_, session) = self
            .pan
            .get_mut(hand)
            .as_mut()
            .ok_or(ShadowError::InvalidSessionState { kind })?;
        session.update(touches, revision, epsilon);
        Ok(&*session)
    }

    /// Ends the pan of `target` by `hand` and returns its final state.
    pub fn end_pan(&mut self, target: &T, hand: HandType) -> Result<GestureSession, ShadowError> {
        let slot = self.pan.get_mut(hand);
        if !matches!(&*slot, Some((held, _)) if held == target) {
            return Err(ShadowError::InvalidSessionState {
                kind: GestureKind::Pan,
            });
        }
        slot.take()
            .map(|(_, session)| session)
            .ok_or(ShadowError::InvalidSessionState {
                kind: GestureKind::Pan,
            })
    }

    // Pinch

    fn check_pinch_arity(touches: &[Touch]) -> Result<(), ShadowError> {
        let kind = GestureKind::Pinch;
        check_touches(touches).map_err(|p| ShadowError::input(kind, p))?;
        if touches.len() != PINCH_TOUCHES {
            return Err(ShadowError::input(
                kind,
                InputProblem::WrongArity {
                    expected: PINCH_TOUCHES,
                    found: touches.len(),
                },
            ));
        }
        Ok(())
    }

    /// Starts pinching `target`. Exactly two touches are required.
    pub fn start_pinch(
        &mut self,
        target: T,
        touches: &[Touch],
    ) -> Result<&GestureSession, ShadowError> {
        let kind = GestureKind::Pinch;
        if self.pinch.is_some() {
            return Err(ShadowError::DuplicateSession { kind });
        }
        Self::check_pinch_arity(touches)?;
        self.check_ownership(kind, touches, None)?;
        let revision = self.next_revision();
        let (_, session) = self.pinch.insert((
            target,
            GestureSession::start(kind, None, touches, revision),
        ));
        Ok(&*session)
    }

    /// Moves a live pinch and recomputes its scale factor.
    pub fn continue_pinch(
        &mut self,
        target: &T,
        touches: &[Touch],
    ) -> Result<&GestureSession, ShadowError> {
        let kind = GestureKind::Pinch;
        if !matches!(&self.pinch, Some((held, _)) if held == target) {
            return Err(ShadowError::InvalidSessionState { kind });
        }
        Self::check_pinch_arity(touches)?;
        self.check_ownership(kind, touches, Some(SessionSlot::Pinch))?;
        let revision = self.next_revision();
        let epsilon = self.pinch_scale_epsilon;
        let (_, session) = self
            .pinch
            .as_mut()
            .ok_or(ShadowError::InvalidSessionState { kind })?;
        session.update(touches, revision, epsilon);
        Ok(&*session)
    }

    /// Ends the pinch of `target` and returns its final state.
    pub fn end_pinch(&mut self, target: &T) -> Result<GestureSession, ShadowError> {
        if !matches!(&self.pinch, Some((held, _)) if held == target) {
            return Err(ShadowError::InvalidSessionState {
                kind: GestureKind::Pinch,
            });
        }
        self.pinch
            .take()
            .map(|(_, session)| session)
            .ok_or(ShadowError::InvalidSessionState {
                kind: GestureKind::Pinch,
            })
    }

    // Draw

    fn check_draw_point(point: Point) -> Result<(), ShadowError> {
        if point.is_finite() {
            Ok(())
        } else {
            Err(ShadowError::input(
                GestureKind::Draw,
                InputProblem::NonFiniteDrawPoint,
            ))
        }
    }

    /// Starts a stroke at `point`.
    pub fn start_draw(&mut self, point: Point) -> Result<(), ShadowError> {
        if self.draw.is_some() {
            return Err(ShadowError::DuplicateSession {
                kind: GestureKind::Draw,
            });
        }
        Self::check_draw_point(point)?;
        self.draw = Some(point);
        Ok(())
    }

    /// Moves the live stroke to `point`.
    pub fn continue_draw(&mut self, point: Point) -> Result<(), ShadowError> {
        let Some(current) = self.draw.as_mut() else {
            return Err(ShadowError::InvalidSessionState {
                kind: GestureKind::Draw,
            });
        };
        Self::check_draw_point(point)?;
        *current = point;
        Ok(())
    }

    /// Ends the live stroke, returning its last point.
    pub fn end_draw(&mut self) -> Result<Point, ShadowError> {
        self.draw.take().ok_or(ShadowError::InvalidSessionState {
            kind: GestureKind::Draw,
        })
    }
}

impl<T> SessionTracker<T> {
    /// Creates an idle tracker.
    ///
    /// `pinch_scale_epsilon` bounds pinch denominators and scale factors from
    /// below. Values that are not positive and finite fall back to
    /// [`DEFAULT_PINCH_SCALE_EPSILON`].
    #[must_use]
    pub fn new(pinch_scale_epsilon: f64) -> Self {
        Self {
            bezel: PerHand::default(),
            pan: PerHand::default(),
            pinch: None,
            draw: None,
            pinch_scale_epsilon: checked_pinch_scale_epsilon(pinch_scale_epsilon),
            revision: 0,
        }
    }

    /// The live bezel session drawn with `hand`.
    #[must_use]
    pub fn bezel(&self, hand: HandType) -> Option<&GestureSession> {
        self.bezel.get(hand).as_ref()
    }

    /// The live pan session drawn with `hand`, with its target.
    #[must_use]
    pub fn pan(&self, hand: HandType) -> Option<(&T, &GestureSession)> {
        self.pan.get(hand).as_ref().map(|(t, s)| (t, s))
    }

    /// The live pinch session, with its target.
    #[must_use]
    pub fn pinch(&self) -> Option<(&T, &GestureSession)> {
        self.pinch.as_ref().map(|(t, s)| (t, s))
    }

    /// The current point of the live stroke.
    #[must_use]
    pub fn draw_point(&self) -> Option<Point> {
        self.draw
    }

    /// Returns the session in `slot`, if live.
    #[must_use]
    pub fn session(&self, slot: SessionSlot) -> Option<&GestureSession> {
        match slot {
            SessionSlot::Bezel(hand) => self.bezel.get(hand).as_ref(),
            SessionSlot::Pan(hand) => self.pan.get(hand).as_ref().map(|(_, s)| s),
            SessionSlot::Pinch => self.pinch.as_ref().map(|(_, s)| s),
        }
    }

    pub(crate) fn session_mut(&mut self, slot: SessionSlot) -> Option<&mut GestureSession> {
        match slot {
            SessionSlot::Bezel(hand) => self.bezel.get_mut(hand).as_mut(),
            SessionSlot::Pan(hand) => self.pan.get_mut(hand).as_mut().map(|(_, s)| s),
            SessionSlot::Pinch => self.pinch.as_mut().map(|(_, s)| s),
        }
    }

    /// Every live touch-driven session slot.
    pub fn live_slots(&self) -> impl Iterator<Item = SessionSlot> + '_ {
        let slots = [
            SessionSlot::Bezel(HandType::Left),
            SessionSlot::Bezel(HandType::Right),
            SessionSlot::Pan(HandType::Left),
            SessionSlot::Pan(HandType::Right),
            SessionSlot::Pinch,
        ];
        slots
            .into_iter()
            .filter(|slot| self.session(*slot).is_some())
    }

    /// The slot whose session currently owns `id`.
    #[must_use]
    pub fn owner_of(&self, id: TouchId) -> Option<SessionSlot> {
        self.live_slots()
            .find(|slot| self.session(*slot).is_some_and(|s| s.owns(id)))
    }

    /// The most recently started or continued session drawn with `hand`.
    ///
    /// Pinches count toward `pinch_hand`.
    #[must_use]
    pub fn most_recent_slot(&self, hand: HandType, pinch_hand: HandType) -> Option<SessionSlot> {
        [
            SessionSlot::Bezel(hand),
            SessionSlot::Pan(hand),
            SessionSlot::Pinch,
        ]
        .into_iter()
        .filter(|slot| *slot != SessionSlot::Pinch || hand == pinch_hand)
        .filter_map(|slot| self.session(slot).map(|s| (slot, s.revision())))
        .max_by_key(|(_, revision)| *revision)
        .map(|(slot, _)| slot)
    }

    /// Returns `true` when no session of any kind is live.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.draw.is_none() && self.live_slots().next().is_none()
    }
}
