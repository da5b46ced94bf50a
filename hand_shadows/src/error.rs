// Copyright 2025 the Hand Shadows Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use hand_shadows_geometry::InvalidHandedness;

use crate::{GestureKind, TouchId};

/// What was wrong with the touches passed to a gesture call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputProblem {
    /// No touches were supplied.
    Empty,
    /// The gesture needs exactly `expected` touches.
    WrongArity {
        /// Required number of touches.
        expected: usize,
        /// Number supplied.
        found: usize,
    },
    /// The gesture accepts at most `max` touches.
    TooManyTouches {
        /// Largest accepted number of touches.
        max: usize,
        /// Number supplied.
        found: usize,
    },
    /// The same identifier appears twice in one call.
    DuplicateTouch(TouchId),
    /// The touch already drives another live gesture.
    TouchInUse(TouchId),
    /// The touch set differs from the one the gesture started with.
    MembershipChanged,
    /// A touch location is NaN or infinite.
    NonFinitePoint(TouchId),
    /// The draw location is NaN or infinite.
    NonFiniteDrawPoint,
}

impl fmt::Display for InputProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("no touches"),
            Self::WrongArity { expected, found } => {
                write!(f, "expected {expected} touches, got {found}")
            }
            Self::TooManyTouches { max, found } => {
                write!(f, "expected at most {max} touches, got {found}")
            }
            Self::DuplicateTouch(id) => write!(f, "touch {} listed twice", id.0),
            Self::TouchInUse(id) => write!(f, "touch {} already drives another gesture", id.0),
            Self::MembershipChanged => f.write_str("touch set changed mid-gesture"),
            Self::NonFinitePoint(id) => write!(f, "touch {} has a non-finite location", id.0),
            Self::NonFiniteDrawPoint => f.write_str("draw point is not finite"),
        }
    }
}

/// Contract violations reported by gesture lifecycle calls.
///
/// Every variant describes a bug in the touch-dispatch integration. A call
/// that fails leaves all session state as it was.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShadowError {
    /// `continue*` or `end*` without a matching live session.
    InvalidSessionState {
        /// Gesture the call was for.
        kind: GestureKind,
    },
    /// `start*` while a session for the same key is still live.
    DuplicateSession {
        /// Gesture the call was for.
        kind: GestureKind,
    },
    /// The touch set is empty, has the wrong size, or is otherwise malformed.
    InvalidGestureInput {
        /// Gesture the call was for.
        kind: GestureKind,
        /// What was wrong.
        problem: InputProblem,
    },
    /// A raw handedness value did not name a hand.
    InvalidHandedness(InvalidHandedness),
}

impl ShadowError {
    pub(crate) fn input(kind: GestureKind, problem: InputProblem) -> Self {
        Self::InvalidGestureInput { kind, problem }
    }
}

impl fmt::Display for ShadowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSessionState { kind } => {
                write!(f, "no live {kind} session for this call")
            }
            Self::DuplicateSession { kind } => {
                write!(f, "a {kind} session is already live for this key")
            }
            Self::InvalidGestureInput { kind, problem } => {
                write!(f, "invalid {kind} input: {problem}")
            }
            Self::InvalidHandedness(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for ShadowError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidHandedness(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InvalidHandedness> for ShadowError {
    fn from(err: InvalidHandedness) -> Self {
        Self::InvalidHandedness(err)
    }
}
