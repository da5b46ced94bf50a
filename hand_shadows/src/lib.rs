// Copyright 2025 the Hand Shadows Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hand Shadows: translucent hands that follow touch gestures.
//!
//! A touch dispatcher forwards start, continue and end calls for four
//! gestures to a [`ShadowHandView`]:
//! - bezel swipes entering from a screen edge, one per hand,
//! - pans of a target, one per hand,
//! - a pinch of a target, drawn on one configured hand,
//! - a freehand stroke, which only tracks its current point.
//!
//! After each accepted call the view places a hand silhouette so that the
//! index fingertip sits exactly on the tracked touch. A renderer polls
//! [`ShadowHandView::current_transformed_path`] and
//! [`ShadowHandView::current_bounds`] once per frame.
//!
//! Calls that break the start/continue/end contract return a
//! [`ShadowError`] and leave every session untouched. Rejections are also
//! reported as `tracing` debug events; the crate installs no subscriber.
//!
//! ## Minimal example
//!
//! ```rust
//! use hand_shadows::{HandType, ShadowHandView, Touch};
//! use kurbo::{Point, Rect};
//!
//! let mut view = ShadowHandView::new(Rect::new(0.0, 0.0, 1024.0, 768.0));
//! let page = 1_u32;
//!
//! view.start_pan(page, &[Touch::new(1, (50.0, 50.0))], HandType::Right)
//!     .unwrap();
//! view.continue_pan(&page, &[Touch::new(1, (80.0, 60.0))], HandType::Right)
//!     .unwrap();
//!
//! let placement = view.placement(HandType::Right).unwrap();
//! assert_eq!(placement.transform() * Point::ORIGIN, Point::new(80.0, 60.0));
//! assert!(view.current_transformed_path(HandType::Right).is_some());
//!
//! view.end_pan(&page, HandType::Right).unwrap();
//! assert!(view.current_bounds(HandType::Right).is_none());
//! ```
//!
//! Hand outlines live in `hand_shadows_geometry`; this crate re-exports the
//! pieces a caller needs.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod placement;
mod session;
mod touch;
mod tracker;
mod view;

pub use config::{DEFAULT_BEZEL_OVERSHOOT, DEFAULT_PINCH_SCALE_EPSILON, ShadowConfig};
pub use error::{InputProblem, ShadowError};
pub use placement::{HandModels, HandPlacement, Posture};
pub use session::{GestureKind, GestureSession, PerHand, pinch_scale};
pub use touch::{Touch, TouchId, centroid};
pub use tracker::{SessionSlot, SessionTracker, bezel_hand};
pub use view::ShadowHandView;

pub use hand_shadows_geometry::{
    ArticulatedAsset, FingerTips, GeometryError, HandGeometry, HandType, InvalidHandedness,
    PointerAsset, distance,
};
