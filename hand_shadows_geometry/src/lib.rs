// Copyright 2025 the Hand Shadows Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hand Shadows Geometry: silhouettes of hands touching a drawing surface.
//!
//! This crate owns the static geometry behind a translucent "hand shadow"
//! overlay. It provides:
//! - [`HandType`]: left or right, with mirroring applied once at construction.
//! - [`HandShadow`]: a hand pointing with its index finger, exposing the hand
//!   outline, the fingertip dot, their composed path and the fingertip anchor.
//! - [`TwoFingerShadow`] and [`PinchShadow`]: hands whose outline opens and
//!   closes with the distance between two touches.
//! - [`HandGeometry`]: the outline assets every model is built from.
//! - [`distance`] and a few path helpers in [`geom`].
//!
//! It does **not** track touches or gestures; `hand_shadows` drives these
//! models from live touch input and computes where to place them.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Point};
//! use hand_shadows_geometry::{HandShadow, HandType};
//!
//! let shadow = HandShadow::new(HandType::Left);
//! assert!(shadow.bounding_box().contains(shadow.fingertip_anchor()));
//!
//! // Put the fingertip on a touch at (120, 80).
//! let touch = Point::new(120.0, 80.0);
//! let transform = Affine::translate(touch.to_vec2());
//! assert_eq!(transform * Point::ORIGIN, touch);
//! let _path = transform * shadow.anchored_path();
//! ```
//!
//! ## Two-fingered poses
//!
//! ```rust
//! use hand_shadows_geometry::{HandType, PinchShadow};
//!
//! let pinch = PinchShadow::new(HandType::Right);
//! let pose = pinch.pose(180.0);
//! // The pose is levelled: the thumb sits to the right of the index finger.
//! assert!(pose.other_tip.x > pose.index_tip.x);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod articulated;
mod asset;
mod error;
pub mod geom;
mod hand;
mod pointing;

pub use articulated::{FingerPose, PinchShadow, TWO_FINGER_REST_GAP, TwoFingerShadow};
pub use asset::{ArticulatedAsset, FingerTips, HandGeometry, PointerAsset};
pub use error::GeometryError;
pub use geom::distance;
pub use hand::{HandType, InvalidHandedness};
pub use pointing::{FINGERTIP_RADIUS, HandShadow};
