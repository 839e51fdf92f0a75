//! # lamp_fade_rs
//!
//! A small Rust library for computing the intermediate frames of a smart
//! lamp transition.
//!
//! When a lamp fades from one visual state to another, brightness and
//! saturation move linearly between their endpoints, but hue is an angle on
//! a 0-360 degree color wheel: a fade from 350 to 10 degrees should pass
//! through 0, not sweep the long way around through 180. This crate provides
//! the pure interpolation functions that implement that policy, plus a
//! [`Lamp`] state record and a [`Fade`] frame iterator built on top of them.
//!
//! ## Quick Start
//!
//! ```
//! use lamp_fade_rs::{interpolate_hue, Fade, Lamp};
//!
//! // The raw interpolators...
//! assert_eq!(interpolate_hue(350, 10, 0.5), 0);
//!
//! // ...or whole-state fades.
//! let warm = Lamp::new(30, 80, 100, true);
//! let cool = Lamp::new(210, 40, 60, true);
//! for frame in Fade::new(warm, cool, 20) {
//!     // send `frame` to the device
//!     assert!((0..=359).contains(&frame.hue));
//! }
//! ```
//!
//! ## Features
//!
//! - **Shorter-arc hue fades**: [`interpolate_hue`] always takes the arc of
//!   at most 180 degrees, wrapping across the 0/360 boundary when needed
//! - **Linear fades**: [`interpolate_linear`] for brightness and saturation
//! - **State blending**: [`Lamp::blend`] computes a whole intermediate state
//! - **Frame sequences**: [`Fade`] iterates the frames of a stepped fade
//!
//! Both interpolators are pure and thread-safe; there is no shared state
//! anywhere in the crate. Device communication, color-space conversion, and
//! persistence are deliberately out of scope: this crate only does the math,
//! and a lamp-control application drives the hardware with the results.

mod errors;
mod fade;
mod interpolate;
mod lamp;

// Re-export public API
pub use errors::Error;
pub use fade::Fade;
pub use interpolate::{interpolate_hue, interpolate_linear};
pub use lamp::Lamp;
