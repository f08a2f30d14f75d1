//! A retro maze-chase arcade game core.
//!
//! The simulation is a library: [`session::Session`] owns the board, the
//! entities, and every counter, and advances them one 50 ms tick at a time.
//! Embedders supply the timers, the RNG, and the decoded directional
//! intents, and draw the [`frame::Frame`]s the session emits. [`app::App`]
//! is a thin real-time shell that does exactly that on a wall clock.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod app;
pub mod collision;
pub mod constants;
pub mod direction;
pub mod entity;
pub mod error;
pub mod frame;
pub mod map;
pub mod movement;
pub mod session;
pub mod wander;
