//! Adapter utilities for the `virtual-scroll` crate.
//!
//! `virtual-scroll` is headless: it computes windows and styles but never touches a real scroll
//! container. This crate provides the framework-neutral pieces an adapter usually needs:
//!
//! - [`SimulatedSurface`]: an in-memory scroll container (offset clamping, RTL offset
//!   conventions, scrollbar thickness, write counting). Useful for tests and for hosts that
//!   own their own scrolling.
//! - [`Controller`]: pumps the mount, scroll, tick, render and commit cycle of any
//!   [`virtual_scroll::ScrollEngine`] against a surface.
//!
//! This crate is intentionally framework-agnostic (no toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod surface;


pub use controller::{Controller, FrameExtent};
pub use surface::SimulatedSurface;
