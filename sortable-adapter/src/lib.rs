//! Adapter utilities for the `sortable` crate.
//!
//! The `sortable` crate is UI-agnostic and only defines the capabilities it needs from a host.
//! This crate provides small, framework-neutral pieces most adapters end up writing:
//!
//! - A `Vec`-backed sortable container with a generated identity token
//! - A gesture controller that wires pointer events to the helper and the move descriptor
//!
//! This crate is intentionally framework-agnostic (no web-sys/leptos/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod list;
mod session;

#[cfg(test)]
mod tests;

pub use list::{ContainerId, ListItem, ListScope};
pub use session::DragSession;
