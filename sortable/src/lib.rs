//! Headless geometry and drag-state helpers for drag-and-drop sortable lists.
//!
//! For ready-made containers and a gesture controller, see the `sortable-adapter` crate.
//!
//! This crate does not capture events, render, or animate. It provides the bookkeeping a
//! sortable list needs while an item is being dragged: element dimensions, page offsets,
//! pointer offsets at drag start, and a move descriptor that tracks the source and candidate
//! destination of a single drag and applies it against the bound containers.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - element handles ([`ElementHandle`])
//! - page scroll offsets ([`PageScroll`], [`DocumentScroll`])
//! - sortable containers and item handles ([`SortableScope`], [`SortableItem`])
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod drag_item;
mod error;
mod helper;
mod host;
mod position;
mod types;


pub use drag_item::{Dest, DragItem, MoveEvent, SortableItem, SortableScope, SourceInfo};
pub use error::MoveError;
pub use helper::{Helper, no_drag};
pub use host::{DocumentScroll, ElementHandle, ElementSnapshot, FixedScroll, PageScroll, PointerEvent};
pub use position::Position;
pub use types::{Axis, ClientRect, OffsetBox, PagePoint};
