//! A headless windowing engine for virtualized lists and grids.
//!
//! For adapter-level utilities (a simulated host surface and a render/commit driver), see the
//! `virtual-scroll-adapter` crate.
//!
//! On every scroll the engine computes the smallest window of items that has to exist as
//! real UI elements, tracks scroll offset and direction, debounces an `is_scrolling` flag,
//! and reports everything through memoized observers. Item sizing is pluggable:
//! [`FixedSize`] does O(1) arithmetic, [`VariableSize`] measures lazily and searches.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - a [`ScrollSurface`] (scroll offsets, client/content extents, scrollbar thickness)
//! - host scroll events, as [`ScrollMetrics`]
//! - the current time in milliseconds, for the quiet-period timer
//!
//! ```
//! use virtual_scroll::{FixedSizeList, ListOptions};
//!
//! let options = ListOptions::new(1000, 20)
//!     .with_height(100)
//!     .with_children(|props| props.index);
//! let mut list = FixedSizeList::new(options).unwrap();
//! list.scroll_to(205, 0);
//!
//! let frame = list.render();
//! assert_eq!(frame.range.visible_start_index, 10);
//! assert_eq!(frame.range.visible_stop_index, 15);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod engine;
mod error;
mod fixed;
mod grid;
mod host;
mod list;
mod memo;
mod options;
mod rtl;
mod state;
mod strategy;
mod style;
mod timer;
mod types;
mod variable;

#[cfg(test)]
mod tests;

pub use engine::ScrollEngine;
pub use error::ConfigError;
pub use fixed::FixedSize;
pub use grid::{
    CellProps, FixedSizeGrid, Grid, GridFrame, GridScrollTarget, RenderedCell, ScrollToPosition,
    VariableSizeGrid,
};
pub use host::{ScrollMetrics, ScrollSurface};
pub use list::{FixedSizeList, ItemProps, List, ListFrame, RenderedItem, VariableSizeList};
pub use options::{
    DEFAULT_GRID_OVERSCAN_COUNT, DEFAULT_LIST_OVERSCAN_COUNT, GridOptions, ListOptions,
    OnGridItemsRenderedCallback, OnGridScrollCallback, OnItemsRenderedCallback,
    OnListScrollCallback, RenderCell, RenderItem,
};
pub use rtl::{RtlOffsetType, ScrollbarSize, probe_rtl_offset_type};
pub use state::{GridScrollEvent, GridScrollState, ListScrollEvent, ListScrollState};
pub use strategy::{AxisProps, DEFAULT_ESTIMATED_ITEM_SIZE, ItemSize, SizeStrategy};
pub use style::{
    InnerProps, InnerStyle, ItemStyle, Length, OuterProps, OuterStyle, PointerEvents, Position,
};
pub use timer::{IS_SCROLLING_DEBOUNCE_INTERVAL_MS, TimeoutHandle, Timer};
pub use types::{
    Align, CellKey, Direction, GridItemRange, ItemKey, ItemRange, Layout, ScrollDirection,
};
pub use variable::{VariableSize, VariableSizeCache};

#[doc(hidden)]
pub use style::StyleCacheKey;
