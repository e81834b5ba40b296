use alloc::sync::Arc;

use crate::{Align, ConfigError, ItemRange, ScrollDirection};

/// Default estimate for not-yet-measured items of variable-size engines.
pub const DEFAULT_ESTIMATED_ITEM_SIZE: u32 = 50;

/// Item length along one axis: a single value for every index, or a per-index function.
#[derive(Clone)]
pub enum ItemSize {
    Fixed(u32),
    PerIndex(Arc<dyn Fn(usize) -> u32 + Send + Sync>),
}

impl ItemSize {
    pub fn per_index(f: impl Fn(usize) -> u32 + Send + Sync + 'static) -> Self {
        Self::PerIndex(Arc::new(f))
    }

    /// Size of `index` (calls the function for `PerIndex`).
    pub fn get(&self, index: usize) -> u32 {
        match self {
            Self::Fixed(size) => *size,
            Self::PerIndex(f) => f(index),
        }
    }

    /// Identity comparison: values compare by value, functions by pointer.
    ///
    /// This is what decides whether cached item styles survive an options update.
    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Fixed(a), Self::Fixed(b)) => a == b,
            (Self::PerIndex(a), Self::PerIndex(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Fixed(_) => "number",
            Self::PerIndex(_) => "function",
        }
    }
}

impl From<u32> for ItemSize {
    fn from(size: u32) -> Self {
        Self::Fixed(size)
    }
}

impl core::fmt::Debug for ItemSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            Self::PerIndex(_) => f.write_str("PerIndex(..)"),
        }
    }
}

/// One scrolling axis as seen by a [`SizeStrategy`].
#[derive(Clone, Copy, Debug)]
pub struct AxisProps<'a> {
    pub count: usize,
    pub item_size: &'a ItemSize,
    pub estimated_item_size: u32,
    /// Viewport length along this axis.
    pub viewport_size: u64,
}

/// Windowing math for one axis, decoupled from the sizing model.
///
/// Implementations are stateless marker types; anything they need to remember between calls
/// lives in [`SizeStrategy::InstanceProps`], which the engine creates once and owns.
pub trait SizeStrategy {
    type InstanceProps: core::fmt::Debug;

    /// Whether changing the item size drops the engine's item-style cache.
    const RESET_STYLE_CACHE_ON_ITEM_SIZE_CHANGE: bool;

    /// Checks that `axis.item_size` has the shape this strategy needs. `prop` names the option
    /// for error messages (`item_size`, `row_height`, `column_width`).
    fn validate_props(axis: &AxisProps<'_>, prop: &'static str) -> Result<(), ConfigError>;

    /// Called once when the engine is created. Never re-run on option changes.
    fn init_instance_props(axis: &AxisProps<'_>) -> Self::InstanceProps;

    fn item_offset(axis: &AxisProps<'_>, index: usize, props: &Self::InstanceProps) -> u64;

    fn item_size(axis: &AxisProps<'_>, index: usize, props: &Self::InstanceProps) -> u32;

    /// Total scrollable extent. May be an estimate for items that were never measured.
    fn estimated_total_size(axis: &AxisProps<'_>, props: &Self::InstanceProps) -> u64;

    /// First index whose extent could be visible at `offset`, clamped to `[0, count - 1]`.
    fn start_index_for_offset(axis: &AxisProps<'_>, offset: u64, props: &Self::InstanceProps)
    -> usize;

    /// Last (inclusive) index visible when the viewport starts at `scroll_offset`.
    fn stop_index_for_start_index(
        axis: &AxisProps<'_>,
        start_index: usize,
        scroll_offset: u64,
        props: &Self::InstanceProps,
    ) -> usize;

    /// Scroll offset that brings `index` into view according to `align`.
    ///
    /// `scrollbar_size` is the thickness of a perpendicular scrollbar that would otherwise cover
    /// the trailing edge of the item.
    fn offset_for_index_and_alignment(
        axis: &AxisProps<'_>,
        index: usize,
        align: Align,
        scroll_offset: u64,
        props: &Self::InstanceProps,
        scrollbar_size: u32,
    ) -> u64 {
        resolve_alignment(AlignmentInput {
            item_offset: Self::item_offset(axis, index, props),
            item_size: Self::item_size(axis, index, props),
            total_size: Self::estimated_total_size(axis, props),
            viewport_size: axis.viewport_size,
            scroll_offset,
            scrollbar_size,
            align,
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct AlignmentInput {
    pub(crate) item_offset: u64,
    pub(crate) item_size: u32,
    pub(crate) total_size: u64,
    pub(crate) viewport_size: u64,
    pub(crate) scroll_offset: u64,
    pub(crate) scrollbar_size: u32,
    pub(crate) align: Align,
}

pub(crate) fn resolve_alignment(input: AlignmentInput) -> u64 {
    let size = input.viewport_size;
    let last_offset = input.total_size.saturating_sub(size);
    let max_offset = last_offset.min(input.item_offset);
    let min_offset = (input.item_offset
        + input.scrollbar_size as u64
        + input.item_size as u64)
        .saturating_sub(size);
    let current = input.scroll_offset;

    let align = match input.align {
        Align::Smart
            if current >= min_offset.saturating_sub(size)
                && current <= max_offset.saturating_add(size) =>
        {
            Align::Auto
        }
        Align::Smart => Align::Center,
        other => other,
    };

    match align {
        Align::Start => max_offset,
        Align::End => min_offset,
        Align::Center => {
            // Math.round of the midpoint, halves rounding up.
            let middle = (min_offset + max_offset).div_ceil(2);
            if middle < size.div_ceil(2) {
                0
            } else if middle > last_offset.saturating_add(size / 2) {
                last_offset
            } else {
                middle
            }
        }
        Align::Auto | Align::Smart => {
            if current >= min_offset && current <= max_offset {
                current
            } else if current < min_offset {
                min_offset
            } else {
                max_offset
            }
        }
    }
}

/// Computes `[overscan_start, overscan_stop, visible_start, visible_stop]` for one axis.
///
/// The caller short-circuits empty axes; `axis.count` must be non-zero here.
pub(crate) fn range_to_render<S: SizeStrategy>(
    axis: &AxisProps<'_>,
    scroll_offset: u64,
    props: &S::InstanceProps,
    overscan_count: usize,
    is_scrolling: bool,
    direction: ScrollDirection,
) -> ItemRange {
    debug_assert!(axis.count > 0, "range_to_render called for an empty axis");
    let start = S::start_index_for_offset(axis, scroll_offset, props);
    let stop = S::stop_index_for_start_index(axis, start, scroll_offset, props);

    // Keep at least one item past each visible edge so focus traversal does not wrap.
    let overscan = overscan_count.max(1);
    let backward = if !is_scrolling || direction == ScrollDirection::Backward {
        overscan
    } else {
        1
    };
    let forward = if !is_scrolling || direction == ScrollDirection::Forward {
        overscan
    } else {
        1
    };

    ItemRange {
        overscan_start_index: start.saturating_sub(backward),
        overscan_stop_index: stop
            .saturating_add(forward)
            .min(axis.count.saturating_sub(1)),
        visible_start_index: start,
        visible_stop_index: stop,
    }
}
