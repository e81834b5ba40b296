use alloc::vec::Vec;
use core::cell::RefCell;

use crate::strategy::{AxisProps, SizeStrategy};
use crate::{ConfigError, ItemSize};

/// Items on the axis have per-index sizes given by [`ItemSize::PerIndex`].
///
/// Sizes are measured lazily: looking up index `i` measures every index up to `i` that was
/// not measured yet, and items past the measured prefix count as `estimated_item_size` in
/// the total. Call the engine's `reset_after_index` when sizes change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VariableSize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct ItemMetadata {
    offset: u64,
    size: u32,
}

impl ItemMetadata {
    fn end(&self) -> u64 {
        self.offset.saturating_add(self.size as u64)
    }
}

#[derive(Debug, Default)]
struct Measurements {
    // Invariant: `items.len() == last measured index + 1`.
    items: Vec<ItemMetadata>,
}

/// Per-axis measurement table of [`VariableSize`].
#[derive(Debug, Default)]
pub struct VariableSizeCache {
    inner: RefCell<Measurements>,
}

impl VariableSizeCache {
    /// Index of the last measured item, if any.
    pub fn last_measured_index(&self) -> Option<usize> {
        self.inner.borrow().items.len().checked_sub(1)
    }

    /// Forgets every measurement from `index` on.
    pub fn reset_after_index(&self, index: usize) {
        let mut m = self.inner.borrow_mut();
        if index < m.items.len() {
            vtrace!(index, measured = m.items.len(), "VariableSizeCache::reset_after_index");
            m.items.truncate(index);
        }
    }

    /// Drops measurements past the end of the axis (the item count shrank).
    fn clamp_to(&self, count: usize) {
        let mut m = self.inner.borrow_mut();
        if m.items.len() > count {
            m.items.truncate(count);
        }
    }

    fn metadata(&self, axis: &AxisProps<'_>, index: usize) -> ItemMetadata {
        self.clamp_to(axis.count);
        if axis.count == 0 {
            return ItemMetadata::default();
        }
        let mut m = self.inner.borrow_mut();
        if index >= m.items.len() {
            let mut offset = m.items.last().map(ItemMetadata::end).unwrap_or(0);
            let target = index.min(axis.count.saturating_sub(1));
            for i in m.items.len()..=target {
                let size = axis.item_size.get(i);
                m.items.push(ItemMetadata { offset, size });
                offset = offset.saturating_add(size as u64);
            }
        }
        m.items.get(index).copied().unwrap_or_default()
    }

    fn measured_end(&self) -> u64 {
        self.inner
            .borrow()
            .items
            .last()
            .map(ItemMetadata::end)
            .unwrap_or(0)
    }

    fn measured_len(&self) -> usize {
        self.inner.borrow().items.len()
    }

    fn nearest_item(&self, axis: &AxisProps<'_>, offset: u64) -> usize {
        self.clamp_to(axis.count);
        let measured = self.measured_len();
        let last_measured_offset = match measured {
            0 | 1 => 0,
            n => self.metadata(axis, n - 1).offset,
        };

        if measured > 0 && last_measured_offset >= offset {
            // The offset lies inside the measured prefix.
            self.binary_search(axis, measured - 1, 0, offset)
        } else {
            // Past the measured prefix: search exponentially so we do not measure every item
            // up to the offset one by one.
            self.exponential_search(axis, measured.saturating_sub(1), offset)
        }
    }

    fn binary_search(&self, axis: &AxisProps<'_>, high: usize, low: usize, offset: u64) -> usize {
        let mut low = low as i64;
        let mut high = high as i64;
        while low <= high {
            let middle = low + (high - low) / 2;
            let current = self.metadata(axis, middle as usize).offset;
            if current == offset {
                return middle as usize;
            } else if current < offset {
                low = middle + 1;
            } else {
                high = middle - 1;
            }
        }
        if low > 0 { (low - 1) as usize } else { 0 }
    }

    fn exponential_search(&self, axis: &AxisProps<'_>, start: usize, offset: u64) -> usize {
        let count = axis.count;
        let mut index = start;
        let mut interval = 1usize;
        while index < count && self.metadata(axis, index).offset < offset {
            index = index.saturating_add(interval);
            interval = interval.saturating_mul(2);
        }
        self.binary_search(axis, index.min(count.saturating_sub(1)), index / 2, offset)
    }
}

impl SizeStrategy for VariableSize {
    type InstanceProps = VariableSizeCache;

    const RESET_STYLE_CACHE_ON_ITEM_SIZE_CHANGE: bool = true;

    fn validate_props(axis: &AxisProps<'_>, prop: &'static str) -> Result<(), ConfigError> {
        match axis.item_size {
            ItemSize::PerIndex(_) => Ok(()),
            other => Err(ConfigError::InvalidItemSize {
                prop,
                expected: "a function",
                found: other.kind(),
            }),
        }
    }

    fn init_instance_props(_axis: &AxisProps<'_>) -> Self::InstanceProps {
        VariableSizeCache::default()
    }

    fn item_offset(axis: &AxisProps<'_>, index: usize, props: &VariableSizeCache) -> u64 {
        props.metadata(axis, index).offset
    }

    fn item_size(axis: &AxisProps<'_>, index: usize, props: &VariableSizeCache) -> u32 {
        props.metadata(axis, index).size
    }

    fn estimated_total_size(axis: &AxisProps<'_>, props: &VariableSizeCache) -> u64 {
        props.clamp_to(axis.count);
        let unmeasured = axis.count.saturating_sub(props.measured_len()) as u64;
        props
            .measured_end()
            .saturating_add(unmeasured.saturating_mul(axis.estimated_item_size as u64))
    }

    fn start_index_for_offset(
        axis: &AxisProps<'_>,
        offset: u64,
        props: &VariableSizeCache,
    ) -> usize {
        props
            .nearest_item(axis, offset)
            .min(axis.count.saturating_sub(1))
    }

    fn stop_index_for_start_index(
        axis: &AxisProps<'_>,
        start_index: usize,
        scroll_offset: u64,
        props: &VariableSizeCache,
    ) -> usize {
        let last = axis.count.saturating_sub(1);
        let max_offset = scroll_offset.saturating_add(axis.viewport_size);
        let mut offset = props.metadata(axis, start_index).end();
        let mut stop = start_index;
        while stop < last && offset < max_offset {
            stop += 1;
            offset = offset.saturating_add(props.metadata(axis, stop).size as u64);
        }
        stop
    }
}
