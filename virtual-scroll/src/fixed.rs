use crate::strategy::{AxisProps, SizeStrategy};
use crate::{ConfigError, ItemSize};

/// Every item on the axis has the same size: all lookups are O(1) arithmetic.
///
/// Requires [`ItemSize::Fixed`] with a non-zero size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedSize;

impl FixedSize {
    fn size(axis: &AxisProps<'_>) -> u64 {
        match axis.item_size {
            ItemSize::Fixed(size) => (*size).max(1) as u64,
            // Rejected by `validate_props`; fall back to the per-index value of item 0.
            ItemSize::PerIndex(f) => f(0).max(1) as u64,
        }
    }
}

impl SizeStrategy for FixedSize {
    type InstanceProps = ();

    const RESET_STYLE_CACHE_ON_ITEM_SIZE_CHANGE: bool = true;

    fn validate_props(axis: &AxisProps<'_>, prop: &'static str) -> Result<(), ConfigError> {
        match axis.item_size {
            ItemSize::Fixed(0) => Err(ConfigError::InvalidItemSize {
                prop,
                expected: "a non-zero number",
                found: "0",
            }),
            ItemSize::Fixed(_) => Ok(()),
            other => Err(ConfigError::InvalidItemSize {
                prop,
                expected: "a number",
                found: other.kind(),
            }),
        }
    }

    fn init_instance_props(_axis: &AxisProps<'_>) -> Self::InstanceProps {}

    fn item_offset(axis: &AxisProps<'_>, index: usize, _props: &()) -> u64 {
        (index as u64).saturating_mul(Self::size(axis))
    }

    fn item_size(axis: &AxisProps<'_>, _index: usize, _props: &()) -> u32 {
        Self::size(axis).min(u32::MAX as u64) as u32
    }

    fn estimated_total_size(axis: &AxisProps<'_>, _props: &()) -> u64 {
        (axis.count as u64).saturating_mul(Self::size(axis))
    }

    fn start_index_for_offset(axis: &AxisProps<'_>, offset: u64, _props: &()) -> usize {
        let index = (offset / Self::size(axis)).min(usize::MAX as u64) as usize;
        index.min(axis.count.saturating_sub(1))
    }

    fn stop_index_for_start_index(
        axis: &AxisProps<'_>,
        start_index: usize,
        scroll_offset: u64,
        _props: &(),
    ) -> usize {
        let size = Self::size(axis);
        let start_offset = (start_index as u64).saturating_mul(size);
        let visible = axis
            .viewport_size
            .saturating_add(scroll_offset)
            .saturating_sub(start_offset)
            .div_ceil(size);
        let visible = visible.min(usize::MAX as u64) as usize;
        // `- 1` because the stop index is inclusive.
        start_index
            .saturating_add(visible)
            .saturating_sub(1)
            .min(axis.count.saturating_sub(1))
    }
}
