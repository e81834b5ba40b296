use crate::ScrollbarSize;

/// Geometry reported by the host scroll container along with a scroll event.
///
/// `scroll_left` is raw: in RTL containers its meaning depends on the host's
/// [`crate::RtlOffsetType`], and it may be negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    pub scroll_left: i64,
    pub scroll_top: i64,
    pub client_width: u64,
    pub client_height: u64,
    pub scroll_width: u64,
    pub scroll_height: u64,
}

impl ScrollMetrics {
    /// Largest valid horizontal offset (`scroll_width - client_width`, never negative).
    pub fn max_scroll_left(&self) -> i64 {
        self.scroll_width.saturating_sub(self.client_width) as i64
    }

    /// Largest valid vertical offset (`scroll_height - client_height`, never negative).
    pub fn max_scroll_top(&self) -> i64 {
        self.scroll_height.saturating_sub(self.client_height) as i64
    }
}

/// The host scroll container an engine renders into.
///
/// Engines never own a surface; it is lent to [`crate::ScrollEngine::mount`] and
/// [`crate::ScrollEngine::commit`] so requested offsets can be pushed back to the host.
pub trait ScrollSurface {
    fn metrics(&self) -> ScrollMetrics;

    /// Writes the raw horizontal offset (already translated into the host's RTL convention).
    fn set_scroll_left(&mut self, scroll_left: i64);

    fn set_scroll_top(&mut self, scroll_top: i64);

    fn scrollbar_size(&self) -> ScrollbarSize;
}
