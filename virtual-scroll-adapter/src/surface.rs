use virtual_scroll::{Direction, Length, RtlOffsetType, ScrollMetrics, ScrollSurface, ScrollbarSize};

/// An in-memory scroll container.
///
/// It stores logical offsets (distance from the start edge) and reports `scroll_left` in the
/// configured RTL convention, the way a real host would. Every write is clamped into the
/// scrollable extent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulatedSurface {
    client_width: u64,
    client_height: u64,
    scroll_width: u64,
    scroll_height: u64,
    left: u64,
    top: u64,
    direction: Direction,
    rtl_offset_type: RtlOffsetType,
    scrollbar_size: ScrollbarSize,
    writes: usize,
}

impl SimulatedSurface {
    /// A container whose content is exactly as large as the viewport (nothing to scroll yet).
    pub fn new(client_width: u64, client_height: u64) -> Self {
        Self {
            client_width,
            client_height,
            scroll_width: client_width,
            scroll_height: client_height,
            left: 0,
            top: 0,
            direction: Direction::Ltr,
            rtl_offset_type: RtlOffsetType::default(),
            scrollbar_size: ScrollbarSize::default(),
            writes: 0,
        }
    }

    pub fn with_content_size(mut self, scroll_width: u64, scroll_height: u64) -> Self {
        self.set_content_size(scroll_width, scroll_height);
        self
    }

    /// Makes the container right-to-left, reporting `scroll_left` per `rtl_offset_type`.
    pub fn with_rtl(mut self, rtl_offset_type: RtlOffsetType) -> Self {
        self.direction = Direction::Rtl;
        self.rtl_offset_type = rtl_offset_type;
        self
    }

    pub fn with_scrollbar_size(mut self, scrollbar_size: ScrollbarSize) -> Self {
        self.scrollbar_size = scrollbar_size;
        self
    }

    /// Content can never be smaller than the viewport.
    pub fn set_content_size(&mut self, scroll_width: u64, scroll_height: u64) {
        self.scroll_width = scroll_width.max(self.client_width);
        self.scroll_height = scroll_height.max(self.client_height);
        self.left = self.left.min(self.max_left());
        self.top = self.top.min(self.max_top());
    }

    /// Sizes the content from an inner container's style. Percent lengths resolve against the
    /// viewport.
    pub fn set_content_lengths(&mut self, width: Length, height: Length) {
        let width = resolve(width, self.client_width);
        let height = resolve(height, self.client_height);
        self.set_content_size(width, height);
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn rtl_offset_type(&self) -> RtlOffsetType {
        self.rtl_offset_type
    }

    /// Horizontal offset measured from the start edge, whatever the direction.
    pub fn logical_scroll_left(&self) -> u64 {
        self.left
    }

    pub fn scroll_top(&self) -> u64 {
        self.top
    }

    /// Number of programmatic offset writes so far (`set_scroll_left` plus `set_scroll_top`).
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// A user gesture (wheel, drag, keyboard). `None` leaves that axis alone. Returns the
    /// metrics the host would attach to the resulting scroll event.
    pub fn user_scroll_to(&mut self, left: Option<u64>, top: Option<u64>) -> ScrollMetrics {
        if let Some(left) = left {
            self.left = left.min(self.max_left());
        }
        if let Some(top) = top {
            self.top = top.min(self.max_top());
        }
        self.metrics()
    }

    /// Relative variant of [`SimulatedSurface::user_scroll_to`].
    pub fn user_scroll_by(&mut self, dx: i64, dy: i64) -> ScrollMetrics {
        let left = self.left.saturating_add_signed(dx);
        let top = self.top.saturating_add_signed(dy);
        self.user_scroll_to(Some(left), Some(top))
    }

    fn max_left(&self) -> u64 {
        self.scroll_width.saturating_sub(self.client_width)
    }

    fn max_top(&self) -> u64 {
        self.scroll_height.saturating_sub(self.client_height)
    }

    fn extent_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_left: 0,
            scroll_top: 0,
            client_width: self.client_width,
            client_height: self.client_height,
            scroll_width: self.scroll_width,
            scroll_height: self.scroll_height,
        }
    }
}

fn resolve(length: Length, client: u64) -> u64 {
    match length {
        Length::Px(px) => px,
        Length::Percent(pct) => client.saturating_mul(pct as u64) / 100,
    }
}

impl ScrollSurface for SimulatedSurface {
    fn metrics(&self) -> ScrollMetrics {
        let extent = self.extent_metrics();
        let scroll_left = if self.direction.is_rtl() {
            self.rtl_offset_type.to_host(self.left, &extent)
        } else {
            self.left.min(i64::MAX as u64) as i64
        };
        ScrollMetrics {
            scroll_left,
            scroll_top: self.top.min(i64::MAX as u64) as i64,
            ..extent
        }
    }

    fn set_scroll_left(&mut self, scroll_left: i64) {
        let logical = if self.direction.is_rtl() {
            self.rtl_offset_type
                .to_logical(scroll_left, &self.extent_metrics())
        } else {
            scroll_left
        };
        self.left = (logical.max(0) as u64).min(self.max_left());
        self.writes += 1;
    }

    fn set_scroll_top(&mut self, scroll_top: i64) {
        self.top = (scroll_top.max(0) as u64).min(self.max_top());
        self.writes += 1;
    }

    fn scrollbar_size(&self) -> ScrollbarSize {
        self.scrollbar_size
    }
}
