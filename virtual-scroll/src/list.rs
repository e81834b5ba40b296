use alloc::vec::Vec;

use crate::engine::{Lifecycle, clamp_offset};
use crate::memo::LastPayload;
use crate::options::RenderItem;
use crate::strategy::{self, SizeStrategy};
use crate::style::ItemStyleCache;
use crate::{
    Align, ConfigError, FixedSize, InnerProps, ItemKey, ItemRange, ItemStyle, Layout, Length,
    ListOptions, ListScrollEvent, ListScrollState, OuterProps, ScrollDirection, ScrollEngine,
    ScrollMetrics, ScrollSurface, ScrollbarSize, TimeoutHandle, Timer, VariableSize,
};

/// A list whose items all share one size.
pub type FixedSizeList<E, K = ItemKey> = List<FixedSize, E, K>;
/// A list whose items are sized by a per-index function.
pub type VariableSizeList<E, K = ItemKey> = List<VariableSize, E, K>;

/// What the `children` callback receives for one item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemProps {
    pub index: usize,
    /// Only set when `use_is_scrolling` is enabled.
    pub is_scrolling: Option<bool>,
    pub style: ItemStyle,
}

/// One materialized item of a [`ListFrame`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedItem<E, K = ItemKey> {
    pub key: K,
    pub index: usize,
    pub element: E,
}

/// Output of [`List::render`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListFrame<E, K = ItemKey> {
    pub outer: OuterProps,
    pub inner: InnerProps,
    pub range: ItemRange,
    /// Items in index order, overscan included.
    pub items: Vec<RenderedItem<E, K>>,
}

/// A single-axis windowed list.
///
/// The engine is headless: it never touches UI objects. The adapter feeds it host scroll
/// events, polls [`List::tick`] for the quiet-period timer, and applies the [`ListFrame`]s
/// returned by [`List::render`]. See [`ScrollEngine`] for the full cycle.
pub struct List<S: SizeStrategy, E, K = ItemKey> {
    options: ListOptions<E, K>,
    children: RenderItem<E>,
    instance_props: S::InstanceProps,
    state: ListScrollState,
    timer: Timer,
    styles: ItemStyleCache<usize>,
    reset_styles_on_commit: bool,
    pending_host_write: bool,
    scrollbar_size: ScrollbarSize,
    cross_axis_overflows: bool,
    last_items_rendered: LastPayload<ItemRange>,
    last_scroll: LastPayload<ListScrollEvent>,
    lifecycle: Lifecycle,
    needs_render: bool,
}

impl<S: SizeStrategy, E, K> List<S, E, K> {
    /// Creates a list from options.
    ///
    /// `options.initial_scroll_offset` becomes the initial scroll offset; it is written to
    /// the host on [`List::mount`].
    pub fn new(options: ListOptions<E, K>) -> Result<Self, ConfigError> {
        let children = Self::validate(&options)?;
        vdebug!(
            item_count = options.item_count,
            layout = ?options.layout,
            direction = ?options.direction,
            overscan_count = options.overscan_count,
            "List::new"
        );
        let instance_props = S::init_instance_props(&options.axis());
        Ok(Self {
            state: ListScrollState {
                scroll_offset: options.initial_scroll_offset.unwrap_or(0),
                ..ListScrollState::default()
            },
            options,
            children,
            instance_props,
            timer: Timer::new(),
            styles: ItemStyleCache::new(),
            reset_styles_on_commit: false,
            pending_host_write: false,
            scrollbar_size: ScrollbarSize::default(),
            cross_axis_overflows: false,
            last_items_rendered: LastPayload::new(),
            last_scroll: LastPayload::new(),
            lifecycle: Lifecycle::Created,
            needs_render: true,
        })
    }

    fn validate(options: &ListOptions<E, K>) -> Result<RenderItem<E>, ConfigError> {
        options.validate_shared()?;
        S::validate_props(&options.axis(), "item_size")?;
        options.children.clone().ok_or(ConfigError::MissingChildren)
    }

    pub fn options(&self) -> &ListOptions<E, K> {
        &self.options
    }

    /// Replaces the options.
    ///
    /// On error the previous options stay in effect. The item-style cache is dropped when
    /// the item size, layout, or direction changed.
    pub fn set_options(&mut self, options: ListOptions<E, K>) -> Result<(), ConfigError> {
        let children = Self::validate(&options)?;
        let reset_styles = S::RESET_STYLE_CACHE_ON_ITEM_SIZE_CHANGE
            && (!self.options.item_size.same_as(&options.item_size)
                || self.options.layout != options.layout
                || self.options.direction != options.direction);
        self.options = options;
        self.children = children;
        vtrace!(
            item_count = self.options.item_count,
            reset_styles,
            "List::set_options"
        );
        if reset_styles {
            self.styles.reset();
        }
        self.needs_render = true;
        Ok(())
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut ListOptions<E, K>),
    ) -> Result<(), ConfigError> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    pub fn instance_props(&self) -> &S::InstanceProps {
        &self.instance_props
    }

    pub fn scroll_state(&self) -> ListScrollState {
        self.state
    }

    pub fn scroll_offset(&self) -> u64 {
        self.state.scroll_offset
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.state.scroll_direction
    }

    pub fn is_scrolling(&self) -> bool {
        self.state.is_scrolling
    }

    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    pub fn pending_timeout(&self) -> Option<TimeoutHandle> {
        self.timer.pending()
    }

    /// Number of times the item-style cache has been dropped.
    pub fn style_cache_generation(&self) -> u64 {
        self.styles.generation()
    }

    pub fn style_cache_len(&self) -> usize {
        self.styles.len()
    }

    pub fn estimated_total_size(&self) -> u64 {
        S::estimated_total_size(&self.options.axis(), &self.instance_props)
    }

    /// The current window. Empty lists yield [`ItemRange::EMPTY`].
    pub fn range_to_render(&self) -> ItemRange {
        if self.options.item_count == 0 {
            return ItemRange::EMPTY;
        }
        strategy::range_to_render::<S>(
            &self.options.axis(),
            self.state.scroll_offset,
            &self.instance_props,
            self.options.overscan_count,
            self.state.is_scrolling,
            self.state.scroll_direction,
        )
    }

    /// Requests a scroll to `offset`.
    ///
    /// Returns `false` (and does nothing) when `offset` is the current offset. Otherwise the
    /// offset is recorded as requested and written to the host on the next [`List::commit`].
    /// `is_scrolling` is left as is.
    pub fn scroll_to(&mut self, offset: u64, now_ms: u64) -> bool {
        if self.lifecycle.is_unmounted() {
            vtrace!(offset, "List::scroll_to ignored after unmount");
            return false;
        }
        let prev = self.state.scroll_offset;
        if offset == prev {
            return false;
        }
        vtrace!(prev, offset, now_ms, "List::scroll_to");
        self.state.scroll_direction = ScrollDirection::between(prev, offset);
        self.state.scroll_offset = offset;
        self.state.scroll_update_was_requested = true;
        self.pending_host_write = true;
        self.timer
            .request_timeout(now_ms, self.options.is_scrolling_reset_delay_ms);
        self.needs_render = true;
        true
    }

    /// Scrolls so that `index` (clamped to the last item) lands according to `align`.
    pub fn scroll_to_item(&mut self, index: usize, align: Align, now_ms: u64) -> bool {
        let axis = self.options.axis();
        let index = index.min(axis.count.saturating_sub(1));
        let offset = S::offset_for_index_and_alignment(
            &axis,
            index,
            align,
            self.state.scroll_offset,
            &self.instance_props,
            self.cross_axis_scrollbar_size(),
        );
        vtrace!(index, ?align, offset, "List::scroll_to_item");
        self.scroll_to(offset, now_ms)
    }

    /// A perpendicular scrollbar covers the trailing edge of the viewport only while the
    /// cross axis overflows.
    fn cross_axis_scrollbar_size(&self) -> u32 {
        if !self.cross_axis_overflows {
            return 0;
        }
        match self.options.layout {
            Layout::Vertical => self.scrollbar_size.horizontal_height,
            Layout::Horizontal => self.scrollbar_size.vertical_width,
        }
    }

    fn observe_metrics(&mut self, metrics: &ScrollMetrics) {
        self.cross_axis_overflows = match self.options.layout {
            Layout::Vertical => metrics.scroll_width > metrics.client_width,
            Layout::Horizontal => metrics.scroll_height > metrics.client_height,
        };
    }

    /// Reconciles a host scroll event.
    ///
    /// Horizontal offsets go through the configured RTL convention first. The offset is then
    /// clamped into the scrollable extent; an unchanged offset is not a transition.
    pub fn handle_scroll(&mut self, metrics: &ScrollMetrics, now_ms: u64) -> bool {
        if self.lifecycle.is_unmounted() {
            vtrace!("List::handle_scroll ignored after unmount");
            return false;
        }
        self.observe_metrics(metrics);
        let offset = match self.options.layout {
            Layout::Horizontal => {
                let raw = if self.options.direction.is_rtl() {
                    self.options
                        .rtl_offset_type
                        .to_logical(metrics.scroll_left, metrics)
                } else {
                    metrics.scroll_left
                };
                clamp_offset(raw, metrics.max_scroll_left())
            }
            Layout::Vertical => clamp_offset(metrics.scroll_top, metrics.max_scroll_top()),
        };
        let prev = self.state.scroll_offset;
        if offset == prev {
            return false;
        }
        vtrace!(prev, offset, now_ms, "List::handle_scroll");
        self.state = ListScrollState {
            scroll_offset: offset,
            scroll_direction: ScrollDirection::between(prev, offset),
            is_scrolling: true,
            scroll_update_was_requested: false,
        };
        self.pending_host_write = false;
        self.timer
            .request_timeout(now_ms, self.options.is_scrolling_reset_delay_ms);
        self.needs_render = true;
        true
    }

    /// Ends the quiet period if its deadline has passed.
    ///
    /// Clears `is_scrolling`; the item-style cache is dropped on the following commit.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.lifecycle.is_unmounted() {
            return false;
        }
        if self.timer.poll(now_ms).is_none() {
            return false;
        }
        vtrace!(now_ms, "List::tick quiet period elapsed");
        self.state.is_scrolling = false;
        self.reset_styles_on_commit = true;
        self.needs_render = true;
        true
    }

    pub fn mount(&mut self, surface: Option<&mut dyn ScrollSurface>) {
        if self.lifecycle.is_unmounted() {
            return;
        }
        self.lifecycle = Lifecycle::Mounted;
        if let Some(surface) = surface {
            self.scrollbar_size = surface.scrollbar_size();
            let metrics = surface.metrics();
            if self.options.initial_scroll_offset.is_some() {
                self.write_offset(surface, &metrics);
            }
            self.observe_metrics(&surface.metrics());
        }
        vdebug!(scroll_offset = self.state.scroll_offset, "List::mount");
        self.notify_observers();
    }

    /// Finishes an update: writes a requested offset to the host, runs the observers, then
    /// drops the style cache if the quiet period ended.
    pub fn commit(&mut self, surface: Option<&mut dyn ScrollSurface>) {
        if self.lifecycle.is_unmounted() {
            return;
        }
        if let Some(surface) = surface {
            let metrics = surface.metrics();
            self.observe_metrics(&metrics);
            if self.pending_host_write {
                self.pending_host_write = false;
                self.write_offset(surface, &metrics);
            }
        }
        self.notify_observers();
        if self.reset_styles_on_commit {
            self.reset_styles_on_commit = false;
            self.styles.reset();
        }
    }

    /// Writes the current offset to the host, in the host's RTL convention if needed.
    fn write_offset(&self, surface: &mut dyn ScrollSurface, metrics: &ScrollMetrics) {
        let offset = self.state.scroll_offset;
        match self.options.layout {
            Layout::Horizontal if self.options.direction.is_rtl() => {
                surface.set_scroll_left(self.options.rtl_offset_type.to_host(offset, metrics))
            }
            Layout::Horizontal => surface.set_scroll_left(offset.min(i64::MAX as u64) as i64),
            Layout::Vertical => surface.set_scroll_top(offset.min(i64::MAX as u64) as i64),
        }
    }

    pub fn unmount(&mut self) {
        if self.timer.cancel_timeout().is_some() {
            vtrace!("List::unmount cancelled the pending timeout");
        }
        self.lifecycle = Lifecycle::Unmounted;
    }

    fn notify_observers(&mut self) {
        if let Some(on_items_rendered) = self.options.on_items_rendered.clone() {
            // Empty lists have no window to report.
            if self.options.item_count > 0 {
                let range = self.range_to_render();
                if self.last_items_rendered.changed(range) {
                    on_items_rendered(range);
                }
            }
        }
        if let Some(on_scroll) = self.options.on_scroll.clone() {
            let event = self.state.event();
            if self.last_scroll.changed(event) {
                on_scroll(event);
            }
        }
    }

    fn item_style(&mut self, index: usize) -> ItemStyle {
        let Self {
            options,
            instance_props,
            styles,
            ..
        } = self;
        styles.get_or_insert_with(index, || {
            let axis = options.axis();
            let offset = S::item_offset(&axis, index, instance_props);
            let size = Length::Px(S::item_size(&axis, index, instance_props) as u64);
            match options.layout {
                Layout::Horizontal => {
                    ItemStyle::absolute(options.direction, offset, 0, size, Length::FULL)
                }
                Layout::Vertical => {
                    ItemStyle::absolute(options.direction, 0, offset, Length::FULL, size)
                }
            }
        })
    }

    /// Materializes the current window.
    pub fn render(&mut self) -> ListFrame<E, K> {
        self.needs_render = false;
        let range = self.range_to_render();
        let is_scrolling = self.options.use_is_scrolling.then_some(self.state.is_scrolling);

        let mut items = Vec::new();
        if self.options.item_count > 0 {
            items.reserve(range.overscan_stop_index - range.overscan_start_index + 1);
            for index in range.indexes() {
                let style = self.item_style(index);
                let element = (self.children)(ItemProps {
                    index,
                    is_scrolling,
                    style,
                });
                items.push(RenderedItem {
                    key: (self.options.item_key)(index),
                    index,
                    element,
                });
            }
        }

        // Read after the items: variable sizes may have measured more of the list.
        let total = Length::Px(self.estimated_total_size());
        let (inner_width, inner_height) = match self.options.layout {
            Layout::Horizontal => (total, Length::FULL),
            Layout::Vertical => (Length::FULL, total),
        };
        ListFrame {
            outer: OuterProps::new(
                self.options.outer_element_type.as_ref(),
                self.options.class_name.as_ref(),
                self.options.width,
                self.options.height,
                self.options.direction,
            ),
            inner: InnerProps::new(
                self.options.inner_element_type.as_ref(),
                inner_width,
                inner_height,
                self.state.is_scrolling,
            ),
            range,
            items,
        }
    }
}

impl<E, K> List<VariableSize, E, K> {
    /// Forgets measured sizes from `index` on and drops the item-style cache.
    ///
    /// Call this when the size function starts returning different values for existing
    /// items. With `force_render` the list asks to be re-rendered right away.
    pub fn reset_after_index(&mut self, index: usize, force_render: bool) {
        vtrace!(index, force_render, "List::reset_after_index");
        self.instance_props.reset_after_index(index);
        self.styles.reset();
        if force_render {
            self.needs_render = true;
        }
    }
}

impl<S: SizeStrategy, E, K> ScrollEngine for List<S, E, K> {
    type Frame = ListFrame<E, K>;

    fn mount(&mut self, surface: Option<&mut dyn ScrollSurface>) {
        List::mount(self, surface);
    }

    fn handle_scroll(&mut self, metrics: &ScrollMetrics, now_ms: u64) -> bool {
        List::handle_scroll(self, metrics, now_ms)
    }

    fn tick(&mut self, now_ms: u64) -> bool {
        List::tick(self, now_ms)
    }

    fn render(&mut self) -> Self::Frame {
        List::render(self)
    }

    fn commit(&mut self, surface: Option<&mut dyn ScrollSurface>) {
        List::commit(self, surface);
    }

    fn unmount(&mut self) {
        List::unmount(self);
    }

    fn is_scrolling(&self) -> bool {
        List::is_scrolling(self)
    }

    fn needs_render(&self) -> bool {
        List::needs_render(self)
    }

    fn pending_timeout(&self) -> Option<TimeoutHandle> {
        List::pending_timeout(self)
    }
}

impl<S: SizeStrategy, E, K> core::fmt::Debug for List<S, E, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("List")
            .field("options", &self.options)
            .field("instance_props", &self.instance_props)
            .field("state", &self.state)
            .field("timer", &self.timer)
            .field("style_cache_generation", &self.styles.generation())
            .field("lifecycle", &self.lifecycle)
            .finish_non_exhaustive()
    }
}
