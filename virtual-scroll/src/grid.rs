use alloc::vec::Vec;

use crate::engine::{Lifecycle, clamp_offset};
use crate::memo::LastPayload;
use crate::options::RenderCell;
use crate::strategy::{self, SizeStrategy};
use crate::style::ItemStyleCache;
use crate::{
    Align, CellKey, ConfigError, FixedSize, GridItemRange, GridOptions, GridScrollEvent,
    GridScrollState, InnerProps, ItemRange, ItemStyle, Length, OuterProps, ScrollDirection,
    ScrollEngine, ScrollMetrics, ScrollSurface, ScrollbarSize, TimeoutHandle, Timer, VariableSize,
};

/// A grid whose rows share one height and whose columns share one width.
pub type FixedSizeGrid<E, K = CellKey> = Grid<FixedSize, E, K>;
/// A grid whose row heights and column widths come from per-index functions.
pub type VariableSizeGrid<E, K = CellKey> = Grid<VariableSize, E, K>;

/// What the `children` callback receives for one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellProps {
    pub row_index: usize,
    pub column_index: usize,
    /// Only set when `use_is_scrolling` is enabled.
    pub is_scrolling: Option<bool>,
    pub style: ItemStyle,
}

/// One materialized cell of a [`GridFrame`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedCell<E, K = CellKey> {
    pub key: K,
    pub row_index: usize,
    pub column_index: usize,
    pub element: E,
}

/// Output of [`Grid::render`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridFrame<E, K = CellKey> {
    pub outer: OuterProps,
    pub inner: InnerProps,
    pub range: GridItemRange,
    /// Cells in row-major order, overscan included.
    pub cells: Vec<RenderedCell<E, K>>,
}

/// Target of [`Grid::scroll_to`]. `None` keeps the current offset of that axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToPosition {
    pub left: Option<u64>,
    pub top: Option<u64>,
}

/// Target of [`Grid::scroll_to_item`]. `None` leaves that axis where it is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridScrollTarget {
    pub row_index: Option<usize>,
    pub column_index: Option<usize>,
    pub align: Align,
}

/// A two-axis windowed grid.
///
/// Both axes use the same [`SizeStrategy`]. Horizontal offsets are logical (distance from
/// the start edge) even in RTL containers; see [`crate::RtlOffsetType`].
pub struct Grid<S: SizeStrategy, E, K = CellKey> {
    options: GridOptions<E, K>,
    children: RenderCell<E>,
    column_props: S::InstanceProps,
    row_props: S::InstanceProps,
    state: GridScrollState,
    timer: Timer,
    styles: ItemStyleCache<CellKey>,
    reset_styles_on_commit: bool,
    pending_host_write: bool,
    scrollbar_size: ScrollbarSize,
    last_items_rendered: LastPayload<GridItemRange>,
    last_scroll: LastPayload<GridScrollEvent>,
    lifecycle: Lifecycle,
    needs_render: bool,
}

impl<S: SizeStrategy, E, K> Grid<S, E, K> {
    pub fn new(options: GridOptions<E, K>) -> Result<Self, ConfigError> {
        let children = Self::validate(&options)?;
        vdebug!(
            row_count = options.row_count,
            column_count = options.column_count,
            direction = ?options.direction,
            "Grid::new"
        );
        let column_props = S::init_instance_props(&options.column_axis());
        let row_props = S::init_instance_props(&options.row_axis());
        Ok(Self {
            state: GridScrollState {
                scroll_left: options.initial_scroll_left.unwrap_or(0),
                scroll_top: options.initial_scroll_top.unwrap_or(0),
                ..GridScrollState::default()
            },
            options,
            children,
            column_props,
            row_props,
            timer: Timer::new(),
            styles: ItemStyleCache::new(),
            reset_styles_on_commit: false,
            pending_host_write: false,
            scrollbar_size: ScrollbarSize::default(),
            last_items_rendered: LastPayload::new(),
            last_scroll: LastPayload::new(),
            lifecycle: Lifecycle::Created,
            needs_render: true,
        })
    }

    fn validate(options: &GridOptions<E, K>) -> Result<RenderCell<E>, ConfigError> {
        options.validate_shared()?;
        S::validate_props(&options.column_axis(), "column_width")?;
        S::validate_props(&options.row_axis(), "row_height")?;
        options.children.clone().ok_or(ConfigError::MissingChildren)
    }

    pub fn options(&self) -> &GridOptions<E, K> {
        &self.options
    }

    /// Replaces the options. On error the previous options stay in effect.
    pub fn set_options(&mut self, options: GridOptions<E, K>) -> Result<(), ConfigError> {
        let children = Self::validate(&options)?;
        let reset_styles = S::RESET_STYLE_CACHE_ON_ITEM_SIZE_CHANGE
            && (!self.options.column_width.same_as(&options.column_width)
                || !self.options.row_height.same_as(&options.row_height)
                || self.options.direction != options.direction);
        self.options = options;
        self.children = children;
        vtrace!(
            row_count = self.options.row_count,
            column_count = self.options.column_count,
            reset_styles,
            "Grid::set_options"
        );
        if reset_styles {
            self.styles.reset();
        }
        self.needs_render = true;
        Ok(())
    }

    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut GridOptions<E, K>),
    ) -> Result<(), ConfigError> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    pub fn column_instance_props(&self) -> &S::InstanceProps {
        &self.column_props
    }

    pub fn row_instance_props(&self) -> &S::InstanceProps {
        &self.row_props
    }

    pub fn scroll_state(&self) -> GridScrollState {
        self.state
    }

    pub fn scroll_left(&self) -> u64 {
        self.state.scroll_left
    }

    pub fn scroll_top(&self) -> u64 {
        self.state.scroll_top
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

    pub fn style_cache_generation(&self) -> u64 {
        self.styles.generation()
    }

    pub fn style_cache_len(&self) -> usize {
        self.styles.len()
    }

    pub fn estimated_total_width(&self) -> u64 {
        S::estimated_total_size(&self.options.column_axis(), &self.column_props)
    }

    pub fn estimated_total_height(&self) -> u64 {
        S::estimated_total_size(&self.options.row_axis(), &self.row_props)
    }

    fn is_empty(&self) -> bool {
        self.options.column_count == 0 || self.options.row_count == 0
    }

    /// The current window of both axes. A grid with no rows or no columns yields empty
    /// ranges.
    pub fn range_to_render(&self) -> GridItemRange {
        if self.is_empty() {
            return GridItemRange::default();
        }
        GridItemRange {
            columns: strategy::range_to_render::<S>(
                &self.options.column_axis(),
                self.state.scroll_left,
                &self.column_props,
                self.options.overscan_column_count,
                self.state.is_scrolling,
                self.state.horizontal_scroll_direction,
            ),
            rows: strategy::range_to_render::<S>(
                &self.options.row_axis(),
                self.state.scroll_top,
                &self.row_props,
                self.options.overscan_row_count,
                self.state.is_scrolling,
                self.state.vertical_scroll_direction,
            ),
        }
    }

    /// Requests a scroll on either or both axes.
    ///
    /// Returns `false` when both resulting offsets equal the current ones.
    pub fn scroll_to(&mut self, position: ScrollToPosition, now_ms: u64) -> bool {
        if self.lifecycle.is_unmounted() {
            vtrace!("Grid::scroll_to ignored after unmount");
            return false;
        }
        let prev_left = self.state.scroll_left;
        let prev_top = self.state.scroll_top;
        let left = position.left.unwrap_or(prev_left);
        let top = position.top.unwrap_or(prev_top);
        if left == prev_left && top == prev_top {
            return false;
        }
        vtrace!(left, top, now_ms, "Grid::scroll_to");
        self.state.horizontal_scroll_direction = ScrollDirection::between(prev_left, left);
        self.state.vertical_scroll_direction = ScrollDirection::between(prev_top, top);
        self.state.scroll_left = left;
        self.state.scroll_top = top;
        self.state.scroll_update_was_requested = true;
        self.pending_host_write = true;
        self.timer
            .request_timeout(now_ms, self.options.is_scrolling_reset_delay_ms);
        self.needs_render = true;
        true
    }

    /// Scrolls a row and/or a column into view.
    ///
    /// A scrollbar is assumed to cover the trailing edge of an axis when the perpendicular
    /// axis overflows its viewport.
    pub fn scroll_to_item(&mut self, target: GridScrollTarget, now_ms: u64) -> bool {
        let column_axis = self.options.column_axis();
        let row_axis = self.options.row_axis();
        let total_width = S::estimated_total_size(&column_axis, &self.column_props);
        let total_height = S::estimated_total_size(&row_axis, &self.row_props);
        let horizontal_scrollbar = if total_width > column_axis.viewport_size {
            self.scrollbar_size.horizontal_height
        } else {
            0
        };
        let vertical_scrollbar = if total_height > row_axis.viewport_size {
            self.scrollbar_size.vertical_width
        } else {
            0
        };

        let left = target.column_index.map(|index| {
            S::offset_for_index_and_alignment(
                &column_axis,
                index.min(column_axis.count.saturating_sub(1)),
                target.align,
                self.state.scroll_left,
                &self.column_props,
                vertical_scrollbar,
            )
        });
        let top = target.row_index.map(|index| {
            S::offset_for_index_and_alignment(
                &row_axis,
                index.min(row_axis.count.saturating_sub(1)),
                target.align,
                self.state.scroll_top,
                &self.row_props,
                horizontal_scrollbar,
            )
        });
        vtrace!(
            row_index = ?target.row_index,
            column_index = ?target.column_index,
            align = ?target.align,
            ?left,
            ?top,
            "Grid::scroll_to_item"
        );
        self.scroll_to(ScrollToPosition { left, top }, now_ms)
    }

    /// Reconciles a host scroll event. Each axis is clamped independently.
    pub fn handle_scroll(&mut self, metrics: &ScrollMetrics, now_ms: u64) -> bool {
        if self.lifecycle.is_unmounted() {
            vtrace!("Grid::handle_scroll ignored after unmount");
            return false;
        }
        let raw_left = if self.options.direction.is_rtl() {
            self.options
                .rtl_offset_type
                .to_logical(metrics.scroll_left, metrics)
        } else {
            metrics.scroll_left
        };
        let left = clamp_offset(raw_left, metrics.max_scroll_left());
        let top = clamp_offset(metrics.scroll_top, metrics.max_scroll_top());
        let prev_left = self.state.scroll_left;
        let prev_top = self.state.scroll_top;
        if left == prev_left && top == prev_top {
            return false;
        }
        vtrace!(left, top, now_ms, "Grid::handle_scroll");
        self.state = GridScrollState {
            scroll_left: left,
            scroll_top: top,
            horizontal_scroll_direction: ScrollDirection::between(prev_left, left),
            vertical_scroll_direction: ScrollDirection::between(prev_top, top),
            is_scrolling: true,
            scroll_update_was_requested: false,
        };
        self.pending_host_write = false;
        self.timer
            .request_timeout(now_ms, self.options.is_scrolling_reset_delay_ms);
        self.needs_render = true;
        true
    }

    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.lifecycle.is_unmounted() {
            return false;
        }
        if self.timer.poll(now_ms).is_none() {
            return false;
        }
        vtrace!(now_ms, "Grid::tick quiet period elapsed");
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
            if self.options.initial_scroll_left.is_some() {
                surface.set_scroll_left(self.host_scroll_left(&metrics));
            }
            if let Some(top) = self.options.initial_scroll_top {
                surface.set_scroll_top(top.min(i64::MAX as u64) as i64);
            }
        }
        vdebug!(
            scroll_left = self.state.scroll_left,
            scroll_top = self.state.scroll_top,
            "Grid::mount"
        );
        self.notify_observers();
    }

    pub fn commit(&mut self, surface: Option<&mut dyn ScrollSurface>) {
        if self.lifecycle.is_unmounted() {
            return;
        }
        if let Some(surface) = surface.filter(|_| self.pending_host_write) {
            self.pending_host_write = false;
            let metrics = surface.metrics();
            surface.set_scroll_left(self.host_scroll_left(&metrics));
            surface.set_scroll_top(self.state.scroll_top.min(i64::MAX as u64) as i64);
        }
        self.notify_observers();
        if self.reset_styles_on_commit {
            self.reset_styles_on_commit = false;
            self.styles.reset();
        }
    }

    /// The current horizontal offset in the host's RTL convention.
    fn host_scroll_left(&self, metrics: &ScrollMetrics) -> i64 {
        if self.options.direction.is_rtl() {
            self.options
                .rtl_offset_type
                .to_host(self.state.scroll_left, metrics)
        } else {
            self.state.scroll_left.min(i64::MAX as u64) as i64
        }
    }

    pub fn unmount(&mut self) {
        if self.timer.cancel_timeout().is_some() {
            vtrace!("Grid::unmount cancelled the pending timeout");
        }
        self.lifecycle = Lifecycle::Unmounted;
    }

    fn notify_observers(&mut self) {
        if let Some(on_items_rendered) = self.options.on_items_rendered.clone() {
            if !self.is_empty() {
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

    fn cell_style(&mut self, row_index: usize, column_index: usize) -> ItemStyle {
        let Self {
            options,
            column_props,
            row_props,
            styles,
            ..
        } = self;
        let key = CellKey {
            row_index,
            column_index,
        };
        styles.get_or_insert_with(key, || {
            let column_axis = options.column_axis();
            let row_axis = options.row_axis();
            ItemStyle::absolute(
                options.direction,
                S::item_offset(&column_axis, column_index, column_props),
                S::item_offset(&row_axis, row_index, row_props),
                Length::Px(S::item_size(&column_axis, column_index, column_props) as u64),
                Length::Px(S::item_size(&row_axis, row_index, row_props) as u64),
            )
        })
    }

    /// Materializes the current window, row by row.
    pub fn render(&mut self) -> GridFrame<E, K> {
        self.needs_render = false;
        let range = self.range_to_render();
        let is_scrolling = self.options.use_is_scrolling.then_some(self.state.is_scrolling);

        let mut cells = Vec::new();
        if !self.is_empty() {
            let ItemRange {
                overscan_start_index: column_start,
                overscan_stop_index: column_stop,
                ..
            } = range.columns;
            cells.reserve(
                (range.rows.overscan_stop_index - range.rows.overscan_start_index + 1)
                    * (column_stop - column_start + 1),
            );
            for row_index in range.rows.indexes() {
                for column_index in column_start..=column_stop {
                    let style = self.cell_style(row_index, column_index);
                    let element = (self.children)(CellProps {
                        row_index,
                        column_index,
                        is_scrolling,
                        style,
                    });
                    let key = (self.options.item_key)(CellKey {
                        row_index,
                        column_index,
                    });
                    cells.push(RenderedCell {
                        key,
                        row_index,
                        column_index,
                        element,
                    });
                }
            }
        }

        GridFrame {
            outer: OuterProps::new(
                self.options.outer_element_type.as_ref(),
                self.options.class_name.as_ref(),
                self.options.width,
                self.options.height,
                self.options.direction,
            ),
            inner: InnerProps::new(
                self.options.inner_element_type.as_ref(),
                Length::Px(self.estimated_total_width()),
                Length::Px(self.estimated_total_height()),
                self.state.is_scrolling,
            ),
            range,
            cells,
        }
    }
}

impl<E, K> Grid<VariableSize, E, K> {
    /// Forgets measured column widths and/or row heights from the given indices on, and
    /// drops the item-style cache.
    pub fn reset_after_indices(
        &mut self,
        column_index: Option<usize>,
        row_index: Option<usize>,
        force_render: bool,
    ) {
        vtrace!(?column_index, ?row_index, force_render, "Grid::reset_after_indices");
        if let Some(index) = column_index {
            self.column_props.reset_after_index(index);
        }
        if let Some(index) = row_index {
            self.row_props.reset_after_index(index);
        }
        self.styles.reset();
        if force_render {
            self.needs_render = true;
        }
    }

    pub fn reset_after_column_index(&mut self, column_index: usize, force_render: bool) {
        self.reset_after_indices(Some(column_index), None, force_render);
    }

    pub fn reset_after_row_index(&mut self, row_index: usize, force_render: bool) {
        self.reset_after_indices(None, Some(row_index), force_render);
    }
}

impl<S: SizeStrategy, E, K> ScrollEngine for Grid<S, E, K> {
    type Frame = GridFrame<E, K>;

    fn mount(&mut self, surface: Option<&mut dyn ScrollSurface>) {
        Grid::mount(self, surface);
    }

    fn handle_scroll(&mut self, metrics: &ScrollMetrics, now_ms: u64) -> bool {
        Grid::handle_scroll(self, metrics, now_ms)
    }

    fn tick(&mut self, now_ms: u64) -> bool {
        Grid::tick(self, now_ms)
    }

    fn render(&mut self) -> Self::Frame {
        Grid::render(self)
    }

    fn commit(&mut self, surface: Option<&mut dyn ScrollSurface>) {
        Grid::commit(self, surface);
    }

    fn unmount(&mut self) {
        Grid::unmount(self);
    }

    fn is_scrolling(&self) -> bool {
        Grid::is_scrolling(self)
    }

    fn needs_render(&self) -> bool {
        Grid::needs_render(self)
    }

    fn pending_timeout(&self) -> Option<TimeoutHandle> {
        Grid::pending_timeout(self)
    }
}

impl<S: SizeStrategy, E, K> core::fmt::Debug for Grid<S, E, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Grid")
            .field("options", &self.options)
            .field("column_props", &self.column_props)
            .field("row_props", &self.row_props)
            .field("state", &self.state)
            .field("timer", &self.timer)
            .field("style_cache_generation", &self.styles.generation())
            .field("lifecycle", &self.lifecycle)
            .finish_non_exhaustive()
    }
}
