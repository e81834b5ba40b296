use alloc::sync::Arc;

use crate::grid::CellProps;
use crate::list::ItemProps;
use crate::strategy::AxisProps;
use crate::{
    CellKey, ConfigError, DEFAULT_ESTIMATED_ITEM_SIZE, Direction, GridItemRange, GridScrollEvent,
    IS_SCROLLING_DEBOUNCE_INTERVAL_MS, ItemKey, ItemRange, ItemSize, Layout, Length,
    ListScrollEvent, RtlOffsetType,
};

/// Default list overscan (items rendered past each visible edge).
pub const DEFAULT_LIST_OVERSCAN_COUNT: usize = 2;
/// Default grid overscan per axis.
pub const DEFAULT_GRID_OVERSCAN_COUNT: usize = 1;

pub(crate) const DEFAULT_OUTER_ELEMENT_TYPE: &str = "scroll";
pub(crate) const DEFAULT_INNER_ELEMENT_TYPE: &str = "view";

/// Produces the element for one materialized list item.
pub type RenderItem<E> = Arc<dyn Fn(ItemProps) -> E + Send + Sync>;
/// Produces the element for one materialized grid cell.
pub type RenderCell<E> = Arc<dyn Fn(CellProps) -> E + Send + Sync>;

/// Observer of the rendered list window. Only called when the window changes.
pub type OnItemsRenderedCallback = Arc<dyn Fn(ItemRange) + Send + Sync>;
/// Observer of the rendered grid window. Only called when the window changes.
pub type OnGridItemsRenderedCallback = Arc<dyn Fn(GridItemRange) + Send + Sync>;
/// Observer of list scroll state. Only called when the payload changes.
pub type OnListScrollCallback = Arc<dyn Fn(ListScrollEvent) + Send + Sync>;
/// Observer of grid scroll state. Only called when the payload changes.
pub type OnGridScrollCallback = Arc<dyn Fn(GridScrollEvent) + Send + Sync>;

/// Configuration for [`crate::List`].
///
/// Heavy fields are stored in `Arc`s so adapters can update a few fields and call
/// `List::set_options` without reallocating closures.
pub struct ListOptions<E, K = ItemKey> {
    pub item_count: usize,
    pub item_size: ItemSize,
    /// Size assumed for items a variable-size list has not measured yet.
    pub estimated_item_size: u32,
    pub layout: Layout,
    pub direction: Direction,
    /// Must be [`Length::Px`] for horizontal lists.
    pub width: Length,
    /// Must be [`Length::Px`] for vertical lists.
    pub height: Length,
    pub overscan_count: usize,
    pub initial_scroll_offset: Option<u64>,
    /// Pass `is_scrolling` through to `children`.
    pub use_is_scrolling: bool,
    pub item_key: Arc<dyn Fn(usize) -> K + Send + Sync>,
    pub children: Option<RenderItem<E>>,
    pub on_items_rendered: Option<OnItemsRenderedCallback>,
    pub on_scroll: Option<OnListScrollCallback>,
    /// The host's RTL scroll offset convention.
    pub rtl_offset_type: RtlOffsetType,
    pub is_scrolling_reset_delay_ms: u64,
    pub outer_element_type: Option<Arc<str>>,
    pub inner_element_type: Option<Arc<str>>,
    pub class_name: Option<Arc<str>>,
}

impl<E> ListOptions<E, ItemKey> {
    /// Creates options for a vertical LTR list keyed by index.
    ///
    /// The scrolling-axis dimension still has to be set (`with_height` for vertical lists,
    /// `with_width` for horizontal ones).
    pub fn new(item_count: usize, item_size: impl Into<ItemSize>) -> Self {
        Self::new_with_key(item_count, item_size, |i| i as u64)
    }
}

impl<E, K> ListOptions<E, K> {
    /// Creates options with a custom item key.
    pub fn new_with_key(
        item_count: usize,
        item_size: impl Into<ItemSize>,
        item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            item_count,
            item_size: item_size.into(),
            estimated_item_size: DEFAULT_ESTIMATED_ITEM_SIZE,
            layout: Layout::Vertical,
            direction: Direction::Ltr,
            width: Length::FULL,
            height: Length::FULL,
            overscan_count: DEFAULT_LIST_OVERSCAN_COUNT,
            initial_scroll_offset: None,
            use_is_scrolling: false,
            item_key: Arc::new(item_key),
            children: None,
            on_items_rendered: None,
            on_scroll: None,
            rtl_offset_type: RtlOffsetType::default(),
            is_scrolling_reset_delay_ms: IS_SCROLLING_DEBOUNCE_INTERVAL_MS,
            outer_element_type: None,
            inner_element_type: None,
            class_name: None,
        }
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_item_size(mut self, item_size: impl Into<ItemSize>) -> Self {
        self.item_size = item_size.into();
        self
    }

    pub fn with_estimated_item_size(mut self, estimated_item_size: u32) -> Self {
        self.estimated_item_size = estimated_item_size;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn with_height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    pub fn with_overscan_count(mut self, overscan_count: usize) -> Self {
        self.overscan_count = overscan_count;
        self
    }

    pub fn with_initial_scroll_offset(mut self, offset: u64) -> Self {
        self.initial_scroll_offset = Some(offset);
        self
    }

    pub fn with_use_is_scrolling(mut self, use_is_scrolling: bool) -> Self {
        self.use_is_scrolling = use_is_scrolling;
        self
    }

    pub fn with_item_key(mut self, item_key: impl Fn(usize) -> K + Send + Sync + 'static) -> Self {
        self.item_key = Arc::new(item_key);
        self
    }

    pub fn with_children(
        mut self,
        children: impl Fn(ItemProps) -> E + Send + Sync + 'static,
    ) -> Self {
        self.children = Some(Arc::new(children));
        self
    }

    pub fn with_on_items_rendered(
        mut self,
        on_items_rendered: Option<impl Fn(ItemRange) + Send + Sync + 'static>,
    ) -> Self {
        self.on_items_rendered = on_items_rendered.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: Option<impl Fn(ListScrollEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_rtl_offset_type(mut self, rtl_offset_type: RtlOffsetType) -> Self {
        self.rtl_offset_type = rtl_offset_type;
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn with_outer_element_type(mut self, element_type: impl Into<Arc<str>>) -> Self {
        self.outer_element_type = Some(element_type.into());
        self
    }

    pub fn with_inner_element_type(mut self, element_type: impl Into<Arc<str>>) -> Self {
        self.inner_element_type = Some(element_type.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<Arc<str>>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Viewport length along the scrolling axis, if it is a pixel length.
    pub fn viewport_size(&self) -> Option<u64> {
        match self.layout {
            Layout::Horizontal => self.width.px(),
            Layout::Vertical => self.height.px(),
        }
    }

    pub(crate) fn axis(&self) -> AxisProps<'_> {
        AxisProps {
            count: self.item_count,
            item_size: &self.item_size,
            estimated_item_size: self.estimated_item_size,
            viewport_size: self.viewport_size().unwrap_or(0),
        }
    }

    /// Checks the options every list needs regardless of sizing strategy.
    pub(crate) fn validate_shared(&self) -> Result<(), ConfigError> {
        if self.children.is_none() {
            return Err(ConfigError::MissingChildren);
        }
        match self.layout {
            Layout::Horizontal if self.width.px().is_none() => Err(ConfigError::InvalidWidth {
                owner: "Horizontal lists",
                found: self.width.kind(),
            }),
            Layout::Vertical if self.height.px().is_none() => Err(ConfigError::InvalidHeight {
                owner: "Vertical lists",
                found: self.height.kind(),
            }),
            _ => Ok(()),
        }
    }
}

impl<E, K> Clone for ListOptions<E, K> {
    fn clone(&self) -> Self {
        Self {
            item_count: self.item_count,
            item_size: self.item_size.clone(),
            estimated_item_size: self.estimated_item_size,
            layout: self.layout,
            direction: self.direction,
            width: self.width,
            height: self.height,
            overscan_count: self.overscan_count,
            initial_scroll_offset: self.initial_scroll_offset,
            use_is_scrolling: self.use_is_scrolling,
            item_key: Arc::clone(&self.item_key),
            children: self.children.clone(),
            on_items_rendered: self.on_items_rendered.clone(),
            on_scroll: self.on_scroll.clone(),
            rtl_offset_type: self.rtl_offset_type,
            is_scrolling_reset_delay_ms: self.is_scrolling_reset_delay_ms,
            outer_element_type: self.outer_element_type.clone(),
            inner_element_type: self.inner_element_type.clone(),
            class_name: self.class_name.clone(),
        }
    }
}

impl<E, K> core::fmt::Debug for ListOptions<E, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("item_count", &self.item_count)
            .field("item_size", &self.item_size)
            .field("estimated_item_size", &self.estimated_item_size)
            .field("layout", &self.layout)
            .field("direction", &self.direction)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("overscan_count", &self.overscan_count)
            .field("initial_scroll_offset", &self.initial_scroll_offset)
            .field("use_is_scrolling", &self.use_is_scrolling)
            .field("rtl_offset_type", &self.rtl_offset_type)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .finish_non_exhaustive()
    }
}

/// Configuration for [`crate::Grid`].
pub struct GridOptions<E, K = CellKey> {
    pub row_count: usize,
    pub row_height: ItemSize,
    pub estimated_row_height: u32,
    pub column_count: usize,
    pub column_width: ItemSize,
    pub estimated_column_width: u32,
    /// Must be [`Length::Px`].
    pub width: Length,
    /// Must be [`Length::Px`].
    pub height: Length,
    pub direction: Direction,
    pub overscan_row_count: usize,
    pub overscan_column_count: usize,
    pub initial_scroll_left: Option<u64>,
    pub initial_scroll_top: Option<u64>,
    pub use_is_scrolling: bool,
    pub item_key: Arc<dyn Fn(CellKey) -> K + Send + Sync>,
    pub children: Option<RenderCell<E>>,
    pub on_items_rendered: Option<OnGridItemsRenderedCallback>,
    pub on_scroll: Option<OnGridScrollCallback>,
    pub rtl_offset_type: RtlOffsetType,
    pub is_scrolling_reset_delay_ms: u64,
    pub outer_element_type: Option<Arc<str>>,
    pub inner_element_type: Option<Arc<str>>,
    pub class_name: Option<Arc<str>>,
}

impl<E> GridOptions<E, CellKey> {
    /// Creates options for an LTR grid keyed by `row:column`.
    ///
    /// `width` and `height` still have to be set.
    pub fn new(
        row_count: usize,
        row_height: impl Into<ItemSize>,
        column_count: usize,
        column_width: impl Into<ItemSize>,
    ) -> Self {
        Self::new_with_key(row_count, row_height, column_count, column_width, |cell| cell)
    }
}

impl<E, K> GridOptions<E, K> {
    pub fn new_with_key(
        row_count: usize,
        row_height: impl Into<ItemSize>,
        column_count: usize,
        column_width: impl Into<ItemSize>,
        item_key: impl Fn(CellKey) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            row_count,
            row_height: row_height.into(),
            estimated_row_height: DEFAULT_ESTIMATED_ITEM_SIZE,
            column_count,
            column_width: column_width.into(),
            estimated_column_width: DEFAULT_ESTIMATED_ITEM_SIZE,
            width: Length::FULL,
            height: Length::FULL,
            direction: Direction::Ltr,
            overscan_row_count: DEFAULT_GRID_OVERSCAN_COUNT,
            overscan_column_count: DEFAULT_GRID_OVERSCAN_COUNT,
            initial_scroll_left: None,
            initial_scroll_top: None,
            use_is_scrolling: false,
            item_key: Arc::new(item_key),
            children: None,
            on_items_rendered: None,
            on_scroll: None,
            rtl_offset_type: RtlOffsetType::default(),
            is_scrolling_reset_delay_ms: IS_SCROLLING_DEBOUNCE_INTERVAL_MS,
            outer_element_type: None,
            inner_element_type: None,
            class_name: None,
        }
    }

    pub fn with_row_count(mut self, row_count: usize) -> Self {
        self.row_count = row_count;
        self
    }

    pub fn with_row_height(mut self, row_height: impl Into<ItemSize>) -> Self {
        self.row_height = row_height.into();
        self
    }

    pub fn with_estimated_row_height(mut self, estimated_row_height: u32) -> Self {
        self.estimated_row_height = estimated_row_height;
        self
    }

    pub fn with_column_count(mut self, column_count: usize) -> Self {
        self.column_count = column_count;
        self
    }

    pub fn with_column_width(mut self, column_width: impl Into<ItemSize>) -> Self {
        self.column_width = column_width.into();
        self
    }

    pub fn with_estimated_column_width(mut self, estimated_column_width: u32) -> Self {
        self.estimated_column_width = estimated_column_width;
        self
    }

    pub fn with_width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn with_height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_overscan(
        mut self,
        overscan_row_count: usize,
        overscan_column_count: usize,
    ) -> Self {
        self.overscan_row_count = overscan_row_count;
        self.overscan_column_count = overscan_column_count;
        self
    }

    pub fn with_initial_scroll(
        mut self,
        scroll_left: Option<u64>,
        scroll_top: Option<u64>,
    ) -> Self {
        self.initial_scroll_left = scroll_left;
        self.initial_scroll_top = scroll_top;
        self
    }

    pub fn with_use_is_scrolling(mut self, use_is_scrolling: bool) -> Self {
        self.use_is_scrolling = use_is_scrolling;
        self
    }

    pub fn with_item_key(
        mut self,
        item_key: impl Fn(CellKey) -> K + Send + Sync + 'static,
    ) -> Self {
        self.item_key = Arc::new(item_key);
        self
    }

    pub fn with_children(
        mut self,
        children: impl Fn(CellProps) -> E + Send + Sync + 'static,
    ) -> Self {
        self.children = Some(Arc::new(children));
        self
    }

    pub fn with_on_items_rendered(
        mut self,
        on_items_rendered: Option<impl Fn(GridItemRange) + Send + Sync + 'static>,
    ) -> Self {
        self.on_items_rendered = on_items_rendered.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: Option<impl Fn(GridScrollEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_rtl_offset_type(mut self, rtl_offset_type: RtlOffsetType) -> Self {
        self.rtl_offset_type = rtl_offset_type;
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn with_outer_element_type(mut self, element_type: impl Into<Arc<str>>) -> Self {
        self.outer_element_type = Some(element_type.into());
        self
    }

    pub fn with_inner_element_type(mut self, element_type: impl Into<Arc<str>>) -> Self {
        self.inner_element_type = Some(element_type.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<Arc<str>>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub(crate) fn column_axis(&self) -> AxisProps<'_> {
        AxisProps {
            count: self.column_count,
            item_size: &self.column_width,
            estimated_item_size: self.estimated_column_width,
            viewport_size: self.width.px().unwrap_or(0),
        }
    }

    pub(crate) fn row_axis(&self) -> AxisProps<'_> {
        AxisProps {
            count: self.row_count,
            item_size: &self.row_height,
            estimated_item_size: self.estimated_row_height,
            viewport_size: self.height.px().unwrap_or(0),
        }
    }

    pub(crate) fn validate_shared(&self) -> Result<(), ConfigError> {
        if self.children.is_none() {
            return Err(ConfigError::MissingChildren);
        }
        if self.width.px().is_none() {
            return Err(ConfigError::InvalidWidth {
                owner: "Grids",
                found: self.width.kind(),
            });
        }
        if self.height.px().is_none() {
            return Err(ConfigError::InvalidHeight {
                owner: "Grids",
                found: self.height.kind(),
            });
        }
        Ok(())
    }
}

impl<E, K> Clone for GridOptions<E, K> {
    fn clone(&self) -> Self {
        Self {
            row_count: self.row_count,
            row_height: self.row_height.clone(),
            estimated_row_height: self.estimated_row_height,
            column_count: self.column_count,
            column_width: self.column_width.clone(),
            estimated_column_width: self.estimated_column_width,
            width: self.width,
            height: self.height,
            direction: self.direction,
            overscan_row_count: self.overscan_row_count,
            overscan_column_count: self.overscan_column_count,
            initial_scroll_left: self.initial_scroll_left,
            initial_scroll_top: self.initial_scroll_top,
            use_is_scrolling: self.use_is_scrolling,
            item_key: Arc::clone(&self.item_key),
            children: self.children.clone(),
            on_items_rendered: self.on_items_rendered.clone(),
            on_scroll: self.on_scroll.clone(),
            rtl_offset_type: self.rtl_offset_type,
            is_scrolling_reset_delay_ms: self.is_scrolling_reset_delay_ms,
            outer_element_type: self.outer_element_type.clone(),
            inner_element_type: self.inner_element_type.clone(),
            class_name: self.class_name.clone(),
        }
    }
}

impl<E, K> core::fmt::Debug for GridOptions<E, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridOptions")
            .field("row_count", &self.row_count)
            .field("row_height", &self.row_height)
            .field("column_count", &self.column_count)
            .field("column_width", &self.column_width)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("direction", &self.direction)
            .field("overscan_row_count", &self.overscan_row_count)
            .field("overscan_column_count", &self.overscan_column_count)
            .field("initial_scroll_left", &self.initial_scroll_left)
            .field("initial_scroll_top", &self.initial_scroll_top)
            .field("use_is_scrolling", &self.use_is_scrolling)
            .field("rtl_offset_type", &self.rtl_offset_type)
            .finish_non_exhaustive()
    }
}
