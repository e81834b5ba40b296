use crate::ScrollDirection;

/// A lightweight, serializable snapshot of a list's scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListScrollState {
    pub scroll_offset: u64,
    pub scroll_direction: ScrollDirection,
    pub is_scrolling: bool,
    /// `true` when the last offset change came from `scroll_to`/`scroll_to_item` rather than
    /// from the host.
    pub scroll_update_was_requested: bool,
}

impl ListScrollState {
    pub fn event(&self) -> ListScrollEvent {
        ListScrollEvent {
            scroll_direction: self.scroll_direction,
            scroll_offset: self.scroll_offset,
            scroll_update_was_requested: self.scroll_update_was_requested,
        }
    }
}

/// A lightweight, serializable snapshot of a grid's scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridScrollState {
    pub scroll_left: u64,
    pub scroll_top: u64,
    pub horizontal_scroll_direction: ScrollDirection,
    pub vertical_scroll_direction: ScrollDirection,
    pub is_scrolling: bool,
    pub scroll_update_was_requested: bool,
}

impl GridScrollState {
    pub fn event(&self) -> GridScrollEvent {
        GridScrollEvent {
            horizontal_scroll_direction: self.horizontal_scroll_direction,
            scroll_left: self.scroll_left,
            scroll_top: self.scroll_top,
            scroll_update_was_requested: self.scroll_update_was_requested,
            vertical_scroll_direction: self.vertical_scroll_direction,
        }
    }
}

/// Payload of a list's `on_scroll` observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListScrollEvent {
    pub scroll_direction: ScrollDirection,
    pub scroll_offset: u64,
    pub scroll_update_was_requested: bool,
}

/// Payload of a grid's `on_scroll` observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridScrollEvent {
    pub horizontal_scroll_direction: ScrollDirection,
    pub scroll_left: u64,
    pub scroll_top: u64,
    pub scroll_update_was_requested: bool,
    pub vertical_scroll_direction: ScrollDirection,
}
