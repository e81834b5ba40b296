use alloc::sync::Arc;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::Direction;
use crate::options::{DEFAULT_INNER_ELEMENT_TYPE, DEFAULT_OUTER_ELEMENT_TYPE};

#[cfg(feature = "std")]
type StyleMap<K> = HashMap<K, ItemStyle>;
#[cfg(not(feature = "std"))]
type StyleMap<K> = BTreeMap<K, ItemStyle>;

#[cfg(feature = "std")]
#[doc(hidden)]
pub trait StyleCacheKey: core::hash::Hash + Eq + Copy {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Copy> StyleCacheKey for K {}

#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub trait StyleCacheKey: Ord + Copy {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Copy> StyleCacheKey for K {}

/// A host length: absolute pixels or a percentage of the parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Length {
    Px(u64),
    Percent(u16),
}

impl Length {
    pub const FULL: Self = Self::Percent(100);

    pub fn px(self) -> Option<u64> {
        match self {
            Self::Px(v) => Some(v),
            Self::Percent(_) => None,
        }
    }

    pub(crate) fn kind(self) -> &'static str {
        match self {
            Self::Px(_) => "px",
            Self::Percent(_) => "percent",
        }
    }
}

impl From<u32> for Length {
    fn from(value: u32) -> Self {
        Self::Px(value as u64)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    Relative,
    Absolute,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerEvents {
    #[default]
    Auto,
    None,
}

/// Absolute placement of one materialized item inside the inner container.
///
/// Exactly one of `left`/`right` is set: `right` for RTL containers, `left` otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStyle {
    pub position: Position,
    pub left: Option<u64>,
    pub right: Option<u64>,
    pub top: u64,
    pub width: Length,
    pub height: Length,
}

impl ItemStyle {
    pub(crate) fn absolute(
        direction: Direction,
        horizontal_offset: u64,
        top: u64,
        width: Length,
        height: Length,
    ) -> Self {
        let rtl = direction.is_rtl();
        Self {
            position: Position::Absolute,
            left: (!rtl).then_some(horizontal_offset),
            right: rtl.then_some(horizontal_offset),
            top,
            width,
            height,
        }
    }
}

/// Style of the outer (scrolling) container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OuterStyle {
    pub position: Position,
    pub width: Length,
    pub height: Length,
    pub direction: Direction,
}

/// Style of the inner container that hosts the absolutely positioned items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InnerStyle {
    pub width: Length,
    pub height: Length,
    pub pointer_events: PointerEvents,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OuterProps {
    pub element_type: Arc<str>,
    pub class_name: Option<Arc<str>>,
    pub style: OuterStyle,
}

impl OuterProps {
    pub(crate) fn new(
        element_type: Option<&Arc<str>>,
        class_name: Option<&Arc<str>>,
        width: Length,
        height: Length,
        direction: Direction,
    ) -> Self {
        Self {
            element_type: element_type
                .cloned()
                .unwrap_or_else(|| Arc::from(DEFAULT_OUTER_ELEMENT_TYPE)),
            class_name: class_name.cloned(),
            style: OuterStyle {
                position: Position::Relative,
                width,
                height,
                direction,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InnerProps {
    pub element_type: Arc<str>,
    pub style: InnerStyle,
}

impl InnerProps {
    pub(crate) fn new(
        element_type: Option<&Arc<str>>,
        width: Length,
        height: Length,
        is_scrolling: bool,
    ) -> Self {
        Self {
            element_type: element_type
                .cloned()
                .unwrap_or_else(|| Arc::from(DEFAULT_INNER_ELEMENT_TYPE)),
            style: InnerStyle {
                width,
                height,
                // Items must not intercept the pointer mid-scroll.
                pointer_events: if is_scrolling {
                    PointerEvents::None
                } else {
                    PointerEvents::Auto
                },
            },
        }
    }
}

/// Lazily filled item styles.
///
/// Invalidation always drops the whole map; `generation` counts the drops so adapters can
/// tell when previously handed-out styles went stale.
#[derive(Clone, Debug)]
pub(crate) struct ItemStyleCache<K> {
    styles: StyleMap<K>,
    generation: u64,
}

impl<K: StyleCacheKey> ItemStyleCache<K> {
    pub(crate) fn new() -> Self {
        Self {
            styles: StyleMap::new(),
            generation: 0,
        }
    }

    pub(crate) fn get_or_insert_with(
        &mut self,
        key: K,
        make: impl FnOnce() -> ItemStyle,
    ) -> ItemStyle {
        *self.styles.entry(key).or_insert_with(make)
    }

    pub(crate) fn reset(&mut self) {
        vtrace!(
            generation = self.generation,
            cached = self.styles.len(),
            "ItemStyleCache::reset"
        );
        self.styles = StyleMap::new();
        self.generation = self.generation.saturating_add(1);
    }

    pub(crate) fn len(&self) -> usize {
        self.styles.len()
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}
