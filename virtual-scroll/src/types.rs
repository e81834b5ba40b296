use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::ConfigError;

/// Where a scrolled-to item lands within the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Align {
    /// Scroll as little as possible; no-op when the item is already visible.
    #[default]
    Auto,
    /// `Auto` when the item is within one viewport of being visible, `Center` otherwise.
    Smart,
    Center,
    Start,
    End,
}

impl FromStr for Align {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "smart" => Ok(Self::Smart),
            "center" => Ok(Self::Center),
            "start" => Ok(Self::Start),
            "end" => Ok(Self::End),
            other => Err(ConfigError::InvalidAlign(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ScrollDirection {
    #[default]
    Forward,
    Backward,
}

impl ScrollDirection {
    /// Direction of travel from `prev` to `next`. Equal offsets count as `Backward`.
    pub fn between(prev: u64, next: u64) -> Self {
        if prev < next {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

/// Text direction of the scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn is_rtl(self) -> bool {
        self == Self::Rtl
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ltr" => Ok(Self::Ltr),
            "rtl" => Ok(Self::Rtl),
            other => Err(ConfigError::InvalidDirection(other.to_string())),
        }
    }
}

/// Scrolling axis of a list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Layout {
    Horizontal,
    #[default]
    Vertical,
}

impl Layout {
    pub fn is_horizontal(self) -> bool {
        self == Self::Horizontal
    }
}

impl FromStr for Layout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            other => Err(ConfigError::InvalidLayout(other.to_string())),
        }
    }
}

/// Default list item key (the item index).
pub type ItemKey = u64;

/// Default grid cell key. Displays as `"row:column"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellKey {
    pub row_index: usize,
    pub column_index: usize,
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row_index, self.column_index)
    }
}

/// The window of one axis, all bounds inclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRange {
    pub overscan_start_index: usize,
    pub overscan_stop_index: usize,
    pub visible_start_index: usize,
    pub visible_stop_index: usize,
}

impl ItemRange {
    pub const EMPTY: Self = Self {
        overscan_start_index: 0,
        overscan_stop_index: 0,
        visible_start_index: 0,
        visible_stop_index: 0,
    };

    /// Indexes to materialize (overscan included).
    pub fn indexes(&self) -> core::ops::RangeInclusive<usize> {
        self.overscan_start_index..=self.overscan_stop_index
    }
}

/// The window of a grid: one [`ItemRange`] per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridItemRange {
    pub columns: ItemRange,
    pub rows: ItemRange,
}
