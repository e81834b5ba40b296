use alloc::string::ToString;
use core::str::FromStr;

use crate::{ConfigError, ScrollMetrics, ScrollSurface};

/// How a host reports the horizontal scroll offset of a right-to-left container.
///
/// Hosts disagree here, so every read and write of `scroll_left` in an RTL container goes
/// through [`RtlOffsetType::to_logical`] / [`RtlOffsetType::to_host`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RtlOffsetType {
    /// Offsets run from `0` down to `-(scroll_width - client_width)`.
    Negative,
    /// Offsets start at `scroll_width - client_width` and descend to `0`.
    PositiveDescending,
    /// Offsets run from `0` up to `scroll_width - client_width`, like LTR.
    #[default]
    PositiveAscending,
}

impl RtlOffsetType {
    /// Converts a raw host offset into the logical (LTR-like, distance from the start edge)
    /// offset. The result is not clamped.
    pub fn to_logical(self, raw: i64, metrics: &ScrollMetrics) -> i64 {
        match self {
            Self::Negative => raw.saturating_neg(),
            Self::PositiveDescending => metrics.max_scroll_left().saturating_sub(raw),
            Self::PositiveAscending => raw,
        }
    }

    /// Converts a logical offset into the value to write to the host.
    pub fn to_host(self, logical: u64, metrics: &ScrollMetrics) -> i64 {
        let logical = logical.min(i64::MAX as u64) as i64;
        match self {
            Self::Negative => -logical,
            Self::PositiveDescending => metrics.max_scroll_left().saturating_sub(logical),
            Self::PositiveAscending => logical,
        }
    }
}

impl FromStr for RtlOffsetType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "negative" => Ok(Self::Negative),
            "positive-descending" => Ok(Self::PositiveDescending),
            "positive-ascending" => Ok(Self::PositiveAscending),
            other => Err(ConfigError::InvalidRtlOffsetType(other.to_string())),
        }
    }
}

/// Detects the RTL offset convention of a host.
///
/// `probe` must be a freshly created RTL container whose content overflows horizontally
/// (e.g. 50px wide with 100px of content) and whose offset has not been touched yet.
/// The probe's offset is modified.
pub fn probe_rtl_offset_type(probe: &mut dyn ScrollSurface) -> RtlOffsetType {
    if probe.metrics().max_scroll_left() == 0 {
        vwarn!("probe_rtl_offset_type: probe does not overflow horizontally, result is a guess");
    }
    let detected = if probe.metrics().scroll_left > 0 {
        RtlOffsetType::PositiveDescending
    } else {
        probe.set_scroll_left(1);
        if probe.metrics().scroll_left == 0 {
            RtlOffsetType::Negative
        } else {
            RtlOffsetType::PositiveAscending
        }
    };
    vdebug!(?detected, "probe_rtl_offset_type");
    detected
}

/// Thickness of the host's scrollbars.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollbarSize {
    /// Width of the vertical scrollbar (eats into the horizontal viewport).
    pub vertical_width: u32,
    /// Height of the horizontal scrollbar (eats into the vertical viewport).
    pub horizontal_height: u32,
}
