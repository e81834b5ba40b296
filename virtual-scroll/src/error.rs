use alloc::string::String;

use thiserror_no_std::Error;

/// A malformed engine configuration.
///
/// These are surfaced from `List::new`, `Grid::new`, `set_options`, and the `FromStr`
/// impls of the configuration enums. None of them are recoverable by retrying.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An item size (`item_size`, `row_height`, `column_width`) has the wrong shape for the
    /// active sizing strategy.
    #[error(
        "An invalid \"{prop}\" prop has been specified. Value should be {expected}. \"{found}\" was specified."
    )]
    InvalidItemSize {
        prop: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// The `children` render callback is missing.
    #[error(
        "An invalid \"children\" prop has been specified. Value should be a render callback. \"none\" was specified."
    )]
    MissingChildren,

    #[error(
        "An invalid \"direction\" prop has been specified. Value should be either \"ltr\" or \"rtl\". \"{0}\" was specified."
    )]
    InvalidDirection(String),

    #[error(
        "An invalid \"layout\" prop has been specified. Value should be either \"horizontal\" or \"vertical\". \"{0}\" was specified."
    )]
    InvalidLayout(String),

    #[error(
        "An invalid \"align\" value has been specified. Value should be one of \"auto\", \"smart\", \"center\", \"start\" or \"end\". \"{0}\" was specified."
    )]
    InvalidAlign(String),

    #[error(
        "An invalid RTL offset type has been specified. Value should be one of \"negative\", \"positive-ascending\" or \"positive-descending\". \"{0}\" was specified."
    )]
    InvalidRtlOffsetType(String),

    /// The scrolling axis width is not a pixel length.
    #[error(
        "An invalid \"width\" prop has been specified. {owner} must specify a number for width. \"{found}\" was specified."
    )]
    InvalidWidth {
        owner: &'static str,
        found: &'static str,
    },

    /// The scrolling axis height is not a pixel length.
    #[error(
        "An invalid \"height\" prop has been specified. {owner} must specify a number for height. \"{found}\" was specified."
    )]
    InvalidHeight {
        owner: &'static str,
        found: &'static str,
    },
}
