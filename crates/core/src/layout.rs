//! Responsive layout breakpoints shared with the page stylesheets

use serde::{Deserialize, Serialize};

/// Minimum viewport widths, in CSS pixels
pub struct Breakpoints;

impl Breakpoints {
    pub const MOBILE: u32 = 320;
    pub const TABLET: u32 = 768;
    pub const DESKTOP: u32 = 1024;
    pub const WIDE: u32 = 1440;
}

/// Layout class a viewport falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
    Wide,
}

impl Breakpoint {
    /// Largest breakpoint whose minimum width fits `width`
    ///
    /// Viewports narrower than [`Breakpoints::MOBILE`] still get the mobile layout.
    pub const fn for_width(width: u32) -> Self {
        if width >= Breakpoints::WIDE {
            Self::Wide
        } else if width >= Breakpoints::DESKTOP {
            Self::Desktop
        } else if width >= Breakpoints::TABLET {
            Self::Tablet
        } else {
            Self::Mobile
        }
    }

    pub const fn min_width(self) -> u32 {
        match self {
            Self::Mobile => Breakpoints::MOBILE,
            Self::Tablet => Breakpoints::TABLET,
            Self::Desktop => Breakpoints::DESKTOP,
            Self::Wide => Breakpoints::WIDE,
        }
    }
}
