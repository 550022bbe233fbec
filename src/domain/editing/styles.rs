// SPDX-License-Identifier: MPL-2.0
//! Enumerated editing choices: adjustment kinds, stylistic filters, frames and borders.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a style name does not match any known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStyle {
    pub family: &'static str,
    pub name: String,
}

impl fmt::Display for UnknownStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.family, self.name)
    }
}

impl std::error::Error for UnknownStyle {}

/// Declares `ALL`, `as_str`, `Display` and `FromStr` for a fieldless enum.
macro_rules! named_variants {
    ($ty:ident, $family:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in panel order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Stable kebab-case name.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownStyle;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let lowered = s.trim().to_ascii_lowercase();
                match lowered.as_str() {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(UnknownStyle { family: $family, name: s.to_string() }),
                }
            }
        }
    };
}

/// Which adjustment slider a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdjustmentKind {
    Brightness,
    Contrast,
    Saturation,
}

named_variants!(AdjustmentKind, "adjustment", {
    Brightness => "brightness",
    Contrast => "contrast",
    Saturation => "saturation",
});

/// Stylistic filter. Exactly one (or none) is active at a time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum StylisticFilter {
    #[default]
    None,
    BlackAndWhite,
    Sepia,
    Cyberpunk,
    Vivid,
    Warm,
    Cool,
    Hdr,
}

named_variants!(StylisticFilter, "filter", {
    None => "none",
    BlackAndWhite => "black-and-white",
    Sepia => "sepia",
    Cyberpunk => "cyberpunk",
    Vivid => "vivid",
    Warm => "warm",
    Cool => "cool",
    Hdr => "hdr",
});

impl StylisticFilter {
    #[must_use]
    pub fn is_none(self) -> bool {
        self == StylisticFilter::None
    }
}

/// Decorative frame drawn behind the main image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameStyle {
    #[default]
    None,
    Classic,
    Modern,
    Vintage,
    Polaroid,
    Ornate,
}

named_variants!(FrameStyle, "frame", {
    None => "none",
    Classic => "classic",
    Modern => "modern",
    Vintage => "vintage",
    Polaroid => "polaroid",
    Ornate => "ornate",
});

impl FrameStyle {
    #[must_use]
    pub fn is_none(self) -> bool {
        self == FrameStyle::None
    }
}

/// Stroke pattern of the border overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderStyle {
    #[default]
    None,
    Solid,
    Dashed,
    Dotted,
    Double,
    Rounded,
}

named_variants!(BorderStyle, "border", {
    None => "none",
    Solid => "solid",
    Dashed => "dashed",
    Dotted => "dotted",
    Double => "double",
    Rounded => "rounded",
});

impl BorderStyle {
    #[must_use]
    pub fn is_none(self) -> bool {
        self == BorderStyle::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for filter in StylisticFilter::ALL {
            assert_eq!(filter.as_str().parse::<StylisticFilter>(), Ok(*filter));
        }
        for frame in FrameStyle::ALL {
            assert_eq!(frame.as_str().parse::<FrameStyle>(), Ok(*frame));
        }
        for border in BorderStyle::ALL {
            assert_eq!(border.as_str().parse::<BorderStyle>(), Ok(*border));
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("SEPIA".parse::<StylisticFilter>(), Ok(StylisticFilter::Sepia));
        assert_eq!(" Polaroid ".parse::<FrameStyle>(), Ok(FrameStyle::Polaroid));
    }

    #[test]
    fn unknown_name_reports_family() {
        let err = "glitter".parse::<FrameStyle>().unwrap_err();
        assert_eq!(err.family, "frame");
        assert_eq!(err.to_string(), "unknown frame 'glitter'");
    }

    #[test]
    fn defaults_are_none() {
        assert!(StylisticFilter::default().is_none());
        assert!(FrameStyle::default().is_none());
        assert!(BorderStyle::default().is_none());
    }

    #[test]
    fn panel_lists_have_expected_sizes() {
        assert_eq!(StylisticFilter::ALL.len(), 8);
        assert_eq!(FrameStyle::ALL.len(), 6);
        assert_eq!(BorderStyle::ALL.len(), 6);
        assert_eq!(AdjustmentKind::ALL.len(), 3);
    }
}
