// SPDX-License-Identifier: MPL-2.0
//! Image locators: where a photo's pixels come from.

use std::fmt;
use std::path::PathBuf;

/// A loadable image reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locator {
    /// Embedded `data:` URL carrying the encoded image.
    Data(String),
    /// `http://` or `https://` URL.
    Remote(String),
    /// Local file (plain path or `file://` URL).
    File(PathBuf),
}

impl Locator {
    /// Classifies a raw locator string.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lowered = trimmed.get(..8).unwrap_or(trimmed).to_ascii_lowercase();
        if lowered.starts_with("data:") {
            Locator::Data(trimmed.to_string())
        } else if lowered.starts_with("http://") || lowered.starts_with("https://") {
            Locator::Remote(trimmed.to_string())
        } else if lowered.starts_with("file://") {
            Locator::File(PathBuf::from(&trimmed[7..]))
        } else {
            Locator::File(PathBuf::from(trimmed))
        }
    }

    /// Returns true for embedded data locators, which need no fetch.
    #[must_use]
    pub fn is_data(&self) -> bool {
        matches!(self, Locator::Data(_))
    }

    /// Short human-readable description (data URLs are abbreviated).
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Locator::Data(url) => {
                let header = url.split(',').next().unwrap_or("data:");
                format!("{header},<{} bytes>", url.len())
            }
            Locator::Remote(url) => url.clone(),
            Locator::File(path) => path.display().to_string(),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<&str> for Locator {
    fn from(raw: &str) -> Self {
        Locator::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_classifies_schemes() {
        assert!(matches!(
            Locator::parse("data:image/png;base64,AAAA"),
            Locator::Data(_)
        ));
        assert!(matches!(
            Locator::parse("https://cdn.example/p.jpg"),
            Locator::Remote(_)
        ));
        assert!(matches!(
            Locator::parse("HTTP://cdn.example/p.jpg"),
            Locator::Remote(_)
        ));
        assert_eq!(
            Locator::parse("file:///tmp/a.png"),
            Locator::File(PathBuf::from("/tmp/a.png"))
        );
        assert_eq!(
            Locator::parse("photos/a.png"),
            Locator::File(PathBuf::from("photos/a.png"))
        );
    }

    #[test]
    fn describe_abbreviates_data_urls() {
        let locator = Locator::parse("data:image/png;base64,AAAAAAAA");
        assert_eq!(locator.describe(), "data:image/png;base64,<30 bytes>");
        assert!(locator.is_data());
    }
}
