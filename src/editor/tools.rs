// SPDX-License-Identifier: MPL-2.0
//! Tool panel selection.

use super::Editor;
use crate::application::port::{EditorHost, ImageFetcher, Surface};
use std::fmt;

/// Tool panels the host can show next to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorTool {
    Crop,
    Adjustment,
    Filter,
    Frame,
    Border,
    Watermark,
}

impl EditorTool {
    pub const ALL: &'static [EditorTool] = &[
        EditorTool::Crop,
        EditorTool::Adjustment,
        EditorTool::Filter,
        EditorTool::Frame,
        EditorTool::Border,
        EditorTool::Watermark,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EditorTool::Crop => "crop",
            EditorTool::Adjustment => "adjustment",
            EditorTool::Filter => "filter",
            EditorTool::Frame => "frame",
            EditorTool::Border => "border",
            EditorTool::Watermark => "watermark",
        }
    }
}

impl fmt::Display for EditorTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<S, F, H> Editor<S, F, H>
where
    S: Surface,
    F: ImageFetcher,
    H: EditorHost,
{
    pub fn active_tool(&self) -> Option<EditorTool> {
        self.active_tool
    }

    /// Switches the active tool panel; `None` closes it.
    ///
    /// Choosing the crop tool enters crop mode. Leaving it while a crop is
    /// pending cancels the crop. Returns false when no image is loaded or
    /// crop mode cannot be entered.
    pub fn select_tool(&mut self, tool: Option<EditorTool>) -> bool {
        if tool.is_some() && !self.has_image() {
            return false;
        }
        if self.active_tool == tool {
            return true;
        }
        if self.state.is_cropping() && tool != Some(EditorTool::Crop) {
            self.cancel_crop();
        }
        if tool == Some(EditorTool::Crop) {
            return self.enable_cropping();
        }
        self.active_tool = tool;
        true
    }
}
