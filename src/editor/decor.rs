// SPDX-License-Identifier: MPL-2.0
//! Frame and border overlays, derived from the current image bounds.

use super::recipes::{border_corner_radius, border_dash, frame_recipe};
use super::Editor;
use crate::application::port::{
    BorderOverlay, EditorHost, FrameOverlay, ImageFetcher, Overlay, Role, Surface,
};
use crate::diagnostics::UserAction;
use crate::domain::editing::{BorderStyle, BorderWidth, Color, FrameStyle};
use crate::domain::geometry::Rect;

/// Frame overlay of `style` around `image`.
#[must_use]
pub fn frame_overlay(style: FrameStyle, image: Rect) -> Option<FrameOverlay> {
    let recipe = frame_recipe(style)?;
    Some(FrameOverlay {
        style,
        rect: image.outset(recipe.margin),
        fill: recipe.fill,
        stroke: recipe.stroke,
        stroke_width: recipe.stroke_width,
        shadow: recipe.shadow,
    })
}

/// Border overlay of `style` hugging `image`.
///
/// The stroke centerline sits `width / 2` outside the image, so the inner
/// edge of the stroke touches the image bounds.
#[must_use]
pub fn border_overlay(
    style: BorderStyle,
    width: BorderWidth,
    color: Color,
    image: Rect,
) -> Option<BorderOverlay> {
    if style.is_none() {
        return None;
    }
    let half = width.half();
    Some(BorderOverlay {
        style,
        rect: image.expand(half, half),
        width: width.value(),
        color,
        dash: border_dash(style, width.value()),
        corner_radius: border_corner_radius(style),
    })
}

impl<S, F, H> Editor<S, F, H>
where
    S: Surface,
    F: ImageFetcher,
    H: EditorHost,
{
    /// Replaces the frame. `FrameStyle::None` only removes it.
    pub fn set_frame(&mut self, style: FrameStyle) -> bool {
        if !self.has_image() {
            return false;
        }
        self.record(UserAction::SetFrame { style });
        self.state.frame = style;
        if !style.is_none() {
            self.state.edited = true;
        }
        self.refresh_frame();
        true
    }

    /// Replaces the border style, keeping the current width and color.
    pub fn set_border(&mut self, style: BorderStyle) -> bool {
        if !self.has_image() {
            return false;
        }
        self.record(UserAction::SetBorder { style });
        self.state.border = style;
        if !style.is_none() {
            self.state.edited = true;
        }
        self.refresh_border();
        true
    }

    /// Sets the border stroke width, reissuing an active border.
    pub fn set_border_width(&mut self, width: f32) -> bool {
        if !self.has_image() {
            return false;
        }
        self.state.border_width = BorderWidth::new(width);
        if !self.state.border.is_none() {
            self.state.edited = true;
        }
        self.refresh_border();
        true
    }

    /// Sets the border color, reissuing an active border.
    pub fn set_border_color(&mut self, color: Color) -> bool {
        if !self.has_image() {
            return false;
        }
        self.state.border_color = color;
        if !self.state.border.is_none() {
            self.state.edited = true;
        }
        self.refresh_border();
        true
    }

    fn refresh_frame(&mut self) {
        self.surface.remove_overlay(Role::Frame);
        let Some(image) = self.surface.main_bounds() else {
            return;
        };
        if let Some(frame) = frame_overlay(self.state.frame, image) {
            self.surface.add_overlay(Overlay::Frame(frame));
        }
    }

    fn refresh_border(&mut self) {
        self.surface.remove_overlay(Role::Border);
        let Some(image) = self.surface.main_bounds() else {
            return;
        };
        let border = border_overlay(
            self.state.border,
            self.state.border_width,
            self.state.border_color,
            image,
        );
        if let Some(border) = border {
            self.surface.add_overlay(Overlay::Border(border));
        }
    }

    /// Rebuilds both decorations after the image bounds changed.
    pub(super) fn refresh_decor(&mut self) {
        self.refresh_frame();
        self.refresh_border();
    }
}
