//! Visual styling values and the layered overlay merge.
//!
//! Components compose their appearance as an ordered sequence of [`Visual`]
//! layers (base, variant, size, caller overrides) where later layers win on
//! collision. Layout concerns live in `taffy::Style` on the tree node; this
//! module only carries paint and typography values.

use std::borrow::Cow;

pub use peniko::Color;

/// A stroke: width in pixels plus a color.
#[derive(Debug, Clone, Copy)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Pointer shape an interactive node requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
    NotAllowed,
}

/// One layer of paint/typography values. Every field is optional so layers
/// can be overlaid; an unset field lets the layer below show through.
#[derive(Debug, Clone, Default)]
pub struct Visual {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Option<Border>,
    pub outline: Option<Border>,
    pub corner_radius: Option<f32>,
    pub font_family: Option<Cow<'static, str>>,
    pub font_size: Option<f32>,
    pub font_weight: Option<u16>,
    pub line_height: Option<f32>,
    pub letter_spacing: Option<f32>,
    pub opacity: Option<f32>,
    pub cursor: Option<Cursor>,
    pub transition_ms: Option<u32>,
}

impl Visual {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `over` on top of `self`: populated fields of `over` win, unset
    /// ones keep the value already present.
    pub fn overlay(mut self, over: Visual) -> Visual {
        self.background = over.background.or(self.background);
        self.foreground = over.foreground.or(self.foreground);
        self.border = over.border.or(self.border);
        self.outline = over.outline.or(self.outline);
        self.corner_radius = over.corner_radius.or(self.corner_radius);
        self.font_family = over.font_family.or(self.font_family);
        self.font_size = over.font_size.or(self.font_size);
        self.font_weight = over.font_weight.or(self.font_weight);
        self.line_height = over.line_height.or(self.line_height);
        self.letter_spacing = over.letter_spacing.or(self.letter_spacing);
        self.opacity = over.opacity.or(self.opacity);
        self.cursor = over.cursor.or(self.cursor);
        self.transition_ms = over.transition_ms.or(self.transition_ms);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn outline(mut self, outline: Border) -> Self {
        self.outline = Some(outline);
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn font_family(mut self, family: impl Into<Cow<'static, str>>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn font_weight(mut self, weight: u16) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn line_height(mut self, height: f32) -> Self {
        self.line_height = Some(height);
        self
    }

    pub fn letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn transition_ms(mut self, ms: u32) -> Self {
        self.transition_ms = Some(ms);
        self
    }
}
