//! Button component.
//!
//! A pure props-to-tree mapping: variant and size pick token-backed style
//! layers, the caller's overrides are overlaid last, and unrecognized
//! parameters pass through to the rendered node as attributes.

use std::borrow::Cow;

use taffy::prelude::{auto, length, percent};

use crate::render::{Attr, Node};
use crate::style::{Border, Color, Cursor, Visual};
use crate::tokens::{Tokens, tokens};

/// Named style set. Unknown names fall back to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
}

impl Variant {
    pub fn from_name(name: &str) -> Self {
        match name {
            "secondary" => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Named size set. Unknown names fall back to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    pub fn from_name(name: &str) -> Self {
        match name {
            "sm" => Self::Sm,
            "lg" => Self::Lg,
            _ => Self::Md,
        }
    }
}

/// Button props. `M` is the click message emitted through the rendered node.
#[derive(Debug, Clone)]
pub struct Button<M> {
    label: String,
    variant: Variant,
    size: Size,
    full_width: bool,
    disabled: bool,
    on_click: Option<M>,
    overrides: Visual,
    attrs: Vec<Attr>,
}

impl<M: Clone> Button<M> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: Variant::default(),
            size: Size::default(),
            full_width: false,
            disabled: false,
            on_click: None,
            overrides: Visual::default(),
            attrs: Vec::new(),
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, message: M) -> Self {
        self.on_click = Some(message);
        self
    }

    /// Caller style layer, overlaid last so it wins on collision.
    pub fn style(mut self, overrides: Visual) -> Self {
        self.overrides = overrides;
        self
    }

    /// Forwards an unrecognized parameter to the rendered node.
    pub fn attr(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn render(&self) -> Node<M> {
        let t = tokens();
        let visual = self
            .base_visual(t)
            .overlay(self.variant_visual(t))
            .overlay(self.size_visual(t))
            .overlay(self.overrides.clone());

        let mut node = Node::button()
            .layout(self.layout(t))
            .visual(visual)
            .disabled(self.disabled)
            .attrs(self.attrs.iter().cloned())
            .child(Node::text(self.label.clone()));
        if !self.disabled {
            if let Some(message) = &self.on_click {
                node = node.on_click(message.clone());
            }
        }
        node
    }

    fn base_visual(&self, t: &Tokens) -> Visual {
        let cursor = if self.disabled {
            Cursor::NotAllowed
        } else {
            Cursor::Pointer
        };
        Visual::new()
            .font_family(t.typography.font_family)
            .font_weight(t.typography.button_font_weight)
            .corner_radius(t.radii.md)
            .cursor(cursor)
            .opacity(if self.disabled { 0.5 } else { 1.0 })
            .transition_ms(150)
    }

    fn variant_visual(&self, t: &Tokens) -> Visual {
        match self.variant {
            Variant::Primary => Visual::new()
                .background(t.colors.primary)
                .foreground(Color::from_rgb8(0xff, 0xff, 0xff))
                .border(Border::new(1.0, t.colors.primary)),
            Variant::Secondary => Visual::new()
                .background(t.colors.background)
                .foreground(t.colors.neutral_text)
                .border(Border::new(1.0, t.colors.neutral_border)),
        }
    }

    fn size_visual(&self, t: &Tokens) -> Visual {
        let font_size = match self.size {
            Size::Sm => 12.0,
            Size::Md => t.typography.base_font_size,
            Size::Lg => 16.0,
        };
        Visual::new().font_size(font_size)
    }

    fn layout(&self, t: &Tokens) -> taffy::Style {
        let (inline, block) = match self.size {
            Size::Sm => (t.spacing.sm, t.spacing.xs),
            Size::Md => (t.spacing.md, t.spacing.sm),
            Size::Lg => (t.spacing.lg, t.spacing.md),
        };
        taffy::Style {
            display: taffy::style::Display::Flex,
            align_items: Some(taffy::style::AlignItems::Center),
            justify_content: Some(taffy::style::JustifyContent::Center),
            gap: length(t.spacing.xs),
            padding: taffy::geometry::Rect {
                left: length(inline),
                right: length(inline),
                top: length(block),
                bottom: length(block),
            },
            size: taffy::geometry::Size {
                width: if self.full_width {
                    percent(1.0)
                } else {
                    auto()
                },
                height: auto(),
            },
            ..taffy::Style::default()
        }
    }
}
