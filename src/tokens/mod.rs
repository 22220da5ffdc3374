//! Design-token table.
//!
//! A static, read-only mapping from semantic names to literal values, built
//! once and shared by every component. Consumers either read the typed fields
//! directly (`tokens().colors.primary`) or resolve a dotted path at runtime
//! (`tokens().get("colors.primary")`) and treat the result as an opaque
//! literal.

use std::sync::OnceLock;

use crate::style::Color;

/// Semantic color tokens, including the pagination control palette.
#[derive(Debug, Clone, Copy)]
pub struct Colors {
    pub primary: Color,
    pub neutral_text: Color,
    pub neutral_border: Color,
    pub background: Color,
    pub icon_default: Color,
    pub icon_disabled: Color,
    pub text_default: Color,
    pub text_active: Color,
    pub surface_active: Color,
    pub dropdown_background: Color,
    pub dropdown_border: Color,
}

/// Spacing scale in pixels.
#[derive(Debug, Clone, Copy)]
pub struct Spacing {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
}

/// Corner radius scale in pixels. `lg` is the pill radius; `circle` is the
/// radius the active page indicator uses.
#[derive(Debug, Clone, Copy)]
pub struct Radii {
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub circle: f32,
}

/// Typography tokens. `font_family` is the general-purpose stack,
/// `control_font_family` the one paging controls use.
#[derive(Debug, Clone, Copy)]
pub struct Typography {
    pub font_family: &'static str,
    pub control_font_family: &'static str,
    pub base_font_size: f32,
    pub button_font_weight: u16,
    pub line_height: f32,
    pub letter_spacing: f32,
}

/// The full token table.
#[derive(Debug, Clone, Copy)]
pub struct Tokens {
    pub colors: Colors,
    pub spacing: Spacing,
    pub radii: Radii,
    pub typography: Typography,
}

/// A token value resolved through [`Tokens::get`].
#[derive(Debug, Clone, Copy)]
pub enum TokenValue {
    Color(Color),
    Px(f32),
    Weight(u16),
    FontStack(&'static str),
}

impl PartialEq for TokenValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Color(a), Self::Color(b)) => a.to_rgba8() == b.to_rgba8(),
            (Self::Px(a), Self::Px(b)) => a == b,
            (Self::Weight(a), Self::Weight(b)) => a == b,
            (Self::FontStack(a), Self::FontStack(b)) => a == b,
            _ => false,
        }
    }
}

impl Tokens {
    fn new() -> Self {
        Self {
            colors: Colors {
                primary: Color::from_rgb8(0x25, 0x63, 0xeb),
                neutral_text: Color::from_rgb8(0x1f, 0x29, 0x37),
                neutral_border: Color::from_rgb8(0xd1, 0xd5, 0xdb),
                background: Color::from_rgb8(0xff, 0xff, 0xff),
                icon_default: Color::from_rgb8(0x46, 0x4f, 0x5e),
                icon_disabled: Color::from_rgb8(0x8c, 0x95, 0xa8),
                text_default: Color::from_rgb8(0x46, 0x4f, 0x5e),
                text_active: Color::from_rgb8(0x29, 0x27, 0xb2),
                surface_active: Color::from_rgb8(0xea, 0xe8, 0xfb),
                dropdown_background: Color::from_rgb8(0xff, 0xff, 0xff),
                dropdown_border: Color::from_rgb8(0x8c, 0x95, 0xa8),
            },
            spacing: Spacing {
                xs: 4.0,
                sm: 8.0,
                md: 12.0,
                lg: 16.0,
            },
            radii: Radii {
                sm: 4.0,
                md: 8.0,
                lg: 999.0,
                circle: 50.0,
            },
            typography: Typography {
                font_family: "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
                control_font_family: "Poppins, 'Inter', sans-serif",
                base_font_size: 14.0,
                button_font_weight: 600,
                line_height: 20.0,
                letter_spacing: 0.3,
            },
        }
    }

    /// Resolves a dotted path like `"colors.primary"` or `"spacing.md"`.
    /// Unknown groups or names yield `None`.
    pub fn get(&self, path: &str) -> Option<TokenValue> {
        let (group, name) = path.split_once('.')?;
        match group {
            "colors" => {
                let c = &self.colors;
                let color = match name {
                    "primary" => c.primary,
                    "neutral_text" => c.neutral_text,
                    "neutral_border" => c.neutral_border,
                    "background" => c.background,
                    "icon_default" => c.icon_default,
                    "icon_disabled" => c.icon_disabled,
                    "text_default" => c.text_default,
                    "text_active" => c.text_active,
                    "surface_active" => c.surface_active,
                    "dropdown_background" => c.dropdown_background,
                    "dropdown_border" => c.dropdown_border,
                    _ => return None,
                };
                Some(TokenValue::Color(color))
            }
            "spacing" => {
                let s = &self.spacing;
                let px = match name {
                    "xs" => s.xs,
                    "sm" => s.sm,
                    "md" => s.md,
                    "lg" => s.lg,
                    _ => return None,
                };
                Some(TokenValue::Px(px))
            }
            "radii" => {
                let r = &self.radii;
                let px = match name {
                    "sm" => r.sm,
                    "md" => r.md,
                    "lg" => r.lg,
                    "circle" => r.circle,
                    _ => return None,
                };
                Some(TokenValue::Px(px))
            }
            "typography" => {
                let t = &self.typography;
                match name {
                    "font_family" => Some(TokenValue::FontStack(t.font_family)),
                    "control_font_family" => Some(TokenValue::FontStack(t.control_font_family)),
                    "base_font_size" => Some(TokenValue::Px(t.base_font_size)),
                    "button_font_weight" => Some(TokenValue::Weight(t.button_font_weight)),
                    "line_height" => Some(TokenValue::Px(t.line_height)),
                    "letter_spacing" => Some(TokenValue::Px(t.letter_spacing)),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

impl Default for Tokens {
    fn default() -> Self {
        Self::new()
    }
}

static TOKENS: OnceLock<Tokens> = OnceLock::new();

/// The process-wide token table, built on first access.
pub fn tokens() -> &'static Tokens {
    TOKENS.get_or_init(Tokens::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_access_and_path_lookup_agree() {
        let t = tokens();
        assert_eq!(
            t.get("colors.primary"),
            Some(TokenValue::Color(t.colors.primary))
        );
        assert_eq!(t.get("spacing.md"), Some(TokenValue::Px(12.0)));
        assert_eq!(t.get("radii.lg"), Some(TokenValue::Px(999.0)));
        assert_eq!(
            t.get("typography.button_font_weight"),
            Some(TokenValue::Weight(600))
        );
        assert_eq!(
            t.get("typography.font_family"),
            Some(TokenValue::FontStack(t.typography.font_family))
        );
    }

    #[test]
    fn unknown_paths_resolve_to_none() {
        let t = tokens();
        assert_eq!(t.get("colors.tertiary"), None);
        assert_eq!(t.get("shadows.md"), None);
        assert_eq!(t.get("primary"), None);
        assert_eq!(t.get(""), None);
    }

    #[test]
    fn table_is_shared() {
        let a = tokens() as *const Tokens;
        let b = tokens() as *const Tokens;
        assert_eq!(a, b);
    }

    #[test]
    fn palette_matches_design_values() {
        let c = tokens().colors;
        let primary = c.primary.to_rgba8();
        assert_eq!((primary.r, primary.g, primary.b), (0x25, 0x63, 0xeb));
        let active = c.text_active.to_rgba8();
        assert_eq!((active.r, active.g, active.b), (0x29, 0x27, 0xb2));
        let surface = c.surface_active.to_rgba8();
        assert_eq!((surface.r, surface.g, surface.b), (0xea, 0xe8, 0xfb));
    }
}
