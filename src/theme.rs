//! Centralized theme constants for the Clipzy waitlist
//! All colors, sizes, and styling should reference these constants

use crate::types::DisplayMode;
use egui::Color32;

// =============================================================================
// COLORS - Brand
// =============================================================================
pub const TWITCH: Color32 = Color32::from_rgb(0x91, 0x46, 0xff); // Twitch purple
pub const FUCHSIA: Color32 = Color32::from_rgb(0xd9, 0x46, 0xef); // fuchsia-500
pub const SKY: Color32 = Color32::from_rgb(0x0e, 0xa5, 0xe9); // sky-500
pub const PINK_GLOW: Color32 = Color32::from_rgba_premultiplied(0x3c, 0x12, 0x26, 0x40); // pink-500 @ 25%
pub const SKY_GLOW: Color32 = Color32::from_rgba_premultiplied(0x0e, 0x2f, 0x3e, 0x40); // sky-400 @ 25%
pub const PURPLE_GLOW: Color32 = Color32::from_rgba_premultiplied(0x33, 0x18, 0x59, 0x59); // twitch @ 35%

// =============================================================================
// COLORS - Neutral scale
// =============================================================================
pub const NEUTRAL_100: Color32 = Color32::from_rgb(0xf5, 0xf5, 0xf5);
pub const NEUTRAL_200: Color32 = Color32::from_rgb(0xe5, 0xe5, 0xe5);
pub const NEUTRAL_300: Color32 = Color32::from_rgb(0xd4, 0xd4, 0xd4);
pub const NEUTRAL_400: Color32 = Color32::from_rgb(0xa3, 0xa3, 0xa3);
pub const NEUTRAL_500: Color32 = Color32::from_rgb(0x73, 0x73, 0x73);
pub const NEUTRAL_600: Color32 = Color32::from_rgb(0x52, 0x52, 0x52);
pub const NEUTRAL_700: Color32 = Color32::from_rgb(0x40, 0x40, 0x40);
pub const NEUTRAL_800: Color32 = Color32::from_rgb(0x26, 0x26, 0x26);
pub const NEUTRAL_900: Color32 = Color32::from_rgb(0x17, 0x17, 0x17);
pub const NEUTRAL_950: Color32 = Color32::from_rgb(0x0a, 0x0a, 0x0a);

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x4a, 0xde, 0x80); // green-400
pub const STATUS_SUCCESS_BG: Color32 = Color32::from_rgba_premultiplied(0x0b, 0x21, 0x13, 0x26); // green-500 @ 15%
pub const STATUS_ERROR_DARK: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400
pub const STATUS_ERROR_LIGHT: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26); // red-600

// =============================================================================
// PALETTE - resolved per display mode
// =============================================================================

/// Colors for one display mode. Built once at startup and passed down to every
/// render function.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub mode: DisplayMode,
    pub bg_base: Color32,
    pub bg_card: Color32,
    pub bg_input: Color32,
    pub border: Color32,
    pub grid_line: Color32,
    pub text_primary: Color32,
    pub text_body: Color32,
    pub text_muted: Color32,
    pub text_dim: Color32,
    pub error: Color32,
    pub button_fill: Color32,
    pub button_text: Color32,
}

impl Palette {
    pub fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Dark => Self {
                mode,
                bg_base: NEUTRAL_950,
                bg_card: Color32::from_rgba_unmultiplied(0x17, 0x17, 0x17, 160),
                bg_input: Color32::from_rgba_unmultiplied(0x0a, 0x0a, 0x0a, 180),
                border: NEUTRAL_800,
                grid_line: Color32::from_rgba_unmultiplied(120, 120, 120, 14),
                text_primary: NEUTRAL_100,
                text_body: NEUTRAL_300,
                text_muted: NEUTRAL_400,
                text_dim: NEUTRAL_500,
                error: STATUS_ERROR_DARK,
                button_fill: NEUTRAL_100,
                button_text: NEUTRAL_900,
            },
            DisplayMode::Light => Self {
                mode,
                bg_base: Color32::WHITE,
                bg_card: Color32::from_rgba_unmultiplied(0xff, 0xff, 0xff, 180),
                bg_input: Color32::from_rgba_unmultiplied(0xff, 0xff, 0xff, 230),
                border: NEUTRAL_200,
                grid_line: Color32::from_rgba_unmultiplied(120, 120, 120, 20),
                text_primary: NEUTRAL_900,
                text_body: NEUTRAL_700,
                text_muted: NEUTRAL_600,
                text_dim: NEUTRAL_500,
                error: STATUS_ERROR_LIGHT,
                button_fill: NEUTRAL_900,
                button_text: Color32::WHITE,
            },
        }
    }

    pub fn is_dark(&self) -> bool {
        self.mode == DisplayMode::Dark
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_HERO: f32 = 44.0;
pub const FONT_LEAD: f32 = 18.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 12.0;
pub const FONT_CAPTION: f32 = 11.0;
pub const FONT_TINY: f32 = 10.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const CONTENT_MAX_WIDTH: f32 = 1152.0;
pub const TWO_COLUMN_MIN_WIDTH: f32 = 900.0;
pub const FOOTER_HEIGHT: f32 = 56.0;
pub const INPUT_HEIGHT: f32 = 44.0;

// =============================================================================
// DIMENSIONS - Phone mock
// =============================================================================
pub const PHONE_WIDTH: f32 = 320.0;
pub const PHONE_HEIGHT: f32 = 640.0;
pub const PHONE_SCALE_MIN: f32 = 0.72;
pub const PHONE_SCALE_REFERENCE_HEIGHT: f32 = 900.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_SMALL: f32 = 4.0;
pub const RADIUS_DEFAULT: f32 = 8.0;
pub const RADIUS_INPUT: f32 = 12.0;
pub const RADIUS_CARD: f32 = 16.0;
pub const RADIUS_HERO: f32 = 24.0;
pub const RADIUS_PHONE: f32 = 35.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_XS: f32 = 2.0;
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;
pub const SPACING_XXL: f32 = 32.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context, palette: &Palette) {
    let base = if palette.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    ctx.set_visuals(egui::Visuals {
        dark_mode: palette.is_dark(),
        panel_fill: palette.bg_base,
        window_fill: palette.bg_base,
        extreme_bg_color: palette.bg_input,
        hyperlink_color: TWITCH,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgba_unmultiplied(0x91, 0x46, 0xff, 90),
            stroke: egui::Stroke::new(STROKE_DEFAULT, TWITCH),
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        text_cursor: egui::style::TextCursorStyle {
            stroke: egui::Stroke::new(2.0, palette.text_primary),
            ..Default::default()
        },
        ..base
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.button_padding = egui::vec2(16.0, 10.0);
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Large rounded hero card
pub fn hero_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.bg_card)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, palette.border))
        .corner_radius(RADIUS_HERO)
        .inner_margin(egui::Margin::same(40))
}

/// Card around the waitlist form
pub fn form_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.bg_card)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, palette.border))
        .corner_radius(RADIUS_CARD)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
        .shadow(egui::epaint::Shadow {
            offset: [0, 1],
            blur: 3,
            spread: 0,
            color: Color32::from_black_alpha(20),
        })
}

/// Rounded pill used for the "Built for Twitch" tag and platform badges
pub fn pill_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.bg_input)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, palette.border))
        .corner_radius(255.0)
        .inner_margin(egui::Margin::symmetric(10, 4))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Primary call-to-action (high-contrast fill for the current mode)
pub fn button_primary(text: impl Into<egui::WidgetText>, palette: &Palette) -> egui::Button<'static> {
    egui::Button::new(text)
        .fill(palette.button_fill)
        .corner_radius(RADIUS_INPUT)
        .min_size(egui::vec2(0.0, INPUT_HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_by_mode() {
        let dark = Palette::for_mode(DisplayMode::Dark);
        let light = Palette::for_mode(DisplayMode::Light);
        assert!(dark.is_dark());
        assert!(!light.is_dark());
        assert_ne!(dark.bg_base, light.bg_base);
        assert_ne!(dark.button_fill, light.button_fill);
    }
}
