//! Painted phone mock showing a fake "Clips Feed". Purely decorative.

use super::components;
use crate::theme::{self, Palette};
use crate::types::{PreviewClip, PREVIEW_CLIPS};
use crate::utils::phone_scale;
use eframe::egui;
use egui::{pos2, vec2, Color32, FontId, Rect, Stroke};
use egui_phosphor::regular as icons;

const CARD_HEIGHT: f32 = 104.0;
const CARD_GAP: f32 = 12.0;
const PAD: f32 = 12.0;

pub(super) fn show(ui: &mut egui::Ui, palette: &Palette) {
    let scale = phone_scale(ui.ctx().screen_rect().height());
    let size = vec2(theme::PHONE_WIDTH, theme::PHONE_HEIGHT) * scale;
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        paint_phone(ui.painter(), rect, scale);
    }

    ui.add_space(theme::SPACING_MD);
    ui.label(
        egui::RichText::new("Mock preview")
            .size(theme::FONT_SMALL)
            .color(palette.text_dim),
    );
}

fn paint_phone(painter: &egui::Painter, rect: Rect, scale: f32) {
    let s = |v: f32| v * scale;
    let radius = s(theme::RADIUS_PHONE);

    // Body, accent ring, screen
    painter.rect_filled(rect.expand(s(3.0)), radius + s(3.0), theme::TWITCH.gamma_multiply(0.2));
    painter.rect_filled(rect, radius, theme::NEUTRAL_900);
    painter.rect_stroke(
        rect,
        radius,
        Stroke::new(theme::STROKE_DEFAULT, theme::NEUTRAL_800),
        egui::StrokeKind::Inside,
    );
    let screen = rect.shrink(s(1.0));
    painter.rect_filled(screen, radius - s(1.0), theme::NEUTRAL_950);

    // Notch
    let notch = Rect::from_center_size(
        pos2(rect.center().x, rect.top() + s(12.0)),
        vec2(s(160.0), s(24.0)),
    );
    let notch_radius = s(16.0) as u8;
    painter.rect_filled(
        notch,
        egui::CornerRadius {
            nw: 0,
            ne: 0,
            sw: notch_radius,
            se: notch_radius,
        },
        Color32::from_black_alpha(180),
    );

    // Top bar
    let bar_y = screen.top() + s(34.0);
    let icon_font = FontId::proportional(s(20.0));
    painter.text(
        pos2(screen.left() + s(16.0), bar_y),
        egui::Align2::LEFT_CENTER,
        icons::CARET_LEFT,
        icon_font.clone(),
        theme::NEUTRAL_400,
    );
    painter.text(
        pos2(screen.center().x, bar_y),
        egui::Align2::CENTER_CENTER,
        "Clips Feed",
        FontId::proportional(s(theme::FONT_BODY)),
        Color32::WHITE,
    );
    painter.text(
        pos2(screen.right() - s(16.0), bar_y),
        egui::Align2::RIGHT_CENTER,
        icons::DOTS_THREE_VERTICAL,
        icon_font,
        theme::NEUTRAL_400,
    );

    // Feed
    let mut top = bar_y + s(22.0);
    for clip in &PREVIEW_CLIPS {
        let card = Rect::from_min_size(
            pos2(screen.left() + s(PAD), top),
            vec2(screen.width() - s(PAD * 2.0), s(CARD_HEIGHT)),
        );
        paint_clip_card(painter, card, clip, scale);
        top = card.bottom() + s(CARD_GAP);
    }

    let load_more = Rect::from_min_size(
        pos2(screen.left() + s(PAD), top),
        vec2(screen.width() - s(PAD * 2.0), s(36.0)),
    );
    painter.rect_filled(load_more, s(theme::RADIUS_INPUT), theme::NEUTRAL_900.gamma_multiply(0.6));
    painter.rect_stroke(
        load_more,
        s(theme::RADIUS_INPUT),
        Stroke::new(theme::STROKE_DEFAULT, theme::NEUTRAL_800),
        egui::StrokeKind::Inside,
    );
    painter.text(
        load_more.center(),
        egui::Align2::CENTER_CENTER,
        "Load more",
        FontId::proportional(s(theme::FONT_BODY)),
        Color32::from_white_alpha(204),
    );
}

fn paint_clip_card(painter: &egui::Painter, card: Rect, clip: &PreviewClip, scale: f32) {
    let s = |v: f32| v * scale;

    painter.rect_filled(card, s(theme::RADIUS_CARD), theme::NEUTRAL_900.gamma_multiply(0.6));
    painter.rect_stroke(
        card,
        s(theme::RADIUS_CARD),
        Stroke::new(theme::STROKE_DEFAULT, theme::NEUTRAL_800),
        egui::StrokeKind::Inside,
    );

    // Thumbnail with play button and duration chip
    let thumb = Rect::from_min_size(card.min + vec2(s(PAD), s(PAD)), vec2(s(112.0), s(80.0)));
    painter.rect_filled(thumb, s(theme::RADIUS_DEFAULT), theme::NEUTRAL_800);
    let thumb_painter = painter.with_clip_rect(thumb);
    components::soft_glow(&thumb_painter, thumb.center(), s(56.0), theme::PURPLE_GLOW);
    painter.circle_filled(thumb.center(), s(18.0), Color32::from_black_alpha(128));
    painter.text(
        thumb.center(),
        egui::Align2::CENTER_CENTER,
        icons::PLAY_CIRCLE,
        FontId::proportional(s(20.0)),
        Color32::WHITE,
    );
    let chip_font = FontId::proportional(s(theme::FONT_CAPTION));
    let chip_galley = painter.layout_no_wrap(
        clip.duration.to_string(),
        chip_font,
        Color32::from_white_alpha(230),
    );
    let chip = Rect::from_min_size(
        thumb.right_bottom() - vec2(s(8.0), s(8.0)) - chip_galley.size() - vec2(s(12.0), s(4.0)),
        chip_galley.size() + vec2(s(12.0), s(4.0)),
    );
    painter.rect_filled(chip, s(theme::RADIUS_SMALL), Color32::from_black_alpha(153));
    painter.galley(chip.min + vec2(s(6.0), s(2.0)), chip_galley, Color32::WHITE);

    // Save action, pinned to the top-right
    let save = Rect::from_min_size(
        pos2(card.right() - s(PAD) - s(60.0), card.top() + s(PAD)),
        vec2(s(60.0), s(30.0)),
    );
    painter.rect_filled(save, s(theme::RADIUS_DEFAULT), theme::NEUTRAL_900.gamma_multiply(0.6));
    painter.rect_stroke(
        save,
        s(theme::RADIUS_DEFAULT),
        Stroke::new(theme::STROKE_DEFAULT, theme::NEUTRAL_800),
        egui::StrokeKind::Inside,
    );
    painter.text(
        save.center(),
        egui::Align2::CENTER_CENTER,
        format!("{} Save", icons::DOWNLOAD_SIMPLE),
        FontId::proportional(s(theme::FONT_CAPTION)),
        Color32::WHITE,
    );

    // Title, byline, progress
    let meta = Rect::from_min_max(
        pos2(thumb.right() + s(PAD), thumb.top()),
        pos2(save.left() - s(PAD), thumb.bottom()),
    );
    let meta_painter = painter.with_clip_rect(meta);
    meta_painter.text(
        meta.left_top(),
        egui::Align2::LEFT_TOP,
        clip.title,
        FontId::proportional(s(theme::FONT_BODY)),
        Color32::WHITE,
    );
    meta_painter.text(
        meta.left_top() + vec2(0.0, s(20.0)),
        egui::Align2::LEFT_TOP,
        format!("{} • {}", clip.author, clip.time),
        FontId::proportional(s(theme::FONT_CAPTION)),
        theme::NEUTRAL_400,
    );
    let track = Rect::from_min_size(
        meta.left_top() + vec2(0.0, s(44.0)),
        vec2(meta.width(), s(6.0)),
    );
    painter.rect_filled(track, s(3.0), theme::NEUTRAL_800);
    let progress = Rect::from_min_size(track.min, vec2(track.width() * 0.6, track.height()));
    components::horizontal_gradient(painter, progress, theme::TWITCH, theme::SKY);
}
