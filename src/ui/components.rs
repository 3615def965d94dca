//! Reusable UI components
//!
//! Small painted widgets shared by the hero, form, and phone mock.

use crate::theme::{self, Palette};
use crate::types::PlatformBadge;
use eframe::egui;

/// Radial-ish glow built from stacked translucent circles
pub fn soft_glow(painter: &egui::Painter, center: egui::Pos2, radius: f32, color: egui::Color32) {
    const RINGS: usize = 8;
    for i in 0..RINGS {
        let t = i as f32 / RINGS as f32;
        painter.circle_filled(center, radius * (1.0 - t), color.gamma_multiply(0.25));
    }
}

/// Fill `rect` with a left-to-right gradient
pub fn horizontal_gradient(
    painter: &egui::Painter,
    rect: egui::Rect,
    left: egui::Color32,
    right: egui::Color32,
) {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), left);
    mesh.colored_vertex(rect.right_top(), right);
    mesh.colored_vertex(rect.right_bottom(), right);
    mesh.colored_vertex(rect.left_bottom(), left);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}

/// iOS / Android / macOS availability badge
pub fn platform_badge(ui: &mut egui::Ui, badge: &PlatformBadge, palette: &Palette) {
    theme::pill_frame(palette).show(ui, |ui| {
        ui.spacing_mut().item_spacing.x = 6.0;
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(badge.icon)
                    .size(theme::FONT_LABEL)
                    .color(palette.text_muted),
            );
            ui.label(
                egui::RichText::new(badge.label)
                    .size(theme::FONT_SMALL)
                    .strong()
                    .color(palette.text_primary),
            );
            ui.label(
                egui::RichText::new(badge.note)
                    .size(theme::FONT_TINY)
                    .color(palette.text_dim),
            );
        });
    });
}

/// Small filled dot, vertically centered on the current row
pub fn dot(ui: &mut egui::Ui, diameter: f32, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), diameter / 2.0, color);
}

/// Circular icon badge, e.g. the check mark on the success card
pub fn icon_circle(
    ui: &mut egui::Ui,
    icon: &str,
    diameter: f32,
    fill: egui::Color32,
    color: egui::Color32,
) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), diameter / 2.0, fill);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        icon,
        egui::FontId::proportional(diameter * 0.55),
        color,
    );
}
