//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;

// Square viewBox for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><defs><linearGradient id="g" x1="0" y1="0" x2="1" y2="1"><stop offset="0" stop-color="#d946ef"/><stop offset="1" stop-color="#0ea5e9"/></linearGradient></defs><rect width="64" height="64" rx="14" fill="url(#g)"/><rect x="14" y="18" width="36" height="28" rx="5" fill="none" stroke="#fff" stroke-width="4"/><path d="M28 25v14l11-7z" fill="#fff"/></svg>"##;

/// Rasterize the icon SVG to a square straight-alpha RGBA image.
pub fn rasterize_icon(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the app data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Scale for the phone mock: `clamp(0.72, height / 900, 1)`
pub fn phone_scale(available_height: f32) -> f32 {
    use crate::theme::{PHONE_SCALE_MIN, PHONE_SCALE_REFERENCE_HEIGHT};
    (available_height / PHONE_SCALE_REFERENCE_HEIGHT).clamp(PHONE_SCALE_MIN, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_rasterizes_to_requested_size() {
        let (rgba, w, h) = rasterize_icon(64).unwrap();
        assert_eq!((w, h), (64, 64));
        assert_eq!(rgba.len(), 64 * 64 * 4);
        // Center of the icon is opaque
        let center = ((32 * 64 + 32) * 4 + 3) as usize;
        assert_eq!(rgba[center], 255);
    }

    #[test]
    fn phone_scale_clamps() {
        assert_eq!(phone_scale(300.0), 0.72);
        assert_eq!(phone_scale(1800.0), 1.0);
        assert!((phone_scale(720.0) - 0.8).abs() < 1e-6);
    }
}
