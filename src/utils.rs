//! Utility functions

use std::path::PathBuf;

// Square viewBox — for window/taskbar icons. A three-quarter ring around a dot,
// matching the in-app progress ring.
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><circle cx="32" cy="32" r="26" fill="none" stroke="#27272a" stroke-width="8"/><path d="M32 6 A26 26 0 1 1 9.48 19" fill="none" stroke="#2dd4bf" stroke-width="8" stroke-linecap="round"/><circle cx="32" cy="32" r="6" fill="#2dd4bf"/></svg>"##;

/// Rasterize the icon SVG to a square RGBA image (for window/taskbar icons).
pub fn rasterize_icon(size: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).unwrap();
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), size, size)
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

/// App data directory (settings, logs).
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Focus Ring")
}
