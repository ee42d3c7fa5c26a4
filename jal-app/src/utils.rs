//! Utility functions

// Drop mark on transparent background, used for the in-app header logo
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 48 64"><path fill="#ffa500" stroke="#e08900" stroke-width="2" d="M24 3C15.2 15.8 4 30.6 4 42a20 20 0 0 0 40 0C44 30.6 32.8 15.8 24 3z"/><ellipse cx="16.5" cy="44" rx="4.5" ry="6.5" fill="#ffffff" opacity=".45" transform="rotate(-20 16.5 44)"/></svg>"##;

// Drop on a blue rounded tile, square viewBox, used for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect width="64" height="64" rx="14" fill="#2196f3"/><path fill="#ffffff" d="M32 9c-7.4 10.7-16.8 23.1-16.8 32.6C15.2 51.4 22.7 58 32 58s16.8-6.6 16.8-16.4C48.8 32.1 39.4 19.7 32 9z"/><ellipse cx="25.5" cy="43" rx="3.8" ry="5.5" fill="#2196f3" opacity=".35" transform="rotate(-20 25.5 43)"/></svg>"##;

/// Rasterize the logo SVG at the given width, preserving aspect ratio.
pub fn rasterize_logo(width: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).unwrap();
    let svg_size = tree.size();
    let scale = width as f32 / svg_size.width();
    let height = (svg_size.height() * scale).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), width, height)
}

/// Rasterize the icon SVG to a square image (for window/taskbar icons).
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

/// OpenStreetMap URL for "View larger map".
pub fn osm_url(lat: f64, lng: f64, zoom: u32) -> String {
    format!("https://www.openstreetmap.org/#map={zoom}/{lat:.4}/{lng:.4}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osm_url_embeds_zoom_and_coordinates() {
        assert_eq!(
            osm_url(25.4670, 91.3662, 12),
            "https://www.openstreetmap.org/#map=12/25.4670/91.3662"
        );
    }

    #[test]
    fn embedded_svgs_keep_their_color_attributes() {
        assert!(LOGO_SVG.contains(r##"fill="#ffa500""##));
        assert!(LOGO_SVG.ends_with("</svg>"));
        assert!(ICON_SVG.contains(r##"fill="#2196f3""##));
        assert!(ICON_SVG.ends_with("</svg>"));
    }

    #[test]
    fn logo_rasterizes_at_requested_width() {
        let (pixels, w, h) = rasterize_logo(48);
        assert_eq!(w, 48);
        assert!(h > 0);
        assert_eq!(pixels.len(), (w * h * 4) as usize);
    }

    #[test]
    fn icon_rasterizes_square() {
        let (pixels, w, h) = rasterize_icon(64);
        assert_eq!((w, h), (64, 64));
        assert_eq!(pixels.len(), 64 * 64 * 4);
    }
}
