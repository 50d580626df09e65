//! Generic egui helpers shared by the gallery views.
//!
//! Stateless functions: image tiles with a placeholder, rotated quads for
//! the canvas, and small text utilities.

use eframe::egui;

use curio_gallery::catalog::Acquisition;

// ─── Tiles ────────────────────────────────────────────────────────────────────

/// Placeholder fill while an image decodes, or after it failed.
pub fn placeholder_color(dark_mode: bool, failed: bool) -> egui::Color32 {
    match (dark_mode, failed) {
        (_, true) => egui::Color32::from_rgb(120, 60, 60),
        (true, false) => egui::Color32::from_gray(48),
        (false, false) => egui::Color32::from_gray(225),
    }
}

/// A clickable image tile of exactly `size`; a flat placeholder until the
/// texture exists.
pub fn image_tile(
    ui: &mut egui::Ui,
    texture: Option<&egui::TextureHandle>,
    size: egui::Vec2,
    placeholder: egui::Color32,
) -> egui::Response {
    let response = match texture {
        Some(tex) => ui.add(
            egui::Image::new(tex)
                .fit_to_exact_size(size)
                .rounding(4.0)
                .sense(egui::Sense::click()),
        ),
        None => {
            let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
            ui.painter().rect_filled(rect, 4.0, placeholder);
            response
        }
    };
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Small coloured tag for bought/gifted.
pub fn acquisition_chip(ui: &mut egui::Ui, acquired: Acquisition) {
    let color = match acquired {
        Acquisition::Bought => egui::Color32::from_rgb(70, 130, 180),
        Acquisition::Gifted => egui::Color32::from_rgb(200, 110, 60),
        Acquisition::Unknown => return,
    };
    ui.label(
        egui::RichText::new(acquired.label())
            .small()
            .color(egui::Color32::WHITE)
            .background_color(color),
    );
}

// ─── Canvas geometry ─────────────────────────────────────────────────────────

/// Corners of `rect` rotated by `angle` radians about its centre, clockwise
/// from top-left.
pub fn rotated_corners(rect: egui::Rect, angle: f32) -> [egui::Pos2; 4] {
    let c = rect.center();
    let rot = egui::emath::Rot2::from_angle(angle);
    [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ]
    .map(|p| c + rot * (p - c))
}

/// Scale `rect` about its centre.
pub fn scale_rect(rect: egui::Rect, sx: f32, sy: f32) -> egui::Rect {
    egui::Rect::from_center_size(rect.center(), egui::vec2(rect.width() * sx, rect.height() * sy))
}

/// Paint `tex` into `rect` rotated by `angle`, tinted (for fade and blur
/// ghosts).
pub fn paint_rotated_image(
    painter: &egui::Painter,
    tex: egui::TextureId,
    rect: egui::Rect,
    angle: f32,
    tint: egui::Color32,
) {
    let corners = rotated_corners(rect, angle);
    let uvs = [
        egui::pos2(0.0, 0.0),
        egui::pos2(1.0, 0.0),
        egui::pos2(1.0, 1.0),
        egui::pos2(0.0, 1.0),
    ];
    let mut mesh = egui::Mesh::with_texture(tex);
    for (pos, uv) in corners.into_iter().zip(uvs) {
        mesh.vertices.push(egui::epaint::Vertex { pos, uv, color: tint });
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}

/// Paint a flat rotated quad (placeholders and shadows).
pub fn paint_rotated_rect(painter: &egui::Painter, rect: egui::Rect, angle: f32, fill: egui::Color32) {
    painter.add(egui::Shape::convex_polygon(
        rotated_corners(rect, angle).to_vec(),
        fill,
        egui::Stroke::NONE,
    ));
}

// ─── Text utilities ───────────────────────────────────────────────────────────

/// Truncate `s` to at most `max_chars` Unicode scalar values, appending `"..."` if truncated.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}

/// Short label for a shop link: its host without `www.`. `None` for text
/// that is not an absolute http(s) URL.
pub fn link_host(link: &str) -> Option<String> {
    let url = url::Url::parse(link.trim()).ok()?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }
    let host = url.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a longer sentence", 8), "a lon...");
    }

    #[test]
    fn test_link_host() {
        assert_eq!(
            link_host("https://www.example.com/products/throw?v=1").as_deref(),
            Some("example.com")
        );
        assert_eq!(link_host("http://shop.example.jp/").as_deref(), Some("shop.example.jp"));
        assert_eq!(link_host("not a link"), None);
        assert_eq!(link_host("mailto:me@example.com"), None);
        assert_eq!(link_host(""), None);
    }

    #[test]
    fn test_rotated_corners_keep_centre() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 10.0), egui::vec2(20.0, 10.0));
        let corners = rotated_corners(rect, 0.3);
        let cx = corners.iter().map(|p| p.x).sum::<f32>() / 4.0;
        let cy = corners.iter().map(|p| p.y).sum::<f32>() / 4.0;
        assert!((cx - 20.0).abs() < 1e-4);
        assert!((cy - 15.0).abs() < 1e-4);
        let flat = rotated_corners(rect, 0.0);
        assert_eq!(flat[0], rect.left_top());
    }
}
