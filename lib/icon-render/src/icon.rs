//! Icon composition: background, checkmark, label.

use crate::font::{FontOrigin, FontSource};
use crate::geometry::IconLayout;
use crate::label;
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;

/// Jade green fill used by every placeholder icon.
pub const BACKGROUND: Rgba<u8> = Rgba([0x00, 0xBB, 0x77, 0xFF]);

/// Checkmark and label color.
pub const STROKE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Visual style shared by the whole icon set.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct IconStyle {
    /// Background fill color.
    #[derivative(Default(value = "BACKGROUND"))]
    pub background: Rgba<u8>,
    /// Checkmark and label color.
    #[derivative(Default(value = "STROKE"))]
    pub stroke: Rgba<u8>,
    /// Letter overlay near the bottom edge.
    #[derivative(Default(value = "String::from(\"W\")"))]
    pub label: String,
    /// Font resolution chain for the label.
    #[derivative(Default(value = "crate::font::default_chain()"))]
    pub fonts: Vec<FontSource>,
}

impl IconStyle {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Whether the label made it onto the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelStatus {
    /// Drawn with the font supplied by this tier.
    Drawn(FontOrigin),
    /// Left off; the icon is still valid without it.
    Skipped { reason: String },
}

impl LabelStatus {
    pub fn is_drawn(&self) -> bool {
        matches!(self, LabelStatus::Drawn(_))
    }
}

/// A composed icon plus its label outcome.
#[derive(Debug)]
pub struct RenderedIcon {
    pub image: RgbaImage,
    pub label: LabelStatus,
}

/// Composes one icon at the given pixel size.
///
/// Never fails: a label that cannot be rendered (missing fonts, missing
/// glyph) is skipped with a single warning and the canvas is returned
/// with just the background and checkmark.
pub fn generate(size: u32, style: &IconStyle) -> RenderedIcon {
    let layout = IconLayout::new(size);
    let mut image = RgbaImage::from_pixel(size, size, style.background);

    draw_checkmark(&mut image, &layout, style.stroke);

    let label = match label::draw_label(&mut image, &layout, &style.label, style.stroke, &style.fonts)
    {
        Ok(origin) => {
            log::debug!("icon {size}: label drawn with {origin:?}");
            LabelStatus::Drawn(origin)
        }
        Err(e) => {
            log::warn!("icon {size}: could not add label: {e}");
            LabelStatus::Skipped {
                reason: e.to_string(),
            }
        }
    };

    RenderedIcon { image, label }
}

fn draw_checkmark(image: &mut RgbaImage, layout: &IconLayout, color: Rgba<u8>) {
    let [p0, p1, p2] = layout.checkmark();

    let down = draw_stroke(image, p0, p1, layout.stroke_width, color);
    let up = draw_stroke(image, p1, p2, layout.stroke_width, color);

    // Fill the elbow so the two strokes meet without a notch
    if down || up {
        let radius = (layout.stroke_width / 2) as i32;
        if radius > 0 {
            draw_filled_circle_mut(image, p1, radius, color);
        }
    }
}

/// Draws a segment of the given width as a filled quad centered on the
/// segment. Returns false for degenerate (zero-length) segments, which
/// are skipped entirely.
fn draw_stroke(
    image: &mut RgbaImage,
    from: (i32, i32),
    to: (i32, i32),
    width: u32,
    color: Rgba<u8>,
) -> bool {
    let (ax, ay) = (from.0 as f32, from.1 as f32);
    let (bx, by) = (to.0 as f32, to.1 as f32);

    let (dx, dy) = (bx - ax, by - ay);
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 {
        return false;
    }

    let half = width as f32 / 2.0;
    let (nx, ny) = (-dy / length * half, dx / length * half);

    let corners = [
        Point::new((ax + nx).round() as i32, (ay + ny).round() as i32),
        Point::new((bx + nx).round() as i32, (by + ny).round() as i32),
        Point::new((bx - nx).round() as i32, (by - ny).round() as i32),
        Point::new((ax - nx).round() as i32, (ay - ny).round() as i32),
    ];

    // Very short strokes can collapse to a line after rounding;
    // draw_polygon_mut rejects a closed first/last pair
    if corners[0] == corners[3] || corners[1] == corners[2] {
        draw_line_segment_mut(image, (ax, ay), (bx, by), color);
        return true;
    }

    draw_polygon_mut(image, &corners, color);
    true
}
