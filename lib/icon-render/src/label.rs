//! Letter overlay layout and drawing.
//!
//! The label is centered horizontally and anchored so its bottom edge
//! sits `padding / 2` pixels above the canvas bottom, whichever font tier
//! ends up rendering it.

use crate::builtin_font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::font::{self, FontOrigin, FontSource, ResolvedFont};
use crate::geometry::IconLayout;
use crate::{IconRenderError, IconRenderResult};
use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

/// Resolves the font chain and draws `text` onto the canvas. Returns the
/// tier that supplied the font, or the error that prevented the label.
pub fn draw_label(
    image: &mut RgbaImage,
    layout: &IconLayout,
    text: &str,
    color: Rgba<u8>,
    chain: &[FontSource],
) -> IconRenderResult<FontOrigin> {
    if text.is_empty() {
        return Err(IconRenderError::InvalidParameter(
            "label text is empty".to_string(),
        ));
    }

    if image.width() == 0 || image.height() == 0 {
        return Err(IconRenderError::InvalidParameter(
            "canvas has no pixels".to_string(),
        ));
    }

    let (resolved, origin) = font::resolve(chain)?;

    match &resolved {
        ResolvedFont::Vector(font) => draw_vector_label(image, layout, text, color, font),
        ResolvedFont::Builtin => draw_builtin_label(image, layout, text, color)?,
    }

    Ok(origin)
}

fn draw_vector_label(
    image: &mut RgbaImage,
    layout: &IconLayout,
    text: &str,
    color: Rgba<u8>,
    font: &FontVec,
) {
    let scale = PxScale::from(layout.label_px as f32);
    let (text_width, text_height) = text_size(scale, font, text);

    let x = (layout.size as i32 - text_width as i32) / 2;
    let y = layout.size as i32 - (layout.padding / 2) as i32 - text_height as i32;

    draw_text_mut(image, color, x, y, scale, font, text);
}

fn draw_builtin_label(
    image: &mut RgbaImage,
    layout: &IconLayout,
    text: &str,
    color: Rgba<u8>,
) -> IconRenderResult<()> {
    let masks = text
        .chars()
        .map(|c| {
            builtin_font::glyph(c)
                .ok_or_else(|| IconRenderError::Label(format!("no builtin glyph for {c:?}")))
        })
        .collect::<IconRenderResult<Vec<_>>>()?;

    // Integer upscaling keeps the blocky glyphs crisp; the result only
    // approximates the requested label size.
    let scale = (layout.label_px / GLYPH_HEIGHT).max(1);
    let glyph_width = GLYPH_WIDTH * scale;
    let glyph_height = GLYPH_HEIGHT * scale;
    let advance = glyph_width + scale;

    let text_width = glyph_width + advance * (masks.len() as u32 - 1);
    let x0 = (layout.size as i32 - text_width as i32) / 2;
    let y0 = layout.size as i32 - (layout.padding / 2) as i32 - glyph_height as i32;

    for (index, rows) in masks.iter().enumerate() {
        let glyph_x = x0 + (advance * index as u32) as i32;

        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                    let x = glyph_x + (col * scale) as i32;
                    let y = y0 + (row as u32 * scale) as i32;
                    draw_filled_rect_mut(image, Rect::at(x, y).of_size(scale, scale), color);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const GREEN: Rgba<u8> = Rgba([0x00, 0xBB, 0x77, 0xFF]);

    fn canvas(size: u32) -> RgbaImage {
        RgbaImage::from_pixel(size, size, GREEN)
    }

    #[test]
    fn test_empty_label_is_rejected() {
        let layout = IconLayout::new(128);
        let mut image = canvas(128);

        let result = draw_label(&mut image, &layout, "", WHITE, &[FontSource::Builtin]);
        assert!(matches!(result, Err(IconRenderError::InvalidParameter(_))));
    }

    #[test]
    fn test_builtin_label_lands_in_bottom_band() {
        let layout = IconLayout::new(128);
        let mut image = canvas(128);

        let origin =
            draw_label(&mut image, &layout, "W", WHITE, &[FontSource::Builtin]).unwrap();
        assert_eq!(origin, FontOrigin::Builtin);

        // 21 px label -> scale 3; a lone "W" is 15 px wide and 21 px tall,
        // anchored 16 px above the bottom edge.
        assert_eq!(*image.get_pixel(56, 91), WHITE);
        assert_eq!(*image.get_pixel(62, 100), WHITE);

        // Nothing above the label band changes
        assert_eq!(*image.get_pixel(0, 0), GREEN);
        assert_eq!(*image.get_pixel(64, 20), GREEN);
    }

    #[test]
    fn test_builtin_label_rejects_unknown_glyphs() {
        let layout = IconLayout::new(128);
        let mut image = canvas(128);

        let result = draw_label(&mut image, &layout, "7", WHITE, &[FontSource::Builtin]);
        assert!(matches!(result, Err(IconRenderError::Label(_))));
    }

    #[test]
    fn test_dead_chain_reports_font_error() {
        let layout = IconLayout::new(128);
        let mut image = canvas(128);

        let result = draw_label(
            &mut image,
            &layout,
            "W",
            WHITE,
            &[FontSource::File("/nonexistent/font.ttf".into())],
        );
        assert!(matches!(result, Err(IconRenderError::Font(_))));

        // The failed attempt leaves the canvas untouched
        assert!(image.pixels().all(|p| *p == GREEN));
    }
}
