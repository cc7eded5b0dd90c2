use image::{Rgba, RgbaImage};


/// Fully transparent white, written where the glyph is transparent.
pub const CLEAR_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Fully opaque white, written wherever the glyph is visible at all.
pub const SOLID_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);


/// Whether a pixel belongs to the shape. Only zero alpha is outside,
/// so faint anti-aliased edges end up fully opaque.
#[inline]
pub fn is_inside(pixel: &Rgba<u8>) -> bool {
    pixel.0[3] != 0
}

/// Replace every pixel by white, keeping only whether it was transparent.
/// The result contains no values other than `CLEAR_WHITE` and `SOLID_WHITE`.
pub fn to_white_silhouette(glyph: &RgbaImage) -> RgbaImage {
    let silhouette = RgbaImage::from_fn(glyph.width(), glyph.height(), |x, y| {
        if is_inside(glyph.get_pixel(x, y)) { SOLID_WHITE } else { CLEAR_WHITE }
    });

    log::debug!(
        "silhouette has {} opaque pixels",
        silhouette.pixels().filter(|pixel| is_inside(pixel)).count()
    );

    silhouette
}


#[cfg(test)]
mod tests {
    use super::*;

    fn is_inside_circle(center_x: u32, center_y: u32, radius: u32) -> impl Fn(u32, u32) -> bool {
        move |x, y| {
            let x = x as f32 - center_x as f32;
            let y = y as f32 - center_y as f32;
            (x * x + y * y).sqrt() < radius as f32
        }
    }

    fn glyph_from_shape(width: u32, height: u32, shape: impl Fn(u32, u32) -> bool) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            if shape(x, y) { Rgba([(x % 256) as u8, 40, (y % 256) as u8, 1 + (x % 255) as u8]) }
            else { Rgba([(y % 256) as u8, 7, 9, 0]) }
        })
    }

    #[test]
    fn maps_alpha_to_two_values() {
        let glyph = RgbaImage::from_raw(3, 1, vec![
            255, 255, 255, 0,
            10, 20, 30, 255,
            0, 0, 0, 1,
        ]).unwrap();

        let white = to_white_silhouette(&glyph);

        assert_eq!(white.get_pixel(0, 0), &CLEAR_WHITE);
        assert_eq!(white.get_pixel(1, 0), &SOLID_WHITE);
        assert_eq!(white.get_pixel(2, 0), &SOLID_WHITE);
    }

    #[test]
    fn preserves_shape_and_dimensions() {
        let shape = is_inside_circle(40, 30, 17);
        let glyph = glyph_from_shape(97, 61, &shape);
        let white = to_white_silhouette(&glyph);

        assert_eq!(white.dimensions(), glyph.dimensions());
        for (x, y, pixel) in white.enumerate_pixels() {
            let expected = if shape(x, y) { SOLID_WHITE } else { CLEAR_WHITE };
            assert_eq!(pixel, &expected, "pixel at {}, {}", x, y);
        }
    }

    #[test]
    fn is_idempotent() {
        let glyph = glyph_from_shape(64, 64, is_inside_circle(0, 0, 40));
        let once = to_white_silhouette(&glyph);
        let twice = to_white_silhouette(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_image_stays_empty() {
        let white = to_white_silhouette(&RgbaImage::new(0, 0));
        assert_eq!(white.dimensions(), (0, 0));
    }
}
