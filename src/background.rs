use image::{Rgba, RgbaImage};


/// The color that counts as background, together with
/// the maximum per-channel deviation that still matches it.
/// The default key is pure white with a tolerance of 12.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BackgroundKey {
    /// Red, green and blue of the background.
    color: [u8; 3],

    /// A channel may differ from the background channel
    /// by at most this amount in order to match.
    tolerance: u8,
}

/// Pure white, the background of most exported icons.
pub const WHITE: [u8; 3] = [255, 255, 255];

/// Per-channel tolerance used by the default key.
pub const DEFAULT_TOLERANCE: u8 = 12;


impl Default for BackgroundKey {
    fn default() -> Self {
        Self::new(WHITE, DEFAULT_TOLERANCE)
    }
}

impl BackgroundKey {
    /// Create a key matching all colors within `tolerance` of `color` on every channel.
    pub fn new(color: [u8; 3], tolerance: u8) -> Self {
        BackgroundKey { color, tolerance }
    }

    /// Create a white key with a custom tolerance.
    pub fn white_with_tolerance(tolerance: u8) -> Self {
        Self::new(WHITE, tolerance)
    }

    #[inline]
    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    #[inline]
    pub fn tolerance(&self) -> u8 {
        self.tolerance
    }

    /// Whether the color of the pixel is close enough to the background.
    /// Alpha is not inspected.
    #[inline]
    pub fn matches(&self, pixel: &Rgba<u8>) -> bool {
        self.color.iter().zip(pixel.0.iter())
            .all(|(&background, &channel)| background.abs_diff(channel) <= self.tolerance)
    }

    /// Whether the pixel is visible background and must become transparent.
    #[inline]
    pub fn should_clear(&self, pixel: &Rgba<u8>) -> bool {
        pixel.0[3] != 0 && self.matches(pixel)
    }
}


/// Make every visible pixel matching the key fully transparent.
/// Color channels are kept as they are, and so is
/// the alpha of every pixel that does not match.
pub fn remove_background(image: &RgbaImage, key: BackgroundKey) -> RgbaImage {
    let mut glyph = image.clone();
    remove_background_in_place(&mut glyph, key);
    glyph
}

/// Same as `remove_background`, but reuses the buffer.
/// Returns the number of pixels that were made transparent.
pub fn remove_background_in_place(image: &mut RgbaImage, key: BackgroundKey) -> usize {
    let mut cleared = 0;

    for pixel in image.pixels_mut() {
        if key.should_clear(pixel) {
            pixel.0[3] = 0;
            cleared += 1;
        }
    }

    log::debug!(
        "cleared {} of {} pixels within {} of {:?}",
        cleared, image.width() as usize * image.height() as usize,
        key.tolerance, key.color
    );

    cleared
}
