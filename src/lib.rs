//! This crate derives two glyphs from an icon image.
//! The first one has its near-white background made transparent,
//! the second one is a solid white silhouette of the first one,
//! carrying nothing but its alpha shape.

pub mod background;
pub mod silhouette;
pub mod glyph;
pub mod error;

pub mod prelude {
    pub use crate::{
        derive_glyph,
        derive_white_glyph,
    };

    pub use crate::background::{
        BackgroundKey, remove_background, remove_background_in_place
    };

    pub use crate::silhouette::to_white_silhouette;

    pub use crate::glyph::{
        GlyphSet, GlyphPaths, make_glyphs, make_glyphs_with_key,
        GLYPH_FILE_NAME, WHITE_GLYPH_FILE_NAME
    };

    pub use crate::error::GlyphError;
}


use prelude::*;
use image::RgbaImage;

/// Make the near-white background of the icon transparent.
pub fn derive_glyph(icon: &RgbaImage) -> RgbaImage {
    remove_background(icon, BackgroundKey::default())
}

/// Derive the transparent glyph of the icon and turn it into a white silhouette.
pub fn derive_white_glyph(icon: &RgbaImage) -> RgbaImage {
    to_white_silhouette(&derive_glyph(icon))
}
