use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageError, ImageFormat, ImageReader, RgbaImage};

use crate::background::{remove_background_in_place, BackgroundKey};
use crate::error::GlyphError;
use crate::silhouette::to_white_silhouette;


/// File name of the transparent glyph, next to the source.
pub const GLYPH_FILE_NAME: &str = "icon-glyph.png";

/// File name of the white silhouette, next to the source.
pub const WHITE_GLYPH_FILE_NAME: &str = "icon-glyph-white.png";


/// Both derivatives of one source icon.
#[derive(Clone, PartialEq, Debug)]
pub struct GlyphSet {
    /// The source with its background made transparent.
    pub glyph: RgbaImage,

    /// The glyph with every visible pixel turned solid white.
    pub white: RgbaImage,
}

/// Where the two glyph files of a source are written.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GlyphPaths {
    pub glyph: PathBuf,
    pub white: PathBuf,
}


impl GlyphSet {
    /// Convert the image to RGBA and run both passes, background removal first.
    pub fn from_image(image: &DynamicImage, key: BackgroundKey) -> Self {
        Self::from_rgba(image.to_rgba8(), key)
    }

    /// Run both passes on an RGBA buffer, which becomes the glyph.
    pub fn from_rgba(mut image: RgbaImage, key: BackgroundKey) -> Self {
        remove_background_in_place(&mut image, key);
        let white = to_white_silhouette(&image);
        GlyphSet { glyph: image, white }
    }

    /// Write the glyph and then the silhouette as PNG.
    /// A failure on the second file leaves the first one in place.
    pub fn save(&self, paths: &GlyphPaths) -> Result<(), GlyphError> {
        save_png(&self.glyph, &paths.glyph)?;
        save_png(&self.white, &paths.white)
    }
}

impl GlyphPaths {
    /// The glyph files live in the directory of the source.
    /// A bare file name refers to the current directory.
    pub fn next_to(source: &Path) -> Self {
        let directory = source.parent().unwrap_or_else(|| Path::new(""));

        GlyphPaths {
            glyph: directory.join(GLYPH_FILE_NAME),
            white: directory.join(WHITE_GLYPH_FILE_NAME),
        }
    }
}


/// Read an image file of any supported format.
/// The format is detected from the file content,
/// falling back to the extension if the content is not recognized.
pub fn load(source: &Path) -> Result<DynamicImage, GlyphError> {
    let decode = || -> Result<DynamicImage, ImageError> {
        ImageReader::open(source)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(ImageError::IoError)?
            .decode()
    };

    decode().map_err(|error| GlyphError::Decode {
        path: source.to_path_buf(),
        source: error,
    })
}

fn save_png(image: &RgbaImage, path: &Path) -> Result<(), GlyphError> {
    image.save_with_format(path, ImageFormat::Png).map_err(|error| GlyphError::Encode {
        path: path.to_path_buf(),
        source: error,
    })?;

    log::info!("wrote {}", path.display());
    Ok(())
}

/// Load the source icon, derive both glyphs with the white key,
/// and write them next to the source.
pub fn make_glyphs(source: &Path) -> Result<GlyphPaths, GlyphError> {
    make_glyphs_with_key(source, BackgroundKey::default())
}

/// Like `make_glyphs`, with a custom background.
pub fn make_glyphs_with_key(source: &Path, key: BackgroundKey) -> Result<GlyphPaths, GlyphError> {
    let image = load(source)?;
    log::info!("loaded {} ({}x{})", source.display(), image.width(), image.height());

    let glyphs = GlyphSet::from_image(&image, key);
    let paths = GlyphPaths::next_to(source);
    glyphs.save(&paths)?;

    Ok(paths)
}
