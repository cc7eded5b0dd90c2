use std::path::PathBuf;

use thiserror::Error;


/// Failures while producing glyphs. None of them are recovered from.
#[derive(Debug, Error)]
pub enum GlyphError {
    #[error("could not read source image `{}`", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("could not write glyph `{}`", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl GlyphError {
    /// The file that could not be read or written.
    pub fn path(&self) -> &std::path::Path {
        match self {
            GlyphError::Decode { path, .. } | GlyphError::Encode { path, .. } => path,
        }
    }
}
