//! Rendering library for the Weekly placeholder icon set.
//!
//! Each icon is a jade-green square with a white checkmark and, when a
//! usable font is found, a single-letter overlay near the bottom edge.
//! Everything is derived from the pixel size, so the same style scales
//! from 72 px up to 512 px.

pub mod builtin_font;
pub mod export;
pub mod font;
pub mod geometry;
pub mod icon;
pub mod label;

pub use export::{generate_set, icon_filename, save_png, IconOutcome, IconReport, ICON_SIZES};
pub use font::{FontOrigin, FontSource};
pub use geometry::IconLayout;
pub use icon::{generate, IconStyle, LabelStatus, RenderedIcon};

pub type IconRenderResult<T> = Result<T, IconRenderError>;

#[derive(thiserror::Error, Debug)]
pub enum IconRenderError {
    #[error("Font error: {0}")]
    Font(String),
    #[error("Label error: {0}")]
    Label(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
