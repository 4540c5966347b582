//! Font resolution for the label overlay.
//!
//! The label tries an ordered chain of sources and uses the first one
//! that loads: a specific TTF path, then a named font searched across the
//! system font directories, then the compiled-in bitmap font. Only an
//! explicitly empty chain can fail to resolve.

use crate::{IconRenderError, IconRenderResult};
use ab_glyph::FontVec;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Bold sans font preferred for the label.
pub const DEJAVU_BOLD_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Second-choice font, located by filename search.
pub const FALLBACK_FONT_NAME: &str = "arial.ttf";

/// One tier of the resolution chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// Load a TTF/OTF from an exact path.
    File(PathBuf),
    /// Search the system font directories for this filename.
    Named(&'static str),
    /// The compiled-in bitmap font; always available.
    Builtin,
}

/// Which tier actually supplied the font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontOrigin {
    File(PathBuf),
    Named(PathBuf),
    Builtin,
}

/// A font ready for drawing.
pub enum ResolvedFont {
    Vector(FontVec),
    Builtin,
}

/// The default chain: DejaVu Sans Bold, then an `arial.ttf` lookup, then
/// the builtin bitmap font.
pub fn default_chain() -> Vec<FontSource> {
    vec![
        FontSource::File(PathBuf::from(DEJAVU_BOLD_PATH)),
        FontSource::Named(FALLBACK_FONT_NAME),
        FontSource::Builtin,
    ]
}

/// Tries each source in order and returns the first usable font along
/// with its origin. Misses are logged at debug level and skipped.
pub fn resolve(chain: &[FontSource]) -> IconRenderResult<(ResolvedFont, FontOrigin)> {
    for source in chain {
        match try_source(source) {
            Ok(resolved) => return Ok(resolved),
            Err(e) => log::debug!("font source {source:?} unavailable: {e}"),
        }
    }

    Err(IconRenderError::Font(
        "no usable font in the resolution chain".to_string(),
    ))
}

fn try_source(source: &FontSource) -> IconRenderResult<(ResolvedFont, FontOrigin)> {
    match source {
        FontSource::File(path) => {
            let font = load_font_file(path)?;
            Ok((ResolvedFont::Vector(font), FontOrigin::File(path.clone())))
        }
        FontSource::Named(name) => {
            let path = find_named_font(name).ok_or_else(|| {
                IconRenderError::Font(format!("font {name} not found in system font directories"))
            })?;
            let font = load_font_file(&path)?;
            Ok((ResolvedFont::Vector(font), FontOrigin::Named(path)))
        }
        FontSource::Builtin => Ok((ResolvedFont::Builtin, FontOrigin::Builtin)),
    }
}

fn load_font_file(path: &Path) -> IconRenderResult<FontVec> {
    let bytes = fs::read(path)
        .map_err(|e| IconRenderError::Font(format!("read {}: {e}", path.display())))?;

    FontVec::try_from_vec(bytes)
        .map_err(|e| IconRenderError::Font(format!("parse {}: {e}", path.display())))
}

/// Case-insensitive filename search across the usual font directories.
fn find_named_font(name: &str) -> Option<PathBuf> {
    for dir in font_dirs() {
        let hit = WalkDir::new(&dir)
            .max_depth(4)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .find(|entry| {
                entry.file_type().is_file()
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|f| f.eq_ignore_ascii_case(name))
            });

        if let Some(entry) = hit {
            return Some(entry.into_path());
        }
    }

    None
}

fn font_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/usr/share/fonts"),
        PathBuf::from("/usr/local/share/fonts"),
        PathBuf::from("/System/Library/Fonts"),
        PathBuf::from("/Library/Fonts"),
        PathBuf::from("C:\\Windows\\Fonts"),
    ];

    if let Ok(home) = std::env::var("HOME") {
        dirs.push(Path::new(&home).join(".fonts"));
        dirs.push(Path::new(&home).join(".local/share/fonts"));
    }

    dirs
}
