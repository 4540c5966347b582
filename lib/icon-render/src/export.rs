//! PNG export and the fixed batch run.

use crate::icon::{self, IconStyle, LabelStatus};
use crate::{IconRenderError, IconRenderResult};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::RgbaImage;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// The 8 PWA icon sizes, ascending.
pub const ICON_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// Output filename for one size, e.g. `icon-128x128.png`.
pub fn icon_filename(size: u32) -> String {
    format!("icon-{size}x{size}.png")
}

/// Encodes the canvas as PNG with the strongest compression setting.
pub fn save_png(image: &RgbaImage, path: &Path) -> IconRenderResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
    image.write_with_encoder(encoder)?;

    Ok(())
}

/// Outcome of one icon in a batch run.
#[derive(Debug)]
pub enum IconOutcome {
    /// File on disk; the label may or may not have made it.
    Written { label: LabelStatus },
    /// Nothing usable on disk for this size.
    Failed(IconRenderError),
}

/// One entry of the batch report.
#[derive(Debug)]
pub struct IconReport {
    pub size: u32,
    pub path: PathBuf,
    pub outcome: IconOutcome,
}

impl IconReport {
    pub fn is_written(&self) -> bool {
        matches!(self.outcome, IconOutcome::Written { .. })
    }
}

/// Renders every size in order and writes it into `dir`. A failure for
/// one size is recorded in its report and does not stop the rest.
pub fn generate_set(dir: &Path, style: &IconStyle, sizes: &[u32]) -> Vec<IconReport> {
    log::info!("generating {} icons into {}", sizes.len(), dir.display());

    sizes
        .iter()
        .map(|&size| {
            let path = dir.join(icon_filename(size));
            let rendered = icon::generate(size, style);

            let outcome = match save_png(&rendered.image, &path) {
                Ok(()) => {
                    log::info!("wrote {}", path.display());
                    IconOutcome::Written {
                        label: rendered.label,
                    }
                }
                Err(e) => {
                    log::error!("failed to write {}: {e}", path.display());
                    IconOutcome::Failed(e)
                }
            };

            IconReport {
                size,
                path,
                outcome,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontSource;
    use crate::icon::BACKGROUND;
    use std::fs;
    use tempfile::tempdir;

    fn test_style() -> IconStyle {
        // Builtin-only chain keeps the tests independent of installed fonts
        IconStyle::new().with_fonts(vec![FontSource::Builtin])
    }

    #[test]
    fn test_icon_filename() {
        assert_eq!(icon_filename(72), "icon-72x72.png");
        assert_eq!(icon_filename(512), "icon-512x512.png");
    }

    #[test]
    fn test_generate_set_writes_exactly_the_requested_files() {
        let dir = tempdir().unwrap();

        let reports = generate_set(dir.path(), &test_style(), &ICON_SIZES);

        assert_eq!(reports.len(), ICON_SIZES.len());
        assert!(reports.iter().all(|r| r.is_written()));

        for size in ICON_SIZES {
            assert!(dir.path().join(icon_filename(size)).is_file());
        }

        // None extra
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, ICON_SIZES.len());
    }

    #[test]
    fn test_written_png_decodes_back() -> anyhow::Result<()> {
        let dir = tempdir()?;

        generate_set(dir.path(), &test_style(), &[128]);

        let decoded = image::open(dir.path().join("icon-128x128.png"))?.to_rgba8();
        assert_eq!(decoded.width(), 128);
        assert_eq!(decoded.height(), 128);
        assert_eq!(*decoded.get_pixel(0, 0), BACKGROUND);

        Ok(())
    }

    #[test]
    fn test_save_failures_do_not_stop_the_batch() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("no-such-subdir");

        let reports = generate_set(&missing, &test_style(), &ICON_SIZES);

        assert_eq!(reports.len(), ICON_SIZES.len());
        assert!(reports.iter().all(|r| !r.is_written()));
        assert!(reports
            .iter()
            .all(|r| matches!(r.outcome, IconOutcome::Failed(IconRenderError::Io(_)))));
    }

    #[test]
    fn test_label_outcome_is_reported_per_file() {
        let dir = tempdir().unwrap();
        let style = IconStyle::new()
            .with_fonts(vec![FontSource::File("/nonexistent/font.ttf".into())]);

        let reports = generate_set(dir.path(), &style, &[96]);

        assert!(reports[0].is_written());
        match &reports[0].outcome {
            IconOutcome::Written { label } => {
                assert!(matches!(label, LabelStatus::Skipped { .. }))
            }
            IconOutcome::Failed(e) => panic!("unexpected failure: {e}"),
        }
    }
}
