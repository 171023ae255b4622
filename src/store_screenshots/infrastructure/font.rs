use std::path::{Path, PathBuf};

use rusttype::{Font, Scale};

use super::error::InfrastructureError;

pub const BOLD_FONT_CANDIDATES: [&str; 2] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/System/Library/Fonts/SFProDisplay-Bold.otf",
];

pub const REGULAR_FONT_CANDIDATES: [&str; 2] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/System/Library/Fonts/SFProDisplay-Regular.otf",
];

const EMBEDDED_REGULAR: &[u8] = include_bytes!("../../../DejaVu_Sans/DejaVuSans.ttf");
const EMBEDDED_BOLD: &[u8] = include_bytes!("../../../DejaVu_Sans/DejaVuSans-Bold.ttf");

/// Where a loaded face came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    /// The DejaVu Sans pair compiled into the binary.
    Embedded,
}

/// The regular and bold faces used for every screenshot in a run.
#[derive(Clone)]
pub struct FontSet {
    regular: Font<'static>,
    bold: Font<'static>,
    pub regular_source: FontSource,
    pub bold_source: FontSource,
}

impl FontSet {
    /// The embedded DejaVu Sans pair, independent of what is installed.
    pub fn embedded() -> Result<Self, InfrastructureError> {
        Ok(Self {
            regular: embedded_face(false)?,
            bold: embedded_face(true)?,
            regular_source: FontSource::Embedded,
            bold_source: FontSource::Embedded,
        })
    }

    pub fn face(&self, bold: bool) -> &Font<'static> {
        if bold {
            &self.bold
        } else {
            &self.regular
        }
    }
}

/// rusttype scale that makes the em square `size` pixels tall.
pub fn em_scale(font: &Font<'_>, size: u32) -> Scale {
    let unscaled = font.v_metrics_unscaled();
    let units_per_em = font.units_per_em().max(1) as f32;
    Scale::uniform(size as f32 * (unscaled.ascent - unscaled.descent) / units_per_em)
}

/// Picks the first usable font file from an ordered list of candidates.
#[derive(Debug, Clone, Default)]
pub struct FontResolver {
    regular: Vec<PathBuf>,
    bold: Vec<PathBuf>,
}

impl FontResolver {
    /// Probes the usual Linux and macOS system font locations.
    pub fn system() -> Self {
        Self {
            regular: REGULAR_FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
            bold: BOLD_FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }

    /// No candidates at all: every lookup yields the embedded font.
    pub fn builtin_only() -> Self {
        Self::default()
    }

    /// Puts user-supplied font files in front of the existing candidates.
    pub fn with_overrides(mut self, regular: Option<PathBuf>, bold: Option<PathBuf>) -> Self {
        if let Some(path) = regular {
            self.regular.insert(0, path);
        }
        if let Some(path) = bold {
            self.bold.insert(0, path);
        }
        self
    }

    pub fn candidates(&self, bold: bool) -> &[PathBuf] {
        if bold {
            &self.bold
        } else {
            &self.regular
        }
    }

    /// Loads both weights once. Falls back to the embedded face for a weight when none
    /// of its candidates exists and parses.
    pub fn load(&self) -> Result<FontSet, InfrastructureError> {
        let (regular, regular_source) = self.resolve_face(false)?;
        let (bold, bold_source) = self.resolve_face(true)?;
        Ok(FontSet {
            regular,
            bold,
            regular_source,
            bold_source,
        })
    }

    fn resolve_face(&self, bold: bool) -> Result<(Font<'static>, FontSource), InfrastructureError> {
        for path in self.candidates(bold) {
            if !path.exists() {
                continue;
            }
            match load_font(path) {
                Some(font) => {
                    log::debug!("Using font {}", path.display());
                    return Ok((font, FontSource::File(path.clone())));
                }
                None => log::warn!("Skipping unreadable font file {}", path.display()),
            }
        }
        log::debug!("No font file found, using embedded DejaVu Sans (bold: {})", bold);
        Ok((embedded_face(bold)?, FontSource::Embedded))
    }
}

fn embedded_face(bold: bool) -> Result<Font<'static>, InfrastructureError> {
    let bytes = if bold { EMBEDDED_BOLD } else { EMBEDDED_REGULAR };
    Font::try_from_bytes(bytes)
        .ok_or_else(|| InfrastructureError::ImageProcessingError("Failed to load font".to_string()))
}

fn load_font(path: &Path) -> Option<Font<'static>> {
    let bytes = std::fs::read(path).ok()?;
    Font::try_from_vec(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_only_loads_embedded_faces() {
        let fonts = FontResolver::builtin_only().load().unwrap();
        assert_eq!(fonts.regular_source, FontSource::Embedded);
        assert_eq!(fonts.bold_source, FontSource::Embedded);
        assert_eq!(fonts.face(true).units_per_em(), 2048);
    }

    #[test]
    fn test_missing_override_falls_through() {
        let resolver = FontResolver::builtin_only()
            .with_overrides(Some(PathBuf::from("/nonexistent/font.ttf")), None);
        assert_eq!(resolver.candidates(false).len(), 1);
        assert!(resolver.candidates(true).is_empty());
        assert_eq!(resolver.load().unwrap().regular_source, FontSource::Embedded);
    }

    #[test]
    fn test_unparsable_font_is_skipped() {
        let mut junk = tempfile::NamedTempFile::new().unwrap();
        junk.write_all(b"definitely not a font").unwrap();

        let resolver =
            FontResolver::builtin_only().with_overrides(None, Some(junk.path().to_path_buf()));
        assert_eq!(resolver.load().unwrap().bold_source, FontSource::Embedded);
    }

    #[test]
    fn test_readable_override_is_used() {
        let mut font_file = tempfile::NamedTempFile::new().unwrap();
        font_file.write_all(EMBEDDED_BOLD).unwrap();
        let path = font_file.path().to_path_buf();

        let fonts = FontResolver::builtin_only()
            .with_overrides(Some(path.clone()), None)
            .load()
            .unwrap();
        assert_eq!(fonts.regular_source, FontSource::File(path));
        assert_eq!(fonts.bold_source, FontSource::Embedded);
    }

    #[test]
    fn test_overrides_take_priority() {
        let resolver = FontResolver::system().with_overrides(Some(PathBuf::from("/tmp/a.ttf")), None);
        assert_eq!(resolver.candidates(false)[0], PathBuf::from("/tmp/a.ttf"));
        assert_eq!(
            resolver.candidates(false)[1],
            PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf")
        );
        assert_eq!(resolver.candidates(true).len(), 2);
    }

    #[test]
    fn test_em_scale_maps_font_units_to_pixels() {
        let fonts = FontSet::embedded().unwrap();
        let font = fonts.face(false);

        // At a size of one em in font units, one unit is one pixel.
        let unscaled = font.v_metrics_unscaled();
        let at_em = font.v_metrics(em_scale(font, font.units_per_em() as u32));
        assert!((at_em.ascent - unscaled.ascent).abs() < 0.01, "{:?}", at_em);
        assert!((at_em.descent - unscaled.descent).abs() < 0.01, "{:?}", at_em);

        // DejaVu's ascender is 1901 of 2048 units.
        let at_76 = font.v_metrics(em_scale(font, 76));
        assert!((at_76.ascent - 76.0 * 1901.0 / 2048.0).abs() < 0.01);

        let advance = |size| {
            font.glyph('M')
                .scaled(em_scale(font, size))
                .h_metrics()
                .advance_width
        };
        assert!((advance(100) * 2.0 - advance(200)).abs() < 0.01);
    }
}
