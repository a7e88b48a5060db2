//! Font resolution: an explicit path, the configured default, or a scan of
//! common system font locations.

use ab_glyph::FontVec;
use ghplan_core::{PlanError, PlanResult};
use std::path::Path;

/// Bold sans-serif locations checked when no font is configured.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
];

/// Load the font to rasterize with. An explicit path (from --font or the
/// config file) must exist; otherwise the candidate list is scanned.
pub fn load_font(explicit: Option<&Path>) -> PlanResult<FontVec> {
    if let Some(path) = explicit {
        return load_font_file(path);
    }

    for candidate in FONT_CANDIDATES {
        let path = Path::new(candidate);
        if path.exists() {
            return load_font_file(path);
        }
    }

    Err(PlanError::FontNotFound(
        "no font configured and no system font found \
         (pass --font or set default_font in config.toml)"
            .to_string(),
    ))
}

fn load_font_file(path: &Path) -> PlanResult<FontVec> {
    let data = std::fs::read(path)
        .map_err(|e| PlanError::FontNotFound(format!("{}: {}", path.display(), e)))?;

    FontVec::try_from_vec(data)
        .map_err(|_| PlanError::FontNotFound(format!("{}: not a valid font file", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_explicit_font_is_font_not_found() {
        let result = load_font(Some(Path::new("/nonexistent/font.ttf")));
        assert!(matches!(result, Err(PlanError::FontNotFound(_))));
    }

    #[test]
    fn test_garbage_font_data_is_font_not_found() {
        let dir = std::env::temp_dir().join("ghplan-font-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("not-a-font.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();

        let result = load_font(Some(&path));
        assert!(matches!(result, Err(PlanError::FontNotFound(_))));

        let _ = std::fs::remove_file(&path);
    }
}
