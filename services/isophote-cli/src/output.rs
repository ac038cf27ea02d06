//! Counts table, JSON report and PNG output.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use contour_analysis::Analysis;
use renderer::{composite, png, OverlayStyle};

/// One member count per line, band 0 first.
pub fn write_counts<W: Write>(out: &mut W, analysis: &Analysis) -> Result<()> {
    for count in analysis.counts() {
        writeln!(out, "{}", count)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, analysis: &Analysis) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &analysis.report())?;
    writeln!(out)?;
    Ok(())
}

/// Composite the analysis over `base` and write it as PNG.
pub fn write_overlay(
    path: &Path,
    base: &[u8],
    width: usize,
    height: usize,
    analysis: &Analysis,
    style: &OverlayStyle,
) -> Result<usize> {
    let rgba = composite(base, width, height, analysis, style)?;
    let encoded = png::encode_auto(&rgba, width, height)?;
    std::fs::write(path, &encoded)
        .with_context(|| format!("Failed to write overlay {}", path.display()))?;
    Ok(encoded.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contour_analysis::{analyze, AnalysisOptions, BandSpec};
    use field_common::{GridField, ScalarField};

    fn sample() -> (GridField, Analysis) {
        let field = GridField::from_fn(8, 8, |x, y| (y * 8 + x) as f32);
        let spec = BandSpec::new(0, 64, 4).unwrap();
        let analysis = analyze(&field, field.bounds(), &spec, AnalysisOptions::default()).unwrap();
        (field, analysis)
    }

    #[test]
    fn test_counts_one_per_line() {
        let (_, analysis) = sample();
        let mut out = Vec::new();
        write_counts(&mut out, &analysis).unwrap();

        // step 17: (0,17) (17,34) (34,51) (51,68) hold 16, 16, 16 and 12 values
        assert_eq!(String::from_utf8(out).unwrap(), "16\n16\n16\n12\n");
    }

    #[test]
    fn test_json_report() {
        let (_, analysis) = sample();
        let mut out = Vec::new();
        write_json(&mut out, &analysis).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["regions"], 4);
        assert_eq!(value["bands"].as_array().unwrap().len(), 4);
        assert_eq!(value["bands"][0]["count"], 16);
    }

    #[test]
    fn test_overlay_written() {
        let (field, analysis) = sample();
        let base = vec![0u8; field.width() * field.height() * 4];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overlay.png");

        let size = write_overlay(&path, &base, 8, 8, &analysis, &OverlayStyle::default()).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), size);
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
