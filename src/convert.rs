//! Click/micron conversion
//!
//! Microns are the common basis: a source setting is mapped to microns with the
//! source profile, then back to clicks with the target profile.
//!
//! Rounding is half away from zero (`f64::round`). Ties only occur on exact
//! half-click boundaries, and negative ties clamp to 0 either way.

use crate::types::{ConversionResult, GrinderProfile};

/// Particle size at a click setting. Total for any finite `clicks`.
pub fn clicks_to_microns(profile: &GrinderProfile, clicks: f64) -> f64 {
    profile.base_offset + clicks * profile.microns_per_click
}

/// Nearest click setting for a particle size, clamped to `0..=max_clicks`.
///
/// Never fails: negative or huge inputs clamp, NaN maps to 0.
pub fn microns_to_clicks(profile: &GrinderProfile, microns: f64) -> u32 {
    let raw = ((microns - profile.base_offset) / profile.microns_per_click).round();
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, f64::from(profile.max_clicks)) as u32
}

/// Convert a source click setting to the closest reachable target setting.
///
/// The returned microns are re-derived from the clamped target clicks, so they
/// describe the setting the target grinder can actually reach.
pub fn convert(
    source: &GrinderProfile,
    target: &GrinderProfile,
    source_clicks: u32,
) -> ConversionResult {
    let microns = clicks_to_microns(source, f64::from(source_clicks));
    let clicks = microns_to_clicks(target, microns);
    ConversionResult {
        clicks,
        microns: clicks_to_microns(target, f64::from(clicks)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k6() -> GrinderProfile {
        GrinderProfile::new("Kingrinder K6", 16.0, 240)
    }

    fn c40() -> GrinderProfile {
        GrinderProfile::new("Comandante C40", 30.0, 50)
    }

    #[test]
    fn test_clicks_to_microns_linear() {
        assert_eq!(clicks_to_microns(&c40(), 10.0), 300.0);
        assert_eq!(clicks_to_microns(&c40(), 0.0), 0.0);

        let offset = c40().with_base_offset(100.0);
        assert_eq!(clicks_to_microns(&offset, 2.0), 160.0);
        assert_eq!(clicks_to_microns(&offset, -1.0), 70.0);
    }

    #[test]
    fn test_microns_to_clicks_rounds_to_nearest() {
        assert_eq!(microns_to_clicks(&k6(), 300.0), 19); // 18.75
        assert_eq!(microns_to_clicks(&k6(), 296.0), 19); // 18.5 rounds away from zero
        assert_eq!(microns_to_clicks(&k6(), 295.0), 18); // 18.4375
    }

    #[test]
    fn test_microns_to_clicks_clamps() {
        assert_eq!(microns_to_clicks(&c40(), -500.0), 0);
        assert_eq!(microns_to_clicks(&c40(), 1.0e12), 50);
        assert_eq!(microns_to_clicks(&c40(), f64::INFINITY), 50);
        assert_eq!(microns_to_clicks(&c40(), f64::NEG_INFINITY), 0);
        assert_eq!(microns_to_clicks(&c40(), f64::NAN), 0);
    }

    #[test]
    fn test_microns_to_clicks_respects_offset() {
        let offset = k6().with_base_offset(40.0);
        assert_eq!(microns_to_clicks(&offset, 40.0), 0);
        assert_eq!(microns_to_clicks(&offset, 200.0), 10);
        assert_eq!(microns_to_clicks(&offset, 10.0), 0);
    }

    #[test]
    fn test_convert_c40_to_k6() {
        let result = convert(&c40(), &k6(), 10);
        assert_eq!(result.clicks, 19);
        assert_eq!(result.microns, 304.0);
    }

    #[test]
    fn test_convert_reports_clamped_microns() {
        // 50 clicks on a C40 is 1500 microns, well past a 36-click Timemore S3
        let s3 = GrinderProfile::new("Timemore S3", 15.0, 36);
        let result = convert(&c40(), &s3, 50);
        assert_eq!(result.clicks, 36);
        assert_eq!(result.microns, 540.0);
    }

    #[test]
    fn test_convert_to_self_is_identity() {
        for clicks in 0..=240 {
            assert_eq!(convert(&k6(), &k6(), clicks).clicks, clicks);
        }
    }
}
