//! Marching settings
//!
//! Loaded from a JSON file by the native driver; library callers usually
//! build them in code.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::MarchError;
use crate::consts::{FAN_ANGLE_STEP, MAX_DIST, MIN_DIST};

/// Termination bounds and options for a trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarchSettings {
    /// Hit threshold: a step no longer than this ends the march on the surface
    pub min_dist: f32,
    /// Escape threshold: a step at least this long ends the march in the void
    pub max_dist: f32,
    /// Estimate the surface normal at the final point
    pub want_normal: bool,
    /// Hard step ceiling (derived from the bounds when unset)
    pub max_steps: Option<usize>,
    /// Angular spacing between rays of a fan (radians)
    pub fan_step: f32,
    /// Seed for anything randomised around the trace (e.g. a driver's origin)
    pub seed: u64,
}

impl Default for MarchSettings {
    fn default() -> Self {
        Self {
            min_dist: MIN_DIST,
            max_dist: MAX_DIST,
            want_normal: true,
            max_steps: None,
            fan_step: FAN_ANGLE_STEP,
            seed: 0,
        }
    }
}

impl MarchSettings {
    pub fn with_bounds(min_dist: f32, max_dist: f32) -> Self {
        Self {
            min_dist,
            max_dist,
            ..Self::default()
        }
    }

    pub fn without_normal(mut self) -> Self {
        self.want_normal = false;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Reject settings a single march cannot terminate with
    pub fn validate_bounds(&self) -> Result<(), MarchError> {
        if !self.min_dist.is_finite() || self.min_dist <= 0.0 {
            return Err(MarchError::InvalidSettings(format!(
                "min_dist must be positive and finite, got {}",
                self.min_dist
            )));
        }
        if !self.max_dist.is_finite() || self.max_dist <= self.min_dist {
            return Err(MarchError::InvalidSettings(format!(
                "max_dist must be finite and greater than min_dist ({}), got {}",
                self.min_dist, self.max_dist
            )));
        }
        if self.max_steps == Some(0) {
            return Err(MarchError::InvalidSettings(
                "max_steps must allow at least one step".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), MarchError> {
        self.validate_bounds()?;
        if !self.fan_step.is_finite() || self.fan_step <= 0.0 {
            return Err(MarchError::InvalidSettings(format!(
                "fan_step must be positive and finite, got {}",
                self.fan_step
            )));
        }
        Ok(())
    }

    /// Step ceiling for one march
    ///
    /// Every non-terminal step advances more than `min_dist`, and a ray that
    /// started within `max_dist` of the scene has escaped after travelling
    /// about twice that, hence the factor of two. Saturates for huge ratios.
    pub fn step_ceiling(&self) -> usize {
        self.max_steps.unwrap_or_else(|| {
            ((self.max_dist / self.min_dist).ceil() as usize)
                .saturating_mul(2)
                .saturating_add(2)
        })
    }

    pub fn from_json(json: &str) -> Result<Self, MarchError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MarchError> {
        let path = path.as_ref();
        let settings = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), MarchError> {
        let path = path.as_ref();
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = MarchSettings::default();
        assert_eq!(s.min_dist, 1.0);
        assert_eq!(s.max_dist, 3600.0);
        assert!(s.want_normal);
        assert!(s.validate().is_ok());
        assert_eq!(s.step_ceiling(), 7202);
    }

    #[test]
    fn test_explicit_ceiling_wins() {
        let s = MarchSettings::default().with_max_steps(16);
        assert_eq!(s.step_ceiling(), 16);
    }

    #[test]
    fn test_huge_bounds_ratio_saturates() {
        let s = MarchSettings::with_bounds(1e-3, 1e20);
        assert!(s.validate().is_ok());
        assert_eq!(s.step_ceiling(), usize::MAX);
    }

    #[test]
    fn test_rejects_non_terminating_bounds() {
        for (min, max) in [(0.0, 3600.0), (-1.0, 3600.0), (5.0, 5.0), (1.0, f32::INFINITY)] {
            let s = MarchSettings::with_bounds(min, max);
            assert!(
                matches!(s.validate(), Err(MarchError::InvalidSettings(_))),
                "({min}, {max}) accepted"
            );
        }
        assert!(MarchSettings::with_bounds(f32::NAN, 10.0).validate().is_err());
        assert!(MarchSettings::default().with_max_steps(0).validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = MarchSettings::from_json(r#"{"min_dist": 0.5, "want_normal": false}"#).unwrap();
        assert_eq!(s.min_dist, 0.5);
        assert_eq!(s.max_dist, MAX_DIST);
        assert!(!s.want_normal);
        assert_eq!(s.fan_step, FAN_ANGLE_STEP);
    }

    #[test]
    fn test_json_validation() {
        assert!(matches!(
            MarchSettings::from_json(r#"{"min_dist": 0.0}"#),
            Err(MarchError::InvalidSettings(_))
        ));
        assert!(matches!(
            MarchSettings::from_json("not json"),
            Err(MarchError::Json(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!(
            "sdf_marcher_settings_{}.json",
            std::process::id()
        ));
        let s = MarchSettings::with_bounds(0.25, 900.0).with_max_steps(64);
        s.save(&path).unwrap();
        let loaded = MarchSettings::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, s);
    }
}
