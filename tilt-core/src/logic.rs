//! Pure Business Logic Functions
//!
//! Klassifikation der Neigung ohne Hardware-Dependencies (testbar!)

use crate::types::{AccelerationSample, ScaledSample, TiltCode, TiltConfig};

/// Bestimmt die Neigungsrichtung aus einem Messwert
///
/// Skaliert, prüft die Konfiguration und ordnet dann anhand der
/// Totzone `±sensitivity` auf x und y zu. z wird nicht ausgewertet.
///
/// # Beispiele
///
/// ```
/// # use tilt_core::{AccelerationSample, TiltCode, TiltConfig, classify_tilt};
/// let flat = AccelerationSample::new(0.0, 0.0, 9.8);
/// assert_eq!(classify_tilt(&flat, &TiltConfig::default()), TiltCode::Level);
///
/// let tilted = AccelerationSample::new(-0.5, 0.0, 0.0);
/// assert_eq!(classify_tilt(&tilted, &TiltConfig::default()), TiltCode::Right);
/// ```
pub fn classify_tilt(sample: &AccelerationSample, config: &TiltConfig) -> TiltCode {
    let scaled = sample.scale(config.multiplier);
    classify_scaled(&scaled, config)
}

/// Wie [`classify_tilt`], aber auf bereits skalierten Werten
pub fn classify_scaled(scaled: &ScaledSample, config: &TiltConfig) -> TiltCode {
    if let Err(err) = config.validate() {
        return err.into();
    }

    let sens = config.sensitivity;
    let (x, y) = (scaled.x, scaled.y);

    // Reihenfolge ist relevant: der erste Treffer gewinnt
    if x > -sens && x < sens && y > -sens && y < sens {
        TiltCode::Level
    } else if y > sens && x > sens {
        TiltCode::BackRight
    } else if y > sens && x < -sens {
        TiltCode::BackLeft
    } else if y < -sens && x > sens {
        TiltCode::ForwardRight
    } else if y < -sens && x < -sens {
        TiltCode::ForwardLeft
    } else if x > sens {
        TiltCode::Left
    } else if x < -sens {
        TiltCode::Right
    } else if y > sens {
        TiltCode::Backward
    } else if y < -sens {
        TiltCode::Forward
    } else {
        // Genau auf der Schwelle
        TiltCode::Unclassified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TiltConfig {
        TiltConfig::new(300, 1000)
    }

    #[test]
    fn test_classify_level_ignores_z() {
        for z in [-20.0, 0.0, 9.8, 50.0] {
            let sample = AccelerationSample::new(0.1, -0.2, z);
            assert_eq!(classify_tilt(&sample, &config()), TiltCode::Level);
        }
    }

    #[test]
    fn test_classify_back_right() {
        let sample = AccelerationSample::new(0.5, 0.5, 0.0);
        assert_eq!(sample.scale(1000), ScaledSample { x: 500, y: 500, z: 0 });
        assert_eq!(classify_tilt(&sample, &config()), TiltCode::BackRight);
    }

    #[test]
    fn test_classify_right() {
        let sample = AccelerationSample::new(-0.5, 0.0, 0.0);
        assert_eq!(classify_tilt(&sample, &config()), TiltCode::Right);
    }

    #[test]
    fn test_classify_all_directions() {
        let cases = [
            ((500, 500), TiltCode::BackRight),
            ((-500, 500), TiltCode::BackLeft),
            ((500, -500), TiltCode::ForwardRight),
            ((-500, -500), TiltCode::ForwardLeft),
            ((500, 0), TiltCode::Left),
            ((-500, 0), TiltCode::Right),
            ((0, 500), TiltCode::Backward),
            ((0, -500), TiltCode::Forward),
        ];
        for ((x, y), expected) in cases {
            let scaled = ScaledSample { x, y, z: 0 };
            assert_eq!(classify_scaled(&scaled, &config()), expected);
        }
    }

    #[test]
    fn test_classify_on_threshold_is_unclassified() {
        let scaled = ScaledSample { x: 300, y: 0, z: 0 };
        assert_eq!(classify_scaled(&scaled, &config()), TiltCode::Unclassified);

        let scaled = ScaledSample { x: 0, y: -300, z: 0 };
        assert_eq!(classify_scaled(&scaled, &config()), TiltCode::Unclassified);
    }

    #[test]
    fn test_classify_threshold_on_one_axis_falls_through() {
        // x auf der Schwelle, y eindeutig → reine y-Richtung
        let scaled = ScaledSample { x: 300, y: 500, z: 0 };
        assert_eq!(classify_scaled(&scaled, &config()), TiltCode::Backward);
    }

    #[test]
    fn test_classify_invalid_multiplier() {
        let sample = AccelerationSample::new(0.0, 0.0, 0.0);
        assert_eq!(
            classify_tilt(&sample, &TiltConfig::new(300, 0)),
            TiltCode::InvalidMultiplier
        );
        assert_eq!(
            classify_tilt(&sample, &TiltConfig::new(300, -1000)),
            TiltCode::InvalidMultiplier
        );
    }

    #[test]
    fn test_classify_invalid_sensitivity() {
        let sample = AccelerationSample::new(0.0, 0.0, 0.0);
        assert_eq!(
            classify_tilt(&sample, &TiltConfig::new(1200, 1000)),
            TiltCode::InvalidSensitivity
        );
        assert_eq!(
            classify_tilt(&sample, &TiltConfig::new(-1, 1000)),
            TiltCode::InvalidSensitivity
        );
    }
}
