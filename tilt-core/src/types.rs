//! Core Types für die Neigungs-Erkennung
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Normalbeschleunigung (m/s²) für die Umrechnung in G
pub const STANDARD_GRAVITY: f32 = 9.806;

/// Standard-Empfindlichkeit (Totzone in skalierten Einheiten)
pub const DEFAULT_SENSITIVITY: i32 = 300;

/// Standard-Multiplikator für die Achsenwerte
pub const DEFAULT_MULTIPLIER: i32 = 1000;

/// Ein Messwert des Beschleunigungssensors in m/s²
///
/// Wird einmal pro Poll-Zyklus gelesen und danach verworfen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccelerationSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AccelerationSample {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Wandelt Rohwerte des LIS3DH (linksbündige i16) in m/s² um
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use tilt_core::{AccelRange, AccelerationSample};
    /// let sample = AccelerationSample::from_raw([0, 0, 16380], AccelRange::G2);
    /// assert_eq!(sample.z, 9.806);
    /// ```
    pub fn from_raw(raw: [i16; 3], range: AccelRange) -> Self {
        let divider = range.divider();
        let convert = |value: i16| value as f32 / divider * STANDARD_GRAVITY;
        Self {
            x: convert(raw[0]),
            y: convert(raw[1]),
            z: convert(raw[2]),
        }
    }

    /// Rechnet den Messwert in Vielfache der Erdbeschleunigung um
    pub fn to_g(&self) -> Self {
        Self {
            x: self.x / STANDARD_GRAVITY,
            y: self.y / STANDARD_GRAVITY,
            z: self.z / STANDARD_GRAVITY,
        }
    }

    /// Skaliert alle drei Achsen mit `multiplier`
    ///
    /// Nachkommastellen werden abgeschnitten (Richtung Null), NICHT gerundet.
    /// Das verschiebt die Schwellwert-Kanten: 299.9 → 299.
    pub fn scale(&self, multiplier: i32) -> ScaledSample {
        // Produkt in f64 (exakt für |multiplier| < 2^29), in f32 würde vor dem
        // Abschneiden gerundet. `as` schneidet Richtung Null ab.
        let factor = f64::from(multiplier);
        let scale_axis = |value: f32| (f64::from(value) * factor) as i32;
        ScaledSample {
            x: scale_axis(self.x),
            y: scale_axis(self.y),
            z: scale_axis(self.z),
        }
    }
}

/// Ganzzahlig skalierter Messwert (Achse × Multiplikator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaledSample {
    pub x: i32,
    pub y: i32,
    /// Wird mitgeführt, aber nicht klassifiziert
    pub z: i32,
}

/// Messbereich des Beschleunigungssensors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccelRange {
    #[default]
    G2,
    G4,
    G8,
    G16,
}

impl AccelRange {
    /// Rohwert-Teiler pro G für den jeweiligen Messbereich
    pub const fn divider(self) -> f32 {
        match self {
            AccelRange::G2 => 16380.0,
            AccelRange::G4 => 8190.0,
            AccelRange::G8 => 4096.0,
            AccelRange::G16 => 1365.0,
        }
    }

    /// FS-Bits für CTRL_REG4 (bereits an Position 5:4 geschoben)
    pub const fn full_scale_bits(self) -> u8 {
        match self {
            AccelRange::G2 => 0b00 << 4,
            AccelRange::G4 => 0b01 << 4,
            AccelRange::G8 => 0b10 << 4,
            AccelRange::G16 => 0b11 << 4,
        }
    }
}

/// Ergebnis der Klassifikation
///
/// Zwei Konfigurationsfehler, "nicht erkannt", waagerecht und acht Richtungen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TiltCode {
    InvalidMultiplier,
    InvalidSensitivity,
    Unclassified,
    Level,
    BackRight,
    BackLeft,
    ForwardRight,
    ForwardLeft,
    Left,
    Right,
    Backward,
    Forward,
}

impl TiltCode {
    /// Alle Varianten in Reihenfolge ihres numerischen Codes (-2..=9)
    pub const ALL: [TiltCode; 12] = [
        TiltCode::InvalidSensitivity,
        TiltCode::InvalidMultiplier,
        TiltCode::Unclassified,
        TiltCode::Level,
        TiltCode::BackRight,
        TiltCode::BackLeft,
        TiltCode::ForwardRight,
        TiltCode::ForwardLeft,
        TiltCode::Left,
        TiltCode::Right,
        TiltCode::Backward,
        TiltCode::Forward,
    ];

    /// Numerischer Diagnose-Code (für Log-Ausgabe "Result = n")
    pub const fn code(self) -> i8 {
        match self {
            TiltCode::InvalidMultiplier => -1,
            TiltCode::InvalidSensitivity => -2,
            TiltCode::Unclassified => 0,
            TiltCode::Level => 1,
            TiltCode::BackRight => 2,
            TiltCode::BackLeft => 3,
            TiltCode::ForwardRight => 4,
            TiltCode::ForwardLeft => 5,
            TiltCode::Left => 6,
            TiltCode::Right => 7,
            TiltCode::Backward => 8,
            TiltCode::Forward => 9,
        }
    }

    /// Klartext für die Status-Ausgabe
    pub const fn label(self) -> &'static str {
        match self {
            TiltCode::InvalidMultiplier => "Invalid multiplier",
            TiltCode::InvalidSensitivity => "Invalid sensitivity",
            TiltCode::Unclassified => "Unclassified",
            TiltCode::Level => "Leveled Out",
            TiltCode::BackRight => "Tilting Backward and Right",
            TiltCode::BackLeft => "Tilting Backward and Left",
            TiltCode::ForwardRight => "Tilting Forward and Right",
            TiltCode::ForwardLeft => "Tilting Forward and Left",
            TiltCode::Left => "Tilting Left",
            TiltCode::Right => "Tilting Right",
            TiltCode::Backward => "Tilting Backward",
            TiltCode::Forward => "Tilting Forward",
        }
    }

    pub const fn is_error(self) -> bool {
        matches!(
            self,
            TiltCode::InvalidMultiplier | TiltCode::InvalidSensitivity
        )
    }
}

impl From<ConfigError> for TiltCode {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidMultiplier => TiltCode::InvalidMultiplier,
            ConfigError::InvalidSensitivity => TiltCode::InvalidSensitivity,
        }
    }
}

impl core::convert::TryFrom<i8> for TiltCode {
    type Error = ();

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        TiltCode::ALL
            .into_iter()
            .find(|tilt| tilt.code() == code)
            .ok_or(())
    }
}

/// Fehler bei der Konfigurations-Prüfung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    InvalidMultiplier,
    InvalidSensitivity,
}

/// Einstellbare Parameter der Klassifikation
///
/// Gültig wenn `multiplier > 0` und `0 <= sensitivity <= multiplier`.
/// Größere Empfindlichkeit macht die Erkennung unempfindlicher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TiltConfig {
    /// Halbe Breite der Totzone in skalierten Einheiten
    pub sensitivity: i32,
    /// Skalierungsfaktor float → int
    pub multiplier: i32,
}

impl TiltConfig {
    pub const fn new(sensitivity: i32, multiplier: i32) -> Self {
        Self {
            sensitivity,
            multiplier,
        }
    }

    /// Prüft die Konfiguration
    ///
    /// Der Multiplikator wird zuerst geprüft.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.multiplier <= 0 {
            return Err(ConfigError::InvalidMultiplier);
        }
        if self.sensitivity < 0 || self.sensitivity > self.multiplier {
            return Err(ConfigError::InvalidSensitivity);
        }
        Ok(())
    }
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SENSITIVITY, DEFAULT_MULTIPLIER)
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for AccelerationSample {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "x = {}, y = {}, z = {}", self.x, self.y, self.z)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ScaledSample {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "xm = {}, ym = {}, zm = {}", self.x, self.y, self.z)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TiltCode {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{} ({})", self.label(), self.code())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TiltConfig {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "TiltConfig {{ sensitivity: {}, multiplier: {} }}",
            self.sensitivity,
            self.multiplier
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AccelRange {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            AccelRange::G2 => defmt::write!(fmt, "±2G"),
            AccelRange::G4 => defmt::write!(fmt, "±4G"),
            AccelRange::G8 => defmt::write!(fmt, "±8G"),
            AccelRange::G16 => defmt::write!(fmt, "±16G"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ConfigError::InvalidMultiplier => defmt::write!(fmt, "InvalidMultiplier"),
            ConfigError::InvalidSensitivity => defmt::write!(fmt, "InvalidSensitivity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_truncates_toward_zero() {
        let sample = AccelerationSample::new(2.999, -2.999, 0.5);
        let scaled = sample.scale(100);
        assert_eq!(scaled, ScaledSample { x: 299, y: -299, z: 50 });
    }

    #[test]
    fn test_scale_does_not_round_in_multiplication() {
        // 4.35f32 = 4.3499999046..., × 100 = 434.99999...
        let scaled = AccelerationSample::new(4.35, -4.35, 0.0).scale(100);
        assert_eq!(scaled.x, 434);
        assert_eq!(scaled.y, -434);
    }

    #[test]
    fn test_validate_default_is_ok() {
        assert_eq!(TiltConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_multiplier_checked_first() {
        let config = TiltConfig::new(-5, 0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidMultiplier));
    }

    #[test]
    fn test_validate_sensitivity_bounds() {
        assert_eq!(
            TiltConfig::new(-1, 1000).validate(),
            Err(ConfigError::InvalidSensitivity)
        );
        assert_eq!(
            TiltConfig::new(1001, 1000).validate(),
            Err(ConfigError::InvalidSensitivity)
        );
        assert_eq!(TiltConfig::new(1000, 1000).validate(), Ok(()));
    }

    #[test]
    fn test_tilt_code_numeric_round_trip() {
        for tilt in TiltCode::ALL {
            assert_eq!(TiltCode::try_from(tilt.code()), Ok(tilt));
        }
        assert!(TiltCode::try_from(10).is_err());
    }

    #[test]
    fn test_from_raw_uses_range_divider() {
        let sample = AccelerationSample::from_raw([4096, -4096, 0], AccelRange::G8);
        assert_eq!(sample.x, STANDARD_GRAVITY);
        assert_eq!(sample.y, -STANDARD_GRAVITY);
        assert_eq!(sample.z, 0.0);
    }
}
