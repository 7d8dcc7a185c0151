//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Sensor- und LED-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

use crate::types::AccelerationSample;

/// Anzahl der LEDs im Ring (Slots 0..=9)
pub const RING_SIZE: usize = 10;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
    /// Slot-Index außerhalb des Rings
    SlotOutOfRange(usize),
}

/// Fehler-Typ für Sensor-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    ReadFailed,
}

/// Trait für SmartLED Hardware-Zugriff
///
/// Abstrahiert den Zugriff auf den RGB LED-Ring (WS2812/Neopixel).
///
/// # Implementierungen
/// - **Production:** RmtLedRing (ESP32 RMT Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait SmartLedWriter: Send {
    /// Schreibt alle Slots des Rings auf die Hardware
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, pixels: &[RGB8; RING_SIZE]) -> Result<(), LedError>;
}

/// Trait für den Beschleunigungssensor
///
/// # Implementierungen
/// - **Production:** Lis3dh (I2C)
/// - **Testing:** MockAccelerometer
pub trait Accelerometer {
    /// Liest einen Messwert (x, y, z) in m/s²
    fn acceleration(&mut self) -> Result<AccelerationSample, SensorError>;
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
            LedError::SlotOutOfRange(slot) => defmt::write!(fmt, "SlotOutOfRange({})", slot),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SensorError::ReadFailed => defmt::write!(fmt, "ReadFailed"),
        }
    }
}
