//! Ein Poll-Zyklus: Reset → Messen → Klassifizieren → Anzeigen
//!
//! Die Schleife und das Warten übernimmt der Aufrufer (Firmware-Task),
//! hier passiert nur ein einzelner Zyklus.

use crate::logic::classify_scaled;
use crate::render::{PixelRing, render_tilt};
use crate::traits::{Accelerometer, LedError, SensorError, SmartLedWriter};
use crate::types::{AccelerationSample, ScaledSample, TiltCode, TiltConfig};

/// Fehler eines Zyklus (nur Hardware, Konfigurationsfehler stehen im `TiltCode`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleError {
    Sensor(SensorError),
    Led(LedError),
}

impl From<SensorError> for CycleError {
    fn from(err: SensorError) -> Self {
        CycleError::Sensor(err)
    }
}

impl From<LedError> for CycleError {
    fn from(err: LedError) -> Self {
        CycleError::Led(err)
    }
}

/// Ergebnis eines Zyklus (für Diagnose-Ausgabe)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleReport {
    pub sample: AccelerationSample,
    pub scaled: ScaledSample,
    pub tilt: TiltCode,
    /// `true` wenn ein Muster angezeigt wurde
    pub rendered: bool,
}

/// Neigungsanzeige: Sensor + LED-Ring + Konfiguration
///
/// # Trait-basierte Abstraktion
/// - Real Hardware (Lis3dh, RmtLedRing) im Production-Code
/// - Mocks in den Host-Tests
pub struct TiltIndicator<A: Accelerometer, W: SmartLedWriter> {
    accelerometer: A,
    ring: PixelRing<W>,
    config: TiltConfig,
}

impl<A: Accelerometer, W: SmartLedWriter> TiltIndicator<A, W> {
    pub fn new(accelerometer: A, writer: W, config: TiltConfig) -> Self {
        Self {
            accelerometer,
            ring: PixelRing::new(writer),
            config,
        }
    }

    pub fn config(&self) -> TiltConfig {
        self.config
    }

    /// Ändert Empfindlichkeit/Multiplikator ab dem nächsten Zyklus
    pub fn set_config(&mut self, config: TiltConfig) {
        self.config = config;
    }

    pub fn ring(&self) -> &PixelRing<W> {
        &self.ring
    }

    /// Globale Helligkeit des LED-Rings (255 = unverändert)
    pub fn set_brightness(&mut self, brightness: u8) {
        self.ring.set_brightness(brightness);
    }

    pub fn accelerometer_mut(&mut self) -> &mut A {
        &mut self.accelerometer
    }

    /// Schaltet alle LEDs aus
    pub fn blank(&mut self) -> Result<(), LedError> {
        self.ring.clear();
        self.ring.show()
    }

    /// Führt einen kompletten Zyklus aus
    ///
    /// Die Anzeige des vorherigen Zyklus wird zuerst gelöscht. Bei einem
    /// Konfigurationsfehler bleibt der Ring dunkel, der Zyklus ist trotzdem `Ok`.
    pub fn cycle(&mut self) -> Result<CycleReport, CycleError> {
        self.blank()?;

        let sample = self.accelerometer.acceleration()?;
        let scaled = sample.scale(self.config.multiplier);
        let tilt = classify_scaled(&scaled, &self.config);
        let rendered = render_tilt(tilt, &mut self.ring)?;

        Ok(CycleReport {
            sample,
            scaled,
            tilt,
            rendered,
        })
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CycleError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            CycleError::Sensor(err) => defmt::write!(fmt, "Sensor({})", err),
            CycleError::Led(err) => defmt::write!(fmt, "Led({})", err),
        }
    }
}
