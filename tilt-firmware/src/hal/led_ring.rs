// LED-Ring Writer (WS2812/Neopixel über RMT)
//
// Implementiert `SmartLedWriter` aus tilt-core für die echte Hardware.
// Mocks für Tests liegen in tilt-tests.

use esp_hal::Blocking;
use esp_hal::rmt::{PulseCode, Rmt};
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;
use tilt_core::{LedError, RING_SIZE, SmartLedWriter};

/// Buffer-Größe für den Ring (10 LEDs * 3 Farben * 8 Bits + 1 Reset)
pub const LED_BUFFER_SIZE: usize = RING_SIZE * 24 + 1;

/// Fehler beim Initialisieren des RMT Peripherals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmtInitError;

/// Real Hardware LED Ring
///
/// Nutzt ESP32 RMT Peripheral um den WS2812 Ring anzusteuern.
///
/// Hinweis: Der Buffer muss länger leben als der Writer, daher wird er im
/// Task erstellt und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtLedRing<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
}

impl<'a> RmtLedRing<'a> {
    /// Erstellt einen neuen RmtLedRing
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für die Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(10) Macro)
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [PulseCode; LED_BUFFER_SIZE],
    ) -> Result<Self, RmtInitError> {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| RmtInitError)?;

        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Ok(Self { led })
    }
}

impl<'a> SmartLedWriter for RmtLedRing<'a> {
    fn write(&mut self, pixels: &[RGB8; RING_SIZE]) -> Result<(), LedError> {
        self.led
            .write(pixels.iter().copied())
            .map_err(|_| LedError::WriteFailed)
    }
}
