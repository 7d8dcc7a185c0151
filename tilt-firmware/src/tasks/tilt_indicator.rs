// Tilt Indicator Task - liest den LIS3DH und zeigt die Neigung auf dem LED-Ring
use defmt::{debug, error, info, warn};
use embassy_time::{Duration, Timer};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::time::Rate;
use esp_hal_smartled::smart_led_buffer;
use tilt_core::{Accelerometer, CycleReport, SmartLedWriter, TiltIndicator};

use crate::config::{
    ACCEL_RANGE, I2C_FREQUENCY_KHZ, I2C_SCL_PIN, I2C_SDA_PIN, LED_BRIGHTNESS, LED_COUNT,
    LED_GPIO_PIN, LIS3DH_ADDRESS, POLL_INTERVAL_SECS, RMT_CLOCK_MHZ, TILT_CONFIG,
};
use crate::hal::{Lis3dh, Lis3dhError, RmtLedRing};

/// Tilt Indicator Logic - Poll-Schleife ohne Hardware-Abhängigkeit
///
/// Pro Durchlauf:
/// - Ring löschen, Sensor lesen, klassifizieren, Muster anzeigen
/// - Messwerte und Ergebnis loggen
/// - `POLL_INTERVAL_SECS` warten (die Anzeige bleibt so lange stehen)
///
/// Fehler werden geloggt, die Schleife läuft weiter.
pub async fn tilt_indicator_logic<A: Accelerometer, W: SmartLedWriter>(
    mut indicator: TiltIndicator<A, W>,
) {
    info!("Tilt Indicator gestartet: {}", indicator.config());

    loop {
        match indicator.cycle() {
            Ok(report) => log_report(&report),
            Err(e) => error!("Zyklus fehlgeschlagen: {}", e),
        }

        Timer::after(Duration::from_secs(POLL_INTERVAL_SECS)).await;
    }
}

fn log_report(report: &CycleReport) {
    info!("{}", report.sample);
    debug!("in G: {}", report.sample.to_g());
    debug!("{}", report.scaled);

    if report.tilt.is_error() {
        warn!("Konfigurationsfehler: {}", report.tilt);
    } else {
        info!("Result = {}", report.tilt);
    }
}

/// Tilt Indicator Task - Embassy Task
///
/// Initialisiert I2C + LIS3DH und RMT + LED-Ring und ruft dann
/// die testbare `tilt_indicator_logic()` Funktion auf.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für die LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `i2c0`: I2C0 Peripheral für den Sensor
/// - `sda`, `scl`: I2C Pins
#[embassy_executor::task]
pub async fn tilt_indicator_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    i2c0: esp_hal::peripherals::I2C0<'static>,
    sda: esp_hal::peripherals::GPIO6<'static>,
    scl: esp_hal::peripherals::GPIO7<'static>,
) {
    if let Err(e) = TILT_CONFIG.validate() {
        // Läuft trotzdem: jeder Zyklus meldet den Fehler und zeigt nichts an
        warn!("Ungültige Konfiguration {}: {}", TILT_CONFIG, e);
    }

    // Buffer für SmartLED Daten erstellen (10 LEDs)
    let mut rmt_buffer = smart_led_buffer!(10);

    let ring = match RmtLedRing::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer) {
        Ok(ring) => ring,
        Err(_) => {
            error!("RMT konnte nicht initialisiert werden");
            return;
        }
    };
    info!(
        "LED-Ring: {} LEDs an GPIO{}, Helligkeit {}",
        LED_COUNT, LED_GPIO_PIN, LED_BRIGHTNESS
    );

    let i2c_config = I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ));
    let i2c = match I2c::new(i2c0, i2c_config) {
        Ok(i2c) => i2c.with_sda(sda).with_scl(scl),
        Err(_) => {
            error!("I2C Konfiguration ungültig");
            return;
        }
    };

    let sensor = match Lis3dh::new(i2c, LIS3DH_ADDRESS, ACCEL_RANGE) {
        Ok(sensor) => sensor,
        Err(Lis3dhError::UnknownDevice(id)) => {
            error!("Kein LIS3DH an {=u8:#x} (WHO_AM_I = {=u8:#x})", LIS3DH_ADDRESS, id);
            return;
        }
        Err(Lis3dhError::Bus(_)) => {
            error!("LIS3DH nicht erreichbar (I2C-Fehler)");
            return;
        }
    };
    info!(
        "LIS3DH an {=u8:#x} (SDA=GPIO{}, SCL=GPIO{}), Bereich {}",
        LIS3DH_ADDRESS, I2C_SDA_PIN, I2C_SCL_PIN, ACCEL_RANGE
    );

    let mut indicator = TiltIndicator::new(sensor, ring, TILT_CONFIG);
    indicator.set_brightness(LED_BRIGHTNESS);
    tilt_indicator_logic(indicator).await;
}
