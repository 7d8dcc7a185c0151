// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Alles wird zur Compile-Zeit festgelegt, es gibt keine Laufzeit-Konfiguration.

use tilt_core::{AccelRange, RING_SIZE, TiltConfig};

// ============================================================================
// Neigungs-Erkennung
// ============================================================================

/// Empfindlichkeit der Neigungs-Erkennung (Totzone in skalierten Einheiten)
/// Größer = unempfindlicher, kleiner = empfindlicher.
/// Muss >= 0 und <= TILT_MULTIPLIER sein.
pub const TILT_SENSITIVITY: i32 = 300;

/// Multiplikator für die x-, y- und z-Messwerte
pub const TILT_MULTIPLIER: i32 = 1000;

pub const TILT_CONFIG: TiltConfig = TiltConfig::new(TILT_SENSITIVITY, TILT_MULTIPLIER);

/// Wartezeit zwischen zwei Messungen in Sekunden
/// So lange bleibt die Anzeige stehen, danach wird der Ring gelöscht.
pub const POLL_INTERVAL_SECS: u64 = 2;

// ============================================================================
// Beschleunigungssensor (LIS3DH über I2C)
// ============================================================================

/// I2C-Adresse des LIS3DH (SA0 = high)
pub const LIS3DH_ADDRESS: u8 = 0x19;

/// Messbereich: ±2G reicht für Neigung
pub const ACCEL_RANGE: AccelRange = AccelRange::G2;

/// I2C Taktfrequenz in kHz
pub const I2C_FREQUENCY_KHZ: u32 = 400;

// Die Pins selbst sind typisierte Peripherals und werden in bin/main.rs
// beim Spawn von `tilt_indicator_task` übergeben (GPIO6/GPIO7/GPIO8).
// Die Nummern hier dienen nur der Log-Ausgabe und müssen mit main.rs
// übereinstimmen.

/// GPIO-Pin für I2C SDA (siehe main.rs)
pub const I2C_SDA_PIN: u8 = 6;

/// GPIO-Pin für I2C SCL (siehe main.rs)
pub const I2C_SCL_PIN: u8 = 7;

// ============================================================================
// LED-Ring Konfiguration
// ============================================================================

/// GPIO-Pin für den LED-Ring (WS2812/Neopixel, siehe main.rs)
pub const LED_GPIO_PIN: u8 = 8;

/// Globale Helligkeit des Rings (0-255)
/// ~10 %, zusätzlich zu den ohnehin gedimmten Farben (0x10 pro Kanal)
pub const LED_BRIGHTNESS: u8 = 26;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Anzahl der LEDs im Ring
pub const LED_COUNT: usize = RING_SIZE;
