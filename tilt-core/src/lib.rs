//! Tilt Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Datentypen und Pure Functions für die
//! Acht-Wege-Neigungsanzeige.

#![no_std]

pub mod indicator;
pub mod logic;
pub mod render;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use indicator::{CycleError, CycleReport, TiltIndicator};
pub use logic::{classify_scaled, classify_tilt};
pub use render::{
    BLACK, BLUE, COLOR_LEVEL, FULL_BRIGHTNESS, GREEN, PURPLE, PixelRing, TiltPattern, render_tilt,
    tilt_pattern,
};
pub use traits::{Accelerometer, LedError, RING_SIZE, SensorError, SmartLedWriter};
pub use types::{
    AccelRange, AccelerationSample, ConfigError, DEFAULT_MULTIPLIER, DEFAULT_SENSITIVITY,
    STANDARD_GRAVITY, ScaledSample, TiltCode, TiltConfig,
};
