// Hardware Abstraction Layer (HAL) Module
//
// Konkrete Implementierungen der tilt-core Traits für den ESP32-C6.

pub mod led_ring;
pub mod lis3dh;

pub use led_ring::{LED_BUFFER_SIZE, RmtInitError, RmtLedRing};
pub use lis3dh::{Lis3dh, Lis3dhError};
