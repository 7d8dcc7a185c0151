// Task-Modul: Enthält die Embassy Tasks
//
// Es gibt nur einen Task: Sensor lesen → klassifizieren → anzeigen.

pub mod tilt_indicator;

// Re-export Tasks für einfachen Import
pub use tilt_indicator::{tilt_indicator_logic, tilt_indicator_task};
