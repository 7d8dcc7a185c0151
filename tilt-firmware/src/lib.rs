// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// ============================================================================
// Testing
// ============================================================================
//
// Dieses Crate kompiliert nur für riscv32imac-unknown-none-elf (esp-hal,
// embassy). Die komplette Logik (Klassifikation, Muster, Poll-Zyklus) liegt
// deshalb in tilt-core und wird in tilt-tests auf dem Host getestet.
// Hier bleiben nur die Hardware-Treiber und der Task.
