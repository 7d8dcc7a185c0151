//! Darstellung der Neigungsrichtung auf dem LED-Ring
//!
//! `PixelRing` hält den Frame im Speicher, erst `show()` schreibt ihn
//! auf die Hardware (via `SmartLedWriter`).

use rgb::RGB8;
use smart_leds::brightness;

use crate::traits::{LedError, RING_SIZE, SmartLedWriter};
use crate::types::TiltCode;

/// Helligkeit pro Farbkanal (gedimmt)
pub const COLOR_LEVEL: u8 = 0x10;

/// Globale Helligkeit ohne Dimmung
pub const FULL_BRIGHTNESS: u8 = 255;

pub const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
pub const GREEN: RGB8 = RGB8 {
    r: 0,
    g: COLOR_LEVEL,
    b: 0,
};
pub const BLUE: RGB8 = RGB8 {
    r: 0,
    g: 0,
    b: COLOR_LEVEL,
};
pub const PURPLE: RGB8 = RGB8 {
    r: COLOR_LEVEL,
    g: 0,
    b: COLOR_LEVEL,
};

/// LED-Muster für eine Neigungsrichtung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiltPattern {
    pub slots: &'static [usize],
    pub color: RGB8,
}

/// Liefert das LED-Muster für `tilt`
///
/// Diagonalen lila, reine Richtungen grün, waagerecht blau.
/// Fehler und `Unclassified` haben kein Muster.
pub fn tilt_pattern(tilt: TiltCode) -> Option<TiltPattern> {
    let (slots, color): (&'static [usize], RGB8) = match tilt {
        TiltCode::Level => (&[0, 1, 3, 4, 5, 6, 8, 9], BLUE),
        TiltCode::BackLeft => (&[3, 4], PURPLE),
        TiltCode::BackRight => (&[5, 6], PURPLE),
        TiltCode::ForwardLeft => (&[0, 1], PURPLE),
        TiltCode::ForwardRight => (&[8, 9], PURPLE),
        TiltCode::Left => (&[1, 3], GREEN),
        TiltCode::Right => (&[6, 8], GREEN),
        TiltCode::Backward => (&[4, 5], GREEN),
        TiltCode::Forward => (&[0, 9], GREEN),
        TiltCode::Unclassified | TiltCode::InvalidMultiplier | TiltCode::InvalidSensitivity => {
            return None;
        }
    };
    Some(TiltPattern { slots, color })
}

/// LED-Ring mit Frame-Buffer
///
/// Die globale Helligkeit wird erst beim Schreiben angewendet, der Frame
/// selbst enthält immer die unskalierten Farben.
pub struct PixelRing<W: SmartLedWriter> {
    writer: W,
    pixels: [RGB8; RING_SIZE],
    brightness: u8,
}

impl<W: SmartLedWriter> PixelRing<W> {
    /// Erstellt einen Ring mit allen Slots auf Schwarz (noch nicht geschrieben)
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pixels: [BLACK; RING_SIZE],
            brightness: FULL_BRIGHTNESS,
        }
    }

    /// Setzt die globale Helligkeit (0..=255, 255 = unverändert)
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Setzt einen Slot im Frame (ohne zu schreiben)
    pub fn set(&mut self, slot: usize, color: RGB8) -> Result<(), LedError> {
        let pixel = self
            .pixels
            .get_mut(slot)
            .ok_or(LedError::SlotOutOfRange(slot))?;
        *pixel = color;
        Ok(())
    }

    pub fn get(&self, slot: usize) -> Option<RGB8> {
        self.pixels.get(slot).copied()
    }

    pub fn fill(&mut self, color: RGB8) {
        self.pixels = [color; RING_SIZE];
    }

    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    /// Schreibt den aktuellen Frame (mit Helligkeit skaliert) auf die LEDs
    pub fn show(&mut self) -> Result<(), LedError> {
        let mut frame = [BLACK; RING_SIZE];
        for (out, pixel) in frame
            .iter_mut()
            .zip(brightness(self.pixels.iter().copied(), self.brightness))
        {
            *out = pixel;
        }
        self.writer.write(&frame)
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

/// Zeigt `tilt` auf dem Ring an
///
/// Setzt nur die Slots des Musters, alle anderen bleiben unverändert.
/// Gibt `Ok(false)` zurück (ohne `show()`), wenn es kein Muster gibt.
pub fn render_tilt<W: SmartLedWriter>(
    tilt: TiltCode,
    ring: &mut PixelRing<W>,
) -> Result<bool, LedError> {
    let Some(pattern) = tilt_pattern(tilt) else {
        return Ok(false);
    };

    for &slot in pattern.slots {
        ring.set(slot, pattern.color)?;
    }
    ring.show()?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullWriter {
        writes: usize,
    }

    impl SmartLedWriter for NullWriter {
        fn write(&mut self, _pixels: &[RGB8; RING_SIZE]) -> Result<(), LedError> {
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_pattern_colors() {
        assert_eq!(tilt_pattern(TiltCode::Level).unwrap().color, BLUE);
        assert_eq!(tilt_pattern(TiltCode::BackLeft).unwrap().color, PURPLE);
        assert_eq!(tilt_pattern(TiltCode::Forward).unwrap().color, GREEN);
    }

    #[test]
    fn test_no_pattern_for_errors() {
        assert_eq!(tilt_pattern(TiltCode::Unclassified), None);
        assert_eq!(tilt_pattern(TiltCode::InvalidMultiplier), None);
        assert_eq!(tilt_pattern(TiltCode::InvalidSensitivity), None);
    }

    #[test]
    fn test_level_skips_slots_2_and_7() {
        let pattern = tilt_pattern(TiltCode::Level).unwrap();
        assert!(!pattern.slots.contains(&2));
        assert!(!pattern.slots.contains(&7));
        assert_eq!(pattern.slots.len(), 8);
    }

    #[test]
    fn test_set_out_of_range() {
        let mut ring = PixelRing::new(NullWriter { writes: 0 });
        assert_eq!(ring.set(10, GREEN), Err(LedError::SlotOutOfRange(10)));
    }

    #[test]
    fn test_render_keeps_other_slots() {
        let mut ring = PixelRing::new(NullWriter { writes: 0 });
        ring.set(2, PURPLE).unwrap();

        assert_eq!(render_tilt(TiltCode::Right, &mut ring), Ok(true));

        assert_eq!(ring.get(2), Some(PURPLE));
        assert_eq!(ring.get(6), Some(GREEN));
        assert_eq!(ring.get(8), Some(GREEN));
        assert_eq!(ring.get(0), Some(BLACK));
        assert_eq!(ring.writer().writes, 1);
    }

    #[test]
    fn test_full_brightness_keeps_colors() {
        struct LastFrame(Option<[RGB8; RING_SIZE]>);

        impl SmartLedWriter for LastFrame {
            fn write(&mut self, pixels: &[RGB8; RING_SIZE]) -> Result<(), LedError> {
                self.0 = Some(*pixels);
                Ok(())
            }
        }

        let mut ring = PixelRing::new(LastFrame(None));
        render_tilt(TiltCode::Backward, &mut ring).unwrap();

        let frame = ring.writer().0.unwrap();
        assert_eq!(frame[4], GREEN);
        assert_eq!(frame[5], GREEN);
    }

    #[test]
    fn test_render_unclassified_does_not_flush() {
        let mut ring = PixelRing::new(NullWriter { writes: 0 });
        assert_eq!(render_tilt(TiltCode::Unclassified, &mut ring), Ok(false));
        assert_eq!(ring.writer().writes, 0);
    }
}
