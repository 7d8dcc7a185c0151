// LIS3DH Beschleunigungssensor - Treiber auf Register-Ebene
//
// Generisch über embedded-hal 1.0 `I2c`, damit der Treiber nicht an
// einen bestimmten esp-hal Bus-Typ gebunden ist.

use embedded_hal::i2c::I2c;
use tilt_core::{AccelRange, AccelerationSample, Accelerometer, SensorError};

// Register-Adressen
const REG_WHO_AM_I: u8 = 0x0F;
const REG_CTRL_REG1: u8 = 0x20;
const REG_CTRL_REG4: u8 = 0x23;
const REG_OUT_X_L: u8 = 0x28;

/// Erwartete Antwort auf WHO_AM_I
const WHO_AM_I_EXPECTED: u8 = 0x33;

/// Auto-Increment Bit für Burst-Reads
const AUTO_INCREMENT: u8 = 0x80;

/// CTRL_REG1: 100 Hz Datenrate, Normal-Modus, X/Y/Z aktiv
const CTRL_REG1_100HZ_XYZ: u8 = 0b0101_0111;

/// CTRL_REG4: Block Data Update
const CTRL_REG4_BDU: u8 = 0x80;

/// CTRL_REG4: High-Resolution Modus (12 Bit)
const CTRL_REG4_HR: u8 = 0x08;

/// Fehler-Typ für den LIS3DH
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lis3dhError<E> {
    /// I2C-Fehler vom Bus
    Bus(E),
    /// WHO_AM_I passt nicht (falscher Chip oder falsche Adresse)
    UnknownDevice(u8),
}

pub struct Lis3dh<I2C> {
    i2c: I2C,
    address: u8,
    range: AccelRange,
}

impl<I2C: I2c> Lis3dh<I2C> {
    /// Prüft den Chip und konfiguriert Datenrate und Messbereich
    ///
    /// # Parameter
    /// - `i2c`: I2C-Bus (blockierend)
    /// - `address`: 0x18 oder 0x19 (abhängig von SA0)
    /// - `range`: Messbereich
    pub fn new(i2c: I2C, address: u8, range: AccelRange) -> Result<Self, Lis3dhError<I2C::Error>> {
        let mut sensor = Self {
            i2c,
            address,
            range,
        };

        let id = sensor.who_am_i().map_err(Lis3dhError::Bus)?;
        if id != WHO_AM_I_EXPECTED {
            return Err(Lis3dhError::UnknownDevice(id));
        }

        sensor
            .write_register(REG_CTRL_REG1, CTRL_REG1_100HZ_XYZ)
            .map_err(Lis3dhError::Bus)?;
        sensor.set_range(range).map_err(Lis3dhError::Bus)?;
        Ok(sensor)
    }

    pub fn who_am_i(&mut self) -> Result<u8, I2C::Error> {
        let mut buf = [0u8; 1];
        self.i2c.write_read(self.address, &[REG_WHO_AM_I], &mut buf)?;
        Ok(buf[0])
    }

    pub fn set_range(&mut self, range: AccelRange) -> Result<(), I2C::Error> {
        let value = CTRL_REG4_BDU | CTRL_REG4_HR | range.full_scale_bits();
        self.write_register(REG_CTRL_REG4, value)?;
        self.range = range;
        Ok(())
    }

    /// Burst-Read aller drei Achsen (little endian, linksbündig)
    pub fn read_raw(&mut self) -> Result<[i16; 3], I2C::Error> {
        let mut raw = [0u8; 6];
        self.i2c
            .write_read(self.address, &[REG_OUT_X_L | AUTO_INCREMENT], &mut raw)?;

        Ok([
            i16::from_le_bytes([raw[0], raw[1]]),
            i16::from_le_bytes([raw[2], raw[3]]),
            i16::from_le_bytes([raw[4], raw[5]]),
        ])
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[register, value])
    }
}

impl<I2C: I2c> Accelerometer for Lis3dh<I2C> {
    fn acceleration(&mut self) -> Result<AccelerationSample, SensorError> {
        let raw = self.read_raw().map_err(|_| SensorError::ReadFailed)?;
        Ok(AccelerationSample::from_raw(raw, self.range))
    }
}
