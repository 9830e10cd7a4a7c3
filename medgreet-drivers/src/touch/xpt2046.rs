//! XPT2046 resistive touch controller (SPI)
//!
//! The XPT2046 (and the compatible ADS7843) is a 12-bit ADC with a touch
//! panel front end. Each conversion is one 3-byte SPI exchange:
//!
//! - Control byte: start bit, channel select, 12-bit mode, differential
//!   reference, power-down between conversions
//! - Two response bytes holding the result left-aligned after a busy bit
//!
//! # Pressure
//!
//! Touch is detected from the Z1/Z2 pressure channels: `z = z1 + 4095 - z2`
//! grows with pressure and stays near zero when the panel is untouched.
//! The optional PENIRQ pin (active low) lets `sample` skip SPI traffic
//! entirely while nobody is touching the panel.

use core::convert::Infallible;

use embedded_hal::digital::{self, InputPin};
use embedded_hal::spi::SpiDevice;
use medgreet_hal::TouchSampler;
use medgreet_protocol::RawTouch;

/// Control bytes (differential mode, power-down between conversions)
pub mod cmd {
    /// X position
    pub const READ_X: u8 = 0xD0;
    /// Y position
    pub const READ_Y: u8 = 0x90;
    /// Pressure Z1
    pub const READ_Z1: u8 = 0xB0;
    /// Pressure Z2
    pub const READ_Z2: u8 = 0xC0;
}

/// Full-scale 12-bit reading
const MAX_READING: u16 = 0x0FFF;

/// Touch driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchError<E> {
    /// SPI transfer failed
    Spi(E),
    /// PENIRQ pin could not be read
    Irq,
}

/// XPT2046 configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xpt2046Config {
    /// Minimum pressure (`z1 + 4095 - z2`) counted as a touch
    pub pressure_threshold: u16,
    /// Conversions averaged per axis (at least 1)
    pub samples: u8,
}

impl Default for Xpt2046Config {
    fn default() -> Self {
        Self {
            pressure_threshold: 300,
            samples: 2,
        }
    }
}

/// Placeholder for boards without the PENIRQ line wired
///
/// Always reads as pressed, so every `sample` measures pressure over SPI.
pub struct NoIrq;

impl digital::ErrorType for NoIrq {
    type Error = Infallible;
}

impl InputPin for NoIrq {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(false)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(true)
    }
}

/// XPT2046 driver
pub struct Xpt2046<SPI, IRQ = NoIrq> {
    spi: SPI,
    irq: IRQ,
    config: Xpt2046Config,
}

impl<SPI: SpiDevice> Xpt2046<SPI, NoIrq> {
    /// Create a driver that polls pressure over SPI
    pub fn new(spi: SPI, config: Xpt2046Config) -> Self {
        Self::with_irq(spi, NoIrq, config)
    }
}

impl<SPI: SpiDevice, IRQ: InputPin> Xpt2046<SPI, IRQ> {
    /// Create a driver gated by the PENIRQ pin
    pub fn with_irq(spi: SPI, irq: IRQ, config: Xpt2046Config) -> Self {
        Self { spi, irq, config }
    }

    pub fn config(&self) -> &Xpt2046Config {
        &self.config
    }

    /// Release the bus and pin
    pub fn release(self) -> (SPI, IRQ) {
        (self.spi, self.irq)
    }

    /// Run one conversion
    fn read_channel(&mut self, command: u8) -> Result<u16, TouchError<SPI::Error>> {
        let mut rx = [0u8; 3];
        self.spi
            .transfer(&mut rx, &[command, 0, 0])
            .map_err(TouchError::Spi)?;
        Ok(((u16::from(rx[1]) << 8 | u16::from(rx[2])) >> 3) & MAX_READING)
    }

    /// Average `samples` conversions of one channel
    fn read_averaged(&mut self, command: u8) -> Result<u16, TouchError<SPI::Error>> {
        let samples = self.config.samples.max(1);
        let mut sum = 0u32;
        for _ in 0..samples {
            sum += u32::from(self.read_channel(command)?);
        }
        Ok((sum / u32::from(samples)) as u16)
    }

    /// Current pressure estimate
    pub fn pressure(&mut self) -> Result<u16, TouchError<SPI::Error>> {
        let z1 = self.read_channel(cmd::READ_Z1)?;
        let z2 = self.read_channel(cmd::READ_Z2)?;
        Ok((z1 + MAX_READING).saturating_sub(z2))
    }

    /// Check the PENIRQ line (active low)
    fn pen_down(&mut self) -> Result<bool, TouchError<SPI::Error>> {
        self.irq.is_low().map_err(|_| TouchError::Irq)
    }
}

impl<SPI: SpiDevice, IRQ: InputPin> TouchSampler for Xpt2046<SPI, IRQ> {
    type Error = TouchError<SPI::Error>;

    fn sample(&mut self) -> Result<Option<RawTouch>, Self::Error> {
        if !self.pen_down()? {
            return Ok(None);
        }

        let z = self.pressure()?;
        if z < self.config.pressure_threshold {
            return Ok(None);
        }

        let x = self.read_averaged(cmd::READ_X)?;
        let y = self.read_averaged(cmd::READ_Y)?;
        Ok(Some(RawTouch { x, y, z }))
    }
}
