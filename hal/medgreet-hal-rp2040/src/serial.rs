//! Non-blocking serial receive over embassy-rp buffered UART
//!
//! The buffered UART fills a ring buffer from its interrupt handler. This
//! adapter only copies out what is already in that buffer, so a poll of
//! the serial link never waits for the next byte.

use embassy_rp::uart::BufferedUartRx;
use embedded_io::{Read, ReadReady};
use medgreet_hal::SerialRx;

/// UART receiver of the name channel
pub type UartSerialRx = IoSerialRx<BufferedUartRx>;

/// `SerialRx` over any `embedded-io` reader that can report readiness
pub struct IoSerialRx<R> {
    inner: R,
}

impl<R: Read + ReadReady> IoSerialRx<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + ReadReady> SerialRx for IoSerialRx<R> {
    type Error = R::Error;

    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        // `read` blocks until at least one byte arrives, so check first
        if buf.is_empty() || !self.inner.read_ready()? {
            return Ok(0);
        }
        self.inner.read(buf)
    }
}
