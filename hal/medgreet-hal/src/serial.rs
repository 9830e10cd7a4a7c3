//! Serial receive abstraction
//!
//! The kiosk never waits on the serial port: each loop iteration drains
//! whatever bytes have already arrived and moves on.

/// Non-blocking serial receiver
pub trait SerialRx {
    /// Error type for receive operations
    type Error;

    /// Copy already-received bytes into `buf`
    ///
    /// Returns the number of bytes written, `Ok(0)` when nothing is pending.
    /// Must not block waiting for data.
    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

impl<T: SerialRx + ?Sized> SerialRx for &mut T {
    type Error = T::Error;

    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        T::read_available(self, buf)
    }
}
