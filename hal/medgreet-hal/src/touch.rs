//! Touch controller abstraction

pub use medgreet_protocol::RawTouch;

/// Polled touch controller
///
/// Sampling is a single synchronous exchange with the controller; there is
/// no streaming and no interrupt-driven queue.
pub trait TouchSampler {
    /// Error type for sampling operations
    type Error;

    /// Read the current touch state
    ///
    /// Returns `Ok(Some(sample))` while the panel is pressed and `Ok(None)`
    /// when it is not.
    fn sample(&mut self) -> Result<Option<RawTouch>, Self::Error>;
}

impl<T: TouchSampler + ?Sized> TouchSampler for &mut T {
    type Error = T::Error;

    fn sample(&mut self) -> Result<Option<RawTouch>, Self::Error> {
        T::sample(self)
    }
}
