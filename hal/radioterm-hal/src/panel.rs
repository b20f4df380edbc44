//! Display panel abstraction
//!
//! The render gate draws into an in-memory frame; this trait covers only
//! the transfer of that frame to the glass.

/// Full-frame transfer to the display panel.
pub trait Panel {
    /// Error type for panel operations
    type Error;

    /// Push one complete frame of pixel data to the panel. Whole-frame
    /// only; there are no partial updates.
    fn present(&mut self, frame: &[u8]) -> Result<(), Self::Error>;
}
