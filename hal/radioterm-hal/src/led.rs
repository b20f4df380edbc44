//! LED strip abstraction

/// Write-only interface to the status LED strip.
///
/// The buffer is raw wire data: three bytes per LED in GRB order, written
/// wholesale on every update.
pub trait LedStrip {
    /// Error type for strip operations
    type Error;

    /// Transmit one full frame of GRB data to the strip.
    async fn write(&mut self, grb: &[u8]) -> Result<(), Self::Error>;
}
