//! Radio link abstraction
//!
//! Byte-oriented serial transport to the radio co-processor. There is no
//! framing: submitted lines go out terminated with CRLF, and received bytes
//! arrive split at arbitrary boundaries.

/// Byte transport to the radio co-processor.
pub trait RadioLink {
    /// Error type for link operations
    type Error;

    /// Number of received bytes currently buffered. Never blocks.
    fn available(&self) -> usize;

    /// Read buffered bytes into `buf`, waiting a short bounded time when
    /// fewer than `buf.len()` are ready.
    ///
    /// Returns the number of bytes read; `Ok(0)` when the wait expires with
    /// nothing buffered.
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Send all of `data`, blocking until the link has accepted it. No
    /// retries; delivery is as reliable as the underlying link.
    async fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}
