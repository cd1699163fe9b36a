//! The byte-stream link between the host and the radio.

use trx154_wire::MessageBuffer;

/// An opaque transport failure.
///
/// The engine does not interpret transport errors; any failure of the link
/// surfaces to the caller as [`Error::SystemError`](crate::Error).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportError;

/// The link carrying protocol messages to and from the radio.
///
/// Implementations wrap the platform's SPI or UART exchange. The engine
/// treats [`downstream`] as an opaque blocking call: it returns once the
/// command has been sent and, for synchronous requests, the response has
/// been received. Retries and timeouts are the transport's concern; the
/// engine never retries.
///
/// [`downstream`]: Transport::downstream
pub trait Transport {
    /// Send one command to the radio.
    ///
    /// `response` is `Some` for synchronous requests; the transport must
    /// block until a response message is available and store it there,
    /// envelope included.
    fn downstream(
        &mut self,
        command: &[u8],
        response: Option<&mut MessageBuffer>,
    ) -> Result<(), TransportError>;
}
