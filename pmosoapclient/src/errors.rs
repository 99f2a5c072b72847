use pmosoap::{SoapError, SoapFault};
use thiserror::Error;

/// Result type for the SOAP client pipeline.
pub type Result<T> = std::result::Result<T, SoapCallError>;

/// Errors surfaced by a SOAP invocation.
///
/// `Fault` is the recoverable, application visible case: the server
/// understood the envelope and reported a typed failure. `Protocol` means
/// the response could not be interpreted as SOAP at all. `Transport` passes
/// network level failures through unchanged.
#[derive(Error, Debug)]
pub enum SoapCallError {
    /// Network or HTTP level failure, opaque to this layer.
    #[error("Transport error: {0}")]
    Transport(#[from] ureq::Error),

    /// The response is not a well formed SOAP document.
    #[error("SOAP protocol error: {0}")]
    Protocol(#[from] SoapError),

    /// A well formed SOAP Fault decoded from an HTTP 500 response.
    #[error("SOAP fault: {0}")]
    Fault(SoapFault),

    /// HTTP status outside the codes the SOAP layer accepts.
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    /// Expected element missing from a response body.
    #[error("Missing {0} element in SOAP body")]
    MissingValue(String),
}
