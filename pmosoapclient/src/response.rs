//! HTTP response classification for SOAP calls.
//!
//! Decides, from the HTTP status code, whether a response is accepted as
//! is, carries a protocol level SOAP Fault, or is an error. Only 200 and
//! 500 may reach this stage; the gate in [`crate::client`] owns every other
//! status code.

use pmosoap::{SoapEnvelope, SoapFault, find_fault, parse_envelope};
use tracing::{debug, warn};

use crate::errors::{Result, SoapCallError};

/// Classify an HTTP response by status code.
///
/// * `200`: accepted; the body is returned untouched for envelope
///   decoding, without being inspected here.
/// * `500`: SOAP 1.1 convention for "the operation itself failed", so the
///   body must carry a Fault. Parse the envelope, locate the first Fault
///   element of the Body and decode it; any failure in that chain is a
///   protocol error, never an acceptance.
/// * anything else: precondition violation. A prior transport side gate
///   owns arbitrary status codes, so reaching this stage with one is an
///   integration bug; it panics instead of being silently accepted, a
///   recovery here would only mask the broken caller.
pub fn validate_response(status: u16, body: &[u8]) -> Result<Vec<u8>> {
    match status {
        200 => {
            debug!("HTTP 200, response accepted");
            Ok(body.to_vec())
        }
        500 => match decode_fault(body) {
            Ok(fault) => {
                debug!(%fault, "HTTP 500 carried a SOAP fault");
                Err(SoapCallError::Fault(fault))
            }
            Err(error) => {
                warn!("HTTP 500 without a decodable SOAP fault: {error}");
                Err(error)
            }
        },
        other => panic!(
            "validate_response invoked with HTTP status {other}: \
             the transport gate must filter status codes before SOAP validation"
        ),
    }
}

/// Decode the SOAP Fault carried by an HTTP 500 body.
fn decode_fault(body: &[u8]) -> Result<SoapFault> {
    let envelope = parse_envelope(body)?;
    let fault_element = find_fault(&envelope)?;
    Ok(SoapFault::from_element(fault_element)?)
}

/// Turn transport output into a SOAP envelope.
///
/// The transport hands over either response bytes or an error, never
/// neither. A prior transport error is propagated unchanged without
/// touching the body; bytes are parsed as a SOAP document. Both absent is
/// a broken transport contract and panics.
pub fn decode_response(
    body: Option<&[u8]>,
    transport_error: Option<ureq::Error>,
) -> Result<SoapEnvelope> {
    if let Some(error) = transport_error {
        return Err(SoapCallError::Transport(error));
    }

    match body {
        Some(bytes) => Ok(parse_envelope(bytes)?),
        None => panic!(
            "decode_response invoked without body or transport error: \
             the transport layer must provide one of the two"
        ),
    }
}
