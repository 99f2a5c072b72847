//! SOAP client pipeline: HTTP invocation, response validation, envelope
//! decoding.
//!
//! The protocol model (envelopes, faults, qualified names) lives in
//! [`pmosoap`]; this crate drives it over HTTP with `ureq` and classifies
//! responses into accepted envelopes, protocol faults and transport
//! errors:
//!
//! - HTTP 200 → the body is decoded into a [`pmosoap::SoapEnvelope`]
//! - HTTP 500 → the body is decoded into a [`pmosoap::SoapFault`] and
//!   surfaced as [`SoapCallError::Fault`]
//! - transport failures pass through unchanged as
//!   [`SoapCallError::Transport`]

mod client;
mod errors;
mod response;

pub use client::{SoapCallResult, extract_child_text, find_child, invoke};
pub use errors::{Result, SoapCallError};
pub use response::{decode_response, validate_response};
