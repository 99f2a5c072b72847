//! SOAP invocation over HTTP.

use pmosoap::{SoapEnvelope, build_request};
use tracing::debug;
use ureq::Agent;
use xmltree::{Element, XMLNode};

use crate::errors::{Result, SoapCallError};
use crate::response::{decode_response, validate_response};

/// Result of a SOAP call:
/// - HTTP status code
/// - raw XML body (always)
/// - decoded SOAP envelope
pub struct SoapCallResult {
    pub status: ureq::http::StatusCode,
    pub raw_body: String,
    pub envelope: SoapEnvelope,
}

/// Invoke a SOAP operation on a service endpoint.
///
/// - `endpoint_url`: full HTTP URL of the service endpoint
/// - `operation_ns`: namespace of the operation, e.g. "urn:example-service:1"
/// - `operation`: operation name, e.g. "GetStatus"
/// - `args`: list of (name, value) pairs, e.g. &[("Verbose", "1")]
///
/// A SOAP Fault reported by the service surfaces as
/// [`SoapCallError::Fault`]; the caller extracts Body content from the
/// returned envelope on success.
pub fn invoke(
    endpoint_url: &str,
    operation_ns: &str,
    operation: &str,
    args: &[(&str, &str)],
) -> Result<SoapCallResult> {
    // 1. Build the SOAP request body.
    let body_xml = build_request(operation_ns, operation, args)?;

    // 2. Build an Agent config that does NOT treat 4xx/5xx as errors.
    //
    //    This is crucial: the body of an HTTP 500 SOAP Fault must stay
    //    readable, so Error::StatusCode must never fire.
    let config = Agent::config_builder()
        .http_status_as_error(false)
        .build();
    let agent: Agent = config.into();

    // 3. SOAPAction header: "urn:service#Operation"
    let soap_action = format!(r#""{operation_ns}#{operation}""#);

    debug!(endpoint_url, operation, "Invoking SOAP operation");

    // 4. Send the HTTP POST request.
    let mut response = agent
        .post(endpoint_url)
        .header("Content-Type", r#"text/xml; charset="utf-8""#)
        .header("SOAPAction", &soap_action)
        .send(body_xml)?;

    let status = response.status();

    // 5. Read the full body, regardless of the HTTP status code.
    let raw_body = response.body_mut().read_to_string()?;

    // 6. Gate on the status code before SOAP level validation: only 200
    //    and 500 have SOAP semantics, everything else stops here. This is
    //    the filter validate_response relies on.
    if !matches!(status.as_u16(), 200 | 500) {
        return Err(SoapCallError::Status(status.as_u16()));
    }

    let accepted = validate_response(status.as_u16(), raw_body.as_bytes())?;
    let envelope = decode_response(Some(&accepted), None)?;

    Ok(SoapCallResult {
        status,
        raw_body,
        envelope,
    })
}

/// First child element with the given local name, whatever its namespace.
///
/// Response operation elements are namespace qualified but their argument
/// children usually are not; matching on the local name covers both.
pub fn find_child<'a>(parent: &'a Element, local_name: &str) -> Option<&'a Element> {
    parent.children.iter().find_map(|node| match node {
        XMLNode::Element(element) if element.name == local_name => Some(element),
        _ => None,
    })
}

/// Text content of the named child element.
pub fn extract_child_text(parent: &Element, local_name: &str) -> Result<String> {
    let child = find_child(parent, local_name)
        .ok_or_else(|| SoapCallError::MissingValue(local_name.to_string()))?;

    let text = child
        .get_text()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| SoapCallError::MissingValue(local_name.to_string()))?;

    Ok(text)
}
