//! Décodage des réponses SOAP

use crate::envelope::{NS_SOAP, SoapEnvelope, find_child_ns};
use crate::errors::{Result, SoapError};
use std::io::BufReader;
use tracing::debug;
use xmltree::Element;

/// Parse une enveloppe SOAP complète à partir de bytes XML
///
/// La racine doit être un élément `Envelope` dans le namespace SOAP ; la
/// structure interne n'est pas validée au-delà, le Body est supposé
/// conforme au schéma.
pub fn parse_envelope(xml: &[u8]) -> Result<SoapEnvelope> {
    let reader = BufReader::new(xml);
    let root = Element::parse(reader)?;

    if root.name != "Envelope" || root.namespace.as_deref() != Some(NS_SOAP) {
        return Err(SoapError::MissingEnvelope);
    }

    debug!("Parsed SOAP envelope ({} bytes)", xml.len());
    Ok(SoapEnvelope::wrap(root))
}

/// Premier élément Fault du Body, dans le namespace SOAP
///
/// Chaque absence dans la chaîne Envelope → Body → Fault est une erreur
/// typée distincte.
pub fn find_fault(envelope: &SoapEnvelope) -> Result<&Element> {
    let body = envelope.find_body().ok_or(SoapError::MissingBody)?;
    find_child_ns(body, NS_SOAP, "Fault").ok_or(SoapError::MissingFault)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_envelope_with_header_and_body() {
        let xml = br#"<?xml version="1.0"?>
<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
  <s:Header><SessionId>abc</SessionId></s:Header>
  <s:Body>
    <u:GetStatusResponse xmlns:u="urn:example-service:1">
      <Status>OK</Status>
    </u:GetStatusResponse>
  </s:Body>
</s:Envelope>"#;

        let envelope = parse_envelope(xml).unwrap();
        assert!(envelope.header().is_some());
        assert_eq!(envelope.body().name, "Body");
    }

    #[test]
    fn test_parse_rejects_non_envelope_root() {
        let result = parse_envelope(b"<root>not soap</root>");
        assert!(matches!(result, Err(SoapError::MissingEnvelope)));
    }

    #[test]
    fn test_parse_rejects_envelope_outside_soap_namespace() {
        let result = parse_envelope(br#"<Envelope xmlns="urn:other">x</Envelope>"#);
        assert!(matches!(result, Err(SoapError::MissingEnvelope)));
    }

    #[test]
    fn test_parse_rejects_malformed_xml() {
        let result = parse_envelope(b"this is not xml");
        assert!(matches!(result, Err(SoapError::XmlParse(_))));
    }

    #[test]
    fn test_find_fault_locates_body_fault() {
        let xml = br#"<?xml version="1.0"?>
<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
  <s:Body>
    <s:Fault>
      <faultcode>s:Server</faultcode>
      <faultstring>boom</faultstring>
    </s:Fault>
  </s:Body>
</s:Envelope>"#;

        let envelope = parse_envelope(xml).unwrap();
        let fault = find_fault(&envelope).unwrap();
        assert_eq!(fault.name, "Fault");
        assert_eq!(fault.namespace.as_deref(), Some(NS_SOAP));
    }

    #[test]
    fn test_find_fault_without_fault_is_an_error() {
        let xml = br#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
  <s:Body></s:Body>
</s:Envelope>"#;

        let envelope = parse_envelope(xml).unwrap();
        assert!(matches!(find_fault(&envelope), Err(SoapError::MissingFault)));
    }

    #[test]
    fn test_find_fault_without_body_is_an_error() {
        let xml = br#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"></s:Envelope>"#;

        let envelope = parse_envelope(xml).unwrap();
        assert!(matches!(find_fault(&envelope), Err(SoapError::MissingBody)));
    }
}
