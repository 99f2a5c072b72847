//! Construction de requêtes et de réponses SOAP

use crate::envelope::SoapEnvelope;
use crate::errors::Result;
use crate::fault::SoapFault;
use xmltree::{Element, XMLNode};

/// Construit une requête SOAP pour une opération de service web
///
/// # Arguments
///
/// * `operation_ns` - Namespace de l'opération (ex: "urn:example-service:1")
/// * `operation` - Nom de l'opération (ex: "GetStatus")
/// * `args` - Liste de paires (nom, valeur)
///
/// # Returns
///
/// Document XML SOAP formaté en String
pub fn build_request(operation_ns: &str, operation: &str, args: &[(&str, &str)]) -> Result<String> {
    let request_name = format!("u:{operation}");
    let mut request_element = Element::new(&request_name);
    request_element
        .attributes
        .insert("xmlns:u".to_string(), operation_ns.to_string());

    for (name, value) in args {
        let mut child = Element::new(name);
        child.children.push(XMLNode::Text((*value).to_string()));
        request_element.children.push(XMLNode::Element(child));
    }

    let mut envelope = SoapEnvelope::new();
    envelope
        .body_mut()
        .children
        .push(XMLNode::Element(request_element));
    envelope.to_xml()
}

/// Construit une réponse d'erreur : un Body portant le Fault sérialisé
pub fn build_fault_response(fault: &SoapFault) -> Result<String> {
    let mut envelope = SoapEnvelope::new();
    envelope
        .body_mut()
        .children
        .push(XMLNode::Element(fault.to_element()));
    envelope.to_xml()
}
