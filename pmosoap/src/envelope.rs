//! Structures de l'enveloppe SOAP

use crate::errors::Result;
use xmltree::{Element, EmitterConfig, Namespace, XMLNode};

/// Namespace SOAP 1.1
pub const NS_SOAP: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Préfixe utilisé pour les éléments SOAP construits par cette couche
pub(crate) const SOAP_PREFIX: &str = "s";

/// Déclaration émise en tête de chaque document sérialisé
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?>"#;

/// Enveloppe SOAP complète
///
/// L'enveloppe possède son arbre XML de manière exclusive. Le `Body` est
/// garanti présent dès la construction ; le `Header` est optionnel et créé
/// à la première demande, en première position pour conserver l'ordre
/// Header puis Body dans le document.
#[derive(Debug, Clone)]
pub struct SoapEnvelope {
    root: Element,
}

impl SoapEnvelope {
    /// Crée une enveloppe vide : un Body sans contenu, pas de Header
    pub fn new() -> Self {
        let mut root = soap_element("Envelope");
        root.children.push(XMLNode::Element(soap_element("Body")));
        Self { root }
    }

    /// Enveloppe un arbre XML déjà construit, sans validation
    ///
    /// Appeler [`SoapEnvelope::body`] sur un arbre qui ne contient pas de
    /// Body est une erreur de programmation et provoque un panic ; les
    /// réponses décodées sont supposées validées en amont.
    pub fn wrap(root: Element) -> Self {
        Self { root }
    }

    /// Élément racine `<s:Envelope>`
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Consomme l'enveloppe et rend l'arbre sous-jacent
    pub fn into_root(self) -> Element {
        self.root
    }

    /// Le Header s'il existe, sans le créer
    pub fn header(&self) -> Option<&Element> {
        find_child_ns(&self.root, NS_SOAP, "Header")
    }

    /// Retourne le Header, en le créant d'abord s'il n'existe pas encore
    ///
    /// Lecture à effet de bord assumé : la plupart des opérations SOAP ne
    /// portent aucun header, le créer ici seulement évite d'émettre un
    /// `<s:Header/>` vide sur chaque message sortant.
    pub fn get_or_create_header(&mut self) -> &mut Element {
        let index = self.root.children.iter().position(|node| {
            node.as_element()
                .is_some_and(|element| is_soap_element(element, "Header"))
        });

        let index = match index {
            Some(index) => index,
            None => {
                self.root
                    .children
                    .insert(0, XMLNode::Element(soap_element("Header")));
                0
            }
        };

        match &mut self.root.children[index] {
            XMLNode::Element(element) => element,
            _ => unreachable!("children[index] localisé comme élément juste au-dessus"),
        }
    }

    /// Le Body de l'enveloppe
    ///
    /// Panic si l'arbre n'en contient pas : `new()` le garantit par
    /// construction, un document décodé est supposé conforme au schéma.
    pub fn body(&self) -> &Element {
        self.find_body().expect("SOAP Envelope without Body element")
    }

    /// Accès mutable au Body
    pub fn body_mut(&mut self) -> &mut Element {
        self.root
            .children
            .iter_mut()
            .filter_map(|node| match node {
                XMLNode::Element(element) => Some(element),
                _ => None,
            })
            .find(|element| is_soap_element(element, "Body"))
            .expect("SOAP Envelope without Body element")
    }

    /// Recherche le Body sans présumer de sa présence
    ///
    /// Utilisé par la chaîne de validation des réponses, où l'absence de
    /// Body doit devenir une erreur typée et non un panic.
    pub fn find_body(&self) -> Option<&Element> {
        find_child_ns(&self.root, NS_SOAP, "Body")
    }

    /// Sérialise l'enveloppe en document XML indenté
    pub fn to_xml(&self) -> Result<String> {
        let mut buffer = Vec::new();
        let config = EmitterConfig::new()
            .write_document_declaration(false)
            .perform_indent(true)
            .indent_string("  ");
        self.root.write_with_config(&mut buffer, config)?;

        let document = String::from_utf8(buffer).unwrap();
        Ok(format!("{XML_DECLARATION}\n{document}"))
    }
}

impl Default for SoapEnvelope {
    fn default() -> Self {
        Self::new()
    }
}

/// Crée un élément dans le namespace SOAP, préfixé `s:`
pub(crate) fn soap_element(local_name: &str) -> Element {
    let mut element = Element::new(local_name);
    element.prefix = Some(SOAP_PREFIX.to_string());
    element.namespace = Some(NS_SOAP.to_string());

    let mut namespaces = Namespace::empty();
    namespaces.put(SOAP_PREFIX, NS_SOAP);
    element.namespaces = Some(namespaces);

    element
}

fn is_soap_element(element: &Element, local_name: &str) -> bool {
    element.name == local_name && element.namespace.as_deref() == Some(NS_SOAP)
}

/// Premier élément enfant portant ce namespace et ce nom local
pub(crate) fn find_child_ns<'a>(
    parent: &'a Element,
    namespace: &str,
    local_name: &str,
) -> Option<&'a Element> {
    parent.children.iter().find_map(|node| match node {
        XMLNode::Element(element)
            if element.name == local_name && element.namespace.as_deref() == Some(namespace) =>
        {
            Some(element)
        }
        _ => None,
    })
}

/// Premier élément enfant portant ce nom local, namespace indifférent
///
/// Les enfants d'un Fault SOAP 1.1 sont non qualifiés, contrairement à
/// l'élément Fault lui-même.
pub(crate) fn child_by_local_name<'a>(parent: &'a Element, local_name: &str) -> Option<&'a Element> {
    parent.children.iter().find_map(|node| match node {
        XMLNode::Element(element) if element.name == local_name => Some(element),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_envelope_has_body_and_no_header() {
        let envelope = SoapEnvelope::new();

        let body = envelope.body();
        assert_eq!(body.name, "Body");
        assert_eq!(body.namespace.as_deref(), Some(NS_SOAP));
        assert!(body.children.is_empty());

        assert!(envelope.header().is_none());
    }

    #[test]
    fn test_get_or_create_header_is_idempotent() {
        let mut envelope = SoapEnvelope::new();

        envelope
            .get_or_create_header()
            .children
            .push(XMLNode::Element(Element::new("SessionId")));

        // Le second appel retrouve le même élément au lieu d'en créer un autre
        let header = envelope.get_or_create_header();
        assert_eq!(header.children.len(), 1);

        let header_count = envelope
            .root()
            .children
            .iter()
            .filter_map(|node| node.as_element())
            .filter(|element| element.name == "Header")
            .count();
        assert_eq!(header_count, 1);
    }

    #[test]
    fn test_header_is_inserted_before_body() {
        let mut envelope = SoapEnvelope::new();
        envelope.get_or_create_header();

        let names: Vec<&str> = envelope
            .root()
            .children
            .iter()
            .filter_map(|node| node.as_element())
            .map(|element| element.name.as_str())
            .collect();
        assert_eq!(names, ["Header", "Body"]);
    }

    #[test]
    fn test_to_xml_emits_declaration_and_namespace() {
        let envelope = SoapEnvelope::new();
        let xml = envelope.to_xml().unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?>"#));
        assert!(xml.contains(r#"xmlns:s="http://schemas.xmlsoap.org/soap/envelope/""#));
        assert!(xml.contains("s:Body"));
    }

    #[test]
    #[should_panic(expected = "SOAP Envelope without Body element")]
    fn test_body_panics_on_malformed_tree() {
        let envelope = SoapEnvelope::wrap(Element::new("Envelope"));
        envelope.body();
    }
}
