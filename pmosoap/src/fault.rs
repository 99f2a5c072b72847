//! SOAP Faults

use crate::envelope::{child_by_local_name, soap_element};
use crate::errors::{Result, SoapError};
use crate::qname::{QualifiedName, next_free_prefix, prefix_for_uri};
use std::fmt;
use url::Url;
use xmltree::{Element, EmitterConfig, Namespace, XMLNode};

/// Erreur SOAP (Fault)
///
/// Valeur immuable, détachée du document d'origine : les nœuds de `detail`
/// sont copiés pour que le fault survive à l'arbre dont il a été décodé.
#[derive(Debug, Clone, PartialEq)]
pub struct SoapFault {
    /// Code d'erreur, nom qualifié identifiant la catégorie
    pub fault_code: QualifiedName,

    /// Description lisible de l'erreur
    pub fault_string: String,

    /// Nœud du chemin de message à l'origine de l'erreur
    pub fault_actor: Option<Url>,

    /// Contenu applicatif opaque, dans l'ordre du document
    pub detail: Vec<XMLNode>,
}

impl SoapFault {
    /// Crée un fault sans actor ni detail
    pub fn new(fault_code: QualifiedName, fault_string: impl Into<String>) -> Self {
        Self {
            fault_code,
            fault_string: fault_string.into(),
            fault_actor: None,
            detail: Vec::new(),
        }
    }

    /// Décode un élément `<s:Fault>`
    ///
    /// Les enfants sont cherchés par nom local non qualifié, conformément à
    /// SOAP 1.1. Le préfixe du faultcode est résolu dans le contexte de
    /// namespace du document d'origine ; un faultstring absent est une
    /// erreur typée, jamais un panic, le contenu venant du serveur.
    pub fn from_element(element: &Element) -> Result<SoapFault> {
        let code_element =
            child_by_local_name(element, "faultcode").ok_or(SoapError::MissingFaultCode)?;
        let code_text = element_text(code_element);
        if code_text.is_empty() {
            return Err(SoapError::EmptyFaultCode);
        }
        let fault_code = QualifiedName::resolve(&code_text, code_element)?;

        let fault_string = child_by_local_name(element, "faultstring")
            .map(element_text)
            .ok_or(SoapError::MissingFaultString)?;

        let fault_actor = match child_by_local_name(element, "faultactor") {
            Some(actor) => Some(Url::parse(&element_text(actor))?),
            None => None,
        };

        let detail = child_by_local_name(element, "detail")
            .map(|detail| detail.children.clone())
            .unwrap_or_default();

        Ok(SoapFault {
            fault_code,
            fault_string,
            fault_actor,
            detail,
        })
    }

    /// Sérialise le fault en élément `<s:Fault>`
    ///
    /// Le faultcode est émis sous la forme `prefixe:local` : un préfixe déjà
    /// déclaré pour l'URI du code est réutilisé, sinon une liaison `nsN`
    /// est enregistrée sur l'élément faultcode. Un actor absent est omis,
    /// pas d'élément vide. Les nœuds de detail sont copiés dans le nouvel
    /// arbre pour ne jamais référencer l'ancien document.
    pub fn to_element(&self) -> Element {
        let mut fault = soap_element("Fault");

        let mut code_scope = fault.namespaces.clone().unwrap_or_else(Namespace::empty);
        let prefix = match prefix_for_uri(&code_scope, &self.fault_code.namespace) {
            Some(prefix) => prefix,
            None => {
                let fresh = next_free_prefix(&code_scope);
                code_scope.put(fresh.as_str(), self.fault_code.namespace.as_str());
                fresh
            }
        };

        let mut code_element = Element::new("faultcode");
        code_element.namespaces = Some(code_scope);
        code_element.children.push(XMLNode::Text(format!(
            "{prefix}:{}",
            self.fault_code.local_name
        )));
        fault.children.push(XMLNode::Element(code_element));

        let mut string_element = Element::new("faultstring");
        string_element
            .children
            .push(XMLNode::Text(self.fault_string.clone()));
        fault.children.push(XMLNode::Element(string_element));

        if let Some(actor) = &self.fault_actor {
            let mut actor_element = Element::new("faultactor");
            actor_element
                .children
                .push(XMLNode::Text(actor.to_string()));
            fault.children.push(XMLNode::Element(actor_element));
        }

        if !self.detail.is_empty() {
            let mut detail_element = Element::new("detail");
            detail_element.children = self.detail.clone();
            fault.children.push(XMLNode::Element(detail_element));
        }

        fault
    }
}

impl fmt::Display for SoapFault {
    /// Rendu diagnostique déterministe, stable au sein d'une release
    ///
    /// Destiné aux logs, jamais parsé par un consommateur.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let actor = self
            .fault_actor
            .as_ref()
            .map_or_else(|| "nil".to_string(), Url::to_string);
        let detail = self
            .detail
            .iter()
            .map(node_to_string)
            .collect::<Vec<_>>()
            .join(", ");

        write!(
            f,
            "Fault(code={}, actor={}, string={}, detail={})",
            self.fault_code, actor, self.fault_string, detail
        )
    }
}

/// Texte d'un élément, vide si l'élément n'en porte pas
fn element_text(element: &Element) -> String {
    element
        .get_text()
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

/// Rendu texte d'un nœud XML pour les diagnostics
fn node_to_string(node: &XMLNode) -> String {
    match node {
        XMLNode::Element(element) => {
            let mut buffer = Vec::new();
            let config = EmitterConfig::new().write_document_declaration(false);
            match element.write_with_config(&mut buffer, config) {
                Ok(()) => String::from_utf8(buffer).unwrap_or_default(),
                Err(_) => format!("<{}>", element.name),
            }
        }
        XMLNode::Text(text) | XMLNode::CData(text) | XMLNode::Comment(text) => text.clone(),
        XMLNode::ProcessingInstruction(name, _) => format!("<?{name}?>"),
    }
}
