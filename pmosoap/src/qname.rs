//! Noms qualifiés XML et résolution de préfixes

use crate::errors::{Result, SoapError};
use std::fmt;
use xmltree::{Element, Namespace};

/// Nom qualifié XML : paire (URI de namespace, nom local)
///
/// Identifie un code d'erreur ou une valeur typée sans ambiguïté entre
/// vocabulaires.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// URI du namespace
    pub namespace: String,

    /// Nom local
    pub local_name: String,
}

impl QualifiedName {
    /// Crée un nom qualifié
    pub fn new(namespace: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            local_name: local_name.into(),
        }
    }

    /// Résout un texte `prefixe:local` en nom qualifié
    ///
    /// Le préfixe est résolu contre les déclarations de namespace visibles
    /// sur `scope`, donc dans le contexte du document d'où vient l'élément,
    /// jamais dans un contexte vide. Un texte sans préfixe est résolu contre
    /// le namespace par défaut. Un préfixe sans déclaration est une erreur
    /// de décodage.
    pub fn resolve(text: &str, scope: &Element) -> Result<QualifiedName> {
        let (prefix, local_name) = match text.split_once(':') {
            Some((prefix, local_name)) => (prefix, local_name),
            None => ("", text),
        };

        let namespace = in_scope_uri(scope, prefix)
            .ok_or_else(|| SoapError::UnresolvedPrefix(prefix.to_string()))?;

        Ok(QualifiedName::new(namespace, local_name))
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}{}", self.namespace, self.local_name)
    }
}

/// URI lié à `prefix` dans les déclarations visibles sur `scope`
///
/// Une liaison vers l'URI vide (préfixe non déclaré) ne compte pas comme
/// une résolution.
fn in_scope_uri(scope: &Element, prefix: &str) -> Option<String> {
    let namespaces = scope.namespaces.as_ref()?;
    let uri = namespaces.get(prefix)?;
    if uri.is_empty() {
        None
    } else {
        Some(uri.to_string())
    }
}

/// Préfixe déjà déclaré pour `uri` dans `scope`, s'il en existe un
///
/// Les pseudo-préfixes `xml` et `xmlns` et la liaison par défaut sont
/// ignorés : le résultat doit être utilisable tel quel dans un texte
/// `prefixe:local`.
pub(crate) fn prefix_for_uri(scope: &Namespace, uri: &str) -> Option<String> {
    scope
        .0
        .iter()
        .find(|(prefix, bound)| {
            bound.as_str() == uri
                && !prefix.is_empty()
                && prefix.as_str() != "xml"
                && prefix.as_str() != "xmlns"
        })
        .map(|(prefix, _)| prefix.clone())
}

/// Premier préfixe `nsN` encore libre dans `scope`
pub(crate) fn next_free_prefix(scope: &Namespace) -> String {
    let mut index = 1u32;
    loop {
        let candidate = format!("ns{index}");
        if !scope.contains(&candidate) {
            return candidate;
        }
        index += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(xml: &str) -> Element {
        Element::parse(xml.as_bytes()).unwrap()
    }

    #[test]
    fn test_resolve_prefixed_name() {
        let element = parsed(r#"<root xmlns:ns1="urn:example:faults">ns1:Overload</root>"#);
        let name = QualifiedName::resolve("ns1:Overload", &element).unwrap();
        assert_eq!(name, QualifiedName::new("urn:example:faults", "Overload"));
    }

    #[test]
    fn test_resolve_uses_inherited_declarations() {
        let root = parsed(r#"<root xmlns:ns1="urn:example:faults"><code>ns1:Busy</code></root>"#);
        let code = root.get_child("code").unwrap();
        let name = QualifiedName::resolve("ns1:Busy", code).unwrap();
        assert_eq!(name.namespace, "urn:example:faults");
        assert_eq!(name.local_name, "Busy");
    }

    #[test]
    fn test_resolve_default_namespace() {
        let element = parsed(r#"<root xmlns="urn:example:default">Overload</root>"#);
        let name = QualifiedName::resolve("Overload", &element).unwrap();
        assert_eq!(name.namespace, "urn:example:default");
    }

    #[test]
    fn test_resolve_unknown_prefix_is_an_error() {
        let element = parsed("<root>text</root>");
        let result = QualifiedName::resolve("nope:Overload", &element);
        assert!(matches!(result, Err(SoapError::UnresolvedPrefix(prefix)) if prefix == "nope"));
    }

    #[test]
    fn test_display_is_clark_notation() {
        let name = QualifiedName::new("urn:example:faults", "Overload");
        assert_eq!(name.to_string(), "{urn:example:faults}Overload");
    }
}
