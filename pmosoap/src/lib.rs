//! # pmosoap - Couche de messagerie SOAP 1.1
//!
//! Ce crate implémente le modèle de protocole SOAP côté client : enveloppes,
//! faults typés et construction de requêtes d'opérations.
//!
//! ## Fonctionnalités
//!
//! - ✅ Construction d'enveloppes (Body garanti, Header créé à la demande)
//! - ✅ Parsing d'enveloppes avec recherche qualifiée par namespace
//! - ✅ Décodage et sérialisation des SOAP Faults
//! - ✅ Résolution de préfixes dans le contexte du document d'origine
//! - ✅ Codes de fault SOAP 1.1 standards
//!
//! ## Architecture
//!
//! - [`SoapEnvelope`] : Enveloppe SOAP complète
//! - [`SoapFault`] : Erreur SOAP typée, détachée du document
//! - [`QualifiedName`] : Nom qualifié (URI de namespace, nom local)
//! - [`parse_envelope`] : Décodage d'une réponse en enveloppe
//! - [`build_request`] : Construction d'une requête d'opération
//!
//! ## Example
//!
//! ```
//! let xml = br#"<?xml version="1.0"?>
//! <s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
//!   <s:Body>
//!     <u:GetStatusResponse xmlns:u="urn:example-service:1">
//!       <Status>OK</Status>
//!     </u:GetStatusResponse>
//!   </s:Body>
//! </s:Envelope>"#;
//!
//! let envelope = pmosoap::parse_envelope(xml).unwrap();
//! assert!(envelope.header().is_none());
//! assert_eq!(envelope.body().name, "Body");
//! ```

mod builder;
mod envelope;
mod errors;
mod fault;
mod parser;
mod qname;

pub use builder::{build_fault_response, build_request};
pub use envelope::{NS_SOAP, SoapEnvelope};
pub use errors::{Result, SoapError};
pub use fault::SoapFault;
pub use parser::{find_fault, parse_envelope};
pub use qname::QualifiedName;

/// Codes de fault SOAP 1.1 standards
pub mod fault_codes {
    use crate::envelope::NS_SOAP;
    use crate::qname::QualifiedName;

    /// Version d'enveloppe non supportée
    pub fn version_mismatch() -> QualifiedName {
        QualifiedName::new(NS_SOAP, "VersionMismatch")
    }

    /// En-tête marqué mustUnderstand non compris
    pub fn must_understand() -> QualifiedName {
        QualifiedName::new(NS_SOAP, "MustUnderstand")
    }

    /// Requête invalide côté client
    pub fn client() -> QualifiedName {
        QualifiedName::new(NS_SOAP, "Client")
    }

    /// Échec de traitement côté serveur
    pub fn server() -> QualifiedName {
        QualifiedName::new(NS_SOAP, "Server")
    }
}
