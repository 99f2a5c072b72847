//! Gestion des erreurs pour la couche de messagerie SOAP

use thiserror::Error;

/// Type Result personnalisé pour pmosoap
pub type Result<T> = std::result::Result<T, SoapError>;

/// Erreurs possibles lors du décodage ou de la construction SOAP
#[derive(Error, Debug)]
pub enum SoapError {
    /// Le document n'est pas du XML bien formé
    #[error("XML parse error: {0}")]
    XmlParse(#[from] xmltree::ParseError),

    /// Échec de sérialisation XML
    #[error("XML write error: {0}")]
    XmlWrite(#[from] xmltree::Error),

    /// La racine du document n'est pas une Envelope SOAP
    #[error("Missing SOAP Envelope root element")]
    MissingEnvelope,

    /// L'Envelope ne contient pas de Body
    #[error("Missing Body element in SOAP Envelope")]
    MissingBody,

    /// Le Body ne contient pas de Fault
    #[error("Missing Fault element in SOAP Body")]
    MissingFault,

    /// Fault sans élément faultcode
    #[error("Missing faultcode element in SOAP Fault")]
    MissingFaultCode,

    /// Élément faultcode présent mais vide
    #[error("Empty faultcode in SOAP Fault")]
    EmptyFaultCode,

    /// Fault sans élément faultstring
    #[error("Missing faultstring element in SOAP Fault")]
    MissingFaultString,

    /// Préfixe de namespace sans déclaration visible dans le document
    #[error("Cannot resolve namespace prefix '{0}'")]
    UnresolvedPrefix(String),

    /// faultactor présent mais impossible à interpréter comme URL
    #[error("Invalid faultactor URL: {0}")]
    InvalidFaultActor(#[from] url::ParseError),
}
