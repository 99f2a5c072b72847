//! Exemple d'invocation d'une opération SOAP
//!
//! Cet exemple montre comment :
//! - Invoquer une opération sur un endpoint de service web
//! - Distinguer un fault SOAP d'une erreur de transport
//! - Extraire une valeur du Body de la réponse

use pmosoapclient::{SoapCallError, extract_child_text, find_child, invoke};

fn main() -> anyhow::Result<()> {
    // Initialiser le logging
    tracing_subscriber::fmt::init();

    let endpoint = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://127.0.0.1:8080/ws".to_string());

    println!("Invocation de GetStatus sur {endpoint}...");

    match invoke(&endpoint, "urn:example-service:1", "GetStatus", &[("Verbose", "1")]) {
        Ok(result) => {
            println!("✓ HTTP {}", result.status);
            if let Some(operation) = find_child(result.envelope.body(), "GetStatusResponse") {
                println!("  Status: {}", extract_child_text(operation, "Status")?);
            } else {
                println!("{}", result.raw_body);
            }
        }
        Err(SoapCallError::Fault(fault)) => {
            println!("✗ Le service a signalé un fault : {fault}");
        }
        Err(error) => return Err(error.into()),
    }

    Ok(())
}
