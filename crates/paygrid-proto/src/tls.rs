//! Mutual-TLS material for one peer role.
//!
//! Every process reads `ca.crt`, `<role>.crt`, and `<role>.key` from a
//! `certs/` directory once at startup; all peers authenticate against the
//! same CA.

use std::path::Path;
use thiserror::Error;
use tonic::transport::{Certificate, ClientTlsConfig, Identity, ServerTlsConfig};

#[derive(Debug, Error)]
pub enum TlsError {
    #[error("failed to read TLS material '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Identity and CA root for one role (`bank_a`..`bank_e`, `gateway`,
/// `client`), read once and never mutated.
#[derive(Debug, Clone)]
pub struct TlsMaterial {
    identity: Identity,
    ca: Certificate,
}

impl TlsMaterial {
    pub fn load(certs_dir: &Path, role: &str) -> Result<Self, TlsError> {
        let read = |name: String| {
            let path = certs_dir.join(&name);
            std::fs::read(&path).map_err(|source| TlsError::Io {
                path: path.display().to_string(),
                source,
            })
        };

        let cert = read(format!("{role}.crt"))?;
        let key = read(format!("{role}.key"))?;
        let ca = read("ca.crt".to_string())?;

        Ok(Self {
            identity: Identity::from_pem(cert, key),
            ca: Certificate::from_pem(ca),
        })
    }

    /// Server side: present our identity and require client certificates
    /// signed by the shared CA.
    pub fn server_config(&self) -> ServerTlsConfig {
        ServerTlsConfig::new()
            .identity(self.identity.clone())
            .client_ca_root(self.ca.clone())
    }

    /// Client side: present our identity and verify the peer against the
    /// shared CA, expecting `domain` on its certificate.
    pub fn client_config(&self, domain: &str) -> ClientTlsConfig {
        ClientTlsConfig::new()
            .identity(self.identity.clone())
            .ca_certificate(self.ca.clone())
            .domain_name(domain)
    }
}
