//! Namehash algorithms
//!
//! Both protocols hash a domain right to left, starting from 32 zero bytes:
//!
//! ```text
//! node = H(node || H(label))
//! ```
//!
//! ENS and CNS use keccak-256 (EIP-137), ZNS uses sha-256.

use nameroute_domain::NamingServiceKind;
use sha2::Sha256;
use sha3::{Digest, Keccak256};

fn namehash_with<D: Digest>(domain: &str) -> [u8; 32] {
    let mut node = [0u8; 32];
    if domain.is_empty() {
        return node;
    }

    let normalized = domain.to_ascii_lowercase();
    for label in normalized.rsplit('.') {
        let label_hash = D::digest(label.as_bytes());
        let mut hasher = D::new();
        hasher.update(node);
        hasher.update(label_hash);
        node.copy_from_slice(&hasher.finalize()[..32]);
    }
    node
}

pub fn ens_namehash_bytes(domain: &str) -> [u8; 32] {
    namehash_with::<Keccak256>(domain)
}

pub fn zns_namehash_bytes(domain: &str) -> [u8; 32] {
    namehash_with::<Sha256>(domain)
}

pub fn to_hex(node: &[u8]) -> String {
    format!("0x{}", hex::encode(node))
}

pub fn ens_namehash(domain: &str) -> String {
    to_hex(&ens_namehash_bytes(domain))
}

pub fn zns_namehash(domain: &str) -> String {
    to_hex(&zns_namehash_bytes(domain))
}

pub fn namehash_for(kind: NamingServiceKind, domain: &str) -> String {
    match kind {
        NamingServiceKind::Ens | NamingServiceKind::Cns => ens_namehash(domain),
        NamingServiceKind::Zns => zns_namehash(domain),
    }
}
