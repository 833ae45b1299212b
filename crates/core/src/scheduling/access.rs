// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Access password guarding sweeps and forced runs
//!
//! The configured password is only ever held as a SHA-256 hex digest, and
//! every supplied credential is hashed before comparison.

use sha2::{Digest, Sha256};

/// Value reported when no password is configured
pub const NO_PASSWORD: &str = "NO_PASSWORD";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AccessPassword {
    /// Anyone may trigger jobs
    #[default]
    Open,
    /// SHA-256 hex digest of the password
    Hashed(String),
}

impl AccessPassword {
    /// An empty password means no authentication
    pub fn from_plain(plain: &str) -> Self {
        if plain.is_empty() {
            AccessPassword::Open
        } else {
            AccessPassword::Hashed(hash_password(plain))
        }
    }

    /// Accept a stored digest as-is; empty means no authentication
    pub fn from_hash(hash: &str) -> Self {
        let hash = hash.trim();
        if hash.is_empty() || hash == NO_PASSWORD {
            AccessPassword::Open
        } else {
            AccessPassword::Hashed(hash.to_ascii_lowercase())
        }
    }

    /// The digest, or [`NO_PASSWORD`]
    pub fn as_str(&self) -> &str {
        match self {
            AccessPassword::Open => NO_PASSWORD,
            AccessPassword::Hashed(hash) => hash,
        }
    }

    pub fn verify(&self, supplied: Option<&str>) -> bool {
        match (self, supplied) {
            (AccessPassword::Open, _) => true,
            (AccessPassword::Hashed(_), None) => false,
            (AccessPassword::Hashed(hash), Some(plain)) => hash_password(plain) == *hash,
        }
    }
}

/// SHA-256 hex digest of a plaintext password
pub fn hash_password(plain: &str) -> String {
    let digest = Sha256::digest(plain.as_bytes());
    hex_encode(&digest)
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
