//! Private-key-to-address derivation.
//!
//! A credential is a hex-encoded secp256k1 secret key (an optional `0x`
//! prefix is accepted). The wallet address is the standard Ethereum
//! construction: Keccak-256 of the uncompressed public key without its
//! leading `0x04` byte, last 20 bytes of the digest, EIP-55 checksum
//! encoded.

use crate::accounts::Credential;
use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use sha3::{Digest, Keccak256};

/// Errors that can occur while deriving an address from a credential
#[derive(Debug, thiserror::Error)]
pub enum DerivationError {
    #[error("private key is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("private key must be exactly 32 bytes, got {got}")]
    InvalidLength { got: usize },

    #[error("private key is not a valid secp256k1 scalar")]
    InvalidScalar(#[from] k256::ecdsa::Error),
}

/// Derive the EIP-55 checksummed wallet address for a credential
pub fn derive_address(credential: &Credential) -> Result<String, DerivationError> {
    let key_hex = credential.expose().trim();
    let key_hex = key_hex.strip_prefix("0x").unwrap_or(key_hex);

    let bytes = hex::decode(key_hex)?;
    if bytes.len() != 32 {
        return Err(DerivationError::InvalidLength { got: bytes.len() });
    }

    let signing_key = SigningKey::from_slice(&bytes)?;
    let public_key = signing_key.verifying_key().to_encoded_point(false);

    // Keccak-256 over X||Y, skipping the 0x04 SEC1 tag byte
    let digest = Keccak256::digest(&public_key.as_bytes()[1..]);
    Ok(to_checksum_address(&digest[12..]))
}

/// EIP-55 checksum encoding of a 20-byte address
fn to_checksum_address(address: &[u8]) -> String {
    let lower = hex::encode(address);
    let digest = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        // Nibble i of the digest decides the case of hex digit i
        let nibble = if i % 2 == 0 {
            digest[i / 2] >> 4
        } else {
            digest[i / 2] & 0x0f
        };
        if nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
