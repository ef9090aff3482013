//! # addy
//!
//! Derive an address from an Ed25519 private key.
//!
//! The private key is the 64-byte `seed || public key` form, base64 encoded.
//! The public key is re-derived from the 32-byte seed half, hashed with
//! SHA-256, and the first 20 bytes of the hash are the address, printed as
//! lowercase hex.
//!
//! ```rust
//! let b64 = "V2Ugc2V0IHlvdSB1cCB0aGUgYm9tYi4gOmdhc3A6IEFsbCB5b3VyIGJhc2U2NCBhcmUgYmVsb25nIHRvIHVzLg==";
//! assert_eq!(
//!     addy::address_from_base64(b64).unwrap(),
//!     "47b1c8dbdded736f5c9174965794137ed580c935"
//! );
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ed25519_dalek::SigningKey;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;

/// Length of an Ed25519 private key in `seed || public key` form.
pub const PRIVATE_KEY_LEN: usize = 64;

/// Length of a derived address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// Errors from decoding a private key.
#[derive(Error, Debug)]
pub enum AddressError {
    #[error("error decoding base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("expecting {expected} bytes. Got {actual}")]
    KeyLength { expected: usize, actual: usize },
}

/// Derive the address of a 64-byte Ed25519 private key.
///
/// Only the seed half is used; the trailing public key half is ignored.
pub fn derive_address(private_key: &[u8; PRIVATE_KEY_LEN]) -> [u8; ADDRESS_LEN] {
    let mut seed = [0u8; 32];
    seed.copy_from_slice(&private_key[..32]);
    let public_key = SigningKey::from_bytes(&seed).verifying_key();

    let hash: [u8; 32] = Sha256::digest(public_key.as_bytes()).into();
    let mut address = [0u8; ADDRESS_LEN];
    address.copy_from_slice(&hash[..ADDRESS_LEN]);
    address
}

/// Decode a base64 private key and return its address as lowercase hex.
///
/// Line breaks anywhere in the input and surrounding whitespace are ignored,
/// so `echo`-piped input works as is.
pub fn address_from_base64(text: &str) -> Result<String, AddressError> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .collect();
    let bytes = STANDARD.decode(cleaned)?;
    let private_key: [u8; PRIVATE_KEY_LEN] =
        bytes.as_slice().try_into().map_err(|_| AddressError::KeyLength {
            expected: PRIVATE_KEY_LEN,
            actual: bytes.len(),
        })?;
    debug!("decoded private key");
    Ok(hex::encode(derive_address(&private_key)))
}
