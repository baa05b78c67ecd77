//! Decoder for Cloudflare's `data-cfemail` address obfuscation.
//!
//! The payload is a hex string. The first byte is a random key; every
//! following byte is one character of the address XORed with that key.

use hex::FromHexError;

use crate::error::DecodeError;

/// Decodes a `data-cfemail` payload, failing closed to an empty string.
///
/// Malformed input is logged at warn level and never panics.
#[must_use]
pub fn decode_cfemail(encoded: &str) -> String {
    match try_decode_cfemail(encoded) {
        Ok(email) => email,
        Err(error) => {
            tracing::warn!(encoded, %error, "could not decode obfuscated email");
            String::new()
        }
    }
}

/// Decodes a `data-cfemail` payload, reporting why malformed input failed.
///
/// Each decoded byte is taken as a Latin-1 code point.
///
/// # Errors
///
/// - [`DecodeError::TooShort`]: an empty payload, with no key byte.
/// - [`DecodeError::OddLength`]: a trailing half byte.
/// - [`DecodeError::InvalidHex`]: a character outside `[0-9a-fA-F]`.
pub fn try_decode_cfemail(encoded: &str) -> Result<String, DecodeError> {
    let bytes = hex::decode(encoded).map_err(|e| match e {
        FromHexError::InvalidHexCharacter { index, .. } => DecodeError::InvalidHex(index),
        FromHexError::OddLength | FromHexError::InvalidStringLength => {
            DecodeError::OddLength(encoded.len())
        }
    })?;

    let (&key, payload) = bytes.split_first().ok_or(DecodeError::TooShort)?;
    Ok(payload.iter().map(|&b| char::from(b ^ key)).collect())
}
