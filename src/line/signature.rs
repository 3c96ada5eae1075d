// ABOUTME: LINE webhook signature validation using HMAC-SHA256 over the raw request body
// ABOUTME: Compares base64 signatures in constant time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use base64::{engine::general_purpose::STANDARD, Engine as _};
use ring::hmac;
use subtle::ConstantTimeEq;

/// Webhook signature validation result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureValidation {
    /// Signature matches the body
    Valid,
    /// Signature does not match the body
    Invalid,
    /// Signature header is missing
    Missing,
}

/// Validates `X-Line-Signature` headers
pub struct LineSignatureValidator {
    key: hmac::Key,
}

impl LineSignatureValidator {
    /// Create a validator for a channel secret
    #[must_use]
    pub fn new(channel_secret: &str) -> Self {
        Self {
            key: hmac::Key::new(hmac::HMAC_SHA256, channel_secret.as_bytes()),
        }
    }

    /// Base64 HMAC-SHA256 signature of `body`
    #[must_use]
    pub fn sign(&self, body: &[u8]) -> String {
        STANDARD.encode(hmac::sign(&self.key, body).as_ref())
    }

    /// Validate a webhook request signature
    ///
    /// # Arguments
    /// * `signature_header` - Value of the `X-Line-Signature` header
    /// * `body` - Raw request body bytes
    #[must_use]
    pub fn validate(&self, signature_header: Option<&str>, body: &[u8]) -> SignatureValidation {
        let Some(signature) = signature_header.map(str::trim) else {
            return SignatureValidation::Missing;
        };

        let expected = self.sign(body);

        // Constant-time comparison to prevent timing attacks
        if signature.as_bytes().ct_eq(expected.as_bytes()).into() {
            SignatureValidation::Valid
        } else {
            SignatureValidation::Invalid
        }
    }
}

impl std::fmt::Debug for LineSignatureValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineSignatureValidator")
            .field("key", &"[REDACTED]")
            .finish()
    }
}
