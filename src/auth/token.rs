//
//  cloudflare-client
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Secret Input Helpers
//!
//! Small helpers for accepting API tokens and keys from the terminal. They only
//! check the shape of a secret; whether it is accepted is decided by the API
//! (see [`UserTokens::verify`](crate::api::resources::UserTokens::verify)).

use anyhow::{Context, Result};

/// Reads a secret from standard input.
///
/// Reads a single line and trims surrounding whitespace, so both
/// `echo "$TOKEN" | cf config set auth.token` and interactive paste work.
///
/// # Returns
///
/// Returns `Ok(String)` containing the trimmed secret, or `Err` if stdin
/// could not be read.
///
/// # Notes
///
/// - Only the first line is read; subsequent input is ignored.
pub fn read_token_from_stdin() -> Result<String> {
    use std::io::{self, BufRead};

    let stdin = io::stdin();
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("Failed to read secret from stdin")?;

    Ok(line.trim().to_string())
}

/// Validates the format of a token or key string.
///
/// A secret must be non-empty and must not contain whitespace. This is a
/// format check only.
///
/// # Example
///
/// ```rust
/// use cloudflare_client::auth::validate_token;
///
/// assert!(validate_token("Y2xvdWRmbGFyZS10b2tlbg"));
/// assert!(validate_token("v1.0-abcdef"));
///
/// assert!(!validate_token(""));
/// assert!(!validate_token("has space"));
/// assert!(!validate_token("has\nnewline"));
/// ```
pub fn validate_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}

/// Masks a secret for display, keeping only its last four characters.
///
/// # Example
///
/// ```rust
/// use cloudflare_client::auth::mask_secret;
///
/// assert_eq!(mask_secret("abcdefgh1234"), "********1234");
/// assert_eq!(mask_secret("abc"), "***");
/// ```
pub fn mask_secret(secret: &str) -> String {
    let len = secret.chars().count();
    if len <= 4 {
        return "*".repeat(len);
    }

    let tail: String = secret.chars().skip(len - 4).collect();
    format!("{}{}", "*".repeat(len - 4), tail)
}
