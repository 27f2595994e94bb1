// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by UI and the API client.

pub mod cookies;
pub mod mime;

/// Extract a single cookie value from a `Cookie` header.
pub use cookies::cookie_value;
/// Guess the MIME type of an upload from its extension.
pub use mime::guess_mime;
