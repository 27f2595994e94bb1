// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic that talks to the membership backend.

pub mod api;

#[cfg(test)]
pub(crate) mod test_support;
