// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: request/response records and the backend's choice lists.

#[macro_use]
mod choices;

pub mod player;
pub mod registration;
pub mod transactions;
pub mod vaccination;
