// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Reusable egui components structured for MVU-style updates.

pub mod checkbox;
pub mod date_picker;
pub mod file_input;
pub mod registration;
pub mod registration_success;
pub mod transactions;
