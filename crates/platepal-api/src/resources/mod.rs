// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-resource REST operations.
//!
//! Thin typed wrappers: one module per backend resource, free functions over
//! a shared [`crate::client::ApiClient`].

pub mod chat;
pub mod chefs;
pub mod menu;
pub mod orders;
pub mod ratings;
pub mod subscriptions;
pub mod users;
