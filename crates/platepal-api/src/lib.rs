// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed REST clients for the PlatePal backend.
//!
//! One shared [`ApiClient`] (bearer auth, JSON, error-taxonomy mapping) and
//! per-resource operations under [`resources`]. These are thin I/O wrappers;
//! the interesting behavior lives in the crates that consume them.

pub mod client;
pub mod resources;
pub mod types;

pub use client::ApiClient;
pub use types::{
    ApiErrorBody, Chef, ChatEnabled, ChatHistoryPage, MenuItem, Order, PlaceOrderRequest,
    RateOrderRequest, Rating, Subscription, SubscriptionPlan,
};
