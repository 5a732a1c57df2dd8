// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Order billing for PlatePal: bill computation and multi-chef splitting.
//!
//! Pure functions over line items; no I/O and no stored state.

pub mod bill;
pub mod split;

pub use bill::{Bill, compute_bill, format_amount, GOLD_DISCOUNT_RATE, PLATFORM_FEE, TAX_RATE};
pub use split::{ChefOrderDraft, split_by_chef};
