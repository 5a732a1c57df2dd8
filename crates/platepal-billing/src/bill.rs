// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Order bill computation.
//!
//! The bill is derived, never stored. All amounts are computed at full `f64`
//! precision; two-decimal rounding is a display concern handled by
//! [`format_amount`].
//!
//! Gold plan: 5% discount on the subtotal and a waived platform fee.
//! Everyone else pays the flat platform fee. Tax is 2% of the discounted
//! subtotal.

use serde::{Deserialize, Serialize};

use platepal_core::LineItem;

/// Flat per-order charge retained by the platform, in currency units.
/// Waived for Gold subscribers.
pub const PLATFORM_FEE: f64 = 8.0;

/// Tax rate applied to (subtotal - discount).
pub const TAX_RATE: f64 = 0.02;

/// Gold plan discount rate applied to the subtotal.
pub const GOLD_DISCOUNT_RATE: f64 = 0.05;

/// A computed order bill.
///
/// Invariant: `total = subtotal - discount_amount + tax_amount + platform_fee`,
/// and `discount_amount` / the fee waiver are nonzero only when an active
/// Gold subscription was set at computation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub subtotal: f64,
    pub discount_amount: f64,
    pub tax_amount: f64,
    pub platform_fee: f64,
    pub total: f64,
}

/// Compute the bill for a cart or order.
///
/// An empty line-item list yields an all-zero bill, not an error. Negative
/// quantities are not validated here; that is the REST layer's concern.
pub fn compute_bill(line_items: &[LineItem], has_active_subscription: bool) -> Bill {
    if line_items.is_empty() {
        return Bill {
            subtotal: 0.0,
            discount_amount: 0.0,
            tax_amount: 0.0,
            platform_fee: 0.0,
            total: 0.0,
        };
    }

    let subtotal: f64 = line_items
        .iter()
        .map(|item| item.unit_price * f64::from(item.quantity))
        .sum();

    let (discount_amount, platform_fee) = if has_active_subscription {
        (subtotal * GOLD_DISCOUNT_RATE, 0.0)
    } else {
        (0.0, PLATFORM_FEE)
    };

    let tax_amount = (subtotal - discount_amount) * TAX_RATE;
    let total = subtotal - discount_amount + tax_amount + platform_fee;

    Bill {
        subtotal,
        discount_amount,
        tax_amount,
        platform_fee,
        total,
    }
}

/// Format an amount for display with two decimals.
///
/// Presentation only; never feed formatted values back into computation.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}
