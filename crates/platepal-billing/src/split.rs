// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Multi-chef order splitting.
//!
//! A single checkout is split into one backend order per contributing chef.
//! Discount, tax, and platform fee stay checkout-level amounts on the
//! combined cart; the per-chef drafts only carry their own line items and
//! subtotal.

use serde::{Deserialize, Serialize};

use platepal_core::{ChefId, LineItem};

/// The per-chef slice of a multi-chef checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChefOrderDraft {
    pub chef_id: ChefId,
    pub line_items: Vec<LineItem>,
    /// Sum of `unit_price * quantity` over this chef's lines.
    pub subtotal: f64,
}

/// Group a checkout's line items by chef, one draft per contributing chef.
///
/// Chefs appear in first-appearance order of their items, so the split is
/// deterministic for a given cart.
pub fn split_by_chef(line_items: &[LineItem]) -> Vec<ChefOrderDraft> {
    let mut drafts: Vec<ChefOrderDraft> = Vec::new();

    for item in line_items {
        let line_total = item.unit_price * f64::from(item.quantity);
        match drafts.iter_mut().find(|d| d.chef_id == item.chef_id) {
            Some(draft) => {
                draft.line_items.push(item.clone());
                draft.subtotal += line_total;
            }
            None => drafts.push(ChefOrderDraft {
                chef_id: item.chef_id.clone(),
                line_items: vec![item.clone()],
                subtotal: line_total,
            }),
        }
    }

    drafts
}

#[cfg(test)]
mod tests {
    use super::*;
    use platepal_core::MenuItemId;

    fn item(chef: &str, price: f64, qty: u32) -> LineItem {
        LineItem {
            menu_item_id: MenuItemId(format!("dish-{chef}-{price}")),
            chef_id: ChefId(chef.to_string()),
            unit_price: price,
            quantity: qty,
        }
    }

    #[test]
    fn empty_cart_splits_to_nothing() {
        assert!(split_by_chef(&[]).is_empty());
    }

    #[test]
    fn single_chef_cart_yields_one_draft() {
        let drafts = split_by_chef(&[item("a", 10.0, 1), item("a", 5.0, 2)]);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].chef_id, ChefId("a".into()));
        assert_eq!(drafts[0].line_items.len(), 2);
        assert!((drafts[0].subtotal - 20.0).abs() < 1e-10);
    }

    #[test]
    fn chefs_keep_first_appearance_order() {
        let drafts = split_by_chef(&[
            item("b", 10.0, 1),
            item("a", 20.0, 1),
            item("b", 5.0, 1),
        ]);
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].chef_id, ChefId("b".into()));
        assert_eq!(drafts[1].chef_id, ChefId("a".into()));
        assert!((drafts[0].subtotal - 15.0).abs() < 1e-10);
    }

    #[test]
    fn draft_subtotals_sum_to_cart_subtotal() {
        let cart = vec![
            item("a", 12.5, 2),
            item("b", 40.0, 1),
            item("c", 7.5, 4),
            item("a", 3.0, 1),
        ];
        let cart_subtotal: f64 = cart
            .iter()
            .map(|i| i.unit_price * f64::from(i.quantity))
            .sum();
        let split_subtotal: f64 = split_by_chef(&cart).iter().map(|d| d.subtotal).sum();
        assert!((cart_subtotal - split_subtotal).abs() < 1e-10);
    }
}
