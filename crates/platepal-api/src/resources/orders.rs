// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Order operations.

use platepal_core::{OrderId, PlatePalError};

use crate::client::ApiClient;
use crate::types::{Order, PlaceOrderRequest};

/// List the authenticated user's orders (students see their purchases,
/// chefs their incoming orders).
pub async fn list_orders(client: &ApiClient) -> Result<Vec<Order>, PlatePalError> {
    client.get_json("/orders").await
}

/// Fetch a single order.
pub async fn get_order(client: &ApiClient, id: &OrderId) -> Result<Order, PlatePalError> {
    client.get_json(&format!("/orders/{}", id.0)).await
}

/// Place a checkout.
///
/// The backend splits a multi-chef cart into one order record per
/// contributing chef and returns every created order.
pub async fn place_order(
    client: &ApiClient,
    request: &PlaceOrderRequest,
) -> Result<Vec<Order>, PlatePalError> {
    client.post_json("/orders", request).await
}
