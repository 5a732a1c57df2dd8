// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rating operations.

use platepal_core::{ChefId, OrderId, PlatePalError};

use crate::client::ApiClient;
use crate::types::{RateOrderRequest, Rating};

/// Rate a delivered order.
pub async fn rate_order(
    client: &ApiClient,
    order: &OrderId,
    request: &RateOrderRequest,
) -> Result<Rating, PlatePalError> {
    client
        .post_json(&format!("/orders/{}/ratings", order.0), request)
        .await
}

/// List the ratings left for one chef.
pub async fn list_chef_ratings(
    client: &ApiClient,
    chef: &ChefId,
) -> Result<Vec<Rating>, PlatePalError> {
    client.get_json(&format!("/chefs/{}/ratings", chef.0)).await
}
