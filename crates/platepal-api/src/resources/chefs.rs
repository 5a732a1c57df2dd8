// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chef listing operations.

use platepal_core::{ChefId, PlatePalError};

use crate::client::ApiClient;
use crate::types::Chef;

/// List all chefs visible to the current user.
pub async fn list_chefs(client: &ApiClient) -> Result<Vec<Chef>, PlatePalError> {
    client.get_json("/chefs").await
}

/// Fetch one chef's listing.
pub async fn get_chef(client: &ApiClient, id: &ChefId) -> Result<Chef, PlatePalError> {
    client.get_json(&format!("/chefs/{}", id.0)).await
}
