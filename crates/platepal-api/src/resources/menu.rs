// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Menu item operations.

use platepal_core::{ChefId, PlatePalError};

use crate::client::ApiClient;
use crate::types::MenuItem;

/// List menu items, optionally restricted to one chef's kitchen.
pub async fn list_menu_items(
    client: &ApiClient,
    chef: Option<&ChefId>,
) -> Result<Vec<MenuItem>, PlatePalError> {
    let path = match chef {
        Some(chef) => format!("/menu-items?chefId={}", chef.0),
        None => "/menu-items".to_string(),
    };
    client.get_json(&path).await
}
