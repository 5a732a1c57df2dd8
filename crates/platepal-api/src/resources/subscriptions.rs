// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subscription operations.

use platepal_core::PlatePalError;

use crate::client::ApiClient;
use crate::types::Subscription;

/// Fetch the current user's subscription state.
///
/// Billing reads `gold_active()` from the result at checkout time; the
/// discount and fee waiver apply only while the Gold flag is active.
pub async fn current_subscription(client: &ApiClient) -> Result<Subscription, PlatePalError> {
    client.get_json("/subscriptions/me").await
}
