// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Current-user profile operations.

use platepal_core::{PlatePalError, UserProfile};

use crate::client::ApiClient;

/// Fetch the authenticated user's profile.
///
/// A 401 here means the token is no longer accepted; the session layer
/// reacts by forcing a logout.
pub async fn current_user(client: &ApiClient) -> Result<UserProfile, PlatePalError> {
    client.get_json("/users/me").await
}
