// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration for the PlatePal client core.
//!
//! TOML files merged over compiled defaults, with `PLATEPAL_`-prefixed
//! environment variable overrides. Unknown keys are rejected.

pub mod loader;
pub mod model;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{ApiConfig, ChatConfig, PlatePalConfig, SessionConfig};
