// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::layout::RouterConfig;
use crate::render::RenderOptions;

/// Router and renderer settings, read from a TOML file:
///
/// ```toml
/// [router]
/// grid_size = 50
/// max_walk_runs = 100
///
/// [render]
/// palette = "bright"
/// ```
///
/// Missing tables and keys keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewireConfig {
    pub router: RouterConfig,
    pub render: RenderOptions,
}

impl GatewireConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads `path`, falling back to defaults when the file is missing or malformed.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("loaded config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("config {} is malformed, using defaults: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("cannot read config {}, using defaults: {err}", path.display());
                Self::default()
            }
        }
    }
}
