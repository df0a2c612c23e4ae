// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

use rollcall_core::Settings;

use crate::Result;
use crate::util::document;

/// Id of the `<script type="application/json">` block holding per-page overrides.
pub(crate) const SETTINGS_ELEMENT_ID: &str = "rollcall-settings";

/// Reads the page's settings, falling back to the defaults when the page has none.
pub(crate) fn load() -> Result<Settings> {
    let Some(element) = document().get_element_by_id(SETTINGS_ELEMENT_ID) else {
        return Ok(Settings::default());
    };
    let text = element.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(Settings::default());
    }
    let settings: Settings = serde_json::from_str(&text)?;
    settings.validate()?;
    Ok(settings)
}
