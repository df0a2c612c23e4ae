// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

#![doc = include_str!("../README.md")]
// LINEBENDER LINT SET - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]

use rollcall_core::Settings;
use tracing::Level;
use wasm_bindgen::prelude::wasm_bindgen;

mod apply;
mod bootstrap;
mod error;
mod events;
mod modern_ui;
mod page_api;
mod page_settings;
mod progress_bars;
mod quick_submit;
mod responsive;
mod stylesheet;
mod timers;
mod tracing_backend;
mod ui_enhancements;
mod util;

pub(crate) use error::{Error, Result};
pub use page_api::{
    confirm_action, create_ripple, format_date, format_time, show_loading_state, validate_input,
};

/// Entry point, run by the generated JavaScript glue as soon as the module loads.
///
/// Settings are read and features installed once the document has been parsed,
/// so a settings block anywhere in the page is seen.
#[wasm_bindgen(start)]
pub fn start() {
    let document = util::document();
    if document.ready_state() != "loading" {
        boot();
        return;
    }
    let ready = events::listen(&document, "DOMContentLoaded", |_: web_sys::Event| boot());
    if let Err(err) = ready {
        boot();
        tracing::warn!(%err, "can't wait for the document, installed early");
    }
}

fn boot() {
    let loaded = page_settings::load();
    let max_level = loaded
        .as_ref()
        .ok()
        .and_then(|settings| settings.max_level().ok())
        .unwrap_or(Level::INFO);
    tracing_backend::init(max_level);

    let settings = loaded.unwrap_or_else(|err| {
        tracing::error!(%err, "ignoring page settings");
        Settings::default()
    });
    install_all(&settings);
}

/// Installs every feature; one failing doesn't stop the others.
fn install_all(settings: &Settings) {
    run("quick submit", || quick_submit::install(settings));
    run("progress bars", progress_bars::install);
    run("progress animation", || progress_bars::install_animation(settings));
    run("responsive layout", || {
        let manager = responsive::manager(settings)?;
        responsive::install(&manager)?;
        page_api::publish_responsive(&manager)
    });
    run("modern ui", modern_ui::install);
    run("ui enhancements", || ui_enhancements::install(settings));
    run("page helpers", page_api::publish_ui);
}

/// Runs one installer, logging instead of propagating its failure.
pub(crate) fn run(feature: &'static str, install: impl FnOnce() -> Result<()>) {
    match install() {
        Ok(()) => tracing::debug!(feature, "installed"),
        Err(err) => tracing::error!(feature, %err, "failed to install"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failing_installer_does_not_stop_the_next() {
        let mut installed = Vec::new();
        run("first", || {
            installed.push("first");
            Ok(())
        });
        run("second", || Err(Error::MissingElement(".missing")));
        run("third", || {
            installed.push("third");
            Ok(())
        });
        assert_eq!(installed, ["first", "third"]);
    }
}
