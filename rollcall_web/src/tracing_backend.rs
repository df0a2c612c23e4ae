// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! Routes `tracing` events to the browser console.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

/// Installs the console subscriber and the panic hook.
///
/// Calling this twice keeps the first subscriber.
pub(crate) fn init(max_level: Level) {
    // Ignored if the panic hook is already set
    console_error_panic_hook::set_once();

    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(max_level)
        .build();
    let subscriber =
        tracing_subscriber::Registry::default().with(tracing_wasm::WASMLayer::new(config));

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("a tracing subscriber is already installed");
    }
}
