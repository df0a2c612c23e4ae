// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// LINEBENDER LINT SET - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]

mod patch;
pub use patch::{
    AttributeModifier, ClassModifier, CowStr, ElementPatch, Label, Reaction, StyleModifier,
    VirtualElement,
};

mod schedule;
pub use schedule::{ManualClock, Scheduler, TimerHandle};

mod settings;
pub use settings::{Colors, Delays, Settings, SettingsError};

pub mod accessibility;
pub mod animation;
pub mod breakpoint;
pub mod format;
pub mod forms;
pub mod layout;
pub mod navigation;
pub mod notifications;
pub mod progress;
pub mod quick_submit;
pub mod ripple;
pub mod status;
pub mod table;

pub use breakpoint::{Breakpoint, Breakpoints, DeviceClass, ResponsiveManager, Viewport};
