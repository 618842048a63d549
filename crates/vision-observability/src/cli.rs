// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Per-crate debug switches.
//!
//! A process raises individual crates to `debug` without touching the global
//! level, either with `--debug-vision-client` style arguments or through
//! `VISION_CLIENTS_DEBUG=vision-client,vision-config`. `all` (or `--debug-all`)
//! expands to every crate in [`KNOWN_CRATES`].

use std::collections::BTreeSet;
use std::env;

use crate::KNOWN_CRATES;

/// Environment variable listing crates to debug (comma-separated, or `all`)
pub const DEBUG_ENV: &str = "VISION_CLIENTS_DEBUG";

const ARG_PREFIX: &str = "--debug-";

/// Crates whose events are let through at `debug`.
///
/// Names are stored as tracing targets (`vision_client`), so `vision-client`
/// and `vision_client` name the same crate.
///
/// ```rust
/// use vision_observability::CrateDebugFlags;
///
/// let flags = CrateDebugFlags::from_args(["--debug-vision-client"]);
/// assert!(flags.is_enabled("vision-client"));
/// assert_eq!(flags.to_filter_string("warn"), "vision_client=debug,warn");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrateDebugFlags {
    targets: BTreeSet<String>,
}

fn target_name(crate_name: &str) -> String {
    crate_name.trim().replace('-', "_")
}

impl CrateDebugFlags {
    /// Collect `--debug-<crate>` and `--debug-all` from an argument list.
    /// Other arguments are ignored.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flags = Self::default();
        for arg in args {
            if let Some(crate_name) = arg.as_ref().strip_prefix(ARG_PREFIX) {
                flags.enable(crate_name);
            }
        }
        flags
    }

    /// Add the crates named by a `VISION_CLIENTS_DEBUG` style value
    pub fn merge_list(&mut self, list: &str) {
        for crate_name in list.split(',') {
            self.enable(crate_name);
        }
    }

    /// Turn on one crate. `all` turns on every known crate; blank names are skipped.
    pub fn enable(&mut self, crate_name: &str) {
        match crate_name.trim() {
            "" => {}
            "all" => self.enable_all(),
            name => {
                self.targets.insert(target_name(name));
            }
        }
    }

    pub fn enable_all(&mut self) {
        self.targets
            .extend(KNOWN_CRATES.iter().map(|name| target_name(name)));
    }

    pub fn is_enabled(&self, crate_name: &str) -> bool {
        self.targets.contains(&target_name(crate_name))
    }

    /// `EnvFilter` directives: one `<target>=debug` per crate, in name order,
    /// followed by `default_level` for everything else.
    pub fn to_filter_string(&self, default_level: &str) -> String {
        self.targets
            .iter()
            .map(|target| format!("{}=debug", target))
            .chain(std::iter::once(default_level.to_string()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Debug flags for this process: its arguments plus [`DEBUG_ENV`]
pub fn parse_debug_flags() -> CrateDebugFlags {
    let mut flags = CrateDebugFlags::from_args(env::args());
    if let Ok(list) = env::var(DEBUG_ENV) {
        flags.merge_list(&list);
    }
    flags
}
