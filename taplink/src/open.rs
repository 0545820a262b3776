// Copyright 2025 the Taplink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! URL opening via the host environment.

use url::Url;

/// Host facility that can open a URL on the user's behalf.
///
/// Opening is fire-and-forget: there is no completion signal back, and a
/// failure to open is not observable by the caller.
pub trait UrlOpener {
    /// Ask the host environment to open `url`.
    fn open(&self, url: &Url);
}

/// Opens URLs with the platform's default handler.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &Url) {
        #[cfg(target_os = "macos")]
        let _ = std::process::Command::new("open").arg(url.as_str()).spawn();
        #[cfg(target_os = "linux")]
        let _ = std::process::Command::new("xdg-open")
            .arg(url.as_str())
            .spawn();
        #[cfg(not(any(target_os = "macos", target_os = "linux")))]
        let _ = url;
    }
}
