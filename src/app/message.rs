// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{contact_form, header};
use iced::Size;

/// Top-level messages consumed by `App::update`. The variants forward
/// section messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    ContactForm(contact_form::Message),
    /// The main window changed size; the layout tier may change.
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional language override in BCP-47 form (e.g. `en`, `ru-RU`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ZEN_CAT_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
