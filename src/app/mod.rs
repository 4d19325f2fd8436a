// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct owns the localization store, the page sections and the
//! pending form-reset timer, and translates section events into side effects
//! such as a language switch or a deferred reset.

mod message;
mod page;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use page::{Page, Section, REFRESH_ORDER};
pub use update::toggle_language;

use crate::config;
use crate::error::Result;
use crate::i18n::{self, fluent::I18n, Language};
use crate::ui::layout::LayoutTier;
use crate::ui::state::ResetDelay;
use crate::ui::theming::ThemeConfig;
use iced::{task, window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    page: Page,
    theme: ThemeConfig,
    layout: LayoutTier,
    reset_delay: ResetDelay,
    /// Pending form reset. Dropping the handle aborts the timer.
    reset_timer: Option<task::Handle>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("language", &self.i18n.current_language())
            .field("layout", &self.layout)
            .field("reset_delay", &self.reset_delay)
            .field("reset_pending", &self.reset_timer.is_some())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(app: App) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot closure; the prepared state is handed
    // over on the first and only call.
    let boot_state = RefCell::new(Some(app));
    let boot = move || {
        let app = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        (app, Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration, resolves the startup language and builds the
    /// localization store.
    ///
    /// A broken configuration file only produces a warning. Failing to build
    /// the localization store is fatal.
    pub fn new(flags: Flags) -> Result<Self> {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));
        if let Some(warning) = config_warning {
            log::warn!("{warning}");
        }

        let language = i18n::resolve_language(flags.lang.as_deref(), &config);
        let i18n = I18n::new(language)?;
        for (missing_in, key) in i18n.asymmetric_keys() {
            log::warn!("translation {key:?} is missing for {missing_in}");
        }

        log::info!("starting in {language}");
        Ok(Self::with_i18n(i18n, config.contact.reset_delay()))
    }

    /// Builds the application around an existing localization store.
    #[must_use]
    pub fn with_i18n(i18n: I18n, reset_delay: ResetDelay) -> Self {
        let page = Page::new(&i18n);
        Self {
            i18n,
            page,
            theme: ThemeConfig::default(),
            layout: LayoutTier::from_width(config::WINDOW_DEFAULT_WIDTH),
            reset_delay,
            reset_timer: None,
        }
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    pub fn layout(&self) -> LayoutTier {
        self.layout
    }

    #[must_use]
    pub fn reset_delay(&self) -> ResetDelay {
        self.reset_delay
    }

    /// Whether a form reset timer is currently scheduled.
    #[must_use]
    pub fn has_pending_reset(&self) -> bool {
        self.reset_timer.is_some()
    }

    /// Switches to the next language and refreshes every section.
    pub fn toggle_language(&mut self) -> Language {
        toggle_language(&mut self.i18n, &mut self.page)
    }

    pub fn title(&self) -> String {
        self.i18n.tr("app_title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            page: &mut self.page,
            layout: &mut self.layout,
            reset_delay: self.reset_delay,
            reset_timer: &mut self.reset_timer,
        };
        update::update(&mut ctx, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            page: &self.page,
            theme: &self.theme,
            layout: self.layout,
        })
    }
}
