// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between forms, toasts and screens.
//!
//! The `App` struct is created once at startup. It registers every form,
//! owns the notification manager and translates messages into side effects
//! like submission tasks and the delayed move to the confirmation screen.

mod message;
pub mod paths;
mod screen;
mod subscription;
pub mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::forms::{schema, FormRegistry, FormSchema, SimulatedSubmitter, Submitter};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Severity, Timings};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    forms: FormRegistry,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    submitter: Arc<dyn Submitter>,
    theme_mode: ThemeMode,
    /// Delay between a successful submission and the confirmation screen.
    redirect_delay: Duration,
    confirmation_target: String,
    spinner_rotation: f32,
    last_tick: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("forms", &self.forms.len())
            .field("notifications", &self.notifications.len())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and forms, then builds the application state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let forms_file = flags.forms_file.or_else(|| config.forms.file.clone());
        let (schemas, forms_warning) = schema::load(forms_file.as_deref());

        let submitter = Arc::new(SimulatedSubmitter::new(config.submission.simulated_delay()));
        let mut app = Self::with_parts(&config, i18n, &schemas, submitter);

        // Show warnings for config/forms loading issues
        for key in [config_warning, forms_warning].into_iter().flatten() {
            app.notify(key, Severity::Warning);
        }

        tracing::info!(forms = app.forms.len(), locale = %app.i18n.current_locale(), "started");
        (app, Task::none())
    }

    /// Builds the application from already loaded parts.
    ///
    /// Every schema is registered exactly once, in order.
    #[must_use]
    pub fn with_parts(
        config: &Config,
        i18n: I18n,
        schemas: &[FormSchema],
        submitter: Arc<dyn Submitter>,
    ) -> Self {
        let mut forms = FormRegistry::new();
        for schema in schemas {
            forms.register(schema);
        }

        Self {
            i18n,
            screen: Screen::default(),
            forms,
            notifications: notifications::Manager::with_timings(Timings::from(&config.notifications)),
            submitter,
            theme_mode: config.general.theme_mode,
            redirect_delay: config.submission.redirect_delay(),
            confirmation_target: config.submission.confirmation_target().to_string(),
            spinner_rotation: 0.0,
            last_tick: None,
        }
    }

    /// Shows a toast. Available to any part of the page that needs to report
    /// an outcome.
    pub fn notify(&mut self, message_key: impl Into<String>, severity: Severity) -> notifications::NotificationId {
        self.notifications.notify(message_key, severity)
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn forms(&self) -> &FormRegistry {
        &self.forms
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn confirmation_target(&self) -> &str {
        &self.confirmation_target
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.screen {
            Screen::Forms => app_name,
            Screen::Confirmation { .. } => {
                format!("{} - {app_name}", self.i18n.tr("confirmation-title"))
            }
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.notifications.has_notifications(),
            self.forms.any_submitting(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            forms: &mut self.forms,
            notifications: &mut self.notifications,
            submitter: &self.submitter,
            redirect_delay: self.redirect_delay,
            spinner_rotation: &mut self.spinner_rotation,
            last_tick: &mut self.last_tick,
        };

        match message {
            Message::Form(form, form_message) => {
                update::handle_form_message(&mut ctx, form, form_message)
            }
            Message::SubmissionCompleted { form, result } => {
                update::handle_submission_completed(&mut ctx, form, result)
            }
            Message::NavigationDue(form) => update::handle_navigation_due(&mut ctx, form),
            Message::Confirmation(confirmation_message) => {
                update::handle_confirmation_message(&mut ctx, &confirmation_message)
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message)
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            forms: &self.forms,
            notifications: &self.notifications,
            confirmation_target: &self.confirmation_target,
            spinner_rotation: self.spinner_rotation,
        })
    }
}
