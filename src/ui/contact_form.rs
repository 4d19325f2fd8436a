// SPDX-License-Identifier: MPL-2.0
//! Contact form with a simulated submission.
//!
//! Nothing leaves the process: a valid submission is written to the log, the
//! cat turns happy, the fields are cleared and a success line appears. The
//! parent then schedules a deferred reset identified by a [`ResetTicket`];
//! only the reset carrying the pending ticket reverts the form.
//!
//! Name and email are required. Whitespace-only values count as empty and
//! reveal a validation hint instead of submitting.

use crate::i18n::{fluent::I18n, Localized};
use crate::ui::components::text;
use crate::ui::design_tokens::{sizing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeConfig;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, text_input, Column, Text},
    Element, Length,
};

/// Log target for submitted form values.
pub const LOG_TARGET: &str = "zen_cat::contact";

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub theme: &'a ThemeConfig,
}

/// Identifies one scheduled reset. Each successful submission gets a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResetTicket(u64);

/// Decorative cat shown above the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatMood {
    #[default]
    Calm,
    Happy,
}

impl CatMood {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            CatMood::Calm => "😸",
            CatMood::Happy => "😻",
        }
    }
}

/// Values captured by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Messages emitted by the form widgets.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    Submit,
    ResetElapsed(ResetTicket),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The form was submitted; revert it after the configured delay.
    ScheduleReset(ResetTicket),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Texts {
    pub title: String,
    pub name_label: String,
    pub email_label: String,
    pub message_label: String,
    pub name_placeholder: String,
    pub email_placeholder: String,
    pub message_placeholder: String,
    pub submit: String,
    pub success: String,
    pub required: String,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    texts: Texts,
    name: String,
    email: String,
    message: String,
    submitted: bool,
    mood: CatMood,
    success_visible: bool,
    hint_visible: bool,
    pending_reset: Option<ResetTicket>,
    next_ticket: u64,
}

impl State {
    #[must_use]
    pub fn new(i18n: &I18n) -> Self {
        let mut state = Self::default();
        state.refresh_texts(i18n);
        state
    }

    #[must_use]
    pub fn texts(&self) -> &Texts {
        &self.texts
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    #[must_use]
    pub fn mood(&self) -> CatMood {
        self.mood
    }

    #[must_use]
    pub fn success_visible(&self) -> bool {
        self.success_visible
    }

    #[must_use]
    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    #[must_use]
    pub fn pending_reset(&self) -> Option<ResetTicket> {
        self.pending_reset
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(value) => {
                self.name = value;
                self.hint_visible = false;
            }
            Message::EmailChanged(value) => {
                self.email = value;
                self.hint_visible = false;
            }
            Message::MessageChanged(value) => {
                self.message = value;
                self.hint_visible = false;
            }
            Message::Submit => {
                if self.submit().is_some() {
                    if let Some(ticket) = self.pending_reset {
                        return Event::ScheduleReset(ticket);
                    }
                }
            }
            Message::ResetElapsed(ticket) => {
                self.reset_elapsed(ticket);
            }
        }
        Event::None
    }

    /// Attempts a submission.
    ///
    /// Returns the captured values on success. With a blank name or email the
    /// form is left untouched apart from showing the validation hint.
    pub fn submit(&mut self) -> Option<Submission> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            self.hint_visible = true;
            return None;
        }

        let submission = Submission {
            name: std::mem::take(&mut self.name),
            email: std::mem::take(&mut self.email),
            message: std::mem::take(&mut self.message),
        };
        log::info!(
            target: LOG_TARGET,
            "form submitted: name={:?} email={:?} message={:?}",
            submission.name,
            submission.email,
            submission.message
        );

        self.submitted = true;
        self.mood = CatMood::Happy;
        self.success_visible = true;
        self.hint_visible = false;

        let ticket = ResetTicket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.pending_reset = Some(ticket);

        Some(submission)
    }

    /// Reverts the success state if `ticket` is the pending reset.
    ///
    /// Returns whether anything changed. Stale tickets are ignored.
    pub fn reset_elapsed(&mut self, ticket: ResetTicket) -> bool {
        if self.pending_reset != Some(ticket) || !self.submitted {
            log::debug!(target: LOG_TARGET, "ignoring stale reset {ticket:?}");
            return false;
        }

        self.submitted = false;
        self.mood = CatMood::Calm;
        self.success_visible = false;
        self.pending_reset = None;
        true
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let theme = ctx.theme;

        let label = |content: &str| {
            text::body(content.to_owned(), theme.font_sizes.sm, theme.colors.text)
        };

        let name_input = text_input(&self.texts.name_placeholder, &self.name)
            .on_input(Message::NameChanged)
            .on_submit(Message::Submit)
            .padding(theme.spacing.xs)
            .size(theme.font_sizes.sm)
            .style(styles::text_input::field(theme));

        let email_input = text_input(&self.texts.email_placeholder, &self.email)
            .on_input(Message::EmailChanged)
            .on_submit(Message::Submit)
            .padding(theme.spacing.xs)
            .size(theme.font_sizes.sm)
            .style(styles::text_input::field(theme));

        let message_input = text_input(&self.texts.message_placeholder, &self.message)
            .on_input(Message::MessageChanged)
            .on_submit(Message::Submit)
            .padding(theme.spacing.xs)
            .size(theme.font_sizes.sm)
            .style(styles::text_input::field(theme));

        let submit = button(
            container(Text::new(self.texts.submit.as_str()).size(theme.font_sizes.sm))
                .center_x(Length::Fill)
                .align_y(Vertical::Center)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press(Message::Submit)
        .style(styles::button::primary);

        let mut fields = Column::new()
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .spacing(theme.spacing.xs)
            .push(label(&self.texts.name_label))
            .push(name_input)
            .push(label(&self.texts.email_label))
            .push(email_input)
            .push(label(&self.texts.message_label))
            .push(message_input)
            .push(container(submit).padding([theme.spacing.sm, 0.0]));

        if self.hint_visible {
            fields = fields.push(text::body(
                self.texts.required.clone(),
                theme.font_sizes.xs,
                theme.colors.text_light,
            ));
        }

        if self.success_visible {
            fields = fields.push(
                container(text::body(
                    self.texts.success.clone(),
                    theme.font_sizes.sm,
                    theme.colors.primary,
                ))
                .center_x(Length::Fill),
            );
        }

        let content = Column::new()
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .spacing(theme.spacing.md)
            .push(text::heading(
                self.texts.title.clone(),
                theme.font_sizes.lg,
                theme.colors.text,
            ))
            .push(text::emoji(self.mood.glyph(), typography::FORM_EMOJI))
            .push(fields);

        container(content)
            .width(Length::Fill)
            .padding([theme.spacing.xl, theme.spacing.md])
            .into()
    }
}

impl Localized for State {
    fn refresh_texts(&mut self, i18n: &I18n) {
        self.texts = Texts {
            title: i18n.tr("contact_title"),
            name_label: i18n.tr("name_label"),
            email_label: i18n.tr("email_label"),
            message_label: i18n.tr("message_label"),
            name_placeholder: i18n.tr("name_placeholder"),
            email_placeholder: i18n.tr("email_placeholder"),
            message_placeholder: i18n.tr("message_placeholder"),
            submit: i18n.tr("submit_button"),
            success: i18n.tr("form_success"),
            required: i18n.tr("form_required"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn form() -> State {
        let i18n = I18n::new(Language::Ru).expect("translations");
        State::new(&i18n)
    }

    fn fill(state: &mut State, name: &str, email: &str, message: &str) {
        state.update(Message::NameChanged(name.into()));
        state.update(Message::EmailChanged(email.into()));
        state.update(Message::MessageChanged(message.into()));
    }

    #[test]
    fn valid_submission_clears_fields_and_shows_success() {
        let mut state = form();
        fill(&mut state, "A", "b@x.com", "hi");

        let event = state.update(Message::Submit);

        assert!(matches!(event, Event::ScheduleReset(_)));
        assert!(state.is_submitted());
        assert!(state.success_visible());
        assert_eq!(state.mood(), CatMood::Happy);
        assert_eq!(state.name(), "");
        assert_eq!(state.email(), "");
        assert_eq!(state.message(), "");
    }

    #[test]
    fn submit_returns_captured_values() {
        let mut state = form();
        fill(&mut state, "A", "b@x.com", "");

        let submission = state.submit().expect("valid form");
        assert_eq!(
            submission,
            Submission {
                name: "A".into(),
                email: "b@x.com".into(),
                message: String::new(),
            }
        );
    }

    #[test]
    fn empty_name_blocks_submission() {
        let mut state = form();
        fill(&mut state, "", "b@x.com", "hello");

        assert_eq!(state.update(Message::Submit), Event::None);
        assert!(!state.is_submitted());
        assert!(state.hint_visible());
        assert_eq!(state.email(), "b@x.com");
        assert_eq!(state.message(), "hello");
        assert_eq!(state.pending_reset(), None);
    }

    #[test]
    fn whitespace_email_counts_as_empty() {
        let mut state = form();
        fill(&mut state, "A", "   ", "");

        assert!(state.submit().is_none());
        assert!(state.hint_visible());
        assert_eq!(state.name(), "A");
    }

    #[test]
    fn editing_hides_hint() {
        let mut state = form();
        state.update(Message::Submit);
        assert!(state.hint_visible());

        state.update(Message::NameChanged("A".into()));
        assert!(!state.hint_visible());
    }

    #[test]
    fn reset_reverts_success_state() {
        let mut state = form();
        fill(&mut state, "A", "b@x.com", "");
        let Event::ScheduleReset(ticket) = state.update(Message::Submit) else {
            panic!("expected a scheduled reset");
        };

        state.update(Message::ResetElapsed(ticket));

        assert!(!state.is_submitted());
        assert!(!state.success_visible());
        assert_eq!(state.mood(), CatMood::Calm);
        assert_eq!(state.pending_reset(), None);
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut state = form();
        fill(&mut state, "A", "b@x.com", "");
        let first = state.submit().and(state.pending_reset()).expect("ticket");

        fill(&mut state, "C", "d@x.com", "");
        let second = state.submit().and(state.pending_reset()).expect("ticket");
        assert_ne!(first, second);

        assert!(!state.reset_elapsed(first));
        assert!(state.success_visible());

        assert!(state.reset_elapsed(second));
        assert!(!state.success_visible());
    }

    #[test]
    fn reset_twice_is_noop() {
        let mut state = form();
        fill(&mut state, "A", "b@x.com", "");
        state.submit();
        let ticket = state.pending_reset().expect("ticket");

        assert!(state.reset_elapsed(ticket));
        assert!(!state.reset_elapsed(ticket));
    }

    #[test]
    fn texts_switch_with_language() {
        let mut i18n = I18n::new(Language::Ru).expect("translations");
        let mut state = State::new(&i18n);
        assert_eq!(state.texts().submit, "Отправить");

        i18n.toggle_language();
        state.refresh_texts(&i18n);
        assert_eq!(state.texts().submit, "Submit");
        assert_eq!(state.texts().required, "Please fill in your name and email.");
    }

    #[test]
    fn language_switch_keeps_field_values() {
        let mut i18n = I18n::new(Language::Ru).expect("translations");
        let mut state = State::new(&i18n);
        fill(&mut state, "A", "b@x.com", "hi");

        i18n.toggle_language();
        state.refresh_texts(&i18n);
        assert_eq!(state.name(), "A");
        assert_eq!(state.message(), "hi");
    }

    #[test]
    fn contact_view_renders_all_states() {
        let theme = ThemeConfig::default();
        let mut state = form();
        let _ = state.view(ViewContext { theme: &theme });

        state.update(Message::Submit);
        let _ = state.view(ViewContext { theme: &theme });

        fill(&mut state, "A", "b@x.com", "");
        state.update(Message::Submit);
        let _ = state.view(ViewContext { theme: &theme });
    }
}
