// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{Message, Page};
use crate::i18n::{fluent::I18n, Language};
use crate::ui::contact_form::{self, Event as ContactFormEvent, ResetTicket};
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::layout::LayoutTier;
use crate::ui::state::ResetDelay;
use iced::{task, Size, Task};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub page: &'a mut Page,
    pub layout: &'a mut LayoutTier,
    pub reset_delay: ResetDelay,
    /// Handle of the pending form reset; replacing it aborts the old timer.
    pub reset_timer: &'a mut Option<task::Handle>,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Header(message) => handle_header_message(ctx, &message),
        Message::ContactForm(message) => handle_contact_form_message(ctx, message),
        Message::WindowResized(size) => {
            handle_window_resized(ctx, size);
            Task::none()
        }
    }
}

fn handle_header_message(ctx: &mut UpdateContext<'_>, message: &header::Message) -> Task<Message> {
    match header::update(message) {
        HeaderEvent::LanguageToggleRequested => {
            toggle_language(ctx.i18n, ctx.page);
        }
    }
    Task::none()
}

/// Switches to the next language and refreshes every section.
pub fn toggle_language(i18n: &mut I18n, page: &mut Page) -> Language {
    let language = i18n.toggle_language();
    page.refresh_texts(i18n);
    log::debug!("language switched to {language}");
    language
}

fn handle_contact_form_message(
    ctx: &mut UpdateContext<'_>,
    message: contact_form::Message,
) -> Task<Message> {
    if let contact_form::Message::ResetElapsed(ticket) = &message {
        if ctx.page.contact_form.pending_reset() == Some(*ticket) {
            *ctx.reset_timer = None;
        }
    }

    match ctx.page.contact_form.update(message) {
        ContactFormEvent::None => Task::none(),
        ContactFormEvent::ScheduleReset(ticket) => {
            schedule_reset(ctx.reset_delay, ticket, ctx.reset_timer)
        }
    }
}

/// Starts the timer that reverts the form after `delay`.
///
/// Any timer still pending is aborted when its handle is replaced.
fn schedule_reset(
    delay: ResetDelay,
    ticket: ResetTicket,
    reset_timer: &mut Option<task::Handle>,
) -> Task<Message> {
    let duration = delay.as_duration();
    let (task, handle) = Task::perform(
        async move { tokio::time::sleep(duration).await },
        move |()| Message::ContactForm(contact_form::Message::ResetElapsed(ticket)),
    )
    .abortable();

    if reset_timer.replace(handle.abort_on_drop()).is_some() {
        log::debug!("replaced pending form reset with {ticket:?}");
    }
    task
}

fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) {
    let tier = LayoutTier::from_width(size.width);
    if tier != *ctx.layout {
        log::debug!("layout tier {:?} -> {tier:?} at width {}", *ctx.layout, size.width);
        *ctx.layout = tier;
    }
}
