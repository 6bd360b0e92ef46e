// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen and layers the toast overlay above it.

use super::{Message, Screen};
use crate::forms::FormRegistry;
use crate::i18n::fluent::I18n;
use crate::ui::confirmation::{self, ViewContext as ConfirmationViewContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::form_view::{self, ViewContext as FormViewContext};
use crate::ui::notifications::{self, Toast};
use iced::{
    alignment::Horizontal,
    widget::{scrollable, text, Column, Container, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub forms: &'a FormRegistry,
    pub notifications: &'a notifications::Manager,
    pub confirmation_target: &'a str,
    pub spinner_rotation: f32,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Forms => view_forms(ctx.forms, ctx.i18n, ctx.spinner_rotation),
        Screen::Confirmation { .. } => view_confirmation(ctx.i18n, ctx.confirmation_target),
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(current_view)
        .push(toasts)
        .into()
}

fn view_forms<'a>(forms: &'a FormRegistry, i18n: &'a I18n, spinner_rotation: f32) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("page-heading")).size(typography::TITLE_LG));

    if forms.is_empty() {
        column = column.push(text(i18n.tr("page-empty")).size(typography::BODY));
    }

    for form in forms.iter() {
        let id = form.id();
        let card = form_view::view(FormViewContext {
            i18n,
            form,
            spinner_rotation,
        })
        .map(move |message| Message::Form(id, message));
        column = column.push(card);
    }

    scrollable(
        Container::new(column)
            .width(Length::Fill)
            .padding(spacing::XL)
            .center_x(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}

fn view_confirmation<'a>(i18n: &'a I18n, target: &'a str) -> Element<'a, Message> {
    confirmation::view(ConfirmationViewContext { i18n, target }).map(Message::Confirmation)
}
