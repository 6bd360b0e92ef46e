// SPDX-License-Identifier: MPL-2.0
//! Confirmation screen shown after a successful submission.
//!
//! Stands in for the page the user is sent to once their message has been
//! delivered. It names the configured target and offers a way back.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::{
    alignment::Horizontal,
    widget::{button, text, Column, Container, Text},
    Element, Length,
};

/// Contextual data needed to render the confirmation screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Navigation target, e.g. `thank_you.html`.
    pub target: &'a str,
}

/// Messages emitted by the confirmation screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToForms,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    BackToForms,
}

/// Process a confirmation screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToForms => Event::BackToForms,
    }
}

/// Render the confirmation screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("confirmation-title")).size(typography::TITLE_LG);
    let body = text(ctx.i18n.tr("confirmation-body")).size(typography::BODY_LG);
    let target = text(
        ctx.i18n
            .tr_with_args("confirmation-target", &[("target", ctx.target)]),
    )
    .size(typography::CAPTION);

    let back_button = button(text(format!("← {}", ctx.i18n.tr("confirmation-back"))).size(typography::BODY))
        .on_press(Message::BackToForms)
        .style(button_styles::link);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(title)
        .push(body)
        .push(target)
        .push(back_button);

    let card = Container::new(content)
        .max_width(sizing::FORM_WIDTH)
        .padding(spacing::XL)
        .style(container_styles::card);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_message_maps_to_back_event() {
        assert_eq!(update(&Message::BackToForms), Event::BackToForms);
    }

    #[test]
    fn view_renders_without_panicking() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            target: "thank_you.html",
        });
    }
}
