// SPDX-License-Identifier: MPL-2.0
//! View rendering for a single form.
//!
//! Each field renders its label, input and (when set) inline error. The
//! submit button shows a spinner and the busy label while the form is
//! submitting. Presses are only accepted while the form is idle.

use crate::forms::{Field, FieldId, FormState, InputType, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles, input};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, text, text_input, Column, Container, Row};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render a form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a FormState,
    /// Current spinner angle, advanced by the application tick.
    pub spinner_rotation: f32,
}

/// Render a form as a card.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let editable = ctx.form.is_editable();

    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(text(ctx.i18n.tr(ctx.form.title_key())).size(typography::TITLE_SM));

    for (id, field) in ctx.form.fields() {
        column = column.push(build_field(ctx.i18n, id, field, editable));
    }

    column = column.push(build_submit(&ctx));

    Container::new(column)
        .width(Length::Fill)
        .max_width(sizing::FORM_WIDTH)
        .padding(spacing::LG)
        .style(container_styles::card)
        .into()
}

fn build_field<'a>(i18n: &I18n, id: FieldId, field: &'a Field, editable: bool) -> Element<'a, Message> {
    let mut col = Column::new().spacing(spacing::XXS);

    let label = if field.is_required() {
        format!("{} {}", i18n.tr(field.label_key()), i18n.tr("field-required-marker"))
    } else {
        i18n.tr(field.label_key())
    };
    col = col.push(text(label).size(typography::BODY_SM));

    let placeholder = field
        .placeholder_key()
        .map(|key| i18n.tr(key))
        .unwrap_or_default();
    let mut input = text_input(&placeholder, field.value())
        .padding(spacing::XS)
        .size(typography::BODY)
        .style(input::field(field.has_error()));
    if field.input_type() == InputType::Textarea {
        input = input.padding([spacing::SM, spacing::XS]);
    }
    if editable {
        input = input
            .on_input(move |value| Message::FieldChanged(id, value))
            .on_submit(Message::FieldSubmitted(id));
    }
    col = col.push(input);

    if let Some(error) = field.error() {
        col = col.push(
            text(i18n.tr(error.i18n_key()))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    col.into()
}

fn build_submit<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let control = ctx.form.submit_control();

    let content: Element<'a, Message> = if control.is_busy() {
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(AnimatedSpinner::new(palette::WHITE, ctx.spinner_rotation).into_element())
            .push(text(ctx.i18n.tr("form-submitting")).size(typography::BODY))
            .into()
    } else {
        text(ctx.i18n.tr(control.label_key()))
            .size(typography::BODY)
            .into()
    };

    button(content)
        .on_press_maybe(ctx.form.can_submit().then_some(Message::Submit))
        .padding([spacing::XS, spacing::MD])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(button_styles::primary)
        .into()
}
