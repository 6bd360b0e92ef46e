// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are solid cards in their severity color with a close button. While
//! a toast is being dismissed it fades out over the exit animation.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    ///
    /// `progress` is the exit animation progress (`0.0` while fully shown).
    pub fn view<'a>(
        notification: &'a Notification,
        i18n: &'a I18n,
        progress: f32,
    ) -> Element<'a, Message> {
        let alpha = (1.0 - progress).clamp(opacity::TRANSPARENT, opacity::OPAQUE);
        let background = notification.severity().color();
        let foreground = Color {
            a: alpha,
            ..palette::WHITE
        };

        let message_widget = text(i18n.tr(notification.message_key()))
            .size(typography::BODY)
            .color(foreground);

        // No second close while the exit animation runs.
        let dismiss = notification
            .is_visible()
            .then_some(Message::Dismiss(notification.id()));
        let dismiss_button = button(text("×").size(typography::BODY_LG).color(foreground))
            .on_press_maybe(dismiss)
            .padding([0.0, spacing::XXS])
            .style(move |theme: &Theme, status| dismiss_button_style(theme, status, alpha));

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(message_widget).width(Length::Fill))
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .max_width(sizing::TOAST_MAX_WIDTH)
            .padding(spacing::SM)
            .style(move |_theme: &Theme| toast_container_style(background, alpha))
            .into()
    }

    /// Renders the toast overlay with all displayed notifications.
    ///
    /// Positions toasts in the top-right corner, oldest on top.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n, manager.exit_progress(notification)))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::MD)
                .into()
        }
    }
}

/// Style function for the toast container.
fn toast_container_style(background: Color, alpha: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: background.a * alpha,
            ..background
        })),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: iced::Shadow {
            color: Color {
                a: opacity::OVERLAY_SUBTLE * alpha,
                ..palette::BLACK
            },
            ..shadow::MD
        },
        text_color: Some(Color {
            a: alpha,
            ..palette::WHITE
        }),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(_theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let text_color = Color {
        a: alpha,
        ..palette::WHITE
    };
    let hover_background = |strength: f32| {
        Some(iced::Background::Color(Color {
            a: strength * alpha,
            ..palette::WHITE
        }))
    };

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => hover_background(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover_background(opacity::OVERLAY_MEDIUM),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
