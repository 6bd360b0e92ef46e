// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (form submit).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, shadow) = match status {
        button::Status::Active => (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM),
        button::Status::Hovered => (palette::PRIMARY_600, palette::PRIMARY_700, shadow::MD),
        button::Status::Pressed => (palette::PRIMARY_700, palette::PRIMARY_700, shadow::NONE),
        button::Status::Disabled => return busy(),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Submit button while a submission is in flight: dimmed, non-interactive.
pub fn busy() -> button::Style {
    button::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::PRIMARY_500
        })),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only button for secondary navigation ("back").
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.palette().text;
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..text
        },
        button::Status::Active => text,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
