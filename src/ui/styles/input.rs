// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{border, palette};
use iced::widget::text_input;
use iced::Theme;

/// Default input, with a red border when the field shows an error.
pub fn field(has_error: bool) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme: &Theme, status: text_input::Status| {
        let mut style = text_input::default(theme, status);
        if has_error {
            style.border.color = palette::ERROR_500;
            style.border.width = border::WIDTH_MD;
        }
        style
    }
}
