// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::{button as iced_button, text_input};
    use iced::Theme;
    use iced_contact::ui::design_tokens::palette;
    use iced_contact::ui::notifications::Severity;
    use iced_contact::ui::styles::{button, container, input};
    use iced_contact::ui::theming::ThemeMode;

    #[test]
    fn all_styles_are_callable_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = button::primary(&theme, iced_button::Status::Active);
            let _ = button::link(&theme, iced_button::Status::Hovered);
            let _ = container::card(&theme);
            let _ = input::field(true)(&theme, text_input::Status::Active);
        }
    }

    #[test]
    fn severities_map_to_distinct_palette_colors() {
        let colors = [
            Severity::Info.color(),
            Severity::Success.color(),
            Severity::Warning.color(),
            Severity::Danger.color(),
        ];
        assert_eq!(colors[3], palette::ERROR_500);
        for (i, a) in colors.iter().enumerate() {
            assert!(colors[i + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn error_inputs_share_danger_color() {
        let style = input::field(true)(&Theme::Dark, text_input::Status::Hovered);
        assert_eq!(style.border.color, Severity::Danger.color());
    }

    #[test]
    fn theming_switches_correctly() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
    }
}
