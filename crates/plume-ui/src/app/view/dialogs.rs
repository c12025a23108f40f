use iced::widget::{button, column, container, pick_list, row, text, text_input, Space};
use iced::{Background, Border, Color, Element, Length, Padding, Theme};

use crate::app::{App, Message};
use crate::theme::colors;

impl App {
    /// Font family and size form.
    pub fn view_settings_modal(&self) -> Element<'_, Message> {
        let Some(dialog) = &self.settings else {
            return Space::new(0, 0).into();
        };

        let error: Element<'_, Message> = match &dialog.error {
            Some(message) => text(message).size(12).color(colors::ERROR_TEXT).into(),
            None => Space::with_height(0).into(),
        };

        let modal_content = column![
            text("Settings").size(16).color(colors::TEXT_PRIMARY),
            Space::with_height(16),
            text("Font family").size(12).color(colors::TEXT_SECONDARY),
            Space::with_height(6),
            pick_list(
                dialog.families.as_slice(),
                Some(&dialog.family),
                Message::SettingsFamilySelected,
            )
            .width(Length::Fill)
            .padding(Padding::from([8, 12]))
            .text_size(13),
            Space::with_height(12),
            text("Font size").size(12).color(colors::TEXT_SECONDARY),
            Space::with_height(6),
            text_input("Size in points...", &dialog.size_input)
                .on_input(Message::SettingsSizeChanged)
                .on_submit(Message::SettingsConfirm)
                .padding(Padding::from([8, 12]))
                .size(13),
            Space::with_height(8),
            error,
            Space::with_height(16),
            row![
                Space::with_width(Length::Fill),
                button(text("Cancel").size(13).color(colors::TEXT_PRIMARY))
                    .padding(Padding::from([8, 20]))
                    .style(|_: &Theme, status: button::Status| {
                        let bg = match status {
                            button::Status::Hovered => colors::BG_HOVER,
                            _ => colors::BG_LIGHT,
                        };
                        button::Style {
                            background: Some(Background::Color(bg)),
                            text_color: colors::TEXT_PRIMARY,
                            border: Border {
                                color: colors::BORDER,
                                width: 1.0,
                                radius: 4.0.into(),
                            },
                            ..Default::default()
                        }
                    })
                    .on_press(Message::SettingsCancel),
                Space::with_width(12),
                button(text("Save").size(13).color(Color::WHITE))
                    .padding(Padding::from([8, 20]))
                    .style(|_: &Theme, status: button::Status| {
                        let bg = match status {
                            button::Status::Hovered => colors::ACCENT_HOVER,
                            _ => colors::ACCENT,
                        };
                        button::Style {
                            background: Some(Background::Color(bg)),
                            text_color: Color::WHITE,
                            border: Border {
                                radius: 4.0.into(),
                                ..Default::default()
                            },
                            ..Default::default()
                        }
                    })
                    .on_press(Message::SettingsConfirm),
            ]
            .align_y(iced::Alignment::Center),
        ]
        .padding(24)
        .width(Length::Fixed(360.0));

        container(container(modal_content).style(|_| container::Style {
            background: Some(Background::Color(colors::BG_MEDIUM)),
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }
}
