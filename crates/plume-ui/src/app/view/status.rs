use iced::widget::{container, horizontal_space, row, text, Space};
use iced::{Background, Border, Element, Length, Padding};

use crate::app::{App, Message};
use crate::theme::colors;

impl App {
    pub fn view_status_bar(&self) -> Element<'_, Message> {
        let (line, col) = self.surface.content().cursor_position();
        let cursor_info = format!("Ln {}, Col {}", line + 1, col + 1);

        let file_info = if self.session.is_dirty() {
            format!("{} [modified]", self.session.display_name())
        } else {
            self.session.display_name()
        };

        let font = self.fonts.active();
        let font_info = format!("{} {}pt", font.family(), font.size());

        let message_color = if self.status_message.starts_with("Error") {
            colors::ERROR_TEXT
        } else {
            colors::TEXT_SECONDARY
        };

        let status_content = row![
            text(&self.status_message).size(12).color(message_color),
            horizontal_space(),
            text(file_info).size(12).color(colors::TEXT_SECONDARY),
            Space::with_width(24),
            text(cursor_info).size(12).color(colors::TEXT_PRIMARY),
            Space::with_width(24),
            text(font_info).size(12).color(colors::ACCENT),
            Space::with_width(24),
            text("UTF-8").size(12).color(colors::TEXT_SECONDARY),
            Space::with_width(12),
        ]
        .padding(Padding::from([6, 12]))
        .align_y(iced::Alignment::Center);

        container(status_content)
            .width(Length::Fill)
            .height(28)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_MEDIUM)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }
}
