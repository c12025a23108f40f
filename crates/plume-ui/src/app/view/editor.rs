use iced::widget::text::Wrapping;
use iced::widget::text_editor;
use iced::{Background, Border, Color, Element, Length, Theme};

use crate::app::{App, Message};
use crate::theme::colors;

impl App {
    pub fn view_editor(&self) -> Element<'_, Message> {
        let wrapping = if self.config.editor.word_wrap {
            Wrapping::Word
        } else {
            Wrapping::None
        };

        // text_editor scrolls on its own; wrapping it in scrollable() resets
        // the scroll position on every re-render.
        text_editor(self.surface.content())
            .height(Length::Fill)
            .padding(iced::Padding {
                top: 16.0,
                right: 20.0,
                bottom: 16.0,
                left: 16.0,
            })
            .font(self.editor_font)
            .size(self.fonts.active().size() as f32)
            .wrapping(wrapping)
            .style(|_theme: &Theme, _status| text_editor::Style {
                background: Background::Color(colors::BG_DARK),
                border: Border {
                    width: 0.0,
                    radius: 0.0.into(),
                    color: Color::TRANSPARENT,
                },
                icon: colors::TEXT_MUTED,
                placeholder: colors::TEXT_MUTED,
                value: colors::TEXT_PRIMARY,
                selection: colors::SELECTION,
            })
            .on_action(Message::EditorAction)
            .into()
    }
}
