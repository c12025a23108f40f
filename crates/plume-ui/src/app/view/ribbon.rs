use iced::widget::{button, container, horizontal_space, text, Row};
use iced::{Background, Border, Color, Element, Length, Padding, Theme};
use plume_core::command::RIBBON;

use crate::app::{App, Message};
use crate::theme::colors;

impl App {
    /// Command buttons, with the unsaved-changes indicator on the right.
    pub fn view_ribbon(&self) -> Element<'_, Message> {
        let mut items: Vec<Element<'_, Message>> = RIBBON
            .iter()
            .map(|command| {
                button(text(command.ribbon_label()).size(13).color(colors::TEXT_PRIMARY))
                    .padding(Padding::from([6, 14]))
                    .style(|_: &Theme, status: button::Status| {
                        let bg = match status {
                            button::Status::Hovered => colors::BG_HOVER,
                            button::Status::Pressed => colors::BG_ACTIVE,
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
                    .on_press(Message::Command(*command))
                    .into()
            })
            .collect();

        items.push(horizontal_space().into());
        if self.session.indicator_visible() {
            items.push(Self::view_unsaved_indicator());
        }

        container(
            Row::with_children(items)
                .spacing(6)
                .padding(Padding::from([6, 8]))
                .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
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

    /// Red "Unsaved Changes" button; clicking it saves.
    fn view_unsaved_indicator<'a>() -> Element<'a, Message> {
        button(text("Unsaved Changes").size(13).color(Color::WHITE))
            .padding(Padding::from([6, 14]))
            .style(|_: &Theme, status: button::Status| {
                let bg = match status {
                    button::Status::Hovered => colors::WARNING_HOVER,
                    _ => colors::WARNING,
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
            .on_press(Message::IndicatorClicked)
            .into()
    }
}
