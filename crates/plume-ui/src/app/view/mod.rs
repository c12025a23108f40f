pub mod dialogs;
pub mod editor;
pub mod menu;
pub mod ribbon;
pub mod status;

use iced::widget::{column, container, mouse_area, stack, Space};
use iced::{Background, Element, Length};

use crate::app::{App, Message};
use crate::theme::colors;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            self.view_menu_bar(),
            self.view_ribbon(),
            self.view_editor(),
            self.view_status_bar(),
        ];

        let main_view: Element<'_, Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_DARK)),
                ..Default::default()
            })
            .into();

        if self.settings.is_some() {
            stack![
                main_view,
                Self::backdrop(colors::OVERLAY, Message::SettingsCancel),
                self.view_settings_modal(),
            ]
            .into()
        } else if self.active_menu.is_some() {
            stack![
                main_view,
                Self::backdrop(iced::Color::TRANSPARENT, Message::CloseTopMenu),
                self.view_menu_dropdown(),
            ]
            .into()
        } else {
            main_view
        }
    }

    /// Full-window layer that swallows clicks outside an overlay.
    fn backdrop<'a>(color: iced::Color, on_press: Message) -> Element<'a, Message> {
        mouse_area(
            container(Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(move |_| container::Style {
                    background: Some(Background::Color(color)),
                    ..Default::default()
                }),
        )
        .on_press(on_press)
        .into()
    }
}
