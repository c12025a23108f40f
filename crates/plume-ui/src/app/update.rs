use iced::{keyboard, Task};
use plume_core::CommandTarget;

use super::keys::to_key_press;
use super::{App, Message, SettingsDialog};
use crate::font::editor_font;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Command(command) => {
                self.active_menu = None;
                return command.dispatch(self);
            }

            Message::EditorAction(action) => {
                self.active_menu = None;
                if self.surface.perform(action) {
                    self.session.on_edit();
                }
            }

            Message::IndicatorClicked => {
                return self.save_document();
            }

            Message::OpenPicked(Some(path)) => {
                self.open_path(path);
            }

            Message::OpenPicked(None) => {
                self.status_message = "Open cancelled".to_string();
            }

            Message::SaveAsPicked(path) => {
                return self.save_as_picked(path);
            }

            Message::ToggleTopMenu(menu) => {
                self.active_menu = if self.active_menu == Some(menu) {
                    None
                } else {
                    Some(menu)
                };
            }

            Message::CloseTopMenu => {
                self.active_menu = None;
            }

            Message::SettingsFamilySelected(family) => {
                if let Some(dialog) = &mut self.settings {
                    dialog.family = family;
                    dialog.error = None;
                }
            }

            Message::SettingsSizeChanged(size) => {
                if let Some(dialog) = &mut self.settings {
                    dialog.size_input = size;
                    dialog.error = None;
                }
            }

            Message::SettingsConfirm => {
                self.apply_settings();
            }

            Message::SettingsCancel => {
                self.settings = None;
            }

            Message::KeyPressed(key, modifiers) => {
                return self.handle_key_pressed(key, modifiers);
            }
        }
        Task::none()
    }

    pub fn handle_key_pressed(&mut self, key: keyboard::Key, modifiers: keyboard::Modifiers) -> Task<Message> {
        let is_escape = matches!(key, keyboard::Key::Named(keyboard::key::Named::Escape));
        if is_escape && (self.settings.take().is_some() || self.active_menu.take().is_some()) {
            return Task::none();
        }

        // Shortcuts stay inert while the settings dialog is up.
        if self.settings.is_some() {
            return Task::none();
        }

        match to_key_press(&key, modifiers).and_then(|press| self.keymap.lookup(&press)) {
            Some(command) => self.update(Message::Command(command)),
            None => Task::none(),
        }
    }

    fn apply_settings(&mut self) {
        let Some(dialog) = &mut self.settings else {
            return;
        };

        match self.fonts.apply(&dialog.family, &dialog.size_input) {
            Ok(preference) => {
                self.editor_font = editor_font(preference.family());
                self.status_message = format!("Font set to {} {}pt", preference.family(), preference.size());
                self.settings = None;
            }
            Err(e) => {
                tracing::debug!("Rejected font settings: {}", e);
                dialog.error = Some(e.to_string());
            }
        }
    }
}

impl CommandTarget for App {
    type Output = Task<Message>;

    fn new_document(&mut self) -> Task<Message> {
        self.session.new_document(&mut self.surface);
        self.status_message = "New document".to_string();
        Task::none()
    }

    fn open_document(&mut self) -> Task<Message> {
        self.show_open_dialog()
    }

    fn save_document(&mut self) -> Task<Message> {
        let result = self.session.save(&self.surface);
        self.finish_save(result)
    }

    fn save_as(&mut self) -> Task<Message> {
        self.show_save_dialog()
    }

    fn save_and_exit(&mut self) -> Task<Message> {
        let result = self.session.save_and_exit(&self.surface);
        self.finish_save(result)
    }

    fn open_settings(&mut self) -> Task<Message> {
        self.settings = Some(SettingsDialog::new(self.fonts.active()));
        Task::none()
    }

    fn exit(&mut self) -> Task<Message> {
        tracing::info!("Exit requested");
        iced::exit()
    }

    fn undo(&mut self) -> Task<Message> {
        if self.surface.undo() {
            self.session.on_edit();
            self.status_message = "Undo".to_string();
        } else {
            self.status_message = "Nothing to undo".to_string();
        }
        Task::none()
    }

    fn redo(&mut self) -> Task<Message> {
        if self.surface.redo() {
            self.session.on_edit();
            self.status_message = "Redo".to_string();
        } else {
            self.status_message = "Nothing to redo".to_string();
        }
        Task::none()
    }
}
