use iced::{keyboard, Font, Subscription, Task};
use plume_core::{Config, FontStore, Keymap, Session};

pub mod file_ops;
pub mod keys;
pub mod messages;
pub mod types;
pub mod update;
pub mod view;

pub use messages::*;
pub use types::*;

use crate::font::editor_font;
use crate::surface::EditorSurface;

pub struct App {
    pub session: Session,
    pub surface: EditorSurface,
    pub fonts: FontStore,
    pub editor_font: Font,
    pub keymap: Keymap,
    pub config: Config,
    pub settings: Option<SettingsDialog>,
    pub active_menu: Option<TopMenu>,
    pub status_message: String,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            file,
            config,
            fonts,
        } = flags;

        let mut app = Self {
            session: Session::new(),
            surface: EditorSurface::new(config.editor.undo_limit),
            editor_font: editor_font(fonts.active().family()),
            fonts,
            keymap: Keymap::from_config(&config),
            config,
            settings: None,
            active_menu: None,
            status_message: "Ready | Ctrl+O: Open | Ctrl+S: Save | Ctrl+N: New".to_string(),
        };

        if let Some(path) = file {
            app.open_path(path);
        }

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        self.session.title(&self.config.window.title)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| Some(Message::KeyPressed(key, modifiers)))
    }
}

pub fn run(flags: Flags) -> iced::Result {
    let size = iced::Size::new(flags.config.window.width, flags.config.window.height);

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window_size(size)
        .theme(|_| iced::Theme::Dark)
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
