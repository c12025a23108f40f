use std::path::PathBuf;

use iced::Task;
use plume_core::{CoreResult, SaveOutcome};

use super::{App, Message};

/// Shows the native open dialog.
pub async fn pick_open_file(extension: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Open Document")
        .add_filter("Text Files", &[extension.as_str()])
        .add_filter("All Files", &["*"])
        .pick_file()
        .await
        .map(|file| file.path().to_path_buf())
}

/// Shows the native save dialog, suggesting `file_name`.
pub async fn pick_save_file(file_name: String, extension: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Save As")
        .set_file_name(file_name)
        .add_filter("Text Files", &[extension.as_str()])
        .add_filter("All Files", &["*"])
        .save_file()
        .await
        .map(|file| file.path().to_path_buf())
}

impl App {
    pub fn show_open_dialog(&self) -> Task<Message> {
        let extension = self.config.files.default_extension.clone();
        Task::perform(pick_open_file(extension), Message::OpenPicked)
    }

    pub fn show_save_dialog(&self) -> Task<Message> {
        let extension = self.config.files.default_extension.clone();
        let file_name = match self.session.current_path() {
            Some(_) => self.session.display_name(),
            None => format!("Untitled.{}", extension),
        };
        Task::perform(pick_save_file(file_name, extension), Message::SaveAsPicked)
    }

    /// Loads `path` into the editor, reporting the result in the status bar.
    pub fn open_path(&mut self, path: PathBuf) {
        match self.session.open(&path, &mut self.surface) {
            Ok(()) => {
                self.status_message = format!("Opened: {}", path.display());
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Handles the result of a save, then exits if a save-and-exit asked for it.
    pub fn finish_save(&mut self, result: CoreResult<SaveOutcome>) -> Task<Message> {
        match result {
            Ok(SaveOutcome::Saved(path)) => {
                self.status_message = format!("Saved: {}", path.display());
                if self.session.exit_requested() {
                    tracing::info!("Exiting after save");
                    return iced::exit();
                }
                Task::none()
            }
            Ok(SaveOutcome::NeedsPath) => self.show_save_dialog(),
            Err(e) => {
                self.session.cancel_exit();
                self.status_message = format!("Error: {}", e);
                Task::none()
            }
        }
    }

    /// Handles the path chosen in the Save As dialog.
    pub fn save_as_picked(&mut self, path: Option<PathBuf>) -> Task<Message> {
        match path {
            Some(path) => {
                let result = self.session.save_as(path, &self.surface);
                self.finish_save(result.map(SaveOutcome::Saved))
            }
            None if self.session.exit_requested() => {
                tracing::info!("Save As cancelled during save-and-exit, exiting");
                iced::exit()
            }
            None => {
                self.status_message = "Save cancelled".to_string();
                Task::none()
            }
        }
    }
}
