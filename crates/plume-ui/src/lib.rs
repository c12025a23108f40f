//! # Plume UI
//!
//! Desktop front end built on the iced framework.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: [`App`] holds the session, the editor surface and dialog state
//! - **Message**: everything the user can do arrives as a [`app::Message`]
//! - **Update**: `App::update` applies a message and returns follow-up tasks
//! - **View**: `App::view` renders the state
//!
//! Document rules (dirty tracking, saving, font persistence) live in
//! `plume-core`; this crate only wires them to widgets.

pub mod app;
pub mod font;
pub mod surface;
pub mod theme;

pub use app::{run, App, Flags};
pub use surface::EditorSurface;
