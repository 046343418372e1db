//! Host user-interface ports: notifications, output pane, file picker, dialogs.
//!
//! `HostUi` is a blanket supertrait over the individual ports so that the
//! application context carries a single UI collaborator.

use std::path::PathBuf;

use crate::domain::{AppError, AppSettings, NewAppSettings};

/// Result of presenting a modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome<T> {
    Confirmed(T),
    Cancelled,
}

/// Modal notification surface.
pub trait MessageSink {
    fn show(&self, title: &str, message: &str);
}

/// Append-only output pane.
pub trait LogSink {
    /// Bring the pane into view.
    fn activate(&self);

    fn append_line(&self, text: &str);
}

pub trait FilePicker {
    /// Ask for a file. `Ok(None)` means the user cancelled.
    fn pick_file(&self, title: &str) -> Result<Option<PathBuf>, AppError>;
}

pub trait DialogHost {
    /// Present the settings dialog pre-filled with `current`.
    fn settings_dialog(&self, current: &AppSettings)
    -> Result<DialogOutcome<AppSettings>, AppError>;

    /// Present the new-application dialog.
    fn new_app_dialog(&self) -> Result<DialogOutcome<NewAppSettings>, AppError>;
}

pub trait HostUi: MessageSink + LogSink + FilePicker + DialogHost {}

impl<T> HostUi for T where T: MessageSink + LogSink + FilePicker + DialogHost {}
