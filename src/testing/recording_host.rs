use std::cell::RefCell;
use std::path::PathBuf;

use crate::domain::{AppError, AppSettings, NewAppSettings};
use crate::ports::{DialogHost, DialogOutcome, FilePicker, LogSink, MessageSink};

/// Host UI double that records output and answers dialogs from preset values.
#[derive(Default)]
pub struct RecordingHost {
    pub messages: RefCell<Vec<(String, String)>>,
    pub log_lines: RefCell<Vec<String>>,
    pub activations: RefCell<usize>,
    pub picked_file: RefCell<Option<PathBuf>>,
    pub settings_answer: RefCell<Option<AppSettings>>,
    pub new_app_answer: RefCell<Option<NewAppSettings>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn picking(path: impl Into<PathBuf>) -> Self {
        let host = Self::new();
        *host.picked_file.borrow_mut() = Some(path.into());
        host
    }

    pub fn confirming_settings(settings: AppSettings) -> Self {
        let host = Self::new();
        *host.settings_answer.borrow_mut() = Some(settings);
        host
    }

    pub fn confirming_new_app(settings: NewAppSettings) -> Self {
        let host = Self::new();
        *host.new_app_answer.borrow_mut() = Some(settings);
        host
    }

    pub fn messages(&self) -> Vec<(String, String)> {
        self.messages.borrow().clone()
    }

    pub fn last_message(&self) -> Option<String> {
        self.messages.borrow().last().map(|(_, message)| message.clone())
    }

    pub fn log_lines(&self) -> Vec<String> {
        self.log_lines.borrow().clone()
    }
}

impl MessageSink for RecordingHost {
    fn show(&self, title: &str, message: &str) {
        self.messages.borrow_mut().push((title.to_string(), message.to_string()));
    }
}

impl LogSink for RecordingHost {
    fn activate(&self) {
        *self.activations.borrow_mut() += 1;
    }

    fn append_line(&self, text: &str) {
        self.log_lines.borrow_mut().push(text.to_string());
    }
}

impl FilePicker for RecordingHost {
    fn pick_file(&self, _title: &str) -> Result<Option<PathBuf>, AppError> {
        Ok(self.picked_file.borrow().clone())
    }
}

impl DialogHost for RecordingHost {
    fn settings_dialog(
        &self,
        _current: &AppSettings,
    ) -> Result<DialogOutcome<AppSettings>, AppError> {
        Ok(match self.settings_answer.borrow().clone() {
            Some(settings) => DialogOutcome::Confirmed(settings),
            None => DialogOutcome::Cancelled,
        })
    }

    fn new_app_dialog(&self) -> Result<DialogOutcome<NewAppSettings>, AppError> {
        Ok(match self.new_app_answer.borrow().clone() {
            Some(settings) => DialogOutcome::Confirmed(settings),
            None => DialogOutcome::Cancelled,
        })
    }
}
