// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User-facing notices and the command error that carries them.
//!
//! Store and adapter errors are logged in full but shown to the user as a
//! short notice naming the action that failed.

use strum::Display;
use thiserror::Error;

use thoughtbox_core::ThoughtboxError;

/// Fixed messages shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Notice {
    #[strum(to_string = "Please enter some content before saving.")]
    EmptyContent,
    #[strum(to_string = "Failed to save thought. Please try again.")]
    SaveFailed,
    #[strum(to_string = "Failed to delete thought.")]
    DeleteFailed,
    #[strum(to_string = "Failed to load thoughts.")]
    LoadFailed,
    #[strum(to_string = "Failed to update thought.")]
    UpdateFailed,
    #[strum(to_string = "Failed to extract text from image. Please try again.")]
    ExtractFailed,
    #[strum(to_string = "Stored thoughts could not be read. Showing an empty list.")]
    UnreadableCollection,
    #[strum(to_string = "Are you sure you want to delete this thought?")]
    ConfirmDelete,
}

/// A command that did not complete.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Input rejected before any side effect.
    #[error("{0}")]
    Rejected(Notice),

    /// An operation failed underneath the command.
    #[error("{notice}")]
    Failed {
        notice: Notice,
        #[source]
        source: ThoughtboxError,
    },

    /// Terminal I/O failed while rendering or prompting.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl CommandError {
    /// The notice to show, if any.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            CommandError::Rejected(notice) | CommandError::Failed { notice, .. } => Some(*notice),
            CommandError::Io(_) => None,
        }
    }
}

/// Attaches a notice to a failed operation.
pub trait WithNotice<T> {
    fn notice(self, notice: Notice) -> Result<T, CommandError>;
}

impl<T> WithNotice<T> for Result<T, ThoughtboxError> {
    fn notice(self, notice: Notice) -> Result<T, CommandError> {
        self.map_err(|source| CommandError::Failed { notice, source })
    }
}
