// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command handlers: the listing, capture and edit flows.
//!
//! Handlers take their terminal streams explicitly so tests can drive them
//! with in-memory buffers. Every store failure is logged and surfaced as a
//! [`CommandError`] carrying the notice for that action.

use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use chrono::{Local, Utc};
use colored::Colorize;
use tracing::{error, info, warn};

use thoughtbox_config::ThoughtboxConfig;
use thoughtbox_core::{ALL_CATEGORY, NewThought, OcrAdapter, Thought, ThoughtPatch};
use thoughtbox_thoughts::{DisplayRow, ThoughtStore, display_rows};

use crate::notice::{CommandError, Notice, WithNotice};

/// Streams a command reads from and writes to.
pub struct Terminal<'a> {
    pub input: &'a mut dyn BufRead,
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

/// Collaborators shared by every command.
pub struct App {
    pub config: ThoughtboxConfig,
    pub store: ThoughtStore,
    pub ocr: Arc<dyn OcrAdapter>,
}

impl App {
    /// Prints thoughts in `category` (all when absent), newest first.
    ///
    /// A collection that cannot be decoded is shown as empty with a notice;
    /// the stored data is left alone.
    pub async fn list(
        &self,
        category: Option<&str>,
        json: bool,
        term: &mut Terminal<'_>,
    ) -> Result<Vec<DisplayRow>, CommandError> {
        let thoughts = match self.store.list().await {
            Ok(thoughts) => thoughts,
            Err(e) if e.is_malformed() => {
                warn!(error = %e, "showing empty list in place of unreadable thoughts");
                writeln!(term.err, "{}", Notice::UnreadableCollection.to_string().yellow())?;
                Vec::new()
            }
            Err(e) => {
                error!(error = %e, "failed to load thoughts");
                return Err(e).notice(Notice::LoadFailed);
            }
        };

        let selected = category.unwrap_or(ALL_CATEGORY);
        let rows = display_rows(&thoughts, selected, &Local);

        if json {
            let rendered = serde_json::to_string_pretty(&rows)
                .map_err(std::io::Error::other)?;
            writeln!(term.out, "{rendered}")?;
        } else if rows.is_empty() {
            writeln!(term.out, "{}", "No thoughts yet.".dimmed())?;
        } else {
            for row in &rows {
                writeln!(
                    term.out,
                    "{:>8}  {}  {} {}",
                    row.time.bold(),
                    row.id.dimmed(),
                    format!("[{}]", row.category).cyan(),
                    row.content
                )?;
            }
        }
        Ok(rows)
    }

    /// Saves `words` joined by spaces as a new thought.
    pub async fn add(
        &self,
        words: &[String],
        category: Option<String>,
        term: &mut Terminal<'_>,
    ) -> Result<Thought, CommandError> {
        self.save_content(&words.join(" "), category, term).await
    }

    /// Extracts text from `path` and saves it as a new thought.
    ///
    /// Nothing is saved when extraction fails or yields only whitespace.
    pub async fn capture(
        &self,
        path: &Path,
        category: Option<String>,
        document: bool,
        term: &mut Terminal<'_>,
    ) -> Result<Thought, CommandError> {
        writeln!(term.err, "{}", "Extracting text...".dimmed())?;
        let extracted = if document {
            self.ocr.extract_text_from_document(path).await
        } else {
            self.ocr.extract_text_from_image(path).await
        };
        let text = extracted
            .inspect_err(|e| error!(path = %path.display(), error = %e, "text extraction failed"))
            .notice(Notice::ExtractFailed)?;

        writeln!(term.out, "{}", text.trim())?;
        self.save_content(&text, category, term).await
    }

    /// Deletes the thought `id` after confirmation, unless `yes` is set.
    ///
    /// Returns false when the user declines.
    pub async fn delete(
        &self,
        id: &str,
        yes: bool,
        term: &mut Terminal<'_>,
    ) -> Result<bool, CommandError> {
        if !yes && !confirm(Notice::ConfirmDelete, term)? {
            writeln!(term.out, "Cancelled.")?;
            return Ok(false);
        }
        self.store.delete(id).await.notice(Notice::DeleteFailed)?;
        info!(id, "thought deleted");
        writeln!(term.out, "{}", "Deleted.".green())?;
        Ok(true)
    }

    /// Moves thought `id` to `category`. Other fields are untouched.
    pub async fn recategorize(
        &self,
        id: &str,
        category: &str,
        term: &mut Terminal<'_>,
    ) -> Result<(), CommandError> {
        self.store
            .update(id, ThoughtPatch::category(category))
            .await
            .notice(Notice::UpdateFailed)?;
        writeln!(term.out, "{}", "Updated.".green())?;
        Ok(())
    }

    /// Prints the configured category filters, marking the default.
    pub fn categories(&self, term: &mut Terminal<'_>) -> Result<(), CommandError> {
        let display = &self.config.display;
        for category in &display.categories {
            if *category == display.default_category {
                writeln!(term.out, "{} {}", category.bold(), "(default)".dimmed())?;
            } else {
                writeln!(term.out, "{category}")?;
            }
        }
        Ok(())
    }

    async fn save_content(
        &self,
        raw: &str,
        category: Option<String>,
        term: &mut Terminal<'_>,
    ) -> Result<Thought, CommandError> {
        let content = raw.trim();
        if content.is_empty() {
            return Err(CommandError::Rejected(Notice::EmptyContent));
        }

        let new = NewThought {
            content: content.to_string(),
            category: category.unwrap_or_else(|| self.config.display.default_category.clone()),
            timestamp: Utc::now().timestamp_millis(),
        };
        let saved = self.store.save(new).await.notice(Notice::SaveFailed)?;
        info!(id = %saved.id, category = %saved.category, "thought saved");
        writeln!(term.out, "{} {}", "Saved".green(), saved.id.dimmed())?;
        Ok(saved)
    }
}

/// Asks a yes/no question; anything but `y` or `yes` declines.
fn confirm(question: Notice, term: &mut Terminal<'_>) -> Result<bool, CommandError> {
    write!(term.out, "{question} [y/N] ")?;
    term.out.flush()?;
    let mut answer = String::new();
    term.input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use thoughtbox_core::StorageAdapter;
    use thoughtbox_test_utils::{FlakyStorage, ScriptedOcr};
    use thoughtbox_thoughts::STORAGE_KEY;

    #[derive(Default)]
    struct Streams {
        input: Cursor<Vec<u8>>,
        out: Vec<u8>,
        err: Vec<u8>,
    }

    impl Streams {
        fn term(&mut self) -> Terminal<'_> {
            Terminal {
                input: &mut self.input,
                out: &mut self.out,
                err: &mut self.err,
            }
        }

        fn out(&self) -> String {
            String::from_utf8_lossy(&self.out).into_owned()
        }

        fn err(&self) -> String {
            String::from_utf8_lossy(&self.err).into_owned()
        }
    }

    struct Fixture {
        app: App,
        storage: Arc<FlakyStorage>,
        ocr: Arc<ScriptedOcr>,
        io: Streams,
    }

    impl Fixture {
        fn new() -> Self {
            let storage = Arc::new(FlakyStorage::in_memory());
            let ocr = Arc::new(ScriptedOcr::new());
            let app = App {
                config: ThoughtboxConfig::default(),
                store: ThoughtStore::new(storage.clone()),
                ocr: ocr.clone(),
            };
            Self {
                app,
                storage,
                ocr,
                io: Streams::default(),
            }
        }

        fn answer(mut self, line: &str) -> Self {
            self.io.input = Cursor::new(line.as_bytes().to_vec());
            self
        }
    }

    fn words(text: &str) -> Vec<String> {
        text.split(' ').map(str::to_string).collect()
    }

    #[tokio::test]
    async fn add_trims_and_uses_default_category() {
        let mut fx = Fixture::new();
        let mut term = fx.io.term();
        let saved = fx
            .app
            .add(&words("  buy milk  "), None, &mut term)
            .await
            .unwrap();
        assert_eq!(saved.content, "buy milk");
        assert_eq!(saved.category, "Category 1");
        assert_eq!(fx.app.store.list().await.unwrap(), vec![saved]);
    }

    #[tokio::test]
    async fn add_rejects_blank_content_without_writing() {
        let mut fx = Fixture::new();
        let mut term = fx.io.term();
        let err = fx.app.add(&words("   "), None, &mut term).await.unwrap_err();
        assert_eq!(err.notice(), Some(Notice::EmptyContent));
        assert_eq!(fx.storage.write_count(), 0);
    }

    #[tokio::test]
    async fn add_reports_save_failure() {
        let mut fx = Fixture::new();
        fx.storage.fail_writes(true);
        let mut term = fx.io.term();
        let err = fx
            .app
            .add(&words("idea"), Some("Category 2".into()), &mut term)
            .await
            .unwrap_err();
        assert_eq!(err.notice(), Some(Notice::SaveFailed));
        fx.storage.fail_writes(false);
        assert!(fx.app.store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_filters_and_prints_rows() {
        let mut fx = Fixture::new();
        let mut term = fx.io.term();
        fx.app
            .add(&words("first"), Some("Category 1".into()), &mut term)
            .await
            .unwrap();
        fx.app
            .add(&words("second"), Some("Category 2".into()), &mut term)
            .await
            .unwrap();

        let rows = fx
            .app
            .list(Some("Category 2"), false, &mut term)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].content, "second");
        assert!(fx.io.out().contains("second"));

        let all = {
            let mut term = fx.io.term();
            fx.app.list(None, false, &mut term).await.unwrap()
        };
        let contents: Vec<_> = all.iter().map(|r| r.content.as_str()).collect();
        assert_eq!(contents, ["second", "first"]);
    }

    #[tokio::test]
    async fn list_json_is_parseable() {
        let mut fx = Fixture::new();
        let mut term = fx.io.term();
        fx.app.add(&words("note"), None, &mut term).await.unwrap();
        fx.io.out.clear();

        let mut term = fx.io.term();
        fx.app.list(None, true, &mut term).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&fx.io.out()).unwrap();
        assert_eq!(parsed[0]["content"], "note");
        assert_eq!(parsed[0]["category"], "Category 1");
        assert!(parsed[0]["time"].as_str().unwrap().contains(':'));
    }

    #[tokio::test]
    async fn list_degrades_on_malformed_collection() {
        let mut fx = Fixture::new();
        fx.storage
            .set(STORAGE_KEY, "not json".into())
            .await
            .unwrap();

        let mut term = fx.io.term();
        let rows = fx.app.list(None, false, &mut term).await.unwrap();
        assert!(rows.is_empty());
        assert!(fx.io.err().contains("could not be read"));
        assert_eq!(
            fx.storage.get(STORAGE_KEY).await.unwrap().as_deref(),
            Some("not json")
        );
    }

    #[tokio::test]
    async fn list_reports_read_failure() {
        let mut fx = Fixture::new();
        fx.storage.fail_reads(true);
        let mut term = fx.io.term();
        let err = fx.app.list(None, false, &mut term).await.unwrap_err();
        assert_eq!(err.notice(), Some(Notice::LoadFailed));
    }

    #[tokio::test]
    async fn capture_saves_extracted_text() {
        let mut fx = Fixture::new();
        fx.ocr.push_text("  Think different.\n").await;
        let mut term = fx.io.term();
        let saved = fx
            .app
            .capture(Path::new("photo.jpg"), None, false, &mut term)
            .await
            .unwrap();
        assert_eq!(saved.content, "Think different.");
        assert_eq!(fx.ocr.seen().await, vec![Path::new("photo.jpg").to_path_buf()]);
    }

    #[tokio::test]
    async fn capture_failure_saves_nothing() {
        let mut fx = Fixture::new();
        fx.ocr.push_failure("unreadable").await;
        let mut term = fx.io.term();
        let err = fx
            .app
            .capture(Path::new("photo.jpg"), None, false, &mut term)
            .await
            .unwrap_err();
        assert_eq!(err.notice(), Some(Notice::ExtractFailed));
        assert_eq!(fx.storage.write_count(), 0);
    }

    #[tokio::test]
    async fn delete_asks_first_and_honours_no() {
        let mut fx = Fixture::new().answer("n\n");
        let mut term = fx.io.term();
        let saved = fx.app.add(&words("keep"), None, &mut term).await.unwrap();

        let mut term = fx.io.term();
        let deleted = fx.app.delete(&saved.id, false, &mut term).await.unwrap();
        assert!(!deleted);
        assert!(fx.io.out().contains("Are you sure you want to delete this thought?"));
        assert_eq!(fx.app.store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_on_yes() {
        let mut fx = Fixture::new().answer("y\n");
        let mut term = fx.io.term();
        let saved = fx.app.add(&words("drop"), None, &mut term).await.unwrap();

        let mut term = fx.io.term();
        assert!(fx.app.delete(&saved.id, false, &mut term).await.unwrap());
        assert!(fx.app.store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_failure_keeps_thought() {
        let mut fx = Fixture::new();
        let mut term = fx.io.term();
        let saved = fx.app.add(&words("stay"), None, &mut term).await.unwrap();

        fx.storage.fail_writes(true);
        let mut term = fx.io.term();
        let err = fx.app.delete(&saved.id, true, &mut term).await.unwrap_err();
        assert_eq!(err.notice(), Some(Notice::DeleteFailed));
        assert_eq!(fx.app.store.list().await.unwrap(), vec![saved]);
    }

    #[tokio::test]
    async fn recategorize_changes_only_category() {
        let mut fx = Fixture::new();
        let mut term = fx.io.term();
        let saved = fx.app.add(&words("move me"), None, &mut term).await.unwrap();

        let mut term = fx.io.term();
        fx.app
            .recategorize(&saved.id, "Category 2", &mut term)
            .await
            .unwrap();
        let listed = fx.app.store.list().await.unwrap();
        assert_eq!(
            listed,
            vec![Thought {
                category: "Category 2".into(),
                ..saved
            }]
        );
    }

    #[tokio::test]
    async fn categories_marks_default() {
        let mut fx = Fixture::new();
        let mut term = fx.io.term();
        fx.app.categories(&mut term).unwrap();
        let out = fx.io.out();
        assert!(out.contains("All"));
        assert!(out.contains("Category 2"));
        assert!(out.contains("(default)"));
    }
}
