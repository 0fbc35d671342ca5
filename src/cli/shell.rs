//! Interactive shell
//!
//! Reads one command per line. Command words are matched
//! case-insensitively; anything that is not a command is looked up as a
//! keyword with its original casing. Store failures are reported and the
//! session keeps going.

use crate::cli::messages::Msg;
use crate::cli::opener::LocatorOpener;
use crate::cli::output;
use crate::core::config::Language;
use crate::core::error::KeylinkError;
use crate::core::services::Services;
use crate::core::types::LookupOutcome;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// What the loop does after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Line-oriented session over any reader/writer pair
pub struct Shell<'a, R, W> {
    services: &'a Services,
    opener: &'a dyn LocatorOpener,
    input: R,
    out: W,
    language: Language,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(services: &'a Services, opener: &'a dyn LocatorOpener, input: R, out: W) -> Self {
        Self {
            services,
            opener,
            input,
            out,
            language: services.config.ui.language,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Give back the writer (tests read captured output from it)
    pub fn into_output(self) -> W {
        self.out
    }

    /// Greet, then handle lines until `exit`/`quit` or end of input
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", Msg::Welcome.text(self.language))?;
        writeln!(self.out, "{}", Msg::Help.text(self.language))?;

        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.out)?;
                break;
            };
            if self.handle(&line)? == Flow::Exit {
                break;
            }
        }

        tracing::debug!("Shell session ended");
        Ok(())
    }

    /// Dispatch a single line
    pub fn handle(&mut self, line: &str) -> io::Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = line.to_lowercase();
        match command.as_str() {
            "exit" | "quit" => {
                writeln!(self.out, "{}", Msg::Goodbye.text(self.language))?;
                return Ok(Flow::Exit);
            }
            "help" => self.help()?,
            "add" => self.add()?,
            "delete" => self.delete()?,
            "list" => self.list()?,
            "history" => self.history()?,
            "top" => self.top()?,
            "tag" => self.tag()?,
            "cat" => self.by_tag()?,
            "phone" => self.phone()?,
            "lang" => self.toggle_language()?,
            name if self.services.config.shortcuts.contains_key(name) => {
                self.open_shortcut(name)?
            }
            _ => self.lookup(line)?,
        }

        Ok(Flow::Continue)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label} ")?;
        self.out.flush()?;
        self.read_line()
    }

    fn report(&mut self, err: impl Display) -> io::Result<()> {
        tracing::warn!("Shell command failed: {}", err);
        writeln!(self.out, "{} {}", Msg::Failed.text(self.language), err)
    }

    fn help(&mut self) -> io::Result<()> {
        match self.services.store.all_keywords() {
            Ok(keywords) => {
                writeln!(self.out, "{}", Msg::KeywordsHeader.text(self.language))?;
                for keyword in keywords {
                    writeln!(self.out, "  - {keyword}")?;
                }
                writeln!(self.out)
            }
            Err(e) => self.report(e),
        }
    }

    fn lookup(&mut self, query: &str) -> io::Result<()> {
        let outcome = match self.services.search.lookup(query) {
            Ok(outcome) => outcome,
            Err(e) => return self.report(e),
        };

        match outcome {
            LookupOutcome::Matches(matches) => {
                for m in &matches {
                    writeln!(self.out, "{}", output::format_match(m))?;
                    if let Err(e) = self.opener.open(&m.locator) {
                        tracing::warn!("Failed to open {}: {}", m.locator, e);
                        writeln!(self.out, "{} {e}", Msg::OpenFailed.text(self.language))?;
                    }
                }
            }
            LookupOutcome::Suggestions(suggestions) => {
                writeln!(
                    self.out,
                    "{}",
                    output::format_suggestions(&suggestions, self.language)
                )?;
            }
            LookupOutcome::NoMatch => {
                writeln!(self.out, "{}", Msg::NoMatch.text(self.language))?;
            }
        }
        Ok(())
    }

    fn add(&mut self) -> io::Result<()> {
        let Some(keyword) = self.prompt(Msg::SearchLabel.text(self.language))? else {
            return Ok(());
        };
        let Some(locator) = self.prompt(Msg::UrlLabel.text(self.language))? else {
            return Ok(());
        };

        match self.services.store.insert(&keyword, &locator) {
            Ok(()) => writeln!(self.out, "{} '{keyword}'", Msg::Added.text(self.language)),
            Err(KeylinkError::DuplicateKeyword(_)) => {
                writeln!(self.out, "{} '{keyword}'", Msg::Duplicate.text(self.language))
            }
            Err(e) => self.report(e),
        }
    }

    fn delete(&mut self) -> io::Result<()> {
        let Some(keyword) = self.prompt(Msg::DeletePrompt.text(self.language))? else {
            return Ok(());
        };

        match self.services.store.remove(&keyword) {
            Ok(0) => writeln!(
                self.out,
                "{} '{keyword}'",
                Msg::KeywordNotFound.text(self.language)
            ),
            Ok(_) => writeln!(self.out, "{} '{keyword}'", Msg::Deleted.text(self.language)),
            Err(e) => self.report(e),
        }
    }

    fn list(&mut self) -> io::Result<()> {
        let records = match self.services.store.list_all() {
            Ok(records) => records,
            Err(e) => return self.report(e),
        };

        if records.is_empty() {
            return writeln!(self.out, "{}", Msg::NoRecords.text(self.language));
        }
        writeln!(self.out, "{}", Msg::RecordsHeader.text(self.language))?;
        for record in &records {
            writeln!(self.out, "{}", output::format_record(record, self.language))?;
        }
        Ok(())
    }

    fn history(&mut self) -> io::Result<()> {
        let queries = match self.services.recent_history(None) {
            Ok(queries) => queries,
            Err(e) => return self.report(e),
        };

        if queries.is_empty() {
            return writeln!(self.out, "{}", Msg::NoHistory.text(self.language));
        }
        writeln!(self.out, "{}", Msg::HistoryHeader.text(self.language))?;
        for query in &queries {
            writeln!(self.out, "- {query}")?;
        }
        Ok(())
    }

    fn top(&mut self) -> io::Result<()> {
        let top = match self.services.ranking.top_keywords(None) {
            Ok(top) => top,
            Err(e) => return self.report(e),
        };

        if top.is_empty() {
            return writeln!(self.out, "{}", Msg::NoTop.text(self.language));
        }
        writeln!(self.out, "{}", Msg::TopHeader.text(self.language))?;
        for (i, usage) in top.iter().enumerate() {
            writeln!(
                self.out,
                "{}",
                output::format_ranked(i + 1, usage, self.language)
            )?;
        }
        Ok(())
    }

    fn tag(&mut self) -> io::Result<()> {
        let Some(keyword) = self.prompt(Msg::TagKeywordPrompt.text(self.language))? else {
            return Ok(());
        };
        let Some(tag) = self.prompt(Msg::TagPrompt.text(self.language))? else {
            return Ok(());
        };

        match self.services.store.set_tag(&keyword, &tag) {
            Ok(true) => writeln!(
                self.out,
                "{} '{keyword}' → '{tag}'",
                Msg::Tagged.text(self.language)
            ),
            Ok(false) => writeln!(
                self.out,
                "{} '{keyword}'",
                Msg::KeywordNotFound.text(self.language)
            ),
            Err(e) => self.report(e),
        }
    }

    fn by_tag(&mut self) -> io::Result<()> {
        let Some(tag) = self.prompt(Msg::TagQueryPrompt.text(self.language))? else {
            return Ok(());
        };

        let matches = match self.services.ranking.by_tag(&tag) {
            Ok(matches) => matches,
            Err(e) => return self.report(e),
        };

        if matches.is_empty() {
            return writeln!(self.out, "{} '{tag}'", Msg::TagEmpty.text(self.language));
        }
        writeln!(self.out, "{} '{tag}'", Msg::TagHeader.text(self.language))?;
        for m in &matches {
            writeln!(self.out, "- {}: {}", m.keyword, m.locator)?;
        }
        Ok(())
    }

    fn phone(&mut self) -> io::Result<()> {
        let Some(department) = self.prompt(Msg::DepartmentPrompt.text(self.language))? else {
            return Ok(());
        };

        let services = self.services;
        match services.config.directory.get(department.as_str()) {
            Some(number) => writeln!(
                self.out,
                "{department} {} {number}",
                Msg::PhoneLabel.text(self.language)
            ),
            None => writeln!(self.out, "{}", Msg::PhoneNotFound.text(self.language)),
        }
    }

    fn open_shortcut(&mut self, name: &str) -> io::Result<()> {
        let services = self.services;
        let Some(locator) = services.config.shortcuts.get(name) else {
            return writeln!(
                self.out,
                "{} '{name}'",
                Msg::UnknownShortcut.text(self.language)
            );
        };

        match self.opener.open(locator) {
            Ok(()) => writeln!(self.out, "{} {locator}", Msg::Opened.text(self.language)),
            Err(e) => {
                tracing::warn!("Failed to open shortcut {}: {}", name, e);
                writeln!(self.out, "{} {e}", Msg::OpenFailed.text(self.language))
            }
        }
    }

    fn toggle_language(&mut self) -> io::Result<()> {
        self.language = self.language.toggled();
        tracing::debug!("Language switched to {}", self.language.code());
        writeln!(self.out, "{}", Msg::LanguageSwitched.text(self.language))
    }
}
