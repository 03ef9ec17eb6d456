//! The interactive console session: menu loop, browsing, and search flows.
//!
//! The session is generic over its input and output streams, so tests can
//! drive a whole run from a string script and capture everything printed.
//! The binary wires it to stdin/stdout.

mod pager;

pub use pager::{BOOKS_PER_PAGE, Pager};

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info};

use crate::book::{Book, SortKey};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::opener::LinkOpener;
use crate::selection::Selection;

/// Where the selection goes when the session ends, and which key the
/// "sort catalog" option sorts by. Injected by the binary; the session
/// keeps no global state.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub output_path: PathBuf,
    pub sort_key: SortKey,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("selected_books.txt"),
            sort_key: SortKey::default(),
        }
    }
}

/// Outcome of one sub-loop: either hand control back to the caller's loop
/// or stop because input ran out.
enum Flow {
    Continue,
    Eof,
}

/// What to do with a book picked off the current page.
enum PageAction {
    Open,
    Save,
}

/// One interactive run over a loaded catalog.
///
/// Single-threaded and synchronous: one control loop blocking on every
/// prompt. Running out of input is treated like an explicit quit, so the
/// selection still gets exported.
pub struct Session<'a, R, W, O> {
    catalog: &'a mut Catalog,
    selection: Selection,
    config: SessionConfig,
    opener: &'a O,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write, O: LinkOpener> Session<'a, R, W, O> {
    pub fn new(
        catalog: &'a mut Catalog,
        config: SessionConfig,
        opener: &'a O,
        input: R,
        out: W,
    ) -> Self {
        Self {
            catalog,
            selection: Selection::new(),
            config,
            opener,
            input,
            out,
        }
    }

    /// Run the menu loop until the user quits, then export the selection.
    pub fn run(mut self) -> Result<()> {
        loop {
            self.render_menu()?;
            let Some(line) = self.read_line()? else { break };

            match line.as_str() {
                "1" => {
                    if let Flow::Eof = self.browse()? {
                        break;
                    }
                }
                "2" => self.search_by_author()?,
                "3" => self.search_by_language()?,
                "4" => self.search_by_title()?,
                "5" => self.sort_catalog()?,
                "6" => break,
                _ => writeln!(self.out, "Invalid choice.")?,
            }
        }

        self.finish()
    }

    /// Read one trimmed line, or `None` when input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn render_menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Select an option:")?;
        writeln!(self.out, "1. Display all books")?;
        writeln!(self.out, "2. Search books by author")?;
        writeln!(self.out, "3. Search books by language")?;
        writeln!(self.out, "4. Search books by title")?;
        writeln!(self.out, "5. Sort catalog by {}", self.config.sort_key)?;
        writeln!(self.out, "6. Quit")?;
        write!(self.out, "Enter your choice: ")?;
        self.out.flush()?;
        Ok(())
    }

    // --- Paginated browsing ---

    fn browse(&mut self) -> Result<Flow> {
        let mut pager = Pager::new(self.catalog.len());
        loop {
            self.render_page(&pager)?;
            let Some(line) = self.read_line()? else {
                return Ok(Flow::Eof);
            };

            match line.to_ascii_lowercase().as_str() {
                "n" => pager.next(),
                "p" => pager.prev(),
                "o" => self.act_on_page(&pager, PageAction::Open)?,
                "s" => self.act_on_page(&pager, PageAction::Save)?,
                "q" => return Ok(Flow::Continue),
                _ => writeln!(self.out, "Invalid choice.")?,
            }
        }
    }

    fn render_page(&mut self, pager: &Pager) -> Result<()> {
        writeln!(self.out)?;
        if self.catalog.is_empty() {
            writeln!(self.out, "The catalog is empty.")?;
        } else {
            writeln!(
                self.out,
                "Page {} of {}",
                pager.current_page() + 1,
                pager.page_count()
            )?;
            for (position, index) in pager.page_range().enumerate() {
                let book = self.catalog.get(index)?;
                writeln!(self.out, "{}. {}", position + 1, book.title)?;
            }
        }
        writeln!(
            self.out,
            "n: Next page | p: Previous page | o: Open book link | s: Save book | q: Back"
        )?;
        write!(self.out, "Enter your choice: ")?;
        self.out.flush()?;
        Ok(())
    }

    fn act_on_page(&mut self, pager: &Pager, action: PageAction) -> Result<()> {
        let on_page = pager.page_range().len();
        if on_page == 0 {
            writeln!(self.out, "No books on this page.")?;
            return Ok(());
        }

        let verb = match action {
            PageAction::Open => "open",
            PageAction::Save => "save",
        };
        write!(
            self.out,
            "Enter the number of the book to {verb} (1-{on_page}): "
        )?;
        self.out.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(());
        };

        let index = match line
            .parse::<usize>()
            .ok()
            .and_then(|position| pager.absolute_index(position))
        {
            Some(index) => index,
            None => {
                writeln!(self.out, "Invalid index.")?;
                return Ok(());
            }
        };

        let book = self.catalog.share(index)?;
        match action {
            PageAction::Open => {
                if book.has_link() {
                    self.open_link(&book)?;
                } else {
                    writeln!(self.out, "Link is not available.")?;
                }
            }
            PageAction::Save => {
                self.selection.add(book);
                writeln!(self.out, "Book saved.")?;
            }
        }
        Ok(())
    }

    // --- Search flows ---

    fn search_by_author(&mut self) -> Result<()> {
        write!(self.out, "Enter the name of the author: ")?;
        self.out.flush()?;
        let Some(name) = self.read_line()? else {
            return Ok(());
        };
        let matches = self.catalog.find_by_author(&name);
        self.review_matches(matches)
    }

    fn search_by_language(&mut self) -> Result<()> {
        write!(self.out, "Enter the language: ")?;
        self.out.flush()?;
        let Some(language) = self.read_line()? else {
            return Ok(());
        };
        let matches = self.catalog.find_by_language(&language);
        self.review_matches(matches)
    }

    fn search_by_title(&mut self) -> Result<()> {
        write!(self.out, "Enter the title: ")?;
        self.out.flush()?;
        let Some(title) = self.read_line()? else {
            return Ok(());
        };
        let matches = match self.catalog.find_index_by_title(&title) {
            Some(index) => vec![self.catalog.share(index)?],
            None => Vec::new(),
        };
        self.review_matches(matches)
    }

    /// List matches, then let the user open one and optionally save it.
    fn review_matches(&mut self, matches: Vec<Arc<Book>>) -> Result<()> {
        if matches.is_empty() {
            writeln!(self.out, "No books found.")?;
            return Ok(());
        }

        for (i, book) in matches.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, book.title)?;
        }
        write!(self.out, "Select a book to open its link (0 to go back): ")?;
        self.out.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(());
        };

        let Ok(pick) = line.parse::<usize>() else {
            writeln!(self.out, "Invalid index.")?;
            return Ok(());
        };
        if pick == 0 {
            return Ok(());
        }
        let Some(book) = matches.get(pick - 1).cloned() else {
            writeln!(self.out, "Invalid index.")?;
            return Ok(());
        };

        if book.has_link() {
            self.open_link(&book)?;
        } else {
            writeln!(self.out, "Link is not available.")?;
        }

        write!(
            self.out,
            "Enter 's' to save the book, anything else to continue: "
        )?;
        self.out.flush()?;
        if let Some(choice) = self.read_line()? {
            if choice.eq_ignore_ascii_case("s") {
                self.selection.add(book);
                writeln!(self.out, "Book saved.")?;
            }
        }
        Ok(())
    }

    // --- Sorting and teardown ---

    fn sort_catalog(&mut self) -> Result<()> {
        self.catalog.sort_in_place(self.config.sort_key);
        writeln!(self.out, "Catalog sorted by {}.", self.config.sort_key)?;
        Ok(())
    }

    /// A failed open is reported to the user, never fatal to the loop.
    fn open_link(&mut self, book: &Book) -> Result<()> {
        if let Err(err) = self.opener.open_link(&book.link) {
            writeln!(self.out, "{err}")?;
        }
        Ok(())
    }

    /// Export the selection. A write failure is logged and surfaced but
    /// does not turn into a process error; the unsaved selection is lost.
    fn finish(mut self) -> Result<()> {
        match self.selection.export_to_path(&self.config.output_path) {
            Ok(()) => {
                info!(
                    count = self.selection.len(),
                    path = %self.config.output_path.display(),
                    "selection exported"
                );
                writeln!(
                    self.out,
                    "Saved {} selected book(s) to {}",
                    self.selection.len(),
                    self.config.output_path.display()
                )?;
            }
            Err(err) => {
                error!(error = %err, "failed to export selection");
                writeln!(self.out, "Could not save the selection: {err}")?;
            }
        }
        Ok(())
    }
}
