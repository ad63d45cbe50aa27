//! Presenter module
//!
//! Everything the CLI shows on the terminal goes through [`Presenter`], so
//! the analyzer, searcher and extractor stay pure data functions.

mod terminal;

pub use terminal::TerminalPresenter;

use std::io;

use crate::analyze::AnalysisStats;
use crate::search::SearchResult;

pub trait Presenter {
    /// Progress line shown before a command does its work
    fn status(&mut self, message: &str) -> io::Result<()>;
    fn success(&mut self, message: &str) -> io::Result<()>;
    fn warning(&mut self, message: &str) -> io::Result<()>;
    fn error(&mut self, message: &str) -> io::Result<()>;
    fn stats(&mut self, stats: &AnalysisStats) -> io::Result<()>;
    fn search_results(&mut self, results: &[SearchResult]) -> io::Result<()>;
    fn markdown(&mut self, content: &str) -> io::Result<()>;
}
