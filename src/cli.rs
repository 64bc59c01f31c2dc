use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::models::DocumentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Book,
    Periodical,
}

impl From<KindArg> for DocumentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Book => DocumentKind::Book,
            KindArg::Periodical => DocumentKind::Periodical,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "folio",
    version,
    about = "A terminal viewer for paginated documents (books and periodical issues).",
    long_about = None
)]
pub struct Cli {
    /// Treat the document as a book or a periodical issue
    #[clap(short, long, value_enum, default_value = "book")]
    pub kind: KindArg,

    /// Page count hint, used until the render surface reports the real count
    #[clap(short, long)]
    pub pages: Option<usize>,

    /// Title shown in the control bar (defaults to the document name)
    #[clap(short, long)]
    pub title: Option<String>,

    /// Print the initial viewer state as JSON and exit
    #[clap(long)]
    pub dump_state: bool,

    /// Use a specific configuration file
    #[clap(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Enable debug output
    #[clap(long)]
    pub debug: bool,

    /// Document asset locator, handed to the render surface untouched
    #[clap(name = "DOCUMENT")]
    pub document: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["folio", "issue.pdf"]);
        assert_eq!(cli.kind, KindArg::Book);
        assert_eq!(cli.pages, None);
        assert!(!cli.dump_state);
        assert_eq!(cli.document.as_deref(), Some("issue.pdf"));
    }

    #[test]
    fn test_periodical_with_pages() {
        let cli = Cli::parse_from(["folio", "-k", "periodical", "--pages", "48", "q.pdf"]);
        assert_eq!(cli.kind, KindArg::Periodical);
        assert_eq!(cli.pages, Some(48));
    }

    #[test]
    fn test_kind_converts() {
        assert_eq!(DocumentKind::from(KindArg::Book), DocumentKind::Book);
        assert_eq!(
            DocumentKind::from(KindArg::Periodical),
            DocumentKind::Periodical
        );
    }
}
