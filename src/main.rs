use folio::{
    cli::Cli,
    config::Config,
    logging::{self, LogLevel},
    models::{DocumentDescriptor, DocumentKind, ViewMode},
    ui::reader::Reader,
    viewer::engine::ViewerEngine,
};

use clap::Parser;
use eyre::Result;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(LogLevel::from_verbosity(cli.verbose, cli.debug));

    let config = match &cli.config {
        Some(path) => Config::load_from(path.clone())?,
        None => match Config::new() {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Warning: Could not load configuration: {}", err);
                eprintln!("Starting with default settings");
                Config::load_from(std::env::temp_dir().join("folio-configuration.json"))?
            }
        },
    };

    let Some(locator) = cli.document.clone() else {
        eyre::bail!("no document given; pass a document locator");
    };
    let descriptor = descriptor_from_cli(&cli, locator);

    if cli.dump_state {
        return dump_initial_state(&config, descriptor);
    }

    let mut reader = Reader::new(config, descriptor)?;
    reader.run()
}

fn descriptor_from_cli(cli: &Cli, locator: String) -> DocumentDescriptor {
    let title = cli.title.clone().unwrap_or_else(|| {
        Path::new(&locator)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Untitled")
            .to_string()
    });

    let mut descriptor = match DocumentKind::from(cli.kind) {
        DocumentKind::Book => DocumentDescriptor::book(locator.clone(), title, locator),
        DocumentKind::Periodical => DocumentDescriptor::periodical(locator.clone(), title, locator),
    };
    if let Some(pages) = cli.pages {
        descriptor = descriptor.with_page_count_hint(pages);
    }
    descriptor
}

/// Headless mode: run the document open sequence once and print the
/// resulting viewer state.
fn dump_initial_state(config: &Config, descriptor: DocumentDescriptor) -> Result<()> {
    let mode = if config.settings.start_in_double_mode {
        ViewMode::Double
    } else {
        ViewMode::Single
    };
    let mut engine = ViewerEngine::with_view_mode(mode);
    let ticket = engine.open_document(descriptor);
    let hint = engine
        .document()
        .map(|d| d.page_count_hint)
        .unwrap_or(0);
    if hint > 0 {
        engine.document_loaded(&ticket, hint);
    } else {
        engine.document_failed(&ticket);
    }
    println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    Ok(())
}
