use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use footer_version::config::{WidgetConfig, log_path};
use footer_version::footer::document::Document;
use footer_version::footer::target::Placement;
use footer_version::logging::{LogFormat, init_logging};
use footer_version::widget::VersionWidget;

const COPYRIGHT: &str = "© All rights reserved.";

#[derive(Parser)]
#[command(name = "footer-version")]
#[command(version, about = "Render the site version into a page footer")]
struct Cli {
    /// Site root serving the version marker (overrides the config file)
    #[arg(long)]
    base_url: Option<String>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file (defaults to the data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Write log lines as JSON
    #[arg(long)]
    json_log: bool,

    /// Render into a footer without the copyright anchor
    #[arg(long)]
    bare: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let format = if cli.json_log {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    let _guard = init_logging(&cli.log_file.clone().unwrap_or_else(log_path), format)?;

    let mut config = match &cli.config {
        Some(path) => WidgetConfig::load(path)?,
        None => WidgetConfig::default(),
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let mut document = if cli.bare {
        Document::bare_footer()
    } else {
        Document::standard_footer(COPYRIGHT)
    };

    let widget = VersionWidget::from_config(&config)?;
    let placement = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(widget.on_content_loaded(&mut document));

    info!("Version element placement: {:?}", placement);
    if placement == Some(Placement::Dropped) {
        eprintln!("No footer location found; nothing rendered");
    }

    println!("{}", document.to_html());
    Ok(())
}
