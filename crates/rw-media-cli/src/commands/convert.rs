//! `rw-media convert` command implementation.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use rw_media::{Escaping, InlineProcessor, MediaExtension, Preload};
use rw_media_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Markdown file to convert (default: stdin; `-` also reads stdin).
    input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover rw-media.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Add `autoplay` to video and audio (overrides config).
    #[arg(long)]
    autoplay: bool,

    /// Add `loop` to video and audio (overrides config).
    #[arg(long = "loop")]
    looping: bool,

    /// Add `muted` to video and audio (overrides config).
    #[arg(long)]
    muted: bool,

    /// Omit `controls` from video and audio (overrides config).
    #[arg(long)]
    no_controls: bool,

    /// Value of the `preload` attribute: none, metadata or auto (overrides config).
    #[arg(long)]
    preload: Option<Preload>,

    /// Escape attribute values once instead of twice (overrides config).
    #[arg(long)]
    single_escape: bool,

    /// Disable GFM extensions: tables, strikethrough, task lists (overrides config).
    #[arg(long)]
    no_gfm: bool,

    /// Emit expanded markdown instead of HTML.
    #[arg(long)]
    markdown: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ConvertArgs {
    /// Execute the convert command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), Some(&self.cli_settings()))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Using configuration");
        }

        let input = read_input(self.input.as_deref())?;
        let (rendered, warnings) = convert(&config, &input, self.markdown);

        output.render_warnings(&warnings);

        write_output(self.output.as_deref(), &rendered)?;
        output.finished(self.output.as_deref(), input.len(), self.verbose);

        Ok(())
    }

    /// Build CLI settings from flags. Unset flags leave config values alone.
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            controls: self.no_controls.then_some(false),
            autoplay: self.autoplay.then_some(true),
            looping: self.looping.then_some(true),
            muted: self.muted.then_some(true),
            preload: self.preload,
            escaping: self.single_escape.then_some(Escaping::Single),
            gfm: self.no_gfm.then_some(false),
        }
    }
}

/// Run the media extension over `input`, returning output and warnings.
fn convert(config: &Config, input: &str, markdown_only: bool) -> (String, Vec<String>) {
    let extension = MediaExtension::with_options(config.media.clone());
    let mut processor = InlineProcessor::new()
        .with_gfm(config.markdown.gfm)
        .with_extension(&extension);

    if markdown_only {
        let expanded = processor.process(input);
        (expanded, processor.warnings().to_vec())
    } else {
        let result = processor.convert(input);
        (result.html, result.warnings)
    }
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<(), CliError> {
    match path {
        Some(path) => std::fs::write(path, content).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
