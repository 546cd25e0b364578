pub mod export;
pub mod parse;

use std::path::Path;

use clap::{Args, Subcommand};
use docket_parse::Parser;

use crate::config::DocketConfig;

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a briefing and list the agenda items
    Parse(parse::ParseArgs),
    /// Parse a briefing, apply edits and export the agenda as Markdown
    Export(export::ExportArgs),
}

impl Commands {
    pub fn run(self, config: Option<&Path>) -> anyhow::Result<()> {
        match self {
            Commands::Parse(args) => parse::run(args, config),
            Commands::Export(args) => export::run(args, config),
        }
    }
}

/// Parser policy overrides shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct ParserFlags {
    /// Keep blank lines during segmentation; they never add description text
    #[arg(long)]
    keep_blank_lines: bool,
    /// Stop appending plain lines to the description once a rationale or
    /// outcome label has been seen
    #[arg(long)]
    no_accumulate_after_labels: bool,
}

impl ParserFlags {
    /// Load the config and apply command-line overrides on top of it.
    pub fn build_parser(&self, config: Option<&Path>) -> anyhow::Result<Parser> {
        let mut config = DocketConfig::load(config)?;
        if self.keep_blank_lines {
            config.parser.skip_blank_lines = false;
        }
        if self.no_accumulate_after_labels {
            config.parser.accumulate_after_labels = false;
        }
        config.build_parser()
    }
}
