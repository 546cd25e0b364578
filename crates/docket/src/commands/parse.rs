use std::path::{Path, PathBuf};

use clap::Args;

use crate::commands::ParserFlags;
use crate::input::read_briefing;
use crate::output;

#[derive(Args)]
pub struct ParseArgs {
    /// Briefing file (.txt or .md); reads stdin when omitted or `-`
    file: Option<PathBuf>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    parser: ParserFlags,
}

pub fn run(args: ParseArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let parser = args.parser.build_parser(config)?;
    let text = read_briefing(args.file.as_deref())?;
    let items = parser.parse(&text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No agenda items found.");
        return Ok(());
    }

    println!("{}", output::header(&format!("{} agenda items", items.len())));
    for (index, item) in items.iter().enumerate() {
        println!("{}", output::item_line(index + 1, item));
        for line in output::item_details(item) {
            println!("{line}");
        }
    }
    Ok(())
}
