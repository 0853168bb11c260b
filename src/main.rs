mod args;
mod checksum;
mod header;
mod userlist;

use anyhow::{Context, Result};
use args::ArgHandler;
use log::info;
use log::LevelFilter;
use userlist::UserList;

/// Main application entrypoint.
fn main() -> Result<()> {
    env_logger::Builder::new()
        .format_timestamp_secs()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    // Parse CLI arguments
    let arg_handler = ArgHandler::parse();

    generate(&arg_handler)
}

/// Read the user list and generate the header.
fn generate(arg_handler: &ArgHandler) -> Result<()> {
    let input_path = arg_handler.input_path()?;
    info!("Reading user list from {}", input_path.display());

    let text = std::fs::read_to_string(&input_path)
        .with_context(|| format!("failed to read user list '{}'", input_path.display()))?;

    let list = UserList::parse(&text);
    header::generate(&list)
}
