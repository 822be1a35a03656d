use clap::Parser;
use color_eyre::eyre::Result;

use latest_release_tag::{cli, find_latest_tag, forge::factory::ForgeFactory};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("latest_release_tag")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = cli::Args::parse();

    initialize_logger(cli_args.debug)?;

    let remote = cli_args.get_remote()?;
    let fetcher = ForgeFactory::create(&remote)?;
    let version = find_latest_tag(fetcher.as_ref(), &cli_args.prefix).await?;

    println!("{}", version.unwrap_or_default());

    Ok(())
}
