use anyhow::{Context, Result};
use clap::Parser;
use reservoir_catalog::cli::Cli;
use reservoir_catalog::{Catalog, Reservoir};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut catalog = Catalog::new();
    catalog.append(&Reservoir::new("Lake Svityaz", "Lake", 1000.0, 1500.0, 58.0));
    catalog.append(&Reservoir::new("Azov Sea", "Sea", 20000.0, 100000.0, 14.0));
    catalog.append(&Reservoir::new("Dnipro", "River", 800.0, 10000.0, 25.0));

    print!("{}", catalog);

    if let Err(e) = catalog.remove_at(cli.remove) {
        eprintln!("{}", e);
    }

    println!("After removal:");
    print!("{}", catalog);

    catalog
        .save_text(&cli.text_out)
        .with_context(|| format!("saving {}", cli.text_out.display()))?;
    catalog
        .save_binary(&cli.binary_out)
        .with_context(|| format!("saving {}", cli.binary_out.display()))?;

    Ok(())
}
