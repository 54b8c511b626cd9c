use clap::Parser;
use std::path::PathBuf;

use portfolio::SiteConfig;
use portfolio::links;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Single-page portfolio application")]
struct Cli {
    /// Path to the site configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the outbound contact links and exit
    #[arg(long)]
    print_links: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let filter = if args.verbose { "portfolio=debug,info" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = SiteConfig::load(args.config.as_deref())?;

    if args.print_links {
        println!("whatsapp:  {}", links::whatsapp_link());
        println!("mail:      {}", links::mailto_link());
        println!("instagram: {}", links::INSTAGRAM_URL);
        println!("linkedin:  {}", links::LINKEDIN_URL);
        return Ok(());
    }

    #[cfg(feature = "gui")]
    {
        portfolio::gui::run(config)?;
        return Ok(());
    }
    #[cfg(not(feature = "gui"))]
    {
        let _ = config;
        anyhow::bail!("built without the gui feature; use --print-links");
    }
}
