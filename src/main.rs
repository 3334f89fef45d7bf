use clap::Parser;
use miette::Result;
use wordpx::cli::{Cli, Commands};
use wordpx::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Render(args) => wordpx::cli::render::run(args, &printer)?,
        Commands::Extract(args) => wordpx::cli::extract::run(args, &printer)?,
        Commands::Derive(args) => wordpx::cli::derive::run(args)?,
        Commands::Inspect(args) => wordpx::cli::inspect::run(args, &printer)?,
        Commands::Completions(args) => wordpx::cli::completions::run(args)?,
    }

    Ok(())
}
