use anyhow::Result;
use bugs::PathFormat;
use bugs::areas::repository::Repository;
use bugs::artifacts::core::{PagerWriter, page_all, should_page};
use bugs::artifacts::scan::ScanError;
use bugs::commands::update::UpdateOptions;
use clap::{Parser, Subcommand};
use minus::Pager;

/// Exit status for a run started outside any repository
const NOT_A_REPOSITORY_EXIT_CODE: i32 = 128;

#[derive(Parser)]
#[command(
    name = "bugs",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A simple bug tracking tool",
    long_about = "Collects the TODO: comments of every file in a git repository \
    into a flat list stored at the repository root.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "update",
        about = "Update the list of bugs for this repository",
        long_about = "This command rescans the whole repository for TODO: comments \
        and replaces the bug list with the result."
    )]
    Update {
        #[arg(
            short,
            long = "path",
            value_enum,
            default_value_t = PathFormat::Long,
            help = "Select the format of the file path in the bug list"
        )]
        path: PathFormat,
        #[arg(
            short,
            long,
            help = "Show line numbers in the bug list. Only valid if --path is not none"
        )]
        line_numbers: bool,
    },
    #[command(
        name = "print",
        about = "Print the list of bugs for this repository",
        long_about = "This command prints the bug list written by the last update."
    )]
    Print,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let pwd = std::env::current_dir()?;

    let result = match &cli.command {
        Commands::Update { path, line_numbers } => Repository::new(
            &pwd.to_string_lossy(),
            Box::new(std::io::stdout()),
            Box::new(std::io::stderr()),
        )
        .and_then(|repository| repository.update(&UpdateOptions::new(*path, *line_numbers))),
        Commands::Print if should_page() => {
            let pager = Pager::new();
            Repository::new(
                &pwd.to_string_lossy(),
                Box::new(PagerWriter::new(pager.clone())),
                Box::new(std::io::stderr()),
            )
            .and_then(|repository| repository.print())
            .and_then(|_| page_all(pager))
        }
        Commands::Print => Repository::new(
            &pwd.to_string_lossy(),
            Box::new(std::io::stdout()),
            Box::new(std::io::stderr()),
        )
        .and_then(|repository| repository.print()),
    };

    if let Err(err) = result {
        if let Some(ScanError::RepositoryNotFound { .. }) = err.downcast_ref::<ScanError>() {
            eprintln!("fatal: {}", err);
            std::process::exit(NOT_A_REPOSITORY_EXIT_CODE);
        }
        return Err(err);
    }

    Ok(())
}
