use clap::{Parser as ClapParser, Subcommand};
use esfilter::TracingDiagnostics;
use esfilter::cli::{self, CliError, TranslateOptions, TranslateResult};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "esfilter")]
#[command(about = "esfilter - Translate filter expressions into boolean query DSL documents")]
#[command(version)]
struct Cli {
    /// Log the filter and resulting document to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a filter into a query document
    Translate {
        /// The filter expression (reads from stdin if not provided)
        filter: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Validate a filter without printing the document
    Check {
        /// The filter expression (reads from stdin if not provided)
        filter: Option<String>,
    },

    /// Show reference documentation
    Docs {
        /// Topic name (omit to list topics)
        topic: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Translate { filter, pretty } => run_translate(filter, pretty, false),
        Commands::Check { filter } => run_translate(filter, false, true),
        Commands::Docs { topic: None } => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Docs { topic: Some(topic) } => cli::get_doc_topic(&topic).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_translate(filter: Option<String>, pretty: bool, syntax_only: bool) -> Result<(), CliError> {
    let filter = match filter {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = TranslateOptions {
        filter,
        pretty,
        syntax_only,
    };

    match cli::execute_translate(&options, &TracingDiagnostics)? {
        TranslateResult::Valid => println!("Filter is valid"),
        TranslateResult::Document(json) => println!("{}", json),
    }
    Ok(())
}
