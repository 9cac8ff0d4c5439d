use clap::{CommandFactory, Parser, Subcommand};
use studyplan_core::{Config, Language};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "studyplan", version, about = "Weekly study session planner")]
struct Cli {
    /// Display language for this call (en, th, es, fr, de)
    #[arg(long, global = true)]
    lang: Option<Language>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Queue a study session
    Add(commands::session::AddArgs),
    /// Show the queued sessions
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Remove a queued session by id
    Delete {
        /// Session ID
        id: String,
    },
    /// Remove every queued session
    Clear {
        /// Confirm the flush
        #[arg(long)]
        yes: bool,
    },
    /// Build the weekly schedule from the queue
    Run {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print a shell completion script
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_env("STUDYPLAN_LOG")
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let mut config = Config::load_or_default();
    init_tracing(&config);
    if let Some(lang) = cli.lang {
        config.language = lang;
    }

    let result = match cli.command {
        Commands::Add(args) => commands::session::add(args, &config),
        Commands::List { json } => commands::session::list(json, &config),
        Commands::Delete { id } => commands::session::delete(&id, &config),
        Commands::Clear { yes } => commands::session::clear(yes, &config),
        Commands::Run { json } => commands::run::run(json, &config),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "studyplan", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
