use clap::Parser;
use gitpeek::{Command, Repository, Result, GIT_DIR};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Inspect loose objects and branches of a git repository
#[derive(Parser, Debug)]
#[command(name = "gitpeek")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// List all branches, marking the checked out one
    #[arg(long, conflicts_with = "hash")]
    branch: bool,

    /// Hash of the object file to decode
    #[arg(long)]
    hash: Option<String>,

    /// Print commit objects as extracted fields instead of raw text
    #[arg(long, requires = "hash")]
    fields: bool,

    /// Path to the repository's git directory
    #[arg(long, env = "GIT_DIR", default_value = GIT_DIR)]
    git_dir: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn to_command(&self) -> Command {
        match (self.branch, self.hash.as_ref()) {
            (true, _) => Command::Branch,
            (false, Some(hash)) => Command::CatFile {
                hash: hash.clone(),
                fields: self.fields,
            },
            (false, None) => Command::Unknown,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("gitpeek={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let repo = Repository::new(&cli.git_dir);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = cli.to_command().run(&repo, &mut out);
    out.flush()?;
    result
}
