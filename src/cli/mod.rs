// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, builds the HTTP client and routes
// each subcommand to its view. Views do the printing and
// prompting; all backend work is delegated to Layer 2.
//
//   commands.rs — subcommands and their arguments
//   views.rs    — one function per view
//   render.rs   — domain values → terminal text
//   terminal.rs — line-oriented prompt over stdin/stdout

pub mod commands;
pub mod render;
pub mod terminal;
pub mod views;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use commands::Commands;
use terminal::Terminal;

use crate::domain::traits::DocumentApi;
use crate::infra::api_client::HttpDocumentApi;
use crate::infra::config::{ClientConfig, API_URL_ENV};

/// Command-line client for the SmartNote document service.
#[derive(Parser, Debug)]
#[command(
    name = "smartnote",
    version,
    about = "Upload PDFs, then read AI summaries, take quizzes and chat about them."
)]
pub struct Cli {
    /// Base URL of the SmartNote API [default: http://localhost:8000/api]
    #[arg(long, global = true, env = API_URL_ENV)]
    pub api_url: Option<String>,

    /// JSON config file, e.g. {"api_url": "https://host/api"}
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = ClientConfig::resolve(self.api_url, self.config.as_deref())?;
        let api = HttpDocumentApi::new(&config).context("Cannot create the HTTP client")?;

        let stdin  = io::stdin();
        let stdout = io::stdout();
        let mut term = Terminal::new(stdin.lock(), stdout.lock());

        execute(self.command, &api, &mut term)
    }
}

/// Route a subcommand to its view.
pub fn execute<A, R, W>(command: Commands, api: &A, term: &mut Terminal<R, W>) -> Result<()>
where
    A: DocumentApi,
    R: BufRead,
    W: Write,
{
    match command {
        Commands::List          => views::list(api, term),
        Commands::Upload(args)  => views::upload(api, term, &args.into()),
        Commands::Show(args)    => views::show(api, term, args.id),
        Commands::Summarize(args) => views::summarize(api, term, args.id),
        Commands::Quiz(args)    => views::quiz(api, term, args.id),
        Commands::Chat(args)    => views::chat(api, term, args.id, args.question.as_deref()),
        Commands::Open(args)    => views::open(api, term, args.id),
    }
}
