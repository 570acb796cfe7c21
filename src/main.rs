//! linksnip — one-shot command line front end.
//!
//! Builds a snippet (or a preview model) from flags and prints it to stdout.

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use linksnip::app::App;
use linksnip::types::entry::{EntryFields, EntryType, ItemCandidate};
use linksnip::types::settings::{EmptyFolderPolicy, GeneratorSettings, QuotePolicy};

#[derive(Parser)]
#[command(
    name = "linksnip",
    about = "Generate link and folder snippets",
    author,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the generated snippet.
    Generate(EntryArgs),
    /// Print the preview model as JSON.
    Preview(EntryArgs),
}

#[derive(Args)]
struct EntryArgs {
    #[arg(long, default_value = "")]
    title: String,

    #[arg(long = "type", value_enum, default_value_t = TypeChoice::LinkDirect)]
    entry_type: TypeChoice,

    #[arg(long, default_value = "")]
    target: String,

    #[arg(long, default_value = "")]
    description: String,

    #[arg(long, default_value = "")]
    thumbnail: String,

    /// Mark the entry as not visible.
    #[arg(long)]
    hidden: bool,

    /// Folder item as `title|target[|description[|thumbnail]]`. Repeatable.
    #[arg(long = "item", value_name = "ITEM")]
    items: Vec<String>,

    /// Override what an empty folder emits.
    #[arg(long, value_enum)]
    empty_folder: Option<EmptyFolderChoice>,

    /// Escape quotes and backslashes inside string values.
    #[arg(long)]
    escape_quotes: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum TypeChoice {
    LinkDirect,
    Folder,
}

impl From<TypeChoice> for EntryType {
    fn from(choice: TypeChoice) -> Self {
        match choice {
            TypeChoice::LinkDirect => EntryType::LinkDirect,
            TypeChoice::Folder => EntryType::Folder,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum EmptyFolderChoice {
    Placeholder,
    EmptyList,
}

impl From<EmptyFolderChoice> for EmptyFolderPolicy {
    fn from(choice: EmptyFolderChoice) -> Self {
        match choice {
            EmptyFolderChoice::Placeholder => EmptyFolderPolicy::Placeholder,
            EmptyFolderChoice::EmptyList => EmptyFolderPolicy::EmptyList,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => {
            let (mut app, fields) = prepare(&args)?;
            let code = app
                .submit_generate(&fields)
                .context("failed to generate snippet")?;
            println!("{}", code);
        }
        Commands::Preview(args) => {
            let (mut app, fields) = prepare(&args)?;
            let render = app.preview(&fields).context("failed to build preview")?;
            println!("{}", serde_json::to_string_pretty(&render)?);
        }
    }
    Ok(())
}

/// Builds a session from the flags. Items go through the store, so the
/// usual validation applies.
fn prepare(args: &EntryArgs) -> Result<(App, EntryFields)> {
    let mut settings = GeneratorSettings::default();
    if let Some(choice) = args.empty_folder {
        settings.output.empty_folder = choice.into();
    }
    if args.escape_quotes {
        settings.output.quoting = QuotePolicy::Escape;
    }
    let mut app = App::with_settings(settings);

    let entry_type = EntryType::from(args.entry_type);
    app.change_type(entry_type);
    for raw in &args.items {
        let candidate = parse_item(raw)?;
        app.submit_add(candidate)
            .with_context(|| format!("rejected item '{}'", raw))?;
    }

    let fields = EntryFields {
        title: args.title.clone(),
        target: args.target.clone(),
        description: args.description.clone(),
        thumbnail: args.thumbnail.clone(),
        entry_type: entry_type.as_literal().to_string(),
        is_visible: (!args.hidden).to_string(),
    };
    Ok((app, fields))
}

fn parse_item(raw: &str) -> Result<ItemCandidate> {
    let mut parts = raw.splitn(4, '|');
    let title = parts.next().unwrap_or("");
    let target = parts
        .next()
        .ok_or_else(|| anyhow!("item '{}' needs at least title|target", raw))?;
    let description = parts.next().unwrap_or("");
    let thumbnail = parts.next().unwrap_or("");
    Ok(ItemCandidate::new(title, target, description, thumbnail))
}
