use clap::{Parser, Subcommand};

use daybrief_core::{BriefingState, config_file, date, from_root};

mod output;

use output::ColorMode;

/// Daybrief - read dated briefings from the command line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available briefing dates, most recent first
    List {
        /// Briefing root: an http(s) base URL or a local directory
        #[arg(long)]
        root: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Print the briefing for a date (defaults to the most recent)
    Show {
        /// Date to show (YYYY-MM-DD)
        date: Option<String>,

        /// Briefing root: an http(s) base URL or a local directory
        #[arg(long)]
        root: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Print today's briefing, if one exists
    Today {
        /// Briefing root: an http(s) base URL or a local directory
        #[arg(long)]
        root: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List { root, no_color } => list(root, ColorMode::from_flag(no_color)).await,
        Command::Show {
            date,
            root,
            no_color,
        } => show(date, root, ColorMode::from_flag(no_color)).await,
        Command::Today { root, no_color } => {
            let today = date::format_iso(date::today_local());
            show(Some(today), root, ColorMode::from_flag(no_color)).await
        }
    }
}

/// Resolve the briefing root from CLI flag > env var > config file.
fn resolve_root(arg: Option<String>) -> anyhow::Result<String> {
    if let Some(root) = arg {
        return Ok(root);
    }
    if let Ok(root) = std::env::var("DAYBRIEF_ROOT") {
        if !root.is_empty() {
            return Ok(root);
        }
    }
    if let Some(root) = config_file::load_config().source.and_then(|s| s.root) {
        return Ok(root);
    }
    anyhow::bail!(
        "no briefing root configured: pass --root, set DAYBRIEF_ROOT, \
         or add [source] root to the config file"
    )
}

async fn list(root: Option<String>, color: ColorMode) -> anyhow::Result<()> {
    let source = from_root(&resolve_root(root)?);
    let entries = source.fetch_index().await?;
    if entries.is_empty() {
        anyhow::bail!("the briefing index is empty");
    }
    output::print_index(&entries, color);
    Ok(())
}

async fn show(date_arg: Option<String>, root: Option<String>, color: ColorMode) -> anyhow::Result<()> {
    let source = from_root(&resolve_root(root)?);

    let mut state = BriefingState::new();
    let entries = source.fetch_index().await?;
    if state.load_entries(entries).is_none() {
        anyhow::bail!("the briefing index is empty");
    }

    // An explicit date must name an available day; the default is the
    // freshly seeded most-recent entry.
    if let Some(raw) = date_arg {
        let day = date::parse_iso(&raw)
            .ok_or_else(|| anyhow::anyhow!("invalid date {raw}: expected YYYY-MM-DD"))?;
        if !state.is_available(day) {
            anyhow::bail!("no briefing found for {raw}");
        }
        state.select_date(day);
    }

    let Some(day) = state.selected() else {
        anyhow::bail!("the briefing index is empty");
    };
    let doc = source.fetch_content(day).await?;
    output::print_briefing(day, &doc, color);
    Ok(())
}
