use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use trackchart::{chart::Attribute, cli, config, error, utils};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search artists by name
    Search(SearchOptions),

    /// Chart an artist's tracks sorted by attribute
    Chart(ChartOptions),

    /// List the attributes a chart can be sorted by
    Attributes,

    /// Serve charts over HTTP
    Serve(ServeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Artist name or name prefix
    term: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ChartOptions {
    /// Catalog id of the artist
    #[clap(long, conflicts_with = "artist")]
    artist_id: Option<String>,

    /// Artist name, resolved through search
    #[clap(long)]
    artist: Option<String>,

    /// Attribute to sort by; can be repeated
    #[clap(
        long,
        value_parser = utils::parse_attribute,
        action = ArgAction::Append,
        num_args = 1
    )]
    attribute: Vec<Attribute>,

    /// Print the chart request as JSON
    #[clap(long)]
    json: bool,

    /// Label bars as "track (album)"
    #[clap(long)]
    album_labels: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Open the server in the default browser
    #[clap(long)]
    open: bool,

    /// Label bars as "track (album)"
    #[clap(long)]
    album_labels: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Search(opt) => cli::search(opt.term).await,
        Command::Chart(opt) => {
            cli::chart(
                opt.artist_id,
                opt.artist,
                opt.attribute,
                opt.json,
                opt.album_labels,
            )
            .await
        }
        Command::Attributes => cli::attributes(),
        Command::Serve(opt) => cli::serve(opt.open, opt.album_labels).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
