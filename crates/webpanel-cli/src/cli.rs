use clap::Parser;

/// webpanel: simulate an extension panel across browser windows.
#[derive(Parser, Debug)]
#[command(name = "webpanel", version, about)]
pub struct Args {
    /// Settings file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Extension manifest.json declaring the panel.
    #[arg(short = 'm', long)]
    pub manifest: Option<String>,

    /// Number of browser windows to open.
    #[arg(short = 'w', long)]
    pub windows: Option<u32>,

    /// Default property write, applied after build (NAME=VALUE, repeatable).
    /// An empty value restores the declared default.
    #[arg(short = 's', long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// Print window chrome trees as JSON instead of outlines.
    #[arg(long)]
    pub json: bool,

    /// Print the panel events emitted during the run.
    #[arg(long)]
    pub events: bool,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
