mod cli;
mod simulate;

use std::path::Path;

use tracing_subscriber::EnvFilter;

use simulate::{Assignment, RunOutput};
use webpanel_config::SimulatorSettings;

fn print_output(output: &RunOutput, json: bool, events: bool) -> webpanel_common::Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(&output.windows)
            .map_err(|e| webpanel_common::WebPanelError::Other(e.to_string()))?;
        println!("{rendered}");
    } else {
        for window in &output.windows {
            println!("== {} ==", window.window);
            print!("{}", window.outline);
        }
    }

    if events {
        for event in &output.events {
            let line = serde_json::to_string(event)
                .map_err(|e| webpanel_common::WebPanelError::Other(e.to_string()))?;
            eprintln!("{line}");
        }
    }
    Ok(())
}

fn run(args: &cli::Args, mut settings: SimulatorSettings) -> webpanel_common::Result<()> {
    simulate::override_windows(&mut settings, args.windows)?;

    let manifest_path = args
        .manifest
        .as_deref()
        .or(settings.extension.manifest.as_deref());
    let manifest = simulate::read_manifest(manifest_path)?;

    let assignments = args
        .set
        .iter()
        .map(|raw| Assignment::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let output = simulate::run(&settings, &manifest, &assignments)?;
    print_output(&output, args.json, args.events)
}

fn main() {
    let args = cli::parse();

    // Settings load before logging so the file can pick the log level.
    let settings = webpanel_config::load_settings(args.config.as_deref().map(Path::new));

    // Initialize logging
    let log_directive = args
        .log_level
        .clone()
        .or_else(|| settings.as_ref().ok().map(|s| s.logging.level.clone()))
        .unwrap_or_else(|| "webpanel=info".to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "webpanel=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("webpanel v{} starting", env!("CARGO_PKG_VERSION"));

    let result = settings
        .map_err(webpanel_common::WebPanelError::from)
        .and_then(|settings| run(&args, settings));
    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
