use clap::Parser;
use color_eyre::Result;

use prompt_tweaks::cli::Cli;
use prompt_tweaks::commands;
use prompt_tweaks::config;
use prompt_tweaks::presenter::{Presenter, TerminalPresenter};

fn main() -> Result<()> {
    // Writes to <temp dir>/prompt-tweaks-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_logging();

    color_eyre::install()?;

    let cli = Cli::parse();

    // Load config after parsing so --help and --version stay side-effect free
    let config_result = config::load_config();
    let config = config_result.config;

    let mut presenter = TerminalPresenter::stdout(config.display.color.should_use_color());
    if let Some(warning) = config_result.warning {
        presenter.warning(&warning)?;
    }

    commands::run(cli.command, &config, &mut presenter)?;

    #[cfg(debug_assertions)]
    log::debug!("=== PROMPT-TWEAKS DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_logging() {
    use std::io::Write;

    let log_path = std::env::temp_dir().join("prompt-tweaks-debug.log");
    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== PROMPT-TWEAKS DEBUG SESSION STARTED ===");
}
