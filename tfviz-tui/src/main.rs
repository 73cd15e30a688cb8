//! tfviz TUI — diagram, outline and detail panes with mouse support.
//!
//! Panes:
//! 1. Architecture — block diagram of the encoder stack
//! 2. Components — hierarchical list with collapsible groups
//! 3. Component Analysis — accordion of the selected component's details

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use tfviz_core::logging::{self, LogTarget};
use tfviz_core::outline::transformer_outline;
use tfviz_core::ExplorerConfig;
use tfviz_tui::app::AppState;
use tfviz_tui::{input, ui};

#[derive(Parser, Debug)]
#[command(
    name = "tfviz-tui",
    about = "Interactive transformer architecture explorer"
)]
struct Args {
    /// Config file (defaults to <config_dir>/tfviz/config.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Args {
    fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(ExplorerConfig::default_path)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stderr(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableFocusChange
        );
        default_hook(info);
    }));

    let config_path = args.config_path();
    let (config, config_error) = load_config(config_path.as_deref());

    let log_file = config
        .log
        .file
        .clone()
        .unwrap_or_else(logging::default_log_file);
    logging::init(&config.log, LogTarget::File(log_file.clone()))
        .with_context(|| format!("open log file {}", log_file.display()))?;
    if let Some(err) = &config_error {
        tracing::warn!(error = %err, "invalid config, using defaults");
    }
    tracing::info!(
        detail_mode = config.detail.mode.label(),
        outline_mode = config.outline.mode.label(),
        "starting tfviz"
    );

    let mut app = AppState::new(&config).context("build app state")?;
    if let Some(err) = config_error {
        app.set_warning(format!("Config ignored: {err}"));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    tracing::info!("exiting tfviz");
    result
}

/// Load and validate the config. Falls back to defaults, returning the error
/// so it can be surfaced once logging and the UI are up.
fn load_config(path: Option<&std::path::Path>) -> (ExplorerConfig, Option<String>) {
    let Some(path) = path else {
        return (ExplorerConfig::default(), None);
    };
    let loaded = ExplorerConfig::load(path)
        .and_then(|config| config.validate(&transformer_outline()).map(|()| config));
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (ExplorerConfig::default(), Some(e.to_string())),
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render, remembering the area for mouse hit-testing
        terminal.draw(|f| {
            app.viewport = f.area();
            ui::draw(f, app);
        })?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::FocusLost => app.diagram.leave_all(),
                _ => {}
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn config_flag_sets_path() {
        let args = Args::try_parse_from(["tfviz-tui", "--config", "x.toml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("x.toml")));
        assert_eq!(args.config_path(), Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn bare_path_is_rejected() {
        assert!(Args::try_parse_from(["tfviz-tui", "x.toml"]).is_err());
    }

    #[test]
    fn malformed_config_falls_back_with_error() {
        let path = std::env::temp_dir().join(format!("tfviz-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[detail\nmode = ").unwrap();

        let argv = [OsStr::new("tfviz-tui"), OsStr::new("--config"), path.as_os_str()];
        let args = Args::try_parse_from(argv).unwrap();
        let (config, error) = load_config(args.config_path().as_deref());
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config, ExplorerConfig::default());
        assert!(error.is_some());
    }
}
