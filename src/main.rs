use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::FutureExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Mutex;
use std::time::Duration;

use cmdpal::app::{host::TerminalHost, persistence, r#loop::run_loop, state::AppState};
use cmdpal::domain::action;
use cmdpal::domain::models::{CommandGroup, CommandParameter, CommandRecord, ParameterKind};
use cmdpal::domain::registry::CommandRegistry;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        );
        original_hook(panic_info);
    }));
}

/// Logs go to a file next to the config; the terminal belongs to the UI.
fn setup_tracing() {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let Some(log_dir) =
        persistence::get_config_path().and_then(|p| p.parent().map(std::path::Path::to_path_buf))
    else {
        return;
    };
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let log_path = log_dir.join("cmdpal.log");
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) else {
        return;
    };

    let filter = EnvFilter::try_from_env("CMDPAL_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::info!(path = ?log_path, "Tracing initialized");
}

fn demo_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    registry.register(CommandGroup::new(
        "Navigation",
        vec![
            CommandRecord::new(
                "nav.home",
                "Go to Home",
                action::from_fn(|_| {
                    tracing::info!("Navigating home");
                    Ok(())
                }),
            )
            .with_description("Return to the start page")
            .with_keywords(["start", "index"])
            .with_category("Navigation")
            .with_shortcut(["g", "h"]),
            CommandRecord::new(
                "nav.settings",
                "Open Settings",
                action::from_fn(|_| {
                    tracing::info!("Opening settings");
                    Ok(())
                }),
            )
            .with_description("Edit preferences")
            .with_keywords(["preferences", "config"])
            .with_category("Navigation")
            .with_shortcut(["mod", ","]),
        ],
    ));

    registry.register(CommandGroup::new(
        "Git",
        vec![
            CommandRecord::new(
                "git.commit",
                "Git: Commit",
                action::from_fn(|_| {
                    tracing::info!("Committing staged changes");
                    Ok(())
                }),
            )
            .with_description("Record staged changes")
            .with_keywords(["save", "snapshot"])
            .with_category("Git")
            .with_shortcut(["mod", "enter"]),
            CommandRecord::new(
                "git.branch",
                "Create Branch",
                action::from_fn(|args| {
                    let name = args.and_then(|a| a.get("name")).cloned().unwrap_or_default();
                    tracing::info!(branch = %name, "Creating branch");
                    Ok(())
                }),
            )
            .with_description("Start a new branch from HEAD")
            .with_keywords(["new", "checkout"])
            .with_category("Git")
            .with_parameter(CommandParameter::text("name", "Branch Name").required()),
            CommandRecord::new(
                "git.push",
                "Push to Remote",
                action::from_async(|_| {
                    async {
                        tokio::time::sleep(Duration::from_millis(1500)).await;
                        tracing::info!("Pushed");
                        Ok(())
                    }
                    .boxed()
                }),
            )
            .with_description("Upload local commits")
            .with_keywords(["upload", "sync"])
            .with_category("Git"),
            CommandRecord::new(
                "git.fetch",
                "Fetch (offline)",
                action::from_fn(|_| anyhow::bail!("remote unreachable")),
            )
            .with_description("Always fails, to show error handling")
            .with_category("Git"),
        ],
    ));

    let log_level = CommandParameter::text("level", "Log Level")
        .with_kind(ParameterKind::Select)
        .with_option("Debug", "debug")
        .with_option("Info", "info")
        .with_option("Warn", "warn")
        .required();
    let level_param = log_level.clone();

    registry.register(CommandGroup::new(
        "View",
        vec![
            CommandRecord::new(
                "view.theme",
                "Toggle Theme",
                action::from_fn(|_| {
                    tracing::info!("Theme toggled");
                    Ok(())
                }),
            )
            .with_keywords(["dark", "light", "appearance"])
            .with_category("View"),
            CommandRecord::new(
                "view.log_level",
                "Set Log Level",
                action::from_fn(move |args| {
                    let input = args
                        .and_then(|a| a.get(&level_param.id))
                        .map(String::as_str)
                        .unwrap_or_default();
                    let level = level_param.resolve(input)?;
                    tracing::info!(%level, "Log level selected");
                    Ok(())
                }),
            )
            .with_keywords(["verbosity", "debug"])
            .with_category("View")
            .with_parameter(log_level),
        ],
    ));

    let groups: Vec<&str> = registry.group_names().collect();
    tracing::info!(?groups, commands = registry.len(), "Demo commands registered");
    registry
}

fn demo_host() -> TerminalHost {
    let lines = (1..=80)
        .map(|i| match i % 4 {
            0 => String::new(),
            _ => format!("Paragraph {i}: press Ctrl+K to open the command palette."),
        })
        .collect();
    let sidebar = ["Inbox", "Drafts", "Sent", "Archive"]
        .into_iter()
        .map(String::from)
        .collect();
    TerminalHost::new(lines, sidebar)
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();
    setup_tracing();

    // Settings are read before the terminal switches to raw mode.
    let settings = persistence::load_settings();
    tracing::info!(theme = settings.theme.label(), toggle = %settings.keys.toggle, "Settings loaded");
    let app_state = AppState::new(&settings, demo_registry());
    let mut host = demo_host();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, &mut host).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Event loop failed");
        println!("{err:?}");
    }

    Ok(())
}
