//! svnview - Text-mode viewer for Subversion working copies
//!
//! Binary entry point for the TUI application.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing_subscriber::filter::LevelFilter;

use svnview::app::App;
use svnview::config::Config;
use svnview::session::Session;
use svnview::svn::{TracingLog, constants};

/// Browse a Subversion working copy
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Working copy to open
    #[arg(default_value = ".")]
    repo: PathBuf,

    /// Number of revisions to load
    #[arg(short, long, default_value_t = constants::DEFAULT_LOG_LIMIT)]
    limit: u32,

    /// svn binary to run
    #[arg(long, default_value = constants::SVN_COMMAND)]
    svn: String,

    /// Program used by `svn diff --diff-cmd`
    #[arg(long, default_value = constants::DEFAULT_DIFF_TOOL)]
    diff_tool: String,

    /// Directory for svnview.log
    #[arg(long, default_value_os_t = std::env::temp_dir())]
    log_dir: PathBuf,

    /// Log debug events, including every svn invocation's stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            svn_command: self.svn.clone(),
            diff_tool: self.diff_tool.clone(),
            log_limit: self.limit,
            ..Config::default()
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let appender = tracing_appender::rolling::never(&args.log_dir, "svnview.log");
    let (writer, _log_guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(if args.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        })
        .init();

    let repo = std::path::absolute(&args.repo)?;
    let (session, events) = Session::new(&args.config(), Arc::new(TracingLog));
    session.open(repo.display().to_string())?;

    let terminal = ratatui::init();
    let result = run_restored(
        App::new(session, events),
        |app| run(terminal, app),
        ratatui::restore,
    );
    tracing::info!("exiting");
    result
}

/// Run `body` on `app`, restoring the terminal before `app` is dropped
///
/// Dropping the app waits for in-flight svn commands; the terminal is
/// handed back first, also when `body` panics.
fn run_restored<A, R>(mut app: A, body: impl FnOnce(&mut A) -> R, restore: impl FnOnce()) -> R {
    let _restore = scopeguard::guard((), |()| restore());
    body(&mut app)
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, app: &mut App) -> color_eyre::Result<()> {
    app.process_events();
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(app)?;
    }
    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout so session events are picked up while
/// the user is idle.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.on_key_event(key);
        }
    }
    app.process_events();
    Ok(())
}
