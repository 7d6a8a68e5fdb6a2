//! pgvista entry point
//!
//! Bootstrap (CLI → config → session), terminal setup/teardown, and the
//! event loop. The loop is the single consumer of the event channel and
//! the only place display state is mutated; every database call and every
//! toast revert timer is a spawned task that reports back through the
//! channel.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, Event, EventStream, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures::StreamExt;
use pgvista::app::{Action, App, AppEvent};
use pgvista::config::{Cli, Config, load_settings};
use pgvista::db::{QUERY_DEADLINE, Session, catalog, query};
use pgvista::toast::TOAST_TTL;
use pgvista::ui::render::render;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedSender};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings().unwrap_or_default();
    let config = Config::resolve(cli, settings)?;

    // Fatal on failure: nothing works without a session.
    let session = Session::connect(&config.connection, config.preview_limit)
        .await
        .context("failed to connect to database")?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, session, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: Session,
    config: &Config,
) -> Result<()> {
    let session = Arc::new(session);
    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();
    let mut app = App::new(config.connection.display_name(), config.preview_limit);

    dispatch(Action::LoadSchemas, &session, &tx);

    let mut terminal_events = EventStream::new();
    // Sequence of the toast whose revert timer has been scheduled
    let mut scheduled_toast = 0u64;

    loop {
        terminal.draw(|frame| render(frame, &mut app))?;

        let event = tokio::select! {
            maybe_event = terminal_events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind != KeyEventKind::Release => {
                    AppEvent::Key(key)
                }
                Some(Ok(Event::Paste(data))) => AppEvent::Paste(data),
                Some(Ok(Event::Resize(_, _))) => AppEvent::Resize,
                Some(Ok(_)) => continue,
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            },
            Some(event) = rx.recv() => event,
        };

        for action in app.handle_event(event) {
            if matches!(action, Action::Quit) {
                return Ok(());
            }
            dispatch(action, &session, &tx);
        }

        // One revert timer per toast. The timer carries the sequence it
        // was scheduled for; App drops it if a newer toast preempted.
        if app.toasts.seq() != scheduled_toast && app.toasts.active().is_some() {
            scheduled_toast = app.toasts.seq();
            let tx = tx.clone();
            let seq = scheduled_toast;
            tokio::spawn(async move {
                tokio::time::sleep(TOAST_TTL).await;
                let _ = tx.send(AppEvent::ToastExpired(seq));
            });
        }
    }
}

/// Spawn the background task for one action. Each task owns its own pool
/// checkout and deadline; completions come back as events.
fn dispatch(action: Action, session: &Arc<Session>, tx: &UnboundedSender<AppEvent>) {
    let session = Arc::clone(session);
    let tx = tx.clone();
    match action {
        Action::LoadSchemas => {
            tokio::spawn(async move {
                let event = match catalog::list_schemas(&session).await {
                    Ok(schemas) => AppEvent::SchemasLoaded(schemas),
                    Err(e) => AppEvent::SchemasFailed(e.to_string()),
                };
                let _ = tx.send(event);
            });
        }
        Action::LoadTables { schema } => {
            tokio::spawn(async move {
                let event = match catalog::list_tables(&session, &schema).await {
                    Ok(tables) => AppEvent::TablesLoaded { schema, tables },
                    Err(e) => AppEvent::TablesFailed {
                        schema,
                        error: e.to_string(),
                    },
                };
                let _ = tx.send(event);
            });
        }
        Action::LoadColumns { schema, table } => {
            tokio::spawn(async move {
                let event = match catalog::list_columns(&session, &schema, &table).await {
                    Ok(columns) => AppEvent::ColumnsLoaded {
                        schema,
                        table,
                        columns,
                    },
                    Err(e) => AppEvent::ColumnsFailed {
                        schema,
                        table,
                        error: e.to_string(),
                    },
                };
                let _ = tx.send(event);
            });
        }
        Action::RunQuery { sql, target } => {
            tokio::spawn(async move {
                let event = match query::run_query(&session, &sql, QUERY_DEADLINE).await {
                    Ok(results) => AppEvent::QueryCompleted { target, results },
                    Err(e) => AppEvent::QueryFailed {
                        target,
                        error: e.to_string(),
                    },
                };
                let _ = tx.send(event);
            });
        }
        // Quit never reaches here; the event loop returns first.
        Action::Quit => {}
    }
}
