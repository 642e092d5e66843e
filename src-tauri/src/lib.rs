//! Tasks Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: Tauri command handlers

use tauri::{Emitter, Manager};

mod commands;
mod config;
mod domain;
mod repository;

use config::AppConfig;
use repository::{open_connection, DbState, TodoRepository};

/// Event emitted once the database is ready to serve commands
pub const DB_INITIALIZED_EVENT: &str = "db-initialized";

/// Application state shared across commands
pub struct AppState {
    pub db_state: DbState,
    pub todo_repo: TodoRepository,
}

impl AppState {
    pub fn new(db_state: DbState) -> Self {
        Self {
            todo_repo: TodoRepository::new(db_state.conn.clone()),
            db_state,
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();
            let config = AppConfig::resolve(&app_handle)?;

            rolling_logger::init_logger_with(
                rolling_logger::LoggerConfig::new(config.log_dir.clone(), "Tasks")
                    .with_level(config.log_level),
            )?;
            log::info!(
                "event=app_start status=ok version={} db_path={}",
                env!("CARGO_PKG_VERSION"),
                config.db_path.display()
            );

            // Manage state before the database exists so commands can report readiness
            let db_state = DbState::new(config.db_path.clone());
            app.manage(AppState::new(db_state.clone()));

            tauri::async_runtime::spawn(async move {
                let db_path = db_state.path().to_path_buf();
                let opened = tauri::async_runtime::spawn_blocking(move || open_connection(&db_path)).await;

                match opened {
                    Ok(Ok(conn)) => {
                        db_state.install(conn).await;
                        log::info!("event=db_init status=ok");
                        if let Err(e) = app_handle.emit(DB_INITIALIZED_EVENT, ()) {
                            log::error!("event=db_init status=error error=failed to emit event: {}", e);
                        }
                    }
                    Ok(Err(e)) => {
                        log::error!("event=db_init status=error error={}", e);
                    }
                    Err(e) => {
                        log::error!("event=db_init status=error error=init task failed: {}", e);
                    }
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::create_todo,
            commands::get_all_todos,
            commands::delete_todo,
            commands::toggle_completed,
            commands::update_todo,
            commands::db_ready,
            commands::recent_logs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
