//! Diagnostics commands

/// Most recent backend log lines, oldest first
#[tauri::command]
pub async fn recent_logs() -> Result<Vec<String>, String> {
    Ok(rolling_logger::recent_lines())
}
