// Learn more about Tauri commands at https://tauri.app/develop/calling-rust/

mod commands;
pub mod coach;
pub mod content;

use anyhow::Context;
use std::sync::Mutex;
use tauri::Manager;
use tracing::info;

use crate::commands::*;
use crate::content::ContentCollection;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Load .env (if present) before anything reads env vars
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_clipboard_manager::init())
        .setup(|app| {
            let content = ContentCollection::load().context("loading guide content")?;
            info!(
                inicio = content.inicio.len(),
                boas_praticas = content.boas_praticas.len(),
                exemplos = content.exemplos.len(),
                faq = content.faq.len(),
                "guide content loaded"
            );
            app.manage(content);
            app.manage(Mutex::new(AppState::default()));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            receive_field,
            receive_format,
            current_inputs,
            current_prompt,
            format_options,
            format_tips,
            tabs,
            tab_content
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
