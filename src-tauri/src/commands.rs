use crate::coach::{builder, tips, Field, OutputFormat, PromptInputs};
use crate::content::{ContentCollection, Tab, TabContent};
use serde::Serialize;
use std::sync::Mutex;
use tauri::command;
use tracing::debug;

/// Session state: the single form record the coach edits.
#[derive(Default)]
pub struct AppState {
    pub inputs: PromptInputs,
}

/* ---------- 1.  COACH FORM ---------- */

#[command]
pub async fn receive_field(
    field: Field,
    value: String,
    state: tauri::State<'_, Mutex<AppState>>,
) -> Result<String, String> {
    let mut guard = state.lock().unwrap();
    let next = guard.inputs.with_text(field, value);
    guard.inputs = next;
    debug!(?field, "form field updated");
    Ok(builder::build(&guard.inputs))
}

#[command]
pub async fn receive_format(
    formato: String,
    state: tauri::State<'_, Mutex<AppState>>,
) -> Result<String, String> {
    let formato = OutputFormat::select(&formato).await?;
    let mut guard = state.lock().unwrap();
    let next = guard.inputs.with_format(formato);
    guard.inputs = next;
    debug!(formato = formato.as_str(), "output format updated");
    Ok(builder::build(&guard.inputs))
}

#[command]
pub async fn current_inputs(
    state: tauri::State<'_, Mutex<AppState>>,
) -> Result<PromptInputs, String> {
    Ok(state.lock().unwrap().inputs.clone())
}

#[command]
pub async fn current_prompt(state: tauri::State<'_, Mutex<AppState>>) -> Result<String, String> {
    Ok(builder::build(&state.lock().unwrap().inputs))
}

/* ---------- 2.  LOOKUPS ---------- */

#[derive(Serialize)]
pub struct FormatOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[command]
pub async fn format_options() -> Result<Vec<FormatOption>, String> {
    Ok(OutputFormat::ALL
        .iter()
        .map(|formato| FormatOption {
            value: formato.as_str(),
            label: formato.label(),
        })
        .collect())
}

#[command]
pub async fn format_tips(formato: String) -> Result<Vec<String>, String> {
    let formato = OutputFormat::select(&formato).await?;
    Ok(tips::tips_for(formato)
        .iter()
        .map(|tip| tip.to_string())
        .collect())
}

/* ---------- 3.  GUIDE CONTENT ---------- */

#[derive(Serialize)]
pub struct TabInfo {
    pub id: &'static str,
    pub label: &'static str,
}

#[command]
pub async fn tabs() -> Result<Vec<TabInfo>, String> {
    Ok(Tab::ALL
        .iter()
        .map(|tab| TabInfo {
            id: tab.id(),
            label: tab.label(),
        })
        .collect())
}

#[command]
pub async fn tab_content(
    tab: Tab,
    content: tauri::State<'_, ContentCollection>,
) -> Result<TabContent, String> {
    Ok(content.tab(tab))
}
