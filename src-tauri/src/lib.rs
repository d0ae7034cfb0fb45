use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub mod analytics;
pub mod api;
pub mod color;
pub mod stylesheet;

use color::{RngUnitSource, UnitSource};
use stylesheet::StyleSheet;

pub struct AppState {
    stylesheet: Mutex<StyleSheet>,
    sampler: Mutex<Box<dyn UnitSource + Send>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_sampler(Box::new(RngUnitSource::new(StdRng::from_os_rng())))
    }

    pub fn with_sampler(sampler: Box<dyn UnitSource + Send>) -> Self {
        Self {
            stylesheet: Mutex::new(StyleSheet::new()),
            sampler: Mutex::new(sampler),
        }
    }

    pub fn get_stylesheet(&self) -> std::sync::MutexGuard<'_, StyleSheet> {
        self.stylesheet.lock().expect("stylesheet lock poisoned")
    }

    pub fn get_sampler(&self) -> std::sync::MutexGuard<'_, Box<dyn UnitSource + Send>> {
        self.sampler.lock().expect("sampler lock poisoned")
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub mod commands {
    use super::*;
    use crate::analytics::GoalTracker;
    use serde::Serialize;
    use tauri::{AppHandle, Runtime, State};

    #[tauri::command]
    pub fn paint_all<R: Runtime>(
        app: AppHandle<R>,
        state: State<AppState>,
    ) -> Result<api::PaintResponse, String> {
        let color = {
            let mut sampler = state.get_sampler();
            color::Color::random(sampler.as_mut())
        };

        let rule = {
            let mut sheet = state.get_stylesheet();
            sheet.paint(color).to_string()
        };

        analytics::tracker(&app).reach_goal(analytics::BUTTON_CLICK_GOAL);

        Ok(api::PaintResponse { rule, color })
    }

    #[derive(Debug, Serialize)]
    pub struct StyleSnapshot {
        pub rule: String,
        pub color: Option<color::Color>,
    }

    #[tauri::command]
    pub fn get_style(state: State<AppState>) -> Result<StyleSnapshot, String> {
        let sheet = state.get_stylesheet();
        Ok(StyleSnapshot {
            rule: sheet.text().to_string(),
            color: sheet.color(),
        })
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .manage(AppState::new())
        .invoke_handler(tauri::generate_handler![
            commands::paint_all,
            commands::get_style
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
