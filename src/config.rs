//! Window and logging configuration

/// Startup settings for the native window
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    /// Application id, also used as the eframe app name
    pub app_id: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Tic-tac-toe".to_string(),
            app_id: "tictactoe".to_string(),
            inner_size: [480.0, 640.0],
            min_inner_size: [320.0, 440.0],
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(self.inner_size)
                .with_min_inner_size(self.min_inner_size)
                .with_title(&self.title)
                .with_app_id(&self.app_id),
            ..Default::default()
        }
    }
}
