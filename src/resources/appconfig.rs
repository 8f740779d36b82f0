//! Application configuration resource.
//!
//! Settings are loaded from an INI file. Defaults are used for anything
//! missing, so the demo starts even without a configuration file.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 450
//! target_fps = 60
//! vsync = true
//!
//! [progress]
//! rate = 4.0
//! ; lower | higher | none
//! snap = none
//! ; center | fill | hidden
//! label = center
//! ; optional, half the container width
//! follow_span = 210
//!
//! [clickable]
//! methods = tap, double_tap, hold
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::clickable::InteractionMethod;
use crate::components::progressbar::{DEFAULT_RATE, LabelMode, ProgressSnap};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 450;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Application configuration resource.
///
/// Changes made at runtime are pushed into live components by
/// [`apply_config_changes`](crate::systems::appconfig::apply_config_changes).
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Base decay rate of progress bars.
    pub progress_rate: f32,
    pub progress_snap: ProgressSnap,
    pub label_mode: LabelMode,
    /// Half the container width for labels following the fill. Defaults to
    /// half the window width.
    pub follow_span: Option<f32>,
    /// Interaction mask applied to every clickable.
    pub clickable_methods: InteractionMethod,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            progress_rate: DEFAULT_RATE,
            progress_snap: ProgressSnap::NoSnap,
            label_mode: LabelMode::Centered,
            follow_span: None,
            clickable_methods: InteractionMethod::all(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values. Unparseable enum values are
    /// logged and skipped. Returns an error if the file cannot be read.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, rate={}, snap={:?}, label={:?}, methods={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.progress_rate,
            self.progress_snap,
            self.label_mode,
            self.clickable_methods.describe()
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [progress] section
        if let Some(rate) = config.getfloat("progress", "rate").ok().flatten() {
            if rate > 0.0 {
                self.progress_rate = rate as f32;
            } else {
                warn!("Ignoring non-positive progress rate {}", rate);
            }
        }
        if let Some(snap) = config.get("progress", "snap") {
            match snap.parse::<ProgressSnap>() {
                Ok(snap) => self.progress_snap = snap,
                Err(e) => warn!("{}", e),
            }
        }
        if let Some(label) = config.get("progress", "label") {
            match label.parse::<LabelMode>() {
                Ok(mode) => self.label_mode = mode,
                Err(e) => warn!("{}", e),
            }
        }
        if let Some(span) = config.getfloat("progress", "follow_span").ok().flatten() {
            self.follow_span = Some(span as f32);
        }

        // [clickable] section
        if let Some(methods) = config.get("clickable", "methods") {
            match InteractionMethod::parse_list(&methods) {
                Ok(methods) => self.clickable_methods = methods,
                Err(e) => warn!("{}", e),
            }
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        config.set("progress", "rate", Some(self.progress_rate.to_string()));
        let snap = match self.progress_snap {
            ProgressSnap::SnapLower => "lower",
            ProgressSnap::SnapHigher => "higher",
            ProgressSnap::NoSnap => "none",
        };
        config.set("progress", "snap", Some(snap.to_string()));
        let label = match self.label_mode {
            LabelMode::Centered => "center",
            LabelMode::FollowsFill => "fill",
            LabelMode::Hidden => "hidden",
        };
        config.set("progress", "label", Some(label.to_string()));
        if let Some(span) = self.follow_span {
            config.set("progress", "follow_span", Some(span.to_string()));
        }

        let methods: Vec<&str> = self
            .clickable_methods
            .iter()
            .map(|m| match m {
                InteractionMethod::TAP => "tap",
                InteractionMethod::DOUBLE_TAP => "double_tap",
                _ => "hold",
            })
            .collect();
        config.set("clickable", "methods", Some(methods.join(", ")));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Span used by labels following the fill: the configured value, or half
    /// the window width, which is the container of the demo bars.
    pub fn effective_follow_span(&self) -> f32 {
        self.follow_span.unwrap_or(self.window_width as f32 * 0.5)
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::new();
        assert_eq!(config.window_size(), (800, 450));
        assert_eq!(config.progress_snap, ProgressSnap::NoSnap);
        assert_eq!(config.label_mode, LabelMode::Centered);
        assert_eq!(config.clickable_methods, InteractionMethod::all());
        assert_eq!(config.follow_span, None);
        assert_eq!(config.effective_follow_span(), 400.0);
    }

    #[test]
    fn test_load_from_str_overrides_sections() {
        let mut config = AppConfig::new();
        config
            .load_from_str(
                "[window]\nwidth = 1024\nvsync = false\n\
                 [progress]\nrate = 2.5\nsnap = lower\nlabel = fill\nfollow_span = 210\n\
                 [clickable]\nmethods = tap, hold\n",
            )
            .unwrap();
        assert_eq!(config.window_width, 1024);
        assert_eq!(config.window_height, 450);
        assert!(!config.vsync);
        assert!((config.progress_rate - 2.5).abs() < 1e-6);
        assert_eq!(config.progress_snap, ProgressSnap::SnapLower);
        assert_eq!(config.label_mode, LabelMode::FollowsFill);
        assert_eq!(config.follow_span, Some(210.0));
        assert_eq!(config.effective_follow_span(), 210.0);
        assert_eq!(
            config.clickable_methods,
            InteractionMethod::TAP | InteractionMethod::TAP_AND_HOLD
        );
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let mut config = AppConfig::new();
        config
            .load_from_str("[progress]\nrate = -1\nsnap = sideways\n[clickable]\nmethods = swipe\n")
            .unwrap();
        assert!((config.progress_rate - DEFAULT_RATE).abs() < 1e-6);
        assert_eq!(config.progress_snap, ProgressSnap::NoSnap);
        assert_eq!(config.clickable_methods, InteractionMethod::all());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = AppConfig::with_path("./definitely/not/here.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_size(), (800, 450));
    }

    #[test]
    fn test_save_then_load_preserves_policies() {
        let path = std::env::temp_dir().join(format!("tapgauge-{}.ini", std::process::id()));
        let mut config = AppConfig::with_path(&path);
        config.progress_snap = ProgressSnap::SnapHigher;
        config.label_mode = LabelMode::Hidden;
        config.clickable_methods = InteractionMethod::DOUBLE_TAP;
        config.save_to_file().unwrap();

        let mut loaded = AppConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.progress_snap, ProgressSnap::SnapHigher);
        assert_eq!(loaded.label_mode, LabelMode::Hidden);
        assert_eq!(loaded.clickable_methods, InteractionMethod::DOUBLE_TAP);
    }
}
