//! Centralized configuration for the shortcut builder.
//!
//! Compile-time constants for entry defaults, dialog titles, layout and the
//! RPC backend. Runtime configuration is command-line only and lives in the
//! `shortcut-rpc` binary.

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "Linux Desktop Shortcut Builder";
    /// Extension appended to the shortcut name when building the file name.
    pub const DESKTOP_FILE_EXTENSION: &'static str = "desktop";
    /// Section header every rendered entry starts with.
    pub const DESKTOP_ENTRY_HEADER: &'static str = "[Desktop Entry]";
}

/// Default field values for a fresh shortcut entry.
pub struct EntryDefaults;

impl EntryDefaults {
    pub const VERSION: &'static str = "1.0";
    pub const ENTRY_TYPE: &'static str = "Application";
    pub const OPENS_TERMINAL: bool = false;
}

/// File and folder picker dialog settings.
pub struct PickerConfig;

impl PickerConfig {
    pub const EXECUTABLE_TITLE: &'static str = "Select Executable File";
    pub const ICON_TITLE: &'static str = "Select Icon File";
    pub const EXPORT_DIRECTORY_TITLE: &'static str = "Select Shortcut Output Path";
}

/// Window layout thresholds.
pub struct LayoutConfig;

impl LayoutConfig {
    /// Share of the client width discounted before comparing against height.
    pub const LANDSCAPE_WIDTH_DISCOUNT: f64 = 0.25;
}

/// RPC backend defaults.
pub struct RpcConfig;

impl RpcConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    /// Port 0 lets the OS pick a free port.
    pub const DEFAULT_PORT: u16 = 0;
    /// Stdout prefix the UI process reads the bound port from.
    pub const PORT_ANNOUNCE_PREFIX: &'static str = "RPC_PORT=";
}
