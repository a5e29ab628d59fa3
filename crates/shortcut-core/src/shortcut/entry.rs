//! Desktop entry model and renderer.
//!
//! Renders the subset of the XDG Desktop Entry Specification the builder
//! form edits. Values are written verbatim, with no escaping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{AppConfig, EntryDefaults};
use crate::error::{Result, ShortcutError};

/// The shortcut being edited.
///
/// Every field has exactly one setter; nothing else writes to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutEntry {
    version: String,
    #[serde(rename = "type")]
    entry_type: String,
    opens_terminal: bool,
    executable_path: String,
    name: String,
    icon_path: String,
}

impl Default for ShortcutEntry {
    fn default() -> Self {
        Self {
            version: EntryDefaults::VERSION.to_string(),
            entry_type: EntryDefaults::ENTRY_TYPE.to_string(),
            opens_terminal: EntryDefaults::OPENS_TERMINAL,
            executable_path: String::new(),
            name: String::new(),
            icon_path: String::new(),
        }
    }
}

impl ShortcutEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new shortcut entry builder.
    pub fn builder() -> ShortcutEntryBuilder {
        ShortcutEntryBuilder::new()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn entry_type(&self) -> &str {
        &self.entry_type
    }

    pub fn opens_terminal(&self) -> bool {
        self.opens_terminal
    }

    pub fn executable_path(&self) -> &str {
        &self.executable_path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon_path(&self) -> &str {
        &self.icon_path
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = version.into();
    }

    pub fn set_entry_type(&mut self, entry_type: impl Into<String>) {
        self.entry_type = entry_type.into();
    }

    pub fn set_opens_terminal(&mut self, opens_terminal: bool) {
        self.opens_terminal = opens_terminal;
    }

    pub fn set_executable_path(&mut self, executable_path: impl Into<String>) {
        self.executable_path = executable_path.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_icon_path(&mut self, icon_path: impl Into<String>) {
        self.icon_path = icon_path.into();
    }

    /// Set a field by name.
    ///
    /// The value kind must match the field: text for the string fields, a
    /// flag for `opens_terminal`. On a mismatch the entry is left unchanged.
    pub fn mutate(&mut self, field: ShortcutField, value: FieldValue) -> Result<()> {
        debug!("Setting {} to {:?}", field, value);

        match (field, value) {
            (ShortcutField::OpensTerminal, FieldValue::Flag(flag)) => {
                self.set_opens_terminal(flag);
            }
            (ShortcutField::OpensTerminal, FieldValue::Text(_)) => {
                return Err(ShortcutError::InvalidParams {
                    message: format!("Field '{}' expects a boolean value", field),
                });
            }
            (_, FieldValue::Flag(_)) => {
                return Err(ShortcutError::InvalidParams {
                    message: format!("Field '{}' expects a string value", field),
                });
            }
            (ShortcutField::Name, FieldValue::Text(text)) => self.set_name(text),
            (ShortcutField::ExecutablePath, FieldValue::Text(text)) => {
                self.set_executable_path(text)
            }
            (ShortcutField::IconPath, FieldValue::Text(text)) => self.set_icon_path(text),
            (ShortcutField::Version, FieldValue::Text(text)) => self.set_version(text),
            (ShortcutField::EntryType, FieldValue::Text(text)) => self.set_entry_type(text),
        }

        Ok(())
    }

    /// Generate the .desktop file content.
    ///
    /// The `Icon=` line only appears when an icon path is set. The document
    /// always ends with a blank line.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ShortcutEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", AppConfig::DESKTOP_ENTRY_HEADER)?;
        writeln!(f, "Version={}", self.version)?;
        writeln!(f, "Type={}", self.entry_type)?;
        writeln!(
            f,
            "Terminal={}",
            if self.opens_terminal { "true" } else { "false" }
        )?;
        writeln!(f, "Name={}", self.name)?;
        writeln!(f, "Exec={}", self.executable_path)?;

        if !self.icon_path.is_empty() {
            writeln!(f, "Icon={}", self.icon_path)?;
        }

        writeln!(f)
    }
}

/// An editable field of a [`ShortcutEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutField {
    Name,
    ExecutablePath,
    IconPath,
    Version,
    EntryType,
    OpensTerminal,
}

impl ShortcutField {
    pub const ALL: [ShortcutField; 6] = [
        ShortcutField::Name,
        ShortcutField::ExecutablePath,
        ShortcutField::IconPath,
        ShortcutField::Version,
        ShortcutField::EntryType,
        ShortcutField::OpensTerminal,
    ];

    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShortcutField::Name => "name",
            ShortcutField::ExecutablePath => "executable_path",
            ShortcutField::IconPath => "icon_path",
            ShortcutField::Version => "version",
            ShortcutField::EntryType => "type",
            ShortcutField::OpensTerminal => "opens_terminal",
        }
    }
}

impl fmt::Display for ShortcutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShortcutField {
    type Err = ShortcutError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(ShortcutField::Name),
            "executable_path" | "executablePath" | "exec" => Ok(ShortcutField::ExecutablePath),
            "icon_path" | "iconPath" | "icon" => Ok(ShortcutField::IconPath),
            "version" => Ok(ShortcutField::Version),
            "type" | "entry_type" | "entryType" => Ok(ShortcutField::EntryType),
            "opens_terminal" | "opensTerminal" | "terminal" => Ok(ShortcutField::OpensTerminal),
            other => Err(ShortcutError::InvalidParams {
                message: format!("Unknown shortcut field: {}", other),
            }),
        }
    }
}

/// A value for [`ShortcutEntry::mutate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// Builder for shortcut entries.
pub struct ShortcutEntryBuilder {
    entry: ShortcutEntry,
}

impl ShortcutEntryBuilder {
    /// Create a new builder starting from the defaults.
    pub fn new() -> Self {
        Self {
            entry: ShortcutEntry::default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entry.set_name(name);
        self
    }

    pub fn executable_path(mut self, executable_path: impl Into<String>) -> Self {
        self.entry.set_executable_path(executable_path);
        self
    }

    pub fn icon_path(mut self, icon_path: impl Into<String>) -> Self {
        self.entry.set_icon_path(icon_path);
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.entry.set_version(version);
        self
    }

    pub fn entry_type(mut self, entry_type: impl Into<String>) -> Self {
        self.entry.set_entry_type(entry_type);
        self
    }

    pub fn opens_terminal(mut self, opens_terminal: bool) -> Self {
        self.entry.set_opens_terminal(opens_terminal);
        self
    }

    /// Build the shortcut entry.
    pub fn build(self) -> ShortcutEntry {
        self.entry
    }
}

impl Default for ShortcutEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(content: &str) -> Vec<&str> {
        content.split('\n').collect()
    }

    #[test]
    fn test_defaults() {
        let entry = ShortcutEntry::new();
        assert_eq!(entry.version(), "1.0");
        assert_eq!(entry.entry_type(), "Application");
        assert!(!entry.opens_terminal());
        assert_eq!(entry.name(), "");
        assert_eq!(entry.executable_path(), "");
        assert_eq!(entry.icon_path(), "");
    }

    #[test]
    fn test_render_without_icon() {
        let entry = ShortcutEntry::builder()
            .name("Foo")
            .executable_path("/bin/ls")
            .opens_terminal(true)
            .build();

        assert_eq!(
            entry.render(),
            "[Desktop Entry]\nVersion=1.0\nType=Application\nTerminal=true\nName=Foo\nExec=/bin/ls\n\n"
        );
    }

    #[test]
    fn test_render_with_icon() {
        let entry = ShortcutEntry::builder()
            .name("Foo")
            .executable_path("/bin/ls")
            .icon_path("/usr/share/pixmaps/foo.png")
            .build();

        assert_eq!(
            entry.render(),
            "[Desktop Entry]\nVersion=1.0\nType=Application\nTerminal=false\nName=Foo\nExec=/bin/ls\nIcon=/usr/share/pixmaps/foo.png\n\n"
        );
    }

    #[test]
    fn test_render_default_entry_keeps_empty_lines() {
        let content = ShortcutEntry::new().render();
        assert!(content.contains("Name=\n"));
        assert!(content.contains("Exec=\n"));
        assert!(!content.contains("Icon="));
    }

    #[test]
    fn test_render_is_deterministic() {
        let entry = ShortcutEntry::builder().name("Same").build();
        assert_eq!(entry.render(), entry.render());
    }

    #[test]
    fn test_values_are_not_escaped() {
        let entry = ShortcutEntry::builder()
            .name("A=B; C\\D")
            .executable_path("env FOO=1 /opt/app --flag")
            .build();
        let content = entry.render();
        assert!(content.contains("Name=A=B; C\\D\n"));
        assert!(content.contains("Exec=env FOO=1 /opt/app --flag\n"));
    }

    #[test]
    fn test_single_field_change_touches_one_line() {
        let mut entry = ShortcutEntry::builder()
            .name("Before")
            .executable_path("/bin/true")
            .icon_path("/tmp/icon.png")
            .build();
        let before = entry.render();

        entry.set_version("1.5");
        let after = entry.render();

        let changed: Vec<_> = lines(&before)
            .into_iter()
            .zip(lines(&after))
            .filter(|(a, b)| a != b)
            .collect();
        assert_eq!(changed, vec![("Version=1.0", "Version=1.5")]);
    }

    #[test]
    fn test_mutate_sets_each_field() {
        let mut entry = ShortcutEntry::new();
        entry.mutate(ShortcutField::Name, "App".into()).unwrap();
        entry
            .mutate(ShortcutField::ExecutablePath, "/usr/bin/app".into())
            .unwrap();
        entry
            .mutate(ShortcutField::IconPath, "/tmp/app.svg".into())
            .unwrap();
        entry.mutate(ShortcutField::Version, "1.5".into()).unwrap();
        entry.mutate(ShortcutField::EntryType, "Link".into()).unwrap();
        entry
            .mutate(ShortcutField::OpensTerminal, true.into())
            .unwrap();

        let expected = ShortcutEntry::builder()
            .name("App")
            .executable_path("/usr/bin/app")
            .icon_path("/tmp/app.svg")
            .version("1.5")
            .entry_type("Link")
            .opens_terminal(true)
            .build();
        assert_eq!(entry, expected);
    }

    #[test]
    fn test_mutate_rejects_wrong_value_kind() {
        let mut entry = ShortcutEntry::new();

        let err = entry
            .mutate(ShortcutField::OpensTerminal, "yes".into())
            .unwrap_err();
        assert!(matches!(err, ShortcutError::InvalidParams { .. }));

        let err = entry.mutate(ShortcutField::Name, true.into()).unwrap_err();
        assert!(matches!(err, ShortcutError::InvalidParams { .. }));

        assert_eq!(entry, ShortcutEntry::new());
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in ShortcutField::ALL {
            assert_eq!(field.as_str().parse::<ShortcutField>().unwrap(), field);
        }
        assert_eq!(
            "executablePath".parse::<ShortcutField>().unwrap(),
            ShortcutField::ExecutablePath
        );
        assert!("colour".parse::<ShortcutField>().is_err());
    }

    #[test]
    fn test_field_value_from_json() {
        let text: FieldValue = serde_json::from_value(serde_json::json!("abc")).unwrap();
        assert_eq!(text, FieldValue::Text("abc".into()));
        let flag: FieldValue = serde_json::from_value(serde_json::json!(true)).unwrap();
        assert_eq!(flag, FieldValue::Flag(true));
    }

    #[test]
    fn test_entry_serializes_type_key() {
        let value = serde_json::to_value(ShortcutEntry::new()).unwrap();
        assert_eq!(value["type"], "Application");
        assert_eq!(value["opens_terminal"], false);
    }
}
