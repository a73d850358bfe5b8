//! Sysroot specification files.
//!
//! A specification is a TOML file with one table per component. The table's
//! name selects the plugin that implements the component. A table may be
//! restricted with `disabled_targets` or `enabled_targets`, and any sub-table
//! whose name is a scope matching the target overrides the table's values.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use toml::{Table, Value};

use crate::core::errors::{DeployError, TomlSyntaxError};
use crate::core::platform::Architecture;
use crate::core::scope::Scope;
use crate::sysroot::component::{Component, ComponentPlugin};

/// Creates an instance of a plugin.
pub type PluginFactory = fn() -> Box<dyn ComponentPlugin>;

/// The plugins that can implement components, by component name.
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
    factories: BTreeMap<String, PluginFactory>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        PluginRegistry::default()
    }

    pub fn register(&mut self, name: impl Into<String>, factory: PluginFactory) {
        self.factories.insert(name.into(), factory);
    }

    pub fn get(&self, name: &str) -> Option<PluginFactory> {
        self.factories.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

#[derive(Debug, Clone)]
struct Section {
    name: String,
    config: Table,
    factory: PluginFactory,
}

/// A loaded specification file.
#[derive(Debug, Clone)]
pub struct Specification {
    path: PathBuf,
    sections: Vec<Section>,
}

impl Specification {
    /// Load a specification, finding a plugin for every component.
    pub fn load(path: &Path, registry: &PluginRegistry) -> Result<Self> {
        if path.is_dir() {
            return Err(DeployError::config(format!("{} is a directory", path.display())).into());
        }
        if !path.exists() {
            return Err(DeployError::config(format!("{} was not found", path.display())).into());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        Specification::parse(path, &contents, registry)
    }

    /// Parse the contents of a specification file.
    pub fn parse(path: &Path, contents: &str, registry: &PluginRegistry) -> Result<Self> {
        let table: Table = toml::from_str(contents)
            .map_err(|e| TomlSyntaxError::new(&path.display().to_string(), contents, &e))?;

        let mut sections = Vec::new();

        for (name, value) in table {
            let Value::Table(config) = value else {
                return Err(DeployError::config(format!("unexpected option '{}'", name)).into());
            };

            let factory = registry.get(&name).ok_or_else(|| {
                DeployError::config(format!("unable to find a plugin for '{}'", name))
            })?;

            sections.push(Section {
                name,
                config,
                factory,
            });
        }

        Ok(Specification {
            path: path.to_path_buf(),
            sections,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The directory containing the specification file.
    pub fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// The names of the components in the order they are specified.
    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    /// Create the components that apply to a target.
    pub fn create_components(&self, target: Architecture) -> Result<Vec<Component>> {
        let mut components = Vec::new();

        for section in &self.sections {
            let Some(config) = target_config(&section.name, &section.config, target)? else {
                continue;
            };

            components.push(Component::new(&section.name, (section.factory)(), config)?);
        }

        Ok(components)
    }
}

/// The configuration of a component for a target, or `None` if disabled.
fn target_config(
    name: &str,
    config: &Table,
    target: Architecture,
) -> Result<Option<Table>, DeployError> {
    let mut config = config.clone();

    if let Some(disabled) = config.remove("disabled_targets") {
        if targets(name, "disabled_targets", &disabled)?.matches(target) {
            return Ok(None);
        }
    }

    if let Some(enabled) = config.remove("enabled_targets") {
        if !targets(name, "enabled_targets", &enabled)?.matches(target) {
            return Ok(None);
        }
    }

    let mut defaults = Table::new();
    let mut overrides = None;

    for (key, value) in config {
        match value {
            Value::Table(sub) => {
                let scope: Scope = key
                    .parse()
                    .map_err(|e: DeployError| DeployError::component(name, e.to_string()))?;

                // The last matching sub-table wins.
                if scope.matches(target) {
                    overrides = Some(sub);
                }
            }
            other => {
                defaults.insert(key, other);
            }
        }
    }

    for (key, value) in overrides.unwrap_or_default() {
        defaults.insert(key, value);
    }

    Ok(Some(defaults))
}

/// Interpret a scope string or a list of platform names.
fn targets(name: &str, option: &str, value: &Value) -> Result<Scope, DeployError> {
    let scope = match value {
        Value::String(scope) => scope.parse(),
        Value::Array(platforms) => {
            let names: Vec<&str> = platforms.iter().filter_map(Value::as_str).collect();
            if names.len() != platforms.len() {
                return Err(DeployError::component(
                    name,
                    format!("'{}' must be a list of platform names", option),
                ));
            }
            Scope::from_platforms(&names)
        }
        _ => {
            return Err(DeployError::component(
                name,
                format!("value of '{}' has an unexpected type", option),
            ))
        }
    };

    scope.map_err(|e| DeployError::component(name, e.to_string()))
}

/// The width of the terminal, from `COLUMNS` when it is set.
pub fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|columns| columns.parse().ok())
        .unwrap_or(80)
}

const HEADINGS: [&str; 4] = ["Component", "Option [*=required]", "Type", "Description"];

/// Format a table of the options of some components.
///
/// Descriptions are word wrapped to fit `width`.
pub fn show_options(components: &[&Component], width: usize) -> String {
    let mut widths = HEADINGS.map(str::len);
    let mut rows: Vec<[String; 3]> = Vec::new();
    let mut descriptions = Vec::new();

    for component in components {
        let mut component_col = component.name.clone();

        for option in component.declared_options() {
            let mut option_name = option.name.clone();
            if option.required {
                option_name.push('*');
            }

            let row = [component_col, option_name, option.ty.to_string()];
            for (w, col) in widths.iter_mut().zip(&row) {
                *w = (*w).max(col.len());
            }
            rows.push(row);
            descriptions.push(option.description());

            // Don't repeat the component name.
            component_col = String::new();
        }
    }

    let avail = widths[..3]
        .iter()
        .fold(width.saturating_sub(1), |avail, w| avail.saturating_sub(2 + w))
        .max(widths[3]);

    let mut out = String::new();
    push_row(&mut out, &HEADINGS.map(str::to_string), &widths);
    push_row(&mut out, &HEADINGS.map(|h| "-".repeat(h.len())), &widths);

    for (row, description) in rows.into_iter().zip(descriptions) {
        let mut columns = row;

        for line in wrap(&description, avail) {
            let [a, b, c] = columns;
            push_row(&mut out, &[a, b, c, line], &widths);
            columns = Default::default();
        }
    }

    out
}

/// Word wrap a description. A word that will not fit on a line by itself is
/// truncated.
fn wrap(text: &str, avail: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.len() + word.len() < avail {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        } else if !line.is_empty() {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        } else {
            lines.push(word.chars().take(avail).collect());
        }
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }

    lines
}

fn push_row(out: &mut String, columns: &[String; 4], widths: &[usize; 4]) {
    let row: Vec<String> = columns
        .iter()
        .zip(widths)
        .map(|(col, &width)| format!("{:width$}", col, width = width))
        .collect();

    out.push_str(row.join("  ").trim_end());
    out.push('\n');
}
