//! Typed component options.
//!
//! Each component declares the options its section of a specification file
//! may contain. [`configure`] checks a section against the declarations and
//! produces the [`OptionValues`] the component is built with.

use std::collections::BTreeMap;
use std::fmt;

use toml::{Table, Value};

use crate::core::errors::DeployError;

/// The type of an option's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    Str,
    Bool,
    Int,
    List,
    Dict,
}

impl OptionType {
    fn accepts(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (OptionType::Str, Value::String(_))
                | (OptionType::Bool, Value::Boolean(_))
                | (OptionType::Int, Value::Integer(_))
                | (OptionType::List, Value::Array(_))
                | (OptionType::Dict, Value::Table(_))
        )
    }

    /// The value used when an optional option without a default is omitted.
    fn empty_value(&self) -> Value {
        match self {
            OptionType::Str => Value::String(String::new()),
            OptionType::Bool => Value::Boolean(false),
            OptionType::Int => Value::Integer(0),
            OptionType::List => Value::Array(Vec::new()),
            OptionType::Dict => Value::Table(Table::new()),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptionType::Str => "str",
            OptionType::Bool => "bool",
            OptionType::Int => "int",
            OptionType::List => "list",
            OptionType::Dict => "dict",
        };
        write!(f, "{}", name)
    }
}

/// The declaration of one option.
#[derive(Debug, Clone)]
pub struct ComponentOption {
    pub name: String,
    pub ty: OptionType,
    pub required: bool,
    pub default: Option<Value>,
    pub values: Vec<String>,
    pub help: String,
}

impl ComponentOption {
    pub fn new(name: impl Into<String>, ty: OptionType) -> Self {
        ComponentOption {
            name: name.into(),
            ty,
            required: false,
            default: None,
            values: Vec::new(),
            help: String::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Restrict the option (or each element of a list option) to a set of values.
    pub fn values(mut self, values: &[&str]) -> Self {
        self.values = values.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// The full description shown by `--options`.
    pub fn description(&self) -> String {
        let mut text = if self.help.is_empty() {
            "None available.".to_string()
        } else {
            self.help.clone()
        };

        if !self.values.is_empty() {
            let values: Vec<String> = self.values.iter().map(|v| self.format_value(v)).collect();
            text.push_str(&format!(" The possible values are: {}.", values.join(", ")));
        }

        if let Some(ref default) = self.default {
            let default = match default {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            text.push_str(&format!(" The default value is {}.", self.format_value(&default)));
        }

        text
    }

    fn format_value(&self, value: &str) -> String {
        if self.ty == OptionType::Int {
            value.to_string()
        } else {
            format!("'{}'", value)
        }
    }
}

/// The configured values of a component's options.
#[derive(Debug, Clone, Default)]
pub struct OptionValues {
    values: BTreeMap<String, Value>,
}

impl OptionValues {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn get_str(&self, name: &str) -> &str {
        self.values.get(name).and_then(Value::as_str).unwrap_or("")
    }

    pub fn get_bool(&self, name: &str) -> bool {
        self.values
            .get(name)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn get_int(&self, name: &str) -> i64 {
        self.values
            .get(name)
            .and_then(Value::as_integer)
            .unwrap_or(0)
    }

    /// Get a list option as strings, ignoring elements of other types.
    pub fn get_list(&self, name: &str) -> Vec<String> {
        self.values
            .get(name)
            .and_then(Value::as_array)
            .map(|values| {
                values
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }
}

/// Check a component's configuration against its declared options.
///
/// Every declared option is removed from `config` as it is processed. Any
/// keys left over are unknown options.
pub fn configure(
    component: &str,
    options: &[ComponentOption],
    mut config: Table,
) -> Result<OptionValues, DeployError> {
    let mut values = OptionValues::default();

    for option in options {
        let value = match config.remove(&option.name) {
            None => {
                if option.required {
                    return Err(DeployError::component(
                        component,
                        format!("'{}' has not been specified", option.name),
                    ));
                }

                option
                    .default
                    .clone()
                    .unwrap_or_else(|| option.ty.empty_value())
            }
            Some(value) if !option.ty.accepts(&value) => {
                return Err(DeployError::component(
                    component,
                    format!("value of '{}' has an unexpected type", option.name),
                ));
            }
            Some(value) => {
                if !option.values.is_empty() {
                    check_allowed(component, option, &value)?;
                }
                value
            }
        };

        values.set(option.name.clone(), value);
    }

    if !config.is_empty() {
        let unused: Vec<&str> = config.keys().map(String::as_str).collect();
        return Err(DeployError::component(
            component,
            format!("unknown option(s): {}", unused.join(", ")),
        ));
    }

    Ok(values)
}

fn check_allowed(
    component: &str,
    option: &ComponentOption,
    value: &Value,
) -> Result<(), DeployError> {
    let candidates = match value {
        Value::Array(items) => items.iter().collect::<Vec<_>>(),
        other => vec![other],
    };

    for candidate in candidates {
        let text = match candidate {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        if !option.values.contains(&text) {
            return Err(DeployError::component(
                component,
                format!(
                    "'{}' must have one of these values: {} and not '{}'",
                    option.name,
                    option.values.join(", "),
                    text
                ),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(text: &str) -> Table {
        text.parse().unwrap()
    }

    fn options() -> Vec<ComponentOption> {
        vec![
            ComponentOption::new("version", OptionType::Str).required(),
            ComponentOption::new("install_from_source", OptionType::Bool).default(true),
            ComponentOption::new("edition", OptionType::Str).values(&["commercial", "opensource"]),
            ComponentOption::new("disabled_features", OptionType::List),
        ]
    }

    #[test]
    fn test_defaults_and_empty_values() {
        let values = configure("Qt", &options(), table("version = '5.15.0'")).unwrap();

        assert_eq!(values.get_str("version"), "5.15.0");
        assert!(values.get_bool("install_from_source"));
        assert_eq!(values.get_str("edition"), "");
        assert!(values.get_list("disabled_features").is_empty());
    }

    #[test]
    fn test_missing_required() {
        let err = configure("Qt", &options(), Table::new()).unwrap_err();
        assert_eq!(err.to_string(), "Qt: 'version' has not been specified");
    }

    #[test]
    fn test_wrong_type() {
        let err = configure("Qt", &options(), table("version = 5")).unwrap_err();
        assert_eq!(err.to_string(), "Qt: value of 'version' has an unexpected type");
    }

    #[test]
    fn test_disallowed_value() {
        let err = configure(
            "Qt",
            &options(),
            table("version = '5.15.0'\nedition = 'free'"),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Qt: 'edition' must have one of these values: commercial, opensource and not 'free'"
        );
    }

    #[test]
    fn test_unknown_options_in_declaration_order() {
        let err = configure(
            "Qt",
            &options(),
            table("version = '5.15.0'\nzeta = 1\nalpha = 2"),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Qt: unknown option(s): zeta, alpha");
    }

    #[test]
    fn test_description() {
        let option = ComponentOption::new("edition", OptionType::Str)
            .values(&["commercial", "opensource"])
            .default("opensource")
            .help("The Qt edition being used.");

        assert_eq!(
            option.description(),
            "The Qt edition being used. The possible values are: 'commercial', \
             'opensource'. The default value is 'opensource'."
        );
    }
}
