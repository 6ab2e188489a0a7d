//! Alias domain model
//!
//! An alias binds a shell-safe name to a command string. Entries are kept in
//! an [`AliasMap`] keyed by name, which is also the on-disk JSON shape:
//!
//! ```json
//! {
//!     "greet": {
//!         "is_function": false,
//!         "target": "echo hi"
//!     }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// All registered aliases, keyed by name
///
/// A `BTreeMap` keeps keys unique and sorted, so serialization and shell
/// regeneration are deterministic.
pub type AliasMap = BTreeMap<String, AliasEntry>;

/// Kind of shell definition an entry produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AliasKind {
    Alias,
    Function,
}

impl AliasKind {
    pub fn from_function_flag(is_function: bool) -> Self {
        if is_function {
            AliasKind::Function
        } else {
            AliasKind::Alias
        }
    }

    /// Returns a display label for the kind
    pub fn label(&self) -> &'static str {
        match self {
            AliasKind::Alias => "alias",
            AliasKind::Function => "function",
        }
    }
}

/// A registered command definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    /// Wrap the target as a function body instead of a plain alias
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_function: bool,

    /// Shell command text
    pub target: String,
}

impl AliasEntry {
    /// Creates a plain alias entry
    pub fn alias(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            is_function: false,
        }
    }

    /// Creates a shell function entry
    pub fn function(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            is_function: true,
        }
    }

    pub fn kind(&self) -> AliasKind {
        AliasKind::from_function_flag(self.is_function)
    }

    /// Renders the shell definition line for this entry (without newline)
    pub fn render_line(&self, name: &str) -> String {
        match self.kind() {
            AliasKind::Function => format!("function {} () {{ {} }}", name, self.target),
            AliasKind::Alias => format!("alias {}='{}'", name, self.target),
        }
    }

    /// Returns the command that drops this definition from a live shell session
    pub fn unset_hint(&self, name: &str) -> String {
        match self.kind() {
            AliasKind::Function => format!("unset -f {}", name),
            AliasKind::Alias => format!("unalias {}", name),
        }
    }
}

/// Renders the full shell script for a set of aliases, one line per entry
///
/// An empty map renders to an empty string.
pub fn render_script(aliases: &AliasMap) -> String {
    let mut script = String::new();
    for (name, entry) in aliases {
        script.push_str(&entry.render_line(name));
        script.push('\n');
    }
    script
}

/// Accepts booleans, `null`, and falls back to JSON truthiness for anything else
fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_line() {
        let entry = AliasEntry::alias("echo hi");
        assert_eq!(entry.render_line("greet"), "alias greet='echo hi'");
    }

    #[test]
    fn function_line() {
        let entry = AliasEntry::function("echo $@");
        assert_eq!(entry.render_line("say"), "function say () { echo $@ }");
    }

    #[test]
    fn empty_script() {
        assert_eq!(render_script(&AliasMap::new()), "");
    }

    #[test]
    fn script_has_one_line_per_entry() {
        let mut aliases = AliasMap::new();
        aliases.insert("say".to_string(), AliasEntry::function("echo $@"));
        aliases.insert("greet".to_string(), AliasEntry::alias("echo hi"));

        let script = render_script(&aliases);
        assert_eq!(
            script,
            "alias greet='echo hi'\nfunction say () { echo $@ }\n"
        );
    }

    #[test]
    fn missing_flag_defaults_to_alias() {
        let entry: AliasEntry = serde_json::from_str(r#"{"target": "ls -la"}"#).unwrap();
        assert!(!entry.is_function);
    }

    #[test]
    fn lenient_flag_values() {
        let cases = [
            (r#"null"#, false),
            (r#"true"#, true),
            (r#"0"#, false),
            (r#"1"#, true),
            (r#""""#, false),
            (r#""yes""#, true),
            (r#"[]"#, false),
            (r#"{"a": 1}"#, true),
        ];

        for (flag, expected) in cases {
            let json = format!(r#"{{"target": "x", "is_function": {}}}"#, flag);
            let entry: AliasEntry = serde_json::from_str(&json).unwrap();
            assert_eq!(entry.is_function, expected, "flag {}", flag);
        }
    }

    #[test]
    fn missing_target_is_an_error() {
        let result: Result<AliasEntry, _> = serde_json::from_str(r#"{"is_function": true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn unset_hints() {
        assert_eq!(AliasEntry::alias("x").unset_hint("ll"), "unalias ll");
        assert_eq!(AliasEntry::function("x").unset_hint("say"), "unset -f say");
    }

    #[test]
    fn kind_ordering_puts_aliases_first() {
        assert!(AliasKind::Alias < AliasKind::Function);
        assert_eq!(AliasKind::Function.label(), "function");
    }
}
