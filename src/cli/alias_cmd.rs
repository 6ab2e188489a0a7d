//! Alias commands (list, create, remove)

use anyhow::{Context, Result};
use crossterm::style::Color;

use super::output::Output;
use crate::domain::{AliasKind, AliasMap};
use crate::storage::AliasStore;

/// List all registered aliases, plain aliases before functions
pub fn list(store: &AliasStore, output: &Output) -> Result<()> {
    let aliases = load_for_listing(store, output);

    if output.is_json() {
        output.data(&serde_json::json!({
            "count": aliases.len(),
            "aliases": aliases,
        }));
        return Ok(());
    }

    let mut items: Vec<_> = aliases.iter().collect();
    items.sort_by(|(a_name, a), (b_name, b)| (a.kind(), a_name).cmp(&(b.kind(), b_name)));

    output.blank();
    output.line(&format!(
        "{} {}",
        output.paint("alie", Color::Cyan),
        output.paint(format!("[{} registered]", items.len()), Color::Green)
    ));
    output.blank();

    for (name, entry) in items {
        output.line(&format!(
            "\t{} {}={}",
            output.paint(entry.kind().label(), Color::Blue),
            output.paint(name, Color::Magenta),
            entry.target
        ));
    }

    Ok(())
}

/// Register or overwrite an alias
pub fn create(
    store: &AliasStore,
    output: &Output,
    name: &str,
    command: &str,
    is_function: bool,
) -> Result<()> {
    output.verbose_ctx(
        "create",
        &format!(
            "Writing {} '{}' to {}",
            AliasKind::from_function_flag(is_function).label(),
            name,
            store.json_path().display()
        ),
    );

    let aliases = store
        .write(name, command, is_function)
        .with_context(|| format!("Failed to register alias '{}'", name))?;

    output.verbose_ctx(
        "create",
        &format!(
            "Regenerated {} with {} definitions",
            store.aliases_path().display(),
            aliases.len()
        ),
    );

    if output.is_json() {
        output.data(&serde_json::json!({
            "action": "created",
            "name": name,
            "target": command,
            "is_function": is_function,
            "count": aliases.len(),
        }));
    } else {
        output.line(&format!(
            "{} {}='{}'",
            output.paint("CREATED", Color::Green),
            output.paint(name, Color::Magenta),
            command
        ));
        output.line(&format!(
            "Run `source {}` to use it in this session.",
            store.aliases_path().display()
        ));
    }

    Ok(())
}

/// Remove an alias if it is registered
pub fn remove(store: &AliasStore, output: &Output, name: &str) -> Result<()> {
    let Some(entry) = store.read().remove(name) else {
        output.verbose_ctx("remove", &format!("'{}' not found in store", name));

        if output.is_json() {
            output.data(&serde_json::json!({
                "action": "not_registered",
                "name": name,
            }));
        } else {
            output.line(&format!(
                "Cannot remove since alias {} not registered in alie.",
                output.paint(name, Color::Magenta)
            ));
        }
        return Ok(());
    };

    let aliases = store
        .delete(name)
        .with_context(|| format!("Failed to remove alias '{}'", name))?;

    output.verbose_ctx(
        "remove",
        &format!(
            "Regenerated {} with {} definitions",
            store.aliases_path().display(),
            aliases.len()
        ),
    );

    let hint = entry.unset_hint(name);
    if output.is_json() {
        output.data(&serde_json::json!({
            "action": "removed",
            "name": name,
            "is_function": entry.is_function,
            "count": aliases.len(),
            "hint": hint,
        }));
    } else {
        output.line(&format!(
            "{} {}. Use `{}` to remove from this session.",
            output.paint("REMOVED", Color::Red),
            output.paint(name, Color::Magenta),
            hint
        ));
    }

    Ok(())
}

/// Loads the store for display, logging why it reads as empty
fn load_for_listing(store: &AliasStore, output: &Output) -> AliasMap {
    match store.load() {
        Ok(aliases) => aliases,
        Err(e) if e.is_not_found() => {
            output.verbose_ctx("list", "No alias store yet");
            AliasMap::new()
        }
        Err(e) => {
            output.verbose_ctx("list", &format!("Treating store as empty: {}", e));
            AliasMap::new()
        }
    }
}
