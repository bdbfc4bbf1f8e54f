use crate::conf::load_config;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// Prints the resolved configuration as JSON, or YAML when `yaml` is set.
pub fn dump(path: Option<&Path>, yaml: bool) -> Result<()> {
    let cfg = load_config(path)?;

    if yaml {
        dump_yaml(&cfg)?;
    } else {
        dump_json(&cfg)?;
    }

    Ok(())
}

fn dump_json<T: Serialize>(value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

fn dump_yaml<T: Serialize>(value: &T) -> Result<()> {
    let s = serde_yaml::to_string(value)?;
    println!("{s}");
    Ok(())
}
