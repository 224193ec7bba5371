// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::Config;

/// Ordered list of config file locations searched from lowest to highest priority.
/// Later files override earlier ones.
fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/mealmaker/config.yaml")];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".config/mealmaker/config.yaml"));
    }
    paths.push(PathBuf::from(".mealmaker/config.yaml"));
    paths
}

/// Load configuration by deep-merging all discovered YAML files.
/// The `extra` argument may provide an explicit path (the `--config` flag).
pub fn load(extra: Option<&Path>) -> anyhow::Result<Config> {
    let mut merged = serde_yaml::Value::Mapping(serde_yaml::Mapping::new());

    for path in config_search_paths() {
        if path.is_file() {
            debug!(path = %path.display(), "loading config layer");
            merge_yaml(&mut merged, read_layer(&path)?);
        }
    }

    if let Some(p) = extra {
        debug!(path = %p.display(), "loading explicit config");
        merge_yaml(&mut merged, read_layer(p)?);
    }

    if matches!(&merged, serde_yaml::Value::Mapping(m) if m.is_empty()) {
        return Ok(Config::default());
    }
    serde_yaml::from_value(merged).context("invalid configuration")
}

fn read_layer(path: &Path) -> anyhow::Result<serde_yaml::Value> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let layer: serde_yaml::Value =
        serde_yaml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    // An empty file parses as null; treat it as "no overrides".
    Ok(match layer {
        serde_yaml::Value::Null => serde_yaml::Value::Mapping(serde_yaml::Mapping::new()),
        other => other,
    })
}

/// Deep-merge `src` into `dst`; src wins on scalar conflicts.
fn merge_yaml(dst: &mut serde_yaml::Value, src: serde_yaml::Value) {
    match (dst, src) {
        (serde_yaml::Value::Mapping(d), serde_yaml::Value::Mapping(s)) => {
            for (k, v) in s {
                let entry = d
                    .entry(k)
                    .or_insert(serde_yaml::Value::Mapping(serde_yaml::Mapping::new()));
                merge_yaml(entry, v);
            }
        }
        (dst, src) => *dst = src,
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn val(s: &str) -> serde_yaml::Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn merge_scalar_src_wins() {
        let mut dst = val("x: 1");
        merge_yaml(&mut dst, val("x: 2"));
        assert_eq!(dst["x"].as_i64(), Some(2));
    }

    #[test]
    fn merge_nested_mappings() {
        let mut dst = val("http:\n  bind: \"127.0.0.1:1\"\n  path: \"/a\"\n");
        merge_yaml(&mut dst, val("http:\n  path: \"/b\"\n"));
        assert_eq!(dst["http"]["bind"].as_str(), Some("127.0.0.1:1"));
        assert_eq!(dst["http"]["path"].as_str(), Some("/b"));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let result = load(Some(Path::new("/tmp/mealmaker_nonexistent_config_xyz.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn load_explicit_file_overrides_defaults() {
        use std::io::Write;
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "skill:\n  name: \"Pantry Pal\"\nlists:\n  timeout_secs: 2").unwrap();
        let cfg = load(Some(f.path())).unwrap();
        assert_eq!(cfg.skill.name, "Pantry Pal");
        assert_eq!(cfg.lists.timeout_secs, 2);
        assert_eq!(cfg.http.path, "/");
    }

    #[test]
    fn empty_explicit_file_yields_defaults() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let cfg = load(Some(f.path())).unwrap();
        assert_eq!(cfg.lists.user_agent, "cookbook/list-access/v1");
    }
}
