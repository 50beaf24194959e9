//! `surl split` – show how a request URL divides around its script path.

use anyhow::{Context, Result};
use serde::Serialize;
use surl_core::ScriptUrl;

/// What the split produced for one URL.
#[derive(Debug, Serialize)]
pub struct SplitReport {
    pub url: String,
    pub path: String,
    pub script_path: String,
    pub base_path: String,
    pub path_info: String,
}

impl SplitReport {
    pub fn for_url(value: &ScriptUrl) -> Self {
        Self {
            url: value.as_str().to_string(),
            path: value.path().to_string(),
            script_path: value.script_path().to_string(),
            base_path: value.base_path().to_string(),
            path_info: value.path_info().to_string(),
        }
    }
}

/// Split `url` around `script_path` and print the report.
pub fn run_split(url: &str, script_path: Option<&str>, json: bool) -> Result<()> {
    let mut value = ScriptUrl::parse(url).with_context(|| format!("invalid URL: {url}"))?;
    if let Some(script_path) = script_path {
        value.set_script_path(script_path);
    }
    tracing::debug!("splitting {} with script path {:?}", url, value.script_path());
    if !value.script_path_is_prefix() {
        tracing::warn!(
            "script path {:?} is not a prefix of path {:?}",
            value.script_path(),
            value.path()
        );
    }

    let report = SplitReport::for_url(&value);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{:<12} {}", "path", report.path);
        println!("{:<12} {}", "script path", report.script_path);
        println!("{:<12} {}", "base path", report.base_path);
        println!("{:<12} {}", "path info", report.path_info);
    }
    Ok(())
}
