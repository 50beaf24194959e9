//! `surl check` – verify a script path against the URL path.

use anyhow::{bail, Context, Result};
use surl_core::ScriptUrl;

/// Fail with a non-zero exit when `script_path` is not a prefix of the
/// URL path; print the derived values when it is.
pub fn run_check(url: &str, script_path: &str) -> Result<()> {
    let mut value = ScriptUrl::parse(url).with_context(|| format!("invalid URL: {url}"))?;
    value.set_script_path(script_path);

    if !value.script_path_is_prefix() {
        tracing::warn!(
            "check failed: script path {:?} does not prefix path {:?}",
            value.script_path(),
            value.path()
        );
        bail!(
            "script path {} is not a prefix of path {}",
            value.script_path(),
            value.path()
        );
    }

    println!(
        "ok: base path {}, path info {:?}",
        value.base_path(),
        value.path_info()
    );
    Ok(())
}
