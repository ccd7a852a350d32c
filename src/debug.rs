use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::RwLock;
use std::time::{Duration, SystemTime};

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::outcome::Outcome;
use crate::utils::{format_datetime, format_elapsed};

#[derive(Clone)]
enum DebugTarget {
    Console,
    File(String),
}

#[derive(Clone)]
struct DebugConfig {
    enabled: bool,
    target: DebugTarget,
}

static DEBUG_CONFIG: Lazy<RwLock<DebugConfig>> = Lazy::new(|| {
    RwLock::new(DebugConfig { enabled: false, target: DebugTarget::Console })
});

/// Toggle per-request diagnostics. `target` selects the sink: "console"
/// (or empty/None) prints to stdout, a directory path appends to
/// `debug.log` inside it, any other path appends to that file.
pub fn set_debug(enabled: bool, target: Option<String>) {
    let mut cfg = match DEBUG_CONFIG.write() {
        Ok(cfg) => cfg,
        Err(poisoned) => poisoned.into_inner(),
    };
    cfg.enabled = enabled;
    cfg.target = match target {
        Some(t) if t.to_lowercase() == "console" || t.is_empty() => DebugTarget::Console,
        Some(t) => {
            let path = Path::new(&t);
            if path.is_dir() { DebugTarget::File(path.join("debug.log").to_string_lossy().to_string()) }
            else { DebugTarget::File(t) }
        },
        None => DebugTarget::Console,
    };
}

pub(crate) fn is_debug() -> bool {
    DEBUG_CONFIG.read().map(|cfg| cfg.enabled).unwrap_or(false)
}

pub(crate) fn debug_log(
    method: &str,
    tag: &str,
    url: &str,
    outcome: &Outcome,
    started: SystemTime,
    elapsed: Duration,
    proxy: Option<&str>,
) {
    if !is_debug() { return; }

    let mut msg = format!("\n==== [{}] ====\nMethod: {}\nURL: {}\n", tag, method, url);
    match outcome {
        Outcome::Success(res) => {
            let headers: serde_json::Map<String, Value> = res
                .headers
                .iter()
                .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
                .collect();
            msg.push_str(&format!("Status: {}\nHeaders: {}\n", res.status, Value::Object(headers)));
            msg.push_str(&format!("Body ({} bytes):\n{}\n", res.body.len(), res.body));
        }
        Outcome::Failure(failure) => {
            msg.push_str(&format!("Failure: {}\n", failure));
        }
    }
    if let Some(p) = proxy { msg.push_str(&format!("Proxy: {}\n", p)); }
    msg.push_str(&format!(
        "Started: {}\nElapsed: {}s\n",
        format_datetime(started),
        format_elapsed(elapsed),
    ));

    let target = DEBUG_CONFIG.read().map(|cfg| cfg.target.clone()).unwrap_or(DebugTarget::Console);
    match target {
        DebugTarget::Console => println!("{}", msg),
        DebugTarget::File(path) => { let _ = OpenOptions::new().create(true).append(true).open(path).map(|mut f| writeln!(f, "{}", msg)); }
    }
}
