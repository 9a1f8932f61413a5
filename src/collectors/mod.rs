pub mod appearance;
pub mod boot;
pub mod drivers;
pub mod fonts;
pub mod os;
pub mod packages;
pub mod themes;
pub mod users;

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

/// Sentinel reported whenever a fact cannot be resolved.
pub const UNKNOWN: &str = "Unknown";

/// Upper bound on any single external command; a hung tool degrades to the
/// probe's fallback instead of stalling the request.
const COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

/// The complete inventory served per request.
#[derive(Debug, Serialize)]
pub struct SystemReport {
    pub system: SystemSection,
    pub users: Vec<String>,
    pub drivers: drivers::DriverInfo,
    pub packages: BTreeMap<String, Vec<String>>,
    pub themes: themes::ThemeInventory,
}

/// Host identity and appearance settings, flattened into one object on the
/// wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSection {
    pub hostname: String,
    pub base_install: String,
    pub kernel: String,
    pub bootloader: String,
    pub login_manager: String,
    #[serde(flatten)]
    pub appearance: appearance::Appearance,
}

/// Source of system reports. The live implementation probes the host; tests
/// substitute failing or canned fakes.
#[async_trait]
pub trait Inspector: Send + Sync {
    async fn inspect(&self) -> Result<SystemReport>;
}

/// Inspector that probes the machine it runs on.
pub struct HostInspector;

#[async_trait]
impl Inspector for HostInspector {
    async fn inspect(&self) -> Result<SystemReport> {
        Ok(collect_all().await)
    }
}

/// Run every collector once and assemble the report. Each collector degrades
/// to its own fallback, so assembly itself cannot fail.
pub async fn collect_all() -> SystemReport {
    let mut themes = themes::collect().await;
    themes.fonts = fonts::collect().await;

    SystemReport {
        system: SystemSection {
            hostname: os::hostname(),
            base_install: os::base_install().await,
            kernel: os::kernel(),
            bootloader: boot::bootloader().await,
            login_manager: boot::login_manager().await,
            appearance: appearance::collect().await,
        },
        users: users::collect().await,
        drivers: drivers::collect().await,
        packages: packages::collect().await,
        themes,
    }
}

/// Invoke an external tool and return its trimmed stdout, or `None` when the
/// tool is missing, exits nonzero, times out, or emits invalid UTF-8.
pub(crate) async fn run_command(program: &str, args: &[&str]) -> Option<String> {
    let invocation = tokio::process::Command::new(program).args(args).output();

    let output = match tokio::time::timeout(COMMAND_TIMEOUT, invocation).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            debug!(program, error = %e, "command failed to spawn");
            return None;
        }
        Err(_) => {
            debug!(program, "command timed out");
            return None;
        }
    };

    if !output.status.success() {
        return None;
    }

    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

/// True when systemd reports the unit as active. Unavailable service
/// managers count as inactive.
pub(crate) async fn service_active(unit: &str) -> bool {
    matches!(
        run_command("systemctl", &["is-active", unit]).await.as_deref(),
        Some("active")
    )
}

/// Empty strings collapse to the `Unknown` sentinel.
pub(crate) fn or_unknown(value: String) -> String {
    if value.is_empty() {
        UNKNOWN.to_string()
    } else {
        value
    }
}
