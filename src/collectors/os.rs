use sysinfo::System;
use tracing::debug;

use super::UNKNOWN;

const OS_RELEASE: &str = "/etc/os-release";

/// Network node name of the machine.
pub fn hostname() -> String {
    System::host_name().unwrap_or_else(|| UNKNOWN.to_string())
}

/// Release string of the running kernel.
pub fn kernel() -> String {
    System::kernel_version().unwrap_or_else(|| UNKNOWN.to_string())
}

/// Distribution pretty name from the os-release file.
pub async fn base_install() -> String {
    match tokio::fs::read_to_string(OS_RELEASE).await {
        Ok(contents) => pretty_name(&contents).unwrap_or_else(|| UNKNOWN.to_string()),
        Err(e) => {
            debug!(path = OS_RELEASE, error = %e, "os-release unreadable");
            UNKNOWN.to_string()
        }
    }
}

fn pretty_name(contents: &str) -> Option<String> {
    contents
        .lines()
        .find_map(|line| line.strip_prefix("PRETTY_NAME="))
        .map(|value| value.trim().trim_matches('"').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_name_strips_quotes() {
        let contents = "NAME=\"Arch Linux\"\nPRETTY_NAME=\"Arch Linux\"\nID=arch\n";
        assert_eq!(pretty_name(contents).as_deref(), Some("Arch Linux"));
    }

    #[test]
    fn pretty_name_unquoted_value() {
        assert_eq!(pretty_name("PRETTY_NAME=Gentoo\n").as_deref(), Some("Gentoo"));
    }

    #[test]
    fn pretty_name_missing_key() {
        assert_eq!(pretty_name("NAME=\"Arch Linux\"\nID=arch\n"), None);
    }
}
