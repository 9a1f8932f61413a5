use super::{service_active, UNKNOWN};
use crate::catalog;

/// Name of the installed bootloader, decided by the first marker path that
/// exists. Dual-boot setups report the first match only.
pub async fn bootloader() -> String {
    for (path, name) in catalog::BOOTLOADER_MARKERS {
        if tokio::fs::try_exists(path).await.unwrap_or(false) {
            return name.to_string();
        }
    }
    UNKNOWN.to_string()
}

/// Display name of the first active display-manager unit, scanned in table
/// order.
pub async fn login_manager() -> String {
    for (unit, name) in catalog::DISPLAY_MANAGERS {
        if service_active(unit).await {
            return name.to_string();
        }
    }
    UNKNOWN.to_string()
}
