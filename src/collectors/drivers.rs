use serde::Serialize;

use super::{run_command, service_active, UNKNOWN};

/// Graphics and audio driver identity.
#[derive(Debug, Serialize)]
pub struct DriverInfo {
    pub graphics: String,
    pub audio: String,
}

pub async fn collect() -> DriverInfo {
    DriverInfo {
        graphics: graphics().await,
        audio: audio().await,
    }
}

/// NVIDIA, AMD, Intel, or Unknown. A working `nvidia-smi` is decisive on its
/// own; otherwise the PCI display controllers are pattern-matched.
async fn graphics() -> String {
    if run_command("nvidia-smi", &[]).await.is_some() {
        return "NVIDIA".to_string();
    }

    match run_command("lspci", &["-k"]).await {
        Some(listing) => vendor_from_lspci(&listing),
        None => UNKNOWN.to_string(),
    }
}

fn vendor_from_lspci(listing: &str) -> String {
    for line in listing.lines() {
        if !line.contains("VGA") && !line.contains("3D") {
            continue;
        }
        let lower = line.to_lowercase();
        if lower.contains("nvidia") {
            return "NVIDIA".to_string();
        } else if lower.contains("amd") {
            return "AMD".to_string();
        } else if lower.contains("intel") {
            return "Intel".to_string();
        }
    }
    UNKNOWN.to_string()
}

/// PipeWire wins over PulseAudio when both units are active.
async fn audio() -> String {
    if service_active("pipewire.service").await {
        return "PipeWire".to_string();
    }
    if service_active("pulseaudio.service").await {
        return "PulseAudio".to_string();
    }
    UNKNOWN.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lspci_detects_amd_on_display_lines() {
        let listing = "\
00:1f.3 Audio device: Advanced Micro Devices [AMD] Navi 21 HDMI Audio
03:00.0 VGA compatible controller: Advanced Micro Devices [AMD] Navi 23
";
        assert_eq!(vendor_from_lspci(listing), "AMD");
    }

    #[test]
    fn lspci_first_display_line_wins() {
        let listing = "\
00:02.0 VGA compatible controller: Intel Corporation UHD Graphics 630
01:00.0 3D controller: NVIDIA Corporation GP107M
";
        assert_eq!(vendor_from_lspci(listing), "Intel");
    }

    #[test]
    fn lspci_ignores_non_display_devices() {
        let listing = "00:14.0 USB controller: Intel Corporation 200 Series PCH\n";
        assert_eq!(vendor_from_lspci(listing), UNKNOWN);
    }
}
