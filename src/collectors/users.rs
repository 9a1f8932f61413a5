use tracing::debug;

use super::UNKNOWN;
use crate::catalog;

const PASSWD: &str = "/etc/passwd";

/// Usernames of human accounts in passwd order. Never empty: a host with no
/// matching accounts reports `["Unknown"]`.
pub async fn collect() -> Vec<String> {
    let names = match tokio::fs::read_to_string(PASSWD).await {
        Ok(contents) => real_accounts(&contents),
        Err(e) => {
            debug!(path = PASSWD, error = %e, "passwd unreadable");
            Vec::new()
        }
    };

    if names.is_empty() {
        vec![UNKNOWN.to_string()]
    } else {
        names
    }
}

/// Accounts with a uid in the human range and a login-capable shell.
fn real_accounts(passwd: &str) -> Vec<String> {
    passwd
        .lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split(':').collect();
            if fields.len() < 7 {
                return None;
            }
            let uid: u32 = fields[2].parse().ok()?;
            let shell = fields[6];
            if uid >= catalog::FIRST_HUMAN_UID && shell != catalog::NOLOGIN_SHELL {
                Some(fields[0].to_string())
            } else {
                None
            }
        })
        .collect()
}
