use std::fs::{create_dir_all, OpenOptions};
use std::io::{self, Write};

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::constants::DEBUG_LOGS;

/// Address behind a hex private key, if it parses as one.
pub fn key_to_address(private_key: &str) -> Option<Address> {
    private_key
        .trim()
        .parse::<PrivateKeySigner>()
        .ok()
        .map(|signer| signer.address())
}

/// Keep the first and last four characters of a secret, star the rest.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.trim().chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}{}{tail}", "*".repeat(chars.len() - 8))
}

/// `0xabcdef…123456`
pub fn short_addr(addr: Address) -> String {
    let s = addr.as_slice();
    format!("0x{}…{}", hex::encode(&s[0..3]), hex::encode(&s[17..20]))
}

pub fn save_log_to_file(log: &str) {
    if !*DEBUG_LOGS {
        return;
    }

    if let Err(e) = create_dir_all("logs") {
        eprintln!("save_log_to_file mkdir error: {e}");
        return;
    }
    let now = chrono::Utc::now().format("%H-%d-%m-%Y").to_string();
    let file_name = format!("logs/logs_{}.txt", now);
    let log_with_time = format!("[{}] {log}", crate::libs::writing::stamp());

    if let Err(e) = append_line(&file_name, &log_with_time) {
        eprintln!("save_log_to_file error: {e}");
    }
}

fn append_line(path: &str, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")?;
    Ok(())
}
