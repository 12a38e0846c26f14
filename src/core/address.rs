//! EVM address syntax and EIP-55 checksum checks.

use sha3::{Digest, Keccak256};

const ADDRESS_HEX_LEN: usize = 40;

/// Returns true when `address` is `0x` followed by 40 hex digits and, if the
/// digits are mixed case, the casing matches the EIP-55 checksum.
pub fn is_valid_address(address: &str) -> bool {
    let Some(hex) = address.strip_prefix("0x") else {
        return false;
    };
    if hex.len() != ADDRESS_HEX_LEN || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return false;
    }

    let has_lower = hex.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex.chars().any(|c| c.is_ascii_uppercase());
    if !(has_lower && has_upper) {
        return true;
    }

    checksum_hex(hex) == hex
}

/// Renders a valid address in its EIP-55 checksummed form.
pub fn to_checksum_address(address: &str) -> Option<String> {
    if !is_valid_address(address) {
        return None;
    }
    Some(format!("0x{}", checksum_hex(&address[2..])))
}

fn checksum_hex(hex: &str) -> String {
    let lower = hex.to_ascii_lowercase();
    let hash = Keccak256::digest(lower.as_bytes());

    lower
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let byte = hash[i / 2];
            let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}
