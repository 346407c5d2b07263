//! Dev seeder host gating.

/// True when seeding is permitted on `host`: loopback and private-LAN
/// addresses, or the explicit `ALLOW_SEED` override.
pub fn seed_allowed(host: &str, allow_override: bool) -> bool {
    if allow_override {
        return true;
    }
    host == "localhost"
        || host == "127.0.0.1"
        || host == "0.0.0.0"
        || host.ends_with(".local")
        || host.starts_with("192.168.")
        || host.starts_with("10.")
        || is_private_172(host)
}

// 172.16.0.0/12 spelled out as dotted prefixes
fn is_private_172(host: &str) -> bool {
    let Some(rest) = host.strip_prefix("172.") else {
        return false;
    };
    let Some((octet, _)) = rest.split_once('.') else {
        return false;
    };
    matches!(octet.parse::<u8>(), Ok(16..=31))
}
