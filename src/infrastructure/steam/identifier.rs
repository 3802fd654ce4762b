//! Parsing of user supplied account identifiers.
//!
//! Everything that can be turned into a SteamID64 locally is; the rest is treated as a
//! vanity name and has to go through `ResolveVanityURL`.

use regex::Regex;
use std::sync::OnceLock;

use super::{Error, ErrorKind};
use crate::domain::types::SteamId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Id(SteamId),
    Vanity(String),
}

struct Patterns {
    id64: Regex,
    profile_url: Regex,
    vanity_url: Regex,
    legacy: Regex,
    steam3: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        id64: Regex::new(r"^\d{17}$").expect("valid regex"),
        profile_url: Regex::new(r"(?i)steamcommunity\.com/profiles/(\d{17})").expect("valid regex"),
        vanity_url: Regex::new(r"(?i)steamcommunity\.com/id/([^/?#\s]+)").expect("valid regex"),
        legacy: Regex::new(r"(?i)^STEAM_[0-5]:([01]):(\d+)$").expect("valid regex"),
        steam3: Regex::new(r"(?i)^\[U:1:(\d+)\]$").expect("valid regex"),
    })
}

pub fn parse_identifier(input: &str) -> Result<Identifier, Error> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::new("identifier", ErrorKind::InvalidInput, "empty identifier"));
    }

    let p = patterns();

    if p.id64.is_match(input) {
        return to_id(input);
    }
    if let Some(caps) = p.profile_url.captures(input) {
        return to_id(&caps[1]);
    }
    if let Some(caps) = p.legacy.captures(input) {
        let y = parse_part(&caps[1])?;
        let z = parse_part(&caps[2])?;
        let account = z
            .checked_mul(2)
            .and_then(|n| n.checked_add(y))
            .ok_or_else(|| invalid(format!("account number out of range: {}", input)))?;
        return Ok(Identifier::Id(SteamId::from_account_id(account)));
    }
    if let Some(caps) = p.steam3.captures(input) {
        return Ok(Identifier::Id(SteamId::from_account_id(parse_part(&caps[1])?)));
    }
    if let Some(caps) = p.vanity_url.captures(input) {
        return Ok(Identifier::Vanity(caps[1].to_string()));
    }

    Ok(Identifier::Vanity(input.to_string()))
}

fn invalid(message: impl Into<String>) -> Error {
    Error::new("identifier", ErrorKind::InvalidInput, message)
}

fn to_id(raw: &str) -> Result<Identifier, Error> {
    raw.parse::<SteamId>()
        .map(Identifier::Id)
        .map_err(|e| invalid(e.to_string()))
}

/// Account numbers are 32 bits wide; anything larger is not a Steam account.
fn parse_part(raw: &str) -> Result<u32, Error> {
    raw.parse::<u32>().map_err(|e| invalid(format!("{}: {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GABE: SteamId = SteamId(76561197960287930);

    #[test]
    fn test_plain_id64() {
        assert_eq!(parse_identifier("76561197960287930").unwrap(), Identifier::Id(GABE));
        assert_eq!(parse_identifier("  76561197960287930\n").unwrap(), Identifier::Id(GABE));
    }

    #[test]
    fn test_profile_url() {
        let parsed = parse_identifier("https://steamcommunity.com/profiles/76561197960287930/").unwrap();
        assert_eq!(parsed, Identifier::Id(GABE));
    }

    #[test]
    fn test_legacy_and_steam3() {
        assert_eq!(parse_identifier("STEAM_0:0:11101").unwrap(), Identifier::Id(GABE));
        assert_eq!(parse_identifier("STEAM_1:0:11101").unwrap(), Identifier::Id(GABE));
        assert_eq!(parse_identifier("[U:1:22202]").unwrap(), Identifier::Id(GABE));
    }

    #[test]
    fn test_vanity_forms() {
        assert_eq!(
            parse_identifier("https://steamcommunity.com/id/gabelogannewell/").unwrap(),
            Identifier::Vanity("gabelogannewell".to_string())
        );
        assert_eq!(
            parse_identifier("gabelogannewell").unwrap(),
            Identifier::Vanity("gabelogannewell".to_string())
        );
        // Too short for an ID64, so it is a vanity name
        assert_eq!(
            parse_identifier("12345").unwrap(),
            Identifier::Vanity("12345".to_string())
        );
    }

    #[test]
    fn test_oversized_account_numbers_rejected() {
        for input in [
            "STEAM_0:1:9999999999999999999",
            "STEAM_0:1:2147483648",
            "[U:1:18446744073709551615]",
            "[U:1:4294967296]",
        ] {
            let err = parse_identifier(input).unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidInput, "{}", input);
        }
    }

    #[test]
    fn test_largest_account_numbers() {
        assert_eq!(
            parse_identifier("STEAM_0:1:2147483647").unwrap(),
            Identifier::Id(SteamId::from_account_id(u32::MAX))
        );
        assert_eq!(
            parse_identifier("[U:1:4294967295]").unwrap(),
            Identifier::Id(SteamId::from_account_id(u32::MAX))
        );
    }

    #[test]
    fn test_empty_rejected() {
        let err = parse_identifier("   ").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }
}
