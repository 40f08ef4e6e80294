//! Static symbol to logo lookup.

/// Logo used when a symbol is not in [`LOGOS`].
pub const DEFAULT_LOGO: &str = "https://cryptologos.cc/logos/default-logo.svg";

/// Closed table of known coin logos keyed by lower-case symbol.
pub const LOGOS: &[(&str, &str)] = &[
    ("btc", "https://cryptologos.cc/logos/bitcoin-btc-logo.svg"),
    ("eth", "https://cryptologos.cc/logos/ethereum-eth-logo.svg"),
    ("xrp", "https://cryptologos.cc/logos/ripple-xrp-logo.svg"),
    ("ltc", "https://cryptologos.cc/logos/litecoin-ltc-logo.svg"),
    ("ada", "https://cryptologos.cc/logos/cardano-ada-logo.svg"),
    ("dot", "https://cryptologos.cc/logos/polkadot-dots-logo.svg"),
    ("doge", "https://cryptologos.cc/logos/dogecoin-doge-logo.svg"),
];

/// Resolve a logo URL for `symbol`, case-insensitively.
pub fn resolve_logo(symbol: &str) -> &'static str {
    let key = symbol.trim().to_ascii_lowercase();
    LOGOS
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, url)| *url)
        .unwrap_or(DEFAULT_LOGO)
}
