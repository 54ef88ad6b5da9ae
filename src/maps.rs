//! Map embed URL construction
//!
//! The map provider is an external collaborator consumed as an opaque
//! embeddable URL; nothing here is fetched or validated by this crate.

/// Fixed provider query template; only the `q` value varies
const EMBED_BASE: &str = "https://www.google.com/maps?q=";

/// Embed URL for a single location
pub fn place_embed_url(location: &str) -> String {
    format!("{}{}&output=embed", EMBED_BASE, urlencoding::encode(location))
}

/// Embed URL for a route, rendered as `"<start> to <end>"`
pub fn route_embed_url(start: &str, end: &str) -> String {
    format!(
        "{}{}%20to%20{}&output=embed",
        EMBED_BASE,
        urlencoding::encode(start),
        urlencoding::encode(end)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_embed_url_encodes_location() {
        assert_eq!(
            place_embed_url("Jaipur, Rajasthan"),
            "https://www.google.com/maps?q=Jaipur%2C%20Rajasthan&output=embed"
        );
    }

    #[test]
    fn test_route_embed_url_joins_endpoints() {
        let url = route_embed_url("New Delhi", "Jaipur");
        assert_eq!(
            url,
            "https://www.google.com/maps?q=New%20Delhi%20to%20Jaipur&output=embed"
        );
    }
}
