//! Adapters layer: concrete catalog sources (local files and HTTP).

pub mod file;
pub mod http;

use crate::core::CatalogSource;
use crate::utils::validation::is_remote_location;
use std::time::Duration;

pub use file::FileSource;
pub use http::HttpSource;

/// http(s) locations are fetched over the network, anything else is a file path.
pub fn source_from_location(location: &str, timeout: Duration) -> Box<dyn CatalogSource> {
    if is_remote_location(location) {
        Box::new(HttpSource::new(location, timeout))
    } else {
        Box::new(FileSource::new(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_picks_source_kind() {
        let timeout = Duration::from_secs(5);
        assert_eq!(
            source_from_location("https://cdn.example.com/data.json", timeout).describe(),
            "https://cdn.example.com/data.json"
        );
        assert_eq!(
            source_from_location("data/services.json", timeout).describe(),
            "file data/services.json"
        );
    }
}
