use crate::core::{CatalogSource, ServiceRecord};
use crate::utils::error::LoadError;

/// Parses a catalog payload: a JSON array of service objects.
pub fn parse_records(payload: &[u8]) -> Result<Vec<ServiceRecord>, LoadError> {
    Ok(serde_json::from_slice::<Vec<ServiceRecord>>(payload)?)
}

/// Fetches and parses the catalog once. Either the whole catalog loads or a
/// `LoadError` is returned; nothing partial comes back.
pub async fn load(source: &dyn CatalogSource) -> Result<Vec<ServiceRecord>, LoadError> {
    tracing::info!("Loading services from {}", source.describe());

    let payload = source.fetch().await?;
    tracing::debug!("Fetched {} bytes from {}", payload.len(), source.describe());

    let records = parse_records(&payload)?;
    tracing::info!("Loaded {} services", records.len());
    Ok(records)
}
