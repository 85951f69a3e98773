use crate::core::{Category, OrderedCatalog, ServiceRecord};
use std::collections::HashMap;

/// Buckets records by category and orders the buckets: names from `priority_order`
/// first (in that order, only when populated), then the rest in first-seen order.
/// Records keep their relative order inside each category.
pub fn group_and_order(records: &[ServiceRecord], priority_order: &[String]) -> OrderedCatalog {
    let mut buckets: Vec<(String, Vec<ServiceRecord>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let name = record.group_name();
        if record.group.is_none() {
            tracing::warn!("Service '{}' has no group, filing under Other", record.title);
        }
        match index.get(name) {
            Some(&slot) => buckets[slot].1.push(record.clone()),
            None => {
                index.insert(name, buckets.len());
                buckets.push((name.to_string(), vec![record.clone()]));
            }
        }
    }

    let mut order: Vec<usize> = Vec::with_capacity(buckets.len());
    for name in priority_order {
        if let Some(&slot) = index.get(name.as_str()) {
            if !order.contains(&slot) {
                order.push(slot);
            }
        }
    }
    for slot in 0..buckets.len() {
        if !order.contains(&slot) {
            order.push(slot);
        }
    }

    let mut slots: Vec<Option<(String, Vec<ServiceRecord>)>> =
        buckets.into_iter().map(Some).collect();
    let categories = order
        .into_iter()
        .enumerate()
        .filter_map(|(rank, slot)| {
            slots[slot].take().map(|(name, services)| Category {
                name,
                services,
                display_order_rank: rank,
            })
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        "Grouped {} records into {} categories",
        records.len(),
        categories.len()
    );

    OrderedCatalog { categories }
}
