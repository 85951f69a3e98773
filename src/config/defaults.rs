use crate::core::IconMap;
use std::collections::HashMap;

pub const DEFAULT_SOURCE: &str = "product_data_final.json";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_ICON: &str = "fas fa-folder";

const PRIORITY_ORDER: [&str; 12] = [
    "Compute",
    "Storage",
    "Database",
    "Container",
    "Networking",
    "Security",
    "Application Service",
    "DevOps Tools",
    "Data Analytics",
    "AI/ML",
    "Management",
    "Hybrid Cloud",
];

const ICONS: [(&str, &str); 16] = [
    ("Compute", "fas fa-server"),
    ("Storage", "fas fa-hdd"),
    ("Database", "fas fa-database"),
    ("Container", "fab fa-docker"),
    ("Networking", "fas fa-network-wired"),
    ("Security", "fas fa-shield-alt"),
    ("Application Service", "fas fa-layer-group"),
    ("DevOps Tools", "fas fa-code-branch"),
    ("Data Analytics", "fas fa-chart-line"),
    ("AI/ML", "fas fa-brain"),
    ("Management", "fas fa-cogs"),
    ("Hybrid Cloud", "fas fa-cloud"),
    ("Developer Tools", "fas fa-code"),
    ("IoT", "fas fa-microchip"),
    ("Migration", "fas fa-exchange-alt"),
    ("Integration", "fas fa-plug"),
];

pub fn default_priority_order() -> Vec<String> {
    PRIORITY_ORDER.iter().map(|name| name.to_string()).collect()
}

pub fn default_icon_table() -> HashMap<String, String> {
    ICONS
        .iter()
        .map(|(name, icon)| (name.to_string(), icon.to_string()))
        .collect()
}

pub fn default_icons() -> IconMap {
    IconMap::new(default_icon_table(), DEFAULT_ICON)
}
