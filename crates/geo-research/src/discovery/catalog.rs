//! Fixed query tables for category browsing and trending topics.

/// Category label → provider query text.
pub const CATEGORY_QUERIES: &[(&str, &str)] = &[
    ("Urban Geography", "urban geography cities urbanization"),
    ("Climate Change", "climate change adaptation vulnerability geography"),
    ("Population Studies", "population geography demographics migration"),
    ("Economic Geography", "economic geography regional development globalization"),
    ("Cultural Geography", "cultural geography identity place landscape"),
    ("Political Geography", "political geography borders geopolitics territory"),
    ("Environmental Geography", "environmental geography human environment interaction"),
    ("GIS & Remote Sensing", "geographic information systems remote sensing spatial analysis"),
];

/// Topics searched by `trending`, in merge order.
pub const TRENDING_TOPICS: &[&str] = &[
    "climate change adaptation cities",
    "urban heat island mitigation",
    "climate migration displacement",
    "sustainable urban development",
    "food security land use change",
];

/// Query text for a category; unknown labels are searched verbatim.
#[must_use]
pub fn category_query(label: &str) -> &str {
    let label = label.trim();
    CATEGORY_QUERIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(label))
        .map(|(_, query)| *query)
        .unwrap_or(label)
}
