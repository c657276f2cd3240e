//! Frequency counts by a single field.

use serde::Serialize;
use sfpd_incident::Incident;
use std::collections::BTreeMap;

/// Number of rows sharing one value of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// How buckets are ranked by count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountOrder {
    Descending,
    Ascending,
}

/// Group-count `rows` by `key` and rank the buckets by count.
///
/// Buckets with equal counts are ordered by key ascending, so the result is
/// deterministic. An empty input yields an empty result.
pub fn frequency_counts<K, F>(rows: &[&Incident], key: F, order: CountOrder) -> Vec<CategoryCount>
where
    K: Ord + ToString,
    F: Fn(&Incident) -> K,
{
    let mut buckets: BTreeMap<K, usize> = BTreeMap::new();
    for &row in rows {
        *buckets.entry(key(row)).or_insert(0) += 1;
    }

    let mut ranked: Vec<(K, usize)> = buckets.into_iter().collect();
    // Stable sort keeps the key order among ties.
    match order {
        CountOrder::Descending => ranked.sort_by(|a, b| b.1.cmp(&a.1)),
        CountOrder::Ascending => ranked.sort_by(|a, b| a.1.cmp(&b.1)),
    }

    ranked
        .into_iter()
        .map(|(k, count)| CategoryCount {
            label: k.to_string(),
            count,
        })
        .collect()
}
