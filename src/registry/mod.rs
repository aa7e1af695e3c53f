//! Keyed storage for prototypes
//!
//! A registry owns one canonical instance per key. Lookups never hand out the
//! stored instance; they return a fresh copy that the caller owns outright.
//!
//! # Example
//!
//! ```rust
//! use product_prototypes::{ConfigurableProduct, ProductRegistry};
//!
//! let mut registry = ProductRegistry::new();
//! registry.add("sku-1", ConfigurableProduct::new("sku-1", "Mouse", 25.0));
//!
//! let mut mine = registry.get("sku-1").unwrap();
//! mine.set_price(30.0);
//!
//! assert_eq!(registry.get("sku-1").unwrap().price(), 25.0);
//! ```

mod shared;
mod store;

pub use shared::SharedRegistry;
pub use store::{ProductRegistry, PrototypeRegistry};

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Find registered keys within a maximum edit distance of `target`
fn find_similar<'a>(
    keys: impl Iterator<Item = &'a str>,
    target: &str,
    max_distance: usize,
) -> Vec<String> {
    let mut candidates: Vec<(&str, usize)> = keys
        .filter_map(|key| {
            let dist = levenshtein_distance(key, target);
            (dist <= max_distance && dist > 0).then_some((key, dist))
        })
        .collect();

    candidates.sort_by(|(a, da), (b, db)| da.cmp(db).then_with(|| a.cmp(b)));
    candidates
        .into_iter()
        .map(|(key, _)| key.to_string())
        .take(3)
        .collect()
}
