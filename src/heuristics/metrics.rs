use std::collections::BTreeMap;

/// Shannon entropy in bits per UTF-16 code unit: `-Σ p·log2(p)` over the
/// relative frequency of each distinct unit. Units match the length rules, so
/// a non-BMP character contributes its two surrogates.
pub fn shannon_entropy(s: &str) -> f64 {
    let mut counts: BTreeMap<u16, usize> = BTreeMap::new();
    let mut total = 0usize;
    for unit in s.encode_utf16() {
        *counts.entry(unit).or_insert(0) += 1;
        total += 1;
    }
    if total == 0 {
        return 0.0;
    }

    let len = total as f64;
    counts
        .values()
        .map(|&count| {
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}
