//! Information-theory helpers: surprisal, entropy, and Pascal-triangle
//! rank entropy over 2ⁿ equally weighted possibilities.

use tracing::warn;

/// Surprisal of a probability: −log2(p) for p ∈ (0, 1], else 0.
pub fn surprisal(p: f64) -> f64 {
    if p > 0.0 && p <= 1.0 {
        -p.log2()
    } else {
        0.0
    }
}

/// Entropy contribution of a probability: −p·log2(p) for p ∈ (0, 1], else 0.
pub fn entropy(p: f64) -> f64 {
    if p > 0.0 && p <= 1.0 {
        -p.log2() * p
    } else {
        0.0
    }
}

/// Surprisal of one symbol from an alphabet of `card` equiprobable symbols.
pub fn surprisal_alpha(card: f64) -> f64 {
    if card > 0.0 {
        card.log2()
    } else {
        0.0
    }
}

/// Entropy of an alphabet symbol weighted by probability `p`.
pub fn entropy_alpha(card: f64, p: f64) -> f64 {
    if p > 0.0 && p <= 1.0 {
        card.log2() * p
    } else {
        0.0
    }
}

/// Number of bits covering `card` possibilities: ceil(log2(card)).
pub fn bits_for(card: f64) -> u32 {
    card.log2().ceil() as u32
}

/// Binomial coefficient n over k, computed additively.
pub fn binomial(n: u32, k: u32) -> u64 {
    if k > n {
        return 0;
    }
    if k == n || k == 0 || n == 0 {
        return 1;
    }
    binomial(n - 1, k - 1) + binomial(n - 1, k)
}

/// Pascal's triangle rows 0..=n as a jagged matrix.
pub fn pascal_rows(n: u32) -> Vec<Vec<u64>> {
    let mut rows: Vec<Vec<u64>> = vec![vec![1], vec![1, 1]];
    if n == 0 {
        rows.truncate(1);
        return rows;
    }

    for r in 2..=n as usize {
        let prev = &rows[r - 1];
        let mut row = Vec::with_capacity(r + 1);
        row.push(1);
        for k in 1..r {
            row.push(prev[k - 1] + prev[k]);
        }
        row.push(1);
        rows.push(row);
    }
    rows
}

/// Entropy in bits of `rank` among 2ⁿ possibilities ordered by popcount:
/// the index of the binomial band the rank falls into.
///
/// Falls back to `band + 1` when the binomial row is exhausted before the
/// cumulative sum reaches the rank (a non-physical rank for the given n).
pub fn rank_bits(n: u32, rank: u64) -> u32 {
    let target = rank + 1;
    let mut band: i64 = -1;
    let mut sum: u64 = 0;

    while sum < target {
        band += 1;
        let step = binomial(n, band as u32);
        sum += step;

        if step == 0 {
            warn!(n, rank, "rank_bits is not defined, assuming {}", band + 1);
            return (band + 1) as u32;
        }
    }
    band as u32
}

/// `rank_bits` against a precomputed Pascal triangle (see [`pascal_rows`]).
pub fn rank_bits_cached(n: u32, rank: u64, pascal: &[Vec<u64>]) -> u32 {
    let target = rank + 1;
    let row = &pascal[n as usize];
    let mut band: i64 = -1;
    let mut sum: u64 = 0;

    while sum < target {
        band += 1;
        let step = row.get(band as usize).copied().unwrap_or(0);
        sum += step;

        if step == 0 {
            warn!(n, rank, "rank_bits is not defined, assuming {}", band + 1);
            return (band + 1) as u32;
        }
    }
    band as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surprisal() {
        assert!((surprisal(0.5) - 1.0).abs() < 1e-12);
        assert!((surprisal(0.25) - 2.0).abs() < 1e-12);
        assert_eq!(surprisal(0.0), 0.0);
        assert_eq!(surprisal(1.5), 0.0);
    }

    #[test]
    fn test_entropy_is_half_bit_at_half() {
        assert!((entropy(0.5) - 0.5).abs() < 1e-12);
        assert_eq!(entropy(-0.1), 0.0);
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(5, 0), 1);
        assert_eq!(binomial(5, 5), 1);
        assert_eq!(binomial(3, 4), 0);
    }

    #[test]
    fn test_pascal_rows_match_binomial() {
        let rows = pascal_rows(8);
        assert_eq!(rows.len(), 9);
        for (n, row) in rows.iter().enumerate() {
            for (k, &v) in row.iter().enumerate() {
                assert_eq!(v, binomial(n as u32, k as u32));
            }
        }
    }

    #[test]
    fn test_rank_bits_bands() {
        // n=3: bands of sizes 1, 3, 3, 1 over ranks 0..8.
        let expected = [0, 1, 1, 1, 2, 2, 2, 3];
        for (rank, &want) in expected.iter().enumerate() {
            assert_eq!(rank_bits(3, rank as u64), want);
        }
    }

    #[test]
    fn test_rank_bits_cached_agrees() {
        let pascal = pascal_rows(6);
        for rank in 0..64 {
            assert_eq!(rank_bits(6, rank), rank_bits_cached(6, rank, &pascal));
        }
    }
}
