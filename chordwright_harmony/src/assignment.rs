// Minimum-cost assignment between two small sets.
//
// Both voice leading (concrete notes) and relationship distance (pitch
// classes) need the same thing: pair every element of a smaller set with a
// distinct element of a larger set so total cost is minimal. Chord sizes are
// at most 7, so this enumerates column permutations in lexicographic order
// (at most 7! = 5040) and keeps the first strictly cheaper one. Ties resolve
// to the lexicographically earliest permutation, which keeps results
// deterministic.
//
// Callers depend only on `min_cost_assignment`; if chord sizes ever grow past
// what factorial search tolerates, a Hungarian-algorithm implementation can
// replace the body without changing the interface.

/// Result of an assignment search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Total cost of the chosen pairing.
    pub cost: u32,
    /// Full column permutation. Row `i` is paired with `columns[i]` for
    /// `i < rows`; entries at `rows..` are the unpaired columns, in order.
    pub columns: Vec<usize>,
}

/// Pair each of `rows` rows with a distinct one of `cols` columns,
/// minimizing the summed `cost(row, col)`. Requires `rows <= cols`.
///
/// With zero rows the assignment is empty and costs nothing.
pub fn min_cost_assignment<F>(rows: usize, cols: usize, mut cost: F) -> Assignment
where
    F: FnMut(usize, usize) -> u32,
{
    debug_assert!(rows <= cols, "assignment needs rows <= cols");
    let mut perm: Vec<usize> = (0..cols).collect();
    let mut best = Assignment {
        cost: u32::MAX,
        columns: perm.clone(),
    };
    if rows == 0 {
        best.cost = 0;
        return best;
    }

    loop {
        let total: u32 = (0..rows).map(|r| cost(r, perm[r])).sum();
        if total < best.cost {
            best.cost = total;
            best.columns.copy_from_slice(&perm);
        }
        if !next_permutation(&mut perm) {
            break;
        }
    }
    best
}

/// Advance `perm` to its lexicographic successor in place. Returns false
/// (leaving `perm` untouched) when it is already the last permutation.
fn next_permutation(perm: &mut [usize]) -> bool {
    if perm.len() < 2 {
        return false;
    }
    let mut i = perm.len() - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = perm.len() - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }
    perm.swap(i - 1, j);
    perm[i..].reverse();
    true
}

/// Shortest distance between two pitch classes around the 12-cycle (0-6).
pub fn circular_distance(a: u8, b: u8) -> u32 {
    let d = (a as i32 - b as i32).rem_euclid(12) as u32;
    d.min(12 - d)
}
