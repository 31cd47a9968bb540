use gridtour_core::Coord;

/// Manhattan (L1) distance between two coordinates.
///
/// On a 4-connected unit-cost grid this never overestimates the number of
/// moves between `a` and `b`.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    a.manhattan(b)
}

/// Index of the target closest to `from`. Ties go to the earliest target.
pub fn closest(from: Coord, targets: &[Coord]) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (i, &t) in targets.iter().enumerate() {
        let d = manhattan(from, t);
        match best {
            Some((_, bd)) if bd <= d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}
