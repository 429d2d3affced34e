pub mod heart;
pub mod stroke;

/// Points for the highest bracket whose threshold `value` reaches.
/// Brackets are `(threshold, points)` in descending threshold order.
fn bracket(value: f64, brackets: &[(f64, u32)]) -> u32 {
    brackets
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map_or(0, |(_, points)| *points)
}

fn flag(condition: bool, points: u32) -> u32 {
    if condition { points } else { 0 }
}
