use arena_state::{Position, Unit};

/// Euclidean distance between two points
pub fn distance(a: &Position, b: &Position) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Mean position of a set of units. None for an empty set.
pub fn centroid(units: &[&Unit]) -> Option<Position> {
    if units.is_empty() {
        return None;
    }
    let n = units.len() as f64;
    let x = units.iter().map(|u| u.position.x).sum::<f64>() / n;
    let y = units.iter().map(|u| u.position.y).sum::<f64>() / n;
    Some(Position::new(x, y))
}
