//! Geometry helpers shared by the rendering functions.

use crate::draw::Point;

/// Calculates arrowhead points for a shaft between two vertices.
///
/// Creates a V-shaped arrowhead at `tip` pointing in the direction from
/// `tail` to `tip`. The arrowhead length is automatically capped at
/// 30% of the shaft length to prevent weird-looking arrows on short lines.
///
/// # Arguments
/// * `tip` - Arrowhead tip position (the vertex the arrow points at)
/// * `tail` - Arrow tail position
/// * `length` - Desired arrowhead length in pixels (capped at 30% of shaft length)
/// * `angle_degrees` - Angle between each arrowhead line and the shaft
///
/// # Returns
/// Array of two points `[(left_x, left_y), (right_x, right_y)]` for the arrowhead lines.
/// If the shaft is too short (< 1 pixel), both points equal the tip.
pub fn calculate_arrowhead(
    tip: Point,
    tail: Point,
    length: f64,
    angle_degrees: f64,
) -> [(f64, f64); 2] {
    let dx = (tip.x - tail.x) as f64;
    let dy = (tip.y - tail.y) as f64;
    let shaft_length = (dx * dx + dy * dy).sqrt();

    if shaft_length < 1.0 {
        // Shaft too short for an arrowhead
        return [(tip.x as f64, tip.y as f64), (tip.x as f64, tip.y as f64)];
    }

    // Normalize direction vector (pointing from tail to tip)
    let ux = dx / shaft_length;
    let uy = dy / shaft_length;

    // Arrowhead length (max 30% of shaft length to avoid weird-looking arrows on short lines)
    let head_length = length.min(shaft_length * 0.3);

    let angle = angle_degrees.to_radians();
    let cos_a = angle.cos();
    let sin_a = angle.sin();

    // Left side of arrowhead (at the tip)
    let left_x = tip.x as f64 - head_length * (ux * cos_a - uy * sin_a);
    let left_y = tip.y as f64 - head_length * (uy * cos_a + ux * sin_a);

    // Right side of arrowhead (at the tip)
    let right_x = tip.x as f64 - head_length * (ux * cos_a + uy * sin_a);
    let right_y = tip.y as f64 - head_length * (uy * cos_a - ux * sin_a);

    [(left_x, left_y), (right_x, right_y)]
}
