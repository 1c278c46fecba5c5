use itertools::Itertools;

use crate::{Color, CubeState};

/// Returns whether the cube is solved: every facelet of each color lies on
/// that color's own face.
pub fn is_solved(state: &CubeState) -> bool {
    Color::iter().all(|color| is_color_solved(state, color))
}

/// Returns the colors that have at least one facelet off their own face, in
/// [`Color::iter()`] order.
pub fn misplaced_colors(state: &CubeState) -> Vec<Color> {
    Color::iter()
        .filter(|&color| !is_color_solved(state, color))
        .collect()
}

fn is_color_solved(state: &CubeState, color: Color) -> bool {
    let axis = color.axis();
    state
        .iter()
        .filter(|&(_, _, c)| c == color)
        .flat_map(|(_, facelet, _)| facelet.corners)
        .map(|p| p[axis.idx()])
        .all_equal_value()
        .is_ok_and(|coordinate| coordinate == color.solved_coordinate())
}
