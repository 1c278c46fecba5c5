use std::collections::HashMap;

use itertools::Itertools;

use crate::{
    Color, FACELET_COUNT, FACELETS_PER_COLOR, Facelet, FaceletId, LATTICE_MAX, Move, TurnSpeed,
};

/// State of a 3x3x3 puzzle cube: the position of each of the 54 facelets and
/// the color of each one.
///
/// Facelets are stored in an arena indexed by [`FaceletId`]. Colors never
/// change; turns only move facelets around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    facelets: Vec<Facelet>,
    colors: Vec<Color>,
}
impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}
impl CubeState {
    /// Returns the canonical solved state.
    ///
    /// Facelets are grouped by color in the order of [`Color::iter()`], nine
    /// per face.
    pub fn solved() -> Self {
        let mut facelets = Vec::with_capacity(FACELET_COUNT);
        let mut colors = Vec::with_capacity(FACELET_COUNT);
        for color in Color::iter() {
            for (row, col) in (0..3).cartesian_product(0..3) {
                facelets.push(Facelet::on_face(
                    color.axis(),
                    color.solved_coordinate(),
                    row,
                    col,
                ));
                colors.push(color);
            }
        }
        Self { facelets, colors }
    }

    /// Returns the number of facelets, which is always 54.
    pub fn len(&self) -> usize {
        self.facelets.len()
    }
    /// Returns `false`. The cube always has facelets.
    pub fn is_empty(&self) -> bool {
        self.facelets.is_empty()
    }

    /// Returns an iterator over all facelet IDs.
    pub fn ids(&self) -> impl Iterator<Item = FaceletId> + use<> {
        (0..self.facelets.len() as u8).map(FaceletId)
    }
    /// Returns an iterator over all facelets and their colors.
    pub fn iter(&self) -> impl Iterator<Item = (FaceletId, &Facelet, Color)> {
        std::iter::zip(&self.facelets, &self.colors)
            .enumerate()
            .map(|(i, (facelet, &color))| (FaceletId(i as u8), facelet, color))
    }

    /// Returns the current geometry of a facelet.
    pub fn facelet(&self, id: FaceletId) -> &Facelet {
        &self.facelets[id.idx()]
    }
    /// Returns the color of a facelet.
    pub fn color(&self, id: FaceletId) -> Color {
        self.colors[id.idx()]
    }

    /// Returns the ID of the facelet with exactly the given corners.
    pub fn find(&self, key: &Facelet) -> Option<FaceletId> {
        self.facelets
            .iter()
            .position(|f| f == key)
            .map(|i| FaceletId(i as u8))
    }
    /// Returns the color of the facelet with exactly the given corners.
    pub fn get(&self, key: &Facelet) -> Option<Color> {
        Some(self.color(self.find(key)?))
    }

    /// Moves the facelet currently at `old` to `new`, keeping its color.
    ///
    /// A missing `old` facelet means that the turn engine has lost track of a
    /// facelet, which is a bug.
    pub fn replace(&mut self, old: &Facelet, new: Facelet) {
        match self.find(old) {
            Some(id) => self.facelets[id.idx()] = new,
            None => debug_panic!("no facelet at {old} to replace with {new}"),
        }
    }

    /// Moves a facelet to `new`, keeping its color.
    pub(crate) fn set_facelet(&mut self, id: FaceletId, new: Facelet) {
        self.facelets[id.idx()] = new;
    }

    /// Applies a move using the given turn speed. The incremental rotation
    /// only affects precision before snapping, so the final state does not
    /// depend on `speed`.
    pub fn turn(&mut self, mv: Move, speed: TurnSpeed) {
        crate::Turn::new(self, mv).apply(self, speed);
    }
    /// Applies a sequence of moves.
    pub fn turn_all(&mut self, moves: impl IntoIterator<Item = Move>, speed: TurnSpeed) {
        for mv in moves {
            self.turn(mv, speed);
        }
    }

    /// Returns the number of facelets of each color.
    pub fn color_counts(&self) -> HashMap<Color, usize> {
        self.colors.iter().copied().counts()
    }

    /// Returns a map from facelet geometry to color that ignores facelet IDs
    /// and corner order.
    ///
    /// Two states with the same layout look identical even if identically
    /// colored facelets have traded places.
    pub fn layout(&self) -> HashMap<Facelet, Color> {
        self.iter()
            .map(|(_, facelet, color)| (facelet.canonical(), color))
            .collect()
    }

    /// Checks the structural invariants of the state: 54 facelets, 9 of each
    /// color, all lying flat on the outside of the lattice cube with no two
    /// in the same place.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.len() != FACELET_COUNT {
            return Err(format!("expected {FACELET_COUNT} facelets; got {}", self.len()));
        }
        for (color, count) in self.color_counts() {
            if count != FACELETS_PER_COLOR {
                return Err(format!("expected {FACELETS_PER_COLOR} {color} facelets; got {count}"));
            }
        }
        for (id, facelet, _) in self.iter() {
            let Some(axis) = facelet.plane_axis() else {
                return Err(format!("facelet {id} at {facelet} is not axis-aligned"));
            };
            if !facelet.is_within_lattice() {
                return Err(format!("facelet {id} at {facelet} is outside the lattice"));
            }
            if !matches!(facelet.shared_coordinate(axis), Some(0 | LATTICE_MAX)) {
                return Err(format!("facelet {id} at {facelet} is not on the surface"));
            }
        }
        if self.layout().len() != FACELET_COUNT {
            return Err("two facelets occupy the same place".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cubemath::Axis;

    use super::*;
    use crate::LatticePoint;

    #[test]
    fn test_solved_state_invariants() {
        let state = CubeState::solved();
        assert_eq!(state.len(), FACELET_COUNT);
        assert_eq!(state.check_invariants(), Ok(()));
        for color in Color::iter() {
            assert_eq!(state.color_counts()[&color], FACELETS_PER_COLOR);
        }
    }

    #[test]
    fn test_solved_state_layout() {
        let state = CubeState::solved();
        for (_, facelet, color) in state.iter() {
            assert_eq!(facelet.plane_axis(), Some(color.axis()));
            assert_eq!(
                facelet.shared_coordinate(color.axis()),
                Some(color.solved_coordinate()),
            );
        }

        let front_center = Facelet::new([
            LatticePoint::new(2, 2, 0),
            LatticePoint::new(2, 4, 0),
            LatticePoint::new(4, 4, 0),
            LatticePoint::new(4, 2, 0),
        ]);
        assert_eq!(state.get(&front_center), Some(Color::Red));
    }

    #[test]
    fn test_replace() {
        let mut state = CubeState::solved();
        let old = *state.facelet(FaceletId(4));
        let new = Facelet::on_face(Axis::Z, 0, 1, 1);
        state.replace(&old, new);
        assert_eq!(state.find(&new), Some(FaceletId(4)));
        assert_eq!(state.color(FaceletId(4)), Color::Red);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_replace_missing_facelet_panics() {
        let mut state = CubeState::solved();
        let missing = Facelet::on_face(Axis::Z, 3, 0, 0);
        state.replace(&missing, missing);
    }
}
