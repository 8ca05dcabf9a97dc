use ndarray::Array2;
use tilerecall_core as game;
use game::{Controls, Coord2, GridSide, Millis, ResultTone, RoundTimer, TileIndex, TileMarks, ToNdIndex};

/// View state of the game, filled in by the round controller through [`game::Presenter`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TileBoard {
    marks: Array2<TileMarks>,
    result_text: String,
    result_tone: ResultTone,
    visible: Controls,
    revealed: bool,
    pending_timers: Vec<(Millis, RoundTimer)>,
}

impl TileBoard {
    pub(crate) fn new() -> Self {
        Self {
            marks: Array2::default((0, 0)),
            result_text: String::new(),
            result_tone: ResultTone::Neutral,
            visible: Controls::empty(),
            revealed: false,
            pending_timers: Vec::new(),
        }
    }

    pub(crate) fn grid_side(&self) -> GridSide {
        self.marks.dim().0.try_into().unwrap_or(GridSide::MAX)
    }

    pub(crate) fn marks_at(&self, coords: Coord2) -> TileMarks {
        self.marks
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or_default()
    }

    pub(crate) fn result(&self) -> (&str, ResultTone) {
        (&self.result_text, self.result_tone)
    }

    pub(crate) fn is_shown(&self, control: Controls) -> bool {
        self.visible.contains(control)
    }

    pub(crate) fn reveal_label(&self) -> &'static str {
        if self.revealed { "Hide" } else { "Reveal" }
    }

    /// Timer requests issued since the last call.
    pub(crate) fn take_timers(&mut self) -> Vec<(Millis, RoundTimer)> {
        std::mem::take(&mut self.pending_timers)
    }

    fn tile_mut(&mut self, index: TileIndex) -> Option<&mut TileMarks> {
        let side = self.grid_side();
        if side == 0 {
            log::warn!("tile {} marked before the grid was rendered", index);
            return None;
        }
        let coords = game::tile_coords(index, side);
        let tile = self.marks.get_mut(coords.to_nd_index());
        if tile.is_none() {
            log::warn!("tile {} is outside the {}x{} grid", index, side, side);
        }
        tile
    }
}

impl game::Presenter for TileBoard {
    fn render_grid(&mut self, grid_side: GridSide) {
        self.marks = Array2::default((grid_side, grid_side).to_nd_index());
    }

    fn add_tile_marks(&mut self, index: TileIndex, marks: TileMarks) {
        if let Some(tile) = self.tile_mut(index) {
            tile.insert(marks);
        }
    }

    fn remove_tile_marks(&mut self, index: TileIndex, marks: TileMarks) {
        if let Some(tile) = self.tile_mut(index) {
            tile.remove(marks);
        }
    }

    fn set_result_text(&mut self, text: &str, tone: ResultTone) {
        text.clone_into(&mut self.result_text);
        self.result_tone = tone;
    }

    fn set_control_visibility(&mut self, controls: Controls, shown: bool) {
        self.visible.set(controls, shown);
    }

    fn set_reveal_label(&mut self, revealed: bool) {
        self.revealed = revealed;
    }

    fn schedule(&mut self, delay_ms: Millis, timer: RoundTimer) {
        self.pending_timers.push((delay_ms, timer));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::Presenter;

    fn board() -> TileBoard {
        let mut board = TileBoard::new();
        board.render_grid(5);
        board
    }

    #[test]
    fn marks_follow_row_major_layout() {
        let mut board = board();

        board.add_tile_marks(7, TileMarks::SELECTED);

        assert_eq!(board.grid_side(), 5);
        assert_eq!(board.marks_at((2, 1)), TileMarks::SELECTED);
        assert_eq!(board.marks_at((1, 2)), TileMarks::empty());
    }

    #[test]
    fn marks_stack_and_clear_independently() {
        let mut board = board();

        board.add_tile_marks(21, TileMarks::SELECTED);
        board.add_tile_marks(21, TileMarks::INCORRECT);
        board.add_tile_marks(21, TileMarks::FLASHING);
        board.remove_tile_marks(21, TileMarks::FLASHING);

        assert_eq!(
            board.marks_at((1, 4)),
            TileMarks::SELECTED | TileMarks::INCORRECT
        );

        board.clear_tile_marks(21);
        assert_eq!(board.marks_at((1, 4)), TileMarks::empty());
    }

    #[test]
    fn out_of_range_marks_are_dropped() {
        let mut board = board();

        board.add_tile_marks(25, TileMarks::SELECTED);

        assert!(board.marks.iter().all(|marks| marks.is_empty()));
        assert_eq!(board.marks_at((9, 9)), TileMarks::empty());
    }

    #[test]
    fn timers_are_drained_once() {
        let mut board = board();
        let timer = RoundTimer {
            token: Default::default(),
            kind: game::TimerKind::HidePattern,
        };

        board.schedule(500, timer);

        assert_eq!(board.take_timers(), [(500, timer)]);
        assert!(board.take_timers().is_empty());
    }

    #[test]
    fn reveal_label_flips() {
        let mut board = board();
        assert_eq!(board.reveal_label(), "Reveal");
        board.set_reveal_label(true);
        assert_eq!(board.reveal_label(), "Hide");
    }
}
