use crate::*;

/// Everything the round controller needs from the presentation layer.
///
/// The controller never reads back from the presenter, it only pushes state changes and timer requests. Timer
/// requests must eventually be handed back through [`RoundController::on_timer`] after `delay_ms` elapsed.
pub trait Presenter {
    /// Materializes `grid_side * grid_side` selectable tiles, all unmarked.
    fn render_grid(&mut self, grid_side: GridSide);

    fn add_tile_marks(&mut self, index: TileIndex, marks: TileMarks);

    fn remove_tile_marks(&mut self, index: TileIndex, marks: TileMarks);

    fn clear_tile_marks(&mut self, index: TileIndex) {
        self.remove_tile_marks(index, TileMarks::all());
    }

    fn set_result_text(&mut self, text: &str, tone: ResultTone);

    fn set_control_visibility(&mut self, controls: Controls, shown: bool);

    /// Whether the reveal control should offer to hide (`true`) or to reveal (`false`).
    fn set_reveal_label(&mut self, revealed: bool);

    fn schedule(&mut self, delay_ms: Millis, timer: RoundTimer);
}
