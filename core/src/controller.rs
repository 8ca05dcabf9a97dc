use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

pub const MISS_PULSE_DELAY_MS: Millis = 500;
pub const MISS_PULSE_DURATION_MS: Millis = 1000;

pub const SUCCESS_TEXT: &str = "Correct! Well done!";
pub const FAILURE_TEXT: &str = "Incorrect. Revenge? 😏";
pub const REVEALED_TEXT: &str = "Answers revealed";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    Idle,
    Showing,
    Selecting,
    Scored,
}

impl RoundState {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_scored(self) -> bool {
        matches!(self, Self::Scored)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Generation counter of a round, every round start issues a new one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoundToken(u32);

impl RoundToken {
    const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    /// End of the initial flash, selection opens.
    HidePattern,
    /// Start of the pulse on a tile the player missed.
    ShowMissed(TileIndex),
    HideMissed(TileIndex),
}

/// One-shot timer request, tagged with the round that issued it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTimer {
    pub token: RoundToken,
    pub kind: TimerKind,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Success,
    Failure,
}

impl Verdict {
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    pub const fn text(self) -> &'static str {
        match self {
            Self::Success => SUCCESS_TEXT,
            Self::Failure => FAILURE_TEXT,
        }
    }

    pub const fn tone(self) -> ResultTone {
        match self {
            Self::Success => ResultTone::Success,
            Self::Failure => ResultTone::Failure,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    NoChange,
    Selected,
    Scored(Verdict),
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    Hidden,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Owns the lifecycle of memory rounds: pattern, selection, timing and scoring.
///
/// The controller is single-threaded and passive. Each operation pushes its visible effects into the given
/// [`Presenter`], and delayed work comes back in through [`RoundController::on_timer`].
#[derive(Clone, Debug, PartialEq)]
pub struct RoundController {
    /// Applied on the next round start.
    config: RoundConfig,
    active_config: RoundConfig,
    state: RoundState,
    token: RoundToken,
    pattern: Option<Pattern>,
    selection: Vec<TileIndex>,
    revealed: bool,
    /// Missed tiles whose pulse is currently lit.
    pulsing: Vec<TileIndex>,
    verdict: Option<Verdict>,
}

impl RoundController {
    pub fn new(config: RoundConfig) -> Self {
        let config = RoundConfig::new(
            config.grid_side,
            config.pattern_size,
            config.flash_duration_ms,
        );
        Self {
            config,
            active_config: config,
            state: Default::default(),
            token: Default::default(),
            pattern: None,
            selection: Vec::new(),
            revealed: false,
            pulsing: Vec::new(),
            verdict: None,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn token(&self) -> RoundToken {
        self.token
    }

    /// Configuration the next round will use.
    pub fn config(&self) -> RoundConfig {
        self.config
    }

    /// Configuration the current round was started with.
    pub fn active_config(&self) -> RoundConfig {
        self.active_config
    }

    pub fn grid_side(&self) -> GridSide {
        self.config.grid_side
    }

    pub fn total_tiles(&self) -> TileCount {
        self.config.total_tiles()
    }

    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    pub fn selection(&self) -> &[TileIndex] {
        &self.selection
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    pub fn can_select(&self) -> bool {
        matches!(self.state, RoundState::Selecting) && !self.revealed && self.pattern.is_some()
    }

    /// Draws the empty grid with only the start control available.
    pub fn mount(&self, presenter: &mut impl Presenter) {
        presenter.render_grid(self.grid_side());
        presenter.set_control_visibility(Controls::START, true);
        presenter.set_control_visibility(Controls::RESET | Controls::REVEAL, false);
        presenter.set_reveal_label(false);
        presenter.set_result_text("", ResultTone::Neutral);
    }

    /// Starts a new round from any state, superseding whatever the previous round left pending.
    pub fn start_round(
        &mut self,
        generator: impl PatternGenerator,
        presenter: &mut impl Presenter,
    ) -> RoundToken {
        for index in 0..self.total_tiles() {
            presenter.clear_tile_marks(index);
        }

        self.selection.clear();
        self.pattern = None;
        self.revealed = false;
        self.pulsing.clear();
        self.verdict = None;
        self.token = self.token.next();
        self.active_config = self.config;
        self.state = RoundState::Showing;

        presenter.set_reveal_label(false);
        presenter.set_control_visibility(Controls::START, false);
        presenter.set_control_visibility(Controls::RESET | Controls::REVEAL, true);
        presenter.set_result_text("", ResultTone::Neutral);

        let pattern = generator.generate(self.active_config);
        for index in pattern.iter() {
            presenter.add_tile_marks(index, TileMarks::FLASHING);
        }
        presenter.schedule(
            self.active_config.flash_duration_ms,
            RoundTimer {
                token: self.token,
                kind: TimerKind::HidePattern,
            },
        );

        log::debug!(
            "round {:?} started, pattern: {:?}, flash: {}ms",
            self.token,
            pattern.as_slice(),
            self.active_config.flash_duration_ms
        );
        self.pattern = Some(pattern);
        self.token
    }

    pub fn select_tile(
        &mut self,
        index: TileIndex,
        presenter: &mut impl Presenter,
    ) -> Result<SelectOutcome> {
        if index >= self.total_tiles() {
            return Err(RoundError::InvalidTile(index));
        }

        if !self.can_select() || self.selection.contains(&index) {
            log::trace!("select {} ignored in {:?}", index, self.state);
            return Ok(SelectOutcome::NoChange);
        }

        self.selection.push(index);
        presenter.add_tile_marks(index, TileMarks::SELECTED);
        log::trace!("selected {}", index);

        let pattern_len = self.pattern.as_ref().map_or(0, Pattern::len);
        if self.selection.len() >= pattern_len {
            Ok(SelectOutcome::Scored(self.score_round(presenter)))
        } else {
            Ok(SelectOutcome::Selected)
        }
    }

    /// Marks every selection as correct or incorrect and schedules a pulse for each missed tile.
    fn score_round(&mut self, presenter: &mut impl Presenter) -> Verdict {
        let Some(pattern) = self.pattern.as_ref() else {
            return Verdict::Failure;
        };

        for &index in &self.selection {
            if pattern.contains(index) {
                presenter.add_tile_marks(index, TileMarks::CORRECT);
            } else {
                presenter.add_tile_marks(index, TileMarks::INCORRECT);
            }
        }

        for index in pattern.iter().filter(|index| !self.selection.contains(index)) {
            presenter.schedule(
                MISS_PULSE_DELAY_MS,
                RoundTimer {
                    token: self.token,
                    kind: TimerKind::ShowMissed(index),
                },
            );
        }

        let verdict = if pattern.matches(&self.selection) {
            Verdict::Success
        } else {
            Verdict::Failure
        };
        presenter.set_result_text(verdict.text(), verdict.tone());
        presenter.set_control_visibility(Controls::RESET, true);

        log::debug!(
            "round {:?} scored {:?}, selection: {:?}",
            self.token,
            verdict,
            self.selection
        );
        self.state = RoundState::Scored;
        self.verdict = Some(verdict);
        verdict
    }

    pub fn toggle_reveal(&mut self, presenter: &mut impl Presenter) -> RevealOutcome {
        let Some(pattern) = self.pattern.as_ref() else {
            return RevealOutcome::NoChange;
        };

        self.revealed = !self.revealed;
        presenter.set_reveal_label(self.revealed);

        if self.revealed {
            for index in pattern.iter() {
                presenter.add_tile_marks(index, TileMarks::FLASHING);
            }
            presenter.set_result_text(REVEALED_TEXT, ResultTone::Info);
            RevealOutcome::Revealed
        } else {
            // a running miss pulse ends on its own timer
            for index in pattern.iter().filter(|index| !self.pulsing.contains(index)) {
                presenter.remove_tile_marks(index, TileMarks::FLASHING);
            }
            presenter.set_result_text("", ResultTone::Neutral);
            RevealOutcome::Hidden
        }
    }

    /// Out-of-range values are clamped, the result only applies to the next round.
    pub fn update_configuration(
        &mut self,
        pattern_size: Option<TileCount>,
        flash_duration_ms: Option<Millis>,
    ) -> RoundConfig {
        let mut config = self.config;
        if let Some(pattern_size) = pattern_size {
            config = config.with_pattern_size(pattern_size);
            if config.pattern_size != pattern_size {
                log::warn!(
                    "pattern size {} clamped to {}",
                    pattern_size,
                    config.pattern_size
                );
            }
        }
        if let Some(flash_duration_ms) = flash_duration_ms {
            config = config.with_flash_duration_ms(flash_duration_ms);
            if config.flash_duration_ms != flash_duration_ms {
                log::warn!(
                    "flash duration {}ms clamped to {}ms",
                    flash_duration_ms,
                    config.flash_duration_ms
                );
            }
        }
        log::debug!("configuration for next round: {:?}", config);
        self.config = config;
        config
    }

    /// Applies a fired timer, returns whether anything changed.
    ///
    /// Timers issued by an earlier round are ignored.
    pub fn on_timer(&mut self, timer: RoundTimer, presenter: &mut impl Presenter) -> bool {
        if timer.token != self.token {
            log::debug!(
                "stale timer {:?} from round {:?}, current round {:?}",
                timer.kind,
                timer.token,
                self.token
            );
            return false;
        }

        match timer.kind {
            TimerKind::HidePattern => {
                if !matches!(self.state, RoundState::Showing) {
                    return false;
                }
                self.state = RoundState::Selecting;
                if !self.revealed {
                    if let Some(pattern) = self.pattern.as_ref() {
                        for index in pattern.iter() {
                            presenter.remove_tile_marks(index, TileMarks::FLASHING);
                        }
                    }
                }
                log::trace!("round {:?} accepts selection", self.token);
                true
            }
            TimerKind::ShowMissed(index) => {
                if !self.state.is_scored() {
                    return false;
                }
                presenter.add_tile_marks(index, TileMarks::FLASHING);
                self.pulsing.push(index);
                presenter.schedule(
                    MISS_PULSE_DURATION_MS,
                    RoundTimer {
                        token: self.token,
                        kind: TimerKind::HideMissed(index),
                    },
                );
                true
            }
            TimerKind::HideMissed(index) => {
                if !self.state.is_scored() {
                    return false;
                }
                self.pulsing.retain(|&pulsing| pulsing != index);
                // revealed tiles stay lit until the player hides them
                if self.revealed {
                    return false;
                }
                presenter.remove_tile_marks(index, TileMarks::FLASHING);
                true
            }
        }
    }
}
