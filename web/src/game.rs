use crate::board::TileBoard;
use crate::settings::{MAX_FLASH_SECS, MIN_FLASH_SECS, SettingsUpdate, SettingsView};
use crate::utils::*;
use clap::Args;
use gloo::timers::callback::Timeout;
use tilerecall_core as game;
use game::{Controls, ResultTone, RoundConfig, TileCount, TileIndex, TileMarks};
use yew::prelude::*;

const MARK_CLASSES: [(TileMarks, &str); 4] = [
    (TileMarks::SELECTED, "selected"),
    (TileMarks::CORRECT, "correct"),
    (TileMarks::INCORRECT, "incorrect"),
    (TileMarks::FLASHING, "flash"),
];

fn mark_class_names(marks: TileMarks) -> impl Iterator<Item = &'static str> {
    MARK_CLASSES
        .into_iter()
        .filter(move |&(mark, _)| marks.contains(mark))
        .map(|(_, name)| name)
}

const fn tone_class(tone: ResultTone) -> Option<&'static str> {
    use ResultTone::*;
    match tone {
        Neutral => None,
        Success => Some("success"),
        Failure => Some("failure"),
        Info => Some("info"),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    SelectTile(TileIndex),
    ToggleReveal,
    ToggleSettings,
    UpdateSettings(SettingsUpdate),
    Timer(game::RoundTimer),
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    index: TileIndex,
    marks: TileMarks,
    #[prop_or_default]
    locked: bool,
    callback: Callback<TileIndex>,
}

#[function_component(TileView)]
fn tile_component(props: &TileProps) -> Html {
    let TileProps {
        index,
        marks,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!("tile");
    for name in mark_class_names(marks) {
        class.push(name);
    }
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("tile {} clicked", index);
        callback.emit(index);
    });

    html! {
        <td {class} {onclick} data-index={index.to_string()}/>
    }
}

#[derive(Args, Properties, Debug, Default, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    #[prop_or_default]
    pub seed: Option<u64>,

    /// How many tiles to remember each round
    #[arg(short, long)]
    #[prop_or_default]
    pub tiles: Option<TileCount>,

    /// How long the pattern is shown, in seconds
    #[arg(short, long)]
    #[prop_or_default]
    pub flash: Option<f64>,
}

impl GameProps {
    fn round_config(&self) -> RoundConfig {
        RoundConfig::new(
            RoundConfig::DEFAULT_GRID_SIDE,
            self.tiles.unwrap_or(RoundConfig::DEFAULT_PATTERN_SIZE),
            self.flash.map_or(RoundConfig::DEFAULT_FLASH_DURATION_MS, |secs| {
                game::secs_to_millis(secs.clamp(MIN_FLASH_SECS, MAX_FLASH_SECS))
            }),
        )
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    controller: game::RoundController,
    board: TileBoard,
    forced_seed: Option<u64>,
    rounds: u64,
    settings_open: bool,
    /// Dropping a `Timeout` cancels it.
    timeouts: Vec<Timeout>,
}

impl GameView {
    fn start_round(&mut self) {
        self.timeouts.clear();

        let seed = round_seed(self.forced_seed, self.rounds);
        self.rounds = self.rounds.wrapping_add(1);
        let token = self
            .controller
            .start_round(game::RandomPatternGenerator::new(seed), &mut self.board);
        log::debug!("round {:?} seed: {}", token, seed);
    }

    fn select_tile(&mut self, index: TileIndex) -> bool {
        match self.controller.select_tile(index, &mut self.board) {
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::warn!("select failed: {}", err);
                false
            }
        }
    }

    /// Turns the timer requests the controller made into browser timeouts.
    fn arm_timers(&mut self, ctx: &Context<Self>) {
        for (delay_ms, timer) in self.board.take_timers() {
            let link = ctx.link().clone();
            self.timeouts.push(Timeout::new(delay_ms, move || {
                link.send_message(Msg::Timer(timer))
            }));
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let config = props.round_config();
        log::debug!("initial configuration: {:?}", config);

        let controller = game::RoundController::new(config);
        let mut board = TileBoard::new();
        controller.mount(&mut board);

        Self {
            controller,
            board,
            forced_seed: props.seed,
            rounds: 0,
            settings_open: false,
            timeouts: Vec::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let updated = match msg {
            Start => {
                self.start_round();
                true
            }
            SelectTile(index) => self.select_tile(index),
            ToggleReveal => self.controller.toggle_reveal(&mut self.board).has_update(),
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                true
            }
            UpdateSettings(SettingsUpdate {
                pattern_size,
                flash_duration_ms,
            }) => {
                let previous = self.controller.config();
                self.controller
                    .update_configuration(pattern_size, flash_duration_ms)
                    != previous
            }
            Timer(timer) => self.controller.on_timer(timer, &mut self.board),
        };

        self.arm_timers(ctx);
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let side = self.board.grid_side();
        let can_select = self.controller.can_select();
        let (result_text, result_tone) = self.board.result();

        let cb_start = ctx.link().callback(|_: MouseEvent| Start);
        let cb_reveal = ctx.link().callback(|_: MouseEvent| ToggleReveal);
        let cb_settings = ctx.link().callback(|_: MouseEvent| ToggleSettings);
        let cb_update = ctx.link().callback(UpdateSettings);

        html! {
            <div class="tilerecall">
                <small onclick={cb_settings.clone()}>{"···"}</small>
                <table class={classes!("grid", can_select.then_some("playable"))}>
                    {
                        for (0..side).map(|y| html! {
                            <tr>
                                {
                                    for (0..side).map(|x| {
                                        let index = game::tile_index((x, y), side);
                                        let marks = self.board.marks_at((x, y));
                                        let callback = ctx.link().callback(SelectTile);
                                        html! {
                                            <TileView {index} {marks} locked={!can_select} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <p class={classes!("result", tone_class(result_tone))}>{result_text.to_string()}</p>
                <nav>
                    if self.board.is_shown(Controls::START) {
                        <button id="start-btn" onclick={cb_start.clone()}>{"Start"}</button>
                    }
                    if self.board.is_shown(Controls::RESET) {
                        <button id="reset-btn" onclick={cb_start}>{"Reset"}</button>
                    }
                    if self.board.is_shown(Controls::REVEAL) {
                        <button id="show-answers-btn" onclick={cb_reveal}>{self.board.reveal_label()}</button>
                    }
                </nav>
                <SettingsView
                    open={self.settings_open}
                    config={self.controller.config()}
                    onchange={cb_update}
                    onclose={cb_settings}
                />
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::{SelectOutcome, Verdict};

    #[test]
    fn stacked_marks_map_to_all_classes() {
        let names: Vec<_> = mark_class_names(TileMarks::SELECTED | TileMarks::INCORRECT).collect();
        assert_eq!(names, ["selected", "incorrect"]);
        assert_eq!(mark_class_names(TileMarks::empty()).count(), 0);
    }

    #[test]
    fn neutral_tone_has_no_class() {
        assert_eq!(tone_class(ResultTone::Neutral), None);
        assert_eq!(tone_class(ResultTone::Info), Some("info"));
    }

    #[test]
    fn props_are_clamped_into_config() {
        let props = GameProps {
            seed: None,
            tiles: Some(99),
            flash: Some(-2.),
        };

        let config = props.round_config();

        assert_eq!(config.pattern_size, 25);
        assert_eq!(config.flash_duration_ms, 0);
        assert_eq!(GameProps::default().round_config(), RoundConfig::default());
    }

    #[test]
    fn flash_argument_stays_within_slider_range() {
        let flash_ms = |flash: f64| {
            GameProps {
                flash: Some(flash),
                ..Default::default()
            }
            .round_config()
            .flash_duration_ms
        };

        assert_eq!(flash_ms(0.), 0);
        assert_eq!(flash_ms(10.), game::secs_to_millis(MAX_FLASH_SECS));
        assert_eq!(flash_ms(1.5), 1500);
    }

    #[test]
    fn board_tracks_a_failed_round() {
        let mut controller = game::RoundController::new(RoundConfig::default());
        let mut board = TileBoard::new();
        controller.mount(&mut board);
        assert!(board.is_shown(Controls::START));

        let pattern = game::Pattern::from_indices(25, &[2, 7, 9, 14, 20]).unwrap();
        controller.start_round(pattern, &mut board);
        assert!(!board.is_shown(Controls::START));
        assert!(board.is_shown(Controls::RESET | Controls::REVEAL));
        assert_eq!(board.marks_at((0, 4)), TileMarks::FLASHING);

        for (_, timer) in board.take_timers() {
            controller.on_timer(timer, &mut board);
        }
        let mut outcome = SelectOutcome::NoChange;
        for index in [2, 7, 9, 14, 21] {
            outcome = controller.select_tile(index, &mut board).unwrap();
        }

        assert_eq!(outcome, SelectOutcome::Scored(Verdict::Failure));
        assert_eq!(
            board.marks_at((1, 4)),
            TileMarks::SELECTED | TileMarks::INCORRECT
        );
        assert_eq!(board.result(), (game::FAILURE_TEXT, ResultTone::Failure));

        let misses = board.take_timers();
        assert_eq!(misses.len(), 1);
        controller.on_timer(misses[0].1, &mut board);
        assert_eq!(board.marks_at((0, 4)), TileMarks::FLASHING);
    }
}
