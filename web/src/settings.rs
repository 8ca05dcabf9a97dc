use tilerecall_core as game;
use game::{Millis, RoundConfig, TileCount};
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub(crate) const MIN_FLASH_SECS: f64 = 0.0;
pub(crate) const MAX_FLASH_SECS: f64 = 3.0;
pub(crate) const FLASH_STEP_SECS: f64 = 0.1;

/// A single slider change, `None` fields are left as they are.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct SettingsUpdate {
    pub pattern_size: Option<TileCount>,
    pub flash_duration_ms: Option<Millis>,
}

pub(crate) fn parse_pattern_size(value: &str) -> Option<TileCount> {
    value.trim().parse().ok()
}

pub(crate) fn parse_flash_duration(value: &str) -> Option<Millis> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite())
        .map(game::secs_to_millis)
}

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    #[prop_or_default]
    pub open: bool,
    pub config: RoundConfig,
    pub onchange: Callback<SettingsUpdate>,
    pub onclose: Callback<MouseEvent>,
}

#[function_component]
pub(crate) fn SettingsView(props: &SettingsProps) -> Html {
    let config = props.config;

    let on_tiles_input = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match parse_pattern_size(&input.value()) {
                Some(pattern_size) => onchange.emit(SettingsUpdate {
                    pattern_size: Some(pattern_size),
                    ..Default::default()
                }),
                None => log::warn!("unparsable tile count: {:?}", input.value()),
            }
        })
    };

    let on_flash_input = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match parse_flash_duration(&input.value()) {
                Some(flash_duration_ms) => onchange.emit(SettingsUpdate {
                    flash_duration_ms: Some(flash_duration_ms),
                    ..Default::default()
                }),
                None => log::warn!("unparsable flash duration: {:?}", input.value()),
            }
        })
    };

    html! {
        <dialog id="settings" open={props.open}>
            <article>
                <h2>{"Settings"}</h2>
                <label for="tiles-count">
                    {"Tiles: "}
                    <output id="tiles-count-value">{config.pattern_size.to_string()}</output>
                </label>
                <input
                    type="range"
                    id="tiles-count"
                    min="1"
                    max={config.total_tiles().to_string()}
                    step="1"
                    value={config.pattern_size.to_string()}
                    oninput={on_tiles_input}
                />
                <label for="flash-duration">
                    {"Flash duration: "}
                    <output id="flash-duration-value">{format!("{:.1}s", config.flash_duration_secs())}</output>
                </label>
                <input
                    type="range"
                    id="flash-duration"
                    min={MIN_FLASH_SECS.to_string()}
                    max={MAX_FLASH_SECS.to_string()}
                    step={FLASH_STEP_SECS.to_string()}
                    value={config.flash_duration_secs().to_string()}
                    oninput={on_flash_input}
                />
                <footer>
                    <button onclick={props.onclose.clone()}>{"Close"}</button>
                </footer>
            </article>
        </dialog>
    }
}
