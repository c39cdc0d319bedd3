use beatcards::playback::tone_schedule as schedule_tones;
use beatcards::{Action, CardsError, ColorSpec, Note, Settings, SongBook};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct ErrorPayload {
    message: String,
    line: Option<usize>,
    column: Option<usize>,
}

fn error_payload(e: CardsError) -> ErrorPayload {
    match e {
        CardsError::ParseError { line, column, message } => ErrorPayload {
            message,
            line: Some(line),
            column: Some(column),
        },
        other => ErrorPayload {
            message: other.to_string(),
            line: None,
            column: None,
        },
    }
}

fn error_json(e: CardsError) -> String {
    serde_json::to_string(&error_payload(e)).unwrap_or_else(|_| "{}".to_string())
}

fn to_js_error(e: CardsError) -> JsValue {
    JsValue::from_str(&error_json(e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn settings_from(yaml: Option<String>) -> Result<Settings, JsValue> {
    match yaml {
        Some(yaml) => Settings::from_yaml(&yaml).map_err(to_js_error),
        None => Ok(Settings::default()),
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("beatcards wasm module initialized");
    }
}

/// Parse notation into an array of `{ pitch, duration }` cards
#[wasm_bindgen]
pub fn parse(song: Option<String>) -> Result<JsValue, JsValue> {
    let notes = beatcards::parse_opt(song.as_deref());
    serde_wasm_bindgen::to_value(&notes).map_err(JsValue::from)
}

/// Group card indices into rows for the static grid
#[wasm_bindgen(js_name = layoutRows)]
pub fn layout_rows(
    notes: JsValue,
    unit_size: f64,
    container_width: f64,
) -> Result<JsValue, JsValue> {
    let notes: Vec<Note> = serde_wasm_bindgen::from_value(notes)?;
    let rows = beatcards::layout_rows(&notes, unit_size, container_width);
    serde_wasm_bindgen::to_value(&rows).map_err(JsValue::from)
}

/// Lint notation and return diagnostics as a JSON array
#[wasm_bindgen]
pub fn lint(song: &str) -> String {
    serde_json::to_string(&beatcards::lint(song)).unwrap_or_else(|_| "[]".to_string())
}

/// Strict validation; the error is a JSON payload with line and column
#[wasm_bindgen]
pub fn validate(song: &str) -> Result<(), JsValue> {
    beatcards::validate(song).map_err(to_js_error)
}

/// Parse and lay out for the display mode in `settings_yaml`
#[wasm_bindgen(js_name = buildView)]
pub fn build_view(
    song: &str,
    settings_yaml: Option<String>,
    container_width: f64,
    active: usize,
) -> Result<String, JsValue> {
    let settings = settings_from(settings_yaml)?;
    to_json(&beatcards::build_view(song, &settings, container_width, active))
}

/// Tone events for the host oscillator
#[wasm_bindgen(js_name = toneSchedule)]
pub fn tone_schedule(song: &str, tempo_bpm: f64) -> Result<String, JsValue> {
    let notes = beatcards::parse(song);
    to_json(&schedule_tones(&notes, tempo_bpm))
}

/// CSS background for a color spec, optionally lightened
#[wasm_bindgen(js_name = colorCss)]
pub fn color_css(spec: &str, lighten: Option<f64>) -> String {
    let color = ColorSpec::parse(spec);
    match lighten {
        Some(amount) => color.lightened(amount).css(),
        None => color.css(),
    }
}

/// The song book from a local-storage override, or the built-in one
#[wasm_bindgen(js_name = loadSongBook)]
pub fn load_song_book(override_json: Option<String>) -> Result<String, JsValue> {
    let book = SongBook::load_or_builtin(override_json.as_deref());
    book.to_json().map_err(to_js_error)
}

/// CSS background for a pitch according to a song book
#[wasm_bindgen(js_name = pitchColor)]
pub fn pitch_color(override_json: Option<String>, pitch: &str) -> String {
    SongBook::load_or_builtin(override_json.as_deref())
        .color_for(pitch)
        .css()
}

#[wasm_bindgen(js_name = listSongs)]
pub fn list_songs() -> String {
    serde_json::to_string(&beatcards_songs::list_songs()).unwrap_or_else(|_| "[]".to_string())
}

#[wasm_bindgen(js_name = getSong)]
pub fn get_song(name: &str) -> Result<String, JsValue> {
    beatcards_songs::get_song(name)
        .map(|song| song.content)
        .ok_or_else(|| to_js_error(CardsError::UnknownSong(name.to_string())))
}

/// Action name for a keyboard key, if it is bound
#[wasm_bindgen(js_name = keyAction)]
pub fn key_action(key: &str) -> Option<String> {
    let action = Action::from_key(key)?;
    serde_json::to_value(action)
        .ok()?
        .as_str()
        .map(String::from)
}
