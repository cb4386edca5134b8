// Page wiring and presentation constants for the web front-end.
//
// Motion and trail tuning lives in `conductor_core::constants`; this file
// only names the page elements and assets the front-end touches.
// Element ids
pub const START_BUTTON_ID: &str = "startButton";
pub const WELCOME_ID: &str = "welcomeScreen";
pub const CONTAINER_ID: &str = "container";
pub const HINT_ID: &str = "message";

// Instrument elements
pub const INSTRUMENT_CLASS: &str = "instrument";
pub const INSTRUMENT_IMAGE_EXT: &str = "svg";

// Orchestra rows, back to front
pub const INSTRUMENTS: [&str; 11] = [
    "1violons",
    "2violons",
    "flute",
    "oboe",
    "her",
    "horns",
    "viola",
    "clarinettes",
    "doublebass",
    "cello",
    "bassoon",
];

// Audio
pub const AUDIO_SRC: &str = "Pavane.mp3";

// Idle hint
pub const HINT_TEXT: &str = "Keep conducting!";

// Trail overlay canvas; above instruments, below page titles
pub const TRAIL_CANVAS_Z_INDEX: &str = "999";
