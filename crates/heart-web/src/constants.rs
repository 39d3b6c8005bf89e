// Page element hooks and web-side defaults.

pub const CANVAS_SELECTOR: &str = "canvas.webgl";
pub const TRIGGER_SELECTOR: &str = "button";
pub const AUDIO_SELECTOR: &str = "audio";
pub const OPENING_SCREEN_ID: &str = "opening_screen";

// Player controls
pub const PLAY_PAUSE_ID: &str = "btn-play-pause";
pub const STOP_ID: &str = "btn-stop";
pub const MUTE_ID: &str = "btn-mute";
pub const PROGRESS_ID: &str = "progress";

// Caption
pub const CAPTION_ID: &str = "text1";
pub const CAPTION_SCRIPT_ATTR: &str = "data-script"; // overrides DEFAULT_CAPTION when present
pub const BACKDROP_SELECTOR: &str = ".bg_heart";
pub const BACKDROP_REVEALED_CLASS: &str = "revealed";

pub const DEFAULT_CAPTION: &str =
    "Hi SweetHeart.....!  <<   There is something I want to tell you.  <<<   \
     Please read carefully...!   > Every day with you feels special.  <<   \
     >I Love U <SweetHeart.....! |   <<<< ";
