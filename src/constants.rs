/// Web frontend constants.
///
/// Physics and palette live in `core::constants`; this file only holds the
/// names the page markup and the browser are expected to provide.
// Canvas the hero backdrop draws into
pub const HERO_CANVAS_ID: &str = "hero-bg";

// Browser event that re-seeds the field
pub const RESIZE_EVENT: &str = "resize";

// Console verbosity for the wasm build
pub const LOG_LEVEL: log::Level = log::Level::Info;
