pub mod config;
pub mod dates;
pub mod hotels;
pub mod month;
pub mod pick;

use checkin_core::locale::Locale;
use checkin_core::month_grid::GridLayout;
use std::path::PathBuf;

/// Config file values with command-line overrides applied.
pub struct Settings {
    pub locale: Locale,
    pub layout: GridLayout,
    pub hotels_file: Option<PathBuf>,
}
