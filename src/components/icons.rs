//! Centralized icon definitions.
//!
//! Maps semantic icon names to the lucide set so components never name a
//! concrete glyph directly.

use icondata::Icon;

pub const BELL: Icon = icondata::LuBell;
pub const CHECK: Icon = icondata::LuCheck;
pub const CHEVRON_DOWN: Icon = icondata::LuChevronDown;
pub const CHEVRON_LEFT: Icon = icondata::LuChevronLeft;
pub const CHEVRON_RIGHT: Icon = icondata::LuChevronRight;
pub const CLOSE: Icon = icondata::LuX;
pub const CODE: Icon = icondata::LuCode;
pub const COPY: Icon = icondata::LuCopy;
pub const DOWNLOAD: Icon = icondata::LuDownload;
pub const LAPTOP: Icon = icondata::LuLaptop;
pub const LAYERS: Icon = icondata::LuLayers;
pub const MENU: Icon = icondata::LuMenu;
pub const MONITOR: Icon = icondata::LuMonitor;
pub const MOON: Icon = icondata::LuMoon;
pub const PALETTE: Icon = icondata::LuPalette;
pub const PAUSE: Icon = icondata::LuPause;
pub const PLAY: Icon = icondata::LuPlay;
pub const RESET: Icon = icondata::LuRefreshCcw;
pub const ROCKET: Icon = icondata::LuRocket;
pub const SEARCH: Icon = icondata::LuSearch;
pub const SMARTPHONE: Icon = icondata::LuSmartphone;
pub const SPARKLES: Icon = icondata::LuSparkles;
pub const STAR: Icon = icondata::LuStar;
pub const SUN: Icon = icondata::LuSun;
pub const TABLET: Icon = icondata::LuTablet;
