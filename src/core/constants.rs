// Tuning constants for the trail and the bouquet builder.
// Everything here is plain data so host-side tests can include this file.

// Trail image pool
pub const TRAIL_IMAGES: [&str; 18] = [
    "assets/pic1.jpg",
    "assets/pic2.jpg",
    "assets/pic3.jpg",
    "assets/pic4.jpg",
    "assets/pic5.jpg",
    "assets/pic6.jpg",
    "assets/pic7.jpg",
    "assets/pic8.jpg",
    "assets/pic9.jpg",
    "assets/pic10.jpg",
    "assets/pic11.jpg",
    "assets/pic12.jpg",
    "assets/pic13.jpg",
    "assets/pic14.jpg",
    "assets/pic15.jpg",
    "assets/pic16.jpg",
    "assets/pic17.jpg",
    "assets/pic18.jpg",
];

// Lifecycle timings (milliseconds)
pub const IMAGE_LIFESPAN_MS: f64 = 750.0;
pub const REMOVAL_DELAY_MS: f64 = 50.0;
pub const SCROLL_THRESHOLD_MS: f64 = 50.0;
pub const IDLE_CURSOR_INTERVAL_MS: f64 = 300.0;
pub const MOTION_SETTLE_MS: u32 = 100; // quiet period before "moving" resets
pub const FADE_IN_KICK_MS: u32 = 10; // delay before scale(0) -> scale(1)

// Transitions
pub const IN_DURATION_MS: u32 = 750;
pub const OUT_DURATION_MS: u32 = 1000;
pub const IN_EASING: &str = "cubic-bezier(.07, .5, .5, 1)";
pub const OUT_EASING: &str = "cubic-bezier(.87, 0, .13, 1)";

// Geometry (CSS pixels / degrees)
pub const MOUSE_THRESHOLD_PX: f32 = 100.0;
pub const SCROLL_PERTURB_MARGIN_PX: f32 = 10.0; // added to the threshold for scroll spawns
pub const SCROLL_JITTER_PX: f32 = 10.0; // full width of the x jitter per scroll event
pub const MAX_ROTATION_DEG: f32 = 25.0;

// Bouquet
pub const BOUQUET_REQUIRED: usize = 5;
pub const BOUQUET_JPG_FLOWER: &str = "paper";
pub const BOUQUET_ASSET_DIR: &str = "assets";
