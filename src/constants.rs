/// DOM contract shared by the trail and the bouquet builder.
///
/// Selectors, ids and class names the page markup must provide, plus the
/// inline styles applied when the bouquet completes.
// Trail
pub const TRAIL_CONTAINER_SELECTOR: &str = ".trail-container";
pub const TRAIL_IMG_CLASS: &str = "trail-img";

// Bouquet elements
pub const DROP_ZONE_ID: &str = "drop-zone";
pub const DROPPED_FLOWERS_ID: &str = "dropped-flowers";
pub const FINAL_BOUQUET_ID: &str = "final-bouquet";
pub const DROP_TEXT_SELECTOR: &str = ".drop-text";
pub const DRAGGABLE_FLOWER_SELECTOR: &str = ".draggable-flower";
pub const WRAP_UP_SELECTOR: &str = ".wrap-up";
pub const FLOWER_ATTR: &str = "data-flower";

// Bouquet classes
pub const DRAGGING_CLASS: &str = "dragging";
pub const USED_CLASS: &str = "used";
pub const DRAG_OVER_CLASS: &str = "drag-over";
pub const DROPPED_FLOWER_CLASS: &str = "dropped-flower";

// Drag payload
pub const DRAG_FORMAT: &str = "text/plain";
pub const DRAG_EFFECT: &str = "copy";

// Completed drop zone
pub const COMPLETE_BORDER_STYLE: &str = "solid";
pub const COMPLETE_BORDER_COLOR: &str = "#511f29";
pub const COMPLETE_BACKGROUND: &str = "hsl(0, 0%, 7%)";
