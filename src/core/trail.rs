use glam::Vec2;
use rand::Rng;
use std::collections::VecDeque;

use super::constants::*;

/// Axis-aligned bounding box in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Edges are inclusive.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }
}

/// Runtime view of the tuning constants. `Default` mirrors `constants.rs`.
#[derive(Clone, Debug)]
pub struct TrailConfig {
    pub image_count: usize,
    pub image_lifespan_ms: f64,
    pub removal_delay_ms: f64,
    pub mouse_threshold_px: f32,
    pub scroll_threshold_ms: f64,
    pub idle_cursor_interval_ms: f64,
    pub in_duration_ms: u32,
    pub out_duration_ms: u32,
    pub in_easing: &'static str,
    pub out_easing: &'static str,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            image_count: TRAIL_IMAGES.len(),
            image_lifespan_ms: IMAGE_LIFESPAN_MS,
            removal_delay_ms: REMOVAL_DELAY_MS,
            mouse_threshold_px: MOUSE_THRESHOLD_PX,
            scroll_threshold_ms: SCROLL_THRESHOLD_MS,
            idle_cursor_interval_ms: IDLE_CURSOR_INTERVAL_MS,
            in_duration_ms: IN_DURATION_MS,
            out_duration_ms: OUT_DURATION_MS,
            in_easing: IN_EASING,
            out_easing: OUT_EASING,
        }
    }
}

/// A decided spawn, handed to the surface to materialize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spawn {
    pub image_index: usize,
    pub rotation_deg: f32,
    /// Cursor offset from the container's top-left corner.
    pub offset: Vec2,
}

#[derive(Clone, Debug)]
pub struct TrailItem<H> {
    pub handle: H,
    pub rotation_deg: f32,
    pub expires_at_ms: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PointerState {
    pub pos: Vec2,
    /// Reference point for the motion threshold.
    pub last: Vec2,
    pub moving: bool,
    pub in_container: bool,
    pub last_idle_spawn_ms: f64,
    pub last_removal_ms: f64,
    pub last_scroll_ms: f64,
    pub scrolling: bool,
    pub scroll_ticking: bool,
    pub seeded: bool,
}

impl PointerState {
    #[inline]
    pub fn moved_enough(&self, threshold: f32) -> bool {
        self.pos.distance(self.last) > threshold
    }
}

/// Where trail images become visible. The browser implementation creates and
/// animates `<img>` elements; tests record calls.
pub trait TrailSurface {
    type Handle;

    /// Current bounding box of the trail container.
    fn bounds(&self) -> Rect;

    /// Materialize a spawn. `None` means the element could not be created and
    /// nothing is queued.
    fn place(&mut self, spawn: &Spawn, config: &TrailConfig) -> Option<Self::Handle>;

    /// Start the exit transition and schedule detachment.
    fn retire(&mut self, item: &TrailItem<Self::Handle>, config: &TrailConfig);
}

#[inline]
pub fn transform(rotation_deg: f32, scale: f32) -> String {
    format!("translate(-50%, -50%) rotate({}deg) scale({})", rotation_deg, scale)
}

#[inline]
pub fn transition(duration_ms: u32, easing: &str) -> String {
    format!("transform {}ms {}", duration_ms, easing)
}

/// Owns the pointer state and the oldest-first queue of live trail items.
pub struct TrailManager<H> {
    config: TrailConfig,
    pointer: PointerState,
    queue: VecDeque<TrailItem<H>>,
}

impl<H> TrailManager<H> {
    pub fn new(config: TrailConfig) -> Self {
        Self {
            config,
            pointer: PointerState::default(),
            queue: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &TrailItem<H>> {
        self.queue.iter()
    }

    /// One-shot capture of the first known cursor position. Returns false once
    /// already fired.
    pub fn seed_initial(&mut self, pos: Vec2, bounds: Rect) -> bool {
        if self.pointer.seeded {
            return false;
        }
        self.pointer.seeded = true;
        self.pointer.pos = pos;
        self.pointer.last = pos;
        self.pointer.in_container = bounds.contains(pos);
        true
    }

    /// Records a pointer move. Returns true when the caller should (re)start
    /// the motion debounce timer.
    pub fn pointer_moved(&mut self, pos: Vec2, bounds: Rect) -> bool {
        self.pointer.pos = pos;
        self.pointer.in_container = bounds.contains(pos);
        if self.pointer.in_container {
            self.pointer.moving = true;
        }
        self.pointer.in_container
    }

    pub fn motion_settled(&mut self) {
        self.pointer.moving = false;
    }

    /// Scroll counts as motion at the last known cursor position; the
    /// reference point drifts a little on x. Returns true when the caller
    /// should (re)start the scroll motion timer.
    pub fn scroll_moved<R: Rng + ?Sized>(&mut self, bounds: Rect, rng: &mut R) -> bool {
        self.pointer.in_container = bounds.contains(self.pointer.pos);
        if !self.pointer.in_container {
            return false;
        }
        self.pointer.moving = true;
        let half = SCROLL_JITTER_PX * 0.5;
        self.pointer.last.x += rng.gen_range(-half..half);
        true
    }

    /// Debounce and coalesce scroll events. Returns true when the caller must
    /// request an animation frame that ends in [`TrailManager::scroll_frame`].
    pub fn scroll_requested(&mut self, now_ms: f64) -> bool {
        self.pointer.scrolling = true;
        if now_ms - self.pointer.last_scroll_ms < self.config.scroll_threshold_ms {
            return false;
        }
        self.pointer.last_scroll_ms = now_ms;
        if self.pointer.scroll_ticking {
            return false;
        }
        self.pointer.scroll_ticking = true;
        true
    }

    /// The frame requested by `scroll_requested`. Returns true if an image
    /// was spawned.
    pub fn scroll_frame<S, R>(&mut self, now_ms: f64, surface: &mut S, rng: &mut R) -> bool
    where
        S: TrailSurface<Handle = H>,
        R: Rng + ?Sized,
    {
        let mut spawned = false;
        if self.pointer.scrolling {
            spawned = self.spawn_for_scroll(now_ms, surface, rng);
            self.pointer.scrolling = false;
        }
        self.pointer.scroll_ticking = false;
        spawned
    }

    /// Per-frame work: spawn policy, then removal policy.
    pub fn frame<S, R>(&mut self, now_ms: f64, surface: &mut S, rng: &mut R)
    where
        S: TrailSurface<Handle = H>,
        R: Rng + ?Sized,
    {
        self.spawn_tick(now_ms, surface, rng);
        self.removal_tick(now_ms, surface);
    }

    pub fn spawn_tick<S, R>(&mut self, now_ms: f64, surface: &mut S, rng: &mut R) -> bool
    where
        S: TrailSurface<Handle = H>,
        R: Rng + ?Sized,
    {
        if !self.pointer.in_container {
            return false;
        }

        if self.pointer.moving && self.pointer.moved_enough(self.config.mouse_threshold_px) {
            self.pointer.last = self.pointer.pos;
            return self.spawn(now_ms, surface, rng);
        }

        if !self.pointer.moving
            && now_ms - self.pointer.last_idle_spawn_ms >= self.config.idle_cursor_interval_ms
        {
            self.pointer.last_idle_spawn_ms = now_ms;
            return self.spawn(now_ms, surface, rng);
        }

        false
    }

    /// Retire at most the head of the queue. Returns true if an item was
    /// retired.
    pub fn removal_tick<S>(&mut self, now_ms: f64, surface: &mut S) -> bool
    where
        S: TrailSurface<Handle = H>,
    {
        if now_ms - self.pointer.last_removal_ms < self.config.removal_delay_ms {
            return false;
        }
        let expired = match self.queue.front() {
            Some(head) => now_ms >= head.expires_at_ms,
            None => false,
        };
        if !expired {
            return false;
        }
        let Some(item) = self.queue.pop_front() else {
            return false;
        };
        surface.retire(&item, &self.config);
        self.pointer.last_removal_ms = now_ms;
        true
    }

    fn spawn_for_scroll<S, R>(&mut self, now_ms: f64, surface: &mut S, rng: &mut R) -> bool
    where
        S: TrailSurface<Handle = H>,
        R: Rng + ?Sized,
    {
        if !self.pointer.in_container {
            return false;
        }
        // Perturb the reference point, spawn, then snap it back to the cursor.
        let step = self.config.mouse_threshold_px + SCROLL_PERTURB_MARGIN_PX;
        let sx = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.pointer.last += Vec2::new(step * sx, step * sy);

        let spawned = self.spawn(now_ms, surface, rng);

        self.pointer.last = self.pointer.pos;
        spawned
    }

    fn spawn<S, R>(&mut self, now_ms: f64, surface: &mut S, rng: &mut R) -> bool
    where
        S: TrailSurface<Handle = H>,
        R: Rng + ?Sized,
    {
        if self.config.image_count == 0 {
            return false;
        }
        let spawn = Spawn {
            image_index: rng.gen_range(0..self.config.image_count),
            rotation_deg: rng.gen_range(-MAX_ROTATION_DEG..=MAX_ROTATION_DEG),
            offset: self.pointer.pos - surface.bounds().origin(),
        };
        let Some(handle) = surface.place(&spawn, &self.config) else {
            return false;
        };
        self.queue.push_back(TrailItem {
            handle,
            rotation_deg: spawn.rotation_deg,
            expires_at_ms: now_ms + self.config.image_lifespan_ms,
        });
        true
    }
}
