// Host-side tests for the trail lifecycle manager.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod bloom {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod trail {
        include!("../src/core/trail.rs");
    }
}

use bloom::constants::*;
use bloom::trail::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

struct FakeSurface {
    bounds: Rect,
    refuse: bool,
    next: u32,
    placed: Vec<Spawn>,
    retired: Vec<u32>,
}

impl FakeSurface {
    fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            refuse: false,
            next: 0,
            placed: Vec::new(),
            retired: Vec::new(),
        }
    }
}

impl TrailSurface for FakeSurface {
    type Handle = u32;

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn place(&mut self, spawn: &Spawn, _config: &TrailConfig) -> Option<u32> {
        if self.refuse {
            return None;
        }
        self.placed.push(*spawn);
        self.next += 1;
        Some(self.next)
    }

    fn retire(&mut self, item: &TrailItem<u32>, _config: &TrailConfig) {
        self.retired.push(item.handle);
    }
}

fn bounds() -> Rect {
    Rect::new(50.0, 20.0, 850.0, 620.0)
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn seeded_manager(config: TrailConfig, pos: Vec2) -> TrailManager<u32> {
    let mut m = TrailManager::new(config);
    assert!(m.seed_initial(pos, bounds()));
    m
}

#[test]
fn rect_contains_is_edge_inclusive() {
    let r = bounds();
    assert!(r.contains(Vec2::new(50.0, 20.0)));
    assert!(r.contains(Vec2::new(850.0, 620.0)));
    assert!(r.contains(Vec2::new(400.0, 300.0)));
    assert!(!r.contains(Vec2::new(49.9, 300.0)));
    assert!(!r.contains(Vec2::new(400.0, 620.1)));
}

#[test]
fn initial_capture_fires_once() {
    let mut m: TrailManager<u32> = TrailManager::new(TrailConfig::default());
    assert!(m.seed_initial(Vec2::new(100.0, 100.0), bounds()));
    assert!(m.pointer().in_container);
    assert_eq!(m.pointer().last, Vec2::new(100.0, 100.0));

    assert!(!m.seed_initial(Vec2::new(5.0, 5.0), bounds()));
    assert_eq!(m.pointer().pos, Vec2::new(100.0, 100.0));
    assert!(m.pointer().in_container);
}

#[test]
fn spawn_suppressed_outside_container_even_while_moving() {
    let mut surface = FakeSurface::new(bounds());
    let mut rng = rng();
    let mut m = seeded_manager(TrailConfig::default(), Vec2::new(100.0, 100.0));

    // Start moving inside, then leave; "moving" stays set until the debounce fires.
    assert!(m.pointer_moved(Vec2::new(120.0, 100.0), bounds()));
    assert!(!m.pointer_moved(Vec2::new(900.0, 700.0), bounds()));
    assert!(m.pointer().moving);
    assert!(!m.pointer().in_container);

    for i in 0..20 {
        m.frame(1000.0 + i as f64 * 16.0, &mut surface, &mut rng);
    }
    m.motion_settled();
    for i in 0..20 {
        m.frame(2000.0 + i as f64 * 400.0, &mut surface, &mut rng);
    }
    assert!(surface.placed.is_empty());
    assert!(m.is_empty());
}

#[test]
fn idle_spawns_at_most_once_per_interval() {
    let mut surface = FakeSurface::new(bounds());
    let mut rng = rng();
    let mut m = seeded_manager(TrailConfig::default(), Vec2::new(100.0, 100.0));

    assert!(m.spawn_tick(1000.0, &mut surface, &mut rng));
    assert!(!m.spawn_tick(1100.0, &mut surface, &mut rng));
    assert!(!m.spawn_tick(1299.0, &mut surface, &mut rng));
    assert!(m.spawn_tick(1300.0, &mut surface, &mut rng));
    assert_eq!(surface.placed.len(), 2);

    // Offset is relative to the container's top-left corner.
    assert_eq!(surface.placed[0].offset, Vec2::new(50.0, 80.0));
}

#[test]
fn motion_spawn_needs_displacement_beyond_threshold() {
    let mut surface = FakeSurface::new(bounds());
    let mut rng = rng();
    let mut m = seeded_manager(TrailConfig::default(), Vec2::new(100.0, 100.0));

    m.pointer_moved(Vec2::new(150.0, 100.0), bounds());
    assert!(!m.spawn_tick(1000.0, &mut surface, &mut rng));

    // Exactly the threshold is not enough.
    m.pointer_moved(Vec2::new(200.0, 100.0), bounds());
    assert!(!m.spawn_tick(1016.0, &mut surface, &mut rng));

    m.pointer_moved(Vec2::new(201.0, 100.0), bounds());
    assert!(m.spawn_tick(1032.0, &mut surface, &mut rng));
    assert_eq!(m.pointer().last, Vec2::new(201.0, 100.0));

    // Reference point moved with the spawn.
    assert!(!m.spawn_tick(1048.0, &mut surface, &mut rng));
    assert_eq!(surface.placed.len(), 1);
}

#[test]
fn idle_spawning_resumes_after_motion_settles() {
    let mut surface = FakeSurface::new(bounds());
    let mut rng = rng();
    let mut m = seeded_manager(TrailConfig::default(), Vec2::new(100.0, 100.0));

    m.pointer_moved(Vec2::new(110.0, 100.0), bounds());
    assert!(!m.spawn_tick(1000.0, &mut surface, &mut rng));
    m.motion_settled();
    assert!(m.spawn_tick(1016.0, &mut surface, &mut rng));
}

#[test]
fn expiry_is_monotonic_across_spawns() {
    let mut surface = FakeSurface::new(bounds());
    let mut rng = rng();
    let mut m = seeded_manager(TrailConfig::default(), Vec2::new(100.0, 100.0));

    let mut now = 1000.0;
    for step in 0..40 {
        let x = 100.0 + (step as f32 + 1.0) * 101.0 % 700.0;
        m.pointer_moved(Vec2::new(x, 300.0), bounds());
        m.spawn_tick(now, &mut surface, &mut rng);
        if step % 3 == 0 {
            m.motion_settled();
            m.spawn_tick(now + 8.0, &mut surface, &mut rng);
        }
        now += 16.0;
    }

    assert!(m.len() > 1);
    let expiries: Vec<f64> = m.items().map(|i| i.expires_at_ms).collect();
    for pair in expiries.windows(2) {
        assert!(pair[1] >= pair[0], "expiry went backwards: {:?}", pair);
    }
}

#[test]
fn spawn_expiry_is_now_plus_lifespan() {
    let mut surface = FakeSurface::new(bounds());
    let mut rng = rng();
    let mut m = seeded_manager(TrailConfig::default(), Vec2::new(100.0, 100.0));

    m.spawn_tick(1234.0, &mut surface, &mut rng);
    let item = m.items().next().expect("one item");
    assert_eq!(item.expires_at_ms, 1234.0 + IMAGE_LIFESPAN_MS);
    assert_eq!(item.rotation_deg, surface.placed[0].rotation_deg);
}

#[test]
fn nothing_removed_before_expiry() {
    let mut surface = FakeSurface::new(bounds());
    let mut rng = rng();
    let mut m = seeded_manager(TrailConfig::default(), Vec2::new(100.0, 100.0));

    m.spawn_tick(1000.0, &mut surface, &mut rng);
    assert!(!m.removal_tick(1749.0, &mut surface));
    assert_eq!(m.len(), 1);
    assert!(m.removal_tick(1750.0, &mut surface));
    assert!(m.is_empty());
    assert_eq!(surface.retired, vec![1]);
}

#[test]
fn removal_is_one_per_frame_and_rate_limited() {
    let config = TrailConfig {
        idle_cursor_interval_ms: 0.0,
        ..TrailConfig::default()
    };
    let mut surface = FakeSurface::new(bounds());
    let mut rng = rng();
    let mut m = seeded_manager(config, Vec2::new(100.0, 100.0));

    for t in [1000.0, 1001.0, 1002.0] {
        assert!(m.spawn_tick(t, &mut surface, &mut rng));
    }
    assert_eq!(m.len(), 3);

    // All three are expired, only the head goes.
    assert!(m.removal_tick(5000.0, &mut surface));
    assert_eq!(m.len(), 2);
    assert!(!m.removal_tick(5001.0, &mut surface));
    assert!(!m.removal_tick(5049.0, &mut surface));
    assert!(m.removal_tick(5050.0, &mut surface));
    assert_eq!(m.len(), 1);

    // Oldest first.
    assert_eq!(surface.retired, vec![1, 2]);
}

#[test]
fn frame_removes_at_most_one_item() {
    let config = TrailConfig {
        idle_cursor_interval_ms: 0.0,
        ..TrailConfig::default()
    };
    let mut surface = FakeSurface::new(bounds());
    let mut rng = rng();
    let mut m = seeded_manager(config, Vec2::new(100.0, 100.0));
    for t in 0..5 {
        m.spawn_tick(1000.0 + t as f64, &mut surface, &mut rng);
    }
    // Move the cursor out so frames only remove.
    m.pointer_moved(Vec2::new(0.0, 0.0), bounds());

    let before = m.len();
    m.frame(10_000.0, &mut surface, &mut rng);
    assert_eq!(m.len(), before - 1);
}

#[test]
fn rapid_scroll_spawns_once_per_frame() {
    let mut surface = FakeSurface::new(bounds());
    let mut rng = rng();
    let mut m = seeded_manager(TrailConfig::default(), Vec2::new(300.0, 300.0));

    let mut frames_requested = 0;
    assert!(m.scroll_requested(1000.0));
    frames_requested += 1;
    // Faster than both the debounce and the frame rate.
    for t in [1004.0, 1008.0, 1030.0, 1049.0, 1060.0, 1090.0] {
        if m.scroll_requested(t) {
            frames_requested += 1;
        }
    }
    assert_eq!(frames_requested, 1);
    assert!(m.pointer().scroll_ticking);

    assert!(m.scroll_frame(1100.0, &mut surface, &mut rng));
    assert!(!m.pointer().scroll_ticking);
    assert!(!m.pointer().scrolling);
    // A stray frame with no scroll in between does nothing.
    assert!(!m.scroll_frame(1116.0, &mut surface, &mut rng));
    assert_eq!(surface.placed.len(), 1);

    assert!(m.scroll_requested(1200.0));
}

#[test]
fn scroll_spawn_restores_reference_point() {
    let mut surface = FakeSurface::new(bounds());
    let mut rng = rng();
    let mut m = seeded_manager(TrailConfig::default(), Vec2::new(300.0, 300.0));

    assert!(m.scroll_moved(bounds(), &mut rng));
    assert!(m.scroll_requested(1000.0));
    assert!(m.scroll_frame(1016.0, &mut surface, &mut rng));
    assert_eq!(m.pointer().last, m.pointer().pos);
    assert_eq!(surface.placed[0].offset, Vec2::new(250.0, 280.0));
}

#[test]
fn scroll_spawn_suppressed_outside() {
    let mut surface = FakeSurface::new(bounds());
    let mut rng = rng();
    let mut m = seeded_manager(TrailConfig::default(), Vec2::new(10.0, 10.0));

    assert!(m.scroll_requested(1000.0));
    assert!(!m.scroll_frame(1016.0, &mut surface, &mut rng));
    assert!(surface.placed.is_empty());
    assert!(!m.pointer().scroll_ticking);
}

#[test]
fn scroll_counts_as_motion_with_small_jitter() {
    let mut rng = rng();
    let mut m = seeded_manager(TrailConfig::default(), Vec2::new(300.0, 300.0));

    // Jitter accumulates on the reference point until the next spawn resets it.
    for i in 0..50 {
        assert!(m.scroll_moved(bounds(), &mut rng));
        let dx = (m.pointer().last.x - 300.0).abs();
        assert!(dx <= (i + 1) as f32 * SCROLL_JITTER_PX * 0.5);
        assert_eq!(m.pointer().last.y, 300.0);
        m.motion_settled();
    }
    assert!(m.scroll_moved(bounds(), &mut rng));
    assert!(m.pointer().moving);

    let mut outside = seeded_manager(TrailConfig::default(), Vec2::new(0.0, 0.0));
    assert!(!outside.scroll_moved(bounds(), &mut rng));
    assert!(!outside.pointer().moving);
    assert_eq!(outside.pointer().last, Vec2::new(0.0, 0.0));
}

#[test]
fn spawned_images_stay_within_pool_and_rotation_range() {
    let config = TrailConfig {
        idle_cursor_interval_ms: 0.0,
        ..TrailConfig::default()
    };
    let mut surface = FakeSurface::new(bounds());
    let mut rng = rng();
    let mut m = seeded_manager(config, Vec2::new(100.0, 100.0));

    for t in 0..500 {
        m.spawn_tick(1000.0 + t as f64, &mut surface, &mut rng);
    }
    assert_eq!(surface.placed.len(), 500);
    for s in &surface.placed {
        assert!(s.image_index < TRAIL_IMAGES.len());
        assert!(s.rotation_deg >= -MAX_ROTATION_DEG && s.rotation_deg <= MAX_ROTATION_DEG);
    }
    // Uniform pick over 18 images should touch most of the pool.
    let mut seen = [false; 18];
    for s in &surface.placed {
        seen[s.image_index] = true;
    }
    assert!(seen.iter().filter(|s| **s).count() > 12);
}

#[test]
fn refused_placement_queues_nothing() {
    let mut surface = FakeSurface::new(bounds());
    surface.refuse = true;
    let mut rng = rng();
    let mut m = seeded_manager(TrailConfig::default(), Vec2::new(100.0, 100.0));

    assert!(!m.spawn_tick(1000.0, &mut surface, &mut rng));
    assert!(m.is_empty());
}

#[test]
fn transform_and_transition_strings() {
    assert_eq!(
        transform(12.5, 0.0),
        "translate(-50%, -50%) rotate(12.5deg) scale(0)"
    );
    assert_eq!(
        transform(-3.0, 1.0),
        "translate(-50%, -50%) rotate(-3deg) scale(1)"
    );
    assert_eq!(
        transition(IN_DURATION_MS, IN_EASING),
        "transform 750ms cubic-bezier(.07, .5, .5, 1)"
    );
    assert_eq!(
        transition(OUT_DURATION_MS, OUT_EASING),
        "transform 1000ms cubic-bezier(.87, 0, .13, 1)"
    );
}
