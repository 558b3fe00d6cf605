// Shared simulation/interaction tuning constants used by the web frontend.

// Pointer repulsion
pub const REPULSION_RADIUS: f32 = 150.0; // px; no displacement at or beyond
pub const REPULSION_MAX: f32 = 15.0; // px; displacement with the pointer on top of a particle

// Particle seeding
pub const PARTICLE_MIN_SIZE: f32 = 1.0; // default, added to rand * base_size
pub const PARTICLE_ALPHA_MIN: f32 = 0.5;
pub const PARTICLE_ALPHA_SPAN: f32 = 0.5;
pub const AMBIENT_MIN_SIZE: f32 = 0.1;
pub const AMBIENT_ALPHA_MIN: f32 = 0.02;
pub const AMBIENT_ALPHA_SPAN: f32 = 0.2;

// Connection lines
pub const CONNECTION_DISTANCE: f32 = 100.0;
pub const AMBIENT_CONNECTION_DISTANCE: f32 = 80.0;
pub const AMBIENT_CONNECTION_OPACITY: f32 = 0.05;
pub const AMBIENT_CONNECTION_EVERY: u32 = 3;
pub const AMBIENT_VIGNETTE_EVERY: u32 = 5;

// Trail-fade clearing (alpha of the black overlay drawn each frame)
pub const PARTICLE_TRAIL_ALPHA: f32 = 0.2;
pub const INTERACTIVE_TRAIL_ALPHA: f32 = 0.05;
pub const THREAD_TRAIL_ALPHA: f32 = 0.1;

// Threads
pub const THREAD_TIME_STEP: f32 = 0.016; // per frame, not wall clock
pub const THREAD_INFLUENCE_BASE: f32 = 50.0; // px, scaled by the amplitude setting
pub const THREAD_DEFAULT_COUNT: usize = 40;
pub const THREAD_DEFAULT_COLOR: [u8; 3] = [147, 51, 234];

// Pager
pub const SLIDE_EXIT_SEC: f32 = 0.5;
pub const SLIDE_ENTER_SEC: f32 = 0.5;
pub const SCROLL_BOTTOM_SLACK: f64 = 5.0; // px tolerance for "at bottom"

// Contact form
pub const CONTACT_SUBMIT_DELAY_MS: i32 = 1000;

// Cursor follower
pub const CURSOR_EASE: f32 = 0.4;
pub const CURSOR_DOT_OFFSET: f32 = 4.0;
pub const CURSOR_RING_OFFSET: f32 = 16.0;

// Project browser
pub const PROJECTS_PER_PAGE: usize = 3;

// Gallery
pub const GALLERY_DEFAULT_CATEGORY: &str = "events";

// Spotlight cards
pub const SPOTLIGHT_DEFAULT_COLOR: &str = "rgba(147, 51, 234, 0.2)";
