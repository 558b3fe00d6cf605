// DOM hooks and frame-loop tuning for the web frontend. Kept free of
// wasm-only imports so host tests can include it directly.

// Sections and navigation
pub const SECTION_SELECTOR: &str = "[data-section]";
pub const SECTION_LABEL_ATTR: &str = "data-label";
pub const NAV_DOTS_ID: &str = "nav-dots";
pub const NAV_TARGET_ATTR: &str = "data-nav-target";
pub const NAV_NEXT_SELECTOR: &str = "[data-nav=\"next\"]";
pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";

// Boundary affordances
pub const SCROLL_HINT_UP_ID: &str = "scroll-hint-up";
pub const SCROLL_HINT_DOWN_ID: &str = "scroll-hint-down";

// Mobile menu
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const MOBILE_MENU_TOGGLE_ID: &str = "mobile-menu-toggle";

// Canvases
pub const PARTICLES_ATTR: &str = "data-particles";
pub const THREADS_ATTR: &str = "data-threads";
pub const AMPLITUDE_ATTR: &str = "data-amplitude";
pub const COLOR_ATTR: &str = "data-color";
pub const CANVAS_SELECTOR: &str = "canvas[data-particles], canvas[data-threads]";

// Cursor follower
pub const CURSOR_DOT_ID: &str = "cursor-dot";
pub const CURSOR_RING_ID: &str = "cursor-border";
pub const CURSOR_LINK_SELECTOR: &str = "a, button, [role=\"button\"]";
pub const CURSOR_RING_OPACITY: f32 = 0.3;

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_STATUS_ID: &str = "contact-status";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const CONTACT_SUCCESS_TEXT: &str = "Thanks! Your message has been sent.";
pub const CONTACT_SENDING_TEXT: &str = "Sending...";
pub const CONTACT_SEND_TEXT: &str = "Send Message";

// Project browser
pub const PROJECT_CARD_SELECTOR: &str = "[data-project]";
pub const PROJECT_CATEGORY_ATTR: &str = "data-category";
pub const PROJECT_FILTER_ATTR: &str = "data-project-filter";
pub const PROJECT_PAGES_ID: &str = "project-pages";
pub const PROJECT_PAGE_ATTR: &str = "data-page";
pub const PROJECT_STEP_ATTR: &str = "data-page-step";

// Gallery
pub const GALLERY_TAB_ATTR: &str = "data-gallery-tab";
pub const GALLERY_IMAGE_SELECTOR: &str = "[data-gallery-image]";
pub const GALLERY_CATEGORY_ATTR: &str = "data-gallery-category";
pub const GALLERY_GROUP_SELECTOR: &str = "[data-gallery-group]";
pub const GALLERY_TITLE_ATTR: &str = "data-title";
pub const GALLERY_CAPTION_ATTR: &str = "data-caption";
pub const GALLERY_CLOSE_SELECTOR: &str = "[data-gallery-close]";
pub const LIGHTBOX_ID: &str = "gallery-lightbox";
pub const LIGHTBOX_IMAGE_ID: &str = "gallery-lightbox-image";
pub const LIGHTBOX_TITLE_ID: &str = "gallery-lightbox-title";
pub const LIGHTBOX_CAPTION_ID: &str = "gallery-lightbox-caption";

// Spotlight cards
pub const SPOTLIGHT_ATTR: &str = "data-spotlight";
pub const SPOTLIGHT_SELECTOR: &str = "[data-spotlight]";

// Frame loop
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches
pub const GLOW_BLUR_PX: f64 = 20.0;
pub const CORE_SIZE_RATIO: f64 = 0.5; // bright core radius relative to the halo
pub const CORE_ALPHA_BOOST: f64 = 0.2;
pub const LINK_WIDTH_PX: f64 = 0.5;
pub const VIGNETTE_RADIUS_RATIO: f64 = 1.0 / 1.5; // of the canvas width
pub const VIGNETTE_EDGE_ALPHA: f64 = 0.2;
