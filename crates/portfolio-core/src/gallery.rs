//! Gallery tabs and the lightbox over a single image.

use crate::constants::GALLERY_DEFAULT_CATEGORY;

/// Active category tab plus the image open in the lightbox, if any.
#[derive(Clone, Debug)]
pub struct GalleryState {
    /// `categories[i]` is the category of image `i`.
    categories: Vec<String>,
    active: String,
    selected: Option<usize>,
}

impl GalleryState {
    /// Starts on the default tab, or on the first image's category when no
    /// image belongs to the default one.
    pub fn new(categories: Vec<String>) -> Self {
        let active = if categories.iter().any(|c| c == GALLERY_DEFAULT_CATEGORY) {
            GALLERY_DEFAULT_CATEGORY.to_string()
        } else {
            categories
                .first()
                .cloned()
                .unwrap_or_else(|| GALLERY_DEFAULT_CATEGORY.to_string())
        };
        Self {
            categories,
            active,
            selected: None,
        }
    }

    #[inline]
    pub fn category(&self) -> &str {
        &self.active
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Switching tabs closes the lightbox.
    pub fn set_category(&mut self, category: &str) {
        let category = category.trim().to_ascii_lowercase();
        if category.is_empty() {
            return;
        }
        self.active = category;
        self.selected = None;
    }

    /// Image indices on the active tab.
    pub fn visible(&self) -> Vec<usize> {
        self.categories
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == self.active)
            .map(|(i, _)| i)
            .collect()
    }

    /// Open the lightbox on image `index`; images on other tabs are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if self.categories.get(index) != Some(&self.active) {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Returns whether the lightbox was open.
    pub fn close(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Escape closes the lightbox. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }
}
