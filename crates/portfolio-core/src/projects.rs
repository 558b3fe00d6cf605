use crate::constants::PROJECTS_PER_PAGE;
use std::convert::Infallible;
use std::str::FromStr;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    fn accepts(&self, category: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => c == category,
        }
    }
}

impl FromStr for Filter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Filter::All
        } else {
            Filter::Category(s.to_ascii_lowercase())
        })
    }
}

/// Category filter plus 1-based pagination over the project cards.
#[derive(Clone, Debug)]
pub struct ProjectBrowser {
    categories: Vec<String>,
    filter: Filter,
    page: usize,
}

impl ProjectBrowser {
    /// `categories[i]` is the category of card `i`.
    pub fn new(categories: Vec<String>) -> Self {
        Self {
            categories,
            filter: Filter::All,
            page: 1,
        }
    }

    #[inline]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    #[inline]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Changing the filter always returns to the first page.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages().max(1));
    }

    #[inline]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// One page back; stays on the first page.
    pub fn prev(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// One page forward; stays on the last page.
    pub fn next(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn matching(&self) -> Vec<usize> {
        self.categories
            .iter()
            .enumerate()
            .filter(|(_, c)| self.filter.accepts(c))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        self.matching().len().div_ceil(PROJECTS_PER_PAGE)
    }

    /// Card indices shown on the current page.
    pub fn visible(&self) -> Vec<usize> {
        self.matching()
            .into_iter()
            .skip((self.page - 1) * PROJECTS_PER_PAGE)
            .take(PROJECTS_PER_PAGE)
            .collect()
    }
}
