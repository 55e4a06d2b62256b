use crate::record::Record;

/// The one capability every shelved item shares: it has a title.
pub trait Literature {
    fn title(&self) -> &str;
}

impl Literature for Record {
    fn title(&self) -> &str {
        &self.title
    }
}

/// A magazine: title only, no author or year tracked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Magazine {
    title: String,
}

impl Magazine {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Literature for Magazine {
    fn title(&self) -> &str {
        &self.title
    }
}

/// A comic book: title only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComicBook {
    title: String,
}

impl ComicBook {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Literature for ComicBook {
    fn title(&self) -> &str {
        &self.title
    }
}

/// Titles of a mixed shelf, in shelf order.
pub fn shelf_titles(shelf: &[Box<dyn Literature>]) -> Vec<&str> {
    shelf.iter().map(|item| item.title()).collect()
}
