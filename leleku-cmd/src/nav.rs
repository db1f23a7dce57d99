//! Redirects in a terminal: remembered and logged, nothing else.

use std::cell::Cell;

use leleku_core::session::{Navigate, Page};
use log::info;

#[derive(Debug, Default)]
pub struct ConsoleNav {
    last: Cell<Option<Page>>,
}

impl ConsoleNav {
    /// The most recent redirect, if any.
    pub fn last(&self) -> Option<Page> {
        self.last.get()
    }
}

impl Navigate for ConsoleNav {
    fn go_to(&self, page: Page) {
        info!("redirect -> {:?}", page);
        self.last.set(Some(page));
    }
}
