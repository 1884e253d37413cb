//! Print-layout lifecycle.
//!
//! The layout is built immediately before a print pass and torn down
//! immediately after, so duplicated sheet state never outlives the print.
//! Both operations are idempotent.

use crate::impose::{PrintLayout, impose};
use crate::page::Page;
use crate::types::Result;

#[derive(Debug, Default)]
pub struct PrintSession {
    layout: Option<PrintLayout>,
}

impl PrintSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the layout for the current pages, replacing any previous one.
    pub fn build(&mut self, pages: &[Page], capacity: usize) -> Result<&PrintLayout> {
        let layout = impose(pages, capacity)?;
        self.layout = Some(layout);
        Ok(self.layout.as_ref().expect("layout just built"))
    }

    pub fn layout(&self) -> Option<&PrintLayout> {
        self.layout.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.layout.is_some()
    }

    /// Drop the built layout. A no-op when nothing was built.
    pub fn teardown(&mut self) {
        self.layout = None;
    }
}
