// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use alumni_app::Directory;
use alumni_db::Store;
use anyhow::Result;

pub struct DbRuntime<'a> {
    store: &'a Store,
    featured_count: usize,
}

impl<'a> DbRuntime<'a> {
    pub fn new(store: &'a Store, featured_count: usize) -> Self {
        Self {
            store,
            featured_count,
        }
    }
}

impl alumni_tui::AppRuntime for DbRuntime<'_> {
    fn load_directory(&mut self) -> Result<Directory> {
        self.store.load_directory()
    }

    fn featured_count(&self) -> usize {
        self.featured_count
    }
}
