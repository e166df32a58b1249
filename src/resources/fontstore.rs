//! Loaded fonts, keyed like the sprite catalogue.
//!
//! Raylib fonts must stay on the main thread, so the store is inserted as a
//! non-send resource and read with `NonSend<FontStore>`. Text whose font key
//! is missing falls back to raylib's built-in font when drawn.

use raylib::prelude::Font;
use rustc_hash::FxHashMap;

#[derive(Default)]
pub struct FontStore {
    fonts: FxHashMap<&'static str, Font>,
}

impl FontStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &'static str, font: Font) {
        self.fonts.insert(key, font);
    }

    pub fn get(&self, key: &str) -> Option<&Font> {
        self.fonts.get(key)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
