use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
/// Dynamic text component for rendering variable strings in the world.
pub struct DynamicText {
    /// The text content to render.
    pub content: String,
    /// Font key in the [`FontStore`](crate::resources::fontstore::FontStore).
    pub font: &'static str,
    /// Font size in world units.
    pub font_size: f32,
    /// Color of the text.
    pub color: raylib::prelude::Color,
    /// Pivot on the text's centre instead of its top-left corner.
    pub centered: bool,
}

impl DynamicText {
    /// Creates a new DynamicText component.
    pub fn new(
        content: impl Into<String>,
        font: &'static str,
        font_size: f32,
        color: raylib::prelude::Color,
    ) -> Self {
        Self {
            content: content.into(),
            font,
            font_size,
            color,
            centered: false,
        }
    }

    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    /// Updates the text content, skipping the allocation when nothing changed.
    pub fn set_content(&mut self, new_content: &str) {
        if self.content != new_content {
            self.content.clear();
            self.content.push_str(new_content);
        }
    }
}
