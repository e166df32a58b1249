//! Sprite catalogue.
//!
//! Every image the game draws is described once here: the file it is loaded
//! from, the size of one frame, the frame rate for sprite sheets, and a solid
//! colour used when the file is missing. Spawning code only refers to the
//! catalogue keys, so the game stays playable without any asset on disk.

use raylib::prelude::{Color, Vector2};

/// Static description of one sprite or sprite sheet.
#[derive(Debug, Clone, Copy)]
pub struct SpriteDef {
    pub key: &'static str,
    pub file: &'static str,
    /// Top-left corner of the first frame inside the image.
    pub source_offset: (f32, f32),
    pub frame_size: (f32, f32),
    /// Milliseconds per frame for horizontal sprite sheets.
    pub frame_ms: Option<f32>,
    pub fallback: Color,
}

impl SpriteDef {
    pub fn size(&self) -> Vector2 {
        Vector2::new(self.frame_size.0, self.frame_size.1)
    }

    pub fn offset(&self) -> Vector2 {
        Vector2::new(self.source_offset.0, self.source_offset.1)
    }
}

const fn def(
    key: &'static str,
    file: &'static str,
    frame_size: (f32, f32),
    frame_ms: Option<f32>,
    fallback: Color,
) -> SpriteDef {
    SpriteDef {
        key,
        file,
        source_offset: (0.0, 0.0),
        frame_size,
        frame_ms,
        fallback,
    }
}

pub const WATER_BACK: SpriteDef = def(
    "water_back",
    "bg.png",
    (1400.0, 900.0),
    None,
    Color::new(18, 52, 96, 255),
);
pub const WATER_FRONT: SpriteDef = def(
    "water_front",
    "fasterbg.png",
    (1400.0, 900.0),
    None,
    Color::new(90, 160, 220, 40),
);
pub const HAND: SpriteDef = def(
    "hand",
    "hand.png",
    (1280.0, 720.0),
    None,
    Color::new(0, 0, 0, 0),
);
pub const SOAP: SpriteDef = def(
    "soap",
    "soapthis.png",
    (138.0, 364.0),
    Some(60.0),
    Color::new(236, 240, 255, 255),
);
pub const VIRUS: SpriteDef = def(
    "virus",
    "coronavirus.png",
    (90.0, 109.0),
    Some(60.0),
    Color::new(90, 200, 90, 255),
);
pub const MINI_SOAP: SpriteDef = def(
    "mini_soap",
    "bonus1.png",
    (100.0, 100.0),
    Some(60.0),
    Color::new(200, 225, 255, 255),
);
pub const OIL: SpriteDef = def(
    "oil",
    "oil.png",
    (96.0, 96.0),
    None,
    Color::new(70, 55, 30, 255),
);
pub const LIQUID_SOAP: SpriteDef = def(
    "liquid_soap",
    "liquidsoap.png",
    (64.0, 96.0),
    None,
    Color::new(110, 200, 255, 255),
);
pub const ANTIVIRUS: SpriteDef = def(
    "antivirus",
    "antiv.png",
    (64.0, 96.0),
    None,
    Color::new(255, 90, 90, 255),
);
pub const SOAP_METER: SpriteDef = SpriteDef {
    key: "soap_meter",
    file: "sopaometer.png",
    source_offset: (10.0, 0.0),
    frame_size: (285.0, 24.0),
    frame_ms: None,
    fallback: Color::new(120, 220, 255, 255),
};

pub static PEOPLE: [SpriteDef; 6] = [
    def("person1", "person1.png", (6.0, 10.0), None, Color::new(250, 200, 160, 255)),
    def("person2", "person2.png", (6.0, 10.0), None, Color::new(200, 150, 110, 255)),
    def("person3", "person3.png", (6.0, 10.0), None, Color::new(150, 100, 70, 255)),
    def("person4", "person4.png", (6.0, 10.0), None, Color::new(240, 220, 120, 255)),
    def("person5", "person5.png", (6.0, 10.0), None, Color::new(120, 180, 240, 255)),
    def("person6", "person6.png", (6.0, 10.0), None, Color::new(240, 120, 180, 255)),
];

/// Font key and file of the UI font.
pub const UI_FONT: (&str, &str) = ("pixeled", "Pixeled_0.ttf");

/// All sprites, for bulk loading.
pub fn all_sprites() -> impl Iterator<Item = &'static SpriteDef> {
    static SINGLE: [SpriteDef; 10] = [
        WATER_BACK,
        WATER_FRONT,
        HAND,
        SOAP,
        VIRUS,
        MINI_SOAP,
        OIL,
        LIQUID_SOAP,
        ANTIVIRUS,
        SOAP_METER,
    ];
    SINGLE.iter().chain(PEOPLE.iter())
}
