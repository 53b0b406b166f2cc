use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub foreground: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    pub card_background: Color32,
    pub card_border: Color32,
    pub shadow: Color32,
    pub h1_size: f32,
    pub h2_size: f32,
    pub body_size: f32,
    pub chrome_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x13, 0x1B, 0x23),
            foreground: Color32::from_rgb(0xD6, 0xDC, 0xE2),
            heading_color: Color32::WHITE,
            accent: Color32::from_rgb(0x32, 0xB8, 0xC6),
            card_background: Color32::from_rgb(0x1F, 0x2A, 0x35),
            card_border: Color32::from_rgb(0x2E, 0x3C, 0x4A),
            shadow: Color32::from_rgba_unmultiplied(0, 0, 0, 90),
            h1_size: 84.0,
            h2_size: 48.0,
            body_size: 34.0,
            chrome_size: 22.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(0xFC, 0xFC, 0xF9),
            foreground: Color32::from_rgb(0x13, 0x34, 0x3B),
            heading_color: Color32::from_rgb(0x13, 0x34, 0x3B),
            accent: Color32::from_rgb(0x21, 0x80, 0x8D),
            card_background: Color32::WHITE,
            card_border: Color32::from_rgb(0xE2, 0xE5, 0xE5),
            shadow: Color32::from_rgba_unmultiplied(0x13, 0x34, 0x3B, 40),
            h1_size: 84.0,
            h2_size: 48.0,
            body_size: 34.0,
            chrome_size: 22.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    /// Apply opacity to a color, keeping any alpha it already has
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        color.gamma_multiply(opacity.clamp(0.0, 1.0))
    }

    pub fn heading_size(&self, level: u8) -> f32 {
        match level {
            1 => self.h1_size,
            2 => self.h2_size,
            _ => self.body_size,
        }
    }
}
