use eframe::egui::{
    self,
    Color32,
};

/// Accent palette with a dark and a light variant; the active one follows
/// egui's theme preference.
#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

#[derive(Clone)]
struct Palette {
    red: Color32,
    green: Color32,
    yellow: Color32,
    cyan: Color32,
    comment: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo()
    }
}

impl Theme {
    pub fn tokyo() -> Self {
        Theme {
            dark: Palette {
                red: Color32::from_rgb(0xf7, 0x76, 0x8e),
                green: Color32::from_rgb(0x9e, 0xce, 0x6a),
                yellow: Color32::from_rgb(0xe0, 0xaf, 0x68),
                cyan: Color32::from_rgb(0x7d, 0xcf, 0xff),
                comment: Color32::from_rgb(0x56, 0x5f, 0x89),
            },
            light: Palette {
                red: Color32::from_rgb(0x8c, 0x43, 0x51),
                green: Color32::from_rgb(0x48, 0x5e, 0x30),
                yellow: Color32::from_rgb(0x8f, 0x5e, 0x15),
                cyan: Color32::from_rgb(0x0f, 0x4b, 0x6e),
                comment: Color32::from_rgb(0x96, 0x99, 0xa3),
            },
        }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).red
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).green
    }

    pub fn yellow(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).yellow
    }

    pub fn cyan(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).cyan
    }

    pub fn comment(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).comment
    }
}
