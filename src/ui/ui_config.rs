use eframe::egui::{Color32, Frame, Margin, Stroke};

/// UI Colors for consistent theming. Palette carried over from the app's
/// original green-table look.
#[derive(Clone, Copy)]
pub struct UiColors {
    pub background: Color32,
    pub panel: Color32,
    pub label: Color32,
    pub heading: Color32,
    pub save_button: Color32,
    pub delete_button: Color32,
    pub add_button: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        background: Color32::from_rgb(46, 64, 63),    // 0x2E403F
        panel: Color32::from_rgb(45, 96, 83),         // dark green 0x2D6053
        label: Color32::from_rgb(88, 155, 133),       // light green 0x589B85
        heading: Color32::WHITE,
        save_button: Color32::from_rgb(45, 96, 83),   // dark green
        delete_button: Color32::from_rgb(155, 88, 88), // dark red 0x9B5858
        add_button: Color32::GRAY,
    },
};

impl UiConfig {
    /// Frame for the roster list
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.background,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// Frame for the bottom Add/Sort bar (tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.background,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 8),
            ..Default::default()
        }
    }
}
