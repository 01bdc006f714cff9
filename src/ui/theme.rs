use crate::display::VisualTag;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub bar_default: Color,
    pub bar_comparing: Color,
    pub bar_swapping: Color,
    pub bar_pivot: Color,
    pub bar_sorted: Color,
}

impl Theme {
    /// Bar color for a visual tag
    pub fn tag_color(&self, tag: VisualTag) -> Color {
        match tag {
            VisualTag::Default => self.bar_default,
            VisualTag::Comparing => self.bar_comparing,
            VisualTag::Swapping => self.bar_swapping,
            VisualTag::Pivot => self.bar_pivot,
            VisualTag::Sorted => self.bar_sorted,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for the bars pane
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for the rest
    status_bg: Color::Rgb(50, 50, 70),
    bar_default: Color::Rgb(59, 130, 246),   // Blue
    bar_comparing: Color::Rgb(245, 158, 11), // Amber
    bar_swapping: Color::Rgb(239, 68, 68),   // Red
    bar_pivot: Color::Rgb(139, 92, 246),     // Violet
    bar_sorted: Color::Rgb(16, 185, 129),    // Emerald
};
