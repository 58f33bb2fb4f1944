use ratatui::style::Color;

use super::Theme;

impl Theme {
    /// White page, near-black text, blue to purple accents, gray-200 track
    pub fn light() -> Self {
        Self {
            name: "light",
            bg_color: Color::Rgb(255, 255, 255),
            text_color: Color::Rgb(23, 23, 23),
            dim_color: Color::Rgb(200, 200, 200),
            accent_color: Color::Rgb(59, 130, 246),
            emoji_color: Color::Rgb(234, 179, 8),
            progress_color: Color::Rgb(147, 51, 234),
            progress_track_color: Color::Rgb(229, 231, 235),
            nav_bg_color: Color::Rgb(250, 250, 250),
            nav_scrolled_bg_color: Color::Rgb(243, 244, 246),
            status_bar_bg_color: Color::Rgb(243, 244, 246),
            scrollbar_bg_color: Color::Rgb(229, 231, 235),
        }
    }

    /// Same accents on a gray-900 page
    pub fn dark() -> Self {
        Self {
            name: "dark",
            bg_color: Color::Rgb(17, 24, 39),
            text_color: Color::Rgb(243, 244, 246),
            dim_color: Color::Rgb(75, 85, 99),
            accent_color: Color::Rgb(59, 130, 246),
            emoji_color: Color::Rgb(234, 179, 8),
            progress_color: Color::Rgb(147, 51, 234),
            progress_track_color: Color::Rgb(55, 65, 81),
            nav_bg_color: Color::Rgb(17, 24, 39),
            nav_scrolled_bg_color: Color::Rgb(31, 41, 55),
            status_bar_bg_color: Color::Rgb(31, 41, 55),
            scrollbar_bg_color: Color::Rgb(55, 65, 81),
        }
    }
}
