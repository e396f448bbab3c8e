/// Size metrics a theme reports to the widgets it paints.
///
/// All values are in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeMetrics {
    /// Width of a vertical scroll bar (and height of a horizontal one).
    pub scrollbar_width: f64,
    /// Width of a flat single-line border.
    pub border_size: f64,
    /// Width of a 3D border.
    pub border3d_size: f64,
    /// Height of a window caption.
    pub caption_height: f64,
    /// Height of a menu bar item.
    pub menu_height: f64,
    /// Edge length of a check box.
    pub check_box_size: f64,
    /// Corner radius for controls. Zero for square corners.
    pub corner_radius: f64,
    /// Stroke width of the keyboard focus indicator.
    pub focus_width: f64,
}

impl ThemeMetrics {
    /// Metrics of the classic square 3D appearance.
    pub fn classic() -> Self {
        Self {
            scrollbar_width: 16.0,
            border_size: 1.0,
            border3d_size: 2.0,
            caption_height: 19.0,
            menu_height: 19.0,
            check_box_size: 13.0,
            corner_radius: 0.0,
            focus_width: 1.0,
        }
    }

    /// Metrics of the rounded Gtk-family appearances.
    pub fn rounded(corner_radius: f64) -> Self {
        Self {
            scrollbar_width: 15.0,
            border3d_size: 2.0,
            menu_height: 21.0,
            check_box_size: 14.0,
            corner_radius,
            ..Self::classic()
        }
    }

    /// Metrics of the modern visual styles appearance.
    pub fn modern() -> Self {
        Self {
            scrollbar_width: 17.0,
            border_size: 1.0,
            border3d_size: 2.0,
            caption_height: 23.0,
            menu_height: 20.0,
            check_box_size: 13.0,
            corner_radius: 3.0,
            focus_width: 1.0,
        }
    }
}

impl Default for ThemeMetrics {
    fn default() -> Self {
        Self::classic()
    }
}
