//! Responsive layout.
//!
//! `LayoutContext` wraps the frame size and answers the sizing questions the
//! screens ask: which device class the surface resembles, whether it is in
//! landscape, and how much room there is for lists.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::environment::Orientation;

/// Width breakpoints, in columns.
pub mod breakpoints {
    /// Below this the surface is treated like a phone
    pub const TABLET_WIDTH: u16 = 60;
    /// Below this the surface is treated like a tablet
    pub const DESKTOP_WIDTH: u16 = 100;
    /// Below this many rows, chrome is trimmed
    pub const SHORT_HEIGHT: u16 = 20;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl Default for LayoutContext {
    /// Standard 80x24 terminal.
    fn default() -> Self {
        Self::new(80, 24)
    }
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    pub fn device_class(&self) -> DeviceClass {
        if self.width < breakpoints::TABLET_WIDTH {
            DeviceClass::Mobile
        } else if self.width < breakpoints::DESKTOP_WIDTH {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_size(self.width, self.height)
    }

    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SHORT_HEIGHT
    }

    /// Height of the header bar.
    pub fn header_height(&self) -> u16 {
        if self.is_short() {
            1
        } else {
            3
        }
    }

    /// Detail views put their two panes side by side only in landscape with
    /// room to spare.
    pub fn split_detail(&self) -> bool {
        self.orientation().is_landscape() && self.device_class() != DeviceClass::Mobile
    }

    /// Rows per home tile.
    pub fn tile_height(&self) -> u16 {
        match self.device_class() {
            DeviceClass::Mobile => 3,
            _ if self.is_short() => 3,
            _ => 4,
        }
    }

    /// Truncation width for titles in lists.
    pub fn max_title_length(&self) -> usize {
        match self.device_class() {
            DeviceClass::Mobile => 24,
            DeviceClass::Tablet => 40,
            DeviceClass::Desktop => 64,
        }
    }

    /// Split `area` into header, body and footer.
    pub fn chrome(&self, area: Rect) -> (Rect, Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.header_height()),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);
        (chunks[0], chunks[1], chunks[2])
    }

    /// Two panes: side by side when [`split_detail`](Self::split_detail),
    /// otherwise stacked.
    pub fn detail_panes(&self, area: Rect) -> (Rect, Rect) {
        let (direction, constraints) = if self.split_detail() {
            (
                Direction::Horizontal,
                [Constraint::Percentage(55), Constraint::Percentage(45)],
            )
        } else {
            (
                Direction::Vertical,
                [Constraint::Percentage(60), Constraint::Percentage(40)],
            )
        };
        let chunks = Layout::default()
            .direction(direction)
            .constraints(constraints)
            .split(area);
        (chunks[0], chunks[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_class_breakpoints() {
        assert_eq!(LayoutContext::new(40, 40).device_class(), DeviceClass::Mobile);
        assert_eq!(LayoutContext::new(59, 40).device_class(), DeviceClass::Mobile);
        assert_eq!(LayoutContext::new(60, 40).device_class(), DeviceClass::Tablet);
        assert_eq!(LayoutContext::new(100, 40).device_class(), DeviceClass::Desktop);
    }

    #[test]
    fn test_orientation_matches_environment_rule() {
        assert_eq!(LayoutContext::new(120, 40).orientation(), Orientation::Landscape);
        assert_eq!(LayoutContext::new(50, 40).orientation(), Orientation::Portrait);
    }

    #[test]
    fn test_split_detail_needs_landscape_and_width() {
        assert!(LayoutContext::new(120, 40).split_detail());
        assert!(!LayoutContext::new(70, 40).split_detail());
        assert!(!LayoutContext::new(50, 20).split_detail());
    }

    #[test]
    fn test_chrome_fills_area() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = LayoutContext::from_rect(area).chrome(area);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 1);
        assert_eq!(header.height + body.height + footer.height, 24);
    }

    #[test]
    fn test_short_terminal_trims_header() {
        let ctx = LayoutContext::new(80, 12);
        assert!(ctx.is_short());
        assert_eq!(ctx.header_height(), 1);
    }
}
