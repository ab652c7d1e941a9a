use alloc::format;
use alloc::string::String;

use crate::*;

/// Id of the scrollable element holding the clue list.
pub const SCROLL_AREA_ID: &str = "cluegrid-clues-scrollable-area";

pub fn clue_element_id(index: ClueIndex) -> String {
    format!("cluegrid-clue-number-{index}")
}

/// Vertical extent of an element in page coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub y: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(y: f64, height: f64) -> Self {
        Self { y, height }
    }

    pub fn bottom(self) -> f64 {
        self.y + self.height
    }
}

/// New scroll offset of the clue list so that `clue` is fully visible in
/// `area`. `viewport_y` is the current offset.
pub fn scroll_offset(viewport_y: f64, clue: Rect, area: Rect) -> f64 {
    if clue.y < area.y {
        viewport_y + clue.y - area.y
    } else if clue.bottom() > area.bottom() {
        viewport_y + clue.bottom() - area.bottom()
    } else {
        viewport_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect::new(100.0, 300.0);

    #[test]
    fn visible_clue_keeps_offset() {
        assert_eq!(scroll_offset(50.0, Rect::new(150.0, 20.0), AREA), 50.0);
    }

    #[test]
    fn clue_above_aligns_top() {
        assert_eq!(scroll_offset(50.0, Rect::new(70.0, 20.0), AREA), 20.0);
    }

    #[test]
    fn clue_below_aligns_bottom() {
        assert_eq!(scroll_offset(50.0, Rect::new(390.0, 20.0), AREA), 60.0);
    }

    #[test]
    fn element_ids_carry_index() {
        assert_eq!(clue_element_id(12), "cluegrid-clue-number-12");
    }
}
