//! Tooltip placement for renderers that show cell explanations on hover.
//!
//! The tooltip sits up and to the right of the pointer. It flips to the left
//! when it would cross the right edge of the viewport, and below the pointer
//! when it would cross the top edge.

/// Gap between pointer and tooltip, in pixels.
pub const TOOLTIP_OFFSET: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Top-left corner of the tooltip for a pointer at `pointer`.
pub fn place_tooltip(pointer: Point, tooltip: Size, viewport: Size) -> Point {
    let mut x = pointer.x + TOOLTIP_OFFSET;
    let mut y = pointer.y - tooltip.height - TOOLTIP_OFFSET;

    if x + tooltip.width > viewport.width {
        x = pointer.x - tooltip.width - TOOLTIP_OFFSET;
    }
    if y < 0.0 {
        y = pointer.y + TOOLTIP_OFFSET;
    }

    Point { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size {
        width: 800.0,
        height: 600.0,
    };
    const TOOLTIP: Size = Size {
        width: 200.0,
        height: 40.0,
    };

    #[test]
    fn default_position_is_above_right() {
        let placed = place_tooltip(Point { x: 100.0, y: 300.0 }, TOOLTIP, VIEWPORT);
        assert_eq!(placed, Point { x: 110.0, y: 250.0 });
    }

    #[test]
    fn flips_left_near_right_edge() {
        let placed = place_tooltip(Point { x: 700.0, y: 300.0 }, TOOLTIP, VIEWPORT);
        assert_eq!(placed, Point { x: 490.0, y: 250.0 });
    }

    #[test]
    fn flips_below_near_top_edge() {
        let placed = place_tooltip(Point { x: 100.0, y: 20.0 }, TOOLTIP, VIEWPORT);
        assert_eq!(placed, Point { x: 110.0, y: 30.0 });
    }
}
