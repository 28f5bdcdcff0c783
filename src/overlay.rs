//! Viewport-clamped positioning for anchored popovers.

/// Gap between the trigger's bottom edge and the popover.
pub const POPOVER_GAP: f64 = 10.0;

/// Popovers never render narrower than this, even under a narrow trigger.
pub const POPOVER_MIN_WIDTH: f64 = 220.0;

/// Minimum distance kept between the popover and every viewport edge.
pub const VIEWPORT_MARGIN: f64 = 12.0;

/// Vertical room reserved so the popover body stays on screen.
pub const POPOVER_MAX_HEIGHT: f64 = 180.0;

/// Viewport-relative bounds of the trigger element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopoverPos {
    pub top: f64,
    pub left: f64,
    pub width: f64,
}

/// Place a popover just below its trigger, clamped so it stays within the
/// viewport horizontally and vertically.
pub fn anchored_position(anchor: AnchorRect, viewport_w: f64, viewport_h: f64) -> PopoverPos {
    let width = anchor.width.max(POPOVER_MIN_WIDTH);

    let max_left = (viewport_w - width - VIEWPORT_MARGIN).max(VIEWPORT_MARGIN);
    let left = anchor.left.clamp(VIEWPORT_MARGIN, max_left);

    let max_top = (viewport_h - POPOVER_MAX_HEIGHT).max(VIEWPORT_MARGIN);
    let top = (anchor.bottom + POPOVER_GAP).clamp(VIEWPORT_MARGIN, max_top);

    PopoverPos { top, left, width }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(top: f64, left: f64, width: f64) -> AnchorRect {
        AnchorRect {
            top,
            bottom: top + 48.0,
            left,
            width,
        }
    }

    #[test]
    fn test_opens_below_trigger_with_gap() {
        let pos = anchored_position(anchor(100.0, 200.0, 260.0), 1280.0, 800.0);
        assert_eq!(pos.top, 148.0 + POPOVER_GAP);
        assert_eq!(pos.left, 200.0);
        assert_eq!(pos.width, 260.0);
    }

    #[test]
    fn test_narrow_trigger_gets_minimum_width() {
        let pos = anchored_position(anchor(100.0, 200.0, 120.0), 1280.0, 800.0);
        assert_eq!(pos.width, POPOVER_MIN_WIDTH);
    }

    #[test]
    fn test_clamped_inside_right_edge() {
        let pos = anchored_position(anchor(100.0, 1200.0, 240.0), 1280.0, 800.0);
        assert_eq!(pos.left, 1280.0 - 240.0 - VIEWPORT_MARGIN);
    }

    #[test]
    fn test_clamped_inside_left_edge() {
        let pos = anchored_position(anchor(100.0, -30.0, 240.0), 1280.0, 800.0);
        assert_eq!(pos.left, VIEWPORT_MARGIN);
    }

    #[test]
    fn test_clamped_above_bottom_edge() {
        let pos = anchored_position(anchor(760.0, 200.0, 240.0), 1280.0, 800.0);
        assert_eq!(pos.top, 800.0 - POPOVER_MAX_HEIGHT);
    }

    #[test]
    fn test_tiny_viewport_pins_to_margin() {
        let pos = anchored_position(anchor(10.0, 10.0, 240.0), 200.0, 150.0);
        assert_eq!(pos.left, VIEWPORT_MARGIN);
        assert_eq!(pos.top, VIEWPORT_MARGIN);
    }
}
