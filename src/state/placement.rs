// Floating map panel placement: anchored next to the clicked pin, kept
// inside the map area.

const OFFSET_X: f64 = 18.0;
const OFFSET_Y: f64 = -12.0;
const EDGE_MARGIN: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
}

/// Computes the panel's top-left corner relative to the map area.
///
/// `pin_left`/`pin_top` are the pin's position relative to the map's own
/// top-left corner. The panel sits 18px right and 12px up from the pin,
/// then is clamped at least 12px from every edge. The far-edge clamp is
/// applied last, so when the panel is wider/taller than the available
/// space the right/bottom constraint wins.
pub fn place_float_panel(
    pin_left: f64,
    pin_top: f64,
    map_width: f64,
    map_height: f64,
    panel_width: f64,
    panel_height: f64,
) -> Placement {
    let mut left = pin_left + OFFSET_X;
    let mut top = pin_top + OFFSET_Y;

    let max_left = map_width - panel_width - EDGE_MARGIN;
    let max_top = map_height - panel_height - EDGE_MARGIN;

    if left < EDGE_MARGIN {
        left = EDGE_MARGIN;
    }
    if top < EDGE_MARGIN {
        top = EDGE_MARGIN;
    }
    if left > max_left {
        left = max_left;
    }
    if top > max_top {
        top = max_top;
    }

    Placement { left, top }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_from_pin_when_room() {
        let p = place_float_panel(100.0, 100.0, 800.0, 600.0, 220.0, 140.0);
        assert_eq!(p, Placement { left: 118.0, top: 88.0 });
    }

    #[test]
    fn clamps_to_top_left_margin() {
        let p = place_float_panel(-40.0, 2.0, 800.0, 600.0, 220.0, 140.0);
        assert_eq!(p.left, 12.0);
        assert_eq!(p.top, 12.0);
    }

    #[test]
    fn clamps_to_bottom_right_margin() {
        let p = place_float_panel(780.0, 590.0, 800.0, 600.0, 220.0, 140.0);
        assert_eq!(p.left, 800.0 - 220.0 - 12.0);
        assert_eq!(p.top, 600.0 - 140.0 - 12.0);
    }

    #[test]
    fn far_edge_wins_when_panel_larger_than_map() {
        // max_left goes negative; the final clamp pulls the panel past the
        // 12px minimum rather than letting it overflow the right edge.
        let p = place_float_panel(0.0, 0.0, 200.0, 200.0, 300.0, 100.0);
        assert_eq!(p.left, 200.0 - 300.0 - 12.0);
        assert_eq!(p.top, 12.0);
    }
}
