//! Linear motion with wrap-around playfield edges
//!
//! Every moving body advances by its velocity once per tick. A coordinate that
//! falls below `-margin` reappears at the far edge; one past the far edge
//! reappears at zero. Axes are handled independently.

use glam::Vec2;

use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// Wrap a single coordinate into `[-margin, extent]`
#[inline]
pub fn wrap_axis(value: f32, margin: f32, extent: f32) -> f32 {
    if value < -margin {
        extent
    } else if value > extent {
        0.0
    } else {
        value
    }
}

/// Wrap a position into the playfield using `margin` on the near edges
#[inline]
pub fn wrap(pos: Vec2, margin: f32) -> Vec2 {
    Vec2::new(
        wrap_axis(pos.x, margin, PLAYFIELD_WIDTH),
        wrap_axis(pos.y, margin, PLAYFIELD_HEIGHT),
    )
}

/// Advance `pos` by `vel` and wrap the result
#[inline]
pub fn advance(pos: Vec2, vel: Vec2, margin: f32) -> Vec2 {
    wrap(pos + vel, margin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_advance_inside_playfield() {
        let p = advance(Vec2::new(100.0, 100.0), Vec2::new(3.0, -2.0), 8.0);
        assert_eq!(p, Vec2::new(103.0, 98.0));
    }

    #[test]
    fn test_wrap_right_edge_to_zero() {
        let p = advance(Vec2::new(799.0, 300.0), Vec2::new(2.0, 0.0), 8.0);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 300.0);
    }

    #[test]
    fn test_wrap_left_edge_to_width() {
        let p = advance(Vec2::new(-7.0, 300.0), Vec2::new(-2.0, 0.0), 8.0);
        assert_eq!(p.x, PLAYFIELD_WIDTH);
    }

    #[test]
    fn test_margin_zone_is_kept() {
        // Inside [-margin, 0) the body is still partly visible and stays put
        let p = advance(Vec2::new(1.0, 1.0), Vec2::new(-5.0, -5.0), 8.0);
        assert_eq!(p, Vec2::new(-4.0, -4.0));
    }

    #[test]
    fn test_vertical_wrap() {
        assert_eq!(wrap(Vec2::new(10.0, 601.0), 10.0).y, 0.0);
        assert_eq!(wrap(Vec2::new(10.0, -11.0), 10.0).y, PLAYFIELD_HEIGHT);
    }

    proptest! {
        #[test]
        fn prop_advance_stays_in_bounds(
            x in -1.0e4f32..1.0e4,
            y in -1.0e4f32..1.0e4,
            vx in -100.0f32..100.0,
            vy in -100.0f32..100.0,
            margin in 0.0f32..64.0,
        ) {
            let p = advance(Vec2::new(x, y), Vec2::new(vx, vy), margin);
            prop_assert!(p.x >= -margin && p.x <= PLAYFIELD_WIDTH);
            prop_assert!(p.y >= -margin && p.y <= PLAYFIELD_HEIGHT);
        }
    }
}
