use crate::pointer_in_failsafe_corner;

const DISPLAY: (i32, i32) = (1920, 1080);

/// WHAT: Each of the four corner pixels trips the fail-safe
/// WHY: Slamming the pointer into any corner is the manual emergency stop
#[test]
fn given_pointer_on_corner_when_checking_then_tripped() {
    // Given/When/Then: All four corners
    for corner in [(0, 0), (1919, 0), (0, 1079), (1919, 1079)] {
        assert!(
            pointer_in_failsafe_corner(corner, DISPLAY),
            "{corner:?} should trip"
        );
    }
}

/// WHAT: Edges and the interior do not trip the fail-safe
/// WHY: Only an exact corner is a deliberate stop; edges are normal pointer use
#[test]
fn given_pointer_on_edge_or_inside_when_checking_then_not_tripped() {
    // Given/When/Then: Edge midpoints, near-corners and the centre
    for pointer in [(960, 0), (0, 540), (1919, 540), (960, 1079), (1, 0), (1918, 1079), (960, 540)] {
        assert!(
            !pointer_in_failsafe_corner(pointer, DISPLAY),
            "{pointer:?} should not trip"
        );
    }
}

/// WHAT: Pointers on other monitors do not trip the fail-safe
/// WHY: A multi-monitor user working on a secondary screen must not abort the run
#[test]
fn given_pointer_off_main_display_when_checking_then_not_tripped() {
    // Given/When/Then: Left/above and right/below the main display
    for pointer in [(-800, -200), (2500, 1300), (-1, -1), (1920, 1080)] {
        assert!(
            !pointer_in_failsafe_corner(pointer, DISPLAY),
            "{pointer:?} should not trip"
        );
    }
}
