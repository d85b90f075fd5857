use crate::elevator::requests::RequestSet;
use crate::shared::{Direction, TieBreak};

/**
 * Decision produced by the dispatcher.
 *
 * `direction` is the sweep direction the car commits to for reaching
 * `target`. When the target is the current floor the incoming direction is
 * carried through unchanged.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub target: i32,
    pub direction: Direction,
}

/**
 * Picks the next floor to head for (SCAN policy).
 *
 * - A request at the current floor wins immediately.
 * - Moving `Up`, the nearest request above is taken. With nothing above the
 *   car reverses and takes the nearest request below. `Down` mirrors this.
 * - `Idle` takes the closest request in either direction. Equal distances
 *   are settled by `tie_break`.
 *
 * Returns `None` only when there are no requests.
 */
pub fn next_target(
    floor: i32,
    requests: &RequestSet,
    direction: Direction,
    tie_break: TieBreak,
) -> Option<Dispatch> {
    if requests.contains(floor) {
        return Some(Dispatch {
            target: floor,
            direction,
        });
    }

    let nearest_above = requests.iter().filter(|&f| f > floor).min();
    let nearest_below = requests.iter().filter(|&f| f < floor).max();

    let up = |target: i32| Dispatch {
        target,
        direction: Direction::Up,
    };
    let down = |target: i32| Dispatch {
        target,
        direction: Direction::Down,
    };

    match direction {
        Direction::Up => nearest_above.map(up).or_else(|| nearest_below.map(down)),
        Direction::Down => nearest_below.map(down).or_else(|| nearest_above.map(up)),
        Direction::Idle => match (nearest_above, nearest_below) {
            (Some(above), Some(below)) => {
                let distance_above = above.abs_diff(floor);
                let distance_below = floor.abs_diff(below);
                if distance_above < distance_below {
                    Some(up(above))
                } else if distance_below < distance_above {
                    Some(down(below))
                } else {
                    match tie_break {
                        TieBreak::Above => Some(up(above)),
                        TieBreak::Below => Some(down(below)),
                    }
                }
            }
            (Some(above), None) => Some(up(above)),
            (None, Some(below)) => Some(down(below)),
            (None, None) => None,
        },
    }
}
