use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::coords::GridPos;
use crate::floor_plan::FloorPlan;

/// Frontier entry for the search. Ordered so the binary heap pops the
/// lowest f-score first; `seq` breaks ties in insertion order, which keeps
/// the result deterministic for a fixed grid.
#[derive(Debug, PartialEq, Eq)]
struct Frontier {
    priority: i32,
    seq: u64,
    pos: GridPos,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest path over walkable cells, 4-directional with unit step cost and
/// a Manhattan heuristic. The returned sequence excludes `start` and ends
/// with `goal`; it is empty when `start == goal` or the goal is unreachable.
pub fn find_path(plan: &FloorPlan, start: GridPos, goal: GridPos) -> Vec<GridPos> {
    if start == goal {
        return Vec::new();
    }

    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;
    frontier.push(Frontier {
        priority: 0,
        seq,
        pos: start,
    });
    let mut came_from: HashMap<GridPos, GridPos> = HashMap::new();
    let mut cost_so_far: HashMap<GridPos, i32> = HashMap::from([(start, 0)]);

    while let Some(Frontier { pos: current, .. }) = frontier.pop() {
        if current == goal {
            break;
        }
        for next in current.neighbors4() {
            if !plan.is_walkable(next) {
                continue;
            }
            let new_cost = cost_so_far[&current] + 1;
            if cost_so_far.get(&next).is_none_or(|&c| new_cost < c) {
                seq += 1;
                frontier.push(Frontier {
                    priority: new_cost + next.manhattan(goal),
                    seq,
                    pos: next,
                });
                came_from.insert(next, current);
                cost_so_far.insert(next, new_cost);
            }
        }
    }

    if !came_from.contains_key(&goal) {
        return Vec::new();
    }
    let mut path = Vec::new();
    let mut current = goal;
    while current != start {
        path.push(current);
        current = came_from[&current];
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Independent breadth-first distance, used to cross-check A* results.
    fn bfs_distance(plan: &FloorPlan, start: GridPos, goal: GridPos) -> Option<i32> {
        let mut queue = VecDeque::from([(start, 0)]);
        let mut visited = std::collections::HashSet::from([start]);
        while let Some((pos, dist)) = queue.pop_front() {
            if pos == goal {
                return Some(dist);
            }
            for next in pos.neighbors4() {
                if plan.is_walkable(next) && visited.insert(next) {
                    queue.push_back((next, dist + 1));
                }
            }
        }
        None
    }

    #[test]
    fn empty_for_identical_endpoints() {
        let plan = FloorPlan::hospital();
        for p in [GridPos::new(2, 2), GridPos::new(6, 6), GridPos::new(0, 4)] {
            assert_eq!(find_path(&plan, p, p), Vec::new());
        }
    }

    #[test]
    fn empty_for_unreachable_goal() {
        let plan = FloorPlan::hospital();
        // (5, 0) is interior wall; nothing routes into it.
        let path = find_path(&plan, GridPos::new(2, 2), GridPos::new(5, 0));
        assert!(path.is_empty());
    }

    #[test]
    fn path_is_contiguous_and_walkable() {
        let plan = FloorPlan::hospital();
        let start = GridPos::new(2, 2);
        let goal = GridPos::new(6, 6);
        let path = find_path(&plan, start, goal);
        assert_eq!(path.last(), Some(&goal));
        assert!(!path.contains(&start));
        let mut prev = start;
        for &p in &path {
            assert_eq!(prev.manhattan(p), 1);
            assert!(plan.is_walkable(p));
            prev = p;
        }
    }

    #[test]
    fn length_matches_bfs_between_all_anchors() {
        let plan = FloorPlan::hospital();
        let mut anchors = vec![plan.hub_anchor()];
        anchors.extend(plan.departments().map(|(_, p)| p));
        for &a in &anchors {
            for &b in &anchors {
                if a == b {
                    continue;
                }
                let expected = bfs_distance(&plan, a, b).expect("anchors must be reachable");
                let path = find_path(&plan, a, b);
                assert_eq!(path.len() as i32, expected, "{a:?} -> {b:?}");
            }
        }
    }

    #[test]
    fn length_matches_bfs_from_hallway_cells() {
        let plan = FloorPlan::hospital();
        let goal = plan.hub_anchor();
        for row in 0..20 {
            let start = GridPos::new(row, 8);
            let expected = bfs_distance(&plan, start, goal).unwrap();
            assert_eq!(find_path(&plan, start, goal).len() as i32, expected);
        }
    }

    #[test]
    fn deterministic_for_fixed_grid() {
        let plan = FloorPlan::hospital();
        let a = find_path(&plan, GridPos::new(2, 2), GridPos::new(10, 16));
        let b = find_path(&plan, GridPos::new(2, 2), GridPos::new(10, 16));
        assert_eq!(a, b);
    }
}
