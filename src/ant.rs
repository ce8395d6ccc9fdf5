use crate::coordinate::Coordinate;
use crate::direction::Direction;
use crate::maze::Maze;
use crate::route::Route;

/// Ant walking a maze; state packed into a byte (arrived/trapped)
#[derive(Clone, Debug)]
pub struct Ant {
    pub id: u32,
    pub pos: Coordinate,
    pub moves: u32,
    route: Route,
    state: u8, // bit 0 = arrived, bit 1 = trapped
}

impl Ant {
    const ARRIVED: u8 = 0b01;
    const TRAPPED: u8 = 0b10;

    /// Create a new ant at the given position
    pub fn new(id: u32, pos: Coordinate) -> Self {
        Self {
            id,
            pos,
            moves: 0,
            route: Route::new(pos),
            state: 0,
        }
    }

    /// Check if ant has reached its goal
    #[inline]
    pub fn has_arrived(&self) -> bool {
        self.state & Self::ARRIVED != 0
    }

    /// Check if ant has no open neighbor to move to
    #[inline]
    pub fn is_trapped(&self) -> bool {
        self.state & Self::TRAPPED != 0
    }

    /// Set arrived state
    #[inline]
    pub fn set_arrived(&mut self, arrived: bool) {
        if arrived {
            self.state |= Self::ARRIVED;
        } else {
            self.state &= !Self::ARRIVED;
        }
    }

    /// Set trapped state
    #[inline]
    pub fn set_trapped(&mut self, trapped: bool) {
        if trapped {
            self.state |= Self::TRAPPED;
        } else {
            self.state &= !Self::TRAPPED;
        }
    }

    /// Route walked so far
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Move one step in `dir` and record it
    pub fn move_to(&mut self, dir: Direction) {
        self.pos = self.pos.add_direction(dir);
        self.route.push(dir);
        self.moves += 1;
    }

    /// Check if ant has reached maximum moves
    pub fn has_max_moves(&self, max_moves: u32) -> bool {
        self.moves >= max_moves
    }

    /// Pick the next direction, weighted by neighbor pheromone.
    ///
    /// When the weights sum to zero (every neighbor blocked, or the field
    /// has decayed to nothing) the choice falls back to a uniform pick among
    /// open neighbors. Returns `None` when there is no open neighbor.
    pub fn choose_direction(&self, maze: &Maze, rng: &mut fastrand::Rng) -> Option<Direction> {
        let around = maze.get_surrounding_pheromone(self.pos);

        if around.sum > 0.0 && around.sum.is_finite() {
            let mut pick = rng.f64() * around.sum;
            let mut last = None;
            for (dir, _, value) in around.iter() {
                if value <= 0.0 {
                    continue;
                }
                if pick < value {
                    return Some(dir);
                }
                pick -= value;
                last = Some(dir);
            }
            // rounding left `pick` just past the final weight
            return last;
        }

        let mut opts = [Direction::North; 4];
        let mut k = 0usize;
        for (dir, pos, _) in around.iter() {
            if maze.in_bounds(pos) {
                opts[k] = dir;
                k += 1;
            }
        }
        (k > 0).then(|| opts[rng.usize(..k)])
    }

    /// Take one step; marks the ant trapped when it cannot move
    pub fn step(&mut self, maze: &Maze, rng: &mut fastrand::Rng) {
        match self.choose_direction(maze, rng) {
            Some(dir) => self.move_to(dir),
            None => self.set_trapped(true),
        }
    }

    /// Walk from the ant's position until `end`, a dead end, or `max_steps`.
    /// Returns the route only when the goal was reached.
    pub fn find_route(
        mut self,
        maze: &Maze,
        end: Coordinate,
        max_steps: u32,
        rng: &mut fastrand::Rng,
    ) -> Option<Route> {
        while !self.has_arrived() {
            if self.pos == end {
                self.set_arrived(true);
                break;
            }
            if self.is_trapped() || self.has_max_moves(max_steps) {
                return None;
            }
            self.step(maze, rng);
        }
        Some(self.route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::parse_maze_from_str;

    #[test]
    fn test_ant_creation() {
        let ant = Ant::new(42, Coordinate::new(1, 2));

        assert_eq!(ant.id, 42);
        assert_eq!(ant.pos, Coordinate::new(1, 2));
        assert_eq!(ant.moves, 0);
        assert!(!ant.has_arrived());
        assert!(!ant.is_trapped());
        assert!(ant.route().is_empty());
    }

    #[test]
    fn test_ant_state_management() {
        let mut ant = Ant::new(1, Coordinate::new(0, 0));

        ant.set_trapped(true);
        assert!(ant.is_trapped());
        assert!(!ant.has_arrived());

        ant.set_arrived(true);
        assert!(ant.has_arrived());
        assert!(ant.is_trapped());

        ant.set_trapped(false);
        ant.set_arrived(false);
        assert!(!ant.is_trapped());
        assert!(!ant.has_arrived());
    }

    #[test]
    fn test_ant_movement() {
        let mut ant = Ant::new(1, Coordinate::new(0, 0));

        ant.move_to(Direction::East);
        ant.move_to(Direction::South);
        assert_eq!(ant.pos, Coordinate::new(1, 1));
        assert_eq!(ant.moves, 2);
        assert_eq!(ant.route().directions(), &[Direction::East, Direction::South]);
        assert!(ant.has_max_moves(2));
        assert!(!ant.has_max_moves(3));
    }

    #[test]
    fn test_single_exit_is_always_chosen() {
        // corridor: only east is open from (0, 0)
        let maze = parse_maze_from_str("3 1\n1 1 1\n").unwrap();
        let ant = Ant::new(0, Coordinate::new(0, 0));

        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..20 {
            assert_eq!(ant.choose_direction(&maze, &mut rng), Some(Direction::East));
        }
    }

    #[test]
    fn test_enclosed_ant_is_trapped() {
        let maze = parse_maze_from_str("3 3\n0 0 0\n0 1 0\n0 0 0\n").unwrap();
        let mut ant = Ant::new(0, Coordinate::new(1, 1));

        let mut rng = fastrand::Rng::with_seed(1);
        assert_eq!(ant.choose_direction(&maze, &mut rng), None);
        ant.step(&maze, &mut rng);
        assert!(ant.is_trapped());
        assert_eq!(ant.moves, 0);
    }

    #[test]
    fn test_decayed_field_falls_back_to_open_neighbors() {
        let mut maze = parse_maze_from_str("2 2\n1 1\n0 1\n").unwrap();
        for _ in 0..2000 {
            maze.evaporate(0.5);
        }
        assert_eq!(maze.get_surrounding_pheromone(Coordinate::new(0, 0)).sum, 0.0);

        let ant = Ant::new(0, Coordinate::new(0, 0));
        let mut rng = fastrand::Rng::with_seed(3);
        assert_eq!(ant.choose_direction(&maze, &mut rng), Some(Direction::East));
    }

    #[test]
    fn test_heavy_trail_dominates_choice() {
        let mut maze = parse_maze_from_str("3 3\n1 1 1\n1 1 1\n1 1 1\n").unwrap();
        let trail = Route::from_steps(Coordinate::new(1, 1), vec![Direction::South]);
        maze.add_pheromone_route(&trail, 1000.0);
        let ant = Ant::new(0, Coordinate::new(1, 1));

        let mut rng = fastrand::Rng::with_seed(11);
        let south = (0..200)
            .filter(|_| ant.choose_direction(&maze, &mut rng) == Some(Direction::South))
            .count();
        assert!(south > 180, "south chosen {} times", south);
    }

    #[test]
    fn test_find_route_reaches_goal() {
        let maze = parse_maze_from_str("3 1\n1 1 1\n").unwrap();
        let ant = Ant::new(0, Coordinate::new(0, 0));

        let mut rng = fastrand::Rng::with_seed(5);
        let route = ant
            .find_route(&maze, Coordinate::new(2, 0), 1000, &mut rng)
            .expect("corridor goal is reachable");
        assert_eq!(route.start(), Coordinate::new(0, 0));
        assert_eq!(route.end(), Coordinate::new(2, 0));
        assert!(route.size() >= 2);
        assert!(route.positions().all(|pos| maze.in_bounds(pos)));
    }

    #[test]
    fn test_find_route_at_goal_is_empty() {
        let maze = parse_maze_from_str("1 1\n1\n").unwrap();
        let ant = Ant::new(0, Coordinate::new(0, 0));

        let mut rng = fastrand::Rng::with_seed(5);
        let route = ant.find_route(&maze, Coordinate::new(0, 0), 10, &mut rng).unwrap();
        assert!(route.is_empty());
    }

    #[test]
    fn test_find_route_gives_up() {
        // goal walled off from the start
        let maze = parse_maze_from_str("3 1\n1 0 1\n").unwrap();
        let mut rng = fastrand::Rng::with_seed(9);

        let trapped = Ant::new(0, Coordinate::new(0, 0));
        assert!(trapped.find_route(&maze, Coordinate::new(2, 0), 50, &mut rng).is_none());

        let open = parse_maze_from_str("2 2\n1 1\n1 1\n").unwrap();
        let wandering = Ant::new(1, Coordinate::new(0, 0));
        assert!(wandering.find_route(&open, Coordinate::new(5, 5), 50, &mut rng).is_none());
    }
}
