//! Common test utilities: a minimal grid-world host implementing `GameView`.

#![allow(dead_code)]

use qgrid::{Action, BitGrid, GameView, Point};

/// A tiny scripted host. Tests mutate its fields directly between turns to
/// simulate the game advancing.
pub struct ToyWorld {
    pub position: Point,
    pub opponents: Vec<Point>,
    pub grid: BitGrid,
    pub score: f64,
    pub legal: Vec<Action>,
}

impl ToyWorld {
    pub fn new() -> Self {
        let mut grid = BitGrid::new(3, 3);
        grid.set(0, 0, true).expect("cell is in bounds");
        grid.set(2, 2, true).expect("cell is in bounds");
        Self {
            position: Point::new(1, 1),
            opponents: vec![Point::new(0, 2)],
            grid,
            score: 0.0,
            legal: vec![
                Action::North,
                Action::South,
                Action::East,
                Action::West,
                Action::Stop,
            ],
        }
    }

    /// Move the agent one cell in the given direction, collecting anything
    /// on the target cell for 10 points. Each turn costs 1 point.
    pub fn advance(&mut self, action: Action) {
        let Point { x, y } = self.position;
        self.position = match action {
            Action::North => Point::new(x, y + 1),
            Action::South => Point::new(x, y - 1),
            Action::East => Point::new(x + 1, y),
            Action::West => Point::new(x - 1, y),
            Action::Stop => self.position,
        };
        self.score -= 1.0;
        let (cx, cy) = (self.position.x as usize, self.position.y as usize);
        if self.grid.get(cx, cy) == Some(true) {
            self.grid.set(cx, cy, false).expect("cell is in bounds");
            self.score += 10.0;
        }
    }
}

impl GameView for ToyWorld {
    fn position(&self) -> Point {
        self.position
    }

    fn opponent_positions(&self) -> Vec<Point> {
        self.opponents.clone()
    }

    fn collectible_grid(&self) -> &BitGrid {
        &self.grid
    }

    fn legal_actions(&self) -> Vec<Action> {
        self.legal.clone()
    }

    fn score(&self) -> f64 {
        self.score
    }
}
