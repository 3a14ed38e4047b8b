use crate::error::MazeError;
use crate::maze::{Coord, Direction, Grid, Survey};

/// Where a navigation session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigatorState {
    /// The agent is somewhere other than the treasure.
    InTransit,
    /// The agent reached the treasure. Terminal.
    Victorious,
}

/// What the agent sees when it looks around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Look {
    /// The wall report for the current cell.
    Survey(Survey),
    /// The agent is standing on the treasure.
    Victory { steps: u32 },
}

/// Walks a single agent through a carved grid one cell at a time, validating
/// every move against the walls and counting successful steps.
///
/// One navigator per maze-solving session; it owns the grid for the session's
/// lifetime and never mutates walls.
#[derive(Debug)]
pub struct Navigator {
    grid: Grid,
    current: Coord,
    goal: Coord,
    steps_taken: u32,
    state: NavigatorState,
}

impl Navigator {
    /// Starts a session over a carved grid. The start cell is marked on the
    /// grid and the goal cell gets the treasure marker.
    ///
    /// Fails if either coordinate is out of bounds or if start equals goal.
    pub fn new(mut grid: Grid, start: Coord, goal: Coord) -> Result<Self, MazeError> {
        if start == goal {
            return Err(MazeError::InvalidMarker(
                "can't have the treasure at the start",
            ));
        }
        grid.mark_start(start)?;
        grid.mark_treasure(goal)?;
        Ok(Navigator {
            grid,
            current: start,
            goal,
            steps_taken: 0,
            state: NavigatorState::InTransit,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn position(&self) -> Coord {
        self.current
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Number of successful moves so far. Starts at 0, never decreases.
    pub fn steps_taken(&self) -> u32 {
        self.steps_taken
    }

    pub fn state(&self) -> NavigatorState {
        self.state
    }

    /// Surveys the current cell, or reports victory if the agent is standing
    /// on the treasure. Reporting victory moves the session to its terminal
    /// state; callers are expected to stop issuing moves after that.
    pub fn look_around(&mut self) -> Look {
        if self.current == self.goal {
            if self.state != NavigatorState::Victorious {
                tracing::info!(
                    "[navigator] victory achieved in {} steps",
                    self.steps_taken
                );
            }
            self.state = NavigatorState::Victorious;
            return Look::Victory {
                steps: self.steps_taken,
            };
        }
        Look::Survey(self.grid[self.current].walls())
    }

    /// Attempts to move the agent one cell in `direction`.
    ///
    /// Fails with `WallBlocked` if the current cell is walled on that side,
    /// or `OutOfBounds` if the step would leave the grid (consistent wall
    /// data makes that unreachable, but the check stays as defense). On
    /// failure position and step count are unchanged.
    pub fn walk(&mut self, direction: Direction) -> Result<(), MazeError> {
        let survey = self.grid[self.current].walls();
        if survey.is_walled(direction) {
            tracing::debug!(
                "[navigator] blocked walking {} from {:?}",
                direction,
                self.current
            );
            return Err(MazeError::WallBlocked(direction));
        }

        let next = self
            .grid
            .neighbor(self.current, direction)
            .ok_or(MazeError::OutOfBounds {
                x: self.current.0,
                y: self.current.1,
            })?;

        self.current = next;
        self.steps_taken += 1;
        tracing::debug!(
            "[navigator] walked {} to {:?} (step {})",
            direction,
            next,
            self.steps_taken
        );
        Ok(())
    }
}
