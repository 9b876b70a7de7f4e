use crate::grid::{Coord, Grid};
use crate::pathfinding::{find_path, open_distance};

/// Where an agent stands in its run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentStatus {
    /// Can still move toward the goal
    Active,
    ReachedEnd,
    BatteryDepleted,
    /// Battery left but no path from the current cell
    Stranded,
}

impl AgentStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            AgentStatus::Active => "active",
            AgentStatus::ReachedEnd => "reached_end",
            AgentStatus::BatteryDepleted => "battery_depleted",
            AgentStatus::Stranded => "stranded",
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        self != AgentStatus::Active
    }
}

/// Robot walking a grid toward its end cell, one cell per battery unit.
///
/// The grid is borrowed read-only; position and battery change only
/// through [`Agent::step`].
#[derive(Clone, Debug)]
pub struct Agent<'g> {
    grid: &'g Grid,
    position: Coord,
    battery: u32,
}

impl<'g> Agent<'g> {
    /// Place an agent on the grid's start with the default battery
    pub fn new(grid: &'g Grid) -> Self {
        Self::with_battery(grid, initial_battery(grid))
    }

    /// Place an agent on the grid's start with an explicit battery
    pub fn with_battery(grid: &'g Grid, battery: u32) -> Self {
        Self {
            grid,
            position: grid.start(),
            battery,
        }
    }

    #[inline]
    pub fn position(&self) -> Coord {
        self.position
    }

    #[inline]
    pub fn battery(&self) -> u32 {
        self.battery
    }

    #[inline]
    pub fn goal(&self) -> Coord {
        self.grid.end()
    }

    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Move one cell along a freshly computed shortest path to the goal.
    ///
    /// Returns false without touching any state when the battery is empty,
    /// the agent already stands on the goal, or the goal is unreachable.
    pub fn step(&mut self) -> bool {
        if self.battery == 0 {
            return false;
        }

        let Some(next) = find_path(self.grid, self.position, self.goal()).and_then(|p| p.next_hop()) else {
            return false;
        };

        self.position = next;
        self.battery -= 1;
        true
    }

    #[inline]
    pub fn reached_end(&self) -> bool {
        self.position == self.goal()
    }

    /// Classify the current state; runs a search when the agent looks active
    pub fn status(&self) -> AgentStatus {
        if self.reached_end() {
            AgentStatus::ReachedEnd
        } else if self.battery == 0 {
            AgentStatus::BatteryDepleted
        } else if find_path(self.grid, self.position, self.goal()).is_none() {
            AgentStatus::Stranded
        } else {
            AgentStatus::Active
        }
    }
}

/// Battery granted for a grid: floor(1.5 * D), where D is the start-to-end
/// move count on the same board with obstacles ignored.
pub fn initial_battery(grid: &Grid) -> u32 {
    let distance = open_distance(grid, grid.start(), grid.end()).unwrap_or(grid.area()) as u32;
    // 3D/2 in integers truncates exactly like floor(1.5 * D)
    distance.saturating_mul(3) / 2
}
