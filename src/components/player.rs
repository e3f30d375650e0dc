//! Player state: facing, movement intent, derived status and tool/seed
//! selection.
//!
//! [`Status`] is a tagged pair of [`Facing`] and [`Activity`]. It selects the
//! animation sequence and, through [`Status::label`], names the asset folder
//! for that sequence. It is derived every tick by
//! [`crate::systems::status::player_status`] and never parsed back from text.
use bevy_ecs::prelude::Component;
use log::{debug, info};
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Up, Facing::Down, Facing::Left, Facing::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Facing::Up => "up",
            Facing::Down => "down",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }

    /// Offset from the visual centre to the tile a tool or seed acts on.
    pub fn tool_offset(&self) -> Vector2 {
        match self {
            Facing::Left => Vector2::new(-50.0, 40.0),
            Facing::Right => Vector2::new(50.0, 40.0),
            Facing::Up => Vector2::new(0.0, -10.0),
            Facing::Down => Vector2::new(0.0, 50.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    Hoe,
    Axe,
    Water,
}

impl Tool {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Hoe => "hoe",
            Tool::Axe => "axe",
            Tool::Water => "water",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seed {
    Corn,
    Tomato,
}

impl Seed {
    pub fn as_str(&self) -> &'static str {
        match self {
            Seed::Corn => "corn",
            Seed::Tomato => "tomato",
        }
    }
}

/// Tools in switching order.
pub const TOOLS: [Tool; 3] = [Tool::Hoe, Tool::Axe, Tool::Water];
/// Seeds in switching order.
pub const SEEDS: [Seed; 2] = [Seed::Corn, Seed::Tomato];

/// What the player is doing, independent of facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    Moving,
    Idle,
    Tool(Tool),
}

impl Activity {
    /// Idle when there is no intent, the selected tool while the tool-use
    /// timer runs, moving otherwise.
    pub fn derive(direction: Vector2, tool_in_use: Option<Tool>) -> Self {
        if let Some(tool) = tool_in_use {
            return Activity::Tool(tool);
        }
        if direction.x == 0.0 && direction.y == 0.0 {
            Activity::Idle
        } else {
            Activity::Moving
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status {
    pub facing: Facing,
    pub activity: Activity,
}

impl Status {
    pub fn new(facing: Facing, activity: Activity) -> Self {
        Self { facing, activity }
    }

    /// Every status that has an animation sequence.
    pub fn all() -> impl Iterator<Item = Status> {
        Facing::ALL.into_iter().flat_map(|facing| {
            [Activity::Moving, Activity::Idle]
                .into_iter()
                .chain(TOOLS.into_iter().map(Activity::Tool))
                .map(move |activity| Status::new(facing, activity))
        })
    }

    /// Asset key, e.g. `down`, `down_idle`, `left_axe`.
    pub fn label(&self) -> String {
        match self.activity {
            Activity::Moving => self.facing.as_str().to_string(),
            Activity::Idle => format!("{}_idle", self.facing.as_str()),
            Activity::Tool(tool) => format!("{}_{}", self.facing.as_str(), tool.as_str()),
        }
    }
}

/// The controllable farmer.
#[derive(Component, Debug, Clone)]
pub struct Player {
    /// Movement speed in world units per second.
    pub speed: f32,
    /// Movement intent, each axis in [-1, 1]. Normalized before use.
    pub direction: Vector2,
    pub facing: Facing,
    pub activity: Activity,
    pub tool_index: usize,
    pub seed_index: usize,
    /// World point where tool and seed effects land.
    pub target: Vector2,
    /// Suppresses movement and action input while set.
    pub sleeping: bool,
}

impl Player {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            direction: Vector2::zero(),
            facing: Facing::Down,
            activity: Activity::Idle,
            tool_index: 0,
            seed_index: 0,
            target: Vector2::zero(),
            sleeping: false,
        }
    }

    pub fn status(&self) -> Status {
        Status::new(self.facing, self.activity)
    }

    pub fn selected_tool(&self) -> Tool {
        TOOLS[self.tool_index]
    }

    pub fn selected_seed(&self) -> Seed {
        SEEDS[self.seed_index]
    }

    pub fn cycle_tool(&mut self) {
        self.tool_index = (self.tool_index + 1) % TOOLS.len();
        debug!("tool switched to {}", self.selected_tool().as_str());
    }

    pub fn cycle_seed(&mut self) {
        self.seed_index = (self.seed_index + 1) % SEEDS.len();
        debug!("seed switched to {}", self.selected_seed().as_str());
    }

    /// Lie down facing the bed; input stays locked until [`wake`](Self::wake).
    pub fn fall_asleep(&mut self) {
        self.facing = Facing::Left;
        self.activity = Activity::Idle;
        self.direction = Vector2::zero();
        self.sleeping = true;
        info!("player went to sleep");
    }

    pub fn wake(&mut self) {
        if self.sleeping {
            self.sleeping = false;
            info!("player woke up");
        }
    }
}
