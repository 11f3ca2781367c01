use std::fmt;

/// Colony lifecycle: `Dead` is terminal and records who dealt the blow
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Alive,
    Dead { killed_by: String },
}

/// One ant colony with its population counts and kill history
#[derive(Clone, Debug)]
pub struct Colony {
    pub name: String,
    pub species: String,
    workers: u32,
    warriors: u32,
    ant_kills: u32,
    colony_kills: Vec<String>,
    ticks_alive: u32,
    status: Status,
}

impl Colony {
    /// Create a new living colony with empty counts
    pub fn new(name: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            workers: 0,
            warriors: 0,
            ant_kills: 0,
            colony_kills: Vec::new(),
            ticks_alive: 0,
            status: Status::Alive,
        }
    }

    /// Check if colony is alive
    #[inline]
    pub fn is_alive(&self) -> bool {
        matches!(self.status, Status::Alive)
    }

    /// Name of the attacker that killed this colony, if any
    #[inline]
    pub fn killed_by(&self) -> Option<&str> {
        match &self.status {
            Status::Alive => None,
            Status::Dead { killed_by } => Some(killed_by),
        }
    }

    #[inline]
    pub fn workers(&self) -> u32 {
        self.workers
    }

    #[inline]
    pub fn warriors(&self) -> u32 {
        self.warriors
    }

    #[inline]
    pub fn ant_kills(&self) -> u32 {
        self.ant_kills
    }

    #[inline]
    pub fn colony_kills(&self) -> &[String] {
        &self.colony_kills
    }

    #[inline]
    pub fn ticks_alive(&self) -> u32 {
        self.ticks_alive
    }

    /// Total ants, counted toward the attacker's tally when this colony falls
    #[inline]
    pub fn population(&self) -> u32 {
        self.workers + self.warriors
    }

    /// Add workers and warriors; no-op once dead
    pub fn add_resources(&mut self, workers: u32, warriors: u32) {
        if !self.is_alive() {
            return;
        }
        self.workers += workers;
        self.warriors += warriors;
    }

    /// Add to the cumulative ant-kill tally; no-op once dead
    pub fn increment_ant_kills(&mut self, kills: u32) {
        if !self.is_alive() {
            return;
        }
        self.ant_kills += kills;
    }

    /// Append a defeated colony's name to the kill list; no-op once dead
    pub fn add_colony_kill(&mut self, colony_name: impl Into<String>) {
        if !self.is_alive() {
            return;
        }
        self.colony_kills.push(colony_name.into());
    }

    /// Age the colony by one tick; no-op once dead
    pub fn increment_ticks_alive(&mut self) {
        if self.is_alive() {
            self.ticks_alive += 1;
        }
    }

    /// Mark the colony dead, recording the attacker. Not guarded: killing an
    /// already-dead colony overwrites `killed_by`.
    pub fn kill(&mut self, attacker_name: impl Into<String>) {
        self.status = Status::Dead {
            killed_by: attacker_name.into(),
        };
    }
}

impl fmt::Display for Colony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Species: {}", self.species)?;
        writeln!(f, "Workers: {}", self.workers)?;
        writeln!(f, "Warriors: {}", self.warriors)?;
        writeln!(f, "Ant Kills: {}", self.ant_kills)?;
        write!(f, "Colony Kills: {}", self.colony_kills.len())?;
        if !self.colony_kills.is_empty() {
            write!(f, " ({})", self.colony_kills.join(", "))?;
        }
        writeln!(f)?;
        writeln!(f, "Ticks Alive: {}", self.ticks_alive)?;
        match &self.status {
            Status::Alive => write!(f, "Status: Alive"),
            Status::Dead { killed_by } => write!(f, "Status: Killed by {}", killed_by),
        }
    }
}
