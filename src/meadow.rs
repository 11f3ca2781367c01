use crate::colony::Colony;
use crate::error::{MeadowError, Result};

/// Outcome of a resolved attack, carrying the names for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Attacker had strictly more warriors; defender is now dead
    Victory { attacker: String, defender: String },
    /// Tie or fewer warriors; nothing changed
    Defended { attacker: String, defender: String },
}

/// Bounded registry owning every colony in the simulation.
///
/// Colonies keep their insertion index for their whole lifetime; there is no
/// deletion. Indices are 0-based here, the console layer converts from the
/// 1-based numbers shown to the user.
#[derive(Debug)]
pub struct Meadow {
    colonies: Vec<Colony>,
    capacity: usize,
}

impl Meadow {
    /// Default colony limit
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Create an empty meadow with the default colony limit
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create an empty meadow with an explicit colony limit
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            colonies: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of colonies spawned so far
    #[inline]
    pub fn len(&self) -> usize {
        self.colonies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colonies.is_empty()
    }

    /// Colony limit this meadow enforces on spawn
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.colonies.len() {
            Err(MeadowError::InvalidIndex {
                index,
                count: self.colonies.len(),
            })
        } else {
            Ok(())
        }
    }

    /// Create a new colony at the next index, unless the meadow is full
    pub fn spawn(&mut self, name: impl Into<String>, species: impl Into<String>) -> Result<&Colony> {
        if self.colonies.len() >= self.capacity {
            return Err(MeadowError::CapacityExceeded {
                limit: self.capacity,
            });
        }
        let index = self.colonies.len();
        self.colonies.push(Colony::new(name, species));
        Ok(&self.colonies[index])
    }

    /// Grant workers and warriors to the colony at `index`
    pub fn grant(&mut self, index: usize, workers: u32, warriors: u32) -> Result<&Colony> {
        self.check_index(index)?;
        let colony = &mut self.colonies[index];
        colony.add_resources(workers, warriors);
        Ok(colony)
    }

    /// Advance one tick: every living colony ages by 1, in index order
    pub fn tick(&mut self) {
        for colony in &mut self.colonies {
            colony.increment_ticks_alive();
        }
    }

    /// Resolve an attack between two living colonies.
    ///
    /// Strict warrior comparison; ties favor the defender. On victory the
    /// attacker absorbs the defender's full population into its ant-kill
    /// tally, records the defender's name, and the defender dies. A lost
    /// attack changes nothing.
    pub fn attack(&mut self, attacker_index: usize, defender_index: usize) -> Result<AttackOutcome> {
        self.check_index(attacker_index)?;
        self.check_index(defender_index)?;

        if !self.colonies[attacker_index].is_alive() || !self.colonies[defender_index].is_alive() {
            return Err(MeadowError::NotAlive);
        }

        let attacker_name = self.colonies[attacker_index].name.clone();
        let defender_name = self.colonies[defender_index].name.clone();

        // Strict comparison also rules out self-attack victories.
        let attacker_wins = self.colonies[attacker_index].warriors()
            > self.colonies[defender_index].warriors();

        if attacker_wins {
            let spoils = self.colonies[defender_index].population();
            self.colonies[attacker_index].increment_ant_kills(spoils);
            self.colonies[attacker_index].add_colony_kill(&defender_name);
            self.colonies[defender_index].kill(&attacker_name);
            Ok(AttackOutcome::Victory {
                attacker: attacker_name,
                defender: defender_name,
            })
        } else {
            Ok(AttackOutcome::Defended {
                attacker: attacker_name,
                defender: defender_name,
            })
        }
    }

    /// Borrow the colony at `index` for summary display
    pub fn summary(&self, index: usize) -> Result<&Colony> {
        self.check_index(index)?;
        Ok(&self.colonies[index])
    }

    /// Ordered listing of `(index, name, species)` for every colony.
    /// Restartable: repeated calls yield the same rows until a spawn happens.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str, &str)> {
        self.colonies
            .iter()
            .enumerate()
            .map(|(i, c)| (i, c.name.as_str(), c.species.as_str()))
    }
}

impl Default for Meadow {
    fn default() -> Self {
        Self::new()
    }
}
