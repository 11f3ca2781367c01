use crate::meadow::Meadow;
use clap::Parser;

/// CLI arguments for the ant farm simulation
#[derive(Parser, Debug)]
#[command(name = "ant_farm", about = "🐜 Menu-driven ant colony simulator")]
pub struct Args {
    /// Maximum number of colonies in the meadow
    #[arg(long, default_value_t = Meadow::DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    pub plain: bool,
}
