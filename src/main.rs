use ant_farm::prelude::*;
use ant_farm::menu;
use clap::Parser;
use std::io;

fn main() -> io::Result<()> {
    let args = Args::parse();
    if args.plain {
        colored::control::set_override(false);
    }

    let mut meadow = Meadow::with_capacity(args.capacity);

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&mut meadow, &mut stdin.lock(), &mut stdout.lock())
}
