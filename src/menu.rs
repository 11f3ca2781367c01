use crate::meadow::{AttackOutcome, Meadow};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What a prompt produced: a usable value, garbage, or end of input
enum Entry<T> {
    Value(T),
    Invalid,
    Eof,
}

/// Run the interactive menu loop until the user exits or input ends.
///
/// Generic over the reader and writer so the whole loop can be driven from a
/// test without a terminal. All colony indices shown to the user are 1-based;
/// conversion to the meadow's 0-based indices happens here.
pub fn run<R: BufRead, W: Write>(meadow: &mut Meadow, input: &mut R, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "Welcome to the Ant Farm Simulation!".bright_green().bold()
    )?;

    loop {
        show_menu(out)?;
        let choice = match prompt_line(input, out, "Enter your choice: ")? {
            Some(line) => line,
            None => break,
        };

        let keep_going = match choice.as_str() {
            "1" => spawn_colony(meadow, input, out)?,
            "2" => give_resources(meadow, input, out)?,
            "3" => {
                meadow.tick();
                writeln!(out, "One tick has passed.")?;
                true
            }
            "4" => attack(meadow, input, out)?,
            "5" => show_summary(meadow, input, out)?,
            "6" => {
                list_colonies(meadow, out)?;
                true
            }
            "7" => {
                writeln!(out, "{}", "Exiting simulation. Goodbye!".bright_green())?;
                return Ok(());
            }
            _ => {
                writeln!(out, "{}", "Invalid choice. Please try again.".red())?;
                true
            }
        };

        if !keep_going {
            break;
        }
    }

    Ok(())
}

fn show_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "--- Ant Farm Simulation ---".bright_blue().bold())?;
    writeln!(out, "1. Spawn Colony")?;
    writeln!(out, "2. Give Resources")?;
    writeln!(out, "3. Simulate Tick")?;
    writeln!(out, "4. Attack Colony")?;
    writeln!(out, "5. Show Summary")?;
    writeln!(out, "6. List Colonies")?;
    writeln!(out, "7. Exit")?;
    Ok(())
}

fn list_colonies<W: Write>(meadow: &Meadow, out: &mut W) -> io::Result<()> {
    writeln!(out, "Current Colonies:")?;
    for (index, name, species) in meadow.iter() {
        writeln!(out, "{}. {} ({})", index + 1, name.cyan(), species)?;
    }
    Ok(())
}

/// Spawn Colony: prompts for name and species
fn spawn_colony<R: BufRead, W: Write>(
    meadow: &mut Meadow,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    let name = match prompt_line(input, out, "Enter colony name: ")? {
        Some(line) if !line.is_empty() => line,
        Some(_) => {
            writeln!(out, "{}", "Colony name cannot be empty.".red())?;
            return Ok(true);
        }
        None => return Ok(false),
    };
    let species = match prompt_line(input, out, "Enter species: ")? {
        Some(line) if !line.is_empty() => line,
        Some(_) => {
            writeln!(out, "{}", "Species cannot be empty.".red())?;
            return Ok(true);
        }
        None => return Ok(false),
    };

    match meadow.spawn(&name, &species) {
        Ok(colony) => writeln!(
            out,
            "Colony {} of species {} created.",
            colony.name.cyan(),
            colony.species.cyan()
        )?,
        Err(err) => writeln!(out, "{}", err.to_string().red())?,
    }
    Ok(true)
}

/// Give Resources: prompts for a colony index and worker/warrior counts
fn give_resources<R: BufRead, W: Write>(
    meadow: &mut Meadow,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    list_colonies(meadow, out)?;
    let index = match prompt_index(input, out, "Enter colony index to give resources: ")? {
        Entry::Value(index) => index,
        Entry::Invalid => return Ok(true),
        Entry::Eof => return Ok(false),
    };
    let workers = match prompt_number(input, out, "Enter number of workers: ")? {
        Entry::Value(n) => n,
        Entry::Invalid => return Ok(true),
        Entry::Eof => return Ok(false),
    };
    let warriors = match prompt_number(input, out, "Enter number of warriors: ")? {
        Entry::Value(n) => n,
        Entry::Invalid => return Ok(true),
        Entry::Eof => return Ok(false),
    };

    match meadow.grant(index, workers, warriors) {
        Ok(colony) => writeln!(out, "Resources added to colony {}.", colony.name.cyan())?,
        Err(err) => writeln!(out, "{}", err.to_string().red())?,
    }
    Ok(true)
}

/// Attack Colony: prompts for attacker and defender indices
fn attack<R: BufRead, W: Write>(
    meadow: &mut Meadow,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    list_colonies(meadow, out)?;
    let attacker = match prompt_index(input, out, "Enter attacker colony index: ")? {
        Entry::Value(index) => index,
        Entry::Invalid => return Ok(true),
        Entry::Eof => return Ok(false),
    };
    let defender = match prompt_index(input, out, "Enter defender colony index: ")? {
        Entry::Value(index) => index,
        Entry::Invalid => return Ok(true),
        Entry::Eof => return Ok(false),
    };

    match meadow.attack(attacker, defender) {
        Ok(AttackOutcome::Victory { attacker, defender }) => writeln!(
            out,
            "{} {} defeated {}!",
            "💥".red(),
            attacker.bright_green(),
            defender.bright_red()
        )?,
        Ok(AttackOutcome::Defended { defender, .. }) => writeln!(
            out,
            "{} {} defended successfully!",
            "🛡️".green(),
            defender.bright_green()
        )?,
        Err(err) => writeln!(out, "{}", err.to_string().red())?,
    }
    Ok(true)
}

/// Show Summary: prompts for a colony index and prints its full state
fn show_summary<R: BufRead, W: Write>(
    meadow: &Meadow,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    list_colonies(meadow, out)?;
    let index = match prompt_index(input, out, "Enter colony index to show summary: ")? {
        Entry::Value(index) => index,
        Entry::Invalid => return Ok(true),
        Entry::Eof => return Ok(false),
    };

    match meadow.summary(index) {
        Ok(colony) => writeln!(out, "{}", colony)?,
        Err(err) => writeln!(out, "{}", err.to_string().red())?,
    }
    Ok(true)
}

/// Print a prompt and read one trimmed line; `None` means end of input
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Prompt for a non-negative count
fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Entry<u32>> {
    let line = match prompt_line(input, out, prompt)? {
        Some(line) => line,
        None => return Ok(Entry::Eof),
    };
    match line.parse::<u32>() {
        Ok(n) => Ok(Entry::Value(n)),
        Err(_) => {
            writeln!(out, "{}", "Please enter a non-negative number.".red())?;
            Ok(Entry::Invalid)
        }
    }
}

/// Prompt for a 1-based colony index, converted to the meadow's 0-based form
fn prompt_index<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Entry<usize>> {
    match prompt_number(input, out, prompt)? {
        Entry::Value(n) => match (n as usize).checked_sub(1) {
            Some(index) => Ok(Entry::Value(index)),
            None => {
                writeln!(out, "{}", "Invalid colony index.".red())?;
                Ok(Entry::Invalid)
            }
        },
        Entry::Invalid => Ok(Entry::Invalid),
        Entry::Eof => Ok(Entry::Eof),
    }
}
