#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[cfg(feature = "std")]
use clap::Parser;

#[cfg(feature = "std")]
use tictactoe::{
    ui::{coord_to_string, parse_coord, print_board, status_line},
    GameSession, Intent, Mark, MoveError,
};

#[derive(Parser)]
#[command(author, version, about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Display name for the X player (moves first).
    #[arg(long, value_name = "NAME")]
    x_name: Option<String>,
    /// Display name for the O player.
    #[arg(long, value_name = "NAME")]
    o_name: Option<String>,
}

/// Read one trimmed line from stdin; `None` on end of input.
#[cfg(feature = "std")]
fn read_line() -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    tictactoe::init_logging();
    let cli = Cli::parse();

    let mut session = GameSession::new();
    if let Some(name) = cli.x_name {
        let _ = session.dispatch(Intent::Rename { mark: Mark::X, name });
    }
    if let Some(name) = cli.o_name {
        let _ = session.dispatch(Intent::Rename { mark: Mark::O, name });
    }

    println!("Enter a cell like B2. Other commands: name <x|o> <new name>, new, quit.");
    loop {
        println!();
        print_board(session.state().board());
        println!("{}", status_line(&session.state(), session.roster()));

        if session.state().status().is_terminal() {
            print!("Play again? [y/N] ");
            io::stdout().flush()?;
            match read_line()? {
                Some(answer) if answer.eq_ignore_ascii_case("y") => {
                    let _ = session.dispatch(Intent::NewGame);
                    continue;
                }
                _ => break,
            }
        }

        print!("> ");
        io::stdout().flush()?;
        let line = match read_line()? {
            Some(line) => line,
            None => break,
        };
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("quit") | Some("q") => break,
            Some("new") => {
                let _ = session.dispatch(Intent::NewGame);
            }
            Some("name") => {
                let mark = match parts.next().map(|m| m.to_ascii_lowercase()) {
                    Some(m) if m == "x" => Mark::X,
                    Some(m) if m == "o" => Mark::O,
                    _ => {
                        println!("Usage: name <x|o> <new name>");
                        continue;
                    }
                };
                let name = parts.collect::<Vec<_>>().join(" ");
                if name.is_empty() {
                    println!("Usage: name <x|o> <new name>");
                    continue;
                }
                let _ = session.dispatch(Intent::Rename { mark, name });
            }
            Some(token) => {
                let (row, col) = match parse_coord(token) {
                    Some(coord) => coord,
                    None => {
                        println!("Could not read {:?}; try a cell like B2.", token);
                        continue;
                    }
                };
                let mover = session.state().active_player();
                match session.dispatch(Intent::Move { row, col }) {
                    Ok(_) => println!("{} marked {}.", mover, coord_to_string(row, col)),
                    Err(MoveError::CellOccupied) => println!("That cell is already taken."),
                    Err(MoveError::OutOfBounds) => println!("That cell is off the board."),
                    Err(MoveError::GameOver) => println!("The game is over; type `new` to start again."),
                }
            }
            None => {}
        }
    }
    Ok(())
}
