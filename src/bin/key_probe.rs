//! Prints the command each key maps to. Useful for checking what a terminal
//! actually sends (arrow keys, auto-repeat, release events). Press q to quit.

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal;

use blockfall::input::{classify, Input};

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let result = probe();
    terminal::disable_raw_mode()?;
    result
}

fn probe() -> Result<()> {
    print!("press keys (q quits)\r\n");
    loop {
        let ev = event::read()?;
        let Event::Key(key) = ev else {
            continue;
        };
        match classify(&ev) {
            Some(Input::Quit) => return Ok(()),
            Some(Input::Command(command)) => {
                print!("{:?} {:?} -> {}\r\n", key.code, key.kind, command.as_str())
            }
            _ => print!("{:?} {:?} -> (none)\r\n", key.code, key.kind),
        }
    }
}
