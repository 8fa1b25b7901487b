#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Show,
    /// One-based coordinates as typed.
    Move { row: usize, col: usize },
    Ai,
    Stats,
    Save,
    Saved,
    New,
    Exit,
}

pub const HELP_TEXT: &str = "Commands: show | move r c | ai | save | saved | stats | new | help | exit";

/// `Ok(None)` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut parts = line.split_whitespace();
    let Some(name) = parts.next() else {
        return Ok(None);
    };

    let command = match name.to_lowercase().as_str() {
        "help" => Command::Help,
        "show" => Command::Show,
        "ai" => Command::Ai,
        "stats" => Command::Stats,
        "save" => Command::Save,
        "saved" => Command::Saved,
        "new" => Command::New,
        "exit" | "quit" => Command::Exit,
        "move" => {
            let (Some(row), Some(col)) = (parts.next(), parts.next()) else {
                return Err("Usage: move r c".to_string());
            };
            let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>()) else {
                return Err("Row and column must be numbers".to_string());
            };
            Command::Move { row, col }
        }
        _ => return Err("Unknown command. Type 'help' for assistance.".to_string()),
    };

    Ok(Some(command))
}
