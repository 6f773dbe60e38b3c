use std::{
    fmt, fs,
    io::{self, BufRead, Write},
    time::Instant,
};

use clap::{App, Arg};
use once_cell::sync::Lazy;
use regex::Regex;

use ataxx::{
    Cell, Coord, EventOutcome, Game, GameMode, InputEvent, Level, LevelSet, Outcome, Player,
};

fn main() -> io::Result<()> {
    let matches = App::new("Ataxx")
        .version("0.1.0")
        .about("Terminal Ataxx: clone, jump, and convert your way to a full board.")
        .arg(
            Arg::with_name("levels")
                .short("l")
                .long("levels")
                .value_name("FILE")
                .help("level list to play from (JSON array of levels)")
                .takes_value(true)
                .default_value("levels.txt"),
        )
        .arg(
            Arg::with_name("time_limit")
                .short("t")
                .long("time-limit")
                .value_name("MINUTES")
                .help("per-player time limit in minutes; unlimited when omitted")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("list")
                .long("list")
                .help("list the level names and exit"),
        )
        .arg(
            Arg::with_name("delete")
                .long("delete")
                .value_name("NAME")
                .help("delete the named level from the list and exit")
                .takes_value(true),
        )
        .get_matches();

    let path = matches.value_of("levels").unwrap();
    let mut set = load_levels(path);

    if matches.is_present("list") {
        for name in set.names() {
            println!("{}", name);
        }
        return Ok(());
    }
    if let Some(name) = matches.value_of("delete") {
        if set.remove(name) {
            save_levels(path, &set)?;
            println!("Deleted {:?}.", name);
        } else {
            println!("No level named {:?}.", name);
        }
        return Ok(());
    }

    let time_limit = match matches.value_of("time_limit") {
        Some(raw) => match raw.parse::<u32>() {
            Ok(minutes) if minutes > 0 => Some(minutes),
            _ => {
                eprintln!(
                    "invalid time limit {:?}, expected a positive number of minutes",
                    raw
                );
                std::process::exit(1);
            }
        },
        None => None,
    };

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());

    let level = choose_level(&set, &mut input)?;
    if !level.is_balanced() {
        println!("Note: {:?} gives the players unequal pieces.", level.name);
    }

    let mut game = Game::new();
    if let Err(err) = game.start_new_game(&level, GameMode::PlayerVsPlayer, time_limit) {
        eprintln!("could not start game: {}", err);
        std::process::exit(1);
    }
    play(&mut game, time_limit.is_some(), &mut input)
}

/// Load the level list, falling back to the built-in level when the file is
/// missing, malformed, or empty.
fn load_levels(path: &str) -> LevelSet {
    match fs::read_to_string(path)
        .ok()
        .and_then(|data| LevelSet::from_json(&data).ok())
    {
        Some(set) if !set.is_empty() => set,
        _ => {
            let mut set = LevelSet::new();
            set.push(Level::default_level());
            set
        }
    }
}

fn save_levels(path: &str, set: &LevelSet) -> io::Result<()> {
    match set.to_json() {
        Ok(json) => fs::write(path, json),
        Err(err) => Err(io::Error::new(io::ErrorKind::InvalidData, err)),
    }
}

/// Pick a level by number or name.
fn choose_level<B: BufRead>(set: &LevelSet, input: &mut InputReader<B>) -> io::Result<Level> {
    println!("Available levels:");
    for (i, name) in set.names().enumerate() {
        println!("  {}. {}", i + 1, name);
    }
    input.read_input("Pick a level (number or name, empty for the first):", |line| {
        if line.is_empty() {
            return set.iter().next().cloned();
        }
        if let Ok(i) = line.parse::<usize>() {
            if i >= 1 && i <= set.len() {
                return set.iter().nth(i - 1).cloned();
            }
            println!("Level numbers run from 1 to {}.", set.len());
            return None;
        }
        match set.get(line) {
            Some(level) => Some(level.clone()),
            None => {
                println!("No level named {:?}.", line);
                None
            }
        }
    })
}

/// Run the pass-and-play loop until the game ends or the player quits.
fn play(game: &mut Game, timed: bool, input: &mut InputReader<impl BufRead>) -> io::Result<()> {
    enum Command {
        Tap(Coord),
        Help,
        Quit,
    }
    /// Matcher for cell taps like `3,4` or `3 4`.
    static TAP: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<col>[0-9]+)$").unwrap()
    });

    println!();
    println!("Cells are addressed as row,col. Type help or ? for commands.");
    let mut last_prompt = Instant::now();
    loop {
        println!();
        show_board(game);
        if timed {
            let (time_one, time_two) = game.time_display();
            println!("Time   {} {}   {} {}", Player::One.name(), time_one, Player::Two.name(), time_two);
        }
        let (count_one, count_two) = game.piece_counts();
        println!("Score  {} {}   {} {}", Player::One.name(), count_one, Player::Two.name(), count_two);
        match game.selection() {
            Some(selected) => println!(
                "{} to move, {} selected. Tap a * cell to move there, or any other cell to cancel.",
                game.current_player().name(),
                selected
            ),
            None => println!(
                "{} to move. Tap a cell holding one of your pieces.",
                game.current_player().name()
            ),
        }

        let cmd = input.read_input_lower("> ", |line| match line {
            "?" | "help" | "h" => Some(Command::Help),
            "quit" | "exit" | "q" => Some(Command::Quit),
            other => {
                if let Some(captures) = TAP.captures(other) {
                    let row = captures.name("row").unwrap().as_str().parse();
                    let col = captures.name("col").unwrap().as_str().parse();
                    match (row, col) {
                        (Ok(row), Ok(col)) => Some(Command::Tap(Coord::new(row, col))),
                        _ => {
                            println!("Cell coordinates must be small numbers.");
                            None
                        }
                    }
                } else {
                    println!("Unrecognized command {:?}. Use '?' for help.", other);
                    None
                }
            }
        })?;

        // Think time is charged to whoever's clock is running.
        if timed {
            let elapsed = last_prompt.elapsed().as_secs_f64();
            game.handle_event(InputEvent::Tick(elapsed));
        }
        last_prompt = Instant::now();

        match cmd {
            Command::Quit => return Ok(()),
            Command::Help => {
                println!(
                    "Available Commands:
    <row>,<col>   tap a cell: select one of your pieces, then tap a
                  highlighted destination to move. Tapping anywhere else
                  cancels the selection.
    help          show this message.
    quit          leave the game."
                );
            }
            Command::Tap(pos) if !game.is_over() => {
                let mover = game.current_player();
                match game.handle_event(InputEvent::SelectCell(pos)) {
                    EventOutcome::Selected => {}
                    EventOutcome::Deselected => println!("Selection cleared."),
                    EventOutcome::Moved(converted) => {
                        if !converted.is_empty() {
                            let cells: Vec<String> =
                                converted.iter().map(Coord::to_string).collect();
                            println!("Converted {}.", cells.join(", "));
                        }
                        if !game.is_over() && game.current_player() == mover {
                            println!(
                                "{} has no moves - {} plays again.",
                                mover.opponent().name(),
                                mover.name()
                            );
                        }
                    }
                    EventOutcome::Ignored => {
                        println!("Nothing to do at {} - pick one of your pieces.", pos)
                    }
                }
            }
            Command::Tap(_) => {}
        }

        if game.is_over() {
            println!();
            show_board(game);
            match game.winner() {
                Some(Outcome::Winner(player)) => println!("{} wins!", player.name()),
                Some(Outcome::Draw) => println!("Draw - equal territory."),
                None => {}
            }
            return Ok(());
        }
    }
}

/// Print the grid, highlighting the legal destinations of the current
/// selection.
fn show_board(game: &Game) {
    enum Tile {
        Empty,
        Target,
        Piece(Player),
        Selected(Player),
        Blocked,
    }
    impl fmt::Display for Tile {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                Tile::Empty => f.pad("."),
                Tile::Target => f.pad("*"),
                Tile::Piece(Player::One) => f.pad("1"),
                Tile::Piece(Player::Two) => f.pad("2"),
                Tile::Selected(Player::One) => f.pad("(1)"),
                Tile::Selected(Player::Two) => f.pad("(2)"),
                Tile::Blocked => f.pad("#"),
            }
        }
    }

    let board = game.board();
    let targets = game.legal_moves_for_selection();
    print!("   ");
    for col in 0..board.dimensions().cols() {
        print!("{:^4}", col);
    }
    println!();
    for row in board.dimensions().iter_coordinates() {
        let mut coords = row.peekable();
        let row_index = coords.peek().map_or(0, |coord| coord.row);
        print!("{:>2} ", row_index);
        for coord in coords {
            let tile = match board.get(coord).unwrap() {
                Cell::Empty if targets.contains(&coord) => Tile::Target,
                Cell::Empty => Tile::Empty,
                Cell::Piece(player) if game.selection() == Some(coord) => Tile::Selected(player),
                Cell::Piece(player) => Tile::Piece(player),
                Cell::Blocked => Tile::Blocked,
            };
            print!("{:^4}", tile);
        }
        println!();
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`.
    /// Converts to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
