//! Array Hack entry point
//!
//! The browser build is driven from JavaScript through `platform::WebGame`.
//! Natively this runs a line-oriented terminal game on stdin.

#[cfg(not(target_arch = "wasm32"))]
mod terminal {
    use std::io::{self, BufRead, Write};
    use std::path::{Path, PathBuf};
    use std::time::{Duration, Instant};

    use array_hack::consts::MAX_FRAME_MS;
    use array_hack::sim::{
        Command, GameConfig, GameEvent, GameSession, Scheduler, SearchState,
        pattern::format_digits,
    };
    use array_hack::{ConfigError, Settings};
    use clap::Parser;

    const HELP: &str = "\
commands:
  insert <index> <digit>   shift-insert a digit (alias: i)
  delete <index>           shift-delete a digit (alias: d)
  search 2,1,4             animated pattern search (alias: s)
  reset                    empty the array (alias: r)
  next                     continue after cracking a level (alias: n)
  restart                  back to level 1
  tick                     spend one second
  help | quit";

    /// Crack the target code by building it in a ten-slot array
    #[derive(Parser, Debug)]
    #[command(name = "array-hack")]
    #[command(about = "Array Hack in the terminal", long_about = None)]
    #[command(version)]
    struct Args {
        /// Seed for targets and random layouts (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Settings JSON (sound, pacing)
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Level table JSON
        #[arg(long)]
        levels: Option<PathBuf>,
    }

    fn read_file(path: &Path) -> Result<String, String> {
        std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))
    }

    fn load(args: &Args) -> Result<(Settings, GameConfig), String> {
        let settings = match &args.settings {
            Some(path) => Settings::from_json(&read_file(path)?),
            None => Ok(Settings::default()),
        };
        let config = match &args.levels {
            Some(path) => GameConfig::from_json(&read_file(path)?),
            None => Ok(GameConfig::default()),
        };
        let to_text = |e: ConfigError| e.to_string();
        Ok((settings.map_err(to_text)?, config.map_err(to_text)?))
    }

    /// Player-facing line for an event
    fn describe(event: &GameEvent, session: &GameSession) -> Option<String> {
        let line = match event {
            GameEvent::Inserted { index, value } => format!("Inserted {value} at index {index}!"),
            GameEvent::Deleted { index, value } => {
                format!("Deleted element {value} at index {index}.")
            }
            GameEvent::ArrayReset => "Array reset! Start building your code...".into(),
            GameEvent::SearchStarted { pattern } => {
                format!("Searching for pattern {}...", format_digits(pattern))
            }
            GameEvent::SearchProgress { .. } => return None,
            GameEvent::SearchFound { index } => format!("Pattern found at position {index}!"),
            GameEvent::SearchNotFound => "Pattern not found in array.".into(),
            GameEvent::Won { time_used } => format!(
                "You cracked the code in {time_used} seconds! Pattern {} found! Type 'next' to continue.",
                session.target_description()
            ),
            GameEvent::TimedOut => "Time's up! Type 'restart' to try again.".into(),
            GameEvent::LevelStarted { level } => {
                format!("Level {level} started! {}", session.level_description())
            }
            GameEvent::AllLevelsComplete => "Congratulations! You've completed all levels!".into(),
            GameEvent::InvalidCommand { reason } => format!("Error: {reason}"),
        };
        Some(line)
    }

    fn render(session: &GameSession) -> String {
        let mut highlight = session.highlight_slots();
        highlight.extend(session.win_slots());
        let cells: Vec<String> = session
            .array_view()
            .slots()
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                let cell = slot.map_or("_".to_string(), |d| d.to_string());
                if highlight.contains(&i) {
                    format!("[{cell}]")
                } else {
                    format!(" {cell} ")
                }
            })
            .collect();
        format!(
            "Level {} | {}s left | target {}\n{}\n{}",
            session.level_index(),
            session.remaining_secs(),
            session.target_description(),
            cells.join(""),
            (0..cells.len()).map(|i| format!(" {i} ")).collect::<String>()
        )
    }

    fn print_events(session: &mut GameSession) {
        for event in session.drain_events() {
            if let Some(line) = describe(&event, session) {
                println!("{line}");
            }
        }
    }

    /// Feed wall-clock time since the last call into the scheduler. Long
    /// gaps are split into frames so time spent typing counts in full.
    fn catch_up(scheduler: &mut Scheduler, session: &mut GameSession, clock: &mut Instant) {
        let mut remaining = u32::try_from(clock.elapsed().as_millis()).unwrap_or(u32::MAX);
        *clock += Duration::from_millis(u64::from(remaining));
        while remaining > 0 {
            let frame = remaining.min(MAX_FRAME_MS);
            scheduler.advance(session, frame);
            remaining -= frame;
        }
    }

    pub fn run() {
        let args = Args::parse();
        let (settings, config) = match load(&args) {
            Ok(loaded) => loaded,
            Err(err) => {
                log::error!("Failed to load config: {}", err);
                std::process::exit(1);
            }
        };

        let seed = args.seed.unwrap_or_else(rand::random);
        log::info!("Game initialized with seed: {}", seed);
        let mut session = match GameSession::with_config(config, seed) {
            Ok(session) => session,
            Err(err) => {
                log::error!("Invalid level table: {}", err);
                std::process::exit(1);
            }
        };

        println!("Ready to hack! Insert digits to build your code...\n{HELP}\n");
        print_events(&mut session);
        println!("{}", render(&session));

        let mut scheduler = settings.scheduler();
        let step = Duration::from_millis(u64::from(scheduler.search_step_ms()));
        let mut clock = Instant::now();

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("> ");
            let _ = io::stdout().flush();
            let Some(Ok(line)) = lines.next() else { break };

            // Seconds spent thinking count against the timer
            catch_up(&mut scheduler, &mut session, &mut clock);
            print_events(&mut session);

            match line.trim() {
                "" => {}
                "quit" | "exit" | "q" => break,
                "help" | "h" | "?" => println!("{HELP}"),
                text => {
                    let _ = match Command::parse(text) {
                        Ok(command) => session.apply(command),
                        Err(err) => session.reject(err),
                    };
                }
            }
            print_events(&mut session);

            while session.search_state() == SearchState::Scanning {
                println!("{}", render(&session));
                std::thread::sleep(step);
                catch_up(&mut scheduler, &mut session, &mut clock);
                print_events(&mut session);
            }
            println!("{}", render(&session));
        }
        log::info!("Bye");
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Array Hack (terminal) starting...");
    terminal::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::wasm_start, this is just to satisfy the compiler
}
