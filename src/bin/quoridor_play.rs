//! Terminal front end for the Quoridor engine.
//!
//! Humans type commands at the prompt; the greedy agent plays any seat the
//! chosen mode hands to the computer. With `--games N` the binary instead runs
//! N agent-vs-agent matches in parallel and prints a summary.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use quoridor_engine::game_runner::play_greedy_series;
use quoridor_engine::{
    load_config, AgentConfig, AppConfig, Cell, GameMode, GreedyAgent, Match, Orientation,
    PlayerId, RelativeDirection, TurnClock, Wall,
};

#[derive(Parser, Debug)]
#[command(
    name = "quoridor_play",
    about = "Play Quoridor in the terminal against a person or the greedy agent",
    version
)]
struct Args {
    /// YAML config file; command-line flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Who controls each seat
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    /// Size of the board
    #[arg(long)]
    board_size: Option<u8>,

    /// Walls each player can place
    #[arg(long)]
    max_walls: Option<u8>,

    /// Seed for the agent's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before each agent action, in milliseconds
    #[arg(long, default_value_t = 500)]
    agent_delay_ms: u64,

    /// Run this many agent-vs-agent games in parallel and print a summary
    #[arg(long)]
    games: Option<usize>,
}

/// One line of human input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Step(RelativeDirection),
    Move(Cell),
    Wall(Wall),
    Pass,
    Resign,
    Help,
}

const HELP: &str = "\
Commands:
  w / s / a / d      step forward / back / left / right (relative to you)
  move C R           move to column C, row R (needed for diagonal jumps)
  wall C R h|v       place a horizontal or vertical wall anchored at (C, R)
  pass               give up the turn when you have no legal move
  resign             concede the match
  help               show this message";

fn parse_coord(token: Option<&str>, what: &str) -> Result<u8> {
    let token = token.with_context(|| format!("missing {what}"))?;
    token
        .parse()
        .with_context(|| format!("{what} must be a number, got '{token}'"))
}

fn parse_command(line: &str) -> Result<Command> {
    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        bail!("empty command");
    };
    let command = match head.to_ascii_lowercase().as_str() {
        "w" => Command::Step(RelativeDirection::Forward),
        "s" => Command::Step(RelativeDirection::Back),
        "a" => Command::Step(RelativeDirection::Left),
        "d" => Command::Step(RelativeDirection::Right),
        "move" | "m" => {
            let col = parse_coord(tokens.next(), "column")?;
            let row = parse_coord(tokens.next(), "row")?;
            Command::Move(Cell::new(col, row))
        }
        "wall" => {
            let col = parse_coord(tokens.next(), "column")?;
            let row = parse_coord(tokens.next(), "row")?;
            let orientation = match tokens.next() {
                Some("h") => Orientation::Horizontal,
                Some("v") => Orientation::Vertical,
                other => bail!("orientation must be 'h' or 'v', got {other:?}"),
            };
            Command::Wall(Wall::new(Cell::new(col, row), orientation))
        }
        "pass" => Command::Pass,
        "resign" | "quit" => Command::Resign,
        "help" | "?" => Command::Help,
        other => bail!("unknown command '{other}'"),
    };
    if let Some(extra) = tokens.next() {
        bail!("unexpected '{extra}' after command");
    }
    Ok(command)
}

fn print_status(game: &Match, clock: &TurnClock) {
    println!("\n{}", game.board());
    for player in PlayerId::ALL {
        println!(
            "  {player}: at {}, {} walls left, {} on the clock",
            game.position(player),
            game.walls_remaining(player),
            clock.format_remaining(player)
        );
    }
}

/// Apply one human command. Returns `false` when the turn did not pass (help,
/// or a rejected action) so the prompt repeats.
fn apply_command(game: &mut Match, player: PlayerId, command: Command) -> bool {
    let result = match command {
        Command::Help => {
            println!("{HELP}");
            return false;
        }
        Command::Step(relative) => game.try_step(player, relative.resolve(player)).map(|_| ()),
        Command::Move(target) => game.try_move(player, target).map(|_| ()),
        Command::Wall(wall) => game.try_wall(player, wall),
        Command::Pass => game.pass_turn(player),
        Command::Resign => game.forfeit(player).map(|_| ()),
    };
    match result {
        Ok(()) => true,
        Err(err) => {
            println!("Rejected: {err}");
            false
        }
    }
}

fn human_turn(game: &mut Match, player: PlayerId, input: &mut impl BufRead) -> Result<()> {
    loop {
        print!("{player}> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            println!("\nInput closed, {player} resigns.");
            game.forfeit(player)?;
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(command) => {
                if apply_command(game, player, command) {
                    return Ok(());
                }
            }
            Err(err) => println!("{err}. Type 'help' for commands."),
        }
    }
}

fn agent_turn(game: &mut Match, player: PlayerId, agent: &mut GreedyAgent, delay: Duration) -> Result<()> {
    thread::sleep(delay);
    let action = game
        .agent_take_turn(player, agent)
        .with_context(|| format!("Agent playing {player} chose an illegal action"))?;
    println!("{player} (agent): {action:?}");
    Ok(())
}

fn seat_is_agent(mode: GameMode, player: PlayerId) -> bool {
    match mode {
        GameMode::Pvp => false,
        GameMode::Pve => player == PlayerId::Player2,
        GameMode::Auto => true,
    }
}

fn play_interactive(config: &AppConfig, delay: Duration) -> Result<()> {
    let match_config = config.quoridor.match_config();
    let mut game = Match::new(match_config).context("Invalid match configuration")?;
    let mut clock = TurnClock::new(config.clock.duration());
    let mut agents = [
        GreedyAgent::new(config.agent),
        GreedyAgent::new(AgentConfig {
            seed: config.agent.seed.map(|s| s.wrapping_add(1)),
            ..config.agent
        }),
    ];

    info!(
        "Starting {:?} match on a {n}x{n} board with {} walls each",
        config.mode,
        match_config.max_walls,
        n = match_config.board_size
    );
    if config.mode != GameMode::Auto {
        println!("{HELP}");
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut turns = 0;
    while !game.is_over() {
        if config.mode == GameMode::Auto && turns >= config.quoridor.max_steps {
            println!("\nTurn limit of {} reached, no winner.", config.quoridor.max_steps);
            return Ok(());
        }
        print_status(&game, &clock);

        let player = game.turn();
        let started = Instant::now();
        if seat_is_agent(config.mode, player) {
            agent_turn(&mut game, player, &mut agents[player.index()], delay)?;
        } else {
            human_turn(&mut game, player, &mut input)?;
        }
        turns += 1;

        if let Some(flagged) = clock.charge(player, started.elapsed()) {
            if !game.is_over() {
                println!("\n{flagged} ran out of time.");
                game.forfeit(flagged)?;
            }
        }
    }

    print_status(&game, &clock);
    if let Some(winner) = game.winner() {
        println!("\n{winner} wins!");
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(board_size) = args.board_size {
        config.quoridor.board_size = board_size;
    }
    if let Some(max_walls) = args.max_walls {
        config.quoridor.max_walls = max_walls;
    }
    if args.seed.is_some() {
        config.agent.seed = args.seed;
    }
    config.validate().context("Invalid settings")?;

    if let Some(games) = args.games {
        let summary = play_greedy_series(
            games,
            config.quoridor.match_config(),
            config.agent,
            config.quoridor.max_steps,
            config.agent.seed.unwrap_or(0),
        )?;
        println!("Played {} games", summary.games);
        println!("  Player 1 wins: {}", summary.wins[PlayerId::Player1.index()]);
        println!("  Player 2 wins: {}", summary.wins[PlayerId::Player2.index()]);
        println!("  Truncated:     {}", summary.truncated);
        println!("  Average turns: {:.1}", summary.average_turns);
        return Ok(());
    }

    play_interactive(&config, Duration::from_millis(args.agent_delay_ms))
}
