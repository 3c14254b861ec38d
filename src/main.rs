use std::env;
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_bot::board::{Board, Bot, Color, GameState, Move, SearchParams, START_FEN};

const USAGE: &str = "usage: chess_bot [FEN] [--depth N] [--seed S] [--play N]";

#[derive(Debug, PartialEq)]
struct CliArgs {
    fen: String,
    depth: Option<u32>,
    seed: Option<u64>,
    plies: u32,
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .map_err(|_| format!("invalid value '{value}' for {flag}"))
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut fen_parts: Vec<&str> = Vec::new();
    let mut depth = None;
    let mut seed = None;
    let mut plies = 1;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--depth" => depth = Some(parse_number("--depth", iter.next())?),
            "--seed" => seed = Some(parse_number("--seed", iter.next())?),
            "--play" => plies = parse_number("--play", iter.next())?,
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
            // FEN fields may arrive as one quoted argument or as six words.
            word => fen_parts.push(word),
        }
    }

    let fen = if fen_parts.is_empty() {
        START_FEN.to_string()
    } else {
        fen_parts.join(" ")
    };
    Ok(CliArgs {
        fen,
        depth,
        seed,
        plies,
    })
}

fn make_bot(color: Color, args: &CliArgs) -> Bot<StdRng> {
    let mut params = SearchParams::default();
    if let Some(depth) = args.depth {
        params = params.with_fixed_depth(depth);
    }
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(color as u64)),
        None => StdRng::from_entropy(),
    };
    Bot::with_rng(color, params, rng)
}

fn run(args: &CliArgs) -> Result<(), String> {
    let mut board = Board::try_from_fen(&args.fen).map_err(|e| e.to_string())?;
    let mut white = make_bot(Color::White, args);
    let mut black = make_bot(Color::Black, args);
    let mut last_move: Option<Move> = None;

    println!("{board}");
    for _ in 0..args.plies {
        if board.game_state() != GameState::Continue {
            break;
        }
        let bot = match board.side_to_move() {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        let (mv, report) = bot
            .get_move(&mut board, last_move)
            .map_err(|e| e.to_string())?;
        board.make_move(&mv);
        last_move = Some(mv);
        println!("{} plays {mv} ({report})", bot.color());
    }

    println!("{board}");
    println!("{}", board.to_fen());
    let state = match board.game_state() {
        GameState::Continue if board.in_check() => "check",
        GameState::Continue => "in progress",
        GameState::Checkmate => "checkmate",
        GameState::Stalemate => "stalemate",
    };
    println!("{} to move: {state}", board.side_to_move());
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let result = parse_args(&args).and_then(|cli| run(&cli));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}
