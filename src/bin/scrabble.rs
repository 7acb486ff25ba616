use anyhow::Result;
use colored::Colorize;
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scrabble_solver::{premiums, Bag, Board, Dictionary, Premium, Rack, Solution, N};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "scrabble",
    about = "Plays a solo game of scrabble, always taking the highest scoring move"
)]
struct Opt {
    /// The dictionary of words that are allowed to be played, as a file of
    /// whitespace-separated words
    #[structopt(short, long, parse(from_os_str))]
    dictionary: PathBuf,

    /// Seed for the tile bag, random when absent
    #[structopt(short, long)]
    seed: Option<u64>,

    /// Only print the moves and the final summary, not the board
    #[structopt(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    simple_logger::SimpleLogger::new()
        .with_level(if opt.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        })
        .init()?;

    let dictionary = Dictionary::from_file(&opt.dictionary)?;
    let mut board = Board::new();
    let mut bag = Bag::full();
    let mut rng = match opt.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut rack = Rack::new();
    let mut winners: Vec<(Rack, Solution)> = Vec::new();

    // keep playing until we are out of tiles or solutions
    loop {
        rack = bag.refill(&rack, &mut rng);
        if rack.is_empty() {
            break;
        }
        println!("Rack: {}  ({} tiles left in bag)", rack, bag.len());

        let solutions = board.generate_solutions(&rack, &dictionary)?;
        let best = match board.find_best_solution(&solutions, &dictionary)? {
            Some(best) => best,
            None => break,
        };
        println!("Winner: {}", best);

        board.add_solution(&best)?;
        let leftover = best.new_rack(&rack);
        winners.push((rack, best));
        rack = leftover;

        if !opt.quiet {
            println!("{}", render(&board));
        }
    }

    println!("Winners:");
    for (rack, winner) in &winners {
        println!("    {}: {}", rack, winner);
    }
    let total: u32 = winners.iter().filter_map(|(_, w)| w.score).sum();
    println!("Total score: {}", total);
    Ok(())
}

/// Render the board with the premium squares tinted and blank tiles
/// highlighted, in the style of the printed game board.
fn render(board: &Board) -> String {
    let grid = premiums();
    let mut out = String::new();
    for row in 0..N {
        for col in 0..N {
            let tile = board.tile_at(row, col).unwrap_or(' ');
            let cell = format!(" {} ", tile);
            let colored = if board.is_blank_at(row, col) {
                cell.black().on_yellow()
            } else {
                match grid[row][col] {
                    Premium::WordBonus(3) => cell.black().on_red(),
                    Premium::WordBonus(_) => cell.black().on_bright_red(),
                    Premium::LetterBonus(3) => cell.white().on_blue(),
                    Premium::LetterBonus(_) => cell.black().on_bright_cyan(),
                    Premium::Normal => cell.black().on_white(),
                }
            };
            out.push_str(&colored.to_string());
        }
        out.push('\n');
    }
    out
}
