use clap::Parser;
use eight_puzzle_solver::engine::{Board, CELL_COUNT, GRID_SIZE};
use eight_puzzle_solver::utils::board_from_digits;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Goal board the scramble must be able to reach (9-digit encoding)
    #[clap(short, long, default_value = "123456780")]
    goal: String,

    /// Seed for reproducible scrambles; random when omitted
    #[clap(short, long)]
    seed: Option<u64>,

    /// Number of boards to emit
    #[clap(short = 'n', long, default_value_t = 1)]
    count: usize,
}

// Shuffle the nine values until the arrangement lands in the goal's
// parity class. Half of all permutations qualify, so this terminates
// after two tries on average.
fn random_solvable_board(goal: &Board, rng: &mut SmallRng) -> Board {
    let mut cells: [u8; CELL_COUNT] = goal.flatten();

    loop {
        cells.shuffle(rng);

        let mut grid = [[0u8; GRID_SIZE]; GRID_SIZE];
        for (i, &val) in cells.iter().enumerate() {
            grid[i / GRID_SIZE][i % GRID_SIZE] = val;
        }

        let board = Board::from_grid(grid);
        if board.shares_parity_with(goal) {
            return board;
        }
    }
}

fn main() {
    let args = Args::parse();

    let goal = board_from_digits(&args.goal).expect("invalid goal board");
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = SmallRng::seed_from_u64(seed);

    println!("Scrambles solvable towards {} (seed {}):\n", goal.to_digits(), seed);

    for _ in 0..args.count {
        let board = random_solvable_board(&goal, &mut rng);
        println!("{}", board.to_digits());
        println!("{}\n", board);
    }
}
