use clap::Parser;
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::heuristics::Heuristic;
use eight_puzzle_solver::solver::{solve_astar, SearchResult};
use eight_puzzle_solver::utils::board_from_digits;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Start board as a row-major 9-digit string, 0 for the blank (e.g. 123456078)
    start: String,

    /// Goal board in the same 9-digit encoding (e.g. 123456780)
    goal: String,

    /// Run only this heuristic instead of comparing both
    #[clap(short = 'H', long, value_enum)]
    heuristic: Option<Heuristic>,
}

fn run_and_report(start: Board, goal: Board, heuristic: Heuristic) {
    match solve_astar(start, goal, heuristic.function()) {
        SearchResult::Solved(solution) => {
            println!("FOUND THE GOAL WITH {} HEURISTIC", heuristic.name().to_uppercase());
            println!("NODES GENERATED: {}", solution.stats.generated);
            println!("NODES EXPANDED: {}", solution.stats.expanded);
            if solution.path.is_empty() {
                println!("Start and goal are identical; no moves needed.\n");
            } else {
                println!("SOLUTION PATH ({} moves):\n", solution.path.len() - 1);
                for board in &solution.path {
                    println!("{}\n", board);
                }
            }
        }
        SearchResult::Exhausted(stats) => {
            println!("NO PATH FOUND WITH {} HEURISTIC", heuristic.name().to_uppercase());
            println!("NODES GENERATED: {}", stats.generated);
            println!("NODES EXPANDED: {}\n", stats.expanded);
        }
    }
}

fn main() {
    let args = Args::parse();

    let start = board_from_digits(&args.start).expect("invalid start board");
    let goal = board_from_digits(&args.goal).expect("invalid goal board");

    println!("Start board:\n{}\n", start);
    println!("Goal board:\n{}\n", goal);

    match args.heuristic {
        Some(heuristic) => run_and_report(start, goal, heuristic),
        None => {
            // Compare both heuristics on the same instance. The searches
            // are fully independent; each builds its own bookkeeping.
            run_and_report(start, goal, Heuristic::Manhattan);
            run_and_report(start, goal, Heuristic::MisplacedTiles);
        }
    }
}
