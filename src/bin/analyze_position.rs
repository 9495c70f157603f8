use std::env;
use std::process;

use connect_four_engine::board::search::{
    generate_tactical_moves, quiesce_endgame, SearchConfig, SearchInfo, SearchLogger,
    SearchTables, StdoutLogger, INFINITY,
};
use connect_four_engine::board::{Board, Position};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: analyze_position <moves>   (1-based columns, e.g. 4453)");
        return;
    }

    let board = match Board::from_moves(&args[1..].concat()) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };
    let side = board.side_to_move();

    println!("{board}");
    println!("side_to_move: {side}");
    println!("empty_cells: {}", board.empty_cells());

    let config = SearchConfig::endgame(board.empty_cells());
    for mv in generate_tactical_moves(&board, side, &config) {
        println!("tactical: column {} {:?} priority {}", mv.column + 1, mv.kind, mv.priority);
    }

    let mut tables = SearchTables::new();
    let node = quiesce_endgame(&board, -INFINITY, INFINITY, side, 0, &mut tables);
    StdoutLogger.info(&SearchInfo::new(&node, &tables.stats));
    println!("{}", tables.statistics());
}
