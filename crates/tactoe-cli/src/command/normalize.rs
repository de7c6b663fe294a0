use tactoe_engine::{Board, outcome};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct NormalizeArg {
    /// Board as 9 row-major characters (X, O and . for empty)
    board: Board,
}

pub(crate) fn run(arg: &NormalizeArg) {
    let board = arg.board;
    let canonical = board.canonicalize();

    println!("Board ({}):", board.to_notation());
    println!("{board}");
    let edges = board.edge_occupancy();
    println!(
        "Edges: top {}, bottom {}, left {}, right {}",
        edges.top, edges.bottom, edges.left, edges.right
    );
    println!();
    println!("Canonical ({}):", canonical.to_notation());
    println!("{canonical}");

    if let Some(outcome) = outcome::outcome(&board) {
        println!();
        println!("Finished: {outcome:?}");
    }
}
