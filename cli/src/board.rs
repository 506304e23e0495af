//! Text rendering of the board

use last_player_core_rs::Match;

const EMPTY_CELL: char = '·';

/// Render the board, one line per row of y, one character per column of x
///
/// Each placed player shows the last character of its id at its rounded
/// position; later roster entries overwrite earlier ones on a shared cell.
pub fn render(game: &Match) -> String {
    let board = game.board();
    let mut grid = vec![vec![EMPTY_CELL; board.width as usize]; board.height as usize];

    for player in game.players() {
        let Some(position) = player.position() else {
            continue;
        };
        let column = position.x.round() as usize;
        let row = position.y.round() as usize;
        if let Some(cell) = grid.get_mut(row).and_then(|cells| cells.get_mut(column)) {
            *cell = player.id().chars().last().unwrap_or('?');
        }
    }

    grid.into_iter()
        .map(|cells| cells.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
