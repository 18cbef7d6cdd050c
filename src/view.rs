//! Plain-text frame of the board and the upcoming pieces.

use blockfall::core::Game;

/// Render one frame, rows separated by `\r\n` for raw-mode terminals
pub fn render(game: &Game) -> String {
    let board = game.board();
    let (width, height) = (board.width() as i32, board.height() as i32);

    let cells_of = |piece: Option<&blockfall::core::Piece>| -> Vec<(i32, i32)> {
        piece
            .map(|p| p.absolute_cells().map(|c| (c.x, c.y)).collect())
            .unwrap_or_default()
    };
    let current = cells_of(board.current());
    let ghost = cells_of(board.ghost());

    let mut out = String::with_capacity(((width as usize) * 2 + 4) * (height as usize + 3));
    for y in (1..=height).rev() {
        out.push('|');
        for x in 1..=width {
            let glyph = if current.contains(&(x, y)) {
                "[]"
            } else if board.is_occupied(x, y) {
                "##"
            } else if ghost.contains(&(x, y)) {
                "::"
            } else {
                " ."
            };
            out.push_str(glyph);
        }
        out.push_str("|\r\n");
    }

    out.push('+');
    out.push_str(&"--".repeat(width as usize));
    out.push_str("+\r\n");

    let next: Vec<&str> = game.next_queue().map(|p| p.kind().as_str()).collect();
    out.push_str(&format!("next: {}\r\n", next.join(" ")));
    if game.is_game_over() {
        out.push_str("GAME OVER\r\n");
    }
    out
}
