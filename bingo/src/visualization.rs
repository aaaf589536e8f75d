use crate::{GameSession, BOARD_CELLS, BOARD_SIDE};

/// Characters of the keyword shown per cell.
const KEYWORD_WIDTH: usize = 10;
// Index (2) + marker (2) + keyword + padding (1)
const CELL_WIDTH: usize = 2 + 2 + KEYWORD_WIDTH + 1;

/// Renders the board as a boxed 5x5 text grid.
///
/// Each cell shows its index, the team that claimed it (or `*` plus the team
/// for cells on the winning line), and the start of its keyword. Cells
/// missing from a short board are left blank.
pub fn visualize_board(session: &GameSession) -> String {
    let winning_cells = session.win().map(|win| win.line.as_set());
    let horizontal = "─".repeat(CELL_WIDTH);
    let border = |left: &str, mid: &str, right: &str| {
        let mut line = String::from(left);
        for col in 0..BOARD_SIDE {
            if col > 0 {
                line += mid;
            }
            line += &horizontal;
        }
        line += right;
        line
    };

    let mut result = border("╭", "┬", "╮");
    for row in 0..BOARD_SIDE {
        result += "\n│";
        for col in 0..BOARD_SIDE {
            let index = row * BOARD_SIDE + col;
            let cell = match session.board().get(index) {
                Some(question) => {
                    let marker = match session.assignment().get(index) {
                        Some(team) if winning_cells.is_some_and(|w| w.contains(index)) => {
                            format!("*{}", team.letter())
                        }
                        Some(team) => format!(" {}", team.letter()),
                        None => String::from("  "),
                    };
                    let keyword: String = question.keyword.chars().take(KEYWORD_WIDTH).collect();
                    format!("{:>2}{} {:<width$}", index, marker, keyword, width = KEYWORD_WIDTH)
                }
                None => " ".repeat(CELL_WIDTH),
            };
            result += &cell;
            result += "│";
        }
        if row + 1 < BOARD_SIDE {
            result += "\n";
            result += &border("├", "┼", "┤");
        }
    }
    result += "\n";
    result += &border("╰", "┴", "╯");

    let claimed = session.assignment().len();
    result += &format!("\n{} of {} cells claimed", claimed, session.board().len().min(BOARD_CELLS));
    if let Some(win) = session.win() {
        result += &format!(", {} won with {}", win.team, win.line);
    }
    result
}
