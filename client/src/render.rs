use common::games::tictactoe::{Board, Mark, Position, SessionPhase, SessionSnapshot, WinLine, BOARD_SIZE};

pub fn render(snapshot: &SessionSnapshot, show_coordinates: bool) -> String {
    let mut lines = Vec::new();

    if snapshot.phase != SessionPhase::Setup {
        lines.push(format!(
            "{} (X) vs {} (O)",
            snapshot.player_names.x, snapshot.player_names.o
        ));
        lines.push(String::new());
        lines.extend(render_board(&snapshot.board, snapshot.win_line, show_coordinates));
        lines.push(String::new());
    }
    lines.push(status_line(snapshot));

    lines.join("\n")
}

fn render_board(board: &Board, win_line: Option<WinLine>, show_coordinates: bool) -> Vec<String> {
    let highlighted: Vec<Position> = win_line.map(|line| line.cells().to_vec()).unwrap_or_default();
    let margin = if show_coordinates { "  " } else { "" };
    let mut lines = Vec::new();

    if show_coordinates {
        let header: String = (0..BOARD_SIZE).map(|col| format!("   {}", col)).collect();
        lines.push(header);
    }

    for (row, cells) in board.rows().iter().enumerate() {
        if row > 0 {
            lines.push(format!("{}{}", margin, ["---"; BOARD_SIZE].join("+")));
        }
        let rendered: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, &mark)| {
                let symbol = mark.symbol();
                if highlighted.contains(&Position::new(row, col)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        let label = if show_coordinates { format!("{} ", row) } else { String::new() };
        lines.push(format!("{}{}", label, rendered.join("|")));
    }

    lines
}

fn status_line(snapshot: &SessionSnapshot) -> String {
    let current = snapshot.current_mark;
    let name = snapshot.player_names.name_of(current);

    match snapshot.phase {
        SessionPhase::Setup => "Choose a mode: 'pvp' or 'bot'".to_string(),
        SessionPhase::InProgress if snapshot.bot_thinking => format!("{} is thinking...", name),
        SessionPhase::InProgress => {
            let remaining = match current {
                Mark::X => snapshot.remaining_x,
                _ => snapshot.remaining_o,
            };
            format!("{} ({}) to move, {:.1}s left", name, current, remaining.unwrap_or(0.0))
        }
        SessionPhase::WinPending => format!("{} got three in a row!", name),
        SessionPhase::Terminal => format!(
            "{}\nType 'again' to play again or 'menu' to change mode",
            snapshot.message.as_deref().unwrap_or("Game over")
        ),
    }
}
