use cozy_chess::{BitBoard, Board, Color, Piece};

const LIGHT_SQUARES_MASK: u64 = 0x55AA55AA55AA55AA;

/// True when neither side can possibly deliver mate:
/// K v K, K+N v K, K+B v K, and K+B v K+B with bishops on the same colour.
pub fn has_insufficient_material(board: &Board) -> bool {
    let heavy = board.pieces(Piece::Pawn) | board.pieces(Piece::Rook) | board.pieces(Piece::Queen);
    if !heavy.is_empty() {
        return false;
    }

    let knights = board.pieces(Piece::Knight);
    let bishops = board.pieces(Piece::Bishop);
    let minors = |color: Color| {
        let side = board.colors(color);
        ((side & knights).len(), (side & bishops).len())
    };

    match (minors(Color::White), minors(Color::Black)) {
        ((0, 0), (0, 0)) => true,
        ((1, 0), (0, 0)) | ((0, 0), (1, 0)) => true,
        ((0, 1), (0, 0)) | ((0, 0), (0, 1)) => true,
        ((0, 1), (0, 1)) => {
            let light = BitBoard(LIGHT_SQUARES_MASK);
            let white_light = !(board.colors(Color::White) & bishops & light).is_empty();
            let black_light = !(board.colors(Color::Black) & bishops & light).is_empty();
            white_light == black_light
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(fen: &str) -> Board {
        fen.parse().unwrap()
    }

    #[test]
    fn test_bare_kings() {
        assert!(has_insufficient_material(&board("k7/8/8/8/8/8/8/K7 w - - 0 1")));
    }

    #[test]
    fn test_single_minor() {
        assert!(has_insufficient_material(&board("k7/8/8/8/8/8/8/KN6 w - - 0 1")));
        assert!(has_insufficient_material(&board("kb6/8/8/8/8/8/8/K7 w - - 0 1")));
    }

    #[test]
    fn test_same_colour_bishops() {
        // c1 and f8 are both dark squares
        assert!(has_insufficient_material(&board("k4b2/8/8/8/8/8/8/K1B5 w - - 0 1")));
        // c1 dark, c8 light
        assert!(!has_insufficient_material(&board("k1b5/8/8/8/8/8/8/K1B5 w - - 0 1")));
    }

    #[test]
    fn test_mating_material() {
        assert!(!has_insufficient_material(&board("k7/8/8/8/8/8/8/KNN5 w - - 0 1")));
        assert!(!has_insufficient_material(&board("k7/p7/8/8/8/8/8/K7 w - - 0 1")));
        assert!(!has_insufficient_material(&board("k7/8/8/8/8/8/8/KR6 w - - 0 1")));
        assert!(!has_insufficient_material(&Board::default()));
    }
}
