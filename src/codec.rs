/*!
 * # Code compact d'un labyrinthe
 *
 * Un labyrinthe se transmet sous forme d'une chaîne courte, à la manière du
 * RadarView :
 * - 2 octets `rows` puis 2 octets `cols` (little endian) ;
 * - 2 bits par cellule, ligne par ligne : bit 1 = passage à l'est,
 *   bit 0 = passage au sud, 4 cellules par octet, poids fort en premier ;
 * - le tout écrit avec l'alphabet `a-z A-Z 0-9 + /`, sans padding.
 *
 * Les murs nord et ouest se déduisent des voisins, la grille étant symétrique.
 */

use byteorder::{ByteOrder, LittleEndian};

use crate::cell::Coord;
use crate::direction::Direction;
use crate::error::MazeError;
use crate::grid::Grid;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789+/";
const HEADER_LEN: usize = 4;
const EAST_BIT: u8 = 0b10;
const SOUTH_BIT: u8 = 0b01;

/// Encode la grille en code texte.
///
/// # Erreurs
///
/// `DimensionsTooLarge` si une dimension dépasse `u16::MAX`.
pub fn encode_maze(grid: &Grid) -> Result<String, MazeError> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let (Ok(rows16), Ok(cols16)) = (u16::try_from(rows), u16::try_from(cols)) else {
        return Err(MazeError::DimensionsTooLarge { rows, cols });
    };

    let mut bytes = vec![0u8; HEADER_LEN + grid.cell_count().div_ceil(4)];
    LittleEndian::write_u16(&mut bytes[0..2], rows16);
    LittleEndian::write_u16(&mut bytes[2..4], cols16);

    for (i, coord) in grid.coords().enumerate() {
        let Some(cell) = grid.cell(&coord) else {
            continue;
        };
        let mut bits = 0u8;
        if cell.walls.is_open(Direction::East) {
            bits |= EAST_BIT;
        }
        if cell.walls.is_open(Direction::South) {
            bits |= SOUTH_BIT;
        }
        let shift = 6 - 2 * (i % 4);
        bytes[HEADER_LEN + i / 4] |= bits << shift;
    }

    Ok(encode(&bytes))
}

/// Reconstruit une grille à partir de son code. Toutes les cellules sont `NotVisited`.
///
/// # Erreurs
///
/// `InvalidMazeCode` si le texte est mal formé, tronqué, ou ouvre un passage
/// vers l'extérieur de la grille.
pub fn decode_maze(code: &str) -> Result<Grid, MazeError> {
    let bytes = decode(code.trim())?;
    if bytes.len() < HEADER_LEN {
        return Err(MazeError::InvalidMazeCode(format!(
            "{} bytes received, header needs {}",
            bytes.len(),
            HEADER_LEN
        )));
    }
    let rows = LittleEndian::read_u16(&bytes[0..2]) as usize;
    let cols = LittleEndian::read_u16(&bytes[2..4]) as usize;
    if rows == 0 || cols == 0 {
        return Err(MazeError::InvalidMazeCode(format!(
            "empty maze {}x{}",
            rows, cols
        )));
    }

    let expected = HEADER_LEN + (rows * cols).div_ceil(4);
    if bytes.len() != expected {
        return Err(MazeError::InvalidMazeCode(format!(
            "{} bytes received for a {}x{} maze, expected {}",
            bytes.len(),
            rows,
            cols,
            expected
        )));
    }

    let mut grid = Grid::new(rows, cols)?;
    for i in 0..rows * cols {
        let coord = Coord::new(i / cols, i % cols);
        let shift = 6 - 2 * (i % 4);
        let bits = (bytes[HEADER_LEN + i / 4] >> shift) & 0b11;

        for (bit, dir) in [(EAST_BIT, Direction::East), (SOUTH_BIT, Direction::South)] {
            if bits & bit == 0 {
                continue;
            }
            let next = coord
                .neighbor(dir)
                .filter(|next| grid.contains(next))
                .ok_or_else(|| {
                    MazeError::InvalidMazeCode(format!(
                        "passage {:?} from {} leaves the grid",
                        dir, coord
                    ))
                })?;
            grid.open_passage(&coord, &next)?;
        }
    }

    Ok(grid)
}

/// Texte `a-z A-Z 0-9 + /` : 4 caractères par groupe de 3 octets, 2 ou 3
/// pour le dernier groupe incomplet.
fn encode(data: &[u8]) -> String {
    let mut encoded = String::with_capacity(data.len().div_ceil(3) * 4);
    for chunk in data.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);
        let sextets = [
            b0 >> 2,
            (b0 & 0x03) << 4 | b1 >> 4,
            (b1 & 0x0F) << 2 | b2 >> 6,
            b2 & 0x3F,
        ];
        for &sextet in &sextets[..chunk.len() + 1] {
            encoded.push(ALPHABET[sextet as usize] as char);
        }
    }
    encoded
}

fn sextet(ch: u8, pos: usize) -> Result<u8, MazeError> {
    ALPHABET
        .iter()
        .position(|&a| a == ch)
        .map(|ind| ind as u8)
        .ok_or_else(|| MazeError::InvalidMazeCode(format!("invalid character at position {}", pos)))
}

fn decode(encoded: &str) -> Result<Vec<u8>, MazeError> {
    let input = encoded.as_bytes();
    if input.len() % 4 == 1 {
        return Err(MazeError::InvalidMazeCode(format!(
            "length {} cannot come from the encoder",
            input.len()
        )));
    }

    let mut decoded = Vec::with_capacity(input.len() * 3 / 4);
    for (ind, chunk) in input.chunks(4).enumerate() {
        let mut group = [0u8; 4];
        for (j, &ch) in chunk.iter().enumerate() {
            group[j] = sextet(ch, ind * 4 + j)?;
        }
        let bytes = [
            group[0] << 2 | group[1] >> 4,
            group[1] << 4 | group[2] >> 2,
            group[2] << 6 | group[3],
        ];
        decoded.extend_from_slice(&bytes[..chunk.len() - 1]);
    }

    Ok(decoded)
}
