use crate::error::{MazeError, Result};
use crate::maze::maze::Maze;
use std::fs::File;
use std::io::{BufReader, Read};

/// Parse a maze layout file
pub fn parse_maze(path: &str) -> Result<Maze> {
    let file_access = |source| MazeError::FileAccess {
        path: path.to_string(),
        source,
    };

    let file = File::open(path).map_err(file_access)?;
    let mut reader = BufReader::with_capacity(64 * 1024, file);
    let mut src = String::new();
    reader.read_to_string(&mut src).map_err(file_access)?;

    parse_maze_from_str(&src)
}

/// Parse a maze layout from an in-memory string.
///
/// The first line holds `width length`; each following line is one y row of
/// `width` tokens, 1 = open and 0 = blocked. Blank lines are skipped.
pub fn parse_maze_from_str(src: &str) -> Result<Maze> {
    let mut lines = src
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_no, header) = lines
        .next()
        .ok_or_else(|| MazeError::parse(1, "missing `width length` header"))?;
    let (width, length) = parse_header(header_no, header)?;

    // grows with the rows actually read, never from the header alone
    let mut rows: Vec<bool> = Vec::new();
    let mut last_line = header_no;
    for y in 0..length {
        let (line_no, line) = lines.next().ok_or_else(|| {
            MazeError::parse(
                last_line + 1,
                format!("expected {} rows, found {}", length, y),
            )
        })?;
        last_line = line_no;

        let mut count = 0usize;
        for token in line.split_whitespace() {
            if count == width {
                return Err(MazeError::parse(
                    line_no,
                    format!("expected {} tokens, found more", width),
                ));
            }
            rows.push(match token {
                "1" => true,
                "0" => false,
                other => {
                    return Err(MazeError::parse(
                        line_no,
                        format!("invalid token `{}`, expected 0 or 1", other),
                    ))
                }
            });
            count += 1;
        }
        if count != width {
            return Err(MazeError::parse(
                line_no,
                format!("expected {} tokens, found {}", width, count),
            ));
        }
    }

    if let Some((line_no, _)) = lines.next() {
        return Err(MazeError::parse(
            line_no,
            format!("unexpected row after {} rows", length),
        ));
    }

    // file rows are y, storage is x-outer
    let walls = (0..rows.len())
        .map(|i| rows[(i % length) * width + i / length])
        .collect();
    Maze::from_flat(walls, width, length)
}

fn parse_header(line_no: usize, header: &str) -> Result<(usize, usize)> {
    let mut parts = header.split_whitespace();
    let mut dimension = |name: &str| -> Result<usize> {
        let token = parts
            .next()
            .ok_or_else(|| MazeError::parse(line_no, format!("missing {} in header", name)))?;
        match token.parse::<i32>() {
            Ok(value) if value > 0 => Ok(value as usize),
            _ => Err(MazeError::parse(
                line_no,
                format!("invalid {} `{}`, expected a positive integer", name, token),
            )),
        }
    };

    let width = dimension("width")?;
    let length = dimension("length")?;
    if parts.next().is_some() {
        return Err(MazeError::parse(line_no, "header has more than two values"));
    }
    Ok((width, length))
}
