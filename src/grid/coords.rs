//! 坐标网格的解析与格式化

use std::collections::{HashMap, HashSet};

use thiserror::Error;

/// 网格坐标 (x, y)，x 为列，y 为行，向下为正
pub type Coord = (i64, i64);

/// 稀疏网格中的标记字符
pub const MARKER: char = '#';

/// 网格解析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// 稠密网格中出现了非数字字符
    #[error("({x}, {y}) 处的字符 {ch:?} 不是数字")]
    NotADigit { x: i64, y: i64, ch: char },
}

/// 解析数字网格，每个字符转换为 0-9 的整数
pub fn parse_coords_int(s: &str) -> Result<HashMap<Coord, u32>, GridError> {
    let mut coords = HashMap::new();
    for (y, line) in s.lines().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            let (x, y) = (x as i64, y as i64);
            let value = ch.to_digit(10).ok_or(GridError::NotADigit { x, y, ch })?;
            coords.insert((x, y), value);
        }
    }
    Ok(coords)
}

/// 解析稀疏网格，只记录 `#` 所在的坐标
pub fn parse_coords_hash(s: &str) -> HashSet<Coord> {
    s.lines()
        .enumerate()
        .flat_map(|(y, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, ch)| ch == MARKER)
                .map(move |(x, _)| (x as i64, y as i64))
        })
        .collect()
}

/// 把坐标集合按包围盒格式化为文本，空集合返回空字符串
pub fn format_coords_hash(coords: &HashSet<Coord>) -> String {
    let Some(&(first_x, first_y)) = coords.iter().next() else {
        return String::new();
    };

    let (mut min_x, mut max_x, mut min_y, mut max_y) = (first_x, first_x, first_y, first_y);
    for &(x, y) in coords {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    (min_y..=max_y)
        .map(|y| {
            (min_x..=max_x)
                .map(|x| if coords.contains(&(x, y)) { MARKER } else { ' ' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// 打印稀疏网格
pub fn print_coords_hash(coords: &HashSet<Coord>) {
    println!("{}", format_coords_hash(coords));
}

const OFFSETS_4: [Coord; 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

const OFFSETS_8: [Coord; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// 四邻域：上、右、下、左
pub fn adjacent_4(x: i64, y: i64) -> impl Iterator<Item = Coord> + Clone {
    OFFSETS_4.into_iter().map(move |(dx, dy)| (x + dx, y + dy))
}

/// 八邻域：按行优先遍历 -1..=1 的偏移，跳过中心
pub fn adjacent_8(x: i64, y: i64) -> impl Iterator<Item = Coord> + Clone {
    OFFSETS_8.into_iter().map(move |(dx, dy)| (x + dx, y + dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coords_int() {
        let grid = parse_coords_int("12\n34\n").unwrap();
        assert_eq!(grid.len(), 4);
        assert_eq!(grid[&(0, 0)], 1);
        assert_eq!(grid[&(1, 0)], 2);
        assert_eq!(grid[&(0, 1)], 3);
        assert_eq!(grid[&(1, 1)], 4);
    }

    #[test]
    fn test_parse_coords_int_rejects_non_digit() {
        let err = parse_coords_int("12\n3x").unwrap_err();
        assert_eq!(err, GridError::NotADigit { x: 1, y: 1, ch: 'x' });
    }

    #[test]
    fn test_parse_coords_hash() {
        let coords = parse_coords_hash(".#.\n#..\n");
        assert_eq!(coords, HashSet::from([(1, 0), (0, 1)]));
    }

    #[test]
    fn test_format_coords_hash_uses_bounding_box() {
        let coords = HashSet::from([(2, 5), (4, 5), (3, 6)]);
        assert_eq!(format_coords_hash(&coords), "# #\n # ");
    }

    #[test]
    fn test_format_coords_hash_empty() {
        assert_eq!(format_coords_hash(&HashSet::new()), "");
    }

    #[test]
    fn test_adjacent_4_order() {
        let got: Vec<_> = adjacent_4(5, 5).collect();
        assert_eq!(got, vec![(5, 4), (6, 5), (5, 6), (4, 5)]);
    }

    #[test]
    fn test_adjacent_8_order() {
        let got: Vec<_> = adjacent_8(0, 0).collect();
        assert_eq!(
            got,
            vec![
                (-1, -1),
                (0, -1),
                (1, -1),
                (-1, 0),
                (1, 0),
                (-1, 1),
                (0, 1),
                (1, 1)
            ]
        );
    }

    #[test]
    fn test_adjacent_iterators_restart() {
        let neighbors = adjacent_4(0, 0);
        assert_eq!(neighbors.clone().count(), 4);
        assert_eq!(neighbors.count(), 4);
    }
}
