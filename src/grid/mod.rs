//! 网格工具：坐标网格解析、邻域枚举和四方向旋转

pub mod coords;
pub mod direction;

pub use coords::{
    adjacent_4, adjacent_8, format_coords_hash, parse_coords_hash, parse_coords_int,
    print_coords_hash, Coord, GridError, MARKER,
};
pub use direction::Direction4;
