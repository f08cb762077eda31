use super::coords::Coord;

/// 四个方向，循环顺序为 上 → 右 → 下 → 左
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction4 {
    Up,
    Right,
    Down,
    Left,
}

impl Direction4 {
    /// 按循环顺序排列的全部方向
    pub const ALL: [Direction4; 4] = [
        Direction4::Up,
        Direction4::Right,
        Direction4::Down,
        Direction4::Left,
    ];

    fn index(self) -> usize {
        match self {
            Direction4::Up => 0,
            Direction4::Right => 1,
            Direction4::Down => 2,
            Direction4::Left => 3,
        }
    }

    fn nth(self, offset: usize) -> Self {
        Self::ALL[(self.index() + offset) % Self::ALL.len()]
    }

    /// 单位位移 (dx, dy)
    pub fn delta(self) -> Coord {
        match self {
            Direction4::Up => (0, -1),
            Direction4::Right => (1, 0),
            Direction4::Down => (0, 1),
            Direction4::Left => (-1, 0),
        }
    }

    /// 顺时针旋转 90 度
    pub fn cw(self) -> Self {
        self.nth(1)
    }

    /// 逆时针旋转 90 度
    pub fn ccw(self) -> Self {
        self.nth(3)
    }

    pub fn opposite(self) -> Self {
        self.nth(2)
    }

    /// 沿该方向移动 n 步
    pub fn apply(self, (x, y): Coord, n: i64) -> Coord {
        let (dx, dy) = self.delta();
        (x + dx * n, y + dy * n)
    }

    /// 沿该方向移动一步
    pub fn step(self, coord: Coord) -> Coord {
        self.apply(coord, 1)
    }
}
