use crate::index;

/// Integer cell coordinate inside a cubic grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VoxelPos {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl VoxelPos {
    #[inline]
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Packed linear key for a grid of side `size`.
    #[inline]
    pub const fn index(self, size: usize) -> usize {
        index(self.x, self.y, self.z, size)
    }

    /// Steps by a signed offset, returning `None` when any axis leaves `[0, size)`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, dz: i32, size: usize) -> Option<Self> {
        let step = |v: usize, d: i32| -> Option<usize> {
            let moved = v.checked_add_signed(d as isize)?;
            (moved < size).then_some(moved)
        };
        Some(Self {
            x: step(self.x, dx)?,
            y: step(self.y, dy)?,
            z: step(self.z, dz)?,
        })
    }
}

impl From<(usize, usize, usize)> for VoxelPos {
    fn from(value: (usize, usize, usize)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<VoxelPos> for (usize, usize, usize) {
    fn from(value: VoxelPos) -> Self {
        (value.x, value.y, value.z)
    }
}
