use glam::Vec2;

use crate::Scene;

pub type Index2 = [usize; 2];

/// Stores values on a 2D lattice on the coordinates \[0,0\] - \[w-1, h-1\].
///
/// Mostly used to sample a [`Scene`]'s distance field for display.
pub struct Grid2<T = f32> {
    size: Index2,
    data: Vec<T>,
}

impl<T> Grid2<T> {
    /// flat data, row by row
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn size(&self) -> Index2 {
        self.size
    }
}

impl<T> std::ops::Index<Index2> for Grid2<T> {
    type Output = T;

    #[inline]
    fn index(&self, p: Index2) -> &Self::Output {
        debug_assert!(p[0] < self.size[0]);
        debug_assert!(p[1] < self.size[1]);
        &self.data[p[0] + self.size[0] * p[1]]
    }
}

impl<T> std::ops::IndexMut<Index2> for Grid2<T> {
    #[inline]
    fn index_mut(&mut self, p: Index2) -> &mut Self::Output {
        debug_assert!(p[0] < self.size[0]);
        debug_assert!(p[1] < self.size[1]);
        &mut self.data[p[0] + self.size[0] * p[1]]
    }
}

impl<T: std::cmp::PartialEq> std::cmp::PartialEq for Grid2<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.data == other.data
    }
}

impl<T: Copy + Default> Grid2<T> {
    pub fn new(size: Index2) -> Self {
        Self {
            size,
            data: vec![T::default(); size[0] * size[1]],
        }
    }

    /// Set the grid values using the given function.
    ///
    /// Will run synchronously regardless of `with_rayon` feature availability.
    pub fn set_sync(&mut self, mut f: impl FnMut(Index2) -> T) {
        let mut index = 0;
        for y in 0..self.size[1] {
            for x in 0..self.size[0] {
                self.data[index] = f([x, y]);
                index += 1;
            }
        }
    }

    /// Set the grid values using the given function.
    #[cfg(not(feature = "with_rayon"))]
    pub fn set(&mut self, f: impl Fn(Index2) -> T + Send + Sync) {
        self.set_sync(f);
    }

    /// Set the grid values using the given function, one row per task.
    #[cfg(feature = "with_rayon")]
    pub fn set(&mut self, f: impl Fn(Index2) -> T + Send + Sync)
    where
        T: Send,
    {
        use rayon::prelude::*;

        let w = self.size[0];
        if w == 0 {
            return;
        }
        self.data.par_chunks_mut(w).enumerate().for_each(|(y, row)| {
            for (x, value) in row.iter_mut().enumerate() {
                *value = f([x, y]);
            }
        });
    }
}

impl Grid2<f32> {
    /// Samples `scene.min_distance` at `origin + spacing * [x, y]`.
    pub fn from_scene(scene: &Scene, origin: Vec2, spacing: f32, size: Index2) -> Self {
        let mut grid = Self::new(size);
        grid.set(|[x, y]| {
            let pos = origin + spacing * Vec2::new(x as f32, y as f32);
            scene.min_distance(pos)
        });
        grid
    }

    /// Cells that lie inside or on a shape, as a flat row-major mask.
    pub fn inside_mask(&self) -> Vec<bool> {
        self.data.iter().map(|&d| d <= 0.0).collect()
    }
}
