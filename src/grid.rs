//! Cloth mesh: a particle grid with structural, shear and bend springs.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::ClothParticle;
use crate::spring::{Spring, SpringKind};
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Every `PIN_STRIDE`-th particle of the top row starts pinned.
pub const PIN_STRIDE: usize = 5;

/// A rectangular cloth centered at the origin in the z = 0 plane.
///
/// `cols` and `rows` count cells, so the mesh has `(cols + 1) * (rows + 1)`
/// particles. The particle at (`col`, `row`) has index
/// `row * (cols + 1) + col`; row 0 is the top edge.
#[derive(Clone, Debug)]
pub struct ClothMesh<F: Float> {
    particles: AllocVec<ClothParticle<F>>,
    springs: AllocVec<Spring<F>>,
    cols: usize,
    rows: usize,
    width: F,
    height: F,
    /// Transient wind acceleration, decayed by the solver every step.
    pub wind: Vec3<F>,
}

impl<F: Float> ClothMesh<F> {
    /// Build the grid and its springs.
    ///
    /// Creates 4 spring families:
    /// - Structural: horizontal (rest = width/cols) and vertical (rest = height/rows)
    /// - Shear: both diagonals of every cell
    /// - Bend: skip-one horizontal and vertical
    pub fn new(width: F, height: F, cols: usize, rows: usize) -> Result<Self, PhysicsError> {
        if cols == 0 || rows == 0 {
            return Err(PhysicsError::InvalidGridDimensions { cols, rows });
        }
        if !width.is_positive() || !height.is_positive() {
            return Err(PhysicsError::InvalidClothSize);
        }

        let mut particles = AllocVec::with_capacity((cols + 1) * (rows + 1));
        for row in 0..=rows {
            for col in 0..=cols {
                let u = F::from_usize(col) / F::from_usize(cols);
                let v = F::from_usize(row) / F::from_usize(rows);
                let x = (u - F::half()) * width;
                let y = (F::half() - v) * height;
                let pinned = row == 0 && col % PIN_STRIDE == 0;
                particles.push(ClothParticle::new(Vec3::new(x, y, F::zero()), pinned));
            }
        }

        let springs = build_springs(width, height, cols, rows);
        log::debug!(
            "built {}x{} cloth: {} particles, {} springs",
            cols,
            rows,
            particles.len(),
            springs.len()
        );

        Ok(ClothMesh {
            particles,
            springs,
            cols,
            rows,
            width,
            height,
            wind: Vec3::zero(),
        })
    }

    /// Index of the particle at (`col`, `row`), or `None` off the grid.
    pub fn particle_index(&self, col: usize, row: usize) -> Option<usize> {
        if col > self.cols || row > self.rows {
            return None;
        }
        Some(row * (self.cols + 1) + col)
    }

    /// Grid coordinates `(col, row)` of a particle index.
    pub fn grid_coords(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.particles.len() {
            return None;
        }
        Some((index % (self.cols + 1), index / (self.cols + 1)))
    }

    /// Restore every particle to its construction state and drop the wind.
    pub fn reset(&mut self) {
        for p in self.particles.iter_mut() {
            p.reset();
        }
        self.wind = Vec3::zero();
        log::debug!("cloth reset");
    }

    /// Accumulate a gust. Successive calls superpose.
    pub fn add_wind(&mut self, force: Vec3<F>) {
        self.wind = self.wind + force;
    }

    /// Pin the particle at (`col`, `row`). Returns false off the grid.
    pub fn pin(&mut self, col: usize, row: usize) -> bool {
        match self.particle_index(col, row) {
            Some(idx) => {
                self.particles[idx].pin();
                true
            }
            None => false,
        }
    }

    pub fn unpin(&mut self, col: usize, row: usize) -> bool {
        match self.particle_index(col, row) {
            Some(idx) => {
                self.particles[idx].unpin();
                true
            }
            None => false,
        }
    }

    pub fn unpin_all(&mut self) {
        for p in self.particles.iter_mut() {
            p.unpin();
        }
    }

    pub fn is_pinned(&self, index: usize) -> bool {
        self.particles.get(index).map_or(false, |p| p.pinned)
    }

    /// Height of the particle closest to (`x`, `z`) in the horizontal plane.
    pub fn height_near(&self, x: F, z: F) -> Option<F> {
        let mut best: Option<(F, F)> = None;
        for p in &self.particles {
            let d = F::hypot(p.pos.x - x, p.pos.z - z);
            match best {
                Some((bd, _)) if d >= bd => {}
                _ => best = Some((d, p.pos.y)),
            }
        }
        best.map(|(_, y)| y)
    }

    /// Current positions in index order.
    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    pub fn particles(&self) -> &[ClothParticle<F>] {
        &self.particles
    }

    pub(crate) fn particles_mut(&mut self) -> &mut [ClothParticle<F>] {
        &mut self.particles
    }

    /// Split borrow for the relaxation loop.
    pub(crate) fn parts_mut(&mut self) -> (&mut [ClothParticle<F>], &[Spring<F>]) {
        (&mut self.particles, &self.springs)
    }

    pub fn particle(&self, index: usize) -> Option<&ClothParticle<F>> {
        self.particles.get(index)
    }

    pub fn particle_mut(&mut self, index: usize) -> Option<&mut ClothParticle<F>> {
        self.particles.get_mut(index)
    }

    pub fn springs(&self) -> &[Spring<F>] {
        &self.springs
    }

    pub fn springs_of_kind(&self, kind: SpringKind) -> impl Iterator<Item = &Spring<F>> {
        self.springs.iter().filter(move |s| s.kind == kind)
    }

    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
    pub fn width(&self) -> F { self.width }
    pub fn height(&self) -> F { self.height }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }
}

fn build_springs<F: Float>(width: F, height: F, cols: usize, rows: usize) -> AllocVec<Spring<F>> {
    let idx = |col: usize, row: usize| row * (cols + 1) + col;
    let dx = width / F::from_usize(cols);
    let dy = height / F::from_usize(rows);
    let diag = F::hypot(dx, dy);
    let mut springs = AllocVec::new();

    // Structural
    for row in 0..=rows {
        for col in 0..=cols {
            if col < cols {
                springs.push(Spring::new(idx(col, row), idx(col + 1, row), dx, SpringKind::Structural));
            }
            if row < rows {
                springs.push(Spring::new(idx(col, row), idx(col, row + 1), dy, SpringKind::Structural));
            }
        }
    }

    // Shear
    for row in 0..rows {
        for col in 0..cols {
            springs.push(Spring::new(idx(col, row), idx(col + 1, row + 1), diag, SpringKind::Shear));
            springs.push(Spring::new(idx(col + 1, row), idx(col, row + 1), diag, SpringKind::Shear));
        }
    }

    // Bend: skip-one horizontal
    for row in 0..=rows {
        for col in 0..cols.saturating_sub(1) {
            springs.push(Spring::new(idx(col, row), idx(col + 2, row), dx * F::two(), SpringKind::Bend));
        }
    }

    // Bend: skip-one vertical
    for row in 0..rows.saturating_sub(1) {
        for col in 0..=cols {
            springs.push(Spring::new(idx(col, row), idx(col, row + 2), dy * F::two(), SpringKind::Bend));
        }
    }

    springs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh() -> ClothMesh<f32> {
        ClothMesh::new(2.0, 1.0, 4, 3).unwrap()
    }

    #[test]
    fn correct_particle_count() {
        assert_eq!(mesh().particle_count(), 20); // 5 * 4
    }

    #[test]
    fn spring_count_per_family() {
        let m = mesh(); // 4 cols, 3 rows of cells
        // Structural: 4*4 horizontal + 3*5 vertical = 31
        // Shear: 2*4*3 = 24
        // Bend: 4*3 horizontal + 5*2 vertical = 22
        assert_eq!(m.springs_of_kind(SpringKind::Structural).count(), 31);
        assert_eq!(m.springs_of_kind(SpringKind::Shear).count(), 24);
        assert_eq!(m.springs_of_kind(SpringKind::Bend).count(), 22);
        assert_eq!(m.spring_count(), 77);
    }

    #[test]
    fn single_cell_has_no_bend_springs() {
        let m: ClothMesh<f64> = ClothMesh::new(1.0, 1.0, 1, 1).unwrap();
        assert_eq!(m.springs_of_kind(SpringKind::Bend).count(), 0);
        assert_eq!(m.spring_count(), 6);
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert_eq!(
            ClothMesh::<f32>::new(1.0, 1.0, 0, 3).unwrap_err(),
            PhysicsError::InvalidGridDimensions { cols: 0, rows: 3 }
        );
        assert_eq!(ClothMesh::<f32>::new(0.0, 1.0, 2, 2).unwrap_err(), PhysicsError::InvalidClothSize);
        assert_eq!(ClothMesh::<f32>::new(1.0, -1.0, 2, 2).unwrap_err(), PhysicsError::InvalidClothSize);
    }

    #[test]
    fn grid_is_centered_top_row_up() {
        let m = mesh();
        let tl = m.particle(m.particle_index(0, 0).unwrap()).unwrap().pos;
        let br = m.particle(m.particle_index(4, 3).unwrap()).unwrap().pos;
        assert_eq!(tl, Vec3::new(-1.0, 0.5, 0.0));
        assert_eq!(br, Vec3::new(1.0, -0.5, 0.0));
    }

    #[test]
    fn index_and_coords_agree() {
        let m = mesh();
        assert_eq!(m.particle_index(2, 1), Some(7));
        assert_eq!(m.grid_coords(7), Some((2, 1)));
        assert_eq!(m.particle_index(5, 0), None);
        assert_eq!(m.particle_index(0, 4), None);
        assert_eq!(m.grid_coords(20), None);
    }

    #[test]
    fn top_row_pinned_at_stride() {
        let m: ClothMesh<f32> = ClothMesh::new(2.0, 2.0, 10, 4).unwrap();
        let pinned: AllocVec<usize> = (0..m.particle_count()).filter(|&i| m.is_pinned(i)).collect();
        assert_eq!(pinned, [0, 5, 10]);
    }

    #[test]
    fn rest_lengths_match_rest_geometry() {
        let m: ClothMesh<f64> = ClothMesh::new(3.0, 2.0, 6, 5).unwrap();
        for s in m.springs() {
            let d = s.length(m.particles());
            assert!((d - s.rest_length).abs() < 1e-9, "{:?} rest {} actual {}", s.kind, s.rest_length, d);
        }
    }

    #[test]
    fn add_wind_accumulates() {
        let mut m = mesh();
        m.add_wind(Vec3::new(0.0, 0.0, 2.0));
        m.add_wind(Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(m.wind, Vec3::new(1.0, 0.0, 4.0));
    }

    #[test]
    fn height_near_picks_closest_column() {
        let m = mesh();
        assert_eq!(m.height_near(-0.9, 0.0), Some(0.5));
    }
}
