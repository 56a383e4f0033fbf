
use crate::error::{Error, Result};
use log::{debug, trace};
use ndarray::{indices, Array2, ArrayBase, ArrayD, ArrayView1, ArrayViewMutD, Data, Dimension, Ix2, IxDyn, Zip};



/// The integer lattice of shape `dims`, stored as a coordinate table
/// with one row per cell and one column per axis.
/// Rows follow the row-major order of the cells,
/// so the table lines up with the iteration order of any
/// standard-layout array of shape `dims`.
#[derive(Clone, PartialEq, Debug)]
pub struct Grid {
    dims: Vec<usize>,
    coordinates: Array2<f64>,
}

impl Grid {

    /// Builds the coordinate table of every cell in `dims`,
    /// equivalent to a meshgrid of indices with the coordinate vector on the last axis.
    pub fn new(dims: &[usize]) -> Self {
        let cell_count: usize = dims.iter().product();
        let mut coordinates = Array2::zeros((cell_count, dims.len()));

        let cells = indices(IxDyn(dims)).into_iter();
        for (mut row, index) in coordinates.rows_mut().into_iter().zip(cells) {
            for (coordinate, &axis_index) in row.iter_mut().zip(index.slice()) {
                *coordinate = axis_index as f64;
            }
        }

        trace!("built grid {:?} with {} cells", dims, cell_count);
        Grid { dims: dims.to_vec(), coordinates }
    }

    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// The number of axes, which is also the required center length.
    #[inline]
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// The number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.coordinates.nrows()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The coordinate table, shaped `(len, rank)`.
    #[inline]
    pub fn coordinates(&self) -> &Array2<f64> {
        &self.coordinates
    }

    /// The euclidean distance from every cell to `center`, shaped like the grid.
    pub fn distance_field(&self, center: ArrayView1<'_, f64>) -> Result<ArrayD<f64>> {
        self.check_center_len(center.len())?;

        let distances: Vec<f64> = self.coordinates.rows().into_iter()
            .map(|cell| distance(cell, center))
            .collect();

        Ok(ArrayD::from_shape_vec(IxDyn(&self.dims), distances)?)
    }

    /// A mask shaped like the grid, with a one in every cell
    /// strictly closer to `center` than `eps` and a zero everywhere else.
    pub fn disc_mask(&self, center: ArrayView1<'_, f64>, eps: f64) -> Result<ArrayD<u8>> {
        self.check_center_len(center.len())?;

        let mut mask = ArrayD::zeros(IxDyn(&self.dims));
        self.rasterize_disc(center, eps, mask.view_mut());
        Ok(mask)
    }

    /// Writes the disc into `mask`, which must be in standard layout with the grid's shape.
    /// A cell exactly `eps` away stays outside, and a non-positive or NaN `eps` clears the mask.
    fn rasterize_disc(&self, center: ArrayView1<'_, f64>, eps: f64, mut mask: ArrayViewMutD<'_, u8>) {
        debug_assert_eq!(mask.shape(), self.dims.as_slice(), "Mask dimension mismatch");

        for (value, cell) in mask.iter_mut().zip(self.coordinates.rows()) {
            *value = if distance(cell, center) < eps { 1 } else { 0 };
        }
    }

    fn check_center_len(&self, found: usize) -> Result<()> {
        if found == self.rank() { Ok(()) }
        else { Err(Error::DimensionMismatch { expected: self.rank(), found }) }
    }
}


/// Rasterizes one disc of radius `eps` per row of `pos` over a grid of shape `dims`.
///
/// The result has shape `(pos.nrows(),) + dims`, and mask `i` belongs to center `i`.
/// Centers are not bounds-checked: a disc that leaves the grid is clipped,
/// and one that never touches it produces an all-zero mask.
///
/// Fails with [`Error::DimensionMismatch`] if the centers don't have `dims.len()` coordinates.
pub fn eps_ball<S>(dims: &[usize], pos: &ArrayBase<S, Ix2>, eps: f64) -> Result<ArrayD<u8>>
    where S: Data<Elem = f64>
{
    let grid = Grid::new(dims);
    grid.check_center_len(pos.ncols())?;

    let mut shape = Vec::with_capacity(dims.len() + 1);
    shape.push(pos.nrows());
    shape.extend_from_slice(dims);

    debug!("rasterizing {} discs of radius {} over {:?}", pos.nrows(), eps, dims);
    let mut masks = ArrayD::zeros(IxDyn(&shape));

    let rasterize = |mask, center| grid.rasterize_disc(center, eps, mask);

    let discs = Zip::from(masks.outer_iter_mut()).and(pos.rows());

    #[cfg(feature = "parallel")]
    discs.par_for_each(rasterize);

    #[cfg(not(feature = "parallel"))]
    discs.for_each(rasterize);

    Ok(masks)
}


#[inline]
fn distance(cell: ArrayView1<'_, f64>, center: ArrayView1<'_, f64>) -> f64 {
    let sqr_distance: f64 = cell.iter().zip(center.iter())
        .map(|(cell, center)| (cell - center) * (cell - center))
        .sum();

    sqr_distance.sqrt()
}
