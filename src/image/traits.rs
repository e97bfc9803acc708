/// Read-only raster with row access.
///
/// Conversions only read through this trait, so any buffer layout with a
/// fixed row stride can be fed to the core without copying.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    /// Sample at (x, y). Panics when out of bounds, like slice indexing.
    #[inline]
    fn pixel(&self, x: usize, y: usize) -> Self::Pixel {
        self.row(y)[x]
    }
}
