use crate::{Backend, ByteSource, Error, RandomSource, Result, WordSource};

/// Expected share of cells hit when `n` uniform points land on `n` cells:
/// `1 - (1 - 1/n)^n`, which tends to `1 - 1/e`.
pub const UNIFORM_COVERAGE: f64 = 1.0 - 1.0 / core::f64::consts::E;

/// Largest grid [`NoiseMap::plot`] accepts, e.g. 4096 x 4096.
pub const MAX_NOISE_CELLS: usize = 1 << 24;

/// A diagnostic noise map: random points plotted on a `width` x `height` grid.
///
/// Plotting draws one point per cell, each as `x = draw(1, width)` and
/// `y = draw(1, height)`. A good generator scatters them evenly, so roughly
/// [`UNIFORM_COVERAGE`] of the cells end up hit. Clustering, stripes or an
/// empty last row/column show up in [`Self::coverage`] and [`Self::hits`].
///
/// Only the hit counts are kept; turning them into an image is left to the
/// caller.
///
/// # Example
/// ```
/// use alea::{Backend, NoiseMap, RandomSource};
///
/// let mut source = RandomSource::new();
/// let map = NoiseMap::plot(&mut source, Some(Backend::Mersenne), 64, 64).unwrap();
/// assert_eq!(map.plotted(), 64 * 64);
/// assert!(map.coverage() > 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseMap {
    width: u32,
    height: u32,
    cells: Vec<u32>,
}

impl NoiseMap {
    /// Plots `width * height` points drawn with `method` (or the active
    /// method).
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRange`] if a dimension is below 2 (an empty draw
    ///   range) or the grid has more than [`MAX_NOISE_CELLS`] cells. Nothing
    ///   is drawn in either case.
    /// - Any error from the draws themselves.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(source)))]
    pub fn plot<A, B, C>(
        source: &mut RandomSource<A, B, C>,
        method: Option<Backend>,
        width: u32,
        height: u32,
    ) -> Result<Self>
    where
        A: WordSource,
        B: WordSource,
        C: ByteSource,
    {
        if width < 2 || height < 2 {
            return Err(Error::invalid_range("noise map needs at least 2x2 cells"));
        }
        let cells = (width as usize)
            .checked_mul(height as usize)
            .filter(|&cells| cells <= MAX_NOISE_CELLS)
            .ok_or(Error::invalid_range("noise map has too many cells"))?;

        let mut map = Self {
            width,
            height,
            cells: vec![0; cells],
        };

        for _ in 0..map.cells.len() {
            let x = draw_axis(source, method, width)?;
            let y = draw_axis(source, method, height)?;
            map.cells[y * width as usize + x] += 1;
        }

        Ok(map)
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Points plotted at `(x, y)`, both 1-based. Out-of-grid coordinates
    /// read as zero.
    pub fn hits(&self, x: u32, y: u32) -> u32 {
        if x == 0 || y == 0 || x > self.width || y > self.height {
            return 0;
        }
        self.cells[(y - 1) as usize * self.width as usize + (x - 1) as usize]
    }

    /// Total points plotted.
    pub fn plotted(&self) -> u64 {
        self.cells.iter().map(|&c| u64::from(c)).sum()
    }

    /// Number of cells hit at least once.
    pub fn distinct(&self) -> usize {
        self.cells.iter().filter(|&&c| c > 0).count()
    }

    /// Share of cells hit at least once, in `[0, 1]`.
    pub fn coverage(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.distinct() as f64 / self.cells.len() as f64
    }
}

/// Draws a 1-based coordinate on an axis of length `len` and returns it as a
/// 0-based index.
fn draw_axis<A, B, C>(
    source: &mut RandomSource<A, B, C>,
    method: Option<Backend>,
    len: u32,
) -> Result<usize>
where
    A: WordSource,
    B: WordSource,
    C: ByteSource,
{
    let drawn = match method {
        Some(backend) => source.range_with(1, i64::from(len), backend)?,
        None => source.range(1, i64::from(len))?,
    };
    // Every backend returns a value in [1, len].
    Ok((drawn - 1) as usize)
}
