pub mod reader;
pub mod transformer;
pub mod writer;

pub const COLOR_CHANNELS: usize = 3;
pub const MAX_SAMPLE_VALUE: u8 = 255;

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<Image>;
}

pub trait ImageWriter {
    fn write_image(&mut self) -> crate::Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    width: u16,
    height: u16,
}

impl Dimensions {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn sample_count(&self) -> usize {
        self.pixel_count() * COLOR_CHANNELS
    }

    /// number of samples in one scanline of a color image
    pub fn row_length(&self) -> usize {
        self.width as usize * COLOR_CHANNELS
    }

    /// Doubles the height; only defined for heights up to `u16::MAX / 2`.
    pub fn stretched_vertically(&self) -> Self {
        debug_assert!(
            self.height <= u16::MAX / 2,
            "height {} cannot be doubled",
            self.height
        );
        Self {
            width: self.width,
            height: self.height * 2,
        }
    }
}

/// RGB samples in container order: the first stored row is the
/// visually lowest one.
pub struct Image {
    dimensions: Dimensions,
    samples: Vec<u8>,
}

impl Image {
    pub fn new(dimensions: Dimensions, samples: Vec<u8>) -> Self {
        debug_assert_eq!(
            samples.len(),
            dimensions.sample_count(),
            "sample count does not match {}x{}",
            dimensions.width,
            dimensions.height
        );
        Self {
            dimensions,
            samples,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Scanlines from the visual top row down to the bottom row.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[u8]> {
        self.samples
            .chunks_exact(self.dimensions.row_length())
            .rev()
    }
}

/// One averaged sample per pixel, same row order as the source [`Image`].
pub struct GrayImage {
    dimensions: Dimensions,
    samples: Vec<u8>,
}

impl GrayImage {
    pub fn new(dimensions: Dimensions, samples: Vec<u8>) -> Self {
        debug_assert_eq!(samples.len(), dimensions.pixel_count());
        Self {
            dimensions,
            samples,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }
}

#[cfg(test)]
mod test {
    use super::{Dimensions, Image};

    #[rustfmt::skip]
    const BOTTOM_UP_SAMPLES: &[u8] = &[
        70, 80, 90, 100, 110, 120,
        10, 20, 30,  40,  50,  60,
    ];

    #[test]
    fn rows_top_down_reverses_storage_order() {
        let image = Image::new(Dimensions::new(2, 2), Vec::from(BOTTOM_UP_SAMPLES));
        let rows: Vec<&[u8]> = image.rows_top_down().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[10, 20, 30, 40, 50, 60]);
        assert_eq!(rows[1], &[70, 80, 90, 100, 110, 120]);
    }

    #[test]
    fn dimension_counts() {
        let dimensions = Dimensions::new(100, 7);
        assert_eq!(dimensions.pixel_count(), 700);
        assert_eq!(dimensions.sample_count(), 2100);
        assert_eq!(dimensions.row_length(), 300);
    }

    #[test]
    fn stretching_doubles_height_only() {
        let stretched = Dimensions::new(5, 9).stretched_vertically();
        assert_eq!(stretched, Dimensions::new(5, 18));
    }

    #[test]
    fn largest_stretchable_height() {
        let stretched = Dimensions::new(1, u16::MAX / 2).stretched_vertically();
        assert_eq!(stretched.height(), u16::MAX - 1);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "cannot be doubled")]
    fn height_too_large_to_stretch() {
        Dimensions::new(1, u16::MAX / 2 + 1).stretched_vertically();
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "sample count does not match")]
    fn partial_row_is_rejected() {
        Image::new(Dimensions::new(2, 2), Vec::from(&BOTTOM_UP_SAMPLES[..10]));
    }
}
