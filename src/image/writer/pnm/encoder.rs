use std::fmt::Display;
use std::io;
use std::io::Write;

use crate::image::{Dimensions, GrayImage, Image, MAX_SAMPLE_VALUE};

const PIXMAP_MAGIC: &str = "P3";
const GRAYMAP_MAGIC: &str = "P2";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PnmFormat {
    Pixmap,
    Graymap,
}

impl PnmFormat {
    fn magic(&self) -> &'static str {
        match self {
            Self::Pixmap => PIXMAP_MAGIC,
            Self::Graymap => GRAYMAP_MAGIC,
        }
    }
}

impl Display for PnmFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pixmap => write!(f, "Plain Pixmap"),
            Self::Graymap => write!(f, "Plain Graymap"),
        }
    }
}

/// Writes plain (ASCII) PNM images.
///
/// All samples are emitted from the last stored index down to index 0,
/// which turns the bottom-up container rows into top-down output rows.
pub struct Encoder<'a, T> {
    writer: &'a mut T,
}

impl<'a, T: Write> Encoder<'a, T> {
    pub fn new(writer: &'a mut T) -> Encoder<'a, T> {
        Encoder { writer }
    }

    pub fn encode_color(&mut self, image: &Image) -> io::Result<()> {
        let dimensions = image.dimensions();
        self.write_header(PnmFormat::Pixmap, dimensions)?;
        let row_length = dimensions.row_length();
        for (index, sample) in image.samples().iter().enumerate().rev() {
            // the break precedes the sample, so index 0 opens a line of its own
            if index % row_length == 0 {
                self.writer.write_all(b"\n")?;
            }
            write!(self.writer, "{} ", sample)?;
        }
        Ok(())
    }

    pub fn encode_gray(&mut self, image: &GrayImage) -> io::Result<()> {
        let dimensions = image.dimensions();
        self.write_header(PnmFormat::Graymap, dimensions)?;
        let row_length = dimensions.width() as usize;
        for (index, sample) in image.samples().iter().enumerate().rev() {
            write!(self.writer, "{} ", sample)?;
            if index % row_length == 0 {
                self.writer.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    pub fn encode_stretched(&mut self, image: &Image) -> io::Result<()> {
        self.write_header(PnmFormat::Pixmap, image.dimensions().stretched_vertically())?;
        let mut row = String::with_capacity(image.dimensions().row_length() * 4);
        for samples in image.rows_top_down() {
            for sample in samples.iter().rev() {
                row.push_str(&sample.to_string());
                row.push(' ');
            }
            row.push('\n');
            self.writer.write_all(row.as_bytes())?;
            self.writer.write_all(row.as_bytes())?;
            row.clear();
        }
        Ok(())
    }

    fn write_header(&mut self, format: PnmFormat, dimensions: Dimensions) -> io::Result<()> {
        log::debug!(
            "Writing {} header for {}x{}",
            format,
            dimensions.width(),
            dimensions.height()
        );
        write!(
            self.writer,
            "{}\n{} {}\n{}\n",
            format.magic(),
            dimensions.width(),
            dimensions.height(),
            MAX_SAMPLE_VALUE
        )
    }
}
