use std::io::Write;

mod encoder;

use encoder::Encoder;

use crate::{
    error::Error,
    image::{
        transformer::{grayscale, invert, Transformation},
        Image, ImageWriter,
    },
};

pub struct PnmImageWriter<'a, T: Write> {
    writer: T,
    image: &'a Image,
    transformation: Transformation,
}

impl<'a, T: Write> PnmImageWriter<'a, T> {
    pub fn new(writer: T, image: &'a Image, transformation: Transformation) -> Self {
        Self {
            writer,
            image,
            transformation,
        }
    }
}

impl<T: Write> ImageWriter for PnmImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        let mut encoder = Encoder::new(&mut self.writer);
        let result = match self.transformation {
            Transformation::Mirror => encoder.encode_color(self.image),
            Transformation::Invert => encoder.encode_color(&invert(self.image)),
            Transformation::Grayscale => encoder.encode_gray(&grayscale(self.image)),
            Transformation::Stretch => encoder.encode_stretched(self.image),
        };
        result.map_err(Error::FailedToWriteImageData)?;
        self.writer.flush().map_err(Error::FailedToWriteImageData)
    }
}
