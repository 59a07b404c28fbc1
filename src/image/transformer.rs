use clap::builder::PossibleValue;
use clap::ValueEnum;

use super::{GrayImage, Image, COLOR_CHANNELS, MAX_SAMPLE_VALUE};

/// The independent output branches computed from one decoded bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Transformation {
    Mirror,
    Invert,
    Grayscale,
    Stretch,
}

impl Transformation {
    pub const ALL: [Transformation; 4] = [
        Transformation::Mirror,
        Transformation::Invert,
        Transformation::Grayscale,
        Transformation::Stretch,
    ];

    pub fn file_suffix(&self) -> &'static str {
        match self {
            Self::Mirror => "",
            Self::Invert => "_inverted",
            Self::Grayscale => "_baw",
            Self::Stretch => "_stretched",
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::Grayscale => "pgm",
            Self::Mirror | Self::Invert | Self::Stretch => "ppm",
        }
    }
}

impl ValueEnum for Transformation {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Mirror => Some(PossibleValue::new("mirror")),
            Self::Invert => Some(PossibleValue::new("invert")),
            Self::Grayscale => Some(PossibleValue::new("grayscale")),
            Self::Stretch => Some(PossibleValue::new("stretch")),
        }
    }
}

pub fn invert(image: &Image) -> Image {
    let samples = image
        .samples()
        .iter()
        .map(|&sample| MAX_SAMPLE_VALUE.abs_diff(sample))
        .collect();
    Image::new(image.dimensions(), samples)
}

/// Averages every triple in container order with truncating division.
pub fn grayscale(image: &Image) -> GrayImage {
    let dimensions = image.dimensions();
    let mut samples = Vec::with_capacity(dimensions.pixel_count());
    for triple in image.samples().chunks_exact(COLOR_CHANNELS) {
        let sum: u16 = triple.iter().map(|&sample| sample as u16).sum();
        samples.push((sum / COLOR_CHANNELS as u16) as u8);
    }
    GrayImage::new(dimensions, samples)
}
