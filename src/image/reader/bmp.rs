use std::io::Read;

use super::super::{Dimensions, Image, ImageReader};
use crate::{error::Error, logger};

const SIGNATURE: &[u8; 2] = b"BM";
const WIDTH_OFFSET: usize = 18;
const HEIGHT_OFFSET: usize = 22;
/// every byte after offset 53 belongs to the pixel data
const HEADER_LENGTH: usize = 54;

const WIDTH_NAME: &str = "width";
const HEIGHT_NAME: &str = "height";

pub struct BmpImageReader<T: Read> {
    reader: T,
}

impl<T: Read> BmpImageReader<T> {
    pub fn new(reader: T) -> Self {
        Self { reader }
    }
}

impl<T: Read> ImageReader for BmpImageReader<T> {
    fn read_image(&mut self) -> crate::Result<Image> {
        let mut container = Vec::new();
        self.reader
            .read_to_end(&mut container)
            .map_err(Error::FailedToReadInputFile)?;
        decode_container(&container)
    }
}

/// Decodes an uncompressed 24-bit bitmap with a fixed 54 byte header.
///
/// Width and height are single signed header bytes, so only images of up
/// to 127x127 pixels can be represented. Samples are returned in container
/// order, i.e. bottom-up rows of blue, green, red triples.
pub fn decode_container(container: &[u8]) -> crate::Result<Image> {
    check_container_length(container)?;
    check_signature(container)?;
    logger::log_header(&container[..HEADER_LENGTH]);
    let width = parse_dimension(container[WIDTH_OFFSET], WIDTH_NAME)?;
    let height = parse_dimension(container[HEIGHT_OFFSET], HEIGHT_NAME)?;
    let dimensions = Dimensions::new(width, height);
    let samples = container[HEADER_LENGTH..]
        .iter()
        .map(|&byte| unsigned_sample(byte as i8))
        .collect::<Vec<u8>>();
    check_sample_count_matches_header(&samples, &dimensions)?;
    log::info!(
        "Decoded bitmap of {}x{} pixels ({} samples)",
        width,
        height,
        samples.len()
    );
    Ok(Image::new(dimensions, samples))
}

/// Recovers the 0..=255 range of a byte stored as two's complement.
pub fn unsigned_sample(byte: i8) -> u8 {
    if byte < 0 {
        (byte as i16 + 256) as u8
    } else {
        byte as u8
    }
}

fn check_container_length(container: &[u8]) -> crate::Result<()> {
    if container.len() < HEADER_LENGTH {
        return Err(Error::ContainerTooShort(container.len()));
    }
    Ok(())
}

fn check_signature(container: &[u8]) -> crate::Result<()> {
    if !container.starts_with(SIGNATURE) {
        return Err(Error::MissingBitmapSignature);
    }
    Ok(())
}

fn parse_dimension(byte: u8, name: &'static str) -> crate::Result<u16> {
    let value = byte as i8;
    if value <= 0 {
        return Err(Error::InvalidImageDimension(name, value));
    }
    Ok(value as u16)
}

fn check_sample_count_matches_header(
    samples: &[u8],
    dimensions: &Dimensions,
) -> crate::Result<()> {
    let expected = dimensions.sample_count();
    if samples.len() != expected {
        return Err(Error::MismatchOfSizeBetweenHeaderAndSamples {
            expected,
            actual: samples.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn build_container(width: u8, height: u8, samples: &[u8]) -> Vec<u8> {
    let mut container = vec![0u8; HEADER_LENGTH];
    container[..2].copy_from_slice(SIGNATURE);
    let file_size = (HEADER_LENGTH + samples.len()) as u32;
    container[2..6].copy_from_slice(&file_size.to_le_bytes());
    container[10] = HEADER_LENGTH as u8;
    container[14] = 40;
    container[WIDTH_OFFSET] = width;
    container[HEIGHT_OFFSET] = height;
    container[26] = 1;
    container[28] = 24;
    container.extend_from_slice(samples);
    container
}

#[cfg(test)]
mod test {
    use std::io::{self, Read};

    use super::{build_container, decode_container, unsigned_sample, BmpImageReader};
    use crate::{
        error::Error,
        image::{Dimensions, ImageReader},
    };

    /// Hands out the header, then fails.
    struct FailingReader {
        header: Vec<u8>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.header.is_empty() {
                return Err(io::Error::new(io::ErrorKind::Other, "device gone"));
            }
            let length = buf.len().min(self.header.len());
            buf[..length].copy_from_slice(&self.header[..length]);
            self.header.drain(..length);
            Ok(length)
        }
    }

    #[rustfmt::skip]
    const BOTTOM_UP_SAMPLES: &[u8] = &[
        70, 80, 90, 100, 110, 120,
        10, 20, 30,  40,  50,  60,
    ];

    #[test]
    fn decode_two_by_two() {
        let container = build_container(2, 2, BOTTOM_UP_SAMPLES);
        let image = decode_container(&container).unwrap();
        assert_eq!(image.dimensions(), Dimensions::new(2, 2));
        assert_eq!(image.samples(), BOTTOM_UP_SAMPLES);
    }

    #[test]
    fn decoded_sample_count_matches_dimensions() {
        let samples = vec![7u8; 5 * 3 * 3];
        let image = decode_container(&build_container(5, 3, &samples)).unwrap();
        let dimensions = image.dimensions();
        assert!(dimensions.width() > 0 && dimensions.height() > 0);
        assert_eq!(
            image.samples().len(),
            dimensions.width() as usize * dimensions.height() as usize * 3
        );
    }

    #[test]
    fn read_image_from_reader() {
        let container = build_container(2, 2, BOTTOM_UP_SAMPLES);
        let mut reader = BmpImageReader::new(container.as_slice());
        let image = reader.read_image().unwrap();
        assert_eq!(image.dimensions().height(), 2);
    }

    #[test]
    fn read_failure_yields_no_image() {
        let container = build_container(2, 2, BOTTOM_UP_SAMPLES);
        let mut reader = BmpImageReader::new(FailingReader {
            header: container[..20].to_vec(),
        });
        match reader.read_image() {
            Err(Error::FailedToReadInputFile(e)) => assert_eq!(e.kind(), io::ErrorKind::Other),
            Err(e) => panic!("Unexpected error: {}", e),
            Ok(_) => panic!("Read failure was not detected"),
        }
    }

    #[test]
    fn high_bit_samples_are_unsigned() {
        let samples = [0x80, 0xFF, 0x00];
        let image = decode_container(&build_container(1, 1, &samples)).unwrap();
        assert_eq!(image.samples(), &[128, 255, 0]);
    }

    #[test]
    fn signed_bytes_are_remapped() {
        assert_eq!(unsigned_sample(-1), 255);
        assert_eq!(unsigned_sample(-128), 128);
        assert_eq!(unsigned_sample(0), 0);
        assert_eq!(unsigned_sample(127), 127);
    }

    #[test]
    fn short_container() {
        if let Err(Error::ContainerTooShort(n)) = decode_container(b"BM too short") {
            assert_eq!(n, 12);
            return;
        }
        panic!("Truncated header not detected");
    }

    #[test]
    fn wrong_signature() {
        let mut container = build_container(1, 1, &[1, 2, 3]);
        container[0] = b'P';
        if let Err(Error::MissingBitmapSignature) = decode_container(&container) {
            return;
        }
        panic!("Missing signature not detected");
    }

    #[test]
    fn zero_width() {
        let container = build_container(0, 1, &[]);
        if let Err(Error::InvalidImageDimension(name, value)) = decode_container(&container) {
            assert_eq!(name, "width");
            assert_eq!(value, 0);
            return;
        }
        panic!("Zero width not detected");
    }

    #[test]
    fn height_with_sign_bit() {
        let container = build_container(1, 200, &[]);
        if let Err(Error::InvalidImageDimension(name, value)) = decode_container(&container) {
            assert_eq!(name, "height");
            assert_eq!(value, 200u8 as i8);
            return;
        }
        panic!("Height with sign bit not detected");
    }

    #[test]
    fn samples_do_not_fill_rows() {
        let container = build_container(2, 2, &BOTTOM_UP_SAMPLES[..10]);
        if let Err(Error::MismatchOfSizeBetweenHeaderAndSamples { expected, actual }) =
            decode_container(&container)
        {
            assert_eq!(expected, 12);
            assert_eq!(actual, 10);
            return;
        }
        panic!("Mismatch of size in header and actual samples was not detected!");
    }
}
