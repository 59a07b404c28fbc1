use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    InputFileNotFound(String),
    NoReadPermissionForInputFile(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    FailedToReadInputFile(std::io::Error),
    ContainerTooShort(usize),
    MissingBitmapSignature,
    InvalidImageDimension(&'static str, i8),
    MismatchOfSizeBetweenHeaderAndSamples { expected: usize, actual: usize },
    UnableToCreateOutputDirectory(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToWriteImageData(std::io::Error),
    FailedToWriteOutputFile(String, Box<Error>),
    FailedToWriteOutputs(Vec<Error>),
    EncodingJobAborted(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputFileNotFound(path) => {
                write!(f, "Input file '{}' not found", path)
            }
            Self::NoReadPermissionForInputFile(path) => {
                write!(
                    f,
                    "Unable to open file '{}' for reading. Permission denied.",
                    path
                )
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::FailedToReadInputFile(error) => {
                write!(f, "Failed to read bitmap container: {}", error)
            }
            Self::ContainerTooShort(length) => {
                write!(
                    f,
                    "Bitmap container is too short. Expected at least 54 bytes, but got {}.",
                    length
                )
            }
            Self::MissingBitmapSignature => {
                write!(f, "Bitmap container does not start with 'BM'")
            }
            Self::InvalidImageDimension(name, value) => {
                write!(
                    f,
                    "Image {} must be in range 1..=127, but header contains {}",
                    name, value
                )
            }
            Self::MismatchOfSizeBetweenHeaderAndSamples { expected, actual } => {
                write!(
                    f,
                    "Number of samples does not match the size provided in header. Expected {}, but got {}.",
                    expected, actual
                )
            }
            Self::UnableToCreateOutputDirectory(path, error) => {
                write!(
                    f,
                    "Unable to create output directory '{}': {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToWriteImageData(error) => {
                write!(f, "Failed to write image data: {}", error)
            }
            Self::FailedToWriteOutputFile(path, error) => {
                write!(f, "Failed to write output file '{}': {}", path, error)
            }
            Self::FailedToWriteOutputs(errors) => {
                write!(f, "{} output(s) could not be written", errors.len())?;
                for error in errors {
                    write!(f, "\n  {}", error)?;
                }
                Ok(())
            }
            Self::EncodingJobAborted(count) => {
                write!(f, "{} encoding job(s) aborted without a result", count)
            }
        }
    }
}

impl std::error::Error for Error {}
