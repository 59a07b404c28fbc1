use std::{
    fs::{self, File, OpenOptions},
    io::{BufReader, BufWriter, ErrorKind},
    path::{Path, PathBuf},
    sync::{mpsc, Arc},
};

pub use cli::CLIParser;
pub use error::Error;
use image::{
    reader::bmp::BmpImageReader, transformer::Transformation, writer::pnm::PnmImageWriter, Image,
    ImageReader, ImageWriter,
};
use threadpool::ThreadPool;

mod cli;
mod error;
mod image;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

const FALLBACK_OUTPUT_NAME: &str = "image";

pub struct Arguments {
    input_file: PathBuf,
    output_directory: PathBuf,
    output_name: Option<String>,
    number_of_threads: usize,
    transformations: Vec<Transformation>,
}

impl Arguments {
    fn output_name(&self) -> String {
        self.output_name.clone().unwrap_or_else(|| {
            self.input_file
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| FALLBACK_OUTPUT_NAME.to_owned())
        })
    }

    fn output_file(&self, transformation: Transformation) -> PathBuf {
        let file_name = format!(
            "{}{}.{}",
            self.output_name(),
            transformation.file_suffix(),
            transformation.file_extension()
        );
        self.output_directory.join(file_name)
    }
}

fn open_input_file(file_path: &Path) -> Result<File> {
    let path = file_path.display().to_string();
    File::open(file_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::InputFileNotFound(path),
        ErrorKind::PermissionDenied => Error::NoReadPermissionForInputFile(path),
        _ => Error::UnableToOpenInputFileForReading(path, e),
    })
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e))
}

fn create_output_directory(directory: &Path) -> Result<()> {
    fs::create_dir_all(directory)
        .map_err(|e| Error::UnableToCreateOutputDirectory(directory.display().to_string(), e))
}

fn read_image(file_path: &Path) -> Result<Image> {
    let input_file = open_input_file(file_path)?;
    let mut reader = BmpImageReader::new(BufReader::new(input_file));
    reader.read_image()
}

fn write_output(image: &Image, transformation: Transformation, file_path: &Path) -> Result<()> {
    let output_file = open_output_file(file_path)?;
    let mut writer = PnmImageWriter::new(BufWriter::new(output_file), image, transformation);
    writer.write_image()?;
    log::info!("Wrote {:?} output to {}", transformation, file_path.display());
    Ok(())
}

/// Decodes the input bitmap and writes one PNM file per requested
/// transformation, returning the written paths.
///
/// Nothing is written if the input cannot be decoded. Outputs are encoded
/// concurrently and independently; every failed output is reported in
/// [`Error::FailedToWriteOutputs`] after the remaining ones have finished.
pub fn convert_bmp_to_pnm(arguments: &Arguments) -> Result<Vec<PathBuf>> {
    log::info!("Reading bitmap {}", arguments.input_file.display());
    let image = Arc::new(read_image(&arguments.input_file)?);
    create_output_directory(&arguments.output_directory)?;

    let threadpool = ThreadPool::new(arguments.number_of_threads.max(1));
    let (sender, receiver) = mpsc::channel();
    for &transformation in &arguments.transformations {
        let image = Arc::clone(&image);
        let sender = sender.clone();
        let file_path = arguments.output_file(transformation);
        threadpool.execute(move || {
            let result = write_output(&image, transformation, &file_path);
            // the receiver outlives every job
            let _ = sender.send((transformation, file_path, result));
        });
    }
    drop(sender);

    let mut results: Vec<_> = receiver.iter().collect();
    results.sort_by_key(|(transformation, _, _)| *transformation);
    collect_written_files(results, arguments.transformations.len())
}

fn collect_written_files(
    results: Vec<(Transformation, PathBuf, Result<()>)>,
    number_of_jobs: usize,
) -> Result<Vec<PathBuf>> {
    let aborted_jobs = number_of_jobs - results.len();
    let mut written_files = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for (transformation, file_path, result) in results {
        match result {
            Ok(()) => written_files.push(file_path),
            Err(e) => {
                log::error!("Failed to write {:?} output: {}", transformation, e);
                failures.push(Error::FailedToWriteOutputFile(
                    file_path.display().to_string(),
                    Box::new(e),
                ));
            }
        }
    }
    if aborted_jobs > 0 {
        log::error!("{} encoding job(s) terminated without a result", aborted_jobs);
        failures.push(Error::EncodingJobAborted(aborted_jobs));
    }
    if !failures.is_empty() {
        return Err(Error::FailedToWriteOutputs(failures));
    }
    Ok(written_files)
}
