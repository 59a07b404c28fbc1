use crate::image::transformer::Transformation;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

const DEFAULT_INPUT_FILE: &str = "tiger.bmp";
const DEFAULT_OUTPUT_DIRECTORY: &str = ".";

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_output_directory_argument(command);
        let command = Self::register_output_name_argument(command);
        let command = Self::register_threads_argument(command);
        Self::register_transformations_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_output_directory_argument(command: Command) -> Command {
        command.arg(Self::create_output_directory_argument())
    }

    fn register_output_name_argument(command: Command) -> Command {
        command.arg(Self::create_output_name_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_transformations_argument(command: Command) -> Command {
        command.arg(Self::create_transformations_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to 24-bit BMP input file")
            .value_parser(value_parser!(PathBuf))
            .default_value(DEFAULT_INPUT_FILE)
    }

    fn create_output_directory_argument() -> Arg {
        arg!(output_directory: -o --output_directory <DIRECTORY> "Directory for the PNM output files")
            .default_value(DEFAULT_OUTPUT_DIRECTORY)
            .value_parser(value_parser!(PathBuf))
    }

    fn create_output_name_argument() -> Arg {
        arg!(output_name: -n --name <NAME> "Base name of the output files, defaults to the input file stem")
            .required(false)
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn create_transformations_argument() -> Arg {
        arg!(transformations: -x --transformations <TRANSFORMATIONS> "Outputs to produce")
            .action(ArgAction::Append)
            .value_delimiter(',')
            .default_values(["mirror", "invert", "grayscale", "stretch"])
            .value_parser(value_parser!(Transformation))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            output_directory: Self::extract_output_directory_argument(matches),
            output_name: Self::extract_output_name_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
            transformations: Self::extract_transformations_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Input file must be provided, but was unset.")
            .clone()
    }

    fn extract_output_directory_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_directory")
            .expect("Output directory must be provided, but was unset.")
            .clone()
    }

    fn extract_output_name_argument(matches: &ArgMatches) -> Option<String> {
        matches.get_one::<String>("output_name").cloned()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }

    fn extract_transformations_argument(matches: &ArgMatches) -> Vec<Transformation> {
        let mut transformations: Vec<Transformation> = matches
            .get_many::<Transformation>("transformations")
            .expect("Transformations must be provided, but were unset.")
            .copied()
            .collect();
        transformations.sort();
        transformations.dedup();
        transformations
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}
