//! Core trimming engine: argument construction, process plumbing and
//! progress extraction

pub mod command;
pub mod progress;
pub mod runner;

pub use command::{build_probe_args, build_trim_args};
pub use progress::{parse_progress, parse_time};
pub use runner::{
    CapturedOutput, LineReader, OutputLine, OutputLines, OutputSource, ProcessRunner,
    RunningProcess,
};
