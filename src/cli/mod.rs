//! Console front-end: argument parsing and the terminal loop.

mod args;

pub use args::Args;
