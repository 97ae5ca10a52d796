use std::io;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to launch '{program}': {source}")]
    ToolNotFound {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{command}' exited with {status}{}", stderr_suffix(.stderr))]
    ToolExecutionFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("cannot decode '{output}': {reason}")]
    UnparseableOutput { output: String, reason: String },

    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}
