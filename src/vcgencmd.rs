use std::ffi::OsString;
use std::process::Command;

use log::{debug, warn};

use crate::error::{Error, Result};

pub const PROGRAM: &str = "vcgencmd";

pub const CLOCK_SOURCES: &[&str] = &["core", "h264", "isp", "v3d", "arm"];
pub const VOLT_SOURCES: &[&str] = &["core", "sdram_c", "sdram_i", "sdram_p"];

/// Runs one firmware query and hands back its trimmed stdout.
pub trait CommandRunner {
    fn run(&self, args: &[&str]) -> Result<String>;
}

/// The real `vcgencmd` binary, looked up through `PATH`.
#[derive(Debug, Clone)]
pub struct Vcgencmd {
    program: OsString,
}

impl Vcgencmd {
    pub fn new() -> Self {
        Self::with_program(PROGRAM)
    }

    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn describe(&self, args: &[&str]) -> String {
        let mut line = self.program.to_string_lossy().into_owned();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl Default for Vcgencmd {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for Vcgencmd {
    fn run(&self, args: &[&str]) -> Result<String> {
        let command = self.describe(args);
        debug!("running {}", command);

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| {
                warn!("could not launch {}: {}", command, source);
                Error::ToolNotFound {
                    program: self.program.to_string_lossy().into_owned(),
                    source,
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("{} exited with {}", command, output.status);
            return Err(Error::ToolExecutionFailed {
                command,
                status: output.status,
                stderr,
            });
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            warn!("{}: {}", command, stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::process::ExitStatus;

    use super::CommandRunner;
    use crate::error::{Error, Result};

    /// Scripted stand-in for `vcgencmd` keyed on the joined argument list.
    #[derive(Default)]
    pub struct FakeRunner {
        replies: HashMap<String, String>,
        failing: Option<String>,
        pub calls: RefCell<Vec<String>>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(mut self, args: &str, stdout: &str) -> Self {
            self.replies.insert(args.to_string(), stdout.to_string());
            self
        }

        pub fn fail_on(mut self, args: &str) -> Self {
            self.failing = Some(args.to_string());
            self
        }

        /// Every query the report issues, answered with plausible Pi 4 values.
        pub fn healthy(throttled: &str) -> Self {
            Self::new()
                .reply("measure_clock core", "frequency(1)=500000000")
                .reply("measure_clock h264", "frequency(28)=0")
                .reply("measure_clock isp", "frequency(45)=0")
                .reply("measure_clock v3d", "frequency(46)=500000000")
                .reply("measure_clock arm", "frequency(48)=1500000000")
                .reply("measure_volts core", "volt=0.8500V")
                .reply("measure_volts sdram_c", "volt=1.1000V")
                .reply("measure_volts sdram_i", "volt=1.1000V")
                .reply("measure_volts sdram_p", "volt=1.1000V")
                .reply("measure_temp", "temp=47.2'C")
                .reply("get_throttled", throttled)
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, args: &[&str]) -> Result<String> {
            let key = args.join(" ");
            self.calls.borrow_mut().push(key.clone());

            if self.failing.as_deref() == Some(key.as_str()) {
                return Err(Error::ToolExecutionFailed {
                    command: format!("vcgencmd {}", key),
                    status: failed_status(),
                    stderr: "VCHI initialization failed".into(),
                });
            }
            Ok(self.replies.get(&key).cloned().unwrap_or_default())
        }
    }

    #[cfg(unix)]
    fn failed_status() -> ExitStatus {
        use std::os::unix::process::ExitStatusExt;
        ExitStatus::from_raw(255 << 8)
    }

    #[cfg(not(unix))]
    fn failed_status() -> ExitStatus {
        use std::os::windows::process::ExitStatusExt;
        ExitStatus::from_raw(255)
    }
}
