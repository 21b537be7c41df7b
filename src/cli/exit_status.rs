use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): vocabulary extracted and rendered
/// - `Error` (1): the run failed (bad input file, dictionary load error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_conversion() {
        let _: ExitCode = ExitStatus::Success.into();
        let _: ExitCode = ExitStatus::Error.into();
    }
}
