use crate::cli::{Cli, InspectArgs};
use crate::ingest::{DatasetSummary, UploadSession, UploadSource};
use crate::output::report_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::write_output;

#[must_use]
pub fn run_inspect(args: &InspectArgs, cli: &Cli) -> i32 {
    match run_inspect_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e, cli.color.into());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Summarizes how the input parses, without laying anything out.
///
/// # Errors
/// Returns an error if the input cannot be read or the report cannot be written.
pub fn run_inspect_impl(args: &InspectArgs, cli: &Cli) -> Result<()> {
    let source = UploadSource::from_arg(&args.input);
    let mut session = UploadSession::new();
    let dataset = session.load(&source)?;

    let summary = DatasetSummary::from_dataset(source.display_name(), dataset);
    let report = args.format.formatter(cli.color.into()).format(&summary)?;
    write_output(args.output.as_deref(), &report)
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;
