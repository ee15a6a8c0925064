//! Command implementations for all evalview commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use evalview_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::cli::{CompareArgs, MergeArgs, SamplesArgs, ShowArgs, ValidateArgs};
    use crate::commands::{compare, merge, metrics, samples, show, validate};
    use evalview_core::validate::ValidationOptions;
    use tracing::debug;

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::Show(args) => execute_show(ctx, args),
            Commands::Validate(args) => execute_validate(ctx, args),
            Commands::Compare(args) => execute_compare(ctx, args),
            Commands::Samples(args) => execute_samples(ctx, args),
            Commands::Merge(args) => execute_merge(ctx, args),
            Commands::Metrics => metrics::execute(ctx),
        }
    }

    fn execute_show(ctx: &CommandContext, args: &ShowArgs) -> Result<()> {
        show::execute(ctx, &args.file, &args.metric)
    }

    fn execute_validate(ctx: &CommandContext, args: &ValidateArgs) -> Result<()> {
        validate::execute(ctx, &args.file, validation_options(ctx, args))
    }

    fn execute_compare(ctx: &CommandContext, args: &CompareArgs) -> Result<()> {
        compare::execute(ctx, &args.baseline, &args.candidate, &args.metric)
    }

    fn execute_samples(ctx: &CommandContext, args: &SamplesArgs) -> Result<()> {
        let limit = args.limit.unwrap_or(ctx.config.display.sample_limit);
        samples::execute(ctx, &args.file, args.offset, limit)
    }

    fn execute_merge(ctx: &CommandContext, args: &MergeArgs) -> Result<()> {
        merge::execute(ctx, &args.files, args.output.as_deref())
    }

    /// Flags override the configured validation settings
    pub(super) fn validation_options(ctx: &CommandContext, args: &ValidateArgs) -> ValidationOptions {
        let mut options = ctx.config.validation.options();
        if let Some(tolerance) = args.tolerance {
            options.mean_tolerance = tolerance;
        }
        if args.no_length_check {
            options.check_lengths = false;
        }
        if args.require_requested {
            options.require_requested_metrics = true;
        }
        if args.no_require_requested {
            options.require_requested_metrics = false;
        }
        debug!(?options, "validation_options");
        options
    }
}
