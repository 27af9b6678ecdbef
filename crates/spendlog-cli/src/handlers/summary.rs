use crate::cli::SummaryArgs;
use crate::context::CliContext;
use crate::output;

pub fn handle(ctx: &CliContext, args: SummaryArgs) -> anyhow::Result<()> {
    let reference = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    output::output_success(ctx.summary(reference, args.calendar_month));
    Ok(())
}
