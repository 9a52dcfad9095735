//! Weekly course schedule CLI.
//!
//! # Usage
//! ```ignore
//! coursecal --session wed@morning:Algebra              // Current week
//! coursecal --start 2025-01-06 --session mon@evening   // Week kept inside the course
//! coursecal -w 1 --session fri@afternoon                // Next week
//! ```

use coursecal::args::Args;
use coursecal::error::{ScheduleError, ScheduleResult};
use coursecal::formatter::print_week;
use coursecal::types::ViewContext;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("coursecal: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by RUST_LOG (default: warnings only).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> ScheduleResult<()> {
    let ctx = ViewContext::new(args);
    let range = args.date_range()?;
    let sessions = args.recurring_sessions()?;
    let reference = args.reference_date(ctx.today)?;

    let window = ctx
        .calendar
        .initial_window(reference, &range)
        .ok_or(ScheduleError::OutsideCalendar(reference))?;
    let window = ctx.calendar.step_by(&window, args.weeks, &range);
    let view = ctx.calendar.week_view(window, &range, &sessions, &ctx.today);

    print_week(&ctx, &view);
    Ok(())
}
