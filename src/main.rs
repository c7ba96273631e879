use anyhow::Result;
use log::info;

use flowchart_data::cli::{
    get_base_dir, get_config_path, get_log_file, get_matches, get_verbosity, is_dry_run,
};
use flowchart_data::logging::init_logger;
use flowchart_data::workflow::{ProcessingOptions, process_sections};

fn main() -> Result<()> {
    let matches = get_matches();
    init_logger(get_verbosity(&matches), &get_log_file(&matches))?;

    let options = ProcessingOptions {
        config_path: get_config_path(&matches),
        base_dir: get_base_dir(&matches),
        dry_run: is_dry_run(&matches),
    };

    let context = process_sections(options)?;

    for outcome in &context.outcomes {
        println!("{}", outcome.display_line());
    }
    println!("\nDone.");

    info!(
        "Processed {} sections: {} emitted ({} tasks), {} skipped, {} errors",
        context.stats.sections_processed,
        context.stats.sections_emitted,
        context.stats.tasks_emitted,
        context.stats.sections_skipped,
        context.stats.errors
    );

    Ok(())
}
