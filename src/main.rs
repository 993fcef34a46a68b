use clap::Parser;
use subregion_patcher::config::LogFormat;
use subregion_patcher::utils::logger;
use subregion_patcher::{
    CliConfig, LocalStorage, PatchEngine, PatchError, PatchReport, SubregionPipeline,
};

fn print_report(report: &PatchReport) {
    let verb = if report.is_dry_run() { "Would update" } else { "Updated" };
    for update in &report.updates {
        println!("{} {}: {} -> {}", verb, update.name, update.from, update.to);
    }

    match &report.persisted {
        Some(outcome) => {
            println!(
                "\nCreated backup of original file at: {}",
                outcome.backup_path.display()
            );
            println!(
                "\nSuccessfully updated {} country subregions",
                report.updated_count()
            );
            println!("Updated data has been saved to: {}", outcome.output_path.display());
            println!(
                "Original file has been backed up to: {}",
                outcome.backup_path.display()
            );
        }
        None => {
            println!(
                "\nDry run: {} of {} country subregions would be updated in {}",
                report.updated_count(),
                report.total_records,
                report.input_path.display()
            );
        }
    }
}

fn fail(e: &PatchError) -> ! {
    tracing::error!(
        "❌ Subregion patch failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code().max(1));
}

fn main() {
    let cli = CliConfig::parse();
    let resolved = cli.resolve();

    let (log_format, verbose) = match &resolved {
        Ok(settings) => (settings.log_format, settings.verbose),
        Err(_) => (cli.log_format.unwrap_or_default(), cli.verbose),
    };
    match log_format {
        LogFormat::Compact => logger::init_cli_logger(verbose),
        LogFormat::Json => logger::init_json_logger(verbose),
    }
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match resolved {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            fail(&e);
        }
    };
    if settings.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = SubregionPipeline::new(LocalStorage::new(), settings);
    let engine = PatchEngine::from_pipeline(pipeline);

    match engine.run() {
        Ok(report) => {
            tracing::info!(
                "✅ Patch completed: {} of {} records updated",
                report.updated_count(),
                report.total_records
            );
            print_report(&report);
        }
        Err(e) => fail(&e),
    }
}
