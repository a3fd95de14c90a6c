use chrono::Local;
use cpaas_pricing::billing::PricingEngine;
use cpaas_pricing::cli::Cli;
use cpaas_pricing::config::{Config, ConfigLoader};
use cpaas_pricing::core::{JsonReport, ReportGenerator, ReportInput, ReportOptions};
use cpaas_pricing::export::ExportPipeline;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();

    // Handle configuration commands
    if cli.init {
        Config::init()?;
        return Ok(());
    }

    if cli.check {
        let loaded = match &cli.config {
            Some(path) => ConfigLoader::load_from_path(path),
            None => Config::load(),
        };
        match loaded.and_then(|config| config.check()) {
            Ok(()) => println!("✓ Configuration valid"),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let config = ConfigLoader::load(cli.config.as_deref());

    if cli.print {
        config.print()?;
        return Ok(());
    }

    if cli.interactive {
        #[cfg(feature = "tui")]
        {
            cpaas_pricing::ui::run_calculator(&config)?;
        }
        #[cfg(not(feature = "tui"))]
        {
            eprintln!("TUI feature is not enabled. Please install with --features tui");
            std::process::exit(1);
        }
        return Ok(());
    }

    let engine = PricingEngine::new(config.rates);
    let input = ReportInput {
        engine: &engine,
        model: cli.billing_model(),
        usage: cli.raw_usage(&config.defaults).normalize(),
        color: !cli.no_color && std::env::var_os("NO_COLOR").is_none(),
    };

    let options = ReportOptions {
        breakdown: true,
        comparison: cli.compare,
        summary: cli.summary,
    };

    if cli.json {
        let report = JsonReport::build(&input, options);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", ReportGenerator::new(options).generate(&input));
    }

    if cli.export {
        let now = Local::now();
        let summary = engine.format_summary_at(input.model, &input.usage, now.naive_local());

        match ExportPipeline::from_config(&config.export).run(&summary, now.date_naive()) {
            Ok(report) => {
                for (name, reason) in &report.failures {
                    eprintln!("Warning: {} export failed: {}", name, reason);
                }
                eprintln!("✓ {}", report.outcome);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
