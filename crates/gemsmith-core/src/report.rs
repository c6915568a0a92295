//! Plain console output for listings (dry runs, settings, installed gems)

use crate::generators::Pipeline;
use crate::settings::Settings;
use colored::Colorize;
use std::path::Path;

/// Print the files a pipeline would write, grouped by generator
pub fn print_plan(pipeline: &Pipeline<'_>, root: &Path) {
    println!(
        "{}",
        format!("Planned files in {}:", root.display()).cyan().bold()
    );
    println!();

    for generator in pipeline.generators() {
        println!("  {}", generator.name().bold());
        for planned in generator.plan() {
            println!(
                "    {} {}",
                "->".blue(),
                root.join(&planned.destination).display()
            );
        }
    }

    println!();
    println!(
        "{} {} file(s), nothing written",
        "Dry run:".yellow().bold(),
        pipeline.planned().len()
    );
}

/// Print the settings file location and its contents as YAML
pub fn print_settings(path: Option<&Path>, settings: &Settings) {
    match path {
        Some(path) if path.exists() => {
            println!("{} {}", "Settings file:".cyan().bold(), path.display())
        }
        Some(path) => println!(
            "{} {} {}",
            "Settings file:".cyan().bold(),
            path.display(),
            "(not found, using defaults)".dimmed()
        ),
        None => println!(
            "{} {}",
            "Settings file:".cyan().bold(),
            "none (no home directory)".dimmed()
        ),
    }

    if *settings == Settings::default() {
        return;
    }

    println!();
    match serde_yaml::to_string(settings) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => eprintln!("{} {}", "Warning:".yellow(), e),
    }
}
