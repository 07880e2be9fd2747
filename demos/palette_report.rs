//! Command-line palette report for colorwell
//!
//! Prints a JSON report (colors, harmonies, contrast, color-vision simulation)
//! for the hex codes given on the command line.

use colorwell::{harmonies, ColorInfo, PaletteConfig, VisionSimulator, WcagChecker};
use serde_json::json;
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut config = PaletteConfig::default();
    let mut hexes = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                let Some(path) = args.get(i + 1) else {
                    eprintln!("Error: --config requires a path");
                    process::exit(1);
                };
                config = match PaletteConfig::from_json_file(Path::new(path)) {
                    Ok(cfg) => cfg,
                    Err(e) => {
                        eprintln!("Error loading config file: {}", e.user_message());
                        process::exit(1);
                    }
                };
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg => hexes.push(arg.to_string()),
        }
        i += 1;
    }

    if hexes.is_empty() {
        print_help(&args[0]);
        process::exit(1);
    }

    let colors: Vec<ColorInfo> = match hexes.iter().map(|h| ColorInfo::from_hex(h)).collect() {
        Ok(colors) => colors,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            process::exit(1);
        }
    };

    let checker = WcagChecker::with_config(config.contrast.clone());
    let mut harmony_sets = Vec::new();
    let mut contrast = Vec::new();
    for color in &colors {
        if let Ok(h) = harmonies(&color.hex) {
            harmony_sets.push(json!({ "hex": color.hex, "harmonies": h }));
        }
        for background in ["#FFFFFF", "#000000"] {
            if let Ok(report) = checker.check(&color.hex, background) {
                contrast.push(report);
            }
        }
    }

    let simulation = VisionSimulator::with_config(config.accessibility).simulate_palette(&colors);

    let report = json!({
        "colors": colors,
        "harmonies": harmony_sets,
        "contrast": contrast,
        "simulation": simulation,
    });

    match serde_json::to_string_pretty(&report) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error serializing report: {}", e);
            process::exit(1);
        }
    }
}

fn print_help(program: &str) {
    println!("Usage: {} [--config <file.json>] <hex> [<hex> ...]", program);
    println!();
    println!("Prints a JSON palette report for the given colors.");
    println!();
    println!("Options:");
    println!("  --config <file>  Load thresholds from a JSON configuration");
    println!("  -h, --help       Show this help");
}
