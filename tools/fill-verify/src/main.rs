// Randomized flood fill verification CLI.
//
// Usage:
//   fill-verify run <width> <height> <iterations> [--colors N] [--seed S] [--format F]
//   fill-verify show <width> <height> [--colors N] [--seed S] [--format F]

use std::process;

use fill_verify::{
    engine_fill, random_scene, reference_fill, scene_from_bitmap, verify_random, verify_scene,
    MAX_COLORS,
};
use pixfill::bitmap::BitmapFormat;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "show" => cmd_show(&args[2..]),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("fill-verify - compare pixfill against a reference flood fill");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <width> <height> <iterations> [--colors N] [--seed S] [--format F]");
    eprintln!("      Fill random scenes and report any mismatching pixels.");
    eprintln!("      F is one of rgba8888, rgb565, a8, all (default all).");
    eprintln!();
    eprintln!("  show <width> <height> [--colors N] [--seed S] [--format F]");
    eprintln!("      Print one random scene before and after a fill, then check it.");
}

struct Options {
    colors: u8,
    seed: u64,
    formats: Vec<BitmapFormat>,
}

fn parse_number<T: std::str::FromStr>(value: &str, what: &str) -> T {
    value.parse().unwrap_or_else(|_| {
        eprintln!("Invalid {}: '{}'", what, value);
        process::exit(1);
    })
}

fn parse_format(value: &str) -> Vec<BitmapFormat> {
    match value {
        "rgba8888" => vec![BitmapFormat::Rgba8888],
        "rgb565" => vec![BitmapFormat::Rgb565],
        "a8" => vec![BitmapFormat::Alpha8],
        "all" => vec![
            BitmapFormat::Rgba8888,
            BitmapFormat::Rgb565,
            BitmapFormat::Alpha8,
        ],
        _ => {
            eprintln!("Unknown format: '{}'", value);
            process::exit(1);
        }
    }
}

fn parse_options(args: &[String]) -> Options {
    let mut opts = Options {
        colors: 3,
        seed: 1,
        formats: parse_format("all"),
    };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--colors" if i + 1 < args.len() => {
                opts.colors = parse_number::<u8>(&args[i + 1], "color count").clamp(1, MAX_COLORS);
                i += 2;
            }
            "--seed" if i + 1 < args.len() => {
                opts.seed = parse_number(&args[i + 1], "seed");
                i += 2;
            }
            "--format" if i + 1 < args.len() => {
                opts.formats = parse_format(&args[i + 1]);
                i += 2;
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                i += 1;
            }
        }
    }
    opts
}

fn parse_size(args: &[String]) -> (u32, u32) {
    let width: u32 = parse_number(&args[0], "width");
    let height: u32 = parse_number(&args[1], "height");
    if width == 0 || height == 0 {
        eprintln!("Width and height must be positive");
        process::exit(1);
    }
    (width, height)
}

fn cmd_run(args: &[String]) {
    if args.len() < 3 {
        eprintln!("Usage: fill-verify run <width> <height> <iterations> [options]");
        process::exit(1);
    }
    let (width, height) = parse_size(args);
    let iterations: u32 = parse_number(&args[2], "iteration count");
    let opts = parse_options(&args[3..]);

    let mut rng = SmallRng::seed_from_u64(opts.seed);
    let mut failures = 0u32;
    for &format in &opts.formats {
        for _ in 0..iterations {
            match verify_random(&mut rng, format, width, height, opts.colors) {
                Ok(result) if result.identical() => {}
                Ok(result) => {
                    failures += 1;
                    println!("{}", result);
                }
                Err(e) => {
                    failures += 1;
                    println!("ERROR: {:?}: {}", format, e);
                }
            }
        }
        println!(
            "{:?}: {} scenes of {}x{} checked",
            format, iterations, width, height
        );
    }

    if failures > 0 {
        println!("{} mismatching fills", failures);
        process::exit(2);
    }
    println!("All fills match the reference");
}

fn cmd_show(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Usage: fill-verify show <width> <height> [options]");
        process::exit(1);
    }
    let (width, height) = parse_size(args);
    let opts = parse_options(&args[2..]);

    let mut rng = SmallRng::seed_from_u64(opts.seed);
    let scene = random_scene(&mut rng, width, height, opts.colors);
    let x = rng.random_range(0..width);
    let y = rng.random_range(0..height);
    let expected = reference_fill(&scene, x, y, MAX_COLORS);

    println!("Seed ({}, {}), fill index {:x}", x, y, MAX_COLORS);
    println!("Before:\n{}", scene.to_text());
    println!("Reference:\n{}", expected.to_text());
    for &format in &opts.formats {
        let filled =
            engine_fill(&scene, format, x, y, MAX_COLORS).and_then(|b| scene_from_bitmap(&b));
        match filled {
            Ok(filled) => println!("{:?}:\n{}", format, filled.to_text()),
            Err(e) => println!("ERROR: {:?}: {}", format, e),
        }
        match verify_scene(&scene, format, x, y, MAX_COLORS) {
            Ok(result) => println!("{}", result),
            Err(e) => println!("ERROR: {:?}: {}", format, e),
        }
    }
}
