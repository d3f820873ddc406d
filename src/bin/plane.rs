extern crate clap;
extern crate env_logger;
extern crate failure;
extern crate image;
extern crate num_cpus;
extern crate planeset;

use clap::{App, Arg, ArgMatches};
use failure::{err_msg, Error};
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ColorType, ImageEncoder, RgbImage};
use log::info;
use planeset::{Escape, Rasterizer, Scene};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn parse_value<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<T, Error> {
    matches
        .value_of(name)
        .and_then(|s| T::from_str(s).ok())
        .ok_or_else(|| err_msg(format!("Could not parse {}", name)))
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const SCENE: &str = "scene";
const FRAME: &str = "frame";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";
const BOUNDARY: &str = "boundary";

fn args<'a>(scenes: &'a [&'a str]) -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("plane")
        .version("0.1.0")
        .about("Draws point sets and complex fractals")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file; the extension picks the format"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("600x600")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(SCENE)
                .required(false)
                .long(SCENE)
                .short("S")
                .takes_value(true)
                .default_value("disk")
                .possible_values(scenes)
                .help("What to draw"),
        )
        .arg(
            Arg::with_name(FRAME)
                .required(false)
                .long(FRAME)
                .short("f")
                .takes_value(true)
                .default_value("0")
                .validator(|s| {
                    validate_range(
                        &s,
                        0,
                        10_000,
                        "Could not parse frame number",
                        "Frame number must be between 0 and 10000",
                    )
                })
                .help("Frame of an animated scene"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in the renderer"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("20")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        100_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 100000",
                    )
                })
                .help("Mandelbrot iterations per pixel"),
        )
        .arg(
            Arg::with_name(BOUNDARY)
                .required(false)
                .long(BOUNDARY)
                .short("b")
                .takes_value(true)
                .default_value("1.5")
                .validator(|s| {
                    validate_range(
                        &s,
                        std::f64::MIN_POSITIVE,
                        std::f64::MAX,
                        "Could not parse boundary",
                        "Boundary must be positive",
                    )
                })
                .help("Mandelbrot escape radius"),
        )
        .get_matches()
}

/// The image crate only knows the PNM family by its specific
/// extensions, so a plain `.pnm` is written as a binary pixmap here.
fn write_image(outfile: &str, image: &RgbImage) -> Result<(), Error> {
    let path = Path::new(outfile);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pnm") => {
            let output = BufWriter::new(File::create(path)?);
            let encoder =
                PnmEncoder::new(output).with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary));
            encoder.write_image(image, image.width(), image.height(), ColorType::Rgb8)?;
        }
        _ => image.save(path)?,
    }
    Ok(())
}

fn run() -> Result<(), Error> {
    let names: Vec<&str> = Scene::ALL.iter().map(|scene| scene.name()).collect();
    let matches = args(&names);

    let (width, height) = matches
        .value_of(SIZE)
        .and_then(|s| parse_pair::<u16>(s, 'x'))
        .ok_or_else(|| err_msg("Error parsing image dimensions"))?;
    let scene: Scene = matches
        .value_of(SCENE)
        .ok_or_else(|| err_msg("No scene given"))?
        .parse::<Scene>()
        .map_err(err_msg)?;
    let frame: usize = parse_value(&matches, FRAME)?;
    let threads: usize = parse_value(&matches, THREADS)?;
    let escape = Escape {
        iterations: parse_value(&matches, ITERATIONS)?,
        boundary: parse_value(&matches, BOUNDARY)?,
    };
    let output = matches
        .value_of(OUTPUT)
        .ok_or_else(|| err_msg("No output file given"))?;

    let rasterizer =
        Rasterizer::new(u32::from(width), u32::from(height))?.with_threads(threads)?;
    info!("Drawing {} frame {} at {}x{}", scene, frame, width, height);
    let image = scene.render(&rasterizer, frame, escape)?;
    write_image(output, &image)?;
    info!("Wrote {}", output);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
