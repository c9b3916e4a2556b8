use anyhow::{anyhow, Context};
use hexgrid::{Hex, HexSet, Layout, Point2};
use log::debug;
use serde::Serialize;
use std::io::Write;
use structopt::StructOpt;
use strum::{Display, EnumString};

/// Parse a hex from a `q,r,s` string. All three components are required, and
/// have to satisfy `q + r + s = 0`.
fn parse_hex(input: &str) -> anyhow::Result<Hex> {
    let components = input
        .split(',')
        .map(|component| {
            component.trim().parse::<i32>().with_context(|| {
                format!("invalid component {:?} in hex {:?}", component, input)
            })
        })
        .collect::<anyhow::Result<Vec<i32>>>()?;
    match components.as_slice() {
        [q, r, s] => Ok(Hex::new(*q, *r, *s)?),
        _ => Err(anyhow!(
            "expected hex in the format q,r,s but got {:?}",
            input
        )),
    }
}

/// Different formats that results can be printed in.
#[derive(Copy, Clone, Debug, Display, EnumString, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    /// One result per line
    Text,
    /// A single JSON document
    Json,
}

/// An operation to run against the layout. Hexes are always given as `q,r,s`.
#[derive(Debug, StructOpt)]
pub enum Command {
    /// Get the pixel position of the center of one or more hexes
    ToPixel {
        #[structopt(
            parse(try_from_str = parse_hex),
            required = true,
            allow_hyphen_values = true
        )]
        hexes: Vec<Hex>,
    },

    /// Get the hex that contains a pixel
    FromPixel { x: f64, y: f64 },

    /// Get the number of steps between two hexes
    Distance {
        #[structopt(parse(try_from_str = parse_hex), allow_hyphen_values = true)]
        a: Hex,
        #[structopt(parse(try_from_str = parse_hex), allow_hyphen_values = true)]
        b: Hex,
    },

    /// Get the 6 neighbors of a hex, in direction order
    Neighbors {
        #[structopt(parse(try_from_str = parse_hex), allow_hyphen_values = true)]
        hex: Hex,
        /// Get the diagonal neighbors instead of the adjacent ones
        #[structopt(long)]
        diagonal: bool,
    },

    /// Get the hexes along a straight line between two hexes
    Line {
        #[structopt(parse(try_from_str = parse_hex), allow_hyphen_values = true)]
        a: Hex,
        #[structopt(parse(try_from_str = parse_hex), allow_hyphen_values = true)]
        b: Hex,
    },

    /// Get the hexes exactly some number of steps from a center hex
    Ring {
        #[structopt(parse(try_from_str = parse_hex), allow_hyphen_values = true)]
        center: Hex,
        radius: i32,
    },

    /// Get all hexes within some number of steps of a center hex, ordered by
    /// distance
    Spiral {
        #[structopt(parse(try_from_str = parse_hex), allow_hyphen_values = true)]
        center: Hex,
        radius: i32,
    },

    /// Get the pixel positions of the 6 vertices of a hex
    Corners {
        #[structopt(parse(try_from_str = parse_hex), allow_hyphen_values = true)]
        hex: Hex,
    },

    /// Get all hexes that can be reached from a start hex within some number
    /// of moves, without passing through blocked hexes
    Reachable {
        #[structopt(parse(try_from_str = parse_hex), allow_hyphen_values = true)]
        start: Hex,
        steps: u32,
        /// A hex that can't be moved through. Can be given multiple times.
        #[structopt(
            short,
            long,
            parse(try_from_str = parse_hex),
            allow_hyphen_values = true,
            number_of_values = 1
        )]
        blocked: Vec<Hex>,
    },
}

impl Command {
    /// Run this command against a layout. Commands that don't involve pixels
    /// just ignore the layout.
    pub fn execute(self, layout: &Layout) -> anyhow::Result<Output> {
        debug!("Executing {:?}", self);
        let output = match self {
            Self::ToPixel { hexes } => Output::Pixels(
                hexes.into_iter().map(|hex| layout.hex_to_pixel(hex)).collect(),
            ),
            Self::FromPixel { x, y } => {
                Output::Hexes(vec![layout.pixel_to_hex(Point2::new(x, y))?])
            }
            Self::Distance { a, b } => Output::Distance(a.distance_to(b)),
            Self::Neighbors { hex, diagonal } => Output::Hexes(
                (0..6)
                    .map(|direction| {
                        if diagonal {
                            hex.diagonal_neighbor(direction)
                        } else {
                            hex.neighbor(direction)
                        }
                    })
                    .collect::<Result<_, _>>()?,
            ),
            Self::Line { a, b } => Output::Hexes(a.line_draw(b)?),
            Self::Ring { center, radius } => Output::Hexes(center.ring(radius)),
            Self::Spiral { center, radius } => {
                Output::Hexes(center.spiral(radius))
            }
            Self::Corners { hex } => {
                Output::Pixels(layout.polygon_corners(hex).to_vec())
            }
            Self::Reachable {
                start,
                steps,
                blocked,
            } => {
                let blocked: HexSet = blocked.into_iter().collect();
                Output::Hexes(
                    start.reachable(steps, &blocked).into_iter().collect(),
                )
            }
        };
        Ok(output)
    }
}

/// The result of a [Command]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Hexes(Vec<Hex>),
    Pixels(Vec<Point2>),
    Distance(usize),
}

impl Output {
    /// Write this output in the given format
    pub fn write(
        &self,
        writer: &mut impl Write,
        format: OutputFormat,
    ) -> anyhow::Result<()> {
        match format {
            OutputFormat::Text => match self {
                Self::Hexes(hexes) => {
                    for hex in hexes {
                        writeln!(writer, "{}", hex)?;
                    }
                }
                Self::Pixels(points) => {
                    for point in points {
                        writeln!(writer, "{}", point)?;
                    }
                }
                Self::Distance(distance) => writeln!(writer, "{}", distance)?,
            },
            OutputFormat::Json => {
                serde_json::to_writer(&mut *writer, self)
                    .context("error serializing output")?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }
}
