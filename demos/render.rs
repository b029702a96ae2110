//! Print an SVG of a digit group.
//!
//! Usage: cargo run --example render --features tracing -- [value] [base] [digits]
//!
//! Set RUST_LOG=sevenseg=debug to watch the value being decomposed.

use sevenseg::{DigitGroup, GroupOptions, NumberBase};
use tracing_subscriber::EnvFilter;

const HEIGHT: f64 = 120.0;
const SPACING: f64 = 12.0;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let value: i64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(-1234);
    let radix: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);
    let digits: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(5);

    let base = NumberBase::try_from(radix)?;
    let width = DigitGroup::ideal_width_for(digits, SPACING, HEIGHT);
    let mut group = DigitGroup::with_options(
        digits,
        sevenseg::Size::new(width, HEIGHT),
        GroupOptions::default()
            .with_number_base(base)
            .with_negative(true)
            .with_spacing(SPACING),
    )?;
    let shown = group.set_value(value);
    tracing::info!(shown, %base, digits = ?group.digit_values(), "group ready");

    println!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width:.2} {HEIGHT:.2}">"#
    );
    println!(r#"  <path d="{}" fill="black"/>"#, group.outline().to_svg_data());
    println!(r##"  <path d="{}" fill="#300"/>"##, group.off_segments().to_svg_data());
    println!(r##"  <path d="{}" fill="#f20"/>"##, group.on_segments().to_svg_data());
    println!("</svg>");

    Ok(())
}
