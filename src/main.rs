use anyhow::Context;
use greyscale_lab_rs::imaging::Image;
use greyscale_lab_rs::logger::{self, info, warn};

fn main() -> anyhow::Result<()> {
    logger::init();

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "input.jpg".to_string());
    let output = args.next().unwrap_or_else(|| "output.jpg".to_string());

    info!("Loading {}", input);
    let mut image = Image::open(&input).with_context(|| format!("loading {input}"))?;

    let stats = image.stats();
    info!(
        width = image.width(),
        height = image.height(),
        min = stats.min,
        max = stats.max,
        average = stats.average,
        stddev = stats.stddev,
        "Input statistics"
    );

    if stats.min == stats.max {
        warn!("Uniform image, contrast stretch would produce NaN; writing input unchanged");
        image.save_jpeg(&output).with_context(|| format!("saving {output}"))?;
        return Ok(());
    }

    let stretched = image.normalise() * 255.0;
    stretched
        .save_jpeg(&output)
        .with_context(|| format!("saving {output}"))?;

    info!("Contrast-stretched image written to {}", output);
    Ok(())
}
