use sinecmp::{plot_sine_vs_sine_squared, DEFAULT_SAMPLE_COUNT};

/// Only argument is the number of samples, defaulting to 100
fn sample_count(arg: Option<&str>) -> Result<usize, String> {
    match arg {
        None => Ok(DEFAULT_SAMPLE_COUNT),
        Some(arg) => arg
            .parse()
            .map_err(|_| format!("Invalid sample count: {arg} (expected a positive integer)")),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let arg = std::env::args().nth(1);
    let length = match sample_count(arg.as_deref()) {
        Ok(length) => length,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };

    if let Err(err) = plot_sine_vs_sine_squared(length) {
        eprintln!("Failed to plot: {err}");
        std::process::exit(1);
    }
}
