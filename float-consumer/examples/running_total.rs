//! Running total over a stream of readings
//!
//! Feeds a handful of sensor readings through a validating consumer chain and
//! prints the accumulated total. Run with `RUST_LOG=trace` to see every stage
//! a reading is dispatched to.
//!
//! Usage:
//!   cargo run --example running_total -- 1.5 2.25 -4 0.5

use float_consumer::{
    from_fn, infallible_fn, CallbackError, ChainConfig, FloatConsumer, FloatConsumerChain,
};
use std::env;
use std::sync::Mutex;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let readings: Vec<f32> = env::args()
        .skip(1)
        .map(|arg| arg.parse::<f32>())
        .collect::<Result<_, _>>()?;

    let total = Mutex::new(0.0f32);
    let accepted = Mutex::new(0usize);

    let config = ChainConfig::new()
        .with_name("running-total")
        .with_trace_invocations(true);

    let mut chain = FloatConsumerChain::with_config(config);
    chain
        .then(from_fn(|v: f32| {
            if v < 0.0 {
                Err(CallbackError::new(format!("negative reading {}", v)))
            } else {
                Ok(())
            }
        }))?
        .then(infallible_fn(|v| *total.lock().unwrap() += v))?
        .then(infallible_fn(|_| *accepted.lock().unwrap() += 1))?;

    for reading in &readings {
        if let Err(e) = chain.accept(*reading) {
            log::warn!("Skipped reading: {}", e);
        }
    }

    println!(
        "Accepted {} of {} readings, total = {:.3}",
        *accepted.lock().unwrap(),
        readings.len(),
        *total.lock().unwrap()
    );

    Ok(())
}
