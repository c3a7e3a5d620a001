//! linguist: demo chat between two speakers.
//!
//! The sender says each line at their proficiency; the receiver hears it at
//! theirs. Both sides print what they saw, followed by a metrics summary.

mod config;
mod input_gen;

use anyhow::{anyhow, Result};
use config::Config;
use linguist_core::metrics::Metrics;
use linguist_core::{seeded_rng, DistortionEngine, Speaker};
use tracing::{debug, info};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("linguist=info".parse()?)
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_args(&args).map_err(|e| anyhow!(e))?;

    if config.print_config {
        config.print();
    }

    let metrics = run(&config);

    if config.print_metrics {
        metrics.print_summary();
    }

    Ok(())
}

/// Send every line from sender to receiver, printing both sides.
fn run(config: &Config) -> Metrics {
    let engine = DistortionEngine::new(config.distortion);
    // Offset so message text and distortion draw from different streams
    let mut rng = seeded_rng(config.seed.wrapping_add(1));

    let sender = Speaker::new(
        config.sender.languages.iter().cloned(),
        config.sender.default_language.as_deref(),
    );
    let receiver = Speaker::new(
        config.receiver.languages.iter().cloned(),
        config.receiver.default_language.as_deref(),
    );

    let lines = if config.messages.is_empty() {
        input_gen::generate_sample_messages(config.seed, config.count)
    } else {
        config.messages.clone()
    };

    info!(seed = config.seed, messages = lines.len(), "starting exchange");

    let mut metrics = Metrics::new();

    for line in &lines {
        let sent = sender.send(&engine, &mut rng, line, config.language.as_deref());
        metrics.record_compose(line, sent.as_ref());

        let Some(sent) = sent else {
            debug!("skipping empty message");
            continue;
        };

        let heard = receiver.receive(&engine, &mut rng, sent.clone());
        metrics.record_interpret(line, &sent, heard.as_ref());

        println!("original: {line}");
        println!("sent:     {sent}");
        match heard {
            Some(heard) => println!("received: {heard}"),
            None => println!("received: (nothing)"),
        }
        println!();
    }

    metrics.complete();
    info!(distortion_rate = metrics.distortion_rate(), "exchange finished");

    metrics
}
