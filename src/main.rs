// Demo driver: trains a small network on 2×2 "bar" images and prints its
// per-class confidences. All network logic lives in the library.
//
//   cargo run -- [config.json]
//
// A config file must keep input_size = 4 and output_size = 4.
use nermal::{argmax, evaluate_accuracy, normalize_pixels, one_hot, train_network, Network, NetworkConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const LABELS: [&str; 4] = ["top", "bottom", "left", "right"];
const EPOCHS: usize = 500;

fn label_name(class: usize) -> &'static str {
    LABELS.get(class).copied().unwrap_or("?")
}

fn install_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().compact().with_env_filter(filter).init();
}

/// 2×2 images, pixels in reading order, one bar per class.
fn patterns() -> Vec<(usize, [u8; 4])> {
    vec![
        (0, [255, 255, 0, 0]),
        (1, [0, 0, 255, 255]),
        (2, [255, 0, 255, 0]),
        (3, [0, 255, 0, 255]),
    ]
}

fn main() -> nermal::Result<()> {
    install_logger();

    let config = match std::env::args().nth(1) {
        Some(path) => NetworkConfig::load_json(&path)?,
        None => NetworkConfig {
            input_size: 4,
            hidden_size: 8,
            output_size: 4,
            learning_rate: 0.3,
            seed: Some(42),
        },
    };
    let mut network = Network::from_config(&config)?;
    println!("{network}");

    let mut inputs = Vec::new();
    let mut targets = Vec::new();
    let mut labels = Vec::new();
    for (label, pixels) in patterns() {
        inputs.push(normalize_pixels(&pixels));
        targets.push(one_hot(label, config.output_size)?);
        labels.push(label);
    }

    for epoch in 0..EPOCHS {
        let error = train_network(&mut network, &inputs, &targets)?;
        if epoch % 100 == 0 {
            info!(epoch, error, "training");
        }
    }
    let accuracy = evaluate_accuracy(&network, &inputs, &labels)?;
    info!(accuracy, "training finished");

    for (input, &label) in inputs.iter().zip(labels.iter()) {
        let output = network.query(input)?;
        println!("\n=== {} bar ===", label_name(label));
        for (class, confidence) in output.iter().enumerate() {
            println!("  {:<6}: {confidence:.4}", label_name(class));
        }
        if let Some(predicted) = argmax(&output) {
            println!("Predicted: {} (confidence {:.4})", label_name(predicted), output[predicted]);
        }
    }

    Ok(())
}
