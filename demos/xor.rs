use nermal::{train_network, Network};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> nermal::Result<()> {
    tracing_subscriber::fmt().compact().init();

    // The network has no biases, so a constant third input stands in for one.
    let inputs = vec![
        vec![0.99, 0.01, 1.0],
        vec![0.99, 0.99, 1.0],
        vec![0.01, 0.99, 1.0],
        vec![0.01, 0.01, 1.0],
    ];
    let targets = vec![
        vec![0.99],
        vec![0.01],
        vec![0.99],
        vec![0.01],
    ];

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut network = Network::new(3, 4, 1, 0.5, &mut rng)?;
    let epochs = 10000;

    for epoch in 0..epochs {
        let error = train_network(&mut network, &inputs, &targets)?;
        if epoch % 1000 == 0 {
            println!("Epoch {epoch}: mean error = {error:.6}");
        }
    }

    for input in &inputs {
        println!("Input: {:?} -> Output: {:.4}", &input[..2], network.query(input)?[0]);
    }

    Ok(())
}
