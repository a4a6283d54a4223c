use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};
use crate::network::network::Network;

/// Construction parameters for a [`Network`], loadable from JSON.
///
/// `seed` pins the weight initialization; without it the generator is seeded
/// from OS entropy and every run starts from different weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    pub learning_rate: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for NetworkConfig {
    /// 28×28 grayscale digits, 100 hidden units, ten classes.
    fn default() -> Self {
        NetworkConfig {
            input_size: 784,
            hidden_size: 100,
            output_size: 10,
            learning_rate: 0.3,
            seed: None,
        }
    }
}

impl NetworkConfig {
    pub fn validate(&self) -> Result<()> {
        validate_topology(self.input_size, self.hidden_size, self.output_size, self.learning_rate)
    }

    /// Builds a sigmoid network from this configuration.
    pub fn build(&self) -> Result<Network> {
        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Network::new(
            self.input_size,
            self.hidden_size,
            self.output_size,
            self.learning_rate,
            &mut rng,
        )
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads and validates a config previously written by `save_json`.
    pub fn load_json(path: &str) -> Result<NetworkConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: NetworkConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

impl Network {
    /// Shorthand for [`NetworkConfig::build`].
    pub fn from_config(config: &NetworkConfig) -> Result<Network> {
        config.build()
    }
}

pub(crate) fn validate_topology(
    input_size: usize,
    hidden_size: usize,
    output_size: usize,
    learning_rate: f64,
) -> Result<()> {
    for (name, size) in [
        ("input_size", input_size),
        ("hidden_size", hidden_size),
        ("output_size", output_size),
    ] {
        if size == 0 {
            return Err(NetworkError::InvalidConfiguration(format!("{name} must be positive")));
        }
    }
    if !(learning_rate.is_finite() && learning_rate > 0.0) {
        return Err(NetworkError::InvalidConfiguration(format!(
            "learning_rate must be a positive finite number, got {learning_rate}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_digit_setup() {
        let config = NetworkConfig::default();
        assert_eq!((config.input_size, config.hidden_size, config.output_size), (784, 100, 10));
        assert_eq!(config.learning_rate, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn seed_is_optional_in_json() {
        let json = r#"{"input_size":3,"hidden_size":3,"output_size":3,"learning_rate":0.3}"#;
        let config: NetworkConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.seed, None);
    }

    #[test]
    fn seeded_configs_build_identical_networks() {
        let config = NetworkConfig {
            input_size: 5,
            hidden_size: 4,
            output_size: 3,
            learning_rate: 0.2,
            seed: Some(11),
        };
        let a = config.build().unwrap();
        let b = Network::from_config(&config).unwrap();
        assert_eq!(a.weights_input_hidden(), b.weights_input_hidden());
        assert_eq!(a.weights_hidden_output(), b.weights_hidden_output());
    }

    #[test]
    fn json_file_round_trip() {
        let path = std::env::temp_dir().join(format!("nermal-config-{}.json", std::process::id()));
        let path = path.to_str().unwrap();
        let config = NetworkConfig { seed: Some(42), ..NetworkConfig::default() };

        config.save_json(path).unwrap();
        let loaded = NetworkConfig::load_json(path).unwrap();
        std::fs::remove_file(path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_rejects_invalid_learning_rate() {
        let path = std::env::temp_dir().join(format!("nermal-bad-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"input_size":3,"hidden_size":3,"output_size":3,"learning_rate":-1.0}"#,
        ).unwrap();
        let result = NetworkConfig::load_json(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(NetworkError::InvalidConfiguration(_))));
    }

    #[test]
    fn load_reports_missing_file() {
        let result = NetworkConfig::load_json("/nonexistent/nermal.json");
        assert!(matches!(result, Err(NetworkError::Io(_))));
    }
}
