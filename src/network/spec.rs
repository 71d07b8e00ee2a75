use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::network::config::NetConfig;
use crate::network::network::Network;

/// A serializable description of a network architecture and its
/// hyper-parameters.
///
/// Only the shape is stored, never trained weights: `build()` always yields a
/// freshly initialized network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name, e.g. used for log lines.
    pub name: String,
    /// Neurons per layer, bias excluded, input first.
    pub topology: Vec<usize>,
    #[serde(default)]
    pub config: NetConfig,
}

impl NetworkSpec {
    pub fn new(name: impl Into<String>, topology: Vec<usize>, config: NetConfig) -> Self {
        NetworkSpec {
            name: name.into(),
            topology,
            config,
        }
    }

    /// Constructs the described network.
    pub fn build(&self) -> Result<Network> {
        Network::new(&self.topology, self.config)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetError;

    #[test]
    fn json_file_round_trip() {
        let spec = NetworkSpec::new("xor", vec![2, 4, 1], NetConfig::default().with_seed(9));
        let path = std::env::temp_dir().join(format!("momentum-nn-spec-{}.json", std::process::id()));
        let path = path.to_str().unwrap();

        spec.save_json(path).unwrap();
        let loaded = NetworkSpec::load_json(path).unwrap();
        std::fs::remove_file(path).unwrap();

        assert_eq!(loaded, spec);
    }

    #[test]
    fn config_section_is_optional() {
        let spec: NetworkSpec =
            serde_json::from_str(r#"{"name": "tiny", "topology": [1, 1]}"#).unwrap();
        assert_eq!(spec.config, NetConfig::default());
        assert_eq!(spec.build().unwrap().layer_count(), 2);
    }

    #[test]
    fn build_propagates_topology_errors() {
        let spec = NetworkSpec::new("broken", vec![3], NetConfig::default());
        assert!(matches!(spec.build(), Err(NetError::InvalidTopology(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = NetworkSpec::load_json("/nonexistent/momentum-nn/spec.json").unwrap_err();
        assert!(matches!(err, NetError::Io(_)));
    }
}
