//! A NeuralNet is a fixed-topology, fully-connected
//! feedforward network of sigmoid units, whose weights
//! are imported from and exported to a flat vector.
//!
//! The flat vector lists every neuron's weights
//! layer by layer, neuron by neuron, each neuron's
//! bias weight last. A [`Genome`] evolved for a network
//! holds exactly this vector.
//!
//! [`Genome`]: weightevo::Genome
mod config;
mod errors;
mod layers;

pub use config::NetworkConfig;
pub use errors::NetworkError;
pub use layers::{Neuron, NeuronLayer, BIAS};

use weightevo::{Genome, RandomSource};

/// Largest value below 1 the network outputs.
const SATURATED_HIGH: f64 = 1.0 - f64::EPSILON / 2.0;

/// Logistic activation `1 / (1 + e^(-net / response))`.
///
/// The result always lies in the open interval (0, 1):
/// once `|net / response|` is too large for the logistic
/// to be told apart from 0 or 1, it saturates at the
/// nearest representable value inside the interval.
///
/// # Examples
/// ```
/// use weightevo_nn::sigmoid;
///
/// assert_eq!(sigmoid(0.0, 1.0), 0.5);
/// assert!(sigmoid(2.0, 1.0) > sigmoid(2.0, 4.0));
/// assert!(sigmoid(18.0, 1.0) < 1.0);
/// assert!(sigmoid(1000.0, 1.0) < 1.0);
/// assert!(sigmoid(-1000.0, 1.0) > 0.0);
/// ```
pub fn sigmoid(net: f64, response: f64) -> f64 {
    (1.0 / (1.0 + (-net / response).exp())).clamp(f64::MIN_POSITIVE, SATURATED_HIGH)
}

/// A layered feedforward neural network.
#[derive(Clone, Debug, PartialEq)]
pub struct NeuralNet {
    input_count: usize,
    output_count: usize,
    activation_response: f64,
    layers: Box<[NeuronLayer]>,
}

impl NeuralNet {
    /// Creates a network with the configured topology
    /// and all weights set to 0.
    ///
    /// With no hidden layers, the inputs feed a single
    /// layer of output neurons. Otherwise they feed the
    /// first hidden layer, each hidden layer feeds the
    /// next, and the last feeds the output layer.
    ///
    /// # Errors
    /// Returns an error if the network would have no inputs,
    /// no outputs or empty hidden layers, or if the activation
    /// response is not a positive number.
    ///
    /// # Examples
    /// ```
    /// use weightevo_nn::{NetworkConfig, NeuralNet};
    ///
    /// let network = NeuralNet::new(&NetworkConfig::new(2, 1, 0, 0)).unwrap();
    ///
    /// // A single neuron, with a weight for each input plus its bias.
    /// assert_eq!(network.layers().len(), 1);
    /// assert_eq!(network.layers()[0].neurons().len(), 1);
    /// assert_eq!(network.weights().len(), 3);
    /// ```
    pub fn new(config: &NetworkConfig) -> Result<NeuralNet, NetworkError> {
        if config.input_count == 0 {
            return Err(NetworkError::DegenerateTopology("network has no inputs"));
        }
        if config.output_count == 0 {
            return Err(NetworkError::DegenerateTopology("network has no outputs"));
        }
        if config.hidden_layer_count > 0 && config.neurons_per_hidden_layer == 0 {
            return Err(NetworkError::DegenerateTopology(
                "hidden layers have no neurons",
            ));
        }
        if !(config.activation_response.is_finite() && config.activation_response > 0.0) {
            return Err(NetworkError::NonPositiveResponse(
                config.activation_response,
            ));
        }

        Ok(NeuralNet {
            input_count: config.input_count,
            output_count: config.output_count,
            activation_response: config.activation_response,
            layers: config
                .layer_shapes()
                .into_iter()
                .map(|(neurons, inputs)| NeuronLayer::new(neurons, inputs))
                .collect(),
        })
    }

    /// Creates a network with the configured topology,
    /// and loads the genome's weights into it.
    ///
    /// # Errors
    /// Returns an error if the topology is invalid, or
    /// the genome's length differs from the network's
    /// weight count.
    ///
    /// # Examples
    /// ```
    /// use weightevo::Genome;
    /// use weightevo_nn::{NetworkConfig, NeuralNet};
    ///
    /// let genome = Genome::new(vec![0.5, -0.5, 0.25]);
    /// let network = NeuralNet::from_genome(&NetworkConfig::new(2, 1, 0, 0), &genome).unwrap();
    /// assert_eq!(network.weights(), [0.5, -0.5, 0.25]);
    /// ```
    pub fn from_genome(config: &NetworkConfig, genome: &Genome) -> Result<NeuralNet, NetworkError> {
        let mut network = NeuralNet::new(config)?;
        network.load_genome(genome)?;
        Ok(network)
    }

    /// Returns every weight in the network, layer by layer,
    /// neuron by neuron, each neuron's bias weight last.
    pub fn weights(&self) -> Vec<f64> {
        self.neurons()
            .flat_map(|n| n.weights().iter().copied())
            .collect()
    }

    /// Overwrites every weight in the network, consuming
    /// `weights` in the order produced by [`weights`].
    ///
    /// # Errors
    /// Returns an error, leaving the network untouched, if
    /// `weights.len()` differs from the network's weight count.
    ///
    /// [`weights`]: NeuralNet::weights
    ///
    /// # Examples
    /// ```
    /// use weightevo_nn::{NetworkConfig, NeuralNet};
    ///
    /// let mut network = NeuralNet::new(&NetworkConfig::new(1, 1, 1, 2)).unwrap();
    /// let weights: Vec<f64> = (0..network.weight_count()).map(|i| i as f64 / 10.0).collect();
    ///
    /// network.put_weights(&weights).unwrap();
    /// assert_eq!(network.weights(), weights);
    ///
    /// assert!(network.put_weights(&weights[1..]).is_err());
    /// ```
    pub fn put_weights(&mut self, weights: &[f64]) -> Result<(), NetworkError> {
        let expected = self.weight_count();
        if weights.len() != expected {
            return Err(NetworkError::WeightCountMismatch {
                expected,
                actual: weights.len(),
            });
        }

        let mut remaining = weights;
        for neuron in self.neurons_mut() {
            let (head, tail) = remaining.split_at(neuron.weights().len());
            neuron.weights_mut().copy_from_slice(head);
            remaining = tail;
        }
        Ok(())
    }

    /// Loads a genome's weights into the network,
    /// widening each of them to `f64`.
    ///
    /// # Errors
    /// Returns an error if the genome's length differs
    /// from the network's weight count.
    pub fn load_genome(&mut self, genome: &Genome) -> Result<(), NetworkError> {
        let weights: Vec<f64> = genome.iter().map(f64::from).collect();
        self.put_weights(&weights)
    }

    /// Sets every weight to a random value drawn
    /// from `rng`'s symmetric weight range.
    pub fn randomize<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        for neuron in self.neurons_mut() {
            for weight in neuron.weights_mut() {
                *weight = f64::from(rng.symmetric_weight());
            }
        }
    }

    /// Propagates `inputs` through every layer in turn,
    /// and returns the output layer's activations.
    ///
    /// Each neuron outputs the [`sigmoid`] of its weighted
    /// input sum plus its bias weight times [`BIAS`].
    ///
    /// # Errors
    /// Returns an error if `inputs.len()` differs from
    /// the network's input count.
    ///
    /// # Examples
    /// ```
    /// use weightevo_nn::{sigmoid, NetworkConfig, NeuralNet};
    ///
    /// let mut network = NeuralNet::new(&NetworkConfig::new(2, 1, 0, 0)).unwrap();
    /// network.put_weights(&[2.0, -1.0, 0.5]).unwrap();
    ///
    /// let output = network.feed_forward(&[1.0, 1.0]).unwrap();
    /// assert_eq!(output, vec![sigmoid(2.0 - 1.0 - 0.5, 1.0)]);
    /// ```
    pub fn feed_forward(&self, inputs: &[f64]) -> Result<Vec<f64>, NetworkError> {
        if inputs.len() != self.input_count {
            return Err(NetworkError::InputCountMismatch {
                expected: self.input_count,
                actual: inputs.len(),
            });
        }

        let mut activations = inputs.to_vec();
        for layer in self.layers.iter() {
            activations = layer.activate(&activations, self.activation_response);
        }
        Ok(activations)
    }

    /// Returns the total number of weights, bias weights included.
    pub fn weight_count(&self) -> usize {
        self.neurons().map(|n| n.weights().len()).sum()
    }

    pub fn input_count(&self) -> usize {
        self.input_count
    }

    pub fn output_count(&self) -> usize {
        self.output_count
    }

    pub fn activation_response(&self) -> f64 {
        self.activation_response
    }

    /// Returns the network's layers in feed-forward order.
    pub fn layers(&self) -> &[NeuronLayer] {
        &self.layers
    }

    fn neurons(&self) -> impl Iterator<Item = &Neuron> {
        self.layers.iter().flat_map(|l| l.neurons())
    }

    fn neurons_mut(&mut self) -> impl Iterator<Item = &mut Neuron> {
        self.layers.iter_mut().flat_map(|l| l.neurons_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weightevo::RngSource;

    fn random_network(config: &NetworkConfig, seed: u64) -> NeuralNet {
        let mut network = NeuralNet::new(config).unwrap();
        network.randomize(&mut RngSource::seeded(seed));
        network
    }

    #[test]
    fn topology_without_hidden_layers() {
        let network = NeuralNet::new(&NetworkConfig::new(2, 1, 0, 0)).unwrap();
        assert_eq!(network.layers().len(), 1);
        let neurons = network.layers()[0].neurons();
        assert_eq!(neurons.len(), 1);
        assert_eq!(neurons[0].weights().len(), 3);
        assert_eq!(network.weights().len(), 3);
    }

    #[test]
    fn topology_with_hidden_layers() {
        let config = NetworkConfig::new(3, 2, 3, 4);
        let network = NeuralNet::new(&config).unwrap();
        let shapes: Vec<(usize, usize)> = network
            .layers()
            .iter()
            .map(|l| (l.neurons().len(), l.neurons()[0].input_count()))
            .collect();
        assert_eq!(shapes, [(4, 3), (4, 4), (4, 4), (2, 4)]);
        assert_eq!(network.weight_count(), config.weight_count());
        assert_eq!(network.weights().len(), config.weight_count());
    }

    #[test]
    fn rejects_degenerate_topologies() {
        for config in [
            NetworkConfig::new(0, 1, 0, 0),
            NetworkConfig::new(2, 0, 0, 0),
            NetworkConfig::new(2, 1, 2, 0),
        ] {
            assert!(matches!(
                NeuralNet::new(&config),
                Err(NetworkError::DegenerateTopology(_))
            ));
        }
    }

    #[test]
    fn rejects_non_positive_response() {
        for response in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = NetworkConfig {
                activation_response: response,
                ..NetworkConfig::new(2, 1, 0, 0)
            };
            assert!(matches!(
                NeuralNet::new(&config),
                Err(NetworkError::NonPositiveResponse(_))
            ));
        }
    }

    #[test]
    fn weight_round_trip() {
        for (i, config) in [
            NetworkConfig::new(2, 1, 0, 0),
            NetworkConfig::new(4, 3, 1, 5),
            NetworkConfig::new(1, 2, 4, 2),
        ]
        .iter()
        .enumerate()
        {
            let mut network = NeuralNet::new(config).unwrap();
            let weights: Vec<f64> = (0..network.weight_count())
                .map(|w| (w as f64 * 0.37 + i as f64).sin())
                .collect();
            network.put_weights(&weights).unwrap();
            assert_eq!(network.weights(), weights);
        }
    }

    #[test]
    fn put_weights_in_traversal_order() {
        let mut network = NeuralNet::new(&NetworkConfig::new(1, 1, 1, 2)).unwrap();
        network
            .put_weights(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0])
            .unwrap();
        let layers = network.layers();
        assert_eq!(layers[0].neurons()[0].weights(), &[1.0, 2.0]);
        assert_eq!(layers[0].neurons()[1].weights(), &[3.0, 4.0]);
        assert_eq!(layers[1].neurons()[0].weights(), &[5.0, 6.0, 7.0]);
    }

    #[test]
    fn put_weights_length_mismatch() {
        let mut network = NeuralNet::new(&NetworkConfig::new(2, 1, 0, 0)).unwrap();
        network.put_weights(&[1.0, 2.0, 3.0]).unwrap();
        for bad in [&[][..], &[1.0, 2.0][..], &[1.0, 2.0, 3.0, 4.0][..]] {
            assert_eq!(
                network.put_weights(bad),
                Err(NetworkError::WeightCountMismatch {
                    expected: 3,
                    actual: bad.len()
                })
            );
        }
        assert_eq!(network.weights(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn feed_forward_input_mismatch() {
        let network = NeuralNet::new(&NetworkConfig::new(3, 1, 1, 2)).unwrap();
        assert_eq!(
            network.feed_forward(&[1.0, 2.0]),
            Err(NetworkError::InputCountMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn feed_forward_through_hidden_layer() {
        let mut network = NeuralNet::new(&NetworkConfig::new(2, 1, 1, 1)).unwrap();
        network.put_weights(&[0.5, -0.25, 0.1, 2.0, -1.0]).unwrap();

        let hidden = sigmoid(0.5 * 0.8 + -0.25 * 0.4 + 0.1 * BIAS, 1.0);
        let output = sigmoid(2.0 * hidden + -1.0 * BIAS, 1.0);
        assert_eq!(network.feed_forward(&[0.8, 0.4]).unwrap(), vec![output]);
    }

    #[test]
    fn activation_response_scales_net_input() {
        let config = NetworkConfig {
            activation_response: 2.0,
            ..NetworkConfig::new(1, 1, 0, 0)
        };
        let mut network = NeuralNet::new(&config).unwrap();
        network.put_weights(&[3.0, 0.0]).unwrap();
        assert_eq!(network.feed_forward(&[1.0]).unwrap(), vec![sigmoid(1.5, 1.0)]);
    }

    #[test]
    fn feed_forward_is_deterministic() {
        let network = random_network(&NetworkConfig::new(4, 3, 2, 6), 1);
        let inputs = [0.3, -0.7, 1.0, 0.0];
        let first = network.feed_forward(&inputs).unwrap();
        for _ in 0..10 {
            assert_eq!(network.feed_forward(&inputs).unwrap(), first);
        }
    }

    #[test]
    fn outputs_within_open_unit_interval() {
        let config = NetworkConfig::new(3, 4, 2, 5);
        let mut rng = RngSource::seeded(99);
        for seed in 0..20 {
            let network = random_network(&config, seed);
            let inputs: Vec<f64> = (0..3)
                .map(|_| f64::from(rng.symmetric_weight()) * 5.0)
                .collect();
            let outputs = network.feed_forward(&inputs).unwrap();
            assert_eq!(outputs.len(), 4);
            assert!(outputs.iter().all(|o| *o > 0.0 && *o < 1.0), "{:?}", outputs);
        }
    }

    #[test]
    fn saturating_weights_keep_outputs_inside_unit_interval() {
        let mut network = NeuralNet::new(&NetworkConfig::new(2, 1, 0, 0)).unwrap();
        let mut previous = 0.0;
        for scale in [9.0, 12.0, 15.0, 20.0, 40.0, 1000.0] {
            network.put_weights(&[scale, scale, 0.0]).unwrap();
            let high = network.feed_forward(&[1.0, 1.0]).unwrap()[0];
            let low = network.feed_forward(&[-1.0, -1.0]).unwrap()[0];
            assert!(high < 1.0, "net {} gave {}", 2.0 * scale, high);
            assert!(low > 0.0, "net {} gave {}", -2.0 * scale, low);
            assert!(high >= previous);
            previous = high;
        }
    }

    #[test]
    fn load_genome_of_evolved_length() {
        let config = NetworkConfig::new(2, 2, 1, 3);
        let mut network = NeuralNet::new(&config).unwrap();
        let genome = Genome::random(config.weight_count(), &mut RngSource::seeded(4));
        network.load_genome(&genome).unwrap();
        let widened: Vec<f64> = genome.iter().map(|w| f64::from(w)).collect();
        assert_eq!(network.weights(), widened);

        assert_eq!(
            network.load_genome(&Genome::new(vec![0.0; 3])),
            Err(NetworkError::WeightCountMismatch {
                expected: config.weight_count(),
                actual: 3
            })
        );
    }
}
