use serde::{Deserialize, Serialize};

/// Topology and activation settings for a [`NeuralNet`].
///
/// [`NeuralNet`]: crate::NeuralNet
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Number of network inputs.
    pub input_count: usize,
    /// Number of network outputs.
    pub output_count: usize,
    /// Number of hidden layers. With 0, inputs
    /// feed the output layer directly.
    pub hidden_layer_count: usize,
    /// Number of neurons in each hidden layer.
    pub neurons_per_hidden_layer: usize,
    /// Steepness divisor of the sigmoid activation.
    /// Must be positive.
    #[serde(default = "default_activation_response")]
    pub activation_response: f64,
}

fn default_activation_response() -> f64 {
    1.0
}

impl NetworkConfig {
    /// Returns a configuration with the given topology
    /// and an activation response of 1.
    ///
    /// # Examples
    /// ```
    /// use weightevo_nn::NetworkConfig;
    ///
    /// let config = NetworkConfig::new(4, 2, 1, 6);
    /// assert_eq!(config.activation_response, 1.0);
    /// ```
    pub fn new(
        input_count: usize,
        output_count: usize,
        hidden_layer_count: usize,
        neurons_per_hidden_layer: usize,
    ) -> NetworkConfig {
        NetworkConfig {
            input_count,
            output_count,
            hidden_layer_count,
            neurons_per_hidden_layer,
            activation_response: default_activation_response(),
        }
    }

    /// Returns the `(neuron count, inputs per neuron)`
    /// of each layer, in feed-forward order.
    ///
    /// # Examples
    /// ```
    /// use weightevo_nn::NetworkConfig;
    ///
    /// assert_eq!(NetworkConfig::new(3, 2, 0, 0).layer_shapes(), [(2, 3)]);
    /// assert_eq!(
    ///     NetworkConfig::new(3, 2, 2, 5).layer_shapes(),
    ///     [(5, 3), (5, 5), (2, 5)]
    /// );
    /// ```
    pub fn layer_shapes(&self) -> Vec<(usize, usize)> {
        if self.hidden_layer_count == 0 {
            return vec![(self.output_count, self.input_count)];
        }
        let width = self.neurons_per_hidden_layer;
        std::iter::once((width, self.input_count))
            .chain((1..self.hidden_layer_count).map(|_| (width, width)))
            .chain(std::iter::once((self.output_count, width)))
            .collect()
    }

    /// Returns the total weight count of a network with
    /// this topology, bias weights included. Genomes
    /// evolved for such a network need this many weights.
    ///
    /// # Examples
    /// ```
    /// use weightevo_nn::NetworkConfig;
    ///
    /// // 2 inputs + bias into a single output.
    /// assert_eq!(NetworkConfig::new(2, 1, 0, 0).weight_count(), 3);
    /// ```
    pub fn weight_count(&self) -> usize {
        self.layer_shapes()
            .iter()
            .map(|(neurons, inputs)| neurons * (inputs + 1))
            .sum()
    }
}
