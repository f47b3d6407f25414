use super::sigmoid;

use std::fmt;

/// Constant signal multiplied by each neuron's last weight.
pub const BIAS: f64 = -1.0;

/// A sigmoid unit with one weight per input,
/// plus a trailing bias weight.
#[derive(Clone, PartialEq)]
pub struct Neuron {
    weights: Box<[f64]>,
}

impl Neuron {
    /// Creates a neuron taking `input_count` inputs,
    /// with all weights set to 0.
    pub fn new(input_count: usize) -> Neuron {
        Neuron {
            weights: vec![0.0; input_count + 1].into(),
        }
    }

    /// Returns the neuron's weights, bias weight last.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub(crate) fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.weights
    }

    /// Returns the number of inputs, excluding the bias.
    pub fn input_count(&self) -> usize {
        self.weights.len() - 1
    }

    /// Returns the neuron's output for the given input activations.
    pub(crate) fn activate(&self, inputs: &[f64], response: f64) -> f64 {
        let bias_index = self.input_count();
        let net: f64 = self.weights[..bias_index]
            .iter()
            .zip(inputs)
            .map(|(w, a)| w * a)
            .sum::<f64>()
            + self.weights[bias_index] * BIAS;
        sigmoid(net, response)
    }
}

impl fmt::Debug for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.9?}", self.weights)
    }
}

/// A layer of neurons sharing the same input width.
#[derive(Clone, Debug, PartialEq)]
pub struct NeuronLayer {
    neurons: Box<[Neuron]>,
}

impl NeuronLayer {
    /// Creates a layer of `neuron_count` neurons,
    /// each taking `inputs_per_neuron` inputs.
    pub fn new(neuron_count: usize, inputs_per_neuron: usize) -> NeuronLayer {
        NeuronLayer {
            neurons: (0..neuron_count)
                .map(|_| Neuron::new(inputs_per_neuron))
                .collect(),
        }
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub(crate) fn neurons_mut(&mut self) -> &mut [Neuron] {
        &mut self.neurons
    }

    /// Returns the layer's output activations.
    pub(crate) fn activate(&self, inputs: &[f64], response: f64) -> Vec<f64> {
        self.neurons
            .iter()
            .map(|n| n.activate(inputs, response))
            .collect()
    }
}
