//! Preventive-maintenance prediction
//!
//! A small logistic-regression model over three usage features, fitted once
//! at startup on a fixed training set. The fit is deterministic (min-max
//! scaling, batch gradient descent from a zero start), so the same inputs
//! always produce the same prediction across runs.

/// Input features for a prediction
#[derive(Debug, Clone, Copy)]
pub struct MaintenanceFeatures {
    pub days_since_maintenance: f32,
    pub completed_deliveries: f32,
    pub breakdown_history: f32,
}

/// Prediction outcome
#[derive(Debug, Clone, Copy)]
pub struct MaintenancePrediction {
    pub requires_maintenance: bool,
    pub probability: f32,
}

/// Fixed training set: (days since maintenance, completed deliveries,
/// breakdown history) -> requires maintenance
const TRAINING_SET: [([f32; 3], bool); 8] = [
    ([5.0, 40.0, 0.0], false),
    ([30.0, 120.0, 2.0], true),
    ([20.0, 80.0, 1.0], true),
    ([7.0, 60.0, 0.0], false),
    ([45.0, 150.0, 3.0], true),
    ([12.0, 50.0, 0.0], false),
    ([60.0, 200.0, 4.0], true),
    ([3.0, 30.0, 0.0], false),
];

const EPOCHS: usize = 4000;
const LEARNING_RATE: f32 = 0.5;

/// Logistic-regression predictor for preventive maintenance.
///
/// Stateless after construction; share one instance across requests.
pub struct MaintenancePredictor {
    weights: [f32; 3],
    bias: f32,
    mins: [f32; 3],
    maxs: [f32; 3],
}

impl MaintenancePredictor {
    /// Fit the model on the fixed training set
    pub fn new() -> Self {
        let mut mins = [f32::MAX; 3];
        let mut maxs = [f32::MIN; 3];
        for (features, _) in &TRAINING_SET {
            for i in 0..3 {
                mins[i] = mins[i].min(features[i]);
                maxs[i] = maxs[i].max(features[i]);
            }
        }

        let scaled: Vec<[f32; 3]> = TRAINING_SET
            .iter()
            .map(|(features, _)| scale(features, &mins, &maxs))
            .collect();

        let mut weights = [0.0f32; 3];
        let mut bias = 0.0f32;
        let count = TRAINING_SET.len() as f32;

        for _ in 0..EPOCHS {
            let mut weight_grad = [0.0f32; 3];
            let mut bias_grad = 0.0f32;
            for (x, (_, label)) in scaled.iter().zip(TRAINING_SET.iter()) {
                let target = if *label { 1.0 } else { 0.0 };
                let error = sigmoid(dot(&weights, x) + bias) - target;
                for i in 0..3 {
                    weight_grad[i] += error * x[i];
                }
                bias_grad += error;
            }
            for i in 0..3 {
                weights[i] -= LEARNING_RATE * weight_grad[i] / count;
            }
            bias -= LEARNING_RATE * bias_grad / count;
        }

        Self {
            weights,
            bias,
            mins,
            maxs,
        }
    }

    /// Estimate whether a moto needs preventive maintenance
    pub fn predict(&self, features: &MaintenanceFeatures) -> MaintenancePrediction {
        let raw = [
            features.days_since_maintenance,
            features.completed_deliveries,
            features.breakdown_history,
        ];
        let x = scale(&raw, &self.mins, &self.maxs);
        let probability = sigmoid(dot(&self.weights, &x) + self.bias);
        MaintenancePrediction {
            requires_maintenance: probability > 0.5,
            probability,
        }
    }
}

impl Default for MaintenancePredictor {
    fn default() -> Self {
        Self::new()
    }
}

fn scale(features: &[f32; 3], mins: &[f32; 3], maxs: &[f32; 3]) -> [f32; 3] {
    let mut scaled = [0.0f32; 3];
    for i in 0..3 {
        let span = maxs[i] - mins[i];
        scaled[i] = if span == 0.0 {
            0.0
        } else {
            (features[i] - mins[i]) / span
        };
    }
    scaled
}

fn dot(a: &[f32; 3], b: &[f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn sigmoid(z: f32) -> f32 {
    1.0 / (1.0 + (-z).exp())
}
