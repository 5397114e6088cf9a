//! Composite flow-state scoring.
//!
//! Six bounded readings are compressed into one normalized score. Arousal
//! metrics (stress, excitement, relaxation) contribute through an inverted-U
//! curve, so moderate levels score highest; engagement, interest and
//! attention contribute linearly, with attention carrying the largest
//! weight. Weights sum to 1.0, so the theoretical maximum is exactly 1.0
//! (moderate arousal, full engagement/interest/attention).

use crate::snapshot::Snapshot;

/// Short label of the stress metric on the performance stream.
pub const STRESS: &str = "str";
/// Short label of the engagement metric.
pub const ENGAGEMENT: &str = "eng";
/// Short label of the interest metric.
pub const INTEREST: &str = "int";
/// Short label of the excitement metric.
pub const EXCITEMENT: &str = "exc";
/// Short label of the attention (focus) metric.
pub const ATTENTION: &str = "foc";
/// Short label of the relaxation metric.
pub const RELAXATION: &str = "rel";

/// The six bounded readings the flow score is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlowInputs {
    pub stress: f64,
    pub engagement: f64,
    pub interest: f64,
    pub excitement: f64,
    pub attention: f64,
    pub relaxation: f64,
}

impl FlowInputs {
    /// Read the six scored metrics out of a snapshot.
    ///
    /// Metrics not yet observed read as 0.0; [`flow_score`] clamps its
    /// inputs anyway, so the result stays total.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let get = |name: &str| snapshot.get(name).copied().unwrap_or(0.0);
        Self {
            stress: get(STRESS),
            engagement: get(ENGAGEMENT),
            interest: get(INTEREST),
            excitement: get(EXCITEMENT),
            attention: get(ATTENTION),
            relaxation: get(RELAXATION),
        }
    }
}

/// Inverted-U curve centered at 0.5: peaks at 1.0, reaches 0.0 at both ends.
fn inverted_u(x: f64) -> f64 {
    -4.0 * (x - 0.5).powi(2) + 1.0
}

/// Compute the normalized flow-state score in [0, 1].
///
/// Each input is clamped to [0, 1] independently before weighting; the
/// weighted sum is clamped again on the way out. Always finite for finite
/// inputs.
pub fn flow_score(inputs: FlowInputs) -> f64 {
    let stress = inputs.stress.clamp(0.0, 1.0);
    let engagement = inputs.engagement.clamp(0.0, 1.0);
    let interest = inputs.interest.clamp(0.0, 1.0);
    let excitement = inputs.excitement.clamp(0.0, 1.0);
    let attention = inputs.attention.clamp(0.0, 1.0);
    let relaxation = inputs.relaxation.clamp(0.0, 1.0);

    let total = inverted_u(stress) * 0.15
        + inverted_u(excitement) * 0.15
        + engagement * 0.20
        + interest * 0.15
        + attention * 0.25
        + inverted_u(relaxation) * 0.10;

    total.clamp(0.0, 1.0)
}
