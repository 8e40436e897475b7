// Engine module - pure analytics over decision records
// This layer sits between the stored record set and the presentation surface

pub mod breakdown;
pub mod classify;
pub mod filter;
pub mod performance;
pub mod summary;
pub mod timing;

pub use breakdown::{
    EffectivenessCount, InputUsage, effectiveness_breakdown, input_usage_frequency,
};
pub use classify::classify_input_type;
pub use filter::{DecisionFilter, filter_records, star_decisions};
pub use performance::{OwnerPerformance, owner_performance};
pub use summary::{SummaryMetrics, summary_metrics};
pub use timing::{DecisionTiming, decision_timings, time_to_outcome};
