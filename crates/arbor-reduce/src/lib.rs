#![deny(missing_docs)]

//! Network reduction engine.
//!
//! Four rewrite rules collapse a weighted multigraph toward a single edge:
//! parallel merge (conductance sum), series elimination (`a*b/(a+b)`),
//! triangle elimination for degree-3 nodes, and the general star-mesh
//! elimination with a minimum-degree candidate order. Every eliminating
//! rule folds a `ln` factor into a running accumulator; when the run
//! completes, the accumulator equals the natural log of the graph's total
//! weighted spanning-tree count, a quantity that overflows f64 directly
//! for graphs of even modest size.

mod config;
mod report;
mod rules;
mod scheduler;
mod trace;

pub use config::ReduceConfig;
pub use report::{entropy, ReductionReport, ReductionStatus};
pub use rules::{
    eliminate_series, eliminate_star_mesh, eliminate_star_mesh_at, eliminate_triangle,
    merge_parallel,
};
pub use scheduler::{reduce, reduce_cancellable};
pub use trace::{ReductionTrace, RuleKind, TraceEvent};
