pub mod bounds;
pub mod date;
pub mod filter;
pub mod reconcile;
pub mod selection;
pub mod snapshot;

pub use bounds::DatasetBounds;
pub use filter::{AdvancedFilter, ComparisonOperator, FilterDirective, FilterTarget};
pub use reconcile::EmitDecision;
pub use selection::{
    DateInputConstraints, EditedField, MeasureDefaults, SelectionMode, SelectionState,
};
pub use snapshot::{DataSnapshot, RestoredRange};
