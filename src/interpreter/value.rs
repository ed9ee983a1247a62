/// Core runtime value type.
///
/// Defines the numeric `Value` enum stored in the global variable store,
/// together with conversion and formatting helpers.
pub mod core;
