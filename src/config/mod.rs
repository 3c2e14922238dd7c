mod mapping;
mod settings;

pub use mapping::{KeyMapping, MapMode};
pub use settings::{OptionValue, Settings, Variable};
