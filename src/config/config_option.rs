use crate::context::ContextState;

/// A configuration parameter, together with its name and the range of permitted values.
#[derive(Clone)]
pub struct ConfigOption<T> {
    /// The name of the parameter, as used by the cli.
    pub name: &'static str,

    /// The minimum permitted value.
    pub min: T,

    /// The maximum permitted value.
    pub max: T,

    /// The last state of a context at which the parameter may be revised.
    pub max_state: ContextState,

    /// The current value.
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}
