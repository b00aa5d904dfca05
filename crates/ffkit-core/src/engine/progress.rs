use super::minimizer::MinimizerState;

pub type StateCallback<'a> = Box<dyn Fn(MinimizerState) + Send + Sync + 'a>;

/// Forwards minimizer state changes to an optional observer.
#[derive(Default)]
pub struct StateReporter<'a> {
    callback: Option<StateCallback<'a>>,
}

impl<'a> StateReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: StateCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, state: MinimizerState) {
        if let Some(cb) = &self.callback {
            cb(state);
        }
    }
}
