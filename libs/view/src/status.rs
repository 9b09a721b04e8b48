/// Lifecycle of one request issued by a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T, E> {
    Idle,
    Loading,
    Success(T),
    Failure(E),
}

impl<T, E> Default for RequestState<T, E> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T, E> RequestState<T, E> {
    pub fn start(&mut self) {
        *self = RequestState::Loading;
    }

    pub fn finish(&mut self, result: Result<T, E>) {
        *self = match result {
            Ok(value) => RequestState::Success(value),
            Err(e) => RequestState::Failure(e),
        };
    }

    pub fn fail(&mut self, e: E) {
        *self = RequestState::Failure(e);
    }

    pub fn reset(&mut self) {
        *self = RequestState::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            RequestState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            RequestState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            RequestState::Failure(e) => Some(e),
            _ => None,
        }
    }
}
