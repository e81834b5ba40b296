/// Remembers the last payload handed to an observer.
///
/// `changed` returns `true` (and records the payload) only when it differs from the
/// previous one, so an observer is never called twice in a row with equal arguments.
#[derive(Clone, Debug)]
pub(crate) struct LastPayload<T> {
    last: Option<T>,
}

impl<T: PartialEq + Copy> LastPayload<T> {
    pub(crate) fn new() -> Self {
        Self { last: None }
    }

    pub(crate) fn changed(&mut self, next: T) -> bool {
        if self.last == Some(next) {
            return false;
        }
        self.last = Some(next);
        true
    }
}
