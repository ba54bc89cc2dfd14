use std::cell::Cell;
use std::rc::Rc;

/// Cooperative cancellation flag shared between a running count-up and its owner.
///
/// Everything runs on the browser's single thread, so a shared `Cell` is enough.
/// Once cancelled a token stays cancelled; a new run gets a new token.
#[derive(Clone, Default)]
pub struct CancellationToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let token = CancellationToken::new();
        let owner_copy = token.clone();
        assert!(!token.is_cancelled());

        owner_copy.cancel();
        assert!(token.is_cancelled());
    }
}
