/// Keeps the identity with the highest observed metric.
///
/// Replaces only on a strictly greater metric, so the first identity to
/// reach a value wins ties.
#[derive(Debug, Clone, Default)]
pub struct MaxTracker<K> {
    current: Option<(K, usize)>,
}

impl<K: Clone + PartialEq> MaxTracker<K> {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn update(&mut self, id: K, metric: usize) {
        match &self.current {
            None => self.current = Some((id, metric)),
            Some((holder, best)) => {
                if metric > *best || *holder == id {
                    self.current = Some((id, metric));
                }
            }
        }
    }

    pub fn current(&self) -> Option<&K> {
        self.current.as_ref().map(|(id, _)| id)
    }
}
