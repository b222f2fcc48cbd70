// ── Store state and transitions ──

/// Everything a list view needs to draw one resource type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreState<T, G> {
    /// Records from the most recent applied fetch, in server order.
    pub records: Vec<T>,
    /// `true` while the latest issued load is in flight.
    pub loading: bool,
    /// Last failure message, cleared by the next successful load.
    pub error: Option<String>,
    /// Target of the latest issued load; mutations reload against it.
    pub target: G,
    /// Sequence number of the latest issued load (0 = none yet).
    pub latest_seq: u64,
}

impl<T, G: Default> Default for StoreState<T, G> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loading: false,
            error: None,
            target: G::default(),
            latest_seq: 0,
        }
    }
}

/// Inputs to [`StoreState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent<T, G> {
    /// A load with sequence number `seq` was issued against `target`.
    LoadStarted { seq: u64, target: G },
    /// The load `seq` returned `records`.
    LoadSucceeded { seq: u64, records: Vec<T> },
    /// The load `seq` failed.
    LoadFailed { seq: u64, message: String },
    /// A create or delete failed. The collection stays as it was.
    MutationFailed { message: String },
}

impl<T, G> StoreState<T, G> {
    /// Sequence number the next issued load should carry.
    pub fn next_seq(&self) -> u64 {
        self.latest_seq + 1
    }

    /// Whether a completion for `seq` would still be applied.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest_seq
    }

    /// Pure transition: `(state, event) -> state`.
    ///
    /// Completions for anything but the latest issued load are dropped,
    /// records and error alike.
    #[must_use]
    pub fn apply(mut self, event: StoreEvent<T, G>) -> Self {
        match event {
            StoreEvent::LoadStarted { seq, target } => {
                self.latest_seq = self.latest_seq.max(seq);
                self.target = target;
                self.loading = true;
            }
            StoreEvent::LoadSucceeded { seq, records } => {
                if self.is_current(seq) {
                    self.records = records;
                    self.error = None;
                    self.loading = false;
                }
            }
            StoreEvent::LoadFailed { seq, message } => {
                if self.is_current(seq) {
                    self.error = Some(message);
                    self.loading = false;
                }
            }
            StoreEvent::MutationFailed { message } => {
                self.error = Some(message);
            }
        }
        self
    }
}
