use chrono::Utc;
use tracing::{info, warn};

use crate::error::{DeskError, DeskResult};
use crate::models::{ApprovedSubmission, Money, PendingSubmission};
use crate::notify::{amount, Notification};
use crate::store::{DeskStore, KeyValueStore};
use crate::workflow::seed::sample_submissions;

/// Result of an approve request that passed the balance check
#[derive(Debug, Clone, PartialEq)]
pub enum ApprovalOutcome {
    Approved {
        record: ApprovedSubmission,
        fee: Money,
        balance: Money,
    },
    /// The id was not in the queue (already decided, or never existed)
    NotPending { id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum RejectionOutcome {
    Rejected(PendingSubmission),
    NotPending { id: String },
}

impl ApprovalOutcome {
    pub fn notification(&self, currency: &str) -> Notification {
        match self {
            ApprovalOutcome::Approved { fee, .. } => Notification::success(format!(
                "Property approved! {} was deducted from your balance",
                amount(*fee, currency)
            )),
            ApprovalOutcome::NotPending { .. } => {
                Notification::error("This property is no longer awaiting approval")
            }
        }
    }
}

impl RejectionOutcome {
    pub fn notification(&self) -> Notification {
        match self {
            RejectionOutcome::Rejected(_) => Notification::success("Property rejected"),
            RejectionOutcome::NotPending { .. } => {
                Notification::error("This property is no longer awaiting approval")
            }
        }
    }
}

/// Agent-side queue of owner submissions, settled against the agent's balance
pub struct ApprovalDesk<'a, S: KeyValueStore> {
    store: &'a mut DeskStore<S>,
}

impl<'a, S: KeyValueStore> ApprovalDesk<'a, S> {
    pub fn new(store: &'a mut DeskStore<S>) -> Self {
        Self { store }
    }

    /// Fill an empty queue with the demo submissions. Returns how many were added.
    pub fn initialize(&mut self) -> DeskResult<usize> {
        if !self.store.pending()?.is_empty() {
            return Ok(0);
        }

        let samples = sample_submissions();
        self.store.set_pending(&samples)?;
        info!("🌱 Seeded pending queue with {} sample submissions", samples.len());
        Ok(samples.len())
    }

    pub fn list_pending(&self) -> DeskResult<Vec<PendingSubmission>> {
        Ok(self.store.pending()?)
    }

    pub fn list_approved(&self) -> DeskResult<Vec<ApprovedSubmission>> {
        Ok(self.store.approved()?)
    }

    pub fn balance(&self) -> DeskResult<Money> {
        Ok(self.store.balance()?)
    }

    /// Approve `id`, debiting `fee` from the agent's balance.
    ///
    /// An id that is no longer queued is reported as `NotPending` and costs
    /// nothing, whatever the balance. Otherwise a fee above the balance fails
    /// with `InsufficientBalance` before any state is touched.
    pub fn approve(&mut self, id: &str, fee: Money) -> DeskResult<ApprovalOutcome> {
        if fee.is_negative() {
            warn!("Cannot approve {}: negative fee {}", id, fee);
            return Err(DeskError::InvalidFee { fee });
        }

        let mut pending = self.store.pending()?;
        let Some(position) = pending.iter().position(|s| s.id == id) else {
            warn!("Approve ignored: {} is not pending", id);
            return Ok(ApprovalOutcome::NotPending { id: id.to_string() });
        };

        let available = self.store.balance()?;
        let Some(remaining) = available.checked_debit(fee) else {
            warn!(
                "Cannot approve {}: fee {} exceeds balance {}",
                id, fee, available
            );
            return Err(DeskError::InsufficientBalance {
                required: fee,
                available,
            });
        };

        // Ledger last: a failed write never leaves a debited id in the queue
        let submission = pending.remove(position);
        self.store.set_pending(&pending)?;
        let record = ApprovedSubmission::new(submission, Utc::now());
        self.store.push_approved(record.clone())?;
        self.store.set_balance(remaining)?;

        info!(
            "✅ Approved {} ({}), fee {}, balance now {}",
            id, record.submission.title, fee, remaining
        );
        Ok(ApprovalOutcome::Approved {
            record,
            fee,
            balance: remaining,
        })
    }

    /// Drop `id` from the queue. The record is not archived.
    pub fn reject(&mut self, id: &str) -> DeskResult<RejectionOutcome> {
        let mut pending = self.store.pending()?;
        let Some(position) = pending.iter().position(|s| s.id == id) else {
            warn!("Reject ignored: {} is not pending", id);
            return Ok(RejectionOutcome::NotPending { id: id.to_string() });
        };
        let submission = pending.remove(position);
        self.store.set_pending(&pending)?;

        info!(
            id = %submission.id,
            owner = %submission.owner,
            fee = %submission.fee,
            "❌ Rejected {}",
            submission.title
        );
        Ok(RejectionOutcome::Rejected(submission))
    }
}
