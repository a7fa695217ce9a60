use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use chrono::NaiveDate;

use crate::domain::{ActivityRequest, RequestStatus};
use crate::errors::{ClubError, ClubResult};

/// Heap entry; priority is the requested start date, earliest first, with
/// the submission sequence breaking ties so equal dates drain FIFO
#[derive(Debug, Clone)]
struct PendingEntry {
    start_date: NaiveDate,
    sequence: u64,
    request: ActivityRequest,
}

impl PartialEq for PendingEntry {
    fn eq(&self, other: &Self) -> bool {
        self.start_date == other.start_date && self.sequence == other.sequence
    }
}

impl Eq for PendingEntry {}

impl PartialOrd for PendingEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PendingEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start_date
            .cmp(&other.start_date)
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// Priority queue of pending activity requests.
///
/// `submit` enqueues, `decide` pops the highest-priority request and stamps
/// the moderation outcome on it. Requests move `Pending -> Approved` or
/// `Pending -> Rejected` exactly once; both states are terminal.
#[derive(Debug, Default)]
pub struct ModerationQueue {
    pending: BinaryHeap<Reverse<PendingEntry>>,
    next_sequence: u64,
    total_submitted: usize,
    rejected: usize,
}

impl ModerationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, request: ActivityRequest) {
        let entry = PendingEntry {
            start_date: request.start_date,
            sequence: self.next_sequence,
            request,
        };
        self.next_sequence += 1;
        self.total_submitted += 1;
        self.pending.push(Reverse(entry));
    }

    /// Pop the highest-priority request and apply the moderation outcome.
    ///
    /// Anything other than `Approved` counts as a rejection. The decided
    /// request is returned to the caller carrying its final status; event
    /// materialization from an approved request is the caller's step.
    pub fn decide(
        &mut self,
        status: RequestStatus,
        date: NaiveDate,
        note: &str,
    ) -> ClubResult<ActivityRequest> {
        let Reverse(entry) = self.pending.pop().ok_or(ClubError::NoPendingRequests)?;

        let mut request = entry.request;
        request.decide(status, date, note);
        if !request.is_approved() {
            self.rejected += 1;
        }
        Ok(request)
    }

    /// Next request that `decide` would pop
    pub fn current(&self) -> Option<&ActivityRequest> {
        self.pending.peek().map(|Reverse(entry)| &entry.request)
    }

    /// `None` until at least one request has been submitted
    pub fn rejection_ratio(&self) -> Option<f64> {
        if self.total_submitted == 0 {
            None
        } else {
            Some(self.rejected as f64 / self.total_submitted as f64)
        }
    }

    pub fn num_pending(&self) -> usize {
        self.pending.len()
    }

    pub fn num_submitted(&self) -> usize {
        self.total_submitted
    }

    pub fn num_rejected(&self) -> usize {
        self.rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ActivityType;

    fn request(id: &str, start: NaiveDate) -> ActivityRequest {
        let end = start.succ_opt().unwrap();
        ActivityRequest::new(id, &format!("ev-{id}"), "org1", "match", ActivityType::Indoor, 1, 10, start, end)
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn test_equal_priority_drains_in_submission_order() {
        let mut queue = ModerationQueue::new();
        queue.submit(request("r1", date(1)));
        queue.submit(request("r2", date(1)));
        queue.submit(request("r3", date(1)));

        for expected in ["r1", "r2", "r3"] {
            let decided = queue.decide(RequestStatus::Approved, date(2), "ok").unwrap();
            assert_eq!(decided.request_id, expected);
        }
    }

    #[test]
    fn test_earlier_start_date_decided_first() {
        let mut queue = ModerationQueue::new();
        queue.submit(request("late", date(20)));
        queue.submit(request("early", date(2)));

        let decided = queue.decide(RequestStatus::Approved, date(1), "ok").unwrap();
        assert_eq!(decided.request_id, "early");
    }

    #[test]
    fn test_decide_on_empty_queue_fails() {
        let mut queue = ModerationQueue::new();
        let err = queue.decide(RequestStatus::Approved, date(1), "ok").unwrap_err();
        assert_eq!(err, ClubError::NoPendingRequests);
    }

    #[test]
    fn test_decision_metadata_is_stamped() {
        let mut queue = ModerationQueue::new();
        queue.submit(request("r1", date(1)));

        let decided = queue
            .decide(RequestStatus::Rejected, date(3), "no venue")
            .unwrap();
        assert_eq!(decided.status, RequestStatus::Rejected);
        assert_eq!(decided.decision_date, Some(date(3)));
        assert_eq!(decided.decision_note.as_deref(), Some("no venue"));
    }

    #[test]
    fn test_rejection_ratio() {
        let mut queue = ModerationQueue::new();
        assert_eq!(queue.rejection_ratio(), None);

        queue.submit(request("r1", date(1)));
        queue.submit(request("r2", date(1)));
        queue.decide(RequestStatus::Approved, date(2), "ok").unwrap();
        queue.decide(RequestStatus::Rejected, date(2), "no").unwrap();

        assert_eq!(queue.rejection_ratio(), Some(0.5));
        assert_eq!(queue.num_rejected(), 1);
        assert_eq!(queue.num_submitted(), 2);
        assert_eq!(queue.num_pending(), 0);
    }

    #[test]
    fn test_current_peeks_without_removing() {
        let mut queue = ModerationQueue::new();
        assert!(queue.current().is_none());

        queue.submit(request("r1", date(1)));
        assert_eq!(queue.current().unwrap().request_id, "r1");
        assert_eq!(queue.num_pending(), 1);
    }
}
