use anyhow::{bail, Context, Result};
use scraper::Html;
use tracing::warn;

use crate::error::DeskResult;
use crate::listings::card::selector;
use crate::models::Money;
use crate::notify::Notification;
use crate::store::KeyValueStore;
use crate::workflow::{ApprovalDesk, ApprovalOutcome, RejectionOutcome};

/// A click on one of the pending card buttons
#[derive(Debug, Clone, PartialEq)]
pub enum CardAction {
    Approve { id: String, fee: Money },
    Reject { id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    Approval(ApprovalOutcome),
    Rejection(RejectionOutcome),
}

impl CardAction {
    pub fn id(&self) -> &str {
        match self {
            CardAction::Approve { id, .. } | CardAction::Reject { id } => id,
        }
    }

    pub fn dispatch<S: KeyValueStore>(&self, desk: &mut ApprovalDesk<'_, S>) -> DeskResult<ActionResult> {
        match self {
            CardAction::Approve { id, fee } => desk.approve(id, *fee).map(ActionResult::Approval),
            CardAction::Reject { id } => desk.reject(id).map(ActionResult::Rejection),
        }
    }
}

impl ActionResult {
    pub fn notification(&self, currency: &str) -> Notification {
        match self {
            ActionResult::Approval(outcome) => outcome.notification(currency),
            ActionResult::Rejection(outcome) => outcome.notification(),
        }
    }
}

/// Read the approve/reject buttons in `html`, in document order.
///
/// Buttons without a `data-property-id` are skipped; an approve button whose
/// `data-fee` is not a non-negative number is an error.
pub fn parse_actions(html: &str) -> Result<Vec<CardAction>> {
    let document = Html::parse_fragment(html);
    let button_selector = selector(".btn-accept, .btn-reject")?;

    let mut actions = Vec::new();
    for button in document.select(&button_selector) {
        let element = button.value();
        let Some(id) = element.attr("data-property-id") else {
            warn!("Skipping button without data-property-id");
            continue;
        };

        if element.classes().any(|class| class == "btn-accept") {
            let raw_fee = element.attr("data-fee").unwrap_or_default();
            let fee: Money = raw_fee
                .parse()
                .with_context(|| format!("invalid data-fee `{}` on {}", raw_fee, id))?;
            if fee.is_negative() {
                bail!("negative data-fee `{}` on {}", raw_fee, id);
            }
            actions.push(CardAction::Approve {
                id: id.to_string(),
                fee,
            });
        } else {
            actions.push(CardAction::Reject { id: id.to_string() });
        }
    }

    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::render::pending_card_html;
    use crate::store::{DeskStore, MemoryStore};
    use crate::workflow::sample_submissions;

    #[test]
    fn rendered_card_round_trips_into_actions() {
        let html = pending_card_html(&sample_submissions()[0], "JOD");
        let actions = parse_actions(&html).unwrap();
        assert_eq!(
            actions,
            vec![
                CardAction::Approve {
                    id: "pending_1".to_string(),
                    fee: Money::from_cents(1550),
                },
                CardAction::Reject {
                    id: "pending_1".to_string(),
                },
            ]
        );
    }

    #[test]
    fn bad_fee_is_an_error() {
        let html = r#"<button class="btn-accept" data-property-id="x" data-fee="free"></button>"#;
        assert!(parse_actions(html).is_err());
    }

    #[test]
    fn negative_fee_is_an_error() {
        let html = r#"<button class="btn-accept" data-property-id="x" data-fee="-100"></button>"#;
        let err = parse_actions(html).unwrap_err();
        assert!(err.to_string().contains("negative data-fee"));
    }

    #[test]
    fn buttons_without_id_are_skipped() {
        let html = r#"<button class="btn-reject"></button><button class="btn-reject" data-property-id="p"></button>"#;
        let actions = parse_actions(html).unwrap();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].id(), "p");
    }

    #[test]
    fn dispatch_routes_to_the_workflow() {
        let mut store = DeskStore::new(MemoryStore::new(), MemoryStore::new());
        let mut desk = ApprovalDesk::new(&mut store);
        desk.initialize().unwrap();

        let reject = CardAction::Reject {
            id: "pending_3".to_string(),
        };
        let result = reject.dispatch(&mut desk).unwrap();
        assert_eq!(result.notification("JOD").message, "Property rejected");

        let approve = CardAction::Approve {
            id: "pending_2".to_string(),
            fee: Money::from_cents(2000),
        };
        let result = approve.dispatch(&mut desk).unwrap();
        assert!(matches!(
            result,
            ActionResult::Approval(ApprovalOutcome::Approved { .. })
        ));
        assert_eq!(desk.balance().unwrap().to_string(), "480.00");
        assert_eq!(desk.list_pending().unwrap().len(), 1);
    }
}
