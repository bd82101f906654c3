use std::fmt::Write;

use crate::models::{ChatMessage, PendingSubmission};
use crate::notify::amount;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One card in the agent's approval grid, with accept/reject buttons
/// carrying the id and fee back to the workflow.
pub fn pending_card_html(submission: &PendingSubmission, currency: &str) -> String {
    let id = escape(&submission.id);
    format!(
        r#"<div class="pending-property-card" data-property-id="{id}">
    <div class="pending-property-header">
        <div class="pending-property-owner">
            <i class="fas fa-user"></i>
            <div class="pending-property-owner-info"><h4>{owner}</h4><p>Property owner</p></div>
        </div>
        <span class="pending-property-status">Awaiting approval</span>
    </div>
    <div class="pending-property-details">
        <h3>{title}</h3>
        <p><i class="fas fa-map-marker-alt"></i> {location}</p>
        <div class="pending-property-features">
            <span><i class="fas fa-home"></i> {kind}</span>
            <span><i class="fas fa-bed"></i> {rooms} rooms</span>
            <span><i class="fas fa-bath"></i> {baths} baths</span>
            <span><i class="fas fa-ruler-combined"></i> {area}m²</span>
        </div>
        <div class="pending-property-price">{price}</div>
        <div class="pending-property-actions">
            <div class="pending-property-fee">
                <div class="pending-property-fee-label">Publishing fee</div>
                <div class="pending-property-fee-amount">{fee_label}</div>
            </div>
            <button class="btn-accept" data-property-id="{id}" data-fee="{fee}"><i class="fas fa-check"></i> Approve</button>
            <button class="btn-reject" data-property-id="{id}"><i class="fas fa-times"></i> Reject</button>
        </div>
    </div>
</div>"#,
        owner = escape(&submission.owner),
        title = escape(&submission.title),
        location = escape(&submission.location),
        kind = escape(&submission.property_type),
        rooms = submission.rooms,
        baths = submission.baths,
        area = submission.area,
        price = escape(&submission.price),
        fee_label = escape(&amount(submission.fee, currency)),
        fee = submission.fee,
    )
}

/// The whole approval grid; empty when nothing is pending.
pub fn pending_grid_html(pending: &[PendingSubmission], currency: &str) -> String {
    pending
        .iter()
        .map(|submission| pending_card_html(submission, currency))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn chat_html(messages: &[ChatMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let _ = writeln!(
            out,
            r#"<div class="property-chat-message {}"><p>{}</p></div>"#,
            message.direction.as_str(),
            escape(&message.text)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::card::selector;
    use crate::workflow::sample_submissions;
    use scraper::Html;

    #[test]
    fn grid_has_one_card_per_submission() {
        let html = pending_grid_html(&sample_submissions(), "JOD");
        let doc = Html::parse_fragment(&html);
        let cards: Vec<_> = doc
            .select(&selector(".pending-property-card").unwrap())
            .filter_map(|el| el.value().attr("data-property-id"))
            .collect();
        assert_eq!(cards, vec!["pending_1", "pending_2", "pending_3"]);
    }

    #[test]
    fn fee_label_uses_two_decimals_and_currency() {
        let html = pending_card_html(&sample_submissions()[1], "JOD");
        let doc = Html::parse_fragment(&html);
        let label: String = doc
            .select(&selector(".pending-property-fee-amount").unwrap())
            .next()
            .unwrap()
            .text()
            .collect();
        assert_eq!(label, "20.00 JOD");
    }

    #[test]
    fn markup_in_fields_is_escaped() {
        let mut submission = sample_submissions().remove(0);
        submission.title = "<script>alert(1)</script>".to_string();
        let html = pending_card_html(&submission, "JOD");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn chat_messages_carry_direction_class() {
        let messages = vec![
            ChatMessage::sent("Hi", "lina"),
            ChatMessage::received("Hello", "Owner"),
        ];
        let html = chat_html(&messages);
        let doc = Html::parse_fragment(&html);
        let sent = doc
            .select(&selector(".property-chat-message.sent p").unwrap())
            .count();
        let received = doc
            .select(&selector(".property-chat-message.received p").unwrap())
            .count();
        assert_eq!((sent, received), (1, 1));
    }
}
