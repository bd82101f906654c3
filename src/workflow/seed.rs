use crate::models::{Money, PendingSubmission};

/// Demo submissions placed in an agent's queue the first time it is opened
pub fn sample_submissions() -> Vec<PendingSubmission> {
    vec![
        PendingSubmission {
            id: "pending_1".to_string(),
            title: "Luxury apartment in Amman".to_string(),
            location: "Al-Jubeiha, Amman".to_string(),
            price: "150,000 JOD".to_string(),
            property_type: "Apartment".to_string(),
            rooms: 3,
            baths: 2,
            area: 150,
            owner: "Mohammad Ahmad".to_string(),
            fee: Money::from_cents(15_50),
        },
        PendingSubmission {
            id: "pending_2".to_string(),
            title: "Modern villa in Abdoun".to_string(),
            location: "Abdoun, Amman".to_string(),
            price: "200,000 JOD".to_string(),
            property_type: "House".to_string(),
            rooms: 4,
            baths: 3,
            area: 250,
            owner: "Ahmad Khaled".to_string(),
            fee: Money::from_cents(20_00),
        },
        PendingSubmission {
            id: "pending_3".to_string(),
            title: "3-bedroom apartment".to_string(),
            location: "Al-Rusaifa, Amman".to_string(),
            price: "120,000 JOD".to_string(),
            property_type: "Apartment".to_string(),
            rooms: 3,
            baths: 2,
            area: 130,
            owner: "Khaled Mohammad".to_string(),
            fee: Money::from_cents(12_00),
        },
    ]
}
