use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::StoreError;
use crate::models::{ApprovedSubmission, ChatMessage, Money, PendingSubmission, UserProfile};
use crate::store::traits::KeyValueStore;

pub const CURRENT_USER_KEY: &str = "currentUser";
pub const BALANCE_KEY: &str = "agentBalance";
pub const PENDING_KEY: &str = "pendingProperties";
pub const APPROVED_KEY: &str = "approvedProperties";
const MESSAGES_KEY_PREFIX: &str = "property_messages_";

/// Default balance handed to an agent whose ledger was never written
pub const OPENING_BALANCE: Money = Money::from_cents(500_00);

pub fn messages_key(property_id: &str) -> String {
    format!("{MESSAGES_KEY_PREFIX}{property_id}")
}

/// Typed view over the session and profile stores.
///
/// Every entity has one accessor pair; values are JSON-encoded except the
/// balance, which is a bare decimal string.
pub struct DeskStore<S: KeyValueStore> {
    session: S,
    profile: S,
    opening_balance: Money,
}

impl<S: KeyValueStore> DeskStore<S> {
    pub fn new(session: S, profile: S) -> Self {
        Self::with_opening_balance(session, profile, OPENING_BALANCE)
    }

    pub fn with_opening_balance(session: S, profile: S, opening_balance: Money) -> Self {
        Self {
            session,
            profile,
            opening_balance,
        }
    }

    pub fn profile(&self) -> &S {
        &self.profile
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    pub fn profile_mut(&mut self) -> &mut S {
        &mut self.profile
    }

    // Session scope

    pub fn current_user(&self) -> Result<Option<UserProfile>, StoreError> {
        read_json(&self.session, CURRENT_USER_KEY)
    }

    pub fn set_current_user(&mut self, user: &UserProfile) -> Result<(), StoreError> {
        write_json(&mut self.session, CURRENT_USER_KEY, user)
    }

    pub fn clear_current_user(&mut self) -> Result<(), StoreError> {
        self.session.remove(CURRENT_USER_KEY)
    }

    // Profile scope

    pub fn balance(&self) -> Result<Money, StoreError> {
        match self.profile.get(BALANCE_KEY)? {
            Some(raw) => raw.parse().map_err(|_| StoreError::InvalidAmount {
                key: BALANCE_KEY.to_string(),
                value: raw,
            }),
            None => Ok(self.opening_balance),
        }
    }

    pub fn set_balance(&mut self, balance: Money) -> Result<(), StoreError> {
        debug!("Ledger balance set to {}", balance);
        self.profile.set(BALANCE_KEY, balance.to_string())
    }

    pub fn pending(&self) -> Result<Vec<PendingSubmission>, StoreError> {
        Ok(read_json(&self.profile, PENDING_KEY)?.unwrap_or_default())
    }

    pub fn set_pending(&mut self, pending: &[PendingSubmission]) -> Result<(), StoreError> {
        write_json(&mut self.profile, PENDING_KEY, &pending)
    }

    pub fn approved(&self) -> Result<Vec<ApprovedSubmission>, StoreError> {
        Ok(read_json(&self.profile, APPROVED_KEY)?.unwrap_or_default())
    }

    pub fn push_approved(&mut self, record: ApprovedSubmission) -> Result<(), StoreError> {
        let mut approved = self.approved()?;
        approved.push(record);
        write_json(&mut self.profile, APPROVED_KEY, &approved)
    }

    pub fn messages(&self, property_id: &str) -> Result<Vec<ChatMessage>, StoreError> {
        Ok(read_json(&self.profile, &messages_key(property_id))?.unwrap_or_default())
    }

    pub fn append_message(
        &mut self,
        property_id: &str,
        message: ChatMessage,
    ) -> Result<(), StoreError> {
        let key = messages_key(property_id);
        let mut messages: Vec<ChatMessage> = read_json(&self.profile, &key)?.unwrap_or_default();
        messages.push(message);
        write_json(&mut self.profile, &key, &messages)
    }
}

fn read_json<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    store
        .get(key)?
        .map(|raw| {
            serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
                key: key.to_string(),
                source,
            })
        })
        .transpose()
}

fn write_json<T: Serialize + ?Sized>(
    store: &mut impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Malformed {
        key: key.to_string(),
        source,
    })?;
    store.set(key, raw)
}
