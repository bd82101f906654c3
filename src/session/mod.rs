pub mod layout;

pub use layout::{DashboardLayout, Section};

use tracing::{info, warn};

use crate::error::{DeskError, DeskResult};
use crate::models::{Role, UserProfile};
use crate::notify::Notification;
use crate::store::{DeskStore, KeyValueStore};

/// Details collected by the sign-up form
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
}

/// Mock sign-in against the session store. No credentials are checked.
pub struct Sessions<'a, S: KeyValueStore> {
    store: &'a mut DeskStore<S>,
}

impl<'a, S: KeyValueStore> Sessions<'a, S> {
    pub fn new(store: &'a mut DeskStore<S>) -> Self {
        Self { store }
    }

    /// Any non-empty email and password pair is accepted. The display name is
    /// the part of the email before `@`; no role is recorded.
    pub fn login(&mut self, email: &str, password: &str) -> DeskResult<UserProfile> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(DeskError::InvalidCredentials);
        }

        let name = email.split('@').next().unwrap_or(email).to_string();
        let user = UserProfile {
            name,
            email: email.to_string(),
            phone: None,
            role: None,
            logged_in: true,
        };
        self.store.set_current_user(&user)?;
        info!("👋 {} logged in", user.email);
        Ok(user)
    }

    pub fn register(&mut self, registration: Registration) -> DeskResult<UserProfile> {
        let user = UserProfile {
            name: registration.name.trim().to_string(),
            email: registration.email.trim().to_string(),
            phone: registration.phone.filter(|p| !p.trim().is_empty()),
            role: Some(registration.role),
            logged_in: true,
        };
        self.store.set_current_user(&user)?;
        info!("🎉 Registered {} as {}", user.email, registration.role);
        Ok(user)
    }

    /// Ends the session, returning whoever was signed in.
    pub fn logout(&mut self) -> DeskResult<Option<UserProfile>> {
        let user = self.store.current_user()?;
        self.store.clear_current_user()?;
        if let Some(user) = &user {
            info!("{} logged out", user.email);
        }
        Ok(user)
    }

    pub fn current(&self) -> DeskResult<Option<UserProfile>> {
        Ok(self.store.current_user()?)
    }

    /// Layout for the signed-in role; the buyer layout when nobody is signed in.
    pub fn layout(&self) -> DeskResult<DashboardLayout> {
        let role = self
            .current()?
            .map(|user| user.role())
            .unwrap_or_default();
        Ok(DashboardLayout::for_role(role))
    }

    /// Refuses unless the signed-in user sees the approval queue.
    pub fn require_agent(&self) -> DeskResult<()> {
        let layout = self.layout()?;
        if !layout.can_approve() {
            warn!("Approval queue refused for {}", layout.role);
            return Err(DeskError::NotAgent { role: layout.role });
        }
        Ok(())
    }
}

pub fn login_notification() -> Notification {
    Notification::success("Logged in successfully! Redirecting... 👋")
}

pub fn register_notification() -> Notification {
    Notification::success("Your account was created! Redirecting... 🎉")
}

pub fn logout_notification() -> Notification {
    Notification::success("Logged out successfully 👋")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn store() -> DeskStore<MemoryStore> {
        DeskStore::new(MemoryStore::new(), MemoryStore::new())
    }

    #[test]
    fn login_derives_name_from_email() {
        let mut store = store();
        let user = Sessions::new(&mut store)
            .login("test@yahoo.com", "test")
            .unwrap();
        assert_eq!(user.name, "test");
        assert!(user.logged_in);
        assert_eq!(user.role(), Role::Buyer);
        assert_eq!(store.current_user().unwrap(), Some(user));
    }

    #[test]
    fn blank_credentials_are_refused() {
        let mut store = store();
        let mut sessions = Sessions::new(&mut store);
        assert!(matches!(
            sessions.login("  ", "secret"),
            Err(DeskError::InvalidCredentials)
        ));
        assert!(matches!(
            sessions.login("a@b.c", ""),
            Err(DeskError::InvalidCredentials)
        ));
        assert_eq!(sessions.current().unwrap(), None);
    }

    #[test]
    fn registered_agent_gets_agent_layout() {
        let mut store = store();
        let mut sessions = Sessions::new(&mut store);
        sessions
            .register(Registration {
                name: "Rami".to_string(),
                email: "rami@example.com".to_string(),
                phone: Some(String::new()),
                role: Role::Agent,
            })
            .unwrap();

        let user = sessions.current().unwrap().unwrap();
        assert_eq!(user.phone, None);
        assert!(sessions.layout().unwrap().can_approve());
    }

    #[test]
    fn logout_falls_back_to_buyer_layout() {
        let mut store = store();
        let mut sessions = Sessions::new(&mut store);
        sessions
            .register(Registration {
                name: "Huda".to_string(),
                email: "huda@example.com".to_string(),
                phone: None,
                role: Role::Owner,
            })
            .unwrap();
        assert_eq!(sessions.layout().unwrap().role, Role::Owner);

        let gone = sessions.logout().unwrap();
        assert_eq!(gone.map(|u| u.name), Some("Huda".to_string()));
        assert_eq!(sessions.layout().unwrap().role, Role::Buyer);
        assert_eq!(sessions.logout().unwrap(), None);
    }

    fn register_as(store: &mut DeskStore<MemoryStore>, role: Role) {
        Sessions::new(store)
            .register(Registration {
                name: "Lina".to_string(),
                email: "lina@example.com".to_string(),
                phone: None,
                role,
            })
            .unwrap();
    }

    #[test]
    fn only_agents_pass_the_approval_gate() {
        let mut store = store();
        assert!(matches!(
            Sessions::new(&mut store).require_agent(),
            Err(DeskError::NotAgent { role: Role::Buyer })
        ));

        register_as(&mut store, Role::Buyer);
        assert!(matches!(
            Sessions::new(&mut store).require_agent(),
            Err(DeskError::NotAgent { role: Role::Buyer })
        ));

        register_as(&mut store, Role::Owner);
        assert!(matches!(
            Sessions::new(&mut store).require_agent(),
            Err(DeskError::NotAgent { role: Role::Owner })
        ));

        register_as(&mut store, Role::Agent);
        assert!(Sessions::new(&mut store).require_agent().is_ok());
    }

    #[test]
    fn plain_login_is_not_an_agent() {
        let mut store = store();
        let mut sessions = Sessions::new(&mut store);
        sessions.login("agent@example.com", "pw").unwrap();
        assert!(matches!(
            sessions.require_agent(),
            Err(DeskError::NotAgent { role: Role::Buyer })
        ));
    }
}
