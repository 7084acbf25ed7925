//! Access decisions for role-gated views.

use crate::model::{LOGIN_PATH, Role, Session, SessionSnapshot};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Any signed-in viewer.
    Authenticated,
    /// Only sessions holding exactly this role.
    Role(Role),
}

impl Requirement {
    pub fn accepts(&self, session: &Session) -> bool {
        match self {
            Requirement::Authenticated => true,
            Requirement::Role(role) => session.role == *role,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    /// The session store is still busy; show a placeholder and do nothing.
    Loading,
    Redirect(&'static str),
    Granted(Session),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGuard {
    requirement: Requirement,
}

impl RoleGuard {
    pub fn new(requirement: Requirement) -> Self {
        Self { requirement }
    }

    pub fn role(role: Role) -> Self {
        Self::new(Requirement::Role(role))
    }

    pub fn authenticated() -> Self {
        Self::new(Requirement::Authenticated)
    }

    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    pub fn evaluate(&self, snapshot: &SessionSnapshot) -> Access {
        if snapshot.is_loading() {
            return Access::Loading;
        }

        match &snapshot.user {
            Some(session) if self.requirement.accepts(session) => {
                Access::Granted(session.clone())
            }
            _ => Access::Redirect(LOGIN_PATH),
        }
    }

    /// Waits for the store to stop loading, then decides.
    ///
    /// If the sender is gone the last published snapshot is used as is.
    pub async fn settle(&self, rx: &mut watch::Receiver<SessionSnapshot>) -> Access {
        let settled = rx
            .wait_for(|snapshot| !snapshot.is_loading())
            .await
            .map(|snapshot| self.evaluate(&snapshot));

        match settled {
            Ok(access) => access,
            Err(_) => self.evaluate(&rx.borrow()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::StaticCredential;

    fn signed_in(session: Session) -> SessionSnapshot {
        let mut snapshot = SessionSnapshot::default();
        snapshot.user = Some(session);
        snapshot
    }

    #[test]
    fn admin_view_rejects_members_and_accepts_admins() {
        let guard = RoleGuard::role(Role::Admin);

        assert_eq!(
            guard.evaluate(&signed_in(StaticCredential::member().session())),
            Access::Redirect("/login")
        );

        let admin = StaticCredential::admin().session();
        assert_eq!(
            guard.evaluate(&signed_in(admin.clone())),
            Access::Granted(admin)
        );
    }

    #[test]
    fn signed_out_viewers_are_sent_to_login() {
        let snapshot = SessionSnapshot::default();

        assert_eq!(
            RoleGuard::authenticated().evaluate(&snapshot),
            Access::Redirect(LOGIN_PATH)
        );
        assert_eq!(
            RoleGuard::role(Role::Institution).evaluate(&snapshot),
            Access::Redirect(LOGIN_PATH)
        );
    }

    #[test]
    fn loading_takes_precedence() {
        let mut snapshot = signed_in(StaticCredential::admin().session());
        snapshot.begin();

        assert_eq!(RoleGuard::role(Role::Admin).evaluate(&snapshot), Access::Loading);
    }

    #[test]
    fn dashboard_accepts_any_role() {
        let guard = RoleGuard::authenticated();

        for session in [
            StaticCredential::member().session(),
            StaticCredential::institution().session(),
            StaticCredential::admin().session(),
        ] {
            assert!(matches!(
                guard.evaluate(&signed_in(session)),
                Access::Granted(_)
            ));
        }
    }

    #[tokio::test]
    async fn settle_re_evaluates_once_loading_ends() {
        let (tx, mut rx) = watch::channel(SessionSnapshot::restoring());
        let guard = RoleGuard::role(Role::Institution);

        assert_eq!(guard.evaluate(&rx.borrow()), Access::Loading);

        let institution = StaticCredential::institution().session();
        let pending = tokio::spawn(async move { guard.settle(&mut rx).await });

        tx.send_modify(|snapshot| {
            snapshot.user = Some(institution.clone());
            snapshot.finish();
        });

        assert_eq!(pending.await.unwrap(), Access::Granted(institution));
    }
}
