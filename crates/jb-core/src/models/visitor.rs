use crate::User;

/// Who is using the client right now.
///
/// `Anonymous` is an ordinary outcome of resolving identity, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Visitor {
    #[default]
    Anonymous,
    SignedIn(User),
}

impl Visitor {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::SignedIn(user) => Some(user),
        }
    }

    pub fn into_user(self) -> Option<User> {
        match self {
            Self::Anonymous => None,
            Self::SignedIn(user) => Some(user),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }
}

impl From<Option<User>> for Visitor {
    fn from(user: Option<User>) -> Self {
        user.map_or(Self::Anonymous, Self::SignedIn)
    }
}
