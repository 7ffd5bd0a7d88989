use std::{error, fmt};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionError {
    TooManyParticipants { count: usize },
    NotEnoughParticipants { count: usize },
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RegistryError {
    UnknownGame(String),
    Session(SessionError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::TooManyParticipants { count } => {
                write!(f, "too many participants ({count}); exactly two players are allowed")
            }
            SessionError::NotEnoughParticipants { .. } => {
                write!(f, "at least two participants are required; minimum two players")
            }
        }
    }
}

impl error::Error for SessionError {}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownGame(key) => write!(f, "unknown game '{key}'"),
            RegistryError::Session(err) => write!(f, "cannot start game: {err}"),
        }
    }
}

impl error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            RegistryError::UnknownGame(_) => None,
            RegistryError::Session(err) => Some(err),
        }
    }
}

impl From<SessionError> for RegistryError {
    fn from(err: SessionError) -> Self { RegistryError::Session(err) }
}
