use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies one run of a session. The generation is bumped on every start,
/// reset and menu return, so work scheduled against an older run can be told apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionStamp {
    pub session_id: SessionId,
    pub generation: u64,
}

impl SessionStamp {
    pub fn new(session_id: SessionId, generation: u64) -> Self {
        Self {
            session_id,
            generation,
        }
    }
}

impl fmt::Display for SessionStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.session_id, self.generation)
    }
}
