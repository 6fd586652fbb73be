use super::*;

/// Which side of the connection owns a signal's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignalDirection {
    /// Local values are pushed out, remote writes are never applied
    ReadOnly,
    /// Whichever side wrote last wins
    #[default]
    ReadWrite,
    /// Remote values are always applied, local values are never pushed
    WriteOnly,
}

impl SignalDirection {
    pub fn transport_direction(&self) -> TransportDirection {
        match self {
            Self::ReadOnly => TransportDirection::Outgoing,
            Self::ReadWrite | Self::WriteOnly => TransportDirection::Incoming,
        }
    }
}

impl fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ReadOnly => "read only",
            Self::ReadWrite => "read/write",
            Self::WriteOnly => "write only",
        };
        write!(f, "{}", name)
    }
}
