//! Caller identity extracted from the voice platform.

use serde::{Deserialize, Serialize};

/// Placeholder phone value when no SIP participant is present.
pub const UNKNOWN_PHONE: &str = "unknown";

/// Identity prefix the telephony bridge assigns to SIP participants.
const SIP_IDENTITY_PREFIX: &str = "sip_";

/// Identity of the current call, used when escalating to a supervisor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallInfo {
    /// Caller phone number, or `"unknown"`
    pub customer_phone: String,

    /// Platform room name identifying the call
    pub call_id: String,
}

impl CallInfo {
    /// Build call info for a room with no identified caller.
    pub fn unknown_caller(call_id: impl Into<String>) -> Self {
        Self {
            customer_phone: UNKNOWN_PHONE.to_string(),
            call_id: call_id.into(),
        }
    }

    /// Extract a phone number from a SIP participant identity.
    ///
    /// Returns `None` for non-SIP identities. A SIP identity with nothing
    /// after the prefix yields `"unknown"`.
    pub fn phone_from_identity(identity: &str) -> Option<String> {
        let rest = identity.strip_prefix(SIP_IDENTITY_PREFIX)?;
        if rest.is_empty() {
            Some(UNKNOWN_PHONE.to_string())
        } else {
            Some(rest.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_extracted_from_sip_identity() {
        assert_eq!(
            CallInfo::phone_from_identity("sip_+15551234567").as_deref(),
            Some("+15551234567")
        );
    }

    #[test]
    fn empty_sip_identity_falls_back_to_unknown() {
        assert_eq!(
            CallInfo::phone_from_identity("sip_").as_deref(),
            Some(UNKNOWN_PHONE)
        );
    }

    #[test]
    fn non_sip_identities_are_skipped() {
        assert_eq!(CallInfo::phone_from_identity("agent-7f3a"), None);
        assert_eq!(CallInfo::phone_from_identity(""), None);
    }

    #[test]
    fn unknown_caller_defaults_phone() {
        let info = CallInfo::unknown_caller("room-42");
        assert_eq!(info.customer_phone, UNKNOWN_PHONE);
        assert_eq!(info.call_id, "room-42");
    }
}
