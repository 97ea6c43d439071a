use crate::config::LiveKitConfig;
use crate::error::VoiceError;
use async_trait::async_trait;
use frontdesk_core::CallInfo;
use frontdesk_tools::CallControl;
use livekit_api::services::room::RoomClient;
use tracing::info;

/// Server-side room operations: hanging up a call and identifying the
/// caller from the room's SIP participant.
pub struct RoomService {
    room_client: RoomClient,
}

impl RoomService {
    /// Create a room service from connection settings.
    pub fn new(config: &LiveKitConfig) -> Result<Self, VoiceError> {
        if !config.is_configured() {
            return Err(VoiceError::Config(
                "LiveKit server URL is not set".to_string(),
            ));
        }

        Ok(Self {
            room_client: RoomClient::with_api_key(
                &config.url,
                &config.api_key,
                &config.api_secret,
            ),
        })
    }

    /// End a call by deleting its room; the platform disconnects every
    /// participant.
    pub async fn end_call(&self, room_name: &str) -> Result<(), VoiceError> {
        self.room_client
            .delete_room(room_name)
            .await
            .map_err(|e| VoiceError::RoomService(e.to_string()))?;

        info!("deleted room {room_name}");
        Ok(())
    }

    /// Identify the caller of a room from its SIP participant. Rooms
    /// without one (web calls, tests) get an unknown caller.
    pub async fn caller_info(&self, room_name: &str) -> Result<CallInfo, VoiceError> {
        let participants = self
            .room_client
            .list_participants(room_name)
            .await
            .map_err(|e| VoiceError::RoomService(e.to_string()))?;

        Ok(caller_from_identities(
            room_name,
            participants.iter().map(|p| p.identity.as_str()),
        ))
    }
}

/// Derive caller info from participant identities; the first SIP identity
/// wins.
fn caller_from_identities<'a>(
    room_name: &str,
    identities: impl Iterator<Item = &'a str>,
) -> CallInfo {
    for identity in identities {
        if let Some(phone) = CallInfo::phone_from_identity(identity) {
            return CallInfo {
                customer_phone: phone,
                call_id: room_name.to_string(),
            };
        }
    }

    CallInfo::unknown_caller(room_name)
}

#[async_trait]
impl CallControl for RoomService {
    async fn end(&self, call_id: &str) -> Result<(), anyhow::Error> {
        self.end_call(call_id).await?;
        Ok(())
    }
}
