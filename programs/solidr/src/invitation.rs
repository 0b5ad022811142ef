use std::str::FromStr;

use anchor_lang::{prelude::*, solana_program::hash::hash};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::SolidrError;

/// Content of an invitation link shared by a session admin.
///
/// Only its SHA-256 is stored on chain. The token itself travels off chain as
/// base64 over a JSON array `["<session_id>", "<nonce>", "<admin>"]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvitationToken {
    pub session_id: u64,
    pub nonce: String,
    pub admin: Pubkey,
}

impl InvitationToken {
    pub fn new(session_id: u64, nonce: impl Into<String>, admin: Pubkey) -> Self {
        Self {
            session_id,
            nonce: nonce.into(),
            admin,
        }
    }

    /// Client-side helper: builds the link text whose `hash` the admin commits.
    /// Instructions never decode tokens, they only compare hashes.
    pub fn encode(&self) -> Result<String> {
        let payload = [
            self.session_id.to_string(),
            self.nonce.clone(),
            self.admin.to_string(),
        ];
        let json =
            serde_json::to_vec(&payload).map_err(|_| SolidrError::MalformedInvitationToken)?;
        Ok(STANDARD.encode(json))
    }

    /// Client-side helper, the inverse of `encode`
    pub fn decode(token: &str) -> Result<Self> {
        let json = STANDARD
            .decode(token)
            .map_err(|_| SolidrError::MalformedInvitationToken)?;
        let [session_id, nonce, admin]: [String; 3] =
            serde_json::from_slice(&json).map_err(|_| SolidrError::MalformedInvitationToken)?;

        Ok(Self {
            session_id: session_id
                .parse()
                .map_err(|_| SolidrError::MalformedInvitationToken)?,
            nonce,
            admin: Pubkey::from_str(&admin).map_err(|_| SolidrError::MalformedInvitationToken)?,
        })
    }

    /// Commitment stored in `SessionAccount::invitation_hash`
    pub fn hash(token: &str) -> [u8; 32] {
        hash(token.as_bytes()).to_bytes()
    }
}
