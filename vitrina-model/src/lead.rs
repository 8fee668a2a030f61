//! Lead-generation channels: the external destinations a visitor is handed
//! off to (dialer, WhatsApp chat, mail client, map search).

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ModelError, Result};

const WHATSAPP_BASE: &str = "https://wa.me/";
const MAP_SEARCH_BASE: &str = "https://www.google.com/maps/search/";

/// An external channel a call-to-action can route to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadChannel {
    Phone { number: String },
    WhatsApp { number: String, message: Option<String> },
    Email { address: String },
    Map { query: String },
}

impl LeadChannel {
    /// Resolve the channel to the URL the browser should open.
    pub fn url(&self) -> Result<Url> {
        match self {
            LeadChannel::Phone { number } => {
                let dialable = dialable(number)?;
                Ok(Url::parse(&format!("tel:{dialable}"))?)
            }
            LeadChannel::WhatsApp { number, message } => {
                // wa.me wants the international number without '+'
                let digits: String =
                    dialable(number)?.chars().filter(char::is_ascii_digit).collect();
                let mut url = Url::parse(WHATSAPP_BASE)?.join(&digits)?;
                if let Some(text) = message.as_deref().filter(|m| !m.is_empty()) {
                    url.query_pairs_mut().append_pair("text", text);
                }
                Ok(url)
            }
            LeadChannel::Email { address } => {
                let address = address.trim();
                let valid = address
                    .split_once('@')
                    .is_some_and(|(user, host)| !user.is_empty() && host.contains('.'));
                if !valid {
                    return Err(ModelError::InvalidEmail(address.to_string()));
                }
                Ok(Url::parse(&format!("mailto:{address}"))?)
            }
            LeadChannel::Map { query } => {
                let mut url = Url::parse(MAP_SEARCH_BASE)?;
                url.query_pairs_mut()
                    .append_pair("api", "1")
                    .append_pair("query", query.trim());
                Ok(url)
            }
        }
    }
}

/// Strip formatting from a phone number, keeping a leading '+'.
fn dialable(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    let allowed = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')' | '.'));
    if digits.len() < 6 || !allowed {
        return Err(ModelError::InvalidPhone(raw.to_string()));
    }
    if trimmed.starts_with('+') {
        Ok(format!("+{digits}"))
    } else {
        Ok(digits)
    }
}

/// Showroom contact block, usually read from the site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub phone: String,
    /// Defaults to `phone` when the WhatsApp line is the same number.
    #[serde(default)]
    pub whatsapp: Option<String>,
    pub email: String,
    pub address: String,
}

impl ContactDetails {
    /// Every channel in display order.
    pub fn channels(&self) -> Vec<LeadChannel> {
        vec![
            LeadChannel::Phone {
                number: self.phone.clone(),
            },
            LeadChannel::WhatsApp {
                number: self.whatsapp.clone().unwrap_or_else(|| self.phone.clone()),
                message: None,
            },
            LeadChannel::Email {
                address: self.email.clone(),
            },
            LeadChannel::Map {
                query: self.address.clone(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_keeps_plus_and_drops_formatting() {
        let url = LeadChannel::Phone {
            number: "+40 775 319 975".into(),
        }
        .url()
        .unwrap();
        assert_eq!(url.as_str(), "tel:+40775319975");
    }

    #[test]
    fn whatsapp_encodes_message() {
        let url = LeadChannel::WhatsApp {
            number: "+40775319975".into(),
            message: Some("Bună ziua, aș dori o ofertă".into()),
        }
        .url()
        .unwrap();
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/40775319975");
        let text = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned());
        assert_eq!(text.as_deref(), Some("Bună ziua, aș dori o ofertă"));
    }

    #[test]
    fn rejects_garbage_numbers_and_addresses() {
        assert!(matches!(
            LeadChannel::Phone { number: "call me".into() }.url(),
            Err(ModelError::InvalidPhone(_))
        ));
        assert!(matches!(
            LeadChannel::Email { address: "nobody".into() }.url(),
            Err(ModelError::InvalidEmail(_))
        ));
    }

    #[test]
    fn map_query_is_encoded() {
        let url = LeadChannel::Map {
            query: "Calea Ferentari 23, București".into(),
        }
        .url()
        .unwrap();
        let query: Vec<_> = url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
        assert_eq!(query[1], ("query".to_string(), "Calea Ferentari 23, București".to_string()));
    }

    #[test]
    fn whatsapp_falls_back_to_phone() {
        let contact = ContactDetails {
            phone: "+40775319975".into(),
            whatsapp: None,
            email: "showroom@example.ro".into(),
            address: "Calea Ferentari 23".into(),
        };
        let channels = contact.channels();
        assert_eq!(channels.len(), 4);
        assert!(channels.iter().all(|channel| channel.url().is_ok()));
    }
}
